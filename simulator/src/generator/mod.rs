pub mod field;

pub use field::{build_target_field, TargetFieldConfig};
