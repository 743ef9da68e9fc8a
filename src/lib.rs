pub mod constraint;
pub mod error;
pub mod hierarchy;
pub mod math;
pub mod settings;

pub use constraint::{Constraint, Constraint2D, Constraint3D, Range};
pub use error::{HierarchyError, ParseError, Result};
pub use hierarchy::{Hierarchy, Hierarchy2D, Hierarchy3D, NodeBuilder, NodeConstraint, NodeId, Relation};
pub use math::{Axis, Dimensions, Transform, Transform2D, Transform3D};
pub use settings::{HierarchySettings, ParseMode};

/// Installs the `env_logger` backend; safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .try_init();
}
