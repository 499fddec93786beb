pub mod catalog;
pub mod classify;

pub use catalog::{AMAZON_BUILDER_IDS, is_composite_builder};
pub use classify::BuilderKind;
