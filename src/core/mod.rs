pub mod fleet;
pub mod registry;
