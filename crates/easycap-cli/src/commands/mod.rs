//! Command implementations

pub mod fonts;
pub mod render;
