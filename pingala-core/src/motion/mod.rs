//! Positioning helpers that turn generator output into scene coordinates.

pub(crate) mod layout;
pub(crate) mod particles;
pub(crate) mod snake;
