pub mod core;
pub mod grid;
pub mod paint;
pub mod host;
