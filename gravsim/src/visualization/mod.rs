pub mod color;
pub mod viewport;
