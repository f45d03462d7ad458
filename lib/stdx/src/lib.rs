pub mod iter;
mod macros;
pub mod pretty;
