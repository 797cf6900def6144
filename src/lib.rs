//! Backward-pass broadcast bookkeeping for the MIND runtime.
pub mod exec;
pub mod ops;
pub mod shapes;
pub mod types;

pub use shapes::grad::broadcast_gradient_axes;
