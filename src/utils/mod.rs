pub mod marker;
pub mod signal_handling;

pub use marker::*;
