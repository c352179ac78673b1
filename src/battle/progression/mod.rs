pub mod calculation;
pub mod commands;

pub use calculation::*;
pub use commands::*;
