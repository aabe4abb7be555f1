pub mod cli;
pub mod config;
pub mod duration;
pub mod error;
pub mod output;
pub mod pattern;

pub use error::{AgingError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_NOT_FOUND: i32 = 1;
pub const EXIT_ERROR: i32 = 2;
