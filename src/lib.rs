//! Library catalog application
//!
//! Book and member bookkeeping plus the interactive menu that drives it.

pub mod modules;
pub mod utils;

/// Re-export commonly used types
pub use modules::*;
