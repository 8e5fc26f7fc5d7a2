//! Shared plumbing for the library menu: layered settings, the prompting
//! console, and the action registry the menu is assembled from.

pub mod action;
pub mod console;
pub mod registry;
pub mod settings;

pub use action::{Action, ActionCtx, FnAction};
pub use console::Console;
pub use registry::ActionRegistry;
pub use settings::Settings;
