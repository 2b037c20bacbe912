//! CLI command implementations

mod list;
mod menu;

pub use list::list;
pub use menu::menu;
