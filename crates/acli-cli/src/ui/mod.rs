//! Terminal output for the acli CLI
//!
//! Colors and styles are defined in one place (the theme) so every
//! command renders consistently; the table renderer backs `config list`.

mod output;
mod table;
mod theme;

pub use output::StyledOutput;
pub use table::Table;
pub use theme::{Color, Theme};
