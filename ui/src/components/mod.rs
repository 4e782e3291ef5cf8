// Reusable UI components
pub mod buttons;

pub use buttons::{Button, ConfiguredButton};
