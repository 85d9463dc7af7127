//! Hardware abstraction traits

pub mod display;

pub use display::{CharacterDisplay, DisplayExt};
