//! Domain types for LaHora.
//! Defines the instants and intervals the display widgets render.

pub mod error;
pub mod instant;
pub mod interval;

pub use error::*;
pub use instant::*;
pub use interval::*;
