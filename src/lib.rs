//! Circle geometry calculator
//!
//! Computes diameter, circumference, area, arc length and sector area for a
//! radius and a sector angle, reports each step, draws the circle outline as
//! ASCII art and plots the sector in the terminal.

pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod plot;
pub mod report;
pub mod session;

pub use cli::Args;
pub use error::{Field, InputError};
