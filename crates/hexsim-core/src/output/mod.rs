//! Output
//!
//! Text rendering of the grid and population statistics.

pub mod render;
pub mod stats;

pub use render::{render_grid, render_text, EMPTY_CELL};
pub use stats::Census;
