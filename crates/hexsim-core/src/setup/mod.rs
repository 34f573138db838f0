//! World Setup
//!
//! Initial population placement.

pub mod population;

pub use population::*;
