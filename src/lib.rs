//! Two small eframe demos sharing one crate:
//!
//! - [`particles`]: fifty circles bouncing around an 800x600 box with a naive
//!   pairwise collision response.
//! - [`plotter`]: rasterizes `y = f(x)` for a user-supplied expression onto a
//!   grid with axes and shows it until the window is closed.

pub mod error;
pub mod particles;
pub mod plotter;

pub use error::{Error, Result};
