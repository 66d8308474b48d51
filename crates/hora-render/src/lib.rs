//! SVG rendering of Roman hour clock faces.
//!
//! Turns a [`TimePartition`](hora_types::TimePartition) into a standalone
//! SVG document: three concentric rings of annular sectors (unequal hours,
//! night vigils and day quarters) with curved labels, plus 24 fixed clock
//! ticks inside the hour ring.
//!
//! - [`layout`] -- ring radii as fractions of the chart size
//! - [`geometry`] -- sector and label-baseline path construction
//! - [`svg`] -- the document writer

pub mod error;
pub mod geometry;
pub mod layout;
pub mod svg;

pub use error::RenderError;
pub use layout::{ChartLayout, RingRadii};
pub use svg::{render_svg, render_to_string};
