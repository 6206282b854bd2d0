//! Core-Domänenmodell: Stift, Richtung, Segmente, Leinwand.

pub mod canvas;
pub mod pen;

pub use canvas::{Segment, Sketch};
pub use pen::{Direction, Pen};
