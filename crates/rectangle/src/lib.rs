//! Rectangle value object and its dimension walk.
//!
//! A `Rectangle` holds two integer dimensions and hands them out, in fixed
//! order, as single-key mappings (`Dimension`). Nothing is validated: zero and
//! negative values are stored and reported as given.
//!
//! Code cross-refs: `rect::Rectangle`, `rect::Dimensions`, `dimension::Dimension`

pub mod dimension;
pub mod rect;

pub use dimension::Dimension;
pub use rect::{Dimensions, Rectangle};
