//! 2D coordinate value type.
//!
//! Purpose
//! - One generic `Coord<T>` for every numeric representation (integral or float).
//! - Copy semantics throughout; the only mutation is the explicit in-place
//!   combination (`+=`, `-=`, `add_in_place`, `sub_in_place`).
//!
//! Code cross-refs: `num::CoordNum`, `plane::Plane` (queries over coordinates).

mod ops;
mod parse;
mod types;

pub use parse::ParseCoordError;
pub use types::Coord;
