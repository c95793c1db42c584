//! Generic 2D coordinates and small geometric queries.
//!
//! Layout
//! - `coord`: the `Coord<T>` value type (construction, operators, text form).
//! - `num`: the component bound `CoordNum` and magnitude helpers.
//! - `sqrt`: exact and fast-approximate square-root strategies.
//! - `plane`: distance, Manhattan distance, slope, triangle area, circumradius.
//!
//! ```
//! use coord2::{Coord, Plane};
//!
//! let a = Coord::new(0i32, 0);
//! let b = Coord::new(4i32, 0);
//! let c = Coord::new(0i32, 3);
//! let p = Plane::new();
//! assert_eq!(p.triangle_area(&a, &b, &c), 6.0);
//! assert_eq!(p.try_circumradius(&a, &b, &c), Ok(2.5));
//! ```

pub mod coord;
pub mod num;
pub mod plane;
pub mod sqrt;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use coord::{Coord, ParseCoordError};
pub use num::{abs_diff, absolute, signed_diff, CoordNum};
pub use plane::{Diagnostics, GeomError, Plane, PlaneCfg};
pub use sqrt::{Exact, Fast, SqrtStrategy, Strategy};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::coord::Coord;
    pub use crate::plane::{Diagnostics, GeomError, Plane, PlaneCfg};
    pub use crate::sqrt::{Exact, Fast, SqrtStrategy, Strategy};
}
