//! Geometric queries over coordinates (distance, slope, area, circumradius).
//!
//! Purpose
//! - `Plane<S>` bundles a square-root strategy with a small `PlaneCfg` and exposes
//!   every query as a pure function of two or three coordinates.
//! - Degenerate inputs have two surfaces: `try_*` returns `GeomError`; the lenient
//!   form reports through `Diagnostics` and yields the `0.0` sentinel.
//!
//! Numerics
//! - Every difference is formed in `T` (`abs_diff`, `signed_diff`) and only then
//!   widened to `f64`, so unsigned components never underflow and distinct wide
//!   integers never round to the same value.
//!
//! Code cross-refs: `coord::Coord`, `sqrt::{SqrtStrategy, Exact, Fast}`, `num::{widen, abs_diff, signed_diff}`

mod error;

pub use error::GeomError;

use crate::coord::Coord;
use crate::num::{abs_diff, signed_diff, widen, CoordNum};
use crate::sqrt::{Exact, Fast, SqrtStrategy};

/// Where lenient queries send the degenerate-geometry message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Diagnostics {
    /// The literal diagnostic line on standard output.
    #[default]
    Stdout,
    /// A `tracing` warning event.
    Log,
    Silent,
}

impl Diagnostics {
    pub fn report(self, err: &GeomError) {
        match self {
            Diagnostics::Stdout => println!("{err}"),
            Diagnostics::Log => tracing::warn!(error = %err, "degenerate geometry"),
            Diagnostics::Silent => {}
        }
    }
}

/// Query configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaneCfg {
    pub diagnostics: Diagnostics,
}

/// Geometric queries parameterized by a square-root strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct Plane<S = Exact> {
    pub sqrt: S,
    pub cfg: PlaneCfg,
}

impl Plane<Exact> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Plane<Fast> {
    pub fn fast() -> Self {
        Self::default()
    }
}

impl<S: SqrtStrategy> Plane<S> {
    pub fn with_strategy(sqrt: S) -> Self {
        Self::with_cfg(sqrt, PlaneCfg::default())
    }

    pub fn with_cfg(sqrt: S, cfg: PlaneCfg) -> Self {
        Self { sqrt, cfg }
    }

    /// Euclidean distance `sqrt(dx² + dy²)` through the configured strategy.
    pub fn distance<T: CoordNum>(&self, a: &Coord<T>, b: &Coord<T>) -> f64 {
        let dx = widen(abs_diff(a.x, b.x));
        let dy = widen(abs_diff(a.y, b.y));
        self.sqrt.sqrt(dx * dx + dy * dy)
    }

    /// `|dx| + |dy|`.
    pub fn manhattan_distance<T: CoordNum>(&self, a: &Coord<T>, b: &Coord<T>) -> f64 {
        widen(abs_diff(a.x, b.x)) + widen(abs_diff(a.y, b.y))
    }

    /// `dy / dx`; `UndefinedSlope` iff `a.x == b.x`.
    pub fn try_slope<T: CoordNum>(&self, a: &Coord<T>, b: &Coord<T>) -> Result<f64, GeomError> {
        if a.x == b.x {
            return Err(GeomError::UndefinedSlope);
        }
        let dx = signed_diff(a.x, b.x);
        let dy = signed_diff(a.y, b.y);
        Ok(dy / dx)
    }

    /// Lenient `try_slope`: a vertical line is reported and yields `0.0`.
    pub fn slope<T: CoordNum>(&self, a: &Coord<T>, b: &Coord<T>) -> f64 {
        self.lenient(self.try_slope(a, b))
    }

    /// Unsigned shoelace area. `0.0` when any two vertices coincide.
    pub fn triangle_area<T: CoordNum>(&self, a: &Coord<T>, b: &Coord<T>, c: &Coord<T>) -> f64 {
        if Coord::coincides(a, b) || Coord::coincides(a, c) || Coord::coincides(b, c) {
            return 0.0;
        }
        // Edge vectors from `a`.
        let (ux, uy) = (signed_diff(b.x, a.x), signed_diff(b.y, a.y));
        let (vx, vy) = (signed_diff(c.x, a.x), signed_diff(c.y, a.y));
        let twice = ux * vy - vx * uy;
        (twice / 2.0).abs()
    }

    /// `|AB|·|BC|·|CA| / (4·area)`; `ZeroAreaTriangle` iff the area is zero.
    pub fn try_circumradius<T: CoordNum>(
        &self,
        a: &Coord<T>,
        b: &Coord<T>,
        c: &Coord<T>,
    ) -> Result<f64, GeomError> {
        let area = self.triangle_area(a, b, c);
        if area == 0.0 {
            return Err(GeomError::ZeroAreaTriangle);
        }
        let sides = self.distance(a, b) * self.distance(b, c) * self.distance(c, a);
        Ok(sides / 4.0 / area)
    }

    /// Lenient `try_circumradius`: a zero-area triangle is reported and yields `0.0`.
    pub fn circumradius<T: CoordNum>(&self, a: &Coord<T>, b: &Coord<T>, c: &Coord<T>) -> f64 {
        self.lenient(self.try_circumradius(a, b, c))
    }

    fn lenient(&self, res: Result<f64, GeomError>) -> f64 {
        res.unwrap_or_else(|err| {
            self.cfg.diagnostics.report(&err);
            0.0
        })
    }
}

/// Shorthands over `Plane::<Exact>::default()`.
impl<T: CoordNum> Coord<T> {
    pub fn distance(&self, other: &Self) -> f64 {
        Plane::new().distance(self, other)
    }

    pub fn manhattan_distance(&self, other: &Self) -> f64 {
        Plane::new().manhattan_distance(self, other)
    }

    pub fn slope(&self, other: &Self) -> f64 {
        Plane::new().slope(self, other)
    }
}
