//! The `Coord` value type: construction, conversion, rendering.
//!
//! - `Coord<T = u16>`: two public components, copy semantics, `(0, 0)` default.
//! - `convert` / `try_cast`: per-field conversion between representations.
//! - `Display`: exactly `(x, y)`.

use std::fmt;

use nalgebra::{Scalar, Vector2};
use num_traits::{AsPrimitive, NumCast};

use crate::num::CoordNum;

/// Point in the plane with components of type `T`.
///
/// The default representation is `u16`. Geometric queries never subtract unsigned
/// components directly (see [`abs_diff`](crate::num::abs_diff)), but the `-`
/// operator does, and follows Rust's overflow rules for the component type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord<T = u16> {
    pub x: T,
    pub y: T,
}

impl<T> Coord<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_tuple(self) -> (T, T) {
        (self.x, self.y)
    }
}

impl<T: PartialEq> Coord<T> {
    /// True iff both components agree. Same relation as `==`.
    #[inline]
    pub fn coincides(a: &Self, b: &Self) -> bool {
        a.x == b.x && a.y == b.y
    }
}

impl<T: Copy + 'static> Coord<T> {
    /// Per-field `as` conversion into another representation.
    ///
    /// Narrowing and widening follow the target type's own `as` rules
    /// (truncation for integers, saturation for float → integer).
    #[inline]
    pub fn convert<U>(self) -> Coord<U>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        Coord::new(self.x.as_(), self.y.as_())
    }
}

impl<T: NumCast + Copy> Coord<T> {
    /// Checked conversion; `None` if either field does not fit `U`.
    pub fn try_cast<U: NumCast>(self) -> Option<Coord<U>> {
        Some(Coord::new(U::from(self.x)?, U::from(self.y)?))
    }
}

impl<T: CoordNum> Default for Coord<T> {
    fn default() -> Self {
        Self::new(T::zero(), T::zero())
    }
}

impl<T> From<(T, T)> for Coord<T> {
    fn from(value: (T, T)) -> Self {
        Coord::new(value.0, value.1)
    }
}

impl<T> From<[T; 2]> for Coord<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Coord::new(x, y)
    }
}

impl<T: Scalar> From<Coord<T>> for Vector2<T> {
    fn from(value: Coord<T>) -> Self {
        Vector2::new(value.x, value.y)
    }
}

impl<T: Scalar> From<Vector2<T>> for Coord<T> {
    fn from(value: Vector2<T>) -> Self {
        Coord::new(value[0].clone(), value[1].clone())
    }
}

impl<T: fmt::Display> fmt::Display for Coord<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
