//! Numeric bound for coordinate components.
//!
//! - `CoordNum`: what every component type must provide (all primitive ints and floats do).
//! - `widen`: component → `f64` accumulator.
//! - `abs_diff`: magnitude of a difference, valid for unsigned representations.
//! - `signed_diff`: `a - b` formed in `T`, then widened with its sign.
//! - `absolute`: plain sign flip, only reachable for signed representations.

use std::fmt::Display;

use num_traits::{Num, NumCast, Signed};

/// Component type of a [`Coord`](crate::Coord).
pub trait CoordNum: Copy + PartialOrd + Display + Num + NumCast {}

impl<T> CoordNum for T where T: Copy + PartialOrd + Display + Num + NumCast {}

/// Widen a component to the `f64` accumulator used by every geometric query.
/// Values outside the `f64` range (none for primitives) map to `NaN`.
#[inline]
pub fn widen<T: CoordNum>(v: T) -> f64 {
    <f64 as NumCast>::from(v).unwrap_or(f64::NAN)
}

/// `|a - b|` computed as `max - min`, so unsigned types never underflow.
#[inline]
pub fn abs_diff<T: CoordNum>(a: T, b: T) -> T {
    if a >= b {
        a - b
    } else {
        b - a
    }
}

/// `a - b` as `f64`. The magnitude is taken in `T` before widening, so distinct
/// wide integers (beyond 2^53) never collapse to a zero difference.
#[inline]
pub fn signed_diff<T: CoordNum>(a: T, b: T) -> f64 {
    let magnitude = widen(abs_diff(a, b));
    if a >= b {
        magnitude
    } else {
        -magnitude
    }
}

/// `v` if `v >= 0`, else `-v`.
///
/// Only defined for signed representations; use [`abs_diff`] for differences of
/// possibly unsigned components.
#[inline]
pub fn absolute<T: CoordNum + Signed>(v: T) -> T {
    if v >= T::zero() {
        v
    } else {
        -v
    }
}
