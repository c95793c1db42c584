//! Square-root strategies: exact (`f64::sqrt`) and fast-approximate (bit trick on `f32`).
//!
//! Policy
//! - Both strategies sit behind `SqrtStrategy`; queries in `plane` are generic over it.
//! - The fast path's magic constant and refinement count are fixed tuning constants,
//!   not derived values. Two Newton steps keep relative error well under 1e-3.

/// Initial-guess constant for the bit-level inverse square root.
pub const FAST_INV_SQRT_MAGIC: u32 = 0x5f37_59df;
/// Newton–Raphson refinements applied to the initial guess.
pub const FAST_INV_SQRT_NEWTON_STEPS: usize = 2;

/// Approximate `1 / sqrt(v)` for finite `v >= 0`. Negative inputs give `NaN`.
///
/// `v == 0` yields a large finite value (not `inf`), so `v * fast_inv_sqrt(v) == 0`.
#[inline]
pub fn fast_inv_sqrt(v: f32) -> f32 {
    if v < 0.0 {
        return f32::NAN;
    }
    let half = 0.5 * v;
    let mut y = f32::from_bits(FAST_INV_SQRT_MAGIC.wrapping_sub(v.to_bits() >> 1));
    for _ in 0..FAST_INV_SQRT_NEWTON_STEPS {
        y *= 1.5 - half * y * y;
    }
    y
}

/// Approximate `sqrt(v)` as `v * fast_inv_sqrt(v)`.
#[inline]
pub fn fast_sqrt(v: f32) -> f32 {
    v * fast_inv_sqrt(v)
}

/// Interchangeable square-root implementation.
pub trait SqrtStrategy {
    fn sqrt(&self, v: f64) -> f64;

    fn inv_sqrt(&self, v: f64) -> f64 {
        1.0 / self.sqrt(v)
    }

    /// Short label used in logs and CLI output.
    fn name(&self) -> &'static str;
}

/// Standard library square root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Exact;

impl SqrtStrategy for Exact {
    #[inline]
    fn sqrt(&self, v: f64) -> f64 {
        v.sqrt()
    }
    fn name(&self) -> &'static str {
        "exact"
    }
}

/// Bit-level approximation evaluated in `f32`.
///
/// Inputs are narrowed to `f32`, so magnitudes beyond `f32::MAX` overflow to `inf`,
/// and positive values below the smallest `f32` subnormal (about 1.4e-45) underflow
/// to `0.0` and yield `0.0`. `Plane::<Fast>::distance` therefore reports `0.0` for
/// points whose squared separation is that small.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fast;

impl SqrtStrategy for Fast {
    #[inline]
    fn sqrt(&self, v: f64) -> f64 {
        f64::from(fast_sqrt(v as f32))
    }
    #[inline]
    fn inv_sqrt(&self, v: f64) -> f64 {
        f64::from(fast_inv_sqrt(v as f32))
    }
    fn name(&self) -> &'static str {
        "fast"
    }
}

/// Runtime choice between the two strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    #[default]
    Exact,
    Fast,
}

impl SqrtStrategy for Strategy {
    #[inline]
    fn sqrt(&self, v: f64) -> f64 {
        match self {
            Strategy::Exact => Exact.sqrt(v),
            Strategy::Fast => Fast.sqrt(v),
        }
    }
    #[inline]
    fn inv_sqrt(&self, v: f64) -> f64 {
        match self {
            Strategy::Exact => Exact.inv_sqrt(v),
            Strategy::Fast => Fast.inv_sqrt(v),
        }
    }
    fn name(&self) -> &'static str {
        match self {
            Strategy::Exact => Exact.name(),
            Strategy::Fast => Fast.name(),
        }
    }
}
