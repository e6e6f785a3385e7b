//! Small numeric helpers.
//!
//! - [`add`], [`min`], [`max`]: binary functions usable as combinator
//!   arguments, such as the `on_conflict` of
//!   [`Map::upsert`](crate::containers::Map::upsert)
//! - [`gcd`], [`lcm`]: for primitive integers
//! - [`round_to_sig_figs`], [`floor_to_sig_figs`], [`ceil_to_sig_figs`]:
//!   significant-figure rounding for `f32` and `f64`
//!
//! # Examples
//!
//! ```rust
//! use satchel::math::{gcd, lcm, round_to_sig_figs};
//!
//! assert_eq!(gcd(12_u32, 18), 6);
//! assert_eq!(lcm(4_u32, 6), 12);
//! assert_eq!(round_to_sig_figs(2345.0_f64, 3), 2350.0);
//! ```

use std::ops::{Add, Div, Mul, Rem};

/// Returns `x + y`.
#[inline]
pub fn add<T: Add<Output = T>>(x: T, y: T) -> T {
    x + y
}

/// Returns the smaller of `x` and `y`; `y` when they compare equal or are
/// unordered.
#[inline]
pub fn min<T: PartialOrd>(x: T, y: T) -> T {
    if x < y { x } else { y }
}

/// Returns the larger of `x` and `y`; `y` when they compare equal or are
/// unordered.
#[inline]
pub fn max<T: PartialOrd>(x: T, y: T) -> T {
    if x > y { x } else { y }
}

// =============================================================================
// Integers
// =============================================================================

/// Primitive integer types accepted by [`gcd`] and [`lcm`].
pub trait Integer:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
{
    /// The additive identity.
    const ZERO: Self;
}

macro_rules! impl_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Integer for $ty {
                const ZERO: Self = 0;
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Greatest common divisor by the Euclidean algorithm.
///
/// Intended for positive inputs. `gcd(a, 0)` is `a`.
pub fn gcd<T: Integer>(mut a: T, mut b: T) -> T {
    while b > T::ZERO {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// Least common multiple. Intended for positive inputs.
///
/// # Panics
///
/// Panics on division by zero if both inputs are zero.
pub fn lcm<T: Integer>(a: T, b: T) -> T {
    a * (b / gcd(a, b))
}

// =============================================================================
// Significant Figures
// =============================================================================

/// Floating-point types that can be rounded to significant figures.
///
/// All three operations compute in `f64`. Zero maps to zero. NaN and the
/// infinities pass through unchanged, as does any value whose scale factor
/// for `figures` over- or underflows `f64`.
pub trait SignificantFigures: Copy {
    /// Rounds to `figures` significant figures, halves away from zero.
    #[must_use]
    fn round_to_sig_figs(self, figures: i32) -> Self;

    /// Rounds toward negative infinity at `figures` significant figures.
    #[must_use]
    fn floor_to_sig_figs(self, figures: i32) -> Self;

    /// Rounds toward positive infinity at `figures` significant figures.
    #[must_use]
    fn ceil_to_sig_figs(self, figures: i32) -> Self;
}

/// The factor that moves the `figures`-th significant digit of `value` to
/// the units place.
fn sig_figs_scale(value: f64, figures: i32) -> f64 {
    // log10 of a finite non-zero f64 lies within +/-324.
    #[allow(clippy::cast_possible_truncation)]
    let magnitude = value.abs().log10().ceil() as i32;
    10_f64.powi(figures.saturating_sub(magnitude))
}

macro_rules! impl_significant_figures {
    ($($ty:ty),*) => {
        $(
            impl SignificantFigures for $ty {
                fn round_to_sig_figs(self, figures: i32) -> Self {
                    scale_then(self, figures, f64::round)
                }

                fn floor_to_sig_figs(self, figures: i32) -> Self {
                    scale_then(self, figures, f64::floor)
                }

                fn ceil_to_sig_figs(self, figures: i32) -> Self {
                    scale_then(self, figures, f64::ceil)
                }
            }
        )*
    };
}

impl_significant_figures!(f32, f64);

trait Widen: Copy {
    fn widen(self) -> f64;
    fn narrow(value: f64) -> Self;
}

impl Widen for f32 {
    fn widen(self) -> f64 {
        f64::from(self)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn narrow(value: f64) -> Self {
        value as Self
    }
}

impl Widen for f64 {
    fn widen(self) -> f64 {
        self
    }

    fn narrow(value: f64) -> Self {
        value
    }
}

fn scale_then<T: Widen>(value: T, figures: i32, snap: fn(f64) -> f64) -> T {
    let value = value.widen();
    if value == 0.0 {
        return T::narrow(0.0);
    }
    if !value.is_finite() {
        return T::narrow(value);
    }
    let scale = sig_figs_scale(value, figures);
    if !scale.is_normal() {
        return T::narrow(value);
    }
    let scaled = snap(value * scale) / scale;
    if scaled.is_finite() {
        T::narrow(scaled)
    } else {
        T::narrow(value)
    }
}

/// Rounds `value` to `figures` significant figures.
pub fn round_to_sig_figs<T: SignificantFigures>(value: T, figures: i32) -> T {
    value.round_to_sig_figs(figures)
}

/// Rounds `value` down to `figures` significant figures.
pub fn floor_to_sig_figs<T: SignificantFigures>(value: T, figures: i32) -> T {
    value.floor_to_sig_figs(figures)
}

/// Rounds `value` up to `figures` significant figures.
pub fn ceil_to_sig_figs<T: SignificantFigures>(value: T, figures: i32) -> T {
    value.ceil_to_sig_figs(figures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const EPSILON: f64 = 1e-7;

    #[rstest]
    #[case(3, 4, 3)]
    #[case(-1, 2, -1)]
    #[case(5, 5, 5)]
    fn test_min(#[case] x: i32, #[case] y: i32, #[case] expected: i32) {
        assert_eq!(min(x, y), expected);
    }

    #[rstest]
    fn test_max_and_add() {
        assert_eq!(max(3, 4), 4);
        assert_eq!(max(-1.5, -2.5), -1.5);
        assert_eq!(min(2.5, 0.5), 0.5);
        assert_eq!(add(40_u8, 2), 42);
    }

    #[rstest]
    #[case(12, 18, 6)]
    #[case(17, 5, 1)]
    #[case(9, 0, 9)]
    #[case(0, 9, 9)]
    fn test_gcd(#[case] a: u64, #[case] b: u64, #[case] expected: u64) {
        assert_eq!(gcd(a, b), expected);
    }

    #[rstest]
    #[case(4, 6, 12)]
    #[case(7, 3, 21)]
    #[case(5, 5, 5)]
    fn test_lcm(#[case] a: i32, #[case] b: i32, #[case] expected: i32) {
        assert_eq!(lcm(a, b), expected);
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(7.0, 7.0)]
    #[case(42.0, 42.0)]
    #[case(999.0, 999.0)]
    #[case(1337.0, 1340.0)]
    #[case(2344.0, 2340.0)]
    #[case(2345.0, 2350.0)]
    #[case(9994.0, 9990.0)]
    #[case(9995.0, 10000.0)]
    #[case(10000.0, 10000.0)]
    #[case(10049.0, 10000.0)]
    #[case(10050.0, 10100.0)]
    #[case(23450.0, 23500.0)]
    #[case(99950.0, 100000.0)]
    #[case(100499.0, 100000.0)]
    #[case(100500.0, 101000.0)]
    fn test_round_to_three_figures(#[case] input: f64, #[case] expected: f64) {
        for sign in [1.0, -1.0] {
            let actual = round_to_sig_figs(sign * input, 3);
            assert!(
                (sign * expected - actual).abs() < EPSILON,
                "round_to_sig_figs({}) = {actual}, expected {}",
                sign * input,
                sign * expected
            );
        }
    }

    #[rstest]
    #[case(7.0, 7.0, 7.0)]
    #[case(-7.0, -7.0, -7.0)]
    #[case(1337.0, 1330.0, 1340.0)]
    #[case(-1337.0, -1340.0, -1330.0)]
    #[case(2345.0, 2340.0, 2350.0)]
    #[case(-2345.0, -2350.0, -2340.0)]
    #[case(9994.0, 9990.0, 10000.0)]
    #[case(-9994.0, -10000.0, -9990.0)]
    #[case(10049.0, 10000.0, 10100.0)]
    #[case(-10049.0, -10100.0, -10000.0)]
    #[case(99999.0, 99900.0, 100000.0)]
    #[case(-99999.0, -100000.0, -99900.0)]
    #[case(100000.0, 100000.0, 100000.0)]
    #[case(100499.0, 100000.0, 101000.0)]
    fn test_floor_and_ceil_to_three_figures(
        #[case] input: f64,
        #[case] floor: f64,
        #[case] ceil: f64,
    ) {
        assert!((floor_to_sig_figs(input, 3) - floor).abs() < EPSILON);
        assert!((ceil_to_sig_figs(input, 3) - ceil).abs() < EPSILON);
    }

    #[rstest]
    fn test_zero_stays_zero() {
        assert_eq!(floor_to_sig_figs(0.0_f64, 2), 0.0);
        assert_eq!(ceil_to_sig_figs(0.0_f32, 2), 0.0);
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn test_non_finite_passes_through(#[case] input: f64) {
        for output in [
            round_to_sig_figs(input, 3),
            floor_to_sig_figs(input, 3),
            ceil_to_sig_figs(input, 3),
        ] {
            assert_eq!(output.is_nan(), input.is_nan());
            if !input.is_nan() {
                assert_eq!(output, input);
            }
        }
    }

    #[rstest]
    #[case(1337.0, i32::MAX)]
    #[case(1337.0, i32::MIN)]
    #[case(-2.5e-300, i32::MAX)]
    #[case(4.0e300, i32::MIN)]
    fn test_extreme_figures_leave_value_unchanged(#[case] input: f64, #[case] figures: i32) {
        assert_eq!(round_to_sig_figs(input, figures), input);
        assert_eq!(floor_to_sig_figs(input, figures), input);
        assert_eq!(ceil_to_sig_figs(input, figures), input);
    }

    #[rstest]
    fn test_f32_rounds_through_f64() {
        let rounded: f32 = round_to_sig_figs(1337.0_f32, 2);
        assert!((rounded - 1300.0).abs() < f32::EPSILON);
    }
}
