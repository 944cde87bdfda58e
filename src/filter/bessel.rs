//! Zero-order modified Bessel function of the first kind.
//!
//! This is the *modified* function I₀, not J₀, so `libm::j0` style routines do
//! not apply.

use super::constants::BESSEL_TERM_EPSILON;

/// Evaluates I₀(x) = Σ ((x/2)^i / i!)² term by term.
///
/// Each term is computed directly as `(x/2)^(2i) / (i!)²`. The first term
/// smaller than [`BESSEL_TERM_EPSILON`] ends the loop and is not added.
/// Fine for the Kaiser betas the parameter policy produces; for very large
/// `x` the powers overflow and the result degrades to `inf`/`NaN`.
pub fn bessel_i0(x: f64) -> f64 {
    let xdiv2 = x / 2.0;
    let mut sum = 1.0;
    let mut factorial = 1.0_f64;
    let mut i: i32 = 1;

    loop {
        let term = xdiv2.powi(i * 2) / factorial.powi(2);
        // negated so a NaN term also terminates
        if !(term >= BESSEL_TERM_EPSILON) {
            break;
        }
        sum += term;
        i += 1;
        factorial *= f64::from(i);
    }

    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_exactly_one() {
        assert_eq!(bessel_i0(0.0), 1.0);
    }

    #[test]
    fn known_values() {
        // Abramowitz & Stegun, table 9.8
        assert!((bessel_i0(1.0) - 1.266_065_877_752_008_4).abs() < 1e-12);
        assert!((bessel_i0(2.0) - 2.279_585_302_336_067).abs() < 1e-12);
        assert!((bessel_i0(5.0) - 27.239_871_823_604_44).abs() < 1e-9);
    }

    #[test]
    fn even_function() {
        for &x in &[0.5, 1.5, 3.0, 7.857_26] {
            assert_eq!(bessel_i0(x), bessel_i0(-x));
        }
    }

    #[test]
    fn monotonic_for_non_negative_input() {
        let mut prev = bessel_i0(0.0);
        for step in 1..=200 {
            let value = bessel_i0(step as f64 * 0.07);
            assert!(value > prev, "I0 not increasing at step {}", step);
            prev = value;
        }
    }

    #[test]
    fn reference_beta_is_finite() {
        let value = bessel_i0(0.1102 * (120.0 - 8.7));
        assert!(value.is_finite());
        assert!(value > 1.0);
    }
}
