// Copyright (c) 2023 Bolt Labs Holdings, Inc
//
// This source code is licensed under both the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree and the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree.

use crate::{
    curve::ScalarTrait,
    errors::{CallerError, Result},
};
use rand::{CryptoRng, RngCore};
use std::fmt::Debug;
use tracing::error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A polynomial over the scalar field, held as an ordered coefficient vector
/// `[a0, a1, ..., a_{t-1}]` representing `F(x) = a0 + a1 * x + ... +
/// a_{t-1} * x^{t-1}`.
///
/// When used as a sharing mask, the constant term `a0` is the secret and the
/// shares are evaluations of `F` at the participants' identifiers. The
/// coefficients are secret material: they are wiped on drop and never
/// printed.
pub struct Polynomial<S: ScalarTrait> {
    coefficients: Vec<S>,
}

impl<S: ScalarTrait> Debug for Polynomial<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Polynomial([redacted])")
    }
}

impl<S: ScalarTrait> Zeroize for Polynomial<S> {
    fn zeroize(&mut self) {
        for coefficient in self.coefficients.iter_mut() {
            *coefficient = S::zero();
        }
        self.coefficients.clear();
    }
}

impl<S: ScalarTrait> Drop for Polynomial<S> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<S: ScalarTrait> ZeroizeOnDrop for Polynomial<S> {}

impl<S: ScalarTrait> Polynomial<S> {
    /// Wrap an ordered coefficient vector, lowest degree first.
    pub fn from_coefficients(coefficients: Vec<S>) -> Self {
        Self { coefficients }
    }

    /// Sample a polynomial with `threshold` uniformly random coefficients,
    /// i.e. of degree `threshold - 1`.
    pub fn random<R: RngCore + CryptoRng>(threshold: usize, rng: &mut R) -> Result<Self> {
        if threshold == 0 {
            error!("Cannot sample a polynomial with zero coefficients");
            Err(CallerError::InvalidInput)?;
        }
        let coefficients = (0..threshold).map(|_| S::random(rng)).collect();
        Ok(Self { coefficients })
    }

    /// The constant term `a0`, i.e. the value of the polynomial at zero.
    pub fn constant_term(&self) -> S {
        self.coefficients.first().copied().unwrap_or_else(S::zero)
    }

    /// The number of coefficients. As a sharing mask, this is the number of
    /// shares required to recover the constant term.
    pub fn threshold(&self) -> usize {
        self.coefficients.len()
    }

    /// Evaluate the polynomial at `x` by Horner's method, walking the
    /// coefficients from highest degree to lowest: `t - 1` multiplications
    /// and `t - 1` additions, no explicit exponentiation.
    ///
    /// An empty coefficient vector evaluates to zero.
    pub fn evaluate(&self, x: &S) -> S {
        self.coefficients
            .iter()
            .rev()
            .fold(S::zero(), |acc, coefficient| acc.mul(x).add(coefficient))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::init_testing;
    use bls12_381::Scalar;

    fn scalar(x: u64) -> Scalar {
        <Scalar as ScalarTrait>::from_u64(x)
    }

    #[test]
    fn empty_polynomial_evaluates_to_zero() {
        let polynomial = Polynomial::<Scalar>::from_coefficients(vec![]);
        assert_eq!(polynomial.evaluate(&scalar(7)), Scalar::zero());
        assert_eq!(polynomial.constant_term(), Scalar::zero());
    }

    #[test]
    fn constant_polynomial_evaluates_to_its_coefficient() {
        let rng = &mut init_testing();
        let constant = <Scalar as ScalarTrait>::random(rng);
        let polynomial = Polynomial::from_coefficients(vec![constant]);
        let x = <Scalar as ScalarTrait>::random(rng);
        assert_eq!(polynomial.evaluate(&x), constant);
    }

    #[test]
    fn evaluation_matches_hand_computed_values() {
        // F(x) = 1 + 2x + 3x^2, so F(2) = 1 + 4 + 12 = 17.
        let polynomial = Polynomial::from_coefficients(vec![scalar(1), scalar(2), scalar(3)]);
        assert_eq!(polynomial.evaluate(&scalar(2)), scalar(17));
        assert_eq!(polynomial.evaluate(&Scalar::zero()), scalar(1));
    }

    #[test]
    fn evaluation_matches_naive_powers() {
        let rng = &mut init_testing();
        let polynomial = Polynomial::<Scalar>::random(5, rng).unwrap();
        let x = <Scalar as ScalarTrait>::random(rng);

        let mut expected = Scalar::zero();
        let mut x_power = Scalar::one();
        for i in 0..polynomial.threshold() {
            expected += polynomial.coefficients[i] * x_power;
            x_power *= x;
        }
        assert_eq!(polynomial.evaluate(&x), expected);
    }

    #[test]
    fn random_polynomial_has_requested_threshold() {
        let rng = &mut init_testing();
        let polynomial = Polynomial::<Scalar>::random(3, rng).unwrap();
        assert_eq!(polynomial.threshold(), 3);
        assert_eq!(polynomial.constant_term(), polynomial.coefficients[0]);
    }

    #[test]
    fn zero_threshold_is_rejected() {
        let rng = &mut init_testing();
        assert!(Polynomial::<Scalar>::random(0, rng).is_err());
    }
}
