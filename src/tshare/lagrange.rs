// Copyright (c) 2023 Bolt Labs Holdings, Inc
//
// This source code is licensed under both the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree and the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree.

//! Lagrange interpolation at zero, generic over the space the shared values
//! live in.

use crate::{
    curve::{ScalarTrait, ShareValueTrait},
    errors::{CallerError, InternalError, Result},
};
use tracing::error;

/// Reconstruct the value a degree-`(k-1)` polynomial takes at zero from `k`
/// of its evaluations, where `values[i]` is the evaluation at `ids[i]`.
///
/// Evaluating specifically at zero lets the numerator of every Lagrange
/// basis coefficient collapse to the single shared product `a = prod(ids)`:
///
/// ```text
/// L_i(0) = a / (id_i * prod_{j != i} (id_j - id_i))
/// ```
///
/// so the whole reconstruction costs one O(k) numerator plus O(k^2)
/// denominator work, rather than building each basis polynomial from
/// scratch.
///
/// The same routine reconstructs secret scalars and group-valued signature
/// shares: it only relies on the additive combination and scalar action of
/// [`ShareValueTrait`], and signing is linear in the secret under that
/// action.
///
/// # Errors
///
/// - [`CallerError::InvalidInput`] if `values` and `ids` are empty or of
///   different lengths.
/// - [`CallerError::ZeroShareId`] if any identifier is the zero scalar. Zero
///   is the evaluation point of the secret itself, so a share there must
///   never exist; this holds for every set size, including a single share.
/// - [`CallerError::DuplicateShareId`] if two identifiers coincide, which
///   would make a basis denominator zero.
///
/// Every denominator factor is checked for zero before any field inversion
/// is performed; inverse-at-zero is never invoked.
pub fn interpolate_at_zero<V: ShareValueTrait>(values: &[V], ids: &[V::Scalar]) -> Result<V> {
    if values.is_empty() || values.len() != ids.len() {
        error!(
            "Recovery failed input validation: {} values against {} identifiers",
            values.len(),
            ids.len()
        );
        Err(CallerError::InvalidInput)?;
    }

    // Shared numerator of every basis coefficient. A zero product means some
    // identifier was zero.
    let numerator = ids
        .iter()
        .fold(V::Scalar::one(), |product, id| product.mul(id));
    if numerator.is_zero() {
        error!("Recovery was given a zero share identifier");
        Err(CallerError::ZeroShareId)?;
    }

    // A single share is the value itself; nothing to interpolate.
    if values.len() == 1 {
        return Ok(values[0].clone());
    }

    let mut result = V::identity();
    for (i, (value, id_i)) in values.iter().zip(ids).enumerate() {
        let mut denominator = *id_i;
        for (j, id_j) in ids.iter().enumerate() {
            if j == i {
                continue;
            }
            let difference = id_j.sub(id_i);
            if difference.is_zero() {
                error!("Recovery was given two equal share identifiers");
                Err(CallerError::DuplicateShareId)?;
            }
            denominator = denominator.mul(&difference);
        }
        // The denominator is a product of factors just proven nonzero, so
        // inversion cannot fail here.
        let inverse = denominator.invert().ok_or_else(|| {
            error!("Failed to invert a Lagrange denominator whose factors were all nonzero");
            InternalError::InternalInvariantFailed
        })?;
        let basis = numerator.mul(&inverse);
        result = result.combine(&value.scale(&basis));
    }
    Ok(result)
}
