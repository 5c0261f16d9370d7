//! Types and functions related to threshold sharing of signing keys.
//!
//! A dealer holding a signing key builds a mask: a random polynomial over
//! the scalar field whose constant term is the key. Each participant's
//! share is the mask evaluated at that participant's nonzero identifier,
//! and any `threshold` participants can pool their shares to rebuild the
//! constant term by Lagrange interpolation at zero. [^cite]
//!
//! Because signing is linear in the key, the same interpolation also
//! combines signatures: each participant signs a message with its own key
//! share, and a quorum of the resulting signature shares recovers the
//! signature the undivided key would have produced, without the key itself
//! ever being reassembled. [`recover_secret`] and [`recover_signature`] are
//! the two instantiations of one generic routine,
//! [`interpolate_at_zero`], which only asks the shared values for an
//! additive combination and a scalar action.
//!
//! All validation is concentrated at recovery time: share generation is a
//! pure per-participant evaluation, while [`interpolate_at_zero`] rejects
//! empty or mismatched inputs, zero identifiers, and duplicate identifiers
//! before performing any field division.
//!
//! [^cite]: Adi Shamir. How to Share a Secret. Communications of the ACM,
//! 1979. Threshold combination of the signatures follows Alexandra
//! Boldyreva. Threshold Signatures, Multisignatures and Blind Signatures
//! Based on the Gap-Diffie-Hellman-Group Signature Scheme. [PKC
//! 2003](https://eprint.iacr.org/2002/118).
// Copyright (c) 2023 Bolt Labs Holdings, Inc
//
// This source code is licensed under both the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree and the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree.

mod lagrange;
mod polynomial;
mod share;

pub use lagrange::interpolate_at_zero;
pub use polynomial::Polynomial;
pub use share::{
    generate_share, recover_public_key, recover_secret, recover_signature, ParticipantIdentifier,
};
