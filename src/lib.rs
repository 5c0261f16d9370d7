// Copyright (c) 2023 Bolt Labs Holdings, Inc
//
// This source code is licensed under both the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree and the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree.

//! Implementation of a threshold BLS signature scheme over BLS12-381.
//!
//! In a threshold signature scheme, a subset t of n signers, each of whom
//! hold a share of a private signing key, can produce a valid signature for
//! a message, while any subset of t-1 signers will be unable to forge
//! signatures. Signatures recovered from a quorum of shares are
//! indistinguishable from signatures generated with the undivided key, and
//! verify under the ordinary (non-threshold) verification function.
//!
//! Keys are split with Shamir's polynomial scheme and recovered with
//! Lagrange interpolation at zero; because BLS signing is linear in the
//! key, the same interpolation combines signature shares into the full
//! signature without ever reassembling the key. [^cite]
//!
//! Note that this library only provides the cryptographic core: dealing a
//! key into shares, signing with a share, and recovering secrets and
//! signatures from a quorum. Delivering shares to participants and
//! collecting them back is left to the calling application, as is any
//! distributed generation of the dealt key.
//!
//! [^cite]: Alexandra Boldyreva. Threshold Signatures, Multisignatures and
//! Blind Signatures Based on the Gap-Diffie-Hellman-Group Signature
//! Scheme. [PKC 2003](https://eprint.iacr.org/2002/118). Signatures follow
//! Dan Boneh, Ben Lynn, and Hovav Shacham. Short Signatures from the Weil
//! Pairing. Journal of Cryptology, 2004.

#![warn(missing_docs)]

pub mod bls12_381;
pub mod curve;
pub mod errors;

mod keygen;
mod sign;
mod tshare;
mod utils;

pub use keygen::{PublicKey, SecretKey};
pub use sign::Signature;
pub use tshare::{
    generate_share, interpolate_at_zero, recover_public_key, recover_secret, recover_signature,
    ParticipantIdentifier, Polynomial,
};
