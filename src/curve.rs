// Copyright (c) 2023 Bolt Labs Holdings, Inc
//
// This source code is licensed under both the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree and the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree.

//! Capability traits over the external curve backend.
//!
//! The sharing and recovery algorithms never touch the backend library
//! directly; they are written against the named-method interfaces below so
//! that the dependency on the curve arithmetic stays explicit and mockable.
//! [`crate::bls12_381`] provides the BLS12-381 instantiation.

use crate::errors::Result;
use rand::{CryptoRng, RngCore};
use std::fmt::Debug;

/// An element of the prime-order scalar field underlying the curve group.
///
/// Multiplicative inverse is undefined at zero; [`ScalarTrait::invert`]
/// returns `None` there. Callers in this crate prove a value nonzero before
/// inverting it rather than relying on that `None`.
pub trait ScalarTrait:
    'static + Clone + Copy + Debug + Eq + PartialEq + Send + Sync + Sized
{
    /// The additive identity of the field.
    fn zero() -> Self;

    /// The multiplicative identity of the field.
    fn one() -> Self;

    /// Convert a small unsigned integer into a field element.
    fn from_u64(x: u64) -> Self;

    /// Construct a field element from a fixed-width little-endian limb
    /// encoding, reduced modulo the field order. Used to derive share
    /// identifiers deterministically from machine integers.
    fn from_words(words: [u64; 4]) -> Self;

    /// Add two scalars.
    fn add(&self, other: &Self) -> Self;

    /// Subtract `other` from `self`.
    fn sub(&self, other: &Self) -> Self;

    /// Additive inverse.
    fn negate(&self) -> Self;

    /// Multiply two scalars.
    fn mul(&self, other: &Self) -> Self;

    /// Multiplicative inverse, or `None` for the zero scalar.
    fn invert(&self) -> Option<Self>;

    /// True if and only if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Sample a uniformly random scalar.
    fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self;

    /// Canonical fixed-width byte encoding.
    fn to_bytes(&self) -> Vec<u8>;

    /// Decode a canonical byte encoding produced by [`ScalarTrait::to_bytes`].
    fn try_from_bytes(bytes: &[u8]) -> Result<Self>;
}

/// A value that can be reconstructed from shares by interpolation.
///
/// Recovery only needs three things from the space the shared values live
/// in: an additive identity, an additive combination, and a scalar action
/// of the field on the space. The scalar field itself satisfies this (the
/// scalar action is field multiplication), and so does any curve group
/// (the scalar action is point multiplication), which is what lets a single
/// recovery routine rebuild both secret keys and signatures.
pub trait ShareValueTrait: Clone + Debug + Eq + PartialEq + Sized {
    /// The scalar field acting on this space.
    type Scalar: ScalarTrait;

    /// The additive identity of the space.
    fn identity() -> Self;

    /// Add two values of the space.
    fn combine(&self, other: &Self) -> Self;

    /// Act on this value by a field scalar.
    fn scale(&self, scalar: &Self::Scalar) -> Self;

    /// True if and only if this is the additive identity.
    fn is_identity(&self) -> bool;
}
