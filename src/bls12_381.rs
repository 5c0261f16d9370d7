// Copyright (c) 2023 Bolt Labs Holdings, Inc
//
// This source code is licensed under both the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree and the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree.

//! BLS12-381 backend functions.
//!
//! Wraps the `bls12_381` crate behind the capability traits in
//! [`crate::curve`]. Points are encoded in compressed affine form (48 bytes
//! on G1, 96 bytes on G2); scalars use the canonical 32-byte little-endian
//! encoding.

use crate::{
    curve::{ScalarTrait, ShareValueTrait},
    errors::{CallerError, Result},
};
use bls12_381::{
    hash_to_curve::{ExpandMsgXmd, HashToCurve},
    G1Affine, G1Projective, G2Affine, G2Projective, Scalar,
};
use ff::Field;
use group::{Curve, Group};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::Sha256;
use tracing::error;

/// Wrapper around [`bls12_381::G1Projective`] so that we can define our own
/// serialization/deserialization for it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct G1(pub(crate) G1Projective);

/// Wrapper around [`bls12_381::G2Projective`] so that we can define our own
/// serialization/deserialization for it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct G2(pub(crate) G2Projective);

impl G1 {
    /// The fixed generator of G1.
    pub fn generator() -> Self {
        G1(G1Projective::generator())
    }

    /// The identity point of G1.
    pub fn identity() -> Self {
        G1(G1Projective::identity())
    }

    /// Multiply `self` by a field scalar.
    pub(crate) fn multiply_by_scalar(&self, scalar: &Scalar) -> Self {
        Self(self.0 * scalar)
    }

    /// Serialize the point in compressed affine form.
    pub(crate) fn to_bytes(self) -> Vec<u8> {
        self.0.to_affine().to_compressed().to_vec()
    }

    /// Deserialize a point from its compressed affine form.
    pub(crate) fn try_from_bytes(bytes: &[u8]) -> Result<Self> {
        let fixed_len_bytes: [u8; 48] = bytes.try_into().map_err(|_| {
            error!("Failed to encode bytes as a G1 point");
            CallerError::DeserializationFailed
        })?;
        let point: Option<G1Affine> = G1Affine::from_compressed(&fixed_len_bytes).into();
        match point {
            Some(point) => Ok(Self(point.into())),
            None => {
                error!("Failed to encode bytes as a G1 point");
                Err(CallerError::DeserializationFailed)?
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self(G1Projective::random(rng))
    }
}

impl G2 {
    /// The identity point of G2.
    pub fn identity() -> Self {
        G2(G2Projective::identity())
    }

    /// Multiply `self` by a field scalar.
    pub(crate) fn multiply_by_scalar(&self, scalar: &Scalar) -> Self {
        Self(self.0 * scalar)
    }

    /// Serialize the point in compressed affine form.
    pub(crate) fn to_bytes(self) -> Vec<u8> {
        self.0.to_affine().to_compressed().to_vec()
    }

    /// Deserialize a point from its compressed affine form.
    pub(crate) fn try_from_bytes(bytes: &[u8]) -> Result<Self> {
        let fixed_len_bytes: [u8; 96] = bytes.try_into().map_err(|_| {
            error!("Failed to encode bytes as a G2 point");
            CallerError::DeserializationFailed
        })?;
        let point: Option<G2Affine> = G2Affine::from_compressed(&fixed_len_bytes).into();
        match point {
            Some(point) => Ok(Self(point.into())),
            None => {
                error!("Failed to encode bytes as a G2 point");
                Err(CallerError::DeserializationFailed)?
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self(G2Projective::random(rng))
    }
}

impl std::ops::Add for G1 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Add for G2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Serialize for G1 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_bytes().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for G1 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = Vec::<u8>::deserialize(deserializer)?;
        G1::try_from_bytes(&bytes).map_err(serde::de::Error::custom)
    }
}

impl Serialize for G2 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_bytes().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for G2 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = Vec::<u8>::deserialize(deserializer)?;
        G2::try_from_bytes(&bytes).map_err(serde::de::Error::custom)
    }
}

/// Hash an arbitrary message onto G2 using the XMD:SHA-256 expander with the
/// given domain separation tag.
pub(crate) fn hash_to_g2(message: &[u8], domain: &[u8]) -> G2 {
    G2(<G2Projective as HashToCurve<ExpandMsgXmd<Sha256>>>::hash_to_curve(message, domain))
}

/// Evaluate the pairing equality `e(a1, a2) == e(b1, b2)`.
pub(crate) fn pairing_eq(a1: &G1, a2: &G2, b1: &G1, b2: &G2) -> bool {
    bls12_381::pairing(&a1.0.to_affine(), &a2.0.to_affine())
        == bls12_381::pairing(&b1.0.to_affine(), &b2.0.to_affine())
}

impl ScalarTrait for Scalar {
    fn zero() -> Self {
        Scalar::zero()
    }

    fn one() -> Self {
        Scalar::one()
    }

    fn from_u64(x: u64) -> Self {
        Scalar::from(x)
    }

    fn from_words(words: [u64; 4]) -> Self {
        Scalar::from_raw(words)
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn sub(&self, other: &Self) -> Self {
        self - other
    }

    fn negate(&self) -> Self {
        -self
    }

    fn mul(&self, other: &Self) -> Self {
        self * other
    }

    fn invert(&self) -> Option<Self> {
        Option::from(Scalar::invert(self))
    }

    fn is_zero(&self) -> bool {
        bool::from(<Scalar as Field>::is_zero(self))
    }

    fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        <Scalar as Field>::random(rng)
    }

    fn to_bytes(&self) -> Vec<u8> {
        Scalar::to_bytes(self).to_vec()
    }

    fn try_from_bytes(bytes: &[u8]) -> Result<Self> {
        let fixed_len_bytes: [u8; 32] = bytes.try_into().map_err(|_| {
            error!("Failed to encode bytes as a scalar");
            CallerError::DeserializationFailed
        })?;
        Option::from(Scalar::from_bytes(&fixed_len_bytes)).ok_or_else(|| {
            error!("Failed to encode bytes as a scalar: non-canonical encoding");
            CallerError::DeserializationFailed.into()
        })
    }
}

impl ShareValueTrait for Scalar {
    type Scalar = Scalar;

    fn identity() -> Self {
        <Scalar as ScalarTrait>::zero()
    }

    fn combine(&self, other: &Self) -> Self {
        ScalarTrait::add(self, other)
    }

    fn scale(&self, scalar: &Self::Scalar) -> Self {
        ScalarTrait::mul(self, scalar)
    }

    fn is_identity(&self) -> bool {
        ScalarTrait::is_zero(self)
    }
}

impl ShareValueTrait for G1 {
    type Scalar = Scalar;

    fn identity() -> Self {
        G1::identity()
    }

    fn combine(&self, other: &Self) -> Self {
        *self + *other
    }

    fn scale(&self, scalar: &Self::Scalar) -> Self {
        self.multiply_by_scalar(scalar)
    }

    fn is_identity(&self) -> bool {
        bool::from(self.0.is_identity())
    }
}

impl ShareValueTrait for G2 {
    type Scalar = Scalar;

    fn identity() -> Self {
        G2::identity()
    }

    fn combine(&self, other: &Self) -> Self {
        *self + *other
    }

    fn scale(&self, scalar: &Self::Scalar) -> Self {
        self.multiply_by_scalar(scalar)
    }

    fn is_identity(&self) -> bool {
        bool::from(self.0.is_identity())
    }
}
