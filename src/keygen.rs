// Copyright (c) 2023 Bolt Labs Holdings, Inc
//
// This source code is licensed under both the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree and the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree.

//! Types and functions related to signing keys.
//!
//! A [`SecretKey`] is a nonzero element of the BLS12-381 scalar field; its
//! [`PublicKey`] is the corresponding multiple of the G1 generator. Key
//! generation delegates directly to the curve backend; the interesting
//! operations on keys are splitting a key into shares and recovering it
//! from a quorum (see [`SecretKey::split`], [`crate::generate_share`], and
//! [`crate::recover_secret`]) and signing (see [`SecretKey::sign`]).

use crate::{
    bls12_381::G1,
    curve::ScalarTrait,
    errors::{CallerError, Result},
    tshare::Polynomial,
    utils::random_nonzero_scalar,
};
use bls12_381::Scalar;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Debug;
use tracing::error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A BLS signing key.
///
/// Shares produced by [`crate::generate_share`] are themselves
/// `SecretKey`s: a participant signs with its share exactly as it would with
/// an undivided key.
#[derive(Clone, Eq, PartialEq)]
pub struct SecretKey {
    scalar: Scalar,
}

impl Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretKey([redacted])")
    }
}

impl Zeroize for SecretKey {
    fn zeroize(&mut self) {
        self.scalar = <Scalar as ScalarTrait>::zero();
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for SecretKey {}

impl SecretKey {
    /// Sample a fresh uniformly random (nonzero) signing key.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        Ok(Self {
            scalar: random_nonzero_scalar(rng)?,
        })
    }

    pub(crate) fn from_scalar(scalar: Scalar) -> Self {
        Self { scalar }
    }

    pub(crate) fn as_scalar(&self) -> &Scalar {
        &self.scalar
    }

    /// The public key corresponding to this signing key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            point: G1::generator().multiply_by_scalar(&self.scalar),
        }
    }

    /// Build a sharing mask for this key: a polynomial with this key as its
    /// constant term and `threshold - 1` random higher coefficients, so any
    /// `threshold` evaluations recover the key.
    ///
    /// The mask itself must never leave the dealer; only its evaluations
    /// (via [`crate::generate_share`]) are distributed.
    pub fn split<R: RngCore + CryptoRng>(
        &self,
        threshold: usize,
        rng: &mut R,
    ) -> Result<Polynomial<Scalar>> {
        if threshold == 0 {
            error!("Cannot build a sharing mask with a threshold of zero");
            Err(CallerError::InvalidInput)?;
        }
        let mut coefficients = vec![self.scalar];
        coefficients.extend((1..threshold).map(|_| <Scalar as ScalarTrait>::random(rng)));
        Ok(Polynomial::from_coefficients(coefficients))
    }

    /// Serialize the key as its canonical 32-byte scalar encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        ScalarTrait::to_bytes(&self.scalar)
    }

    /// Deserialize a key from its canonical 32-byte scalar encoding.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self {
            scalar: <Scalar as ScalarTrait>::try_from_bytes(bytes)?,
        })
    }

    /// Serialize the key as a hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Deserialize a key from a hex string.
    pub fn try_from_hex(encoded: &str) -> Result<Self> {
        let bytes = hex::decode(encoded).map_err(|_| {
            error!("Failed to decode hex-encoded secret key");
            CallerError::DeserializationFailed
        })?;
        Self::try_from_bytes(&bytes)
    }
}

impl Serialize for SecretKey {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_bytes().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecretKey {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = Vec::<u8>::deserialize(deserializer)?;
        SecretKey::try_from_bytes(&bytes).map_err(serde::de::Error::custom)
    }
}

/// A BLS verification key: a point on G1.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PublicKey {
    pub(crate) point: G1,
}

impl PublicKey {
    pub(crate) fn from_point(point: G1) -> Self {
        Self { point }
    }

    /// Serialize the key as a compressed 48-byte G1 encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.point.to_bytes()
    }

    /// Deserialize a key from a compressed 48-byte G1 encoding.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self {
            point: G1::try_from_bytes(bytes)?,
        })
    }

    /// Serialize the key as a hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Deserialize a key from a hex string.
    pub fn try_from_hex(encoded: &str) -> Result<Self> {
        let bytes = hex::decode(encoded).map_err(|_| {
            error!("Failed to decode hex-encoded public key");
            CallerError::DeserializationFailed
        })?;
        Self::try_from_bytes(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::init_testing;

    #[test]
    fn distinct_keys_have_distinct_public_keys() {
        let rng = &mut init_testing();
        let first = SecretKey::random(rng).unwrap();
        let second = SecretKey::random(rng).unwrap();
        assert_ne!(first, second);
        assert_ne!(first.public_key(), second.public_key());
    }

    #[test]
    fn secret_key_byte_round_trip_works() {
        let rng = &mut init_testing();
        let key = SecretKey::random(rng).unwrap();
        let bytes = key.to_bytes();
        assert_eq!(bytes.len(), 32);
        assert_eq!(SecretKey::try_from_bytes(&bytes).unwrap(), key);
    }

    #[test]
    fn public_key_hex_round_trip_works() {
        let rng = &mut init_testing();
        let key = SecretKey::random(rng).unwrap().public_key();
        assert_eq!(PublicKey::try_from_hex(&key.to_hex()).unwrap(), key);
        assert!(PublicKey::try_from_hex("not hex").is_err());
    }

    #[test]
    fn splitting_preserves_the_key_as_constant_term() {
        let rng = &mut init_testing();
        let key = SecretKey::random(rng).unwrap();
        let mask = key.split(3, rng).unwrap();
        assert_eq!(mask.threshold(), 3);
        assert_eq!(mask.constant_term(), *key.as_scalar());
    }

    #[test]
    fn splitting_with_zero_threshold_is_rejected() {
        let rng = &mut init_testing();
        let key = SecretKey::random(rng).unwrap();
        assert!(matches!(
            key.split(0, rng),
            Err(crate::errors::InternalError::CallingApplicationMistake(
                CallerError::InvalidInput
            ))
        ));
    }

    #[test]
    fn serde_round_trip_works() {
        let rng = &mut init_testing();
        let key = SecretKey::random(rng).unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(serde_json::from_str::<SecretKey>(&json).unwrap(), key);

        let public = key.public_key();
        let json = serde_json::to_string(&public).unwrap();
        assert_eq!(serde_json::from_str::<PublicKey>(&json).unwrap(), public);
    }

    #[test]
    fn debug_output_is_redacted() {
        let rng = &mut init_testing();
        let key = SecretKey::random(rng).unwrap();
        assert_eq!(format!("{key:?}"), "SecretKey([redacted])");
    }
}
