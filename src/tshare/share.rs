// Copyright (c) 2023 Bolt Labs Holdings, Inc
//
// This source code is licensed under both the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree and the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree.

use crate::{
    bls12_381::{G1, G2},
    curve::ScalarTrait,
    errors::Result,
    keygen::{PublicKey, SecretKey},
    sign::Signature,
    tshare::{lagrange::interpolate_at_zero, Polynomial},
    utils::random_nonzero_scalar,
};
use bls12_381::Scalar;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The identifier of a participant in a sharing: the x-coordinate at which
/// the dealer's mask is evaluated to produce that participant's share.
///
/// The zero scalar is representable here (for example via
/// `ParticipantIdentifier::from_index(0)`) but is reserved for the secret's
/// own evaluation point; recovery refuses any set containing it. Within one
/// recovery set, identifiers must also be pairwise distinct.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParticipantIdentifier(Scalar);

impl ParticipantIdentifier {
    /// Derive an identifier deterministically from a node index.
    pub fn from_index(index: u64) -> Self {
        Self(<Scalar as ScalarTrait>::from_u64(index))
    }

    /// Derive an identifier from a fixed-width little-endian limb encoding,
    /// reduced modulo the field order.
    pub fn from_raw(words: [u64; 4]) -> Self {
        Self(<Scalar as ScalarTrait>::from_words(words))
    }

    /// Sample a uniformly random (nonzero) identifier.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        Ok(Self(random_nonzero_scalar(rng)?))
    }

    pub(crate) fn as_scalar(&self) -> &Scalar {
        &self.0
    }

    /// Serialize the identifier as its canonical 32-byte scalar encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        ScalarTrait::to_bytes(&self.0)
    }

    /// Deserialize an identifier from its canonical 32-byte scalar encoding.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self(<Scalar as ScalarTrait>::try_from_bytes(bytes)?))
    }
}

impl Serialize for ParticipantIdentifier {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_bytes().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ParticipantIdentifier {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = Vec::<u8>::deserialize(deserializer)?;
        ParticipantIdentifier::try_from_bytes(&bytes).map_err(serde::de::Error::custom)
    }
}

/// Produce the key share belonging to `id`: the dealer's mask evaluated at
/// the identifier.
///
/// No validation happens here. Shares for different participants are
/// generated independently, so this function cannot see duplicates, and a
/// zero identifier is only rejected once the shares come back together at
/// recovery.
pub fn generate_share(mask: &Polynomial<Scalar>, id: &ParticipantIdentifier) -> SecretKey {
    SecretKey::from_scalar(mask.evaluate(id.as_scalar()))
}

/// Recover the dealer's secret key from a quorum of key shares, where
/// `shares[i]` belongs to `ids[i]`.
///
/// Any `threshold` distinct shares of a mask with that threshold recover
/// exactly the mask's constant term; fewer recover an unrelated value.
pub fn recover_secret(
    shares: &[SecretKey],
    ids: &[ParticipantIdentifier],
) -> Result<SecretKey> {
    let values: Vec<Scalar> = shares.iter().map(|share| *share.as_scalar()).collect();
    let points: Vec<Scalar> = ids.iter().map(|id| *id.as_scalar()).collect();
    let secret = interpolate_at_zero(&values, &points)?;
    Ok(SecretKey::from_scalar(secret))
}

/// Recover the signature the dealer's undivided key would have produced
/// from a quorum of signature shares, where `shares[i]` was produced by the
/// key share belonging to `ids[i]`.
///
/// Signing is linear in the key under the group's scalar action, so the
/// same interpolation that rebuilds the key rebuilds its signature without
/// the key ever being reassembled.
pub fn recover_signature(
    shares: &[Signature],
    ids: &[ParticipantIdentifier],
) -> Result<Signature> {
    let values: Vec<G2> = shares.iter().map(|share| share.point).collect();
    let points: Vec<Scalar> = ids.iter().map(|id| *id.as_scalar()).collect();
    let point = interpolate_at_zero(&values, &points)?;
    Ok(Signature { point })
}

/// Recover the dealer's public key from a quorum of the participants'
/// public key shares, where `shares[i]` belongs to `ids[i]`.
pub fn recover_public_key(
    shares: &[PublicKey],
    ids: &[ParticipantIdentifier],
) -> Result<PublicKey> {
    let values: Vec<G1> = shares.iter().map(|share| share.point).collect();
    let points: Vec<Scalar> = ids.iter().map(|id| *id.as_scalar()).collect();
    let point = interpolate_at_zero(&values, &points)?;
    Ok(PublicKey::from_point(point))
}
