// Copyright (c) 2023 Bolt Labs Holdings, Inc
//
// This source code is licensed under both the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree and the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree.

//! Signing, verification, and naive aggregation.
//!
//! Signatures live on G2: a message is hashed onto the curve with the
//! standard ciphersuite and multiplied by the signing key, and verification
//! is the pairing check `e(g1, sig) == e(pk, H(m))`. [^cite]
//!
//! Signing is linear in the key, which is what makes threshold recovery
//! (see [`crate::recover_signature`]) work: a signature produced with a key
//! share is a share of the signature the undivided key would have produced.
//!
//! [^cite]: Dan Boneh, Ben Lynn, and Hovav Shacham. Short Signatures from
//! the Weil Pairing. Journal of Cryptology, 2004.

use crate::{
    bls12_381::{hash_to_g2, pairing_eq, G1, G2},
    curve::ShareValueTrait,
    errors::{CallerError, Result},
    keygen::{PublicKey, SecretKey},
};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Domain separation tag for the hash-to-curve ciphersuite
/// (BLS signatures on G2, XMD expansion with SHA-256, basic scheme).
const SIGNATURE_DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_NUL_";

/// A BLS signature: a point on G2.
///
/// A signature produced with a key share is a signature share; it is
/// structurally identical to an ordinary signature and only gains its
/// "share" meaning from the identifier it is paired with at recovery time.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    pub(crate) point: G2,
}

impl SecretKey {
    /// Sign a message with this key.
    pub fn sign(&self, message: &[u8]) -> Signature {
        Signature {
            point: hash_to_g2(message, SIGNATURE_DST).multiply_by_scalar(self.as_scalar()),
        }
    }
}

impl PublicKey {
    /// Verify a signature over `message` against this key.
    ///
    /// The identity point is rejected on both sides: it is not a valid
    /// public key and not a valid signature.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> Result<()> {
        if self.point.is_identity() || signature.point.is_identity() {
            error!("Refusing to verify with an identity public key or signature");
            Err(CallerError::VerificationFailed)?;
        }
        let hashed_message = hash_to_g2(message, SIGNATURE_DST);
        if pairing_eq(&G1::generator(), &signature.point, &self.point, &hashed_message) {
            Ok(())
        } else {
            error!("Signature failed the pairing check");
            Err(CallerError::VerificationFailed)?
        }
    }

    /// Combine public keys into the key that verifies signatures produced by
    /// [`Signature::aggregate`] over the corresponding secret keys.
    pub fn aggregate(keys: &[PublicKey]) -> Result<PublicKey> {
        if keys.is_empty() {
            error!("Cannot aggregate an empty set of public keys");
            Err(CallerError::InvalidInput)?;
        }
        let point = keys
            .iter()
            .fold(G1::identity(), |sum, key| sum + key.point);
        Ok(PublicKey::from_point(point))
    }
}

impl Signature {
    /// Combine signatures over the same message into a single signature
    /// under the aggregate of the signers' public keys. This is plain
    /// addition, not threshold recovery; see
    /// [`crate::recover_signature`] for the latter.
    pub fn aggregate(signatures: &[Signature]) -> Result<Signature> {
        if signatures.is_empty() {
            error!("Cannot aggregate an empty set of signatures");
            Err(CallerError::InvalidInput)?;
        }
        let point = signatures
            .iter()
            .fold(G2::identity(), |sum, signature| sum + signature.point);
        Ok(Signature { point })
    }

    /// Serialize the signature as a compressed 96-byte G2 encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.point.to_bytes()
    }

    /// Deserialize a signature from a compressed 96-byte G2 encoding.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self {
            point: G2::try_from_bytes(bytes)?,
        })
    }

    /// Serialize the signature as a hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Deserialize a signature from a hex string.
    pub fn try_from_hex(encoded: &str) -> Result<Self> {
        let bytes = hex::decode(encoded).map_err(|_| {
            error!("Failed to decode hex-encoded signature");
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
    fn signing_round_trip_works() {
        let rng = &mut init_testing();
        let key = SecretKey::random(rng).unwrap();
        let signature = key.sign(b"a test message");
        assert!(key.public_key().verify(b"a test message", &signature).is_ok());
    }

    #[test]
    fn signing_is_deterministic() {
        let rng = &mut init_testing();
        let key = SecretKey::random(rng).unwrap();
        assert_eq!(key.sign(b"same message"), key.sign(b"same message"));
        assert_ne!(key.sign(b"same message"), key.sign(b"other message"));
    }

    #[test]
    fn verification_rejects_the_wrong_message() {
        let rng = &mut init_testing();
        let key = SecretKey::random(rng).unwrap();
        let signature = key.sign(b"signed message");
        assert_eq!(
            key.public_key().verify(b"different message", &signature),
            Err(CallerError::VerificationFailed.into())
        );
    }

    #[test]
    fn verification_rejects_the_wrong_key() {
        let rng = &mut init_testing();
        let key = SecretKey::random(rng).unwrap();
        let other = SecretKey::random(rng).unwrap();
        let signature = key.sign(b"signed message");
        assert!(other
            .public_key()
            .verify(b"signed message", &signature)
            .is_err());
    }

    #[test]
    fn aggregated_signature_verifies_under_aggregated_key() {
        let rng = &mut init_testing();
        let message = b"an agreed-upon message";
        let keys: Vec<SecretKey> = (0..4)
            .map(|_| SecretKey::random(rng).unwrap())
            .collect();

        let signatures: Vec<Signature> = keys.iter().map(|key| key.sign(message)).collect();
        let aggregate_signature = Signature::aggregate(&signatures).unwrap();

        let public_keys: Vec<PublicKey> = keys.iter().map(|key| key.public_key()).collect();
        let aggregate_key = PublicKey::aggregate(&public_keys).unwrap();

        assert!(aggregate_key.verify(message, &aggregate_signature).is_ok());
        // A plain sum of signatures is not a signature under any single
        // signer's key.
        assert!(public_keys[0].verify(message, &aggregate_signature).is_err());
    }

    #[test]
    fn aggregating_nothing_is_rejected() {
        assert!(Signature::aggregate(&[]).is_err());
        assert!(PublicKey::aggregate(&[]).is_err());
    }

    #[test]
    fn signature_byte_and_hex_round_trips_work() {
        let rng = &mut init_testing();
        let signature = SecretKey::random(rng).unwrap().sign(b"round trip");
        let bytes = signature.to_bytes();
        assert_eq!(bytes.len(), 96);
        assert_eq!(Signature::try_from_bytes(&bytes).unwrap(), signature);
        assert_eq!(Signature::try_from_hex(&signature.to_hex()).unwrap(), signature);
    }
}
