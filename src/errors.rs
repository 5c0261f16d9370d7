// Copyright (c) 2023 Bolt Labs Holdings, Inc
//
// This source code is licensed under both the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree and the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree.

//! A list of error types which are produced during an execution of the
//! threshold signature scheme.

use thiserror::Error;

/// The default Result type used in this crate.
pub type Result<T> = std::result::Result<T, InternalError>;

/// Errors that can occur during execution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InternalError {
    /// Encountered a case that should never happen given the location in the
    /// code. For example, the Lagrange denominators are proven nonzero
    /// before they are inverted, so a failed inversion is unreachable.
    #[error("An internal invariant was violated")]
    InternalInvariantFailed,

    /// The calling application passed input that failed validation.
    #[error("The calling application made a mistake: {0}")]
    CallingApplicationMistake(#[from] CallerError),
}

/// Errors that are caused by incorrect behavior by the calling application.
///
/// These are always recoverable: the caller can correct the input (for
/// example, request a replacement share from the quorum) and try again.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CallerError {
    /// The share values and identifiers supplied to recovery were empty or
    /// had mismatched lengths, or a parameter was out of range.
    #[error("Input failed validation")]
    InvalidInput,

    /// A supplied share identifier was the zero scalar. The zero evaluation
    /// point is reserved for the secret itself and must never appear among
    /// shares.
    #[error("A share identifier was the zero scalar")]
    ZeroShareId,

    /// Two supplied share identifiers were equal, which would make a
    /// Lagrange denominator zero.
    #[error("Two share identifiers were equal")]
    DuplicateShareId,

    /// Provided bytes or hex could not be decoded into the expected type.
    #[error("Failed to deserialize the provided data")]
    DeserializationFailed,

    /// A signature did not verify against the given key and message.
    #[error("Signature verification failed")]
    VerificationFailed,

    /// Sampling failed to produce a usable value within the retry bound.
    #[error("Reached maximum number of retries for a cryptographic operation")]
    RetryFailed,
}
