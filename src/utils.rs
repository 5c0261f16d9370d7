// Copyright (c) 2023 Bolt Labs Holdings, Inc
//
// This source code is licensed under both the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree and the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree.

use crate::{
    curve::ScalarTrait,
    errors::{CallerError, InternalError, Result},
};
use rand::{CryptoRng, RngCore};

pub(crate) const CRYPTOGRAPHIC_RETRY_MAX: usize = 500usize;

/// Sample a uniformly random nonzero element of the scalar field.
///
/// Try up to `CRYPTOGRAPHIC_RETRY_MAX` times to draw a non-zero element. This
/// should virtually never error, though.
pub(crate) fn random_nonzero_scalar<S: ScalarTrait, R: RngCore + CryptoRng>(
    rng: &mut R,
) -> Result<S> {
    std::iter::repeat_with(|| S::random(rng))
        .take(CRYPTOGRAPHIC_RETRY_MAX)
        .find(|scalar| !scalar.is_zero())
        .ok_or(InternalError::CallingApplicationMistake(
            CallerError::RetryFailed,
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::init_testing;
    use bls12_381::Scalar;

    #[test]
    fn sampled_scalars_are_nonzero() {
        let mut rng = init_testing();
        for _ in 0..100 {
            let scalar: Scalar = random_nonzero_scalar(&mut rng).unwrap();
            assert!(!ScalarTrait::is_zero(&scalar));
        }
    }
}

////////////////////////////
// Test Utility Functions //
////////////////////////////

/// Returns an rng to be used for testing. This will print the rng seed
/// to stderr so that if a test fails, the failing seed can be recovered
/// and used for debugging.
#[cfg(test)]
pub(crate) mod testing {
    use rand::{
        rngs::{OsRng, StdRng},
        Rng, SeedableRng,
    };
    use tracing_subscriber::{
        filter::Targets, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
    };

    /// Initialize any fields necessary for our tests. This should be called at
    /// the top of all our tests. This function is idempotent.
    ///
    /// This will print the rng seed to stderr so that if a test fails, the
    /// failing seed can be recovered and used for debugging.
    pub(crate) fn init_testing() -> StdRng {
        let mut seeder = OsRng;
        let seed = seeder.gen();
        eprintln!(
            "To re-run test with the same randomness, use init_testing_with_seed() with the following seed:"
        );
        eprintln!("\t{seed:?}");
        StdRng::from_seed(seed)
    }

    /// A seeded version of [`init_testing`]. This function can be used when a
    /// test fails unexpectedly, and you want to reproduce the run using a
    /// specific RNG seed.
    ///
    /// **Additionally, turns on logging by default.**
    ///
    /// This function should only be called when debugging. Avoid calling as
    /// part of a normal unit test execution. Otherwise, it will turn on
    /// logging for all tests. This will be confusing as some tests
    /// purposely give bad input to functions, which triggers an error and a
    /// logging event.
    #[allow(unused)]
    pub(crate) fn init_testing_with_seed(seed: [u8; 32]) -> StdRng {
        let logging_level = EnvFilter::from_default_env()
            .max_level_hint()
            .unwrap()
            .into_level()
            .unwrap();

        // Only capture logging events from this crate.
        let targets = Targets::new().with_target("tss_bls", logging_level);
        let stdout_layer = tracing_subscriber::fmt::layer()
            .pretty()
            .with_filter(targets);

        // It's okay if this fails. It just means logging has already been set up for
        // this thread.
        let _ = tracing_subscriber::registry().with(stdout_layer).try_init();

        // Return RNG
        StdRng::from_seed(seed)
    }
}
