// src/crypto/rng.rs
//! Secure randomness for fixed-size secrets
//!
//! Adds `T::random()` to every `SpanBuffer<N>` alias (`MediaKey32`, `Iv16`, …)
//! using a thread-local `OsRng`.

use rand::{rngs::OsRng, TryRngCore};
use secure_gate::Fixed;
use std::cell::RefCell;

/// Extension trait giving `.random()` to all fixed-size secret types
pub trait SecureRandomExt {
    /// Generate a cryptographically secure random instance of this type
    fn random() -> Self;
}

thread_local! {
    static RNG: RefCell<OsRng> = const { RefCell::new(OsRng) };
}

impl<const N: usize> SecureRandomExt for Fixed<[u8; N]> {
    #[inline(always)]
    fn random() -> Self {
        RNG.with(|rng_cell| {
            let mut bytes = [0u8; N];
            rng_cell
                .borrow_mut()
                .try_fill_bytes(&mut bytes)
                .expect("operating system RNG is available");
            Fixed::new(bytes)
        })
    }
}
