//! A tiny pseudo-random bit and byte generator built on a 16-bit Linear Feedback Shift Register.
//!
//! This is meant for things like the ATmega328P, where there's no hardware entropy source, no
//! allocator, and multiplication is something you'd rather avoid in a hot loop. Everything here is
//! shifts and XORs, a bit at a time.
//!
//! Usage is one of two patterns:
//!
//! * A seed fixed at compile time, known not to be zero: `Rng::new(SEED)` and go.
//! * A seed obtained at runtime (a timer value, button timing, etc.), which might be zero:
//!   `Rng::with_seed(hi, lo)`, or `set_seed` followed by `fix_seed`.
//!
//! It is *not* cryptographically secure, and makes no promises beyond cycling through every
//! non-zero 16-bit state before repeating.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod error;
pub mod iter;
pub mod register;
pub mod rng;

pub use error::RngError;
pub use register::LfsrState;
pub use rng::{Rng, DEFAULT_SEED, FALLBACK_SEED};
