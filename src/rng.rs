//! A simple random number generator using a Linear Feedback Shift Register.
//!
//! Every output is built from `advance_bit`, which is the only thing that touches the feedback.

use crate::{
    error::RngError,
    iter::{Bits, Bytes},
    register::LfsrState,
};

/// The seed used by `init`. Any non-zero value works; this one is the classic example seed for
/// this tap arrangement.
pub const DEFAULT_SEED: u16 = 0xACE1;

/// What `fix_seed` replaces an all-zero register with.
pub const FALLBACK_SEED: u16 = 0x0001;

/// Largest number of bits `get_bits` can pack into its result.
const MAX_BITS: u8 = 8;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Rng {
    state: LfsrState,
}

impl Rng {
    /// Creates a generator seeded with `DEFAULT_SEED`.
    pub fn init() -> Rng {
        Rng::new(DEFAULT_SEED)
    }

    /// Creates a generator with the given seed.
    ///
    /// The seed is used as-is, so a zero seed gives a generator that only ever returns zero. Use
    /// `with_seed` if the seed isn't a known constant.
    pub fn new(seed: u16) -> Rng {
        log::info!("LFSR initialised with seed: {:#06X}", seed);
        Rng {
            state: LfsrState::from_word(seed),
        }
    }

    /// Creates a generator from a runtime-supplied seed, replacing a zero seed with
    /// `FALLBACK_SEED`.
    pub fn with_seed(hi: u8, lo: u8) -> Rng {
        let mut rng = Rng::new((hi as u16) << 8 | lo as u16);
        rng.fix_seed();
        rng
    }

    pub fn state(&self) -> &LfsrState {
        &self.state
    }

    /// The value returned by the most recent `get_bit`, `get_bits` or `get_byte`.
    pub fn last_value(&self) -> u8 {
        self.state.last_value()
    }

    /// Overwrites the register. This does not guard against a zero seed; call `fix_seed`
    /// afterwards if the seed came from somewhere you don't control.
    pub fn set_seed(&mut self, hi: u8, lo: u8) {
        log::debug!("LFSR reseeded: {:#04X}{:02X}", hi, lo);
        self.state.set(hi, lo);
    }

    /// Makes sure the register isn't all zeros, which would lock the generator on zero forever.
    pub fn fix_seed(&mut self) {
        if self.state.is_zero() {
            log::warn!("Zero LFSR seed, using fallback {:#06X}", FALLBACK_SEED);
            self.state.set((FALLBACK_SEED >> 8) as u8, FALLBACK_SEED as u8);
        }
    }

    /// Advances the register by one bit, and returns the bit shifted out.
    #[inline]
    pub fn advance_bit(&mut self) -> u8 {
        self.state.step()
    }

    /// Advances the register `n` times, throwing the output away. Useful for priming a freshly
    /// seeded generator.
    pub fn advance_bits(&mut self, n: u8) {
        for _ in 0..n {
            self.advance_bit();
        }
    }

    /// Returns a single random bit, `0` or `1`.
    pub fn get_bit(&mut self) -> u8 {
        let bit = self.advance_bit();
        self.state.set_last_value(bit);
        bit
    }

    /// Returns `n` random bits, where `n` is between 1 and 8.
    ///
    /// The first bit generated goes into bit 0 of the result, the next into bit 1, and so on.
    /// Anything above bit `n - 1` is zero.
    pub fn get_bits(&mut self, n: u8) -> Result<u8, RngError> {
        if n == 0 || n > MAX_BITS {
            return Err(RngError::InvalidArgument);
        }

        let mut value = 0;
        for i in 0..n {
            value |= self.advance_bit() << i;
        }

        self.state.set_last_value(value);
        Ok(value)
    }

    /// Returns a random byte.
    ///
    /// This hands back the low byte of the register as it is *now*, then shifts the register
    /// along by 8 so the next call sees a fresh byte. It isn't built from the output bits like
    /// `get_bits` is, but since the output bits are exactly the low byte's bits, the value is
    /// the same as `get_bits(8)`.
    pub fn get_byte(&mut self) -> u8 {
        let value = self.state.lo();
        self.advance_bits(8);

        self.state.set_last_value(value);
        value
    }

    /// Returns a byte in `min..max`. An empty range returns `min`.
    pub fn next_range(&mut self, min: u8, max: u8) -> Result<u8, RngError> {
        if max < min {
            return Err(RngError::InvalidArgument);
        }

        let range = max - min;

        if range == 0 {
            Ok(min)
        } else {
            Ok((self.get_byte() % range) + min)
        }
    }

    /// Fills the buffer with random bytes, one `get_byte` each.
    pub fn fill_bytes(&mut self, buf: &mut [u8]) {
        for byte in buf.iter_mut() {
            *byte = self.get_byte();
        }
    }

    /// An endless iterator of `get_byte` values.
    pub fn bytes(&mut self) -> Bytes<'_> {
        Bytes::new(self)
    }

    /// An endless iterator of `get_bit` values.
    pub fn bits(&mut self) -> Bits<'_> {
        Bits::new(self)
    }
}

impl Default for Rng {
    fn default() -> Self {
        Rng::init()
    }
}
