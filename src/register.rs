//! The shift register itself, and the one operation that touches its feedback.
//!
//! The register is kept as two bytes rather than a `u16`, because that's how the 8-bit targets
//! this is meant for actually hold it, and because the taps only ever read the low byte.
//!
//! ```text
//!          hi                      lo
//!   +-+-+-+-+-+-+-+-+      +-+-+-+-+-+-+-+-+
//! F>|7|6|5|4|3|2|1|0|>---->|7|6|5|4|3|2|1|0|>--> out
//!   +-+-+-+-+-+-+-+-+      +-+-+-+-+-+-+-+-+
//!
//! F = lo.5 ^ lo.3 ^ lo.2 ^ lo.0
//! ```
//!
//! Taken as a single 16-bit word this is the polynomial x^16 + x^14 + x^13 + x^11 + 1, which is
//! maximal length: every non-zero state is visited once before the sequence repeats.

/// Low byte tap - Bit 0
pub const TAP0: u8 = 0;
/// Low byte tap - Bit 2
pub const TAP2: u8 = 2;
/// Low byte tap - Bit 3
pub const TAP3: u8 = 3;
/// Low byte tap - Bit 5
pub const TAP5: u8 = 5;

/// The generator's entire state: the 16-bit register, plus the last value handed out.
///
/// An all-zero register is a fixed point of the feedback function. Nothing in here stops you
/// from getting into that state; see `Rng::fix_seed`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LfsrState {
    hi: u8,
    lo: u8,
    last_value: u8,
}

impl LfsrState {
    pub const fn new(hi: u8, lo: u8) -> Self {
        Self {
            hi,
            lo,
            last_value: 0,
        }
    }

    pub const fn from_word(word: u16) -> Self {
        Self::new((word >> 8) as u8, word as u8)
    }

    pub fn hi(&self) -> u8 {
        self.hi
    }

    pub fn lo(&self) -> u8 {
        self.lo
    }

    /// The register as one word, `hi` in the top byte.
    pub fn word(&self) -> u16 {
        (self.hi as u16) << 8 | self.lo as u16
    }

    pub fn is_zero(&self) -> bool {
        self.hi == 0 && self.lo == 0
    }

    /// The most recent value produced by one of the `get_*` accessors.
    pub fn last_value(&self) -> u8 {
        self.last_value
    }

    pub(crate) fn set(&mut self, hi: u8, lo: u8) {
        self.hi = hi;
        self.lo = lo;
    }

    pub(crate) fn set_last_value(&mut self, value: u8) {
        self.last_value = value;
    }

    /// The XOR of the tap bits in the low byte.
    fn feedback(&self) -> u8 {
        let lo = self.lo;
        ((lo >> TAP0) ^ (lo >> TAP2) ^ (lo >> TAP3) ^ (lo >> TAP5)) & 0x1
    }

    /// Shifts the whole register right by one bit, returning the bit that fell out of the bottom.
    ///
    /// The bit leaving `hi` crosses over into the top of `lo`, and the feedback bit goes into the
    /// top of `hi`. The feedback has to be read before anything moves.
    pub fn step(&mut self) -> u8 {
        let feedback = self.feedback();
        let out = self.lo & 0x1;

        self.lo = (self.lo >> 1) | ((self.hi & 0x1) << 7);
        self.hi = (self.hi >> 1) | (feedback << 7);

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_layout() {
        let state = LfsrState::from_word(0xACE1);
        assert_eq!(state.hi(), 0xAC);
        assert_eq!(state.lo(), 0xE1);
        assert_eq!(state.word(), 0xACE1);
    }

    #[test]
    fn test_step_matches_word_shift() {
        // Check the split-byte arithmetic against the plain 16-bit form.
        let mut state = LfsrState::from_word(0xACE1);
        let mut word: u16 = 0xACE1;

        for _ in 0..1000 {
            let bit = (word ^ (word >> 2) ^ (word >> 3) ^ (word >> 5)) & 1;
            let expected_out = (word & 1) as u8;
            word = (word >> 1) | (bit << 15);

            assert_eq!(state.step(), expected_out);
            assert_eq!(state.word(), word);
        }
    }

    #[test]
    fn test_cross_feed() {
        // hi's bit 0 moves into lo's bit 7, feedback (1 ^ 0 ^ 0 ^ 0) lands in hi's bit 7.
        let mut state = LfsrState::new(0x01, 0x01);
        assert_eq!(state.step(), 1);
        assert_eq!(state.hi(), 0x80);
        assert_eq!(state.lo(), 0x80);
    }

    #[test]
    fn test_zero_is_a_trap() {
        let mut state = LfsrState::new(0, 0);
        for _ in 0..100 {
            assert_eq!(state.step(), 0);
            assert!(state.is_zero());
        }
    }

    #[test]
    fn test_maximal_period() {
        const SEED: u16 = 0xACE1;
        let mut seen = vec![false; 1 << 16];
        let mut state = LfsrState::from_word(SEED);

        for i in 1..=0xFFFFu32 {
            state.step();
            let word = state.word();
            assert_ne!(word, 0, "reached the zero state after {} steps", i);
            assert!(!seen[word as usize], "state {:#06X} visited twice", word);
            seen[word as usize] = true;

            if word == SEED {
                assert_eq!(i, 0xFFFF, "seed recurred early, after {} steps", i);
            }
        }

        assert_eq!(state.word(), SEED);
        assert_eq!(seen.iter().filter(|s| **s).count(), 0xFFFF);
    }
}
