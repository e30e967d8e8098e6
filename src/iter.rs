//! Iterators over the generator's output, so the usual iterator stuff (`take`, `zip`, etc.) can be
//! used instead of writing loops around `get_byte`.
//!
//! Both are endless; they borrow the generator mutably, so it carries on from wherever the
//! iterator left off once it's dropped.

use crate::rng::Rng;
use core::iter::FusedIterator;

pub struct Bytes<'a> {
    rng: &'a mut Rng,
}

impl<'a> Bytes<'a> {
    pub(crate) fn new(rng: &'a mut Rng) -> Self {
        Self { rng }
    }
}

impl Iterator for Bytes<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.rng.get_byte())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for Bytes<'_> {}

pub struct Bits<'a> {
    rng: &'a mut Rng,
}

impl<'a> Bits<'a> {
    pub(crate) fn new(rng: &'a mut Rng) -> Self {
        Self { rng }
    }
}

impl Iterator for Bits<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.rng.get_bit())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for Bits<'_> {}

#[cfg(test)]
mod tests {
    use crate::rng::Rng;

    #[test]
    fn test_bytes_match_get_byte() {
        let mut a = Rng::new(0x00A5);
        let mut b = Rng::new(0x00A5);

        for byte in a.bytes().take(50) {
            assert_eq!(byte, b.get_byte());
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_bits_match_get_bit() {
        let mut rng = Rng::new(0x00A5);
        let mut bits = [0; 8];

        for (o, b) in bits.iter_mut().zip(rng.bits()) {
            *o = b;
        }

        // The first eight bits out are the seed's low byte, least significant first.
        assert_eq!(bits, [1, 0, 1, 0, 0, 1, 0, 1]);
        assert_eq!(rng.state().word(), 0x9D00);
    }
}
