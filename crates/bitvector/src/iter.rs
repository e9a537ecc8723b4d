use crate::limb::{self, Limb, location};

/// An iterator over the logical bits of a [crate::BitVector], lowest index first.
pub struct Iter<'a> {
    limbs: &'a [Limb],
    start: usize,
    end: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(limbs: &'a [Limb], len: usize) -> Self {
        Self {
            limbs,
            start: 0,
            end: len,
        }
    }

    fn bit(&self, index: usize) -> bool {
        let (word, offset) = location(index);
        limb::get(self.limbs[word], offset)
    }
}

impl Iterator for Iter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start >= self.end {
            return None;
        }
        let bit = self.bit(self.start);
        self.start += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = ExactSizeIterator::len(self);
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start >= self.end {
            return None;
        }
        self.end -= 1;
        Some(self.bit(self.end))
    }
}

impl ExactSizeIterator for Iter<'_> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_by_len() {
        let limbs = [0b1011, Limb::MAX];
        let iter = Iter::new(&limbs, 4);
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.collect::<Vec<_>>(), vec![true, true, false, true]);

        assert_eq!(Iter::new(&limbs, 0).next(), None);
        assert_eq!(Iter::new(&limbs, 128).filter(|bit| *bit).count(), 67);
    }

    #[test]
    fn both_ends() {
        let limbs = [0b0110];
        let mut iter = Iter::new(&limbs, 4);
        assert_eq!(iter.next_back(), Some(false));
        assert_eq!(iter.next(), Some(false));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.rev().collect::<Vec<_>>(), vec![true, true]);
    }
}
