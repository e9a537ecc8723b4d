use std::{
    fmt::{self, Write as _},
    hash::{Hash, Hasher},
};

use crate::{
    error::Error,
    iter::Iter,
    limb::{self, BITS, Limb, limbs_through, location, ones_up_to},
};

/// A growable vector of bits packed into [Limb]s.
///
/// Bit `i` lives in limb `i / 64` at offset `i % 64`. Only the bits below [BitVector::len] are
/// meaningful; bits past it may hold anything and are ignored by comparison, hashing and
/// formatting.
#[derive(Clone)]
pub struct BitVector {
    len: usize,
    limbs: Vec<Limb>,
}

impl BitVector {
    /// Number of limbs added by [BitVector::grow].
    pub const GROWTH: usize = 2;

    /// Create an empty vector with room for at least `bits` bits.
    pub fn init(bits: usize) -> Result<Self, Error> {
        Self::with_limbs((bits / BITS + 1).max(1))
    }

    /// Create an empty, boxed vector. Allocates one limb less of slack than [BitVector::init].
    pub fn create(bits: usize) -> Result<Box<Self>, Error> {
        Self::with_limbs((bits / BITS).max(1)).map(Box::new)
    }

    fn with_limbs(capacity: usize) -> Result<Self, Error> {
        let mut limbs = Vec::new();
        reserve(&mut limbs, capacity)?;
        limbs.resize(capacity, 0);
        Ok(Self { len: 0, limbs })
    }

    /// Release the storage. Equivalent to dropping the vector.
    pub fn release(self) {
        log::trace!("releasing {} limbs", self.limbs.len());
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated limbs.
    pub fn capacity(&self) -> usize {
        self.limbs.len()
    }

    /// Number of addressable bits, `capacity() * 64`.
    pub fn bit_capacity(&self) -> usize {
        self.limbs.len() * BITS
    }

    /// All allocated limbs, including those past the logical length.
    pub fn as_limbs(&self) -> &[Limb] {
        &self.limbs
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.limbs, self.len)
    }

    /// Mark every allocated bit as logical without touching the limbs.
    pub fn fill(&mut self) -> &mut Self {
        self.len = self.bit_capacity();
        self
    }

    /// Set the logical length to `n` without touching the limbs.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds [BitVector::bit_capacity].
    pub fn filln(&mut self, n: usize) -> &mut Self {
        assert!(
            n <= self.bit_capacity(),
            "length {n} past {} allocated bits",
            self.bit_capacity()
        );
        self.len = n;
        self
    }

    pub fn zero(&mut self) -> &mut Self {
        self.fill().limbs.fill(0);
        self
    }

    pub fn one(&mut self) -> &mut Self {
        self.fill().limbs.fill(Limb::MAX);
        self
    }

    /// Set the length to `n` and clear every limb up to and including the one holding bit `n`.
    pub fn zeron(&mut self, n: usize) -> &mut Self {
        self.filln(n).overwrite_through(n, 0)
    }

    /// Set the length to `n` and set every limb up to and including the one holding bit `n`.
    pub fn onen(&mut self, n: usize) -> &mut Self {
        self.filln(n).overwrite_through(n, Limb::MAX)
    }

    fn overwrite_through(&mut self, index: usize, pattern: Limb) -> &mut Self {
        let count = limbs_through(index).min(self.limbs.len());
        self.limbs[..count].fill(pattern);
        self
    }

    /// Copy this vector into `destination`, or into a fresh vector of the same capacity.
    ///
    /// A destination with fewer limbs is grown and zeroed first; otherwise its storage is
    /// reused and limbs past the copied range keep their contents. On failure the destination
    /// is dropped.
    pub fn copy(&self, destination: Option<BitVector>) -> Result<BitVector, Error> {
        let mut destination = match destination {
            Some(destination) => destination,
            None => Self::with_limbs(self.capacity())?,
        };
        self.copy_into(&mut destination)?;
        Ok(destination)
    }

    /// Like [BitVector::copy], but in place. `destination` is unchanged on failure.
    pub fn copy_into(&self, destination: &mut BitVector) -> Result<(), Error> {
        if destination.capacity() < self.capacity() {
            destination.regrow_zeroed(self.capacity())?;
        }
        destination.len = self.len;
        let count = limbs_through(self.len).min(self.capacity());
        destination.limbs[..count].copy_from_slice(&self.limbs[..count]);
        Ok(())
    }

    /// Replace the storage with `capacity` zeroed limbs. Unchanged on failure.
    fn regrow_zeroed(&mut self, capacity: usize) -> Result<(), Error> {
        let additional = capacity.saturating_sub(self.limbs.len());
        reserve(&mut self.limbs, additional)?;
        log::trace!(
            "regrowing from {} to {capacity} limbs",
            self.limbs.len()
        );
        self.limbs.fill(0);
        self.limbs.resize(capacity, 0);
        Ok(())
    }

    fn check(&self, index: usize) -> Result<(), Error> {
        if index >= self.len || index / BITS >= self.limbs.len() {
            return Err(Error::OutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    /// Write bit `index`, failing without mutation if it is outside the logical length.
    pub fn set(&mut self, index: usize, value: bool) -> Result<(), Error> {
        self.check(index)?;
        // Safety: checked above.
        unsafe { self.set_unchecked(index, value) };
        Ok(())
    }

    /// Read bit `index`, failing if it is outside the logical length.
    pub fn get(&self, index: usize) -> Result<bool, Error> {
        self.check(index)?;
        // Safety: checked above.
        Ok(unsafe { self.get_unchecked(index) })
    }

    /// Write bit `index` without any bounds check. The logical length is not consulted.
    ///
    /// # Safety
    ///
    /// `index / 64` must be less than [BitVector::capacity].
    #[inline]
    pub unsafe fn set_unchecked(&mut self, index: usize, value: bool) {
        let (word, offset) = location(index);
        debug_assert!(word < self.limbs.len());
        let slot = unsafe { self.limbs.get_unchecked_mut(word) };
        *slot = limb::set(*slot, offset, value);
    }

    /// Read bit `index` without any bounds check. The logical length is not consulted.
    ///
    /// # Safety
    ///
    /// `index / 64` must be less than [BitVector::capacity].
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> bool {
        let (word, offset) = location(index);
        debug_assert!(word < self.limbs.len());
        limb::get(unsafe { *self.limbs.get_unchecked(word) }, offset)
    }

    /// Add [BitVector::GROWTH] limbs of storage. The vector is unchanged on failure.
    pub fn grow(&mut self) -> Result<(), Error> {
        reserve(&mut self.limbs, Self::GROWTH)?;
        let capacity = self.limbs.len() + Self::GROWTH;
        self.limbs.resize(capacity, 0);
        log::trace!("grew to {capacity} limbs");
        Ok(())
    }

    /// Append a bit. Grows when the push fills the last allocated limb, so the next push
    /// always has a limb to land in.
    pub fn push(&mut self, value: bool) -> Result<(), Error> {
        let index = self.len;
        let (word, offset) = location(index);
        let capacity = self.limbs.len();
        if word >= capacity || (offset == BITS - 1 && word + 1 >= capacity) {
            self.grow()?;
        }
        self.len += 1;
        // Safety: `len <= bit_capacity()` always holds, so `word <= capacity` before the grow
        // above and `word < capacity` after it.
        unsafe { self.set_unchecked(index, value) };
        Ok(())
    }

    /// Remove the last bit and return it, or `None` if the vector is empty.
    pub fn pop(&mut self) -> Option<bool> {
        let index = self.len.checked_sub(1)?;
        self.len = index;
        let (word, offset) = location(index);
        Some(limb::get(self.limbs[word], offset))
    }

    /// Push every bit of `bits`, stopping at the first growth failure.
    pub fn try_extend(&mut self, bits: impl IntoIterator<Item = bool>) -> Result<(), Error> {
        bits.into_iter().try_for_each(|bit| self.push(bit))
    }

    /// The full limbs of the logical range, and the final partial limb with its undefined high
    /// bits cleared.
    fn logical(&self) -> (&[Limb], Option<Limb>) {
        let (full, rest) = location(self.len);
        let tail = (rest != 0).then(|| self.limbs[full] & ones_up_to(rest));
        (&self.limbs[..full], tail)
    }

    /// Compare the logical bits of two vectors. Bits past the length are ignored.
    pub fn equals(&self, other: &Self) -> bool {
        self.len == other.len && self.logical() == other.logical()
    }

    /// Add one to the vector read as an unsigned integer, limb 0 least significant. Returns
    /// true if the carry ran out of the last logical bit, leaving every logical bit zero.
    pub fn increment(&mut self) -> bool {
        let (full, rest) = location(self.len);
        for limb in &mut self.limbs[..full] {
            let (sum, carry) = limb.overflowing_add(1);
            *limb = sum;
            if !carry {
                return false;
            }
        }
        if rest == 0 {
            return true;
        }
        let mask = ones_up_to(rest);
        let limb = &mut self.limbs[full];
        if *limb & mask == mask {
            *limb &= !mask;
            true
        } else {
            // Some bit below `rest` is clear, so the carry stops inside the mask.
            *limb += 1;
            false
        }
    }

    pub fn print(&self) {
        println!("{self}");
    }
}

fn reserve(limbs: &mut Vec<Limb>, additional: usize) -> Result<(), Error> {
    let total = limbs.len().saturating_add(additional);
    limbs.try_reserve_exact(additional).map_err(|source| {
        log::warn!("failed to allocate {total} limbs: {source}");
        Error::Allocation {
            limbs: total,
            source,
        }
    })
}

impl PartialEq for BitVector {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for BitVector {}

impl Hash for BitVector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        let (full, tail) = self.logical();
        full.hash(state);
        tail.hash(state);
    }
}

impl Extend<bool> for BitVector {
    /// # Panics
    ///
    /// Panics if the storage cannot grow. Use [BitVector::try_extend] to handle that instead.
    fn extend<T: IntoIterator<Item = bool>>(&mut self, iter: T) {
        if let Err(err) = self.try_extend(iter) {
            panic!("{err}");
        }
    }
}

impl<'a> IntoIterator for &'a BitVector {
    type Item = bool;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<[")?;
        for (word, value) in self.limbs.iter().enumerate() {
            let start = word * BITS;
            if start >= self.len {
                break;
            }
            f.write_char('|')?;
            for offset in 0..(self.len - start).min(BITS) {
                f.write_char(if limb::get(*value, offset) { '1' } else { '0' })?;
            }
        }
        write!(
            f,
            "|],\nn = {}, c = {}, c*{} = {}>",
            self.len,
            self.capacity(),
            BITS,
            self.bit_capacity()
        )
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitVector")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}
