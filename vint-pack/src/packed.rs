//! Homogeneous fixed-width element array over a bit-packed store.
//!
//! Element `i` occupies bits `[i*W, (i+1)*W)` of the slot stream, LSB-first
//! within each slot. The element width may exceed the slot width (a 12-bit
//! array over `u8` slots is legal), so element access walks as many slots
//! as the cell covers; when the cell fits one slot that walk is a single
//! masked read. Insert and remove shift the tail at bit granularity, one
//! element cell at a time.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::bitstream::mask;
use crate::slot::Slot;
use vint_types::{ErrorCode, VintError};

/// Fixed-width element array, parameterized by the slot word.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackedArray<S: Slot> {
    width: u32,
    len: usize,
    slots: Vec<S>,
}

impl<S: Slot> PackedArray<S> {
    /// Create an empty array of `width`-bit elements.
    ///
    /// # Errors
    ///
    /// `InvalidWidth` unless `width` is 1..=64.
    pub fn new(width: u32) -> Result<Self, VintError> {
        if width == 0 || width > 64 {
            return Err(VintError::Code(ErrorCode::InvalidWidth));
        }
        Ok(Self {
            width,
            len: 0,
            slots: Vec::new(),
        })
    }

    /// Create an array of `len` zero elements.
    pub fn zeroed(width: u32, len: usize) -> Result<Self, VintError> {
        let mut array = Self::new(width)?;
        array.len = len;
        array.slots = Vec::new();
        array.slots.resize(Self::slots_for(width, len), S::default());
        Ok(array)
    }

    fn slots_for(width: u32, len: usize) -> usize {
        (len * width as usize).div_ceil(S::BITS as usize)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Element bit width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Backing slot words.
    pub fn slots(&self) -> &[S] {
        &self.slots
    }

    /// Read element `i`.
    ///
    /// # Errors
    ///
    /// `ValueOutOfRange` if `i >= len`.
    pub fn get(&self, i: usize) -> Result<u64, VintError> {
        if i >= self.len {
            return Err(VintError::Code(ErrorCode::ValueOutOfRange));
        }
        Ok(self.read(i))
    }

    /// Overwrite element `i` with `v`.
    ///
    /// # Errors
    ///
    /// `ValueOutOfRange` if `i >= len` or `v` does not fit the element
    /// width.
    pub fn set(&mut self, i: usize, v: u64) -> Result<(), VintError> {
        if i >= self.len {
            return Err(VintError::Code(ErrorCode::ValueOutOfRange));
        }
        self.check_value(v)?;
        self.write(i, v);
        Ok(())
    }

    /// Append `v` at the end.
    pub fn append(&mut self, v: u64) -> Result<(), VintError> {
        self.check_value(v)?;
        self.len += 1;
        self.grow_slots();
        self.write(self.len - 1, v);
        Ok(())
    }

    /// Insert `v` at index `i`, shifting elements `i..` up one position.
    ///
    /// # Errors
    ///
    /// `ValueOutOfRange` if `i > len` or `v` does not fit.
    pub fn insert(&mut self, i: usize, v: u64) -> Result<(), VintError> {
        if i > self.len {
            return Err(VintError::Code(ErrorCode::ValueOutOfRange));
        }
        self.check_value(v)?;
        self.len += 1;
        self.grow_slots();
        let mut j = self.len - 1;
        while j > i {
            let moved = self.read(j - 1);
            self.write(j, moved);
            j -= 1;
        }
        self.write(i, v);
        Ok(())
    }

    /// Remove and return element `i`, shifting elements `i+1..` down.
    ///
    /// # Errors
    ///
    /// `ValueOutOfRange` if `i >= len`.
    pub fn remove(&mut self, i: usize) -> Result<u64, VintError> {
        if i >= self.len {
            return Err(VintError::Code(ErrorCode::ValueOutOfRange));
        }
        let removed = self.read(i);
        for j in i..self.len - 1 {
            let moved = self.read(j + 1);
            self.write(j, moved);
        }
        // Clear the vacated tail cell so the store stays canonical.
        self.write(self.len - 1, 0);
        self.len -= 1;
        self.slots.truncate(Self::slots_for(self.width, self.len));
        Ok(removed)
    }

    /// Leftmost insertion point for `key`: the smallest index `i` with
    /// `get(i) >= key`. Duplicates land at the lowest matching index.
    pub fn binary_search(&self, key: u64) -> usize {
        let mut lo = 0;
        let mut hi = self.len;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.read(mid) < key {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo
    }

    /// Insert `v` keeping the array sorted; returns the insertion index.
    pub fn insert_sorted(&mut self, v: u64) -> Result<usize, VintError> {
        let at = self.binary_search(v);
        self.insert(at, v)?;
        Ok(at)
    }

    /// Iterate the elements as u64 values.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        (0..self.len).map(|i| self.read(i))
    }

    fn check_value(&self, v: u64) -> Result<(), VintError> {
        if self.width < 64 && v >> self.width != 0 {
            return Err(VintError::Code(ErrorCode::ValueOutOfRange));
        }
        Ok(())
    }

    fn grow_slots(&mut self) {
        let needed = Self::slots_for(self.width, self.len);
        if self.slots.len() < needed {
            self.slots.resize(needed, S::default());
        }
    }

    /// Read the cell for element `i`, walking every slot it covers.
    fn read(&self, i: usize) -> u64 {
        let slot_bits = S::BITS as usize;
        let mut bit = i * self.width as usize;
        let mut out = 0u64;
        let mut got = 0u32;
        while got < self.width {
            let index = bit / slot_bits;
            let offset = (bit % slot_bits) as u32;
            let take = (S::BITS - offset).min(self.width - got);
            let chunk = (self.slots[index].to_u64() >> offset) & mask(take);
            out |= chunk << got;
            got += take;
            bit += take as usize;
        }
        out
    }

    /// Write the cell for element `i`; neighboring cells are untouched.
    fn write(&mut self, i: usize, v: u64) {
        let slot_bits = S::BITS as usize;
        let mut bit = i * self.width as usize;
        let mut put = 0u32;
        while put < self.width {
            let index = bit / slot_bits;
            let offset = (bit % slot_bits) as u32;
            let take = (S::BITS - offset).min(self.width - put);
            let chunk = (v >> put) & mask(take);
            let cleared = self.slots[index].to_u64() & !(mask(take) << offset);
            self.slots[index] = S::from_u64(cleared | (chunk << offset));
            put += take;
            bit += take as usize;
        }
    }
}
