//! Free-cell set as a 9-bit mask

use super::{Pos, TOTAL_CELLS};

/// Mask with every cell of the board set
const ALL_CELLS: u16 = (1 << TOTAL_CELLS) - 1;

/// Set of unoccupied cells, one bit per cell index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FreeCells {
    bits: u16,
}

impl FreeCells {
    /// Every cell free
    pub const fn full() -> Self {
        Self { bits: ALL_CELLS }
    }

    /// No cell free
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    /// Mark a cell as free
    #[inline]
    pub fn insert(&mut self, pos: Pos) {
        self.bits |= 1u16 << pos.to_index();
    }

    /// Mark a cell as occupied
    #[inline]
    pub fn remove(&mut self, pos: Pos) {
        self.bits &= !(1u16 << pos.to_index());
    }

    /// Check if the cell is free
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (self.bits >> pos.to_index()) & 1 == 1
    }

    /// Number of free cells (popcount)
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Check if no cell is free
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterate over free positions in index order
    pub fn iter(&self) -> FreeCellsIter {
        FreeCellsIter { bits: self.bits }
    }
}

impl Default for FreeCells {
    fn default() -> Self {
        Self::full()
    }
}

impl IntoIterator for FreeCells {
    type Item = Pos;
    type IntoIter = FreeCellsIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over free cells, lowest index first
pub struct FreeCellsIter {
    bits: u16,
}

impl Iterator for FreeCellsIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        // Clear the bit we just found
        self.bits &= self.bits - 1;
        Some(Pos::from_index(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for FreeCellsIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_set() {
        let free = FreeCells::full();
        assert_eq!(free.len(), 9);
        assert!(!free.is_empty());
        let cells: Vec<usize> = free.iter().map(Pos::to_index).collect();
        assert_eq!(cells, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_insert_remove() {
        let mut free = FreeCells::full();
        free.remove(Pos::new(1, 1));
        assert!(!free.contains(Pos::new(1, 1)));
        assert_eq!(free.len(), 8);
        free.insert(Pos::new(1, 1));
        assert_eq!(free, FreeCells::full());
    }

    #[test]
    fn test_empty_iter() {
        assert_eq!(FreeCells::none().iter().count(), 0);
        assert!(FreeCells::none().is_empty());
    }
}
