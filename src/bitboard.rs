//! A runtime-sized square bitboard packed into an unsigned integer.
//!
//! The type is `no_std` friendly and avoids heap allocations. A board is an
//! `n×n` grid stored row-major in the low `n*n` bits of `T`, so a ship
//! placement or a whole fleet is a single `Copy` value with O(1) union,
//! intersection, disjointness and membership tests.

use core::hash::Hash;
use core::ops::{BitAnd, BitOr, Not};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Board type used by the engine; fits grids up to 11×11.
pub type BB = BitBoard<u128>;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested board size N*N exceeds capacity of `T::BITS`, or does not
    /// fit in a `usize` at all.
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column index is out of bounds [0..N).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => {
                write!(f, "SizeTooLarge: {n}x{n} board exceeds T::BITS={capacity}")
            }
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}

/// An N×N bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T>
where
    T: PrimInt + Unsigned + Zero + Hash,
{
    bits: T,
    n: usize,
}

impl<T> BitBoard<T>
where
    T: PrimInt + Unsigned + Zero + Hash,
{
    /// Number of bits available in `T`.
    #[inline]
    pub fn capacity() -> usize {
        mem::size_of::<T>() * 8
    }

    #[inline]
    fn mask(n: usize) -> T {
        if n * n == Self::capacity() {
            !T::zero()
        } else {
            (T::one() << (n * n)) - T::one()
        }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if n*n > T::BITS.
    pub fn try_new(n: usize) -> Result<Self, BitBoardError> {
        let capacity = Self::capacity();
        match n.checked_mul(n) {
            Some(cells) if cells <= capacity => Ok(BitBoard { bits: T::zero(), n }),
            _ => Err(BitBoardError::SizeTooLarge { n, capacity }),
        }
    }

    /// An empty board with the same side length as `self`.
    #[inline]
    pub fn empty_like(&self) -> Self {
        BitBoard {
            bits: T::zero(),
            n: self.n,
        }
    }

    /// Side length of the board.
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Returns the number of set bits (occupied cells).
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Returns true if the two boards share no set bit.
    #[inline]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        (self.bits & other.bits).is_zero()
    }

    /// Returns true if every bit set in `other` is also set in `self`.
    #[inline]
    pub fn contains_all(&self, other: &Self) -> bool {
        (self.bits & other.bits) == other.bits
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        self.check_bounds(row, col)?;
        Ok(self.test(row * self.n + col))
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        self.check_bounds(row, col)?;
        let idx = row * self.n + col;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    #[inline]
    fn test(&self, idx: usize) -> bool {
        ((self.bits >> idx) & T::one()) != T::zero()
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), BitBoardError> {
        if row >= self.n || col >= self.n {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }

    /// Creates a bitboard from an iterator over `(row, col)` positions.
    pub fn from_iter<I>(n: usize, iter: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::try_new(n)?;
        for (r, c) in iter {
            board.set(r, c)?;
        }
        Ok(board)
    }

    /// Iterator over the set bits of the board in row-major order.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T> {
        SetBits {
            board: self,
            idx: 0,
        }
    }

    fn write_grid(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.n {
            for c in 0..self.n {
                let bit = if self.test(r * self.n + c) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            if r + 1 < self.n {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl<T> fmt::Debug for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}x{}>:", self.n, self.n)?;
        self.write_grid(f)
    }
}

impl<T> fmt::Display for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_grid(f)
    }
}

/// Iterator over the set bits of a bitboard.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero + Hash,
{
    board: &'a BitBoard<T>,
    idx: usize,
}

impl<'a, T> Iterator for SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero + Hash,
{
    type Item = (usize, usize);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let n = self.board.n;
        while self.idx < n * n {
            let idx = self.idx;
            self.idx += 1;
            if self.board.test(idx) {
                return Some((idx / n, idx % n));
            }
        }
        None
    }
}

// Binary operators assume both sides share a side length; the left operand's
// size is kept.

impl<T> BitAnd for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero + Hash,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        debug_assert_eq!(self.n, rhs.n);
        BitBoard {
            bits: self.bits & rhs.bits,
            n: self.n,
        }
    }
}

impl<T> BitOr for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero + Hash,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        debug_assert_eq!(self.n, rhs.n);
        BitBoard {
            bits: self.bits | rhs.bits,
            n: self.n,
        }
    }
}

/// Bitwise NOT for inverting a bitboard (within board bounds).
impl<T> Not for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero + Hash,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        BitBoard {
            bits: !self.bits & Self::mask(self.n),
            n: self.n,
        }
    }
}
