//! Shuffles several parallel columns with one shared permutation, so rows
//! stay aligned across them.

use rand::Rng;

use crate::error::PhysicsError;

/// Anything with indexable rows that can be swapped in place.
pub trait Column {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn swap(&mut self, a: usize, b: usize);
}

impl<T, const N: usize> Column for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b)
    }
}

impl<T> Column for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b)
    }
}

/// Fisher–Yates over every column at once. All columns must have the length
/// of the first one; nothing is touched otherwise.
pub fn shuffle_columns<R: Rng + ?Sized>(
    rng: &mut R,
    columns: &mut [&mut dyn Column],
) -> Result<(), PhysicsError> {
    let Some(first) = columns.first() else {
        return Ok(());
    };
    let expected = first.len();
    for (column, col) in columns.iter().enumerate() {
        if col.len() != expected {
            return Err(PhysicsError::LengthMismatch {
                column,
                expected,
                found: col.len(),
            });
        }
    }

    let mut remaining = expected;
    while remaining > 0 {
        let pick = rng.random_range(0..remaining);
        remaining -= 1;
        for col in columns.iter_mut() {
            col.swap(remaining, pick);
        }
    }
    Ok(())
}
