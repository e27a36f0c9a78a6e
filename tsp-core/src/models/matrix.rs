#[cfg(test)]
#[path = "../../tests/unit/models/matrix_test.rs"]
mod matrix_test;

use crate::utils::{Float, GenericError, GenericResult};

/// A dense square matrix of pairwise distances indexed by vertex positions.
/// Unknown distances are represented by positive infinity, the diagonal is always zero.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    values: Vec<Float>,
}

impl DistanceMatrix {
    /// Creates a new matrix with `size`*`size` unknown distances.
    pub fn new(size: usize) -> Self {
        let mut values = vec![Float::INFINITY; size * size];
        (0..size).for_each(|idx| values[idx * size + idx] = 0.);

        Self { size, values }
    }

    /// Creates a matrix from flatten row-major values.
    pub fn from_values(values: Vec<Float>) -> GenericResult<Self> {
        let size = (values.len() as Float).sqrt() as usize;

        if size * size != values.len() {
            return Err(GenericError::from(format!("non-square flatten matrix: {} items", values.len())));
        }

        Ok(Self { size, values })
    }

    /// Returns matrix dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns a value at given cell.
    pub fn get(&self, row: usize, col: usize) -> Float {
        self.values[row * self.size + col]
    }

    /// Sets a value to given cell.
    pub fn set(&mut self, row: usize, col: usize, value: Float) {
        self.values[row * self.size + col] = value;
    }

    /// Returns true if all off diagonal values are known.
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(|value| value.is_finite())
    }

    /// Appends a new row and column with unknown distances.
    pub(crate) fn grow(&mut self) {
        let mut resized = Self::new(self.size + 1);
        for row in 0..self.size {
            for col in 0..self.size {
                resized.set(row, col, self.get(row, col));
            }
        }

        *self = resized;
    }

    /// Removes a row and a column at given index.
    pub(crate) fn remove(&mut self, index: usize) {
        let size = self.size;
        self.values = self
            .values
            .iter()
            .enumerate()
            .filter(|(idx, _)| idx / size != index && idx % size != index)
            .map(|(_, value)| *value)
            .collect();
        self.size = size.saturating_sub(1);
    }
}
