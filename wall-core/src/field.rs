use std::ops::Index;

use serde::Serialize;

use crate::error::{ConfigError, storage_len};

/// Time series of temperature slices `u[k][i][j]`, stored contiguously.
///
/// Each slice is `n_rows * n_cols` values in row-major order; row 0 is the
/// exterior face.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureField {
    n_steps: usize,
    n_rows: usize,
    n_cols: usize,
    data: Vec<f64>,
}

impl TemperatureField {
    /// Field of `n_steps` slices whose first slice is uniformly `u_initial`.
    ///
    /// Later slices start zeroed and are meant to be written by the solver only.
    /// Fails without allocating when the history would not fit in memory.
    pub(crate) fn with_initial(
        n_steps: usize,
        n_rows: usize,
        n_cols: usize,
        u_initial: f64,
    ) -> Result<Self, ConfigError> {
        let size = storage_len("grid", n_rows, n_cols)?;
        let len = storage_len("history", n_steps, size)?;
        let mut data = vec![0.0; len];
        data[..size].fill(u_initial);
        Ok(TemperatureField {
            n_steps,
            n_rows,
            n_cols,
            data,
        })
    }

    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// `(n_steps, n_rows, n_cols)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.n_steps, self.n_rows, self.n_cols)
    }

    fn slice_len(&self) -> usize {
        self.n_rows * self.n_cols
    }

    pub fn slice(&self, k: usize) -> &[f64] {
        let size = self.slice_len();
        &self.data[k * size..(k + 1) * size]
    }

    pub fn row(&self, k: usize, i: usize) -> &[f64] {
        let start = i * self.n_cols;
        &self.slice(k)[start..start + self.n_cols]
    }

    pub fn get(&self, k: usize, i: usize, j: usize) -> f64 {
        self[(k, i, j)]
    }

    /// The latest slice.
    pub fn last(&self) -> &[f64] {
        self.slice(self.n_steps - 1)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Slice `k` for reading and slice `k + 1` for writing.
    pub(crate) fn step_pair(&mut self, k: usize) -> (&[f64], &mut [f64]) {
        let size = self.slice_len();
        let (head, tail) = self.data.split_at_mut((k + 1) * size);
        (&head[k * size..], &mut tail[..size])
    }
}

impl Index<(usize, usize, usize)> for TemperatureField {
    type Output = f64;

    fn index(&self, (k, i, j): (usize, usize, usize)) -> &f64 {
        assert!(
            k < self.n_steps && i < self.n_rows && j < self.n_cols,
            "index ({k},{i},{j}) out of bounds for shape {:?}",
            self.shape()
        );
        &self.data[(k * self.n_rows + i) * self.n_cols + j]
    }
}

/// Summary statistics of one slice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SliceStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl SliceStats {
    /// Returns `None` for an empty slice.
    pub fn of(slice: &[f64]) -> Option<SliceStats> {
        if slice.is_empty() {
            return None;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &v in slice {
            min = min.min(v);
            max = max.max(v);
            sum += v;
        }
        Some(SliceStats {
            min,
            max,
            mean: sum / slice.len() as f64,
        })
    }
}

/// Largest absolute node-wise difference between two slices of equal length.
///
/// A value near zero between consecutive slices indicates steady state.
pub fn max_abs_change(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}
