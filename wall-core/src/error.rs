use std::cmp::Ordering;

use thiserror::Error;

/// Errors returned by the wall solver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WallError {
    /// The physical or run parameters cannot produce a valid grid.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    /// Two slices (or rows) handed to a flux computation do not line up.
    #[error("shape mismatch: expected {expected} values, found {found}")]
    ShapeMismatch { expected: usize, found: usize },
}

/// Reasons a configuration is rejected.
///
/// All of these are detected before any field is allocated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("`{name}` must be strictly positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("`{name}` must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("`{name}` must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    /// Fewer than two nodes along an axis leaves no room for distinct boundary faces.
    #[error("grid needs at least 2 nodes along {axis}, got {nodes}")]
    DegenerateGrid { axis: &'static str, nodes: usize },

    #[error("max_iter_time must be at least 1")]
    NoTimeSteps,

    /// `count * per` values would not fit in addressable memory.
    #[error("{what} of {count} x {per} values is too large to allocate")]
    TooLarge {
        what: &'static str,
        count: usize,
        per: usize,
    },
}

pub(crate) fn strictly_positive(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_infinite() {
        return Err(ConfigError::NotFinite { name, value });
    }
    match value.partial_cmp(&0.0) {
        Some(Ordering::Greater) => Ok(value),
        Some(_) => Err(ConfigError::NonPositive { name, value }),
        None => Err(ConfigError::NotFinite { name, value }),
    }
}

pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_infinite() {
        return Err(ConfigError::NotFinite { name, value });
    }
    match value.partial_cmp(&0.0) {
        Some(Ordering::Greater | Ordering::Equal) => Ok(value),
        Some(Ordering::Less) => Err(ConfigError::Negative { name, value }),
        None => Err(ConfigError::NotFinite { name, value }),
    }
}

pub(crate) fn finite(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NotFinite { name, value })
    }
}

/// Number of `f64` values in `count` blocks of `per`, if such a buffer is
/// allocatable.
pub(crate) fn storage_len(what: &'static str, count: usize, per: usize) -> Result<usize, ConfigError> {
    count
        .checked_mul(per)
        .filter(|&n| n <= isize::MAX as usize / size_of::<f64>())
        .ok_or(ConfigError::TooLarge { what, count, per })
}
