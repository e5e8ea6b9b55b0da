//! Weighted distribution over the tile values that spawn after a move

use crate::io::configuration::{SPAWN_VALUES, SPAWN_WEIGHTS};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::{Cell, is_valid_tile};

/// Discrete distribution of spawn values with normalized cumulative weights
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnDistribution {
    values: Vec<Cell>,
    cumulative: Vec<f64>,
}

impl Default for SpawnDistribution {
    fn default() -> Self {
        Self::classic()
    }
}

impl SpawnDistribution {
    /// Build a distribution from `(value, weight)` pairs
    ///
    /// Weights are relative and normalized internally.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No entries are given
    /// - A value is not a power of two of at least 2
    /// - A weight is not finite and positive
    pub fn new(entries: &[(Cell, f64)]) -> Result<Self> {
        if entries.is_empty() {
            return Err(invalid_parameter(
                "spawn_table",
                &"[]",
                &"at least one spawn value is required",
            ));
        }

        let mut total = 0.0;
        for &(value, weight) in entries {
            if value == 0 || !is_valid_tile(value) {
                return Err(invalid_parameter(
                    "spawn_value",
                    &value,
                    &"must be a power of two >= 2",
                ));
            }
            if !weight.is_finite() || weight <= 0.0 {
                return Err(invalid_parameter(
                    "spawn_weight",
                    &weight,
                    &"must be finite and positive",
                ));
            }
            total += weight;
        }

        Ok(Self::normalized(entries, total))
    }

    /// The configured table: 2 with probability 0.9, 4 with probability 0.1
    ///
    /// `SPAWN_WEIGHTS` are relative weights and are normalized like any other
    /// table.
    pub fn classic() -> Self {
        let entries: Vec<(Cell, f64)> = SPAWN_VALUES.into_iter().zip(SPAWN_WEIGHTS).collect();
        let total = SPAWN_WEIGHTS.iter().sum();
        Self::normalized(&entries, total)
    }

    fn normalized(entries: &[(Cell, f64)], total: f64) -> Self {
        let mut running = 0.0;
        let cumulative = entries
            .iter()
            .map(|&(_, weight)| {
                running += weight / total;
                running
            })
            .collect();

        Self {
            values: entries.iter().map(|&(value, _)| value).collect(),
            cumulative,
        }
    }

    /// Map a uniform sample in `[0, 1)` to a tile value
    ///
    /// Samples at or past the final cumulative bound fall into the last entry,
    /// which absorbs floating-point rounding in the normalized weights.
    pub fn sample(&self, uniform: f64) -> Cell {
        self.cumulative
            .iter()
            .position(|&bound| uniform < bound)
            .and_then(|index| self.values.get(index))
            .or_else(|| self.values.last())
            .copied()
            .unwrap_or(2)
    }

    /// Probability assigned to `value`
    pub fn probability(&self, value: Cell) -> f64 {
        let mut previous = 0.0;
        for (candidate, &bound) in self.values.iter().zip(&self.cumulative) {
            if *candidate == value {
                return bound - previous;
            }
            previous = bound;
        }
        0.0
    }

    /// Values this distribution can produce, in table order
    pub fn values(&self) -> &[Cell] {
        &self.values
    }
}
