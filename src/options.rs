//! Pool sizing and timing options

use crate::errors::{PoolError, PoolResult};
use std::time::Duration;

/// Configuration for pool bounds and background maintenance.
///
/// The grow and prune loops regulate the total live resource count
/// (`available + active`) toward `[min_objects, max_objects]`.
///
/// # Examples
///
/// ```
/// use tidepool::PoolOptions;
/// use std::time::Duration;
///
/// let options = PoolOptions::new()
///     .with_min_objects(2)
///     .with_max_objects(16)
///     .with_acquisition_timeout(Duration::from_secs(5));
///
/// assert_eq!(options.min_objects, 2);
/// assert_eq!(options.max_objects, 16);
/// ```
#[derive(Debug, Clone)]
pub struct PoolOptions {
    /// Minimum number of resources the grow loop maintains.
    pub min_objects: usize,

    /// Maximum number of resources that may exist at once.
    pub max_objects: usize,

    /// Interval between background grow/prune runs.
    pub sweep_frequency: Duration,

    /// Maximum wait on an exhausted pool before acquisition fails.
    pub acquisition_timeout: Duration,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            min_objects: 0,
            max_objects: 10,
            sweep_frequency: Duration::from_secs(1),
            acquisition_timeout: Duration::from_secs(30),
        }
    }
}

impl PoolOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum number of pooled resources.
    pub fn with_min_objects(mut self, min: usize) -> Self {
        self.min_objects = min;
        self
    }

    /// Set the maximum number of pooled resources.
    pub fn with_max_objects(mut self, max: usize) -> Self {
        self.max_objects = max;
        self
    }

    /// Set the interval between background maintenance runs.
    pub fn with_sweep_frequency(mut self, frequency: Duration) -> Self {
        self.sweep_frequency = frequency;
        self
    }

    /// Set the acquisition timeout for an exhausted pool.
    pub fn with_acquisition_timeout(mut self, timeout: Duration) -> Self {
        self.acquisition_timeout = timeout;
        self
    }

    /// Check the options for internal consistency.
    pub fn validate(&self) -> PoolResult<()> {
        if self.max_objects == 0 {
            return Err(PoolError::InvalidOptions("max_objects must be at least 1"));
        }
        if self.min_objects > self.max_objects {
            return Err(PoolError::InvalidOptions(
                "min_objects cannot exceed max_objects",
            ));
        }
        if self.sweep_frequency.is_zero() {
            return Err(PoolError::InvalidOptions(
                "sweep_frequency must be non-zero",
            ));
        }
        Ok(())
    }
}
