//! Repair options and configuration.
//!
//! This module provides the [`RepairOptions`] struct for configuring the
//! masked re-blending step.

use crate::api::SpeckError;
use std::fmt;
use std::str::FromStr;

/// What to do with a speck whose kernel footprint holds no non-speck pixel.
///
/// Such a pixel has a zero denominator in the weighted-average estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    /// Keep the raw value and count the pixel in
    /// [`Repaired::degenerate`](crate::Repaired::degenerate).
    #[default]
    RetainRaw,
    /// Abort with [`SpeckError::DegenerateNeighborhood`](crate::SpeckError::DegenerateNeighborhood).
    Fail,
}

impl DegeneratePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DegeneratePolicy::RetainRaw => "retain-raw",
            DegeneratePolicy::Fail => "fail",
        }
    }
}

impl fmt::Display for DegeneratePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DegeneratePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "retain-raw" | "retain" | "raw" => Ok(DegeneratePolicy::RetainRaw),
            "fail" | "error" => Ok(DegeneratePolicy::Fail),
            other => Err(format!(
                "unknown degenerate policy '{}' (expected retain-raw or fail)",
                other
            )),
        }
    }
}

/// Configuration for the masked re-blending step.
///
/// # Defaults
///
/// - Normalization: `1.0` (the inverse mask holds 0/1 weights, so the
///   weighted average needs no rescaling)
/// - Degenerate policy: [`DegeneratePolicy::RetainRaw`]
///
/// # Example
///
/// ```
/// use speck_removal::{DegeneratePolicy, RepairOptions};
///
/// let options = RepairOptions::new()
///     .normalization(1.0)
///     .degenerate(DegeneratePolicy::Fail);
/// assert_eq!(options.degenerate, DegeneratePolicy::Fail);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RepairOptions {
    /// Scale applied to `numerator / denominator`.
    ///
    /// Default: `1.0`
    pub normalization: f64,

    /// Handling of specks with no non-speck neighbors.
    ///
    /// Default: [`DegeneratePolicy::RetainRaw`]
    pub degenerate: DegeneratePolicy,
}

impl Default for RepairOptions {
    fn default() -> Self {
        Self {
            normalization: 1.0,
            degenerate: DegeneratePolicy::RetainRaw,
        }
    }
}

impl RepairOptions {
    /// Create repair options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the estimate normalization scale.
    #[inline]
    pub fn normalization(mut self, scale: f64) -> Self {
        self.normalization = scale;
        self
    }

    /// Set the degenerate-neighborhood policy.
    #[inline]
    pub fn degenerate(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate = policy;
        self
    }

    /// Check that the normalization scale is finite and positive.
    ///
    /// [`repair`](crate::repair) runs this before touching any pixel.
    pub fn validate(&self) -> Result<(), SpeckError> {
        if !self.normalization.is_finite() || self.normalization <= 0.0 {
            return Err(SpeckError::InvalidNormalization {
                scale: self.normalization,
            });
        }
        Ok(())
    }
}
