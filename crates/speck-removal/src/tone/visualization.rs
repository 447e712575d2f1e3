//! Visualization mode selection.

use std::fmt;
use std::str::FromStr;

/// Strategy for mapping 16-bit samples onto the 8-bit display range.
///
/// # Example
///
/// ```
/// use speck_removal::Visualization;
///
/// assert_eq!(Visualization::default(), Visualization::NormalizeMinMax);
/// assert_eq!(
///     "equalize-histogram".parse::<Visualization>(),
///     Ok(Visualization::EqualizeHistogram)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visualization {
    /// Clamp into `[0, 255]`; anything brighter collapses to 255.
    SaturateCast,
    /// Stretch the observed `[min, max]` linearly onto `[0, 255]`.
    #[default]
    NormalizeMinMax,
    /// Downscale by 1/256, then spread intensities by histogram equalization.
    EqualizeHistogram,
}

impl Visualization {
    /// All modes, in declaration order.
    pub const ALL: [Visualization; 3] = [
        Visualization::SaturateCast,
        Visualization::NormalizeMinMax,
        Visualization::EqualizeHistogram,
    ];

    /// Kebab-case name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Visualization::SaturateCast => "saturate-cast",
            Visualization::NormalizeMinMax => "normalize-min-max",
            Visualization::EqualizeHistogram => "equalize-histogram",
        }
    }
}

impl fmt::Display for Visualization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visualization {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "saturate-cast" | "saturate" => Ok(Visualization::SaturateCast),
            "normalize-min-max" | "normalize" | "minmax" => Ok(Visualization::NormalizeMinMax),
            "equalize-histogram" | "equalize" | "histogram" => {
                Ok(Visualization::EqualizeHistogram)
            }
            other => Err(format!(
                "unknown visualization '{}' (expected saturate-cast, normalize-min-max or equalize-histogram)",
                other
            )),
        }
    }
}
