use crate::error::CleanError;
use serde::{Deserialize, Deserializer};
use speck_removal::{DegeneratePolicy, Dims, Visualization, DEFAULT_KERNEL_SIZE};
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

/// Byte order of the 16-bit samples in a raw plane
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ByteOrder {
    #[default]
    Little,
    Big,
}

/// Application configuration loaded from a YAML file
///
/// Every key is optional; command line flags override whatever the file sets.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Image height of the raw plane
    #[serde(default)]
    pub rows: Option<usize>,

    /// Image width of the raw plane
    #[serde(default)]
    pub cols: Option<usize>,

    /// Side length of the radial kernel (odd)
    #[serde(default = "default_kernel_size")]
    pub kernel_size: i32,

    /// Tone mapping for the PNG outputs
    #[serde(default, deserialize_with = "parse_str")]
    pub visualization: Visualization,

    /// Scale applied to the repair estimate
    #[serde(default = "default_normalization")]
    pub normalization: f64,

    /// Handling of specks without clean neighbors
    #[serde(default, deserialize_with = "parse_str")]
    pub degenerate: DegeneratePolicy,

    /// Byte order of the raw plane
    #[serde(default)]
    pub byte_order: ByteOrder,

    /// Re-compress PNG output with oxipng
    #[serde(default)]
    pub optimize_png: bool,
}

fn default_kernel_size() -> i32 {
    DEFAULT_KERNEL_SIZE
}

fn default_normalization() -> f64 {
    1.0
}

fn parse_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(serde::de::Error::custom)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rows: None,
            cols: None,
            kernel_size: default_kernel_size(),
            visualization: Visualization::default(),
            normalization: default_normalization(),
            degenerate: DegeneratePolicy::default(),
            byte_order: ByteOrder::default(),
            optimize_png: false,
        }
    }
}

impl AppConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self, CleanError> {
        // An empty document deserializes as unit, not as an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| CleanError::Config(e.to_string()))
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, CleanError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            kernel_size = config.kernel_size,
            visualization = %config.visualization,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load from `path` if given, otherwise start from defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, CleanError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Raw plane dimensions; both must be set and non-zero, and the plane's
    /// byte size must fit in `usize`
    pub fn dims(&self) -> Result<Dims, CleanError> {
        match (self.rows, self.cols) {
            (Some(rows), Some(cols)) if rows > 0 && cols > 0 => {
                if rows.checked_mul(cols).and_then(|n| n.checked_mul(2)).is_none() {
                    return Err(CleanError::Config(format!(
                        "{}x{} plane is too large to address",
                        rows, cols
                    )));
                }
                Ok(Dims::new(rows, cols))
            }
            (Some(_), Some(_)) => Err(CleanError::Config(
                "rows and cols must be greater than zero".to_string(),
            )),
            _ => Err(CleanError::Config(
                "rows and cols must be given in the config file or on the command line"
                    .to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.kernel_size, 5);
        assert_eq!(config.visualization, Visualization::NormalizeMinMax);
        assert_eq!(config.normalization, 1.0);
        assert_eq!(config.degenerate, DegeneratePolicy::RetainRaw);
        assert_eq!(config.byte_order, ByteOrder::Little);
        assert!(!config.optimize_png);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(AppConfig::from_yaml_str("").unwrap(), AppConfig::default());
        assert_eq!(AppConfig::from_yaml_str("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
rows: 480
cols: 640
kernel_size: 7
visualization: equalize-histogram
normalization: 0.5
degenerate: fail
byte_order: big
optimize_png: true
"#;
        let config = AppConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.dims().unwrap(), Dims::new(480, 640));
        assert_eq!(config.kernel_size, 7);
        assert_eq!(config.visualization, Visualization::EqualizeHistogram);
        assert_eq!(config.normalization, 0.5);
        assert_eq!(config.degenerate, DegeneratePolicy::Fail);
        assert_eq!(config.byte_order, ByteOrder::Big);
        assert!(config.optimize_png);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = AppConfig::from_yaml_str("visualization: saturate-cast\n").unwrap();
        assert_eq!(config.visualization, Visualization::SaturateCast);
        assert_eq!(config.kernel_size, 5);
        assert_eq!(config.rows, None);
    }

    #[test]
    fn test_unknown_visualization_is_config_error() {
        let err = AppConfig::from_yaml_str("visualization: sepia\n").unwrap_err();
        match err {
            CleanError::Config(msg) => assert!(msg.contains("sepia"), "{}", msg),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_dims_missing() {
        let config = AppConfig {
            rows: Some(10),
            ..Default::default()
        };
        assert!(matches!(config.dims(), Err(CleanError::Config(_))));
    }

    #[test]
    fn test_dims_zero() {
        let config = AppConfig {
            rows: Some(0),
            cols: Some(4),
            ..Default::default()
        };
        assert!(matches!(config.dims(), Err(CleanError::Config(_))));
    }

    #[test]
    fn test_dims_overflow() {
        let config = AppConfig {
            rows: Some(usize::MAX / 2),
            cols: Some(3),
            ..Default::default()
        };
        match config.dims() {
            Err(CleanError::Config(msg)) => assert!(msg.contains("too large"), "{}", msg),
            other => panic!("Expected Config error, got {:?}", other),
        }

        // Sample count fits but the byte count does not
        let config = AppConfig {
            rows: Some(usize::MAX / 2 + 1),
            cols: Some(1),
            ..Default::default()
        };
        assert!(matches!(config.dims(), Err(CleanError::Config(_))));
    }

    #[test]
    fn test_nan_normalization_parses() {
        let config = AppConfig::from_yaml_str("normalization: .nan\n").unwrap();
        assert!(config.normalization.is_nan());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = AppConfig::load(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, CleanError::Io(_)));
    }

    #[test]
    fn test_load_or_default_without_path() {
        assert_eq!(
            AppConfig::load_or_default(None).unwrap(),
            AppConfig::default()
        );
    }
}
