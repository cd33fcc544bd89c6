use dominant_color::{ColorFormat, DominantColorExtractor, ResizeFilter, WEIGHT_EPSILON};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Environment variable naming the config file when `--config` is absent
pub const CONFIG_ENV_VAR: &str = "KTK_CONFIG";

/// Toolkit configuration loaded from YAML
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ToolkitConfig {
    /// Dominant color extraction defaults
    pub extract: ExtractConfig,

    /// HTTP client settings
    pub http: HttpConfig,

    /// XML trace log settings
    pub trace: TraceConfig,

    /// Fallback-encoding file reader settings
    pub read: ReadConfig,
}

/// Defaults for `ktk color`
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ExtractConfig {
    /// Bound on the longer side of the sampled image
    pub max_dimension: u32,

    /// Output format name ("rgb" or "hex"; anything else means rgb)
    pub format: String,

    /// Per-entry weight stabilizer
    pub epsilon: f64,

    /// Resampling filter name (area, triangle, catmullrom, lanczos3)
    pub filter: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            max_dimension: dominant_color::DEFAULT_MAX_DIMENSION,
            format: "rgb".to_string(),
            epsilon: WEIGHT_EPSILON,
            filter: "lanczos3".to_string(),
        }
    }
}

impl ExtractConfig {
    /// Output format, with unknown names falling back to rgb
    pub fn color_format(&self) -> ColorFormat {
        let format = ColorFormat::from_name_lenient(&self.format);
        if !self.format.eq_ignore_ascii_case(format.as_str()) {
            tracing::warn!(format = %self.format, "Unknown color format, using rgb");
        }
        format
    }

    /// Resampling filter, with unknown names falling back to the default
    pub fn resize_filter(&self) -> ResizeFilter {
        ResizeFilter::from_name(&self.filter).unwrap_or_else(|| {
            tracing::warn!(filter = %self.filter, "Unknown resize filter, using lanczos3");
            ResizeFilter::default()
        })
    }

    /// Build an extractor from these settings
    pub fn extractor(&self) -> DominantColorExtractor {
        DominantColorExtractor::new()
            .max_dimension(self.max_dimension)
            .epsilon(self.epsilon)
            .filter(self.resize_filter())
    }
}

/// Settings for the blocking HTTP client
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Follow redirects at all
    pub follow_redirects: bool,

    /// Redirect hop limit when following
    pub max_redirects: usize,

    /// Custom User-Agent header
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            follow_redirects: true,
            max_redirects: 10,
            user_agent: None,
        }
    }
}

/// Settings for the XML trace log
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TraceConfig {
    /// File the trace records are appended to
    pub file: PathBuf,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("trace.xml"),
        }
    }
}

/// Settings for reading files with fallback encodings
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ReadConfig {
    /// Encoding labels, tried in order
    pub encodings: Vec<String>,
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            encodings: vec![
                "utf-8".to_string(),
                "gbk".to_string(),
                "windows-1252".to_string(),
            ],
        }
    }
}

impl ToolkitConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from a YAML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration, falling back to defaults on any failure
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Self::default();
        };

        match Self::load_from_path(path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    max_dimension = config.extract.max_dimension,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Config path from the command line, or from `KTK_CONFIG`
    pub fn resolve_path(cli_path: Option<PathBuf>) -> Option<PathBuf> {
        cli_path.or_else(|| std::env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from))
    }
}
