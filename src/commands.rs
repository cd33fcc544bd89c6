//! Bodies of the `ktk` subcommands that do more than call one service.
//!
//! Each returns the text to print so the binary stays a thin clap shell.

use dominant_color::ColorFormat;
use std::path::Path;

use crate::error::ToolkitError;
use crate::models::{ToolkitConfig, CONFIG_ENV_VAR};
use crate::services::{HttpFetcher, ImageColorService, TraceLog};

/// Command-line overrides for `ktk color`
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorOptions {
    pub max_dimension: Option<u32>,
    pub format: Option<ColorFormat>,
    pub trace: bool,
}

/// Dominant color of `source`, rendered in the requested format.
///
/// A blank source or empty image yields [`ToolkitError::NoImageData`].
pub fn color_command(
    config: &ToolkitConfig,
    source: &str,
    options: ColorOptions,
) -> Result<String, ToolkitError> {
    let mut extract_config = config.extract.clone();
    if let Some(max_dimension) = options.max_dimension {
        extract_config.max_dimension = max_dimension;
    }
    let format = options
        .format
        .unwrap_or_else(|| extract_config.color_format());

    let fetcher = HttpFetcher::new(&config.http)?;
    let service = ImageColorService::new(fetcher, extract_config.extractor());

    let color = if options.trace {
        TraceLog::new(&config.trace.file).in_trace("color", || service.color_from_source(source))
    } else {
        service.color_from_source(source)
    }?;

    match color {
        Some(color) => Ok(color.format(format).to_string()),
        None => Err(ToolkitError::NoImageData(source.to_string())),
    }
}

/// Version, config source and effective settings
pub fn status_report(config: &ToolkitConfig, config_path: Option<&Path>) -> String {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_line = match config_path {
        Some(path) => format!("Config:        {}", path.display()),
        None => format!("Config:        (defaults, set --config or {CONFIG_ENV_VAR})"),
    };
    let redirects = if config.http.follow_redirects {
        format!("up to {}", config.http.max_redirects)
    } else {
        "disabled".to_string()
    };

    [
        format!("ktk v{VERSION}"),
        String::new(),
        config_line,
        String::new(),
        "Extract:".to_string(),
        format!("  max_dimension {}", config.extract.max_dimension),
        format!("  format        {}", config.extract.color_format()),
        format!("  epsilon       {}", config.extract.epsilon),
        format!("  filter        {:?}", config.extract.resize_filter()),
        String::new(),
        "HTTP:".to_string(),
        format!("  timeout       {}s", config.http.timeout_secs),
        format!("  redirects     {redirects}"),
        String::new(),
        format!("Trace file:    {}", config.trace.file.display()),
        format!("Encodings:     {}", config.read.encodings.join(", ")),
        String::new(),
        "Run 'ktk --help' for commands.".to_string(),
    ]
    .join("\n")
}
