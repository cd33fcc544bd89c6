use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ktk::commands::{color_command, status_report, ColorOptions};
use ktk::dominant_color::ColorFormat;
use ktk::models::ToolkitConfig;
use ktk::services::{
    banner, diff, encodings_from_labels, md5_hex, read_with_fallback, HttpFetcher, HttpMethod,
    DEFAULT_BANNER_TEXT,
};

#[derive(Parser)]
#[command(name = "ktk")]
#[command(about = "Personal convenience toolkit")]
struct Cli {
    /// YAML config file (defaults to $KTK_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the dominant color of an image URL or file
    Color {
        /// http(s) URL or local file path
        source: String,

        /// Bound on the longer side of the sampled image
        #[arg(short, long)]
        max_dimension: Option<u32>,

        /// Output format: rgb or hex
        #[arg(short, long)]
        format: Option<ColorFormat>,

        /// Append Enter/Leave records to the trace file
        #[arg(long)]
        trace: bool,
    },
    /// Print a three-line banner around TEXT
    Banner {
        /// Banner text
        #[arg(default_value = DEFAULT_BANNER_TEXT)]
        text: String,
    },
    /// Print the MD5 hex digest of TEXT
    Md5 {
        /// Text to hash
        text: String,
    },
    /// Print a unified diff of two files or strings
    Diff {
        /// Old side: a file path, or text
        a: String,

        /// New side: a file path, or text
        b: String,

        /// Context lines around each change
        #[arg(short = 'n', long, default_value_t = 0)]
        context: usize,

        /// Compare A and B as text even when they name files
        #[arg(long)]
        force_str: bool,
    },
    /// Print a text file, trying fallback encodings
    Read {
        /// File to read
        path: PathBuf,
    },
    /// Send parameters to a URL and pretty-print the JSON response
    FetchJson {
        /// Endpoint URL
        url: String,

        /// GET (query string) or POST (form body)
        #[arg(short, long, default_value = "get")]
        method: String,

        /// KEY=VALUE parameter, repeatable
        #[arg(short, long = "param", value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = ToolkitConfig::resolve_path(cli.config);
    let config = ToolkitConfig::load(config_path.as_deref());

    match cli.command {
        Some(Commands::Color {
            source,
            max_dimension,
            format,
            trace,
        }) => {
            let options = ColorOptions {
                max_dimension,
                format,
                trace,
            };
            let output = color_command(&config, &source, options)
                .with_context(|| format!("Failed to extract color from '{source}'"))?;
            println!("{output}");
            Ok(())
        }
        Some(Commands::Banner { text }) => {
            println!("{}", banner(&text));
            Ok(())
        }
        Some(Commands::Md5 { text }) => {
            println!("{}", md5_hex(&text));
            Ok(())
        }
        Some(Commands::Diff {
            a,
            b,
            context,
            force_str,
        }) => {
            for line in diff(&a, &b, force_str, context)? {
                println!("{line}");
            }
            Ok(())
        }
        Some(Commands::Read { path }) => run_read_command(&config, &path),
        Some(Commands::FetchJson {
            url,
            method,
            params,
        }) => run_fetch_json_command(&config, &url, &method, &params),
        None => {
            println!("{}", status_report(&config, config_path.as_deref()));
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "ktk=debug" } else { "ktk=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Print a file decoded with the configured fallback encodings
fn run_read_command(config: &ToolkitConfig, path: &Path) -> anyhow::Result<()> {
    let encodings = encodings_from_labels(&config.read.encodings);
    if encodings.is_empty() {
        anyhow::bail!("No usable encodings configured (read.encodings)");
    }

    let decoded = read_with_fallback(path, &encodings)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    match decoded {
        Some(decoded) => {
            tracing::info!(encoding = decoded.encoding.name(), "Read file");
            print!("{}", decoded.content);
            Ok(())
        }
        None => {
            let names: Vec<&str> = encodings.iter().map(|e| e.name()).collect();
            anyhow::bail!(
                "Could not decode {} as any of: {}",
                path.display(),
                names.join(", ")
            )
        }
    }
}

/// Fetch JSON and pretty-print it
fn run_fetch_json_command(
    config: &ToolkitConfig,
    url: &str,
    method: &str,
    params: &[(String, String)],
) -> anyhow::Result<()> {
    let method: HttpMethod = method.parse()?;
    let fetcher = HttpFetcher::new(&config.http)?;

    let value = fetcher
        .fetch_json(url, params, method)
        .with_context(|| format!("Failed to fetch JSON from {url}"))?;

    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=VALUE: no '=' in '{s}'"))?;
    Ok((key.to_string(), value.to_string()))
}
