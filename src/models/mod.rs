pub mod config;

pub use config::{
    ExtractConfig, HttpConfig, ReadConfig, ToolkitConfig, TraceConfig, CONFIG_ENV_VAR,
};
