use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "glint")]
#[command(about = "A brute-force triangle ray tracer")]
pub struct Args {
    /// Scene description (JSON). Renders the built-in demo scene when omitted.
    pub scene: Option<String>,

    /// Output PNG path
    #[arg(short, long, default_value = "output.png")]
    pub output: String,

    /// Maximum reflection depth
    #[arg(long, default_value_t = glint_renderer::MAX_DEPTH)]
    pub max_depth: u32,

    /// Bucket side length in pixels
    #[arg(long, default_value_t = glint_renderer::DEFAULT_BUCKET_SIZE)]
    pub bucket_size: u32,

    /// Number of render threads (rayon default when omitted)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Background color as three components in [0, 1]
    #[arg(long, num_args = 3, value_names = ["R", "G", "B"])]
    pub background: Option<Vec<f64>>,

    /// Write the built-in demo scene as JSON to this path and exit
    #[arg(long)]
    pub dump_demo: Option<String>,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub debug_level: LogLevel,
}
