use clap::{Parser, Subcommand, ValueEnum};
use crossui_core::Platform;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Target selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlatformArg {
    /// SwiftUI (macOS)
    Macos,
    /// XAML (Windows)
    Windows,
    /// GTK (Linux)
    Linux,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Macos => Platform::MacOS,
            PlatformArg::Windows => Platform::Windows,
            PlatformArg::Linux => Platform::Linux,
        }
    }
}

#[derive(Parser)]
#[command(name = "crossui")]
#[command(about = "crossui - describe a UI once, generate SwiftUI, XAML and GTK sources")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project manifest (defaults to ./crossui.toml)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Effective log level: explicit level, then --verbose, then warnings only.
    pub fn level_filter(&self) -> LevelFilter {
        match (self.log_level, self.verbose) {
            (Some(level), _) => level.into(),
            (None, true) => LevelFilter::DEBUG,
            (None, false) => LevelFilter::WARN,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new project directory
    New {
        /// Project name
        name: String,

        /// Restrict the manifest to these platforms
        #[arg(short, long, value_enum)]
        platform: Vec<PlatformArg>,
    },

    /// Render a view document to stdout
    Render {
        /// View document (JSON)
        file: PathBuf,

        /// Target platform
        #[arg(short, long, value_enum)]
        platform: PlatformArg,

        /// Wrap the output in the platform's root document
        #[arg(long)]
        root: bool,

        /// Escape interpolated text for the target grammar
        #[arg(long)]
        escape: bool,

        /// App name used by --root
        #[arg(long, default_value = crossui_codegen::DEFAULT_APP_NAME)]
        app_name: String,
    },

    /// Generate project files for one or all platforms
    Build {
        /// Target platform (defaults to the manifest's platforms)
        #[arg(short, long, value_enum)]
        platform: Option<PlatformArg>,
    },

    /// Run the native build tool over a generated project
    Compile {
        /// Target platform
        #[arg(short, long, value_enum)]
        platform: PlatformArg,
    },
}
