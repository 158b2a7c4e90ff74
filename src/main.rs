//! diskreport: single-pass disk usage report.
//!
//! Thin binary entry point. All logic lives in the `diskreport-core` crate.

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use diskreport_core::config::{
    DenylistScope, ScanConfig, DEFAULT_TOP_DIRECTORIES, DEFAULT_TOP_FILES,
};
use diskreport_core::scanner::mount::NoBoundary;
use diskreport_core::scanner::progress::ScanProgress;
use diskreport_core::{Report, Scanner};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use tracing::Level;

/// Report filesystem usage, the largest directories and the largest files
/// under PATH without leaving its filesystem.
#[derive(Parser, Debug)]
#[command(name = "diskreport", version, about)]
struct Opts {
    /// Directory to start from.
    path: PathBuf,

    /// Number of largest files to report.
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_FILES)]
    top_files: usize,

    /// Number of largest directories to report.
    #[arg(short = 'd', long = "top-dirs", default_value_t = DEFAULT_TOP_DIRECTORIES)]
    top_dirs: usize,

    /// Directory name to skip at the root; repeatable, replaces the defaults.
    #[arg(long = "exclude-root", value_name = "NAME")]
    exclude_root: Vec<String>,

    /// Apply the root denylist at any scan root, not just `/`.
    #[arg(long)]
    denylist_any_root: bool,

    /// Descend into directories mounted from other filesystems.
    #[arg(long)]
    cross_mounts: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Disable the progress spinner.
    #[arg(long)]
    no_progress: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

impl Opts {
    fn scan_config(&self) -> ScanConfig {
        let mut config = ScanConfig::default()
            .with_top_files(self.top_files)
            .with_top_directories(self.top_dirs);
        if !self.exclude_root.is_empty() {
            config = config.with_root_denylist(self.exclude_root.iter().cloned());
        }
        if self.denylist_any_root {
            config = config.with_denylist_scope(DenylistScope::ScanRoot);
        }
        config
    }

    fn scanner(&self) -> Scanner {
        let scanner = Scanner::new(self.scan_config());
        if self.cross_mounts {
            scanner.with_mount_probe(NoBoundary)
        } else {
            scanner
        }
    }

    fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

/// Best-effort spinner on stderr, advanced on every progress update.
struct Spinner {
    enabled: bool,
    frame: usize,
}

impl Spinner {
    const FRAMES: [char; 4] = ['/', '-', '\\', '|'];

    fn new(enabled: bool) -> Self {
        Self {
            enabled: enabled && std::io::stderr().is_terminal(),
            frame: 0,
        }
    }

    fn tick(&mut self, progress: &ScanProgress) {
        if !self.enabled {
            return;
        }
        let mut err = std::io::stderr().lock();
        match progress {
            ScanProgress::Update { .. } => {
                let _ = write!(err, "{}\r", Self::FRAMES[self.frame]);
                self.frame = (self.frame + 1) % Self::FRAMES.len();
            }
            ScanProgress::Complete { .. } => {
                let _ = write!(err, " \r");
            }
        }
        let _ = err.flush();
    }
}

fn main() {
    let opts = Opts::parse();

    // Initialise structured logging on stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_max_level(opts.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run(&opts) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(opts: &Opts) -> anyhow::Result<()> {
    let scanner = opts.scanner();
    let mut spinner = Spinner::new(!opts.no_progress);

    let report = Report::generate_with_progress(&scanner, &opts.path, |p| spinner.tick(p))
        .with_context(|| format!("scan of {} failed", opts.path.display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match opts.format {
        OutputFormat::Text => writeln!(out, "{}", report.render_text())?,
        OutputFormat::Json => writeln!(out, "{}", report.to_json()?)?,
        OutputFormat::Csv => report.write_csv(&mut out)?,
    }
    out.flush()?;
    Ok(())
}
