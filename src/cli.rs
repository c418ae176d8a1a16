//! Command-line host around the probe: opens files, probes them and logs the
//! outcome.

use crate::{FormatTag, ImageSize, try_get_dimensions};
use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

#[derive(Parser, Debug)]
#[command(name = "imgdims")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the pixel dimensions of JPEG, PNG, GIF and BMP files", long_about = None)]
pub struct Cli {
    /// Image files to probe
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Emit one JSON object per file instead of text
    #[arg(long)]
    pub json: bool,

    /// Enable debug output
    #[arg(short, long)]
    pub verbose: bool,

    /// Worker threads (0 = one per core)
    #[arg(short, long, default_value = "0")]
    pub jobs: usize,

    /// Exit successfully even when some files could not be read
    #[arg(long)]
    pub allow_invalid: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub path: PathBuf,
    pub format: Option<FormatTag>,
    /// Conventional file extension for the detected format
    pub extension: Option<&'static str>,
    #[serde(flatten)]
    pub size: ImageSize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Report {
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.size.is_valid()
    }

    pub fn to_line(&self) -> String {
        match (self.format, self.size.dimensions()) {
            (Some(format), Some((w, h))) => format!("{}: {format} {w}x{h}", self.path.display()),
            _ => format!(
                "{}: unreadable ({})",
                self.path.display(),
                self.reason.as_deref().unwrap_or("unknown")
            ),
        }
    }
}

pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "imgdims=debug"
    } else {
        "imgdims=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(BufReader::new(file))
}

/// Probes one file. The file handle is dropped before returning on every path.
pub fn probe_path(path: &Path) -> Report {
    let name = path.display();
    let mut reader = match open(path) {
        Ok(reader) => reader,
        Err(e) => {
            error!("Could not open {name}: {e:#}");
            return Report {
                path: path.to_path_buf(),
                format: None,
                extension: None,
                size: ImageSize::invalid(),
                reason: Some(format!("{e:#}")),
            };
        }
    };

    match try_get_dimensions(&mut reader) {
        Ok(probed) => {
            info!(
                "{name} is {}x{} ({})",
                probed.width, probed.height, probed.format
            );
            Report {
                path: path.to_path_buf(),
                format: Some(probed.format),
                extension: Some(probed.format.extension()),
                size: probed.size(),
                reason: None,
            }
        }
        Err(e) => {
            if e.is_structural() {
                info!("Could not read size of {name}.");
            } else {
                error!("Could not read size of {name}, data might be corrupt.");
            }
            debug!("{name}: {e}");
            Report {
                path: path.to_path_buf(),
                format: None,
                extension: None,
                size: ImageSize::invalid(),
                reason: Some(e.to_string()),
            }
        }
    }
}

/// Probes every path in order, in parallel when more than one worker is allowed.
pub fn probe_all(paths: &[PathBuf], jobs: usize) -> Result<Vec<Report>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .context("Failed to build worker pool")?;

    Ok(pool.install(|| paths.par_iter().map(|p| probe_path(p)).collect()))
}

pub fn write_reports<W: Write>(out: &mut W, reports: &[Report], json: bool) -> Result<()> {
    for report in reports {
        if json {
            serde_json::to_writer(&mut *out, report)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", report.to_line())?;
        }
    }
    Ok(())
}

/// Runs the command and returns whether the process should exit successfully.
pub fn run(cli: &Cli) -> Result<bool> {
    let reports = probe_all(&cli.paths, cli.jobs)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_reports(&mut out, &reports, cli.json)?;

    let invalid = reports.iter().filter(|r| !r.is_valid()).count();
    if invalid > 0 {
        debug!("{invalid} of {} files unreadable", reports.len());
    }
    Ok(invalid == 0 || cli.allow_invalid)
}
