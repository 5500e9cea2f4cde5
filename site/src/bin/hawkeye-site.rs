//! `hawkeye-site` - render the HawkEye landing page to static HTML.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use hawkeye_site::config::SiteConfig;
use hawkeye_site::{PageAssets, render_page, validate_site};

#[derive(Parser, Debug)]
#[command(name = "hawkeye-site")]
#[command(about = "Render the HawkEye landing page to a static HTML document")]
#[command(version)]
struct Args {
    /// Configuration file (default: ./hawkeye.toml when present)
    #[arg(long, value_name = "TOML")]
    config: Option<PathBuf>,

    /// Output document
    #[arg(long, value_name = "FILE", default_value = "dist/index.html")]
    out: PathBuf,

    /// JS glue of the browser bundle, e.g. ./pkg/hawkeye_landing.js
    #[arg(long, value_name = "JS")]
    bundle: Option<String>,

    /// Validate content and configuration, write nothing
    #[arg(long)]
    check: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    match path {
        Some(path) => SiteConfig::load_from_path(path)
            .with_context(|| format!("failed to load {}", path.display())),
        None => {
            let cwd = std::env::current_dir().context("cannot read current directory")?;
            Ok(SiteConfig::load(&cwd))
        }
    }
}

/// Returns `false` when `--check` found issues.
fn run(args: Args) -> Result<bool> {
    let config = load_config(args.config.as_deref())?;

    if args.check {
        let issues = validate_site(&config);
        for issue in &issues {
            eprintln!("[hawkeye-site] {issue}");
        }
        if issues.is_empty() {
            println!("No issues found");
        }
        return Ok(issues.is_empty());
    }

    let assets = PageAssets {
        bundle_js: args.bundle,
    };
    let html = render_page(&config, &assets).context("failed to render page")?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("cannot create {}", parent.display()))?;
    }
    std::fs::write(&args.out, &html)
        .with_context(|| format!("cannot write {}", args.out.display()))?;

    debug!(bytes = html.len(), "document written");
    info!("Wrote {}", args.out.display());
    println!("{}", args.out.display());
    Ok(true)
}

fn main() -> ExitCode {
    let args = Args::parse();

    // stdout carries the output path, logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("[hawkeye-site] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
