//! Crawler detection command-line tool.
//!
//! Classifies User-Agent strings given as arguments, or one per line on stdin.

use anyhow::Result;
use clap::Parser;
use crawler_detect::{CachedClassifier, CrawlerDetectConfig, Detection, SignatureSet};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "crawler-detect")]
#[command(author, version, about = "Classify User-Agent strings as crawler or browser")]
struct Args {
    /// User-Agent strings to classify; read from stdin when omitted
    user_agents: Vec<String>,

    /// Path to configuration file (JSON or YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print one JSON object per User-Agent
    #[arg(long)]
    json: bool,

    /// Enable JSON logging format
    #[arg(long)]
    json_logs: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Serialize)]
struct Verdict<'a> {
    user_agent: &'a str,
    #[serde(flatten)]
    detection: &'a Detection,
}

fn init_logging(json: bool, level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    // Logs go to stderr so verdicts on stdout stay machine-readable.
    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(io::stderr))
            .init();
    }
}

fn load_config(path: &Path) -> Result<CrawlerDetectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config = if path.extension().is_some_and(|e| e == "yaml" || e == "yml") {
        serde_yaml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    Ok(config)
}

fn write_verdict(
    out: &mut impl Write,
    user_agent: &str,
    detection: &Detection,
    json: bool,
) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, &Verdict { user_agent, detection })?;
        writeln!(out)?;
    } else {
        match &detection.matched_signature {
            Some(matched) if detection.is_crawler => writeln!(out, "crawler\t{matched}")?,
            _ => writeln!(out, "browser")?,
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.json_logs, &args.log_level);

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => CrawlerDetectConfig::default(),
    };

    let signatures = SignatureSet::from_config(&config)?;
    let classifier = CachedClassifier::new(signatures, &config.cache);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut classified = 0usize;

    if args.user_agents.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            let detection = classifier.classify(&line);
            write_verdict(&mut out, &line, &detection, args.json)?;
            classified += 1;
        }
    } else {
        for user_agent in &args.user_agents {
            let detection = classifier.classify(user_agent);
            write_verdict(&mut out, user_agent, &detection, args.json)?;
            classified += 1;
        }
    }

    out.flush()?;
    let cached = classifier.cache().map_or(0, |cache| cache.entry_count());
    info!(classified, cached, "Classification complete");

    Ok(())
}
