use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use renderer::config::Config;
use renderer::errors::AppError;
use renderer::locale::{Locale, Messages};
use renderer::models::record::CvRecord;
use renderer::normalize::normalize;
use renderer::render::{render_cv, to_html_document};

/// Renders a persisted CV record to a standalone HTML document.
#[derive(Parser)]
#[command(name = "renderer")]
#[command(about = "CV template renderer", long_about = None)]
struct Cli {
    /// Path to the CV record JSON file
    input: PathBuf,

    /// Template identifier override (defaults to the record's own templateId)
    #[arg(short, long)]
    template: Option<String>,

    /// Display locale (tr, en)
    #[arg(short, long)]
    locale: Option<String>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let locale = cli
        .locale
        .as_deref()
        .map(Locale::from_tag)
        .unwrap_or(config.locale);
    let messages = Messages::new(locale);

    let record = read_record(&cli.input)?;
    let cv = normalize(record);
    let template_id = cli.template.unwrap_or_else(|| cv.template_id.clone());

    info!(template = %template_id, "rendering CV");

    let tree = render_cv(&cv, &template_id, &messages);
    let title = if cv.title.is_empty() { "CV" } else { cv.title.as_str() };
    let html = to_html_document(&tree, title);

    match cli.output {
        Some(path) => fs::write(&path, html)?,
        None => print!("{html}"),
    }

    Ok(())
}

fn read_record(path: &Path) -> Result<CvRecord, AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
