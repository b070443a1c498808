use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use taxdoc_core::{FilingStatus, RateTable};
use taxdoc_pipeline::{render_form_1040, EstimatePipeline, FixtureExtractor, TaxpayerInfo};

/// Compute a federal income tax estimate from extracted tax documents.
///
/// Each document file holds one extraction-service result as JSON
/// (a W-2, 1099-NEC, or 1099-INT object with a "type" tag). The estimate
/// is printed as a plain-text Form 1040 facsimile.
#[derive(Parser, Debug)]
#[command(name = "taxdoc-estimate")]
#[command(version, about, long_about = None)]
struct Args {
    /// Extracted document JSON files (repeatable)
    #[arg(short, long = "document", required = true)]
    documents: Vec<PathBuf>,

    /// Filing status: single, married-filing-jointly,
    /// married-filing-separately, head-of-household, qualifying-widow
    #[arg(short, long)]
    filing_status: String,

    /// Taxpayer information JSON file for the form header
    #[arg(short, long)]
    taxpayer: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let Some(filing_status) = FilingStatus::parse(&args.filing_status) else {
        bail!("unknown filing status: {}", args.filing_status);
    };

    let mut document_texts = Vec::with_capacity(args.documents.len());
    for path in &args.documents {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read document: {}", path.display()))?;
        document_texts.push(text);
    }

    let taxpayer = match &args.taxpayer {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read taxpayer file: {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse taxpayer file: {}", path.display()))?
        }
        None => TaxpayerInfo {
            first_name: String::new(),
            last_name: String::new(),
            ssn: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
        },
    };

    let rates = RateTable::tax_year_2024();
    let extractor = FixtureExtractor;
    let pipeline = EstimatePipeline::new(&extractor, &rates);

    let report = pipeline
        .run(&document_texts, filing_status)
        .await
        .context("Failed to compute tax estimate")?;

    print!("{}", render_form_1040(&taxpayer, &report.totals, &report.outcome));

    Ok(())
}
