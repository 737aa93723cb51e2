//! One-shot symptom analysis for scripting
//!
//! Sends a single description to the backend and prints the report to
//! stdout, either as labelled sections or as raw JSON with `--json`.

use anyhow::Result;
use tracing::error;
use triage_client::{AnalysisClient, AnalysisReport, BackendConfig};

pub async fn run(config: BackendConfig, symptoms: &str, json: bool) -> Result<()> {
    let description = symptoms.trim();
    if description.is_empty() {
        anyhow::bail!("no symptoms given");
    }

    let client = AnalysisClient::new(config)?;

    let report = match client.analyze(description).await {
        Ok(report) => report,
        Err(e) => {
            error!("analysis request failed: {}", e);
            anyhow::bail!("{}", e.user_message());
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

fn print_report(report: &AnalysisReport) {
    if !report.disclaimer.is_empty() {
        println!("⚠️  {}", report.disclaimer);
        println!();
    }

    print_section("Potential Condition", &report.disease_name);
    print_section("Suggested Actions", &report.suggested_treatment);
    print_section("Medical Reasoning", &report.analysis_reasoning);
}

fn print_section(title: &str, body: &str) {
    // A blank field prints nothing under its header.
    println!("{}:", title);
    for line in body.lines() {
        println!("  {}", line);
    }
    println!();
}
