//! Triage a batch of labeled reports and print the macro-F1 score.
//!
//! Usage: `triage_eval [samples.tsv]`
//!
//! Each line of the TSV is `text<TAB>label`. Without a file the built-in
//! reference samples are used. Log level comes from `TRIAGE_LOG`.

use std::env;
use std::fs;
use std::sync::Once;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use triage_core::evaluate::{evaluate, parse_labeled_tsv, sample_reports};
use triage_core::Triage;

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("TRIAGE_LOG")
            .unwrap_or_else(|_| EnvFilter::new("triage_core=info,triage_eval=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let samples = match env::args().nth(1) {
        Some(path) => {
            let raw = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            let samples = parse_labeled_tsv(&raw).with_context(|| format!("parsing {path}"))?;
            info!(path = %path, count = samples.len(), "loaded labeled samples");
            samples
        }
        None => {
            info!("no sample file given, using reference samples");
            sample_reports()
        }
    };

    let triage = Triage::default();
    let evaluation = evaluate(&triage, &samples)?;

    for row in &evaluation.rows {
        println!();
        println!("Raw Text       : {}", row.text);
        println!("Predicted Type : {}", row.report.incident);
        println!("Correct Type   : {}", row.expected);
        println!("Urgency Level  : {}", row.report.urgency);
        println!("Location       : {}", row.report.location);
    }

    println!();
    println!("Final F1 Score : {:.2} %", evaluation.macro_f1 * 100.0);
    Ok(())
}
