//! CLI logic for the netlayout topology layout tool.
//!
//! This module contains the core CLI logic: it reads a topology JSON file,
//! lays it out and writes the augmented topology back out.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{info, warn};

use netlayout::{LayoutService, NetLayoutError, parser::error::Diagnostic};

use error_adapter::diagnostics_to_reportables;

/// Run the netlayout CLI application
///
/// This function lays out the topology in the input file and writes the
/// topology, with a `location` on every retained device and network, to the
/// output file. Dropped records are reported as warnings.
///
/// # Errors
///
/// Returns `NetLayoutError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed JSON or a topology without the expected collections
/// - Layout errors
pub fn run(args: &Args) -> Result<(), NetLayoutError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing topology"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let mut layout_config = app_config.into_layout();
    if let Some(seed) = args.seed {
        info!(seed; "Using seed from command line");
        layout_config = layout_config.with_seed(seed);
    }

    let source = fs::read_to_string(&args.input)?;
    let topology: serde_json::Value = serde_json::from_str(&source)?;

    let mut service = LayoutService::new(layout_config);
    let report = service.generate_layout(topology)?;
    report_dropped(report.diagnostics());

    if let Some(payload_path) = &args.payload {
        let payload = serde_json::to_string_pretty(&report.payload())?;
        fs::write(payload_path, payload)?;
        info!(payload_file = payload_path; "Layout payload written");
    }

    let output = serde_json::to_string_pretty(report.topology())?;
    fs::write(&args.output, output)?;

    info!(
        output_file = args.output,
        entities = report.state().len();
        "Layout exported successfully"
    );

    Ok(())
}

fn report_dropped(diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }

    let reporter = miette::GraphicalReportHandler::new();
    for reportable in diagnostics_to_reportables(diagnostics) {
        let mut writer = String::new();
        if reporter.render_report(&mut writer, &reportable).is_err() {
            writer = reportable.to_string();
        }
        warn!("{writer}");
    }
    warn!(dropped = diagnostics.len(); "Records were dropped from the layout");
}
