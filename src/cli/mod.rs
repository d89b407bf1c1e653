// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Two commands:
//   1. `serve`   — load the artifacts and run the HTTP server
//   2. `predict` — load the artifacts and classify one text
//
// All business logic is delegated to Layer 2.

pub mod commands;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, PredictArgs, ServeArgs};

use crate::api::{self, schema::PredictResponse};
use crate::application::inference_service::InferenceService;

#[derive(Parser, Debug)]
#[command(
    name = "gambling-text-classifier",
    version,
    about = "Classify text as online-gambling promotion (Judi Online) or not."
)]
pub struct Cli {
    /// The subcommand to run (serve or predict)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve(args)   => run_serve(args),
            Commands::Predict(args) => run_predict(args),
        }
    }
}

fn run_serve(args: ServeArgs) -> Result<()> {
    let addr    = args.addr();
    let service = InferenceService::from_config(&args.pipeline.into());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Cannot start the tokio runtime")?;

    runtime.block_on(api::serve(&addr, service))
}

fn run_predict(args: PredictArgs) -> Result<()> {
    let service = InferenceService::from_config(&args.pipeline.into());
    write_prediction(&mut std::io::stdout().lock(), &service, args.text)
}

/// Print exactly one JSON document, the same body `/predict` returns.
fn write_prediction(out: &mut impl Write, service: &InferenceService, text: String) -> Result<()> {
    let outcome  = service.predict(&text);
    let response = PredictResponse::from_outcome(text, service.labels(), outcome);

    serde_json::to_writer_pretty(&mut *out, &response)?;
    writeln!(out)?;
    Ok(())
}
