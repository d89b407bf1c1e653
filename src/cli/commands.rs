// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Two subcommands: `serve` and `predict`.
//
// Every flag defaults to the values the artifacts were produced
// with, so a bare `serve` binds 0.0.0.0:8000 and reads
// `model/` + `tokenizer.json` from the working directory.

use std::path::PathBuf;

use clap::{builder::TypedValueParser, Args, Subcommand, ValueEnum};

use crate::application::inference_service::PipelineConfig;
use crate::data::sequence::{PadSide, MAX_LENGTH};
use crate::domain::prediction::{LabelSet, DEFAULT_NEGATIVE_LABEL, DEFAULT_POSITIVE_LABEL};
use crate::infra::artifacts::{ArtifactPaths, DEFAULT_MODEL_DIR, DEFAULT_TOKENIZER_PATH};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP prediction server
    Serve(ServeArgs),

    /// Classify one text and print the JSON response
    Predict(PredictArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8000)]
    pub port: u16,

    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

impl ServeArgs {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Text to classify
    #[arg(long)]
    pub text: String,

    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

/// Artifact locations and preprocessing settings shared by both commands.
#[derive(Args, Debug, Clone)]
pub struct PipelineArgs {
    /// Directory holding model_config.json and model.mpk.gz
    #[arg(long, default_value = DEFAULT_MODEL_DIR)]
    pub model_dir: PathBuf,

    /// Tokenizer file (Keras to_json export or HuggingFace tokenizer.json)
    #[arg(long, default_value = DEFAULT_TOKENIZER_PATH)]
    pub tokenizer: PathBuf,

    /// Sequence length the model was trained on
    #[arg(long, default_value_t = MAX_LENGTH,
          value_parser = clap::value_parser!(u64).range(1..).map(|n| n as usize))]
    pub max_length: usize,

    /// Where padding zeros go
    #[arg(long, value_enum, default_value_t = SideArg::Post)]
    pub padding: SideArg,

    /// Which end is dropped from over-long sequences
    #[arg(long, value_enum, default_value_t = SideArg::Post)]
    pub truncating: SideArg,

    /// Label for probability > 0.5
    #[arg(long, default_value = DEFAULT_POSITIVE_LABEL)]
    pub positive_label: String,

    /// Label for probability <= 0.5
    #[arg(long, default_value = DEFAULT_NEGATIVE_LABEL)]
    pub negative_label: String,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideArg {
    Pre,
    Post,
}

impl From<SideArg> for PadSide {
    fn from(s: SideArg) -> Self {
        match s {
            SideArg::Pre  => PadSide::Pre,
            SideArg::Post => PadSide::Post,
        }
    }
}

/// Boundary between Layer 1 and Layer 2 — the application layer
/// never sees clap types.
impl From<PipelineArgs> for PipelineConfig {
    fn from(a: PipelineArgs) -> Self {
        PipelineConfig {
            artifacts: ArtifactPaths {
                model_dir: a.model_dir,
                tokenizer: a.tokenizer,
            },
            max_length: a.max_length,
            padding:    a.padding.into(),
            truncating: a.truncating.into(),
            labels:     LabelSet::new(a.positive_label, a.negative_label),
        }
    }
}
