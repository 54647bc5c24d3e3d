//! Command-line interface for udf-samples.
//!
//! Provides commands for retrieving sample code, the samples index, and the
//! embedded code-generation instructions. This layer owns argument parsing
//! and output rendering; all retrieval logic lives in the core service.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::core::SampleService;
use crate::domain::SampleRequest;
use crate::embedded;

/// udf-samples - cached retrieval of Fabric User Data Functions samples
#[derive(Parser, Debug)]
#[command(name = "udf-samples")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Retrieve sample code for a resource
    Get {
        /// Resource category: samples-list, warehouse, lakehouse, sqldb,
        /// variablelibrary, datamanipulation, or udfdatatypes
        #[arg(short, long)]
        resource: String,

        /// Action: all, query, write, or specific (required for code
        /// resources)
        #[arg(short, long)]
        action: Option<String>,

        /// Sample file path (required when action is 'specific')
        #[arg(short, long)]
        filename: Option<String>,

        /// Emit a JSON results envelope instead of raw text
        #[arg(long)]
        json: bool,
    },

    /// Retrieve the samples index document
    List {
        /// Emit a JSON results envelope instead of raw text
        #[arg(long)]
        json: bool,
    },

    /// Print the embedded code-generation instructions
    Codegen {
        /// Emit a JSON results envelope instead of raw text
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Execute the parsed command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Get {
                resource,
                action,
                filename,
                json,
            } => {
                let service = SampleService::new();
                let request = SampleRequest {
                    resource,
                    action,
                    filename,
                };
                let content = service.get(&request).await?;
                emit(&content, json)
            }
            Commands::List { json } => {
                let service = SampleService::new();
                let content = service.get(&SampleRequest::new("samples-list")).await?;
                emit(&content, json)
            }
            Commands::Codegen { json } => emit(embedded::codegen_instructions(), json),
        }
    }
}

/// Print a document, optionally wrapped in the `{"results": [..]}` envelope
fn emit(content: &str, json: bool) -> Result<()> {
    if json {
        let envelope = serde_json::json!({ "results": [content] });
        println!("{}", serde_json::to_string(&envelope)?);
    } else {
        println!("{}", content);
    }
    Ok(())
}
