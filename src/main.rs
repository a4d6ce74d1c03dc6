//! Command line tool for checking and decoding JSON documents.
//!
//! # Usage
//!
//! ```bash
//! # Check which media types a JSON document accepts
//! json-document accepts application/hal+json text/html
//!
//! # Decode a file as a JSON document
//! json-document inspect --file data.json --content-type application/ld+json
//!
//! # Decode stdin
//! curl -s https://example.com/data.json | json-document inspect
//!
//! # List modelled content types
//! json-document types
//! ```
//!
//! # Environment Variables
//!
//! See [`json_document::config`]; a `.env` file is loaded if present.

use json_document::config;
use json_document::domain::content_types::ContentTypeRuleSet;
use json_document::domain::entities::{JsonDocument, MediaType, WebResourceProperties};
use json_document::telemetry::init_tracing;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use url::Url;

/// Checks content types and decodes JSON documents.
#[derive(Parser)]
#[command(name = "json-document")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report whether each media type is accepted
    Accepts {
        /// Media types or full Content-Type header values
        #[arg(required = true)]
        media_types: Vec<String>,
    },

    /// Build a document from a file or stdin and print its data
    Inspect {
        /// Read content from this file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Declared content type (default: application/json)
        #[arg(short, long)]
        content_type: Option<String>,

        /// URI to attach to the document
        #[arg(short, long)]
        uri: Option<String>,
    },

    /// List modelled content types and accepted patterns
    Types,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    init_tracing(&config);
    config.print_summary();

    let rules = config.rule_set()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Accepts { media_types } => handle_accepts(&media_types, &rules),
        Commands::Inspect {
            file,
            content_type,
            uri,
        } => handle_inspect(file, content_type, uri, rules).await,
        Commands::Types => {
            handle_types(&rules);
            Ok(())
        }
    }
}

/// Prints acceptance per media type; fails if any is rejected or unparsable.
fn handle_accepts(media_types: &[String], rules: &ContentTypeRuleSet) -> Result<()> {
    let mut rejected = 0;

    for raw in media_types {
        match MediaType::parse(raw) {
            Ok(media_type) if rules.accepts(&media_type) => {
                println!("{} {}", "✓".green(), media_type.to_string().bold());
            }
            Ok(media_type) => {
                rejected += 1;
                println!("{} {}", "✗".red(), media_type.to_string().bold());
            }
            Err(e) => {
                rejected += 1;
                println!("{} {} ({})", "✗".red(), raw.bold(), e.to_string().dimmed());
            }
        }
    }

    if rejected > 0 {
        anyhow::bail!("{rejected} of {} media types rejected", media_types.len());
    }

    Ok(())
}

async fn handle_inspect(
    file: Option<PathBuf>,
    content_type: Option<String>,
    uri: Option<String>,
    rules: Arc<ContentTypeRuleSet>,
) -> Result<()> {
    let content = match &file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buffer)
                .await
                .context("Failed to read stdin")?;
            buffer
        }
    };

    let mut properties = WebResourceProperties::new().with_content(content);
    if let Some(content_type) = content_type {
        properties = properties.with_content_type(MediaType::parse(&content_type)?);
    }
    if let Some(uri) = uri {
        properties = properties.with_uri(Url::parse(&uri).context("Invalid --uri")?);
    }

    let document = JsonDocument::with_rules(properties, rules)?;
    let data = document.data()?;

    if let Some(uri) = document.uri() {
        println!("{} {}", "URI:".bold(), uri);
    }
    println!(
        "{} {}",
        "Content type:".bold(),
        document.content_type().header_value().cyan()
    );
    println!("{} {}", "Entries:".bold(), data.len());
    println!("{}", serde_json::to_string_pretty(&Value::from(data))?);

    Ok(())
}

fn handle_types(rules: &ContentTypeRuleSet) {
    println!("{}", "Modelled content types:".bold());
    for content_type in ContentTypeRuleSet::modelled_content_type_strings() {
        println!("  {}", content_type.cyan());
    }

    let modelled = ContentTypeRuleSet::modelled_content_type_strings();
    let extra: Vec<_> = rules
        .literals()
        .iter()
        .filter(|l| !modelled.iter().any(|m| *m == l.as_str()))
        .collect();
    if !extra.is_empty() {
        println!("{}", "Configured content types:".bold());
        for content_type in extra {
            println!("  {}", content_type.cyan());
        }
    }

    println!("{}", "Patterns:".bold());
    for pattern in rules.patterns() {
        println!("  {}", pattern.yellow());
    }
}
