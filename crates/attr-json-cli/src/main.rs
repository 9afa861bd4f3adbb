//! `attr-json` CLI — inspect attribute value ↔ client JSON conversions.
//!
//! ## Usage
//!
//! ```sh
//! # Attribute tree (serde form) to client JSON (stdin → stdout)
//! echo '{"type":"object","value":{"source_ref":{"type":"string","value":"abc"}}}' | attr-json encode
//!
//! # Drop null/unknown attributes, keep map keys as written, pretty-print
//! attr-json encode --skip-undefined --keep-map-keys --pretty -i plan.json
//!
//! # Client JSON back to an attribute tree, guided by a type file
//! attr-json decode -s contract_type.json -i response.json
//!
//! # Show the camelCase field name for attribute names
//! attr-json camel source_ref core_attributes
//! ```

use anyhow::{Context, Result};
use attr_json::{AttrType, AttrValue, ConvertOptions};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "attr-json",
    version,
    about = "Terraform attribute value <-> client JSON conversions"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log conversion details to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an attribute value tree into client JSON
    Encode {
        /// Input file holding the tree in its serde form (stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Omit null and unknown attributes instead of writing null / failing
        #[arg(long, env = "ATTR_JSON_SKIP_UNDEFINED")]
        skip_undefined: bool,
        /// Write generic map keys verbatim instead of camelCasing them
        #[arg(long, env = "ATTR_JSON_KEEP_MAP_KEYS")]
        keep_map_keys: bool,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Convert client JSON into an attribute value tree
    Decode {
        /// Attribute type file describing the expected shape
        #[arg(short, long)]
        schema: String,
        /// Input JSON file (stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the camelCase field name for each attribute name
    Camel {
        /// snake_case attribute names
        #[arg(required = true)]
        keys: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Encode {
            input,
            output,
            skip_undefined,
            keep_map_keys,
            pretty,
        } => {
            let raw = read_input(input.as_deref())?;
            let value: AttrValue =
                serde_json::from_str(&raw).context("Input is not a valid attribute value tree")?;
            let options = ConvertOptions::new()
                .skip_undefined_attributes(skip_undefined)
                .rename_map_keys(!keep_map_keys);
            tracing::debug!(?options, root = value.type_name(), "encoding attribute value");

            let mut json = attr_json::to_json_string_with(&value, &options)
                .context("Failed to convert attribute value to JSON")?;
            if pretty {
                // Re-indent the encoder's own text so numbers print identically.
                let parsed: serde_json::Value = serde_json::from_str(&json)?;
                json = serde_json::to_string_pretty(&parsed)?;
            }
            write_output(output.as_deref(), &json)?;
        }
        Commands::Decode {
            schema,
            input,
            output,
        } => {
            let schema_raw = std::fs::read_to_string(&schema)
                .with_context(|| format!("Failed to read schema file: {}", schema))?;
            let ty: AttrType = serde_json::from_str(&schema_raw)
                .with_context(|| format!("Schema file is not a valid attribute type: {}", schema))?;
            let raw = read_input(input.as_deref())?;
            tracing::debug!(root = ty.name(), "decoding client JSON");

            let value = attr_json::from_json_str(&raw, &ty)
                .context("Failed to convert JSON to attribute value")?;
            let pretty = serde_json::to_string_pretty(&value)?;
            write_output(output.as_deref(), &pretty)?;
        }
        Commands::Camel { keys } => {
            for key in &keys {
                println!("{}", attr_json::underscore_to_camel_case(key));
            }
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays a clean JSON document.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
