//! Validate command implementation
//!
//! Runs the fruit payload validator offline, without starting a server.

use anyhow::{Context, Result};
use clap::Args;
use fruitstand_protocol::{validate_fruit_json, FruitInput};
use std::fs;

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// JSON payload, e.g. '{"name":"kiwi","price":2.5}'
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub payload: Option<String>,
    /// Read the payload from a file instead
    #[arg(short, long)]
    pub file: Option<String>,
}

/// Execute the validate command
pub fn execute_validate_command(args: ValidateArgs) -> Result<()> {
    let payload = match (&args.payload, &args.file) {
        (Some(payload), _) => payload.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read payload file: {}", path))?,
        (None, None) => anyhow::bail!("No payload given"),
    };

    println!("🔍 Validating fruit payload");
    let input = validate_payload(&payload)?;
    println!("✅ Payload is valid");
    println!("{}", serde_json::to_string_pretty(&input)?);
    Ok(())
}

/// Validate a payload, printing every violated rule on failure
pub fn validate_payload(payload: &str) -> Result<FruitInput> {
    match validate_fruit_json(payload.as_bytes()) {
        Ok(input) => Ok(input),
        Err(err) => {
            println!("❌ Payload validation failed");
            for reason in err.reasons() {
                println!("   Error: {}", reason);
            }
            Err(err).context("Fruit payload validation failed")
        }
    }
}
