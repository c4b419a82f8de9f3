use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
use commands::{execute_serve_command, execute_validate_command, ServeArgs, ValidateArgs};

#[derive(Parser)]
#[command(name = "fruitstand")]
#[command(about = "Fruitstand - in-memory fruit catalogue over HTTP")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API
    Serve(ServeArgs),
    /// Validate a fruit payload without starting a server
    Validate(ValidateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => execute_serve_command(args).await,
        Commands::Validate(args) => execute_validate_command(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["fruitstand", "serve"]).unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, 5000);
                assert!(args.host.is_loopback());
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_validate_requires_payload() {
        assert!(Cli::try_parse_from(["fruitstand", "validate"]).is_err());
        assert!(Cli::try_parse_from(["fruitstand", "validate", "{}"]).is_ok());
    }
}
