mod api;

use clap::{Parser, Subcommand};
use roadmaps::{ApiError, DraftError, NewRoadmap};
use serde_json::Value;

use crate::api::RoadmapClient;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("invalid roadmap: {0}")]
    InvalidDraft(#[from] DraftError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "roadmap-cli", about = "Create, list and fetch roadmaps")]
struct Cli {
    #[arg(long, env = "ROADMAP_BASE_URL", default_value = "http://127.0.0.1:8081")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server answers its health endpoint.
    Ping,
    /// Create a roadmap and print the stored record.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Print every roadmap.
    List,
    /// Print one roadmap by id.
    Get { id: String },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let client = RoadmapClient::new(cli.base_url);

    match cli.command {
        Command::Ping => {
            client.ping().await?;
            println!("ok");
            Ok(())
        }
        Command::Create { title, description } => {
            let draft = NewRoadmap::new(title, description);
            draft.validate()?;
            let created = client.create(&draft).await?;
            print_json(&serde_json::to_value(created)?)
        }
        Command::List => {
            let roadmaps = client.list().await?;
            print_json(&serde_json::to_value(roadmaps)?)
        }
        Command::Get { id } => {
            let roadmap = client.get(&id).await?;
            print_json(&serde_json::to_value(roadmap)?)
        }
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn create_description_defaults_to_empty() {
        let cli = Cli::try_parse_from(["roadmap-cli", "create", "--title", "Learn Go"]).unwrap();
        match cli.command {
            Command::Create { title, description } => {
                assert_eq!(title, "Learn Go");
                assert_eq!(description, "");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn base_url_flag_overrides_default() {
        let cli = Cli::try_parse_from(["roadmap-cli", "--base-url", "http://example:9000", "list"]).unwrap();
        assert_eq!(cli.base_url, "http://example:9000");
        assert!(matches!(cli.command, Command::List));
    }

    #[test]
    fn get_requires_id() {
        assert!(Cli::try_parse_from(["roadmap-cli", "get"]).is_err());
    }

    #[test]
    fn empty_title_fails_before_any_request() {
        let draft = NewRoadmap::new("", "x");
        let err = CliError::from(draft.validate().unwrap_err());
        assert_eq!(err.to_string(), "invalid roadmap: Title is required");
    }
}
