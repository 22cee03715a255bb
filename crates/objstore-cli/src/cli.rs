use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use objstore_types::Identity;

#[derive(Parser)]
#[command(
    name = "objstore",
    about = "objstore — one JSON file per object",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Storage root directory (overrides the config file)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// TOML file holding a store configuration
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Store a JSON object, replacing any record with the same id
    Put(PutArgs),
    /// Print the JSON object stored under an id
    Get(GetArgs),
    /// Delete the record stored under an id
    Delete(DeleteArgs),
}

#[derive(Args)]
pub struct PutArgs {
    /// Record id; a random one is generated when omitted
    #[arg(long)]
    pub id: Option<Identity>,
    /// Properties as a JSON object, e.g. '{"key":"value"}'
    pub properties: String,
}

#[derive(Args)]
pub struct GetArgs {
    pub id: Identity,
}

#[derive(Args)]
pub struct DeleteArgs {
    pub id: Identity,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "11111111-1111-1111-1111-111111111111";

    #[test]
    fn parse_put_with_id() {
        let cli = Cli::try_parse_from(["objstore", "put", "--id", ID, r#"{"key":"value"}"#]).unwrap();
        if let Command::Put(args) = cli.command {
            assert_eq!(args.id.unwrap().to_string(), ID);
            assert_eq!(args.properties, r#"{"key":"value"}"#);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_put_without_id() {
        let cli = Cli::try_parse_from(["objstore", "put", "{}"]).unwrap();
        if let Command::Put(args) = cli.command {
            assert!(args.id.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_get() {
        let cli = Cli::try_parse_from(["objstore", "get", ID]).unwrap();
        if let Command::Get(args) = cli.command {
            assert_eq!(args.id.to_string(), ID);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_delete() {
        let cli = Cli::try_parse_from(["objstore", "delete", ID]).unwrap();
        assert!(matches!(cli.command, Command::Delete(_)));
    }

    #[test]
    fn invalid_id_is_rejected() {
        assert!(Cli::try_parse_from(["objstore", "get", "not-a-uuid"]).is_err());
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::try_parse_from([
            "objstore", "--root", "/tmp/records", "--format", "json", "-v", "get", ID,
        ])
        .unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/tmp/records")));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(cli.config.is_none());
    }
}
