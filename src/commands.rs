use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser, Subcommand};

use crate::{
    configs::LoaderSettings, container::AppContainer, errors::AppError, logging, verbs,
};

#[derive(Debug, Parser)]
#[command(
    name = "logconf",
    version,
    about = "Locate and load logging configuration files",
    long_about = None
)]
pub struct Cli {
    #[arg(long, global = true, value_name = "DIR")]
    #[arg(help = "Override the application base directory")]
    base_dir: Option<PathBuf>,

    #[arg(short, long, global = true, action = ArgAction::Count)]
    #[arg(help = "Increase log verbosity (-v debug, -vv trace)")]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn execute() -> Result<(), AppError> {
        let args = Cli::parse();
        logging::initialize_tracing(args.verbose);

        let mut settings = LoaderSettings::load()?;
        if let Some(base_dir) = &args.base_dir {
            settings.base_directory = Some(base_dir.clone());
        }
        let container = AppContainer::new(&settings);

        match &args.command {
            Some(Commands::Candidates { file }) => {
                verbs::candidates::execute(&container, file.as_deref());
                Ok(())
            }
            Some(Commands::Resolve { path }) => {
                verbs::resolve::execute(&container, path);
                Ok(())
            }
            Some(Commands::Load { file }) => {
                verbs::load::execute(&container, &mut settings, file.as_deref())
            }
            None => {
                Cli::command().print_help()?;
                Ok(())
            }
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "List the locations searched for a configuration file")]
    Candidates {
        #[arg(short, long, help = "File name to search for instead of the default")]
        file: Option<String>,
    },

    #[command(about = "Resolve a configuration file path")]
    Resolve {
        #[arg(help = "Absolute path, or path relative to the application")]
        path: String,
    },

    #[command(about = "Load the configuration and print a summary")]
    Load {
        #[arg(short, long, help = "Load this file instead of searching")]
        file: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["logconf", "load", "--base-dir", "/app", "-vv"]).unwrap();

        assert_eq!(cli.base_dir, Some(PathBuf::from("/app")));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Commands::Load { file: None })));
    }

    #[test]
    fn test_parse_candidates_with_file() {
        let cli = Cli::try_parse_from(["logconf", "candidates", "--file", "app.config"]).unwrap();

        match cli.command {
            Some(Commands::Candidates { file }) => assert_eq!(file.as_deref(), Some("app.config")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_requires_path() {
        assert!(Cli::try_parse_from(["logconf", "resolve"]).is_err());
    }
}
