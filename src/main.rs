use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use modelbak::cli::{
    handle_backup_command, handle_list_command, handle_models_command, handle_restore_command,
    handle_validate_command,
};
use modelbak::config::DEFAULT_BACKUP_ROOT;

#[derive(Parser)]
#[command(
    name = "modelbak",
    version,
    about = "Backup and restore locally-stored Ollama models",
    long_about = "modelbak copies an Ollama model's manifest and the \
                  content-addressed blobs it references into self-contained \
                  backup sets, validates those sets, and restores them into \
                  a live store. The live store root is read from the \
                  OLLAMA_MODELS environment variable."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List models installed in Ollama
    Models,

    /// Back up one or more models from the live store
    Backup {
        /// Model names (namespace[:tag]); tag defaults to 'latest'
        #[arg(required_unless_present = "all")]
        models: Vec<String>,

        /// Back up every installed model
        #[arg(short, long)]
        all: bool,

        /// Directory to create backup sets under
        #[arg(long, default_value = DEFAULT_BACKUP_ROOT)]
        backup_root: PathBuf,
    },

    /// List and summarize backup sets under a directory
    List {
        /// Directory containing backup sets
        #[arg(long, default_value = DEFAULT_BACKUP_ROOT)]
        backup_root: PathBuf,
    },

    /// Validate backup sets (structure, blob presence, optional hashes)
    Validate {
        /// Backup set directories to validate
        #[arg(required = true)]
        backups: Vec<PathBuf>,

        /// Also verify blob content against the manifest digests
        #[arg(long)]
        hashes: bool,
    },

    /// Restore backup sets into a live store
    Restore {
        /// Backup set directories to restore
        #[arg(required = true)]
        backups: Vec<PathBuf>,

        /// Destination store root (defaults to $OLLAMA_MODELS)
        #[arg(long, env = "OLLAMA_MODELS")]
        dest: Option<PathBuf>,

        /// Verify blob hashes during pre-restore validation
        #[arg(long)]
        hashes: bool,

        /// Also restore sets that fail validation
        #[arg(long)]
        include_invalid: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Models => handle_models_command()?,
        Commands::Backup {
            models,
            all,
            backup_root,
        } => handle_backup_command(&models, all, &backup_root)?,
        Commands::List { backup_root } => handle_list_command(&backup_root)?,
        Commands::Validate { backups, hashes } => {
            if !handle_validate_command(&backups, hashes)? {
                anyhow::bail!("validation failed for one or more backup sets");
            }
        }
        Commands::Restore {
            backups,
            dest,
            hashes,
            include_invalid,
        } => handle_restore_command(&backups, dest, hashes, include_invalid)?,
    }

    Ok(())
}
