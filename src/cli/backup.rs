//! `backup` command: snapshot models from the live store

use std::path::Path;

use crate::backup::backup_model;
use crate::config::StorePaths;
use crate::error::ModelBakResult;
use crate::models::ModelName;
use crate::ollama::list_models;

/// Handle the `backup` command
///
/// With `all`, the model list comes from the external `ollama list`
/// collaborator; otherwise every name in `models` is backed up. A fatal
/// error from one model (unparseable source manifest, unusable live store)
/// aborts the run; per-blob problems are reported and the run continues.
pub fn handle_backup_command(
    models: &[String],
    all: bool,
    backup_root: &Path,
) -> ModelBakResult<()> {
    let live = StorePaths::from_env()?;

    let names: Vec<String> = if all {
        list_models()?.into_iter().map(|m| m.name).collect()
    } else {
        models.to_vec()
    };

    for (i, raw) in names.iter().enumerate() {
        let model = ModelName::parse(raw)?;
        println!("Backing up {} ...", model);

        let outcome = backup_model(&live, &model, backup_root)?;

        for warning in &outcome.warnings {
            println!("Warning: {}", warning);
        }
        println!(
            "Backed up {} ({} blob(s), {}) to:",
            outcome.model,
            outcome.blobs_copied,
            crate::display::format_size(outcome.bytes_copied),
        );
        println!("  {}", outcome.backup_root.display());
        if !outcome.is_complete() {
            println!("Note: this set is incomplete; run 'modelbak validate' for details.");
        }
        if i + 1 < names.len() {
            println!();
        }
    }

    Ok(())
}
