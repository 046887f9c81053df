//! `models` command: show what Ollama has installed

use crate::display::format_model_list;
use crate::error::ModelBakResult;
use crate::ollama::list_models;

/// Handle the `models` command
pub fn handle_models_command() -> ModelBakResult<()> {
    let models = list_models()?;
    println!("{}", format_model_list(&models));
    Ok(())
}
