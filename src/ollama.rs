//! External `ollama list` collaborator
//!
//! Enumerates installed models by invoking `ollama list` and parsing its
//! tabular output: a header line, then one row per model with the name
//! (`namespace[:tag]`), an identifier, and a human-readable size such as
//! `4.7 GB`. Rows that do not match are skipped.

use std::collections::BTreeMap;
use std::process::Command;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{ModelBakError, ModelBakResult};

/// One row of the installed-model listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledModel {
    /// Model name (`namespace[:tag]`)
    pub name: String,
    /// Model identifier
    pub id: String,
    /// Human-readable size as printed by the tool (e.g. `4.7 GB`)
    pub size: String,
}

impl InstalledModel {
    /// The unit component of the size column (`B`, `KB`, `MB`, `GB`, `TB`)
    pub fn size_unit(&self) -> &str {
        self.size
            .trim_end()
            .rsplit(|c: char| c.is_ascii_digit() || c.is_whitespace())
            .next()
            .unwrap_or("")
            .trim()
    }
}

fn row_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\S+)\s+(\S+)\s+(\d+(?:\.\d+)?\s*[TGMK]?B)").expect("valid row regex")
    })
}

/// Run `ollama list` and parse the result
pub fn list_models() -> ModelBakResult<Vec<InstalledModel>> {
    let output = Command::new("ollama")
        .arg("list")
        .output()
        .map_err(|e| ModelBakError::ModelList(format!("failed to run 'ollama list': {}", e)))?;

    if !output.status.success() {
        return Err(ModelBakError::ModelList(format!(
            "'ollama list' exited with {}",
            output.status
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(parse_model_table(&stdout))
}

/// Parse the model table, skipping the header line and unparseable rows
pub fn parse_model_table(stdout: &str) -> Vec<InstalledModel> {
    stdout
        .trim()
        .lines()
        .skip(1)
        .filter_map(|line| {
            row_regex().captures(line).map(|caps| InstalledModel {
                name: caps[1].to_string(),
                id: caps[2].to_string(),
                size: caps[3].trim().to_string(),
            })
        })
        .collect()
}

/// Count models per size unit, for the listing summary
pub fn size_unit_counts(models: &[InstalledModel]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for model in models {
        *counts.entry(model.size_unit().to_string()).or_insert(0) += 1;
    }
    counts
}
