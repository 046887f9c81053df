//! Installed-model list formatting

use crate::ollama::{size_unit_counts, InstalledModel};

/// Format the installed-model listing with a size-unit summary
pub fn format_model_list(models: &[InstalledModel]) -> String {
    if models.is_empty() {
        return "No models found.".to_string();
    }

    let name_width = models.iter().map(|m| m.name.len()).max().unwrap_or(4).max(4);
    let size_width = models.iter().map(|m| m.size.len()).max().unwrap_or(4).max(4);

    let mut output = String::new();

    let counts = size_unit_counts(models);
    output.push_str("Size units: ");
    let mut first = true;
    for unit in ["TB", "GB", "MB", "KB", "B"] {
        if let Some(count) = counts.get(unit) {
            if !first {
                output.push_str(", ");
            }
            output.push_str(&format!("{}: {} model(s)", unit, count));
            first = false;
        }
    }
    output.push_str("\n\nAvailable models:\n");

    for (i, model) in models.iter().enumerate() {
        output.push_str(&format!(
            "  [{:2}] {:<name_width$}  (Size: {:<size_width$}, ID: {})\n",
            i,
            model.name,
            model.size,
            model.id,
            name_width = name_width,
            size_width = size_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(name: &str, size: &str) -> InstalledModel {
        InstalledModel {
            name: name.into(),
            id: "abc123".into(),
            size: size.into(),
        }
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_model_list(&[]), "No models found.");
    }

    #[test]
    fn test_list_contains_all_models_and_summary() {
        let models = vec![model("llama3:8b", "4.7 GB"), model("tiny:q4", "890 MB")];
        let out = format_model_list(&models);

        assert!(out.contains("[ 0] llama3:8b"));
        assert!(out.contains("[ 1] tiny:q4"));
        assert!(out.contains("GB: 1 model(s)"));
        assert!(out.contains("MB: 1 model(s)"));
    }
}
