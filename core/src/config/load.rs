use std::path::Path;

use crate::config::EnvMap;
use crate::errors::ConfigError;

/// Read the `[inputs]` table of `gatecheck.toml` in the working directory,
/// if the file exists. Only string values participate; everything else in
/// the file is ignored.
pub fn file_defaults() -> Result<EnvMap, ConfigError> {
    file_defaults_at(Path::new("gatecheck.toml"))
}

pub(crate) fn file_defaults_at(path: &Path) -> Result<EnvMap, ConfigError> {
    if !path.exists() {
        return Ok(EnvMap::new());
    }
    let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Parse(e.into()))?;
    let doc: toml::Value = toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.into()))?;

    let mut out = EnvMap::new();
    if let Some(table) = doc.get("inputs").and_then(|v| v.as_table()) {
        for (key, value) in table {
            if let Some(s) = value.as_str() {
                out.insert(key.clone(), s.to_string());
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_is_empty_layer() {
        let dir = tempfile::tempdir().unwrap();
        let layer = file_defaults_at(&dir.path().join("gatecheck.toml")).unwrap();
        assert!(layer.is_empty());
    }

    #[test]
    fn reads_string_inputs_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gatecheck.toml");
        std::fs::write(
            &path,
            "[inputs]\nGATE_REGION = \"eu-west-1\"\nGATE_RETRIES = 3\n",
        )
        .unwrap();

        let layer = file_defaults_at(&path).unwrap();
        assert_eq!(layer.get("GATE_REGION").map(String::as_str), Some("eu-west-1"));
        assert!(!layer.contains_key("GATE_RETRIES"));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gatecheck.toml");
        std::fs::write(&path, "[inputs\nbroken").unwrap();

        let err = file_defaults_at(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
