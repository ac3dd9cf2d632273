//! Reading the configuration from a file.

use lifegrid_lib::Config;
use log::debug;
use std::{error::Error, ffi::OsStr, fs, path::Path};

/// Reads a [`Config`] from a JSON, YAML or TOML file.
///
/// The format is chosen by the file extension.
pub(crate) fn load_config(path: &Path) -> Result<Config, Box<dyn Error>> {
    let extension = path.extension().and_then(OsStr::to_str).unwrap_or("");
    let text = fs::read_to_string(path)?;
    let config = parse_config(&text, extension)?;
    debug!("loaded {}: {:?}", path.display(), config);
    Ok(config)
}

/// Parses a [`Config`] in the format named by `extension`.
///
/// Missing fields take their default values.
fn parse_config(text: &str, extension: &str) -> Result<Config, Box<dyn Error>> {
    let config = match extension {
        "json" => serde_json::from_str(text)?,
        "yaml" | "yml" => serde_yaml::from_str(text)?,
        "toml" => toml::from_str(text)?,
        _ => return Err(format!("unknown file format: {:?}", extension).into()),
    };
    Ok(config)
}
