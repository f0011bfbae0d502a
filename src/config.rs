use std::{ fs, path::PathBuf };

use serde::{ Deserialize, Serialize };

use crate::core::PindeckError;

pub const CONFIG_FILE: &str = "pindeck.json";

/// Fixed input and output locations for a run. Loaded from pindeck.json in
/// the working directory when present; otherwise the defaults below apply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub table_path: PathBuf,
    pub audio_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            table_path: PathBuf::from("pinyin_word_lookup.csv"),
            audio_dir: PathBuf::from("mp3"),
            output_dir: PathBuf::from("."),
        }
    }
}

pub fn load_config() -> Result<Config, PindeckError> {
    if !PathBuf::from(CONFIG_FILE).exists() {
        return Ok(Config::default());
    }

    let json = fs::read_to_string(CONFIG_FILE)?;
    let config = serde_json::from_str(&json)?;
    Ok(config)
}

pub fn load_config_or_default() -> Config {
    match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {}: {}. Using defaults.", CONFIG_FILE, e);
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_original_layout() {
        let config = Config::default();
        assert_eq!(config.table_path, PathBuf::from("pinyin_word_lookup.csv"));
        assert_eq!(config.audio_dir, PathBuf::from("mp3"));
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn partial_config_files_fall_back_per_field() {
        let config: Config = serde_json::from_str(r#"{ "audio_dir": "clips" }"#).unwrap();
        assert_eq!(config.audio_dir, PathBuf::from("clips"));
        assert_eq!(config.table_path, PathBuf::from("pinyin_word_lookup.csv"));
    }
}
