use std::{
    env,
    fs::read_to_string,
    path::{Path, PathBuf},
};

use bank::vault::PLACEHOLDER_KEY;
use tracing::{info, warn};

const DEFAULT_DATA_PATH: &str = "finance.json";
const DEFAULT_SECRETS_DIR: &str = "/run/secrets";
const VAULT_KEY_SECRET: &str = "VAULT_KEY";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_path: PathBuf,
    pub vault_key: String,
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let secrets_dir = load_path(&lookup, "FINANCE_SECRETS_DIR", DEFAULT_SECRETS_DIR);

        Self {
            data_path: load_path(&lookup, "FINANCE_DATA_PATH", DEFAULT_DATA_PATH),
            vault_key: read_secret(&secrets_dir, VAULT_KEY_SECRET).unwrap_or_else(|| {
                warn!("Using the placeholder vault key, credentials are only obfuscated");
                PLACEHOLDER_KEY.to_string()
            }),
        }
    }
}

/// Blank values count as unset.
fn load_path(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> PathBuf {
    lookup(key)
        .filter(|raw| !raw.trim().is_empty())
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .into()
}

fn read_secret(dir: &Path, secret_name: &str) -> Option<String> {
    let path = dir.join(secret_name);

    read_to_string(&path)
        .map(|s| s.trim().to_string())
        .map_err(|e| {
            warn!("Failed to read {secret_name} from {}: {e}", path.display());
        })
        .ok()
        .filter(|secret| !secret.is_empty())
}
