//! Keypair loading, using the Solana CLI's file format and configured defaults.

use std::path::{
    Path,
    PathBuf,
};

use solana_cli_config::{
    Config,
    CONFIG_FILE,
};
use solana_sdk::signature::Keypair;

use crate::error::ClientError;

/// The keypair configured with `solana config set --keypair`, or the CLI's default location.
pub fn default_payer_path() -> PathBuf {
    let cli_config = match &*CONFIG_FILE {
        Some(config_file) => Config::load(config_file).unwrap_or_default(),
        None => Config::default(),
    };
    PathBuf::from(cli_config.keypair_path)
}

pub fn read_keypair_file(path: impl AsRef<Path>) -> Result<Keypair, ClientError> {
    let path = path.as_ref();
    solana_sdk::signature::read_keypair_file(path).map_err(|e| ClientError::FileRead {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use solana_sdk::signer::Signer;

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("crowdfund-{}-{name}.json", std::process::id()))
    }

    #[test]
    fn reads_cli_format() {
        let keypair = Keypair::new();
        let path = temp_path("keypair-valid");
        let json = serde_json::to_string(&keypair.to_bytes().to_vec()).unwrap();
        std::fs::write(&path, json).unwrap();

        let parsed = read_keypair_file(&path).unwrap();
        assert_eq!(parsed.pubkey(), keypair.pubkey());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn malformed_file_is_a_file_read_error() {
        for (name, contents) in [
            ("keypair-short", "[1, 2, 3]"),
            ("keypair-text", "not a keypair"),
            ("keypair-overflow", "[256]"),
        ] {
            let path = temp_path(name);
            std::fs::write(&path, contents).unwrap();
            match read_keypair_file(&path) {
                Err(ClientError::FileRead { path: reported, .. }) => assert_eq!(reported, path),
                other => panic!("expected FileRead for {contents:?}, got {other:?}"),
            }
            std::fs::remove_file(path).ok();
        }
    }

    #[test]
    fn missing_file_is_a_file_read_error() {
        let path = std::env::temp_dir().join("crowdfund-missing-keypair-does-not-exist.json");
        match read_keypair_file(&path) {
            Err(ClientError::FileRead { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected FileRead, got {other:?}"),
        }
    }
}
