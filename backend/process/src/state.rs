use bank::{FileStorage, RecordStore, Storage, vault::XorCipher};
use tracing::info;

use super::{config::Config, error::AppError};

/// Everything one dashboard session owns: configuration, the record store, and the
/// vault cipher. Dropping it ends the session.
pub struct State<S = FileStorage> {
    pub config: Config,
    pub store: RecordStore<S>,
    pub cipher: XorCipher,
}

impl State<FileStorage> {
    pub fn new(config: Config) -> Result<Self, AppError> {
        info!("Opening {}", config.data_path.display());
        let storage = FileStorage::open(&config.data_path)?;

        Self::with_storage(config, storage)
    }
}

impl<S: Storage> State<S> {
    pub fn with_storage(config: Config, storage: S) -> Result<Self, AppError> {
        let cipher = XorCipher::from_key(&config.vault_key)?;
        let store = RecordStore::open(storage)?;

        Ok(Self {
            config,
            store,
            cipher,
        })
    }
}
