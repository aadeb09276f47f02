//! Database: the entry point tying configuration, store and resolver together
//!
//! # Transactions
//!
//! - [`Database::view`] runs a closure against a read snapshot
//! - [`Database::update`] runs a closure against a private copy of the tree
//!   and commits only if the closure returns `Ok`; on `Err` every change,
//!   including containers created by a partially failed `put`, is discarded
//!
//! The single-operation helpers (`get`, `put`, ...) each run in their own
//! transaction.

use std::path::Path;

use tracing::{debug, info};

use nestkv_core::Result;
use nestkv_storage::{Bucket, BucketStats, BucketStore, ReadTxn, WriteTxn};

use crate::config::{NestConfig, CONFIG_FILE_NAME};
use crate::resolver;

/// Embedded nested container database
#[derive(Debug)]
pub struct Database {
    store: BucketStore,
    config: NestConfig,
}

impl Database {
    /// Open an empty in-memory database with default configuration
    pub fn open_in_memory() -> Self {
        let config = NestConfig::default();
        info!(target: "nestkv::db", "Opened in-memory database");
        Self {
            store: BucketStore::new(),
            config,
        }
    }

    /// Open an empty in-memory database with `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_config(config: NestConfig) -> Result<Self> {
        let limits = config.limits()?;
        info!(
            target: "nestkv::db",
            max_key_bytes = limits.max_key_bytes,
            max_value_bytes = limits.max_value_bytes,
            max_depth = limits.max_depth,
            "Opened in-memory database"
        );
        Ok(Self {
            store: BucketStore::with_limits(limits),
            config,
        })
    }

    /// Open an empty in-memory database configured from `dir/nestkv.toml`
    ///
    /// A default config file is written first if none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written, read or parsed.
    pub fn open_with_config_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        NestConfig::write_default_if_missing(&path)?;
        let config = NestConfig::from_file(&path)?;
        debug!(target: "nestkv::db", path = %path.display(), "Loaded config");
        Self::with_config(config)
    }

    /// Active configuration
    pub fn config(&self) -> &NestConfig {
        &self.config
    }

    /// Counts for the committed tree
    pub fn stats(&self) -> BucketStats {
        self.store.stats()
    }

    /// Number of commits that changed the tree
    pub fn version(&self) -> u64 {
        self.store.version()
    }

    /// Start a manual read transaction
    pub fn begin_read(&self) -> ReadTxn {
        self.store.begin_read()
    }

    /// Start a manual write transaction
    ///
    /// Blocks while another write transaction is active.
    pub fn begin_write(&self) -> WriteTxn<'_> {
        self.store.begin_write()
    }

    /// Run `f` against a read snapshot
    pub fn view<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Bucket) -> Result<T>,
    {
        let txn = self.store.begin_read();
        f(txn.root())
    }

    /// Run `f` in a write transaction, committing if it returns `Ok`
    ///
    /// # Errors
    ///
    /// Returns the closure's error after rolling the transaction back.
    pub fn update<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Bucket) -> Result<T>,
    {
        let mut txn = self.store.begin_write();
        match f(txn.root_mut()) {
            Ok(value) => {
                txn.commit();
                Ok(value)
            }
            Err(e) => {
                debug!(target: "nestkv::db", error = %e, "Transaction failed, rolling back");
                txn.rollback();
                Err(e)
            }
        }
    }

    /// Value under `key` in the container at `chain`
    pub fn get(&self, chain: &[&[u8]], key: &[u8]) -> Option<Vec<u8>> {
        let txn = self.store.begin_read();
        resolver::get(txn.root(), chain, key).map(<[u8]>::to_vec)
    }

    /// Store `value` under `key` in the container at `chain`; see [`resolver::put`]
    pub fn put(&self, chain: &[&[u8]], key: &[u8], value: &[u8], overwrite: bool) -> Result<bool> {
        self.update(|root| resolver::put(root, chain, key, value, overwrite))
    }

    /// Remove `key` from the container at `chain`; see [`resolver::delete`]
    pub fn delete(&self, chain: &[&[u8]], key: &[u8], ensure: bool) -> Result<()> {
        self.update(|root| resolver::delete(root, chain, key, ensure))
    }

    /// Remove container `name` under `parents`; see [`resolver::delete_container`]
    pub fn delete_container(&self, parents: &[&[u8]], name: &[u8], ensure: bool) -> Result<()> {
        self.update(|root| resolver::delete_container(root, parents, name, ensure))
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::open_in_memory()
    }
}
