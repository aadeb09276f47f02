//! nestkv - nested container paths and sortable keys for embedded stores
//!
//! Two building blocks for ordered, nested key-value stores:
//!
//! - **Path resolution**: get, create-on-demand put, and ensure-mode deletes
//!   of values and whole containers addressed by a chain of container names
//! - **Sortable encodings**: natural-order strings and 9-byte UTC timestamps
//!   whose byte order matches their logical order
//!
//! # Quick Start
//!
//! ```
//! use nestkv::{encode_natural, Database};
//!
//! let db = Database::open_in_memory();
//!
//! let key = encode_natural("page10");
//! db.put(&[b"site", b"pages"], &key, b"hello", false)?;
//!
//! assert_eq!(db.get(&[b"site", b"pages"], &key), Some(b"hello".to_vec()));
//! assert_eq!(db.get(&[b"missing"], &key), None);
//! # Ok::<(), nestkv::Error>(())
//! ```
//!
//! # Architecture
//!
//! - `nestkv-core`: errors, the `Container` trait, limits and encodings
//! - `nestkv-storage`: the in-memory copy-on-write bucket store
//! - `nestkv-engine`: the resolver, configuration and the `Database` facade

pub use nestkv_core::encoding;
pub use nestkv_core::{
    decode_time, display_path, encode_natural, encode_time, put_time, Container, EncodingError,
    Error, Limits, Result, StoreError, TIME_BYTES_LEN,
};
pub use nestkv_engine::{resolver, Database, NestConfig, CONFIG_FILE_NAME};
pub use nestkv_storage::{Bucket, BucketStats, BucketStore, Entry, ReadTxn, WriteTxn};
