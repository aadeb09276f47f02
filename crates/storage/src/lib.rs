//! Storage layer for nestkv
//!
//! This crate implements the in-memory container store:
//! - Bucket: one ordered level of the tree, implementing `Container`
//! - BucketStore: committed tree behind an `Arc` with snapshot reads
//! - ReadTxn / WriteTxn: read snapshots and the single copy-on-write writer

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bucket;
pub mod store;

pub use bucket::{Bucket, BucketStats, Entry};
pub use store::{BucketStore, ReadTxn, WriteTxn};
