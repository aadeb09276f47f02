//! Bucket: one level of the in-memory container tree
//!
//! A bucket maps keys to either raw values or nested buckets, ordered by
//! key bytes. Nested buckets are shared through `Arc` and copied lazily with
//! `Arc::make_mut`, so cloning a tree for a write transaction only copies the
//! levels that the transaction actually touches.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use nestkv_core::{Container, Limits, StoreError};

/// What a key inside a bucket holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Raw value bytes
    Value(Vec<u8>),
    /// Nested bucket
    Bucket(Arc<Bucket>),
}

/// One level of the container tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    entries: BTreeMap<Vec<u8>, Entry>,
    /// Distance from the root (the root itself is 0)
    depth: usize,
    limits: Limits,
}

/// Counts gathered by walking a bucket tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BucketStats {
    /// Nested buckets, at any depth, below the walked bucket
    pub buckets: usize,
    /// Values, at any depth, below the walked bucket
    pub values: usize,
    /// Deepest nesting level reached, relative to the walked bucket
    pub depth: usize,
}

impl Bucket {
    /// Create an empty root bucket enforcing `limits`
    pub fn root(limits: Limits) -> Self {
        Self {
            entries: BTreeMap::new(),
            depth: 0,
            limits,
        }
    }

    fn child(&self) -> Self {
        Self {
            entries: BTreeMap::new(),
            depth: self.depth + 1,
            limits: self.limits,
        }
    }

    /// Distance from the root
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of keys (values and buckets) directly inside this bucket
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if this bucket has no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &Entry)> {
        self.entries.iter().map(|(k, v)| (k.as_slice(), v))
    }

    /// Recursively count buckets and values below this bucket
    pub fn stats(&self) -> BucketStats {
        let mut stats = BucketStats::default();
        for entry in self.entries.values() {
            match entry {
                Entry::Value(_) => stats.values += 1,
                Entry::Bucket(bucket) => {
                    let nested = bucket.stats();
                    stats.buckets += 1 + nested.buckets;
                    stats.values += nested.values;
                    stats.depth = stats.depth.max(nested.depth + 1);
                }
            }
        }
        stats
    }

    fn validate_name(&self, name: &[u8]) -> Result<(), StoreError> {
        self.limits.validate_key(name).map_err(|e| match e {
            StoreError::KeyRequired => StoreError::NameRequired,
            other => other,
        })
    }
}

impl Container for Bucket {
    fn container(&self, name: &[u8]) -> Option<&Self> {
        match self.entries.get(name) {
            Some(Entry::Bucket(bucket)) => Some(bucket.as_ref()),
            _ => None,
        }
    }

    fn container_mut(&mut self, name: &[u8]) -> Option<&mut Self> {
        match self.entries.get_mut(name) {
            Some(Entry::Bucket(bucket)) => Some(Arc::make_mut(bucket)),
            _ => None,
        }
    }

    fn create_container_if_absent(&mut self, name: &[u8]) -> Result<&mut Self, StoreError> {
        self.validate_name(name)?;
        match self.entries.get(name) {
            Some(Entry::Value(_)) => return Err(StoreError::IncompatibleValue),
            Some(Entry::Bucket(_)) => {}
            None => {
                self.limits.validate_depth(self.depth + 1)?;
                let child = self.child();
                debug!(
                    target: "nestkv::storage",
                    name = %String::from_utf8_lossy(name),
                    depth = child.depth,
                    "Creating bucket"
                );
                self.entries
                    .insert(name.to_vec(), Entry::Bucket(Arc::new(child)));
            }
        }
        self.container_mut(name)
            .ok_or(StoreError::ContainerNotFound)
    }

    fn get(&self, key: &[u8]) -> Option<&[u8]> {
        match self.entries.get(key) {
            Some(Entry::Value(value)) => Some(value.as_slice()),
            _ => None,
        }
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.limits.validate_key(key)?;
        self.limits.validate_value(value)?;
        match self.entries.get_mut(key) {
            Some(Entry::Bucket(_)) => Err(StoreError::IncompatibleValue),
            Some(Entry::Value(existing)) => {
                existing.clear();
                existing.extend_from_slice(value);
                Ok(())
            }
            None => {
                self.entries.insert(key.to_vec(), Entry::Value(value.to_vec()));
                Ok(())
            }
        }
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), StoreError> {
        match self.entries.get(key) {
            Some(Entry::Bucket(_)) => Err(StoreError::IncompatibleValue),
            Some(Entry::Value(_)) => {
                self.entries.remove(key);
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn delete_container(&mut self, name: &[u8]) -> Result<(), StoreError> {
        match self.entries.get(name) {
            Some(Entry::Value(_)) => Err(StoreError::IncompatibleValue),
            None => Err(StoreError::ContainerNotFound),
            Some(Entry::Bucket(_)) => {
                self.entries.remove(name);
                debug!(
                    target: "nestkv::storage",
                    name = %String::from_utf8_lossy(name),
                    depth = self.depth + 1,
                    "Deleted bucket"
                );
                Ok(())
            }
        }
    }
}
