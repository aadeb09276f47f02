//! Core trait for one level of a nested container store
//!
//! The path resolver only ever talks to a store through [`Container`], so
//! any store that can describe a single level of its tree this way can be
//! used underneath it. The root of a transaction scope is itself a
//! `Container` whose entries are the top-level containers.

use crate::error::StoreError;

/// One level of a nested, ordered key-value namespace.
///
/// Children are the same type as their parent, which lets traversal
/// descend with plain references.
///
/// Implementations must:
/// - keep keys holding values and keys holding containers disjoint
/// - report a missing container in [`delete_container`](Container::delete_container)
///   as [`StoreError::ContainerNotFound`]
pub trait Container {
    /// Nested container named `name`, if present
    fn container(&self, name: &[u8]) -> Option<&Self>;

    /// Nested container named `name` for mutation, if present
    fn container_mut(&mut self, name: &[u8]) -> Option<&mut Self>;

    /// Nested container named `name`, creating it when absent
    ///
    /// # Errors
    ///
    /// Returns an error if the name is invalid, the key holds a value, or
    /// the store refuses the creation.
    fn create_container_if_absent(&mut self, name: &[u8]) -> Result<&mut Self, StoreError>;

    /// Value stored under `key`, if present
    ///
    /// Keys that hold a container read as absent.
    fn get(&self, key: &[u8]) -> Option<&[u8]>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the key or value is invalid or the key holds a container.
    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;

    /// Remove the value under `key`; removing an absent key succeeds
    ///
    /// # Errors
    ///
    /// Returns an error if the key holds a container.
    fn delete(&mut self, key: &[u8]) -> Result<(), StoreError>;

    /// Remove the nested container `name` together with its subtree
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ContainerNotFound`] if there is no such container.
    fn delete_container(&mut self, name: &[u8]) -> Result<(), StoreError>;
}
