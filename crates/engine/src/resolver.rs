//! Path resolution over nested containers
//!
//! Every operation takes the root of a transaction scope plus an explicit
//! container chain (outer to inner names) and, where relevant, a key and a
//! value. The chain must be non-empty for operations that address a key:
//! keys never live directly in the root.
//!
//! | Operation            | Chain                   | Missing container          |
//! |----------------------|-------------------------|----------------------------|
//! | [`get`]              | non-empty, else absent  | absent                     |
//! | [`put`]              | non-empty, else error   | created                    |
//! | [`delete`]           | non-empty, else error   | `NotFound` or no-op        |
//! | [`delete_container`] | may be empty            | `NotFound` or no-op        |
//!
//! The `*_path` variants accept a single segment list whose trailing
//! elements play the key (and value) roles, and check its length before
//! delegating.
//!
//! Nothing here undoes partial work: containers created by a `put` that
//! later fails stay in the transaction. Roll the transaction back to
//! discard them.

use nestkv_core::{display_path, display_path_with, Container, Error, Result, StoreError};

/// Resolve `chain` to a container
///
/// Returns `None` for an empty chain or when any container is missing.
pub fn container<'c, C: Container>(root: &'c C, chain: &[&[u8]]) -> Option<&'c C> {
    if chain.is_empty() {
        return None;
    }
    chain
        .iter()
        .try_fold(root, |current, name| current.container(name))
}

/// Create every missing container along `chain`, returning the innermost
///
/// # Errors
///
/// Returns `Malformed` for an empty chain, or a `Store` error carrying the
/// path up to the container that could not be created.
pub fn create_container<'c, C: Container>(root: &'c mut C, chain: &[&[u8]]) -> Result<&'c mut C> {
    if chain.is_empty() {
        return Err(Error::insufficient_elements(0, 1));
    }
    let mut current = root;
    for (i, name) in chain.iter().enumerate() {
        current = current
            .create_container_if_absent(name)
            .map_err(|e| Error::store(display_path(&chain[..=i]), e))?;
    }
    Ok(current)
}

/// Value stored under `key` in the container at `chain`
///
/// Missing containers and missing keys both read as `None`.
pub fn get<'c, C: Container>(root: &'c C, chain: &[&[u8]], key: &[u8]) -> Option<&'c [u8]> {
    container(root, chain)?.get(key)
}

/// Store `value` under `key` in the container at `chain`, creating containers as needed
///
/// Returns `true` if the key did not exist before.
///
/// # Errors
///
/// - `Malformed` if `chain` is empty
/// - `Exists` if the key is present and `overwrite` is false; nothing is written
/// - `Store` if a container cannot be created or the value cannot be stored
pub fn put<C: Container>(
    root: &mut C,
    chain: &[&[u8]],
    key: &[u8],
    value: &[u8],
    overwrite: bool,
) -> Result<bool> {
    if chain.is_empty() {
        return Err(Error::insufficient_elements(2, 3));
    }
    let container = create_container(root, chain)?;
    let created = container.get(key).is_none();
    if !created && !overwrite {
        return Err(Error::exists(display_path_with(chain, key)));
    }
    container
        .put(key, value)
        .map_err(|e| Error::store(display_path(chain), e))?;
    Ok(created)
}

/// Remove `key` from the container at `chain`
///
/// With `ensure` unset, a missing container or key is not an error.
/// Containers emptied by the delete are kept.
///
/// # Errors
///
/// - `Malformed` if `chain` is empty
/// - `NotFound` with `ensure` set, for the first missing container or the missing key
/// - `Store` if the store refuses the delete
pub fn delete<C: Container>(root: &mut C, chain: &[&[u8]], key: &[u8], ensure: bool) -> Result<()> {
    if chain.is_empty() {
        return Err(Error::insufficient_elements(1, 2));
    }
    let container = match descend_mut(root, chain, ensure)? {
        Some(container) => container,
        None => return Ok(()),
    };
    if ensure && container.get(key).is_none() {
        return Err(Error::not_found(display_path_with(chain, key)));
    }
    container
        .delete(key)
        .map_err(|e| Error::store(display_path(chain), e))
}

/// Remove the container `name` (and everything below it) from the container at `parents`
///
/// An empty `parents` addresses a container directly under the root.
///
/// # Errors
///
/// - `NotFound` with `ensure` set, for the first missing container along the way
/// - `Store` if the store refuses the delete
pub fn delete_container<C: Container>(
    root: &mut C,
    parents: &[&[u8]],
    name: &[u8],
    ensure: bool,
) -> Result<()> {
    let parent = match descend_mut(root, parents, ensure)? {
        Some(parent) => parent,
        None => return Ok(()),
    };
    match parent.delete_container(name) {
        Ok(()) => Ok(()),
        Err(StoreError::ContainerNotFound) if ensure => {
            Err(Error::not_found(display_path_with(parents, name)))
        }
        Err(StoreError::ContainerNotFound) => Ok(()),
        Err(e) => Err(Error::store(display_path_with(parents, name), e)),
    }
}

/// Segment-list form of [`get`]: all but the last element name containers
///
/// Fewer than two elements read as `None`.
pub fn get_path<'c, C: Container>(root: &'c C, elements: &[&[u8]]) -> Option<&'c [u8]> {
    match elements.split_last() {
        Some((key, chain)) => get(root, chain, key),
        None => None,
    }
}

/// Segment-list form of [`put`]: the last two elements are the key and the value
///
/// # Errors
///
/// `Malformed` for fewer than three elements; otherwise as [`put`].
pub fn put_path<C: Container>(root: &mut C, overwrite: bool, elements: &[&[u8]]) -> Result<bool> {
    let len = elements.len();
    if len < 3 {
        return Err(Error::insufficient_elements(len, 3));
    }
    put(
        root,
        &elements[..len - 2],
        elements[len - 2],
        elements[len - 1],
        overwrite,
    )
}

/// Segment-list form of [`delete`]: the last element is the key
///
/// # Errors
///
/// `Malformed` for fewer than two elements; otherwise as [`delete`].
pub fn delete_path<C: Container>(root: &mut C, ensure: bool, elements: &[&[u8]]) -> Result<()> {
    let len = elements.len();
    if len < 2 {
        return Err(Error::insufficient_elements(len, 2));
    }
    delete(root, &elements[..len - 1], elements[len - 1], ensure)
}

/// Segment-list form of [`delete_container`]: the last element is the container to remove
///
/// # Errors
///
/// `Malformed` for an empty list; otherwise as [`delete_container`].
pub fn delete_container_path<C: Container>(
    root: &mut C,
    ensure: bool,
    elements: &[&[u8]],
) -> Result<()> {
    match elements.split_last() {
        Some((name, parents)) => delete_container(root, parents, name, ensure),
        None => Err(Error::insufficient_elements(0, 1)),
    }
}

/// Walk `chain` for mutation
///
/// A missing container is `NotFound` with `ensure` set and `Ok(None)` otherwise.
/// The chain is checked read-only first so a miss leaves copy-on-write
/// stores untouched.
fn descend_mut<'c, C: Container>(
    root: &'c mut C,
    chain: &[&[u8]],
    ensure: bool,
) -> Result<Option<&'c mut C>> {
    if let Some(missing) = first_missing(&*root, chain) {
        if ensure {
            return Err(Error::not_found(display_path(&chain[..=missing])));
        }
        return Ok(None);
    }
    let mut current = root;
    for (i, name) in chain.iter().enumerate() {
        current = current
            .container_mut(name)
            .ok_or_else(|| Error::not_found(display_path(&chain[..=i])))?;
    }
    Ok(Some(current))
}

/// Index of the first container in `chain` that does not exist
fn first_missing<C: Container>(root: &C, chain: &[&[u8]]) -> Option<usize> {
    let mut current = root;
    for (i, name) in chain.iter().enumerate() {
        match current.container(name) {
            Some(next) => current = next,
            None => return Some(i),
        }
    }
    None
}
