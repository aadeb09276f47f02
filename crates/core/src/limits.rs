//! Size limits for keys, values and container nesting
//!
//! These limits are enforced by the container store on every write.
//! Violations surface as [`StoreError`] variants.

use crate::error::StoreError;

/// Default maximum key (and container name) length in bytes
pub const DEFAULT_MAX_KEY_BYTES: usize = 32 * 1024;

/// Default maximum value length in bytes
pub const DEFAULT_MAX_VALUE_BYTES: usize = (1 << 31) - 2;

/// Default maximum container nesting depth
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Size limits for keys, values and nesting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum key length in bytes
    pub max_key_bytes: usize,

    /// Maximum value length in bytes
    pub max_value_bytes: usize,

    /// Maximum number of nested containers below the root
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_key_bytes: DEFAULT_MAX_KEY_BYTES,
            max_value_bytes: DEFAULT_MAX_VALUE_BYTES,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    pub fn with_small_limits() -> Self {
        Limits {
            max_key_bytes: 16,
            max_value_bytes: 64,
            max_depth: 3,
        }
    }

    /// Validate a key or container name
    pub fn validate_key(&self, key: &[u8]) -> Result<(), StoreError> {
        if key.is_empty() {
            return Err(StoreError::KeyRequired);
        }
        if key.len() > self.max_key_bytes {
            return Err(StoreError::KeyTooLarge {
                actual: key.len(),
                max: self.max_key_bytes,
            });
        }
        Ok(())
    }

    /// Validate a value
    pub fn validate_value(&self, value: &[u8]) -> Result<(), StoreError> {
        if value.len() > self.max_value_bytes {
            return Err(StoreError::ValueTooLarge {
                actual: value.len(),
                max: self.max_value_bytes,
            });
        }
        Ok(())
    }

    /// Validate that a container may be created at `depth` (root children are depth 1)
    pub fn validate_depth(&self, depth: usize) -> Result<(), StoreError> {
        if depth > self.max_depth {
            return Err(StoreError::DepthExceeded {
                max: self.max_depth,
            });
        }
        Ok(())
    }
}
