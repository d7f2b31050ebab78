use crate::error::KVError;

/// KVStore is the persistence capability required of the host environment.
///
/// The inventory module serializes each collection as a JSON array and
/// stores it whole under a fixed key (`gr_materials`, `gr_productions`).
/// Values are always overwritten in full, never merged.
pub trait KVStore: Send + Sync {
    /// Get the value for a key. Returns None if the key does not exist.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KVError>;

    /// Set a key-value pair, replacing any previous value.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), KVError>;

    /// Delete a key. Deleting an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), KVError>;
}
