pub mod file;
pub mod keys;
pub mod memory;

pub use file::FileStorage;
pub use keys::StorageKeys;
pub use memory::MemoryStorage;

/// String-keyed store holding JSON-serialized values, the persistence seam
/// both stores share. Reads and writes are synchronous and last-write-wins;
/// there is no transaction or locking beyond what a backend needs for its
/// own map.
pub trait Storage: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`; absent keys are a no-op.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage lock poisoned")]
    LockPoisoned,

    #[error("Storage file corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}
