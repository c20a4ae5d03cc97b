use std::sync::Arc;

use tracing::debug;

use crate::models::Message;
use crate::storage::{Storage, StorageKeys};

pub struct MessageService {
    storage: Arc<dyn Storage>,
}

impl MessageService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub fn save_message(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<Message, MessageError> {
        let mut messages = self.load_messages()?;
        let entry = Message::new(name, email, message);

        debug!("Storing contact message {} from {}", entry.id, entry.email);

        messages.push(entry.clone());
        self.save_messages(&messages)?;

        Ok(entry)
    }

    pub fn mark_as_read(&self, id: i64) -> Result<(), MessageError> {
        let mut messages = self.load_messages()?;

        if let Some(message) = messages.iter_mut().find(|m| m.id == id) {
            message.read = true;
            self.save_messages(&messages)?;
        }

        Ok(())
    }

    pub fn delete_message(&self, id: i64) -> Result<(), MessageError> {
        let mut messages = self.load_messages()?;
        let before = messages.len();

        messages.retain(|m| m.id != id);
        if messages.len() != before {
            self.save_messages(&messages)?;
        }

        Ok(())
    }

    /// All messages in insertion order.
    pub fn get_messages(&self) -> Result<Vec<Message>, MessageError> {
        self.load_messages()
    }

    pub fn unread_count(&self) -> Result<usize, MessageError> {
        let messages = self.load_messages()?;
        Ok(messages.iter().filter(|m| !m.read).count())
    }

    fn load_messages(&self) -> Result<Vec<Message>, MessageError> {
        match self.storage.get_item(StorageKeys::MESSAGES)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn save_messages(&self, messages: &[Message]) -> Result<(), MessageError> {
        let serialized = serde_json::to_string(messages)?;
        self.storage.set_item(StorageKeys::MESSAGES, &serialized)?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error("Storage error: {0}")]
    Storage(#[from] crate::storage::StorageError),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
