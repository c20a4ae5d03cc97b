pub mod auth_service;
pub mod message_service;

pub use auth_service::{AuthError, AuthService};
pub use message_service::{MessageError, MessageService};
