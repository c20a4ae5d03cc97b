pub mod message;
pub mod post;
pub mod user;

pub use message::Message;
pub use post::{FALLBACK_POSTS, Post};
pub use user::{Role, Session, User, UserDto};
