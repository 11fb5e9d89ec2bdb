mod store;
mod types;

pub use store::Conversation;
pub use types::{Message, Role};
