mod chat;
mod dispatch;

pub use chat::{ChatSession, SubmitOutcome};
pub use dispatch::FailureKind;
