pub mod rules;
pub mod session;

pub use rules::{FALLBACK_RESPONSE, ResponseGenerator, Rule, Topic, classify, generate_response};
pub use session::{ChatMessage, ChatSession, GREETING, Role, SUGGESTED_PROMPTS};
