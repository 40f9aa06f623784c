use super::rules::ResponseGenerator;
use serde::{Deserialize, Serialize};

pub const GREETING: &str =
    "Hi! I can help you learn more about my skills, projects, and blog posts. What would you like to know?";

pub const SUGGESTED_PROMPTS: [&str; 5] = [
    "What are your skills?",
    "Tell me about your projects.",
    "What is your blog about?",
    "Can you share your experience?",
    "Who are you?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Transcript of one visitor's conversation with the assistant.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING)],
        }
    }

    /// Records the question and its answer. Blank input is ignored.
    pub fn submit(&mut self, generator: &ResponseGenerator, input: &str) -> Option<&ChatMessage> {
        if input.trim().is_empty() {
            return None;
        }

        let response = generator.generate_response(input);
        self.messages.push(ChatMessage::user(input));
        self.messages.push(ChatMessage::assistant(response));
        self.messages.last()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
