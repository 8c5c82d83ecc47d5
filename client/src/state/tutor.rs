//! AI tutor conversation state.
//!
//! DESIGN
//! ======
//! The visible transcript is the source of truth for the model's context:
//! every send replays the whole transcript behind a language-pinning system
//! message. Sending is split into [`TutorChat::begin_send`] (synchronous,
//! appends the user turn) and [`TutorChat::receive`] / [`TutorChat::fail`]
//! (after the request settles) so the component can render the user's turn
//! before the network answers.

#[cfg(test)]
#[path = "tutor_test.rs"]
mod tutor_test;

use crate::i18n::{self, Language};
use crate::net::types::ChatMessage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    Bot,
    User,
}

impl Sender {
    /// Chat-completions role for this sender.
    #[must_use]
    pub fn wire_role(self) -> &'static str {
        match self {
            Self::Bot => "assistant",
            Self::User => "user",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TutorMessage {
    pub sender: Sender,
    pub content: String,
    pub sent_at_ms: i64,
}

impl TutorMessage {
    #[must_use]
    pub fn bot(content: impl Into<String>, sent_at_ms: i64) -> Self {
        Self { sender: Sender::Bot, content: content.into(), sent_at_ms }
    }

    #[must_use]
    pub fn user(content: impl Into<String>, sent_at_ms: i64) -> Self {
        Self { sender: Sender::User, content: content.into(), sent_at_ms }
    }
}

#[must_use]
pub fn system_prompt(lang: Language) -> String {
    format!(
        "You are a helpful AI tutor. Your responses must be in the language corresponding to the user's selected language code: {}.",
        lang.code()
    )
}

/// System message, then the transcript, then the new user turn.
#[must_use]
pub fn build_history(transcript: &[TutorMessage], input: &str, lang: Language) -> Vec<ChatMessage> {
    let mut history = Vec::with_capacity(transcript.len() + 2);
    history.push(ChatMessage::new("system", system_prompt(lang)));
    history.extend(transcript.iter().map(|m| ChatMessage::new(m.sender.wire_role(), m.content.clone())));
    history.push(ChatMessage::new("user", input));
    history
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TutorChat {
    messages: Vec<TutorMessage>,
    pending: bool,
}

impl TutorChat {
    /// A conversation opened by the localized greeting.
    #[must_use]
    pub fn new(lang: Language, now_ms: i64) -> Self {
        Self {
            messages: vec![TutorMessage::bot(i18n::t(lang, "tutor.initialMessage"), now_ms)],
            pending: false,
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[TutorMessage] {
        &self.messages
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Append the user's turn and return the request history. Blank input
    /// returns `None` and changes nothing.
    pub fn begin_send(&mut self, input: &str, lang: Language, now_ms: i64) -> Option<Vec<ChatMessage>> {
        if input.trim().is_empty() {
            return None;
        }
        let history = build_history(&self.messages, input, lang);
        self.messages.push(TutorMessage::user(input, now_ms));
        self.pending = true;
        Some(history)
    }

    pub fn receive(&mut self, content: String, now_ms: i64) {
        self.pending = false;
        self.messages.push(TutorMessage::bot(content, now_ms));
    }

    /// Record a failed request as one localized bot message.
    pub fn fail(&mut self, lang: Language, now_ms: i64) {
        self.pending = false;
        self.messages.push(TutorMessage::bot(i18n::t(lang, "tutor.errorResponse"), now_ms));
    }
}

/// Localized suggested questions, in display order.
#[must_use]
pub fn suggested_questions(lang: Language) -> Vec<&'static str> {
    i18n::SUGGESTED_QUESTION_KEYS.into_iter().map(|key| i18n::t(lang, key)).collect()
}

/// Localized quick-action prompts, in display order.
#[must_use]
pub fn quick_actions(lang: Language) -> Vec<&'static str> {
    i18n::QUICK_ACTION_KEYS.into_iter().map(|key| i18n::t(lang, key)).collect()
}
