//! Input gate in front of the chatbot core.
//!
//! Messages are sanitised and screened for crisis phrases before any matching happens;
//! the core only ever sees messages that passed.

use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) const MAX_MESSAGE_CHARS: usize = 500;

pub(crate) const EMPTY_MESSAGE_RESPONSE: &str = "Please enter a message!";
pub(crate) const TOO_LONG_RESPONSE: &str = "Message too long! Please keep it under 500 characters.";

const CRISIS_KEYWORDS: [&str; 8] = [
    "suicide",
    "kill myself",
    "end my life",
    "self harm",
    "self-harm",
    "dont want to live",
    "don't want to live",
    "want to die",
];

pub(crate) const CRISIS_RESPONSE: &str = "I'm concerned about what you've shared. Please know that you're not alone.

If you're in crisis, please reach out for support:

- Lifeline: 13 11 14 (24/7)
- Kids Helpline: 1800 55 1800
- Beyond Blue: 1300 22 4636

I'm just a chatbot and can't provide the support you need, but these services have trained counselors ready to help right now.";

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid tag regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Gate {
    /// Clean message for the core
    Pass(String),
    /// Fixed reply; the core is not consulted
    Reply(&'static str),
}

/// Trim, strip HTML tags and enforce the length limit.
pub(crate) fn sanitise_input(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EMPTY_MESSAGE_RESPONSE);
    }

    let cleaned = HTML_TAG.replace_all(trimmed, "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Err(EMPTY_MESSAGE_RESPONSE);
    }
    if cleaned.chars().count() > MAX_MESSAGE_CHARS {
        return Err(TOO_LONG_RESPONSE);
    }
    Ok(cleaned.to_string())
}

/// Case-insensitive substring match against the crisis phrase list.
pub(crate) fn check_for_crisis(message: &str) -> bool {
    let lower = message.to_lowercase();
    CRISIS_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

pub(crate) fn gate(raw: &str) -> Gate {
    let message = match sanitise_input(raw) {
        Ok(message) => message,
        Err(reply) => return Gate::Reply(reply),
    };
    // Both forms: markup can split a phrase in the raw text.
    if check_for_crisis(raw) || check_for_crisis(&message) {
        log::warn!("Crisis phrase detected, returning support message");
        return Gate::Reply(CRISIS_RESPONSE);
    }
    Gate::Pass(message)
}
