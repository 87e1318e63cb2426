//! Per-messenger rendering profiles.
//!
//! # Configuration
//! - `threema_format`: emphasis as `*bold*` / `_italic_` (default: false)
//! - `just_strip`: plain text only, no emphasis (default: false)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::adapt::adapt_text;
use crate::error::{FormatError, FormatResult};
use crate::split::{MessageLimit, split_message};

const THREEMA_MAX_BYTES: usize = 3500;
const MESSENGER_MAX_CHARS: usize = 2000;

/// How [`adapt_text`] renders a message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptOptions {
    pub threema_format: bool,
    pub just_strip: bool,
}

impl AdaptOptions {
    pub const UNICODE: Self = Self {
        threema_format: false,
        just_strip: false,
    };
    pub const MARKDOWN: Self = Self {
        threema_format: true,
        just_strip: false,
    };
    pub const STRIP: Self = Self {
        threema_format: false,
        just_strip: true,
    };

    pub fn adapt(&self, text: &str) -> String {
        adapt_text(text, self.threema_format, self.just_strip)
    }
}

/// Messenger a message is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Signal,
    Threema,
    Messenger,
    Console,
}

impl Platform {
    /// Rendering for this platform. `disable_unicode` is a per-user choice for
    /// clients that show the look-alike glyphs badly; Threema always gets
    /// markdown.
    pub fn options(self, disable_unicode: bool) -> AdaptOptions {
        match self {
            Platform::Threema => AdaptOptions::MARKDOWN,
            _ if disable_unicode => AdaptOptions::STRIP,
            _ => AdaptOptions::UNICODE,
        }
    }

    pub fn message_limit(self) -> Option<MessageLimit> {
        match self {
            Platform::Threema => Some(MessageLimit::Bytes(THREEMA_MAX_BYTES)),
            Platform::Messenger => Some(MessageLimit::Chars(MESSENGER_MAX_CHARS)),
            Platform::Signal | Platform::Console => None,
        }
    }

    /// Adapt `text` and split it into sendable messages.
    pub fn render(self, text: &str, disable_unicode: bool) -> Vec<String> {
        let adapted = self.options(disable_unicode).adapt(text);
        match self.message_limit() {
            Some(limit) => split_message(&adapted, limit),
            None if adapted.is_empty() => Vec::new(),
            None => vec![adapted],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Signal => "signal",
            Platform::Threema => "threema",
            Platform::Messenger => "messenger",
            Platform::Console => "console",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = FormatError;

    fn from_str(s: &str) -> FormatResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "signal" => Ok(Platform::Signal),
            "threema" => Ok(Platform::Threema),
            "messenger" | "fbmessenger" => Ok(Platform::Messenger),
            "console" => Ok(Platform::Console),
            _ => Err(FormatError::UnknownPlatform(s.to_string())),
        }
    }
}
