use serde::{Deserialize, Serialize};
use tracing::debug;

/// Maximum size of a single outgoing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLimit {
    /// UTF-8 encoded length.
    Bytes(usize),
    /// Number of chars.
    Chars(usize),
}

impl MessageLimit {
    pub fn max(self) -> usize {
        match self {
            MessageLimit::Bytes(max) | MessageLimit::Chars(max) => max,
        }
    }

    pub fn measure(self, s: &str) -> usize {
        match self {
            MessageLimit::Bytes(_) => str_bytelen(s),
            MessageLimit::Chars(_) => s.chars().count(),
        }
    }

    fn width(self, c: char) -> usize {
        match self {
            MessageLimit::Bytes(_) => c.len_utf8(),
            MessageLimit::Chars(_) => 1,
        }
    }
}

pub fn str_bytelen(s: &str) -> usize {
    s.len()
}

/// Split `text` into messages that each stay within `limit`.
///
/// Whole lines are packed greedily. A line that is too long on its own is cut
/// at char boundaries; a single char wider than the limit still gets a part of
/// its own. Parts carry no leading or trailing newlines and empty parts are
/// dropped.
pub fn split_message(text: &str, limit: MessageLimit) -> Vec<String> {
    let max = limit.max();
    let mut parts: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    let mut started = false;

    for line in text.split('\n') {
        let line_len = limit.measure(line);
        let needed = if started {
            current_len + 1 + line_len
        } else {
            line_len
        };

        if needed <= max {
            if started {
                current.push('\n');
            }
            current.push_str(line);
            current_len = needed;
            started = true;
            continue;
        }

        if started {
            parts.push(std::mem::take(&mut current));
            current_len = 0;
            started = false;
        }

        if line_len <= max {
            current.push_str(line);
            current_len = line_len;
            started = true;
            continue;
        }

        debug!(line_len, max, "hard-splitting overlong line");
        let mut chunks = hard_split(line, limit);
        if let Some(last) = chunks.pop() {
            parts.extend(chunks);
            current_len = limit.measure(&last);
            current = last;
            started = true;
        }
    }

    if started {
        parts.push(current);
    }

    parts
        .into_iter()
        .map(|part| part.trim_matches('\n').to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

fn hard_split(line: &str, limit: MessageLimit) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut chunk = String::new();
    let mut len = 0;

    for c in line.chars() {
        let width = limit.width(c);
        if len + width > limit.max() && !chunk.is_empty() {
            chunks.push(std::mem::take(&mut chunk));
            len = 0;
        }
        chunk.push(c);
        len += width;
    }

    if !chunk.is_empty() {
        chunks.push(chunk);
    }
    chunks
}
