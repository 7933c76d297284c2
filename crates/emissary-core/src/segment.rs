//! Reply segmentation into chat bubbles
//!
//! Converts one long model reply into an ordered sequence of bubbles, each
//! bounded to roughly a fixed word count, without losing any words. The pass
//! is deterministic: paragraphs first, then sentence-like fragments inside
//! each paragraph, greedily packed against the per-bubble word budget.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n{2,}").expect("valid regex");
}

/// Limits applied while packing bubbles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BubbleLimits {
    /// Soft word budget per bubble
    pub max_words_per_bubble: usize,
    /// Hard cap on produced bubbles
    pub max_bubbles: usize,
}

impl Default for BubbleLimits {
    fn default() -> Self {
        Self {
            max_words_per_bubble: 50,
            max_bubbles: 6,
        }
    }
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Split a paragraph into sentence-like fragments on `.`, `?`, `!` followed
/// by whitespace. The terminator stays with the preceding fragment; the
/// separating whitespace run is dropped.
fn split_fragments(paragraph: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0usize;
    let mut iter = paragraph.char_indices().peekable();

    while let Some((idx, ch)) = iter.next() {
        if !matches!(ch, '.' | '?' | '!') {
            continue;
        }
        if let Some(&(_, next)) = iter.peek() {
            if next.is_whitespace() {
                fragments.push(&paragraph[start..idx + ch.len_utf8()]);
                start = paragraph.len();
                while let Some(&(ws_idx, ws)) = iter.peek() {
                    if ws.is_whitespace() {
                        iter.next();
                    } else {
                        start = ws_idx;
                        break;
                    }
                }
            }
        }
    }

    if start < paragraph.len() {
        fragments.push(&paragraph[start..]);
    }
    fragments
}

/// Partition `reply` into at most `limits.max_bubbles` bubbles.
///
/// Concatenating the bubbles' words in order reproduces every word of the
/// reply at least once. When the bubble cap is reached, any unplaced words
/// are appended verbatim to the final bubble rather than dropped.
pub fn split_into_bubbles(reply: &str, limits: &BubbleLimits) -> Vec<String> {
    let cleaned = reply.trim();
    let mut parts: Vec<String> = Vec::new();

    let paragraphs: Vec<&str> = PARAGRAPH_BREAK
        .split(cleaned)
        .filter(|p| !p.trim().is_empty())
        .collect();

    if paragraphs.is_empty() {
        parts.push(cleaned.to_string());
    } else {
        let flush_cap = limits.max_bubbles.saturating_sub(1);
        let mut current = String::new();
        let mut current_words = 0usize;

        'paragraphs: for paragraph in &paragraphs {
            for fragment in split_fragments(paragraph) {
                let fragment = fragment.trim();
                if fragment.is_empty() {
                    continue;
                }
                let fragment_words = word_count(fragment);

                if current_words + fragment_words > limits.max_words_per_bubble
                    && !current.trim().is_empty()
                {
                    parts.push(current.trim().to_string());
                    current = fragment.to_string();
                    current_words = fragment_words;
                } else {
                    if !current.is_empty() {
                        current.push(' ');
                    }
                    current.push_str(fragment);
                    current_words += fragment_words;
                }

                // Leave the rest for the final catch-all bubble.
                if parts.len() >= flush_cap {
                    break 'paragraphs;
                }
            }

            // Keep paragraph separation visible inside a bubble that still
            // has plenty of room.
            if current_words < limits.max_words_per_bubble * 4 / 5 {
                current.push_str("\n\n");
            }
        }

        if !current.trim().is_empty() {
            parts.push(current.trim().to_string());
        }

        // Safety net: reattach any words the early exit left behind.
        if parts.len() >= limits.max_bubbles {
            let emitted: usize = parts.iter().map(|p| word_count(p)).sum();
            let all_words: Vec<&str> = cleaned.split_whitespace().collect();
            if emitted < all_words.len() {
                let remaining = all_words[emitted..].join(" ");
                if !remaining.trim().is_empty() {
                    if let Some(last) = parts.last_mut() {
                        last.push(' ');
                        last.push_str(remaining.trim());
                    }
                }
            }
        }
    }

    if parts.is_empty() {
        parts.push(cleaned.to_string());
    }
    parts
}
