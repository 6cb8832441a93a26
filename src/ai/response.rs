use log::debug;
use regex::Regex;
use std::sync::OnceLock;

pub const SENTINEL: &str = "I honestly have no idea! Get Bogo'd!";
const RESULT_PREFIX: &str = "The sorted list is ";

/// Leftmost `[` up to the first `]` after it. Nesting is not tracked.
fn bracket_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\[[^\]]*\]").expect("bracket pattern is valid"))
}

/// Recovers a displayable answer from whatever text the model sent back.
///
/// The extractor trusts the model: it never checks that the bracketed text
/// is numeric, has the input's length, or is actually sorted.
pub struct ResponseExtractor;

impl Default for ResponseExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, raw_reply: Option<&str>) -> String {
        let content = match raw_reply.map(str::trim) {
            Some(content) if !content.is_empty() => content,
            _ => {
                debug!("Model returned no content");
                return SENTINEL.to_string();
            }
        };

        match bracket_pattern().find(content) {
            Some(found) => format!("{RESULT_PREFIX}{}", found.as_str()),
            None => {
                debug!("No bracketed list in reply, wrapping the whole text");
                format!("{RESULT_PREFIX}[{content}]")
            }
        }
    }
}
