//! Classification and compilation of single filter tokens.
//!
//! A token is one configured criterion such as `cpu.utilization`, `process_*`,
//! `/^node_/` or `!pause`. A leading `!` negates it; what remains is a regex
//! when wrapped in slashes, a glob when it carries glob metacharacters, and a
//! literal otherwise.

use globset::{GlobBuilder, GlobMatcher};
use regex::Regex;

use crate::filter::errors::FilterError;

const NEGATION_PREFIX: char = '!';
const REGEX_DELIMITER: char = '/';
const GLOB_METACHARACTERS: &[char] = &['*', '?', '[', ']'];

/// The compiled form of a token, without its polarity.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Exact string comparison
    Literal(String),
    /// Unanchored regular expression search
    Regex(Regex),
    /// Glob where `*` also spans `/` and `.`
    Glob(GlobMatcher),
}

impl Pattern {
    #[must_use]
    pub fn is_match(&self, s: &str) -> bool {
        match self {
            Pattern::Literal(literal) => literal == s,
            Pattern::Regex(re) => re.is_match(s),
            Pattern::Glob(glob) => glob.is_match(s),
        }
    }
}

/// A compiled pattern paired with its negation flag.
#[derive(Debug, Clone)]
pub struct Token {
    pub pattern: Pattern,
    pub negated: bool,
}

impl Token {
    /// Parse and compile a raw token.
    ///
    /// # Errors
    ///
    /// Returns the regex or glob compiler error unchanged when the token body
    /// does not compile.
    pub fn parse(raw: &str) -> Result<Self, FilterError> {
        let (body, negated) = strip_negation(raw);

        let pattern = if is_regex(body) {
            Pattern::Regex(Regex::new(strip_slashes(body))?)
        } else if is_globbed(body) {
            let glob = GlobBuilder::new(body).literal_separator(false).build()?;
            Pattern::Glob(glob.compile_matcher())
        } else {
            Pattern::Literal(body.to_string())
        };

        Ok(Token { pattern, negated })
    }

    /// Whether the pattern itself matches `s`, ignoring polarity.
    #[must_use]
    pub fn is_match(&self, s: &str) -> bool {
        self.pattern.is_match(s)
    }
}

#[must_use]
pub fn strip_negation(raw: &str) -> (&str, bool) {
    match raw.strip_prefix(NEGATION_PREFIX) {
        Some(body) => (body, true),
        None => (raw, false),
    }
}

#[must_use]
pub fn is_regex(s: &str) -> bool {
    s.len() > 2 && s.starts_with(REGEX_DELIMITER) && s.ends_with(REGEX_DELIMITER)
}

#[must_use]
pub fn is_globbed(s: &str) -> bool {
    s.contains(GLOB_METACHARACTERS)
}

fn strip_slashes(s: &str) -> &str {
    &s[1..s.len() - 1]
}
