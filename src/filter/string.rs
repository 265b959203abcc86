use std::collections::HashMap;

use crate::filter::errors::FilterError;
use crate::filter::pattern::{Pattern, Token};

/// Matches a single string field, such as a metric name or one dimension value.
pub trait StringFilter: Sized {
    /// Build the filter from raw tokens.
    ///
    /// # Errors
    ///
    /// Fails on the first token that does not compile.
    fn from_items<S: AsRef<str>>(items: &[S]) -> Result<Self, FilterError>;

    fn matches(&self, s: &str) -> bool;
}

/// Compiled tokens shared by both string filter variants.
///
/// Literals go into a lookup table keyed by value; regexes and globs are kept
/// in configuration order. A literal configured both plain and negated is
/// stored as negated.
#[derive(Debug, Clone, Default)]
pub(crate) struct PatternSet {
    literals: HashMap<String, bool>,
    matchers: Vec<Token>,
    any_literal_negated: bool,
}

impl PatternSet {
    pub(crate) fn compile<S: AsRef<str>>(items: &[S]) -> Result<Self, FilterError> {
        let mut set = PatternSet::default();
        for item in items {
            let token = Token::parse(item.as_ref())?;
            match token.pattern {
                Pattern::Literal(literal) => {
                    let negated = set.literals.entry(literal).or_insert(false);
                    *negated |= token.negated;
                    set.any_literal_negated |= token.negated;
                }
                Pattern::Regex(_) | Pattern::Glob(_) => set.matchers.push(token),
            }
        }
        Ok(set)
    }

    /// Negation flag of the literal equal to `s`, if there is one.
    fn literal(&self, s: &str) -> Option<bool> {
        self.literals.get(s).copied()
    }
}

/// Strict filter used to exclude data.
///
/// An exact literal hit decides alone. Otherwise, if any literal was negated,
/// everything outside the literal set matches. Only then are regexes and globs
/// consulted, where a negated pattern matches whatever it does not match.
#[derive(Debug, Clone)]
pub struct BasicStringFilter {
    patterns: PatternSet,
}

impl StringFilter for BasicStringFilter {
    fn from_items<S: AsRef<str>>(items: &[S]) -> Result<Self, FilterError> {
        Ok(BasicStringFilter {
            patterns: PatternSet::compile(items)?,
        })
    }

    fn matches(&self, s: &str) -> bool {
        if let Some(negated) = self.patterns.literal(s) {
            return !negated;
        }
        // `!X` alone reads as "everything but X".
        if self.patterns.any_literal_negated {
            return true;
        }
        self.patterns
            .matchers
            .iter()
            .any(|token| token.is_match(s) != token.negated)
    }
}

/// Gitignore-like filter used where user rules override broader defaults.
///
/// A string matches when some positive token matches it and no negated token
/// does. A single negated hit vetoes the result regardless of token order.
#[derive(Debug, Clone)]
pub struct OverridableStringFilter {
    patterns: PatternSet,
}

impl StringFilter for OverridableStringFilter {
    fn from_items<S: AsRef<str>>(items: &[S]) -> Result<Self, FilterError> {
        Ok(OverridableStringFilter {
            patterns: PatternSet::compile(items)?,
        })
    }

    fn matches(&self, s: &str) -> bool {
        let mut matched = match self.patterns.literal(s) {
            Some(true) => return false,
            Some(false) => true,
            None => false,
        };

        for token in &self.patterns.matchers {
            if token.is_match(s) {
                if token.negated {
                    return false;
                }
                matched = true;
            }
        }
        matched
    }
}
