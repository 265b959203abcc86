use std::collections::{HashMap, HashSet};

use crate::filter::errors::FilterError;
use crate::filter::string::{BasicStringFilter, OverridableStringFilter, StringFilter};

const OPTIONAL_KEY_SUFFIX: char = '?';

pub type BasicStringMapFilter = StringMapFilter<BasicStringFilter>;
pub type OverridableStringMapFilter = StringMapFilter<OverridableStringFilter>;

/// Matches a whole dimension set: every configured key must satisfy its filter.
///
/// A key configured as `key?` may be missing from the input instead.
#[derive(Debug, Clone)]
pub struct StringMapFilter<F> {
    filters: HashMap<String, F>,
    ok_missing: HashSet<String>,
}

impl<F: StringFilter> StringMapFilter<F> {
    /// Build a filter from `key -> patterns` pairs.
    ///
    /// `key` and `key?` name the same dimension: their patterns are merged
    /// into one filter and the key stays absence-tolerant.
    ///
    /// # Errors
    ///
    /// Fails with [`FilterError::EmptyMapValue`] when a key has no patterns,
    /// or with the compiler error of the first bad pattern.
    pub fn new<S: AsRef<str>>(m: &HashMap<String, Vec<S>>) -> Result<Self, FilterError> {
        let mut grouped: HashMap<&str, Vec<&str>> = HashMap::with_capacity(m.len());
        let mut ok_missing = HashSet::new();

        for (key, items) in m {
            if items.is_empty() {
                return Err(FilterError::EmptyMapValue);
            }

            let real_key = key.strip_suffix(OPTIONAL_KEY_SUFFIX).unwrap_or(key);
            if real_key.len() != key.len() {
                ok_missing.insert(real_key.to_string());
            }
            grouped
                .entry(real_key)
                .or_default()
                .extend(items.iter().map(AsRef::as_ref));
        }

        let filters = grouped
            .into_iter()
            .map(|(key, items)| F::from_items(&items).map(|filter| (key.to_string(), filter)))
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(StringMapFilter {
            filters,
            ok_missing,
        })
    }

    #[must_use]
    pub fn matches(&self, m: &HashMap<&str, &str>) -> bool {
        // Points without dimensions only match when some key may be absent.
        if m.is_empty() && self.ok_missing.is_empty() {
            return false;
        }

        self.filters
            .iter()
            .all(|(key, filter)| match m.get(key.as_str()) {
                Some(value) => filter.matches(value),
                None => self.ok_missing.contains(key),
            })
    }
}
