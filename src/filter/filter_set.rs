use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::filter::datapoint::{Datapoint, DatapointFilter, OverridableDatapointFilter};
use crate::filter::errors::FilterError;

/// One configured metric filter, as written in configuration.
///
/// `metric_name` is shorthand for a single entry of `metric_names`. Each
/// dimension value may be a single pattern or a list of patterns.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct MetricFilter {
    pub metric_name: String,
    pub metric_names: Vec<String>,
    pub dimensions: HashMap<String, Value>,
}

impl MetricFilter {
    /// Fold `metric_name` into the name list and flatten dimension values
    /// into pattern lists.
    ///
    /// # Errors
    ///
    /// Fails with [`FilterError::InvalidDimensionValue`] when a dimension value
    /// is neither a string nor a list of strings.
    pub fn normalize(&self) -> Result<(Vec<String>, HashMap<String, Vec<String>>), FilterError> {
        let mut metric_names = self.metric_names.clone();
        if !self.metric_name.is_empty() {
            metric_names.push(self.metric_name.clone());
        }

        let mut dimensions = HashMap::with_capacity(self.dimensions.len());
        for (key, value) in &self.dimensions {
            dimensions.insert(key.clone(), dimension_patterns(value)?);
        }

        Ok((metric_names, dimensions))
    }
}

fn dimension_patterns(value: &Value) -> Result<Vec<String>, FilterError> {
    match value {
        Value::String(s) => Ok(vec![s.clone()]),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                _ => Err(FilterError::InvalidDimensionValue(value.to_string())),
            })
            .collect(),
        _ => Err(FilterError::InvalidDimensionValue(value.to_string())),
    }
}

/// A list of overridable datapoint filters; a point matches if any of them does.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    filters: Vec<OverridableDatapointFilter>,
}

impl FilterSet {
    /// # Errors
    ///
    /// Fails on the first metric filter that cannot be built.
    pub fn new(metric_filters: &[MetricFilter]) -> Result<Self, FilterError> {
        let mut filters = Vec::with_capacity(metric_filters.len());
        for metric_filter in metric_filters {
            let (metric_names, dimensions) = metric_filter.normalize()?;
            filters.push(OverridableDatapointFilter::new(&metric_names, &dimensions)?);
        }

        debug!("FILTER | Built filter set with {} filters", filters.len());
        Ok(FilterSet { filters })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }
}

impl DatapointFilter for FilterSet {
    fn matches<P: Datapoint>(&self, point: &P) -> bool {
        self.filters.iter().any(|f| f.matches(point))
    }
}
