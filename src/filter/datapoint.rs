use std::collections::HashMap;

use crate::filter::errors::FilterError;
use crate::filter::string::{BasicStringFilter, OverridableStringFilter, StringFilter};
use crate::filter::string_map::{BasicStringMapFilter, OverridableStringMapFilter};

/// A telemetry data point as seen by the filters.
///
/// Implement this for whatever protocol type carries the point; filters only
/// need the metric name and the ordered dimension pairs.
pub trait Datapoint {
    fn metric_name(&self) -> &str;

    fn dimensions(&self) -> impl Iterator<Item = (&str, &str)>;
}

/// Something that decides whether a data point is matched.
pub trait DatapointFilter {
    fn matches<P: Datapoint>(&self, point: &P) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimension {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataPoint {
    pub metric: String,
    pub dimensions: Vec<Dimension>,
}

impl DataPoint {
    #[must_use]
    pub fn new(metric: impl Into<String>) -> Self {
        DataPoint {
            metric: metric.into(),
            dimensions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_dimension(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.dimensions.push(Dimension {
            key: key.into(),
            value: value.into(),
        });
        self
    }
}

impl Datapoint for DataPoint {
    fn metric_name(&self) -> &str {
        &self.metric
    }

    fn dimensions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.dimensions
            .iter()
            .map(|dim| (dim.key.as_str(), dim.value.as_str()))
    }
}

/// Flatten the dimension pairs of a point. Later duplicates overwrite earlier ones.
#[must_use]
pub fn dimensions_map<P: Datapoint>(point: &P) -> HashMap<&str, &str> {
    point.dimensions().collect()
}

/// Strict datapoint filter with dimension rules scoped per metric name.
///
/// When dimension rules are configured, a point whose metric has no rule of
/// its own is never matched.
#[derive(Debug, Clone)]
pub struct StrictDatapointFilter {
    metric_filter: Option<BasicStringFilter>,
    dim_filters: Option<HashMap<String, BasicStringMapFilter>>,
}

impl StrictDatapointFilter {
    /// # Errors
    ///
    /// Fails with [`FilterError::NoCriteria`] when both inputs are empty, or
    /// with the first pattern or dimension error found.
    pub fn new<S: AsRef<str>>(
        metric_names: &[S],
        metric_dimensions: &HashMap<String, HashMap<String, Vec<S>>>,
    ) -> Result<Self, FilterError> {
        let dim_filters = if metric_dimensions.is_empty() {
            None
        } else {
            let mut filters = HashMap::with_capacity(metric_dimensions.len());
            for (metric, dimensions) in metric_dimensions {
                filters.insert(metric.clone(), BasicStringMapFilter::new(dimensions)?);
            }
            Some(filters)
        };

        let metric_filter = if metric_names.is_empty() {
            None
        } else {
            Some(BasicStringFilter::from_items(metric_names)?)
        };

        if metric_filter.is_none() && dim_filters.is_none() {
            return Err(FilterError::NoCriteria);
        }

        Ok(StrictDatapointFilter {
            metric_filter,
            dim_filters,
        })
    }
}

impl DatapointFilter for StrictDatapointFilter {
    fn matches<P: Datapoint>(&self, point: &P) -> bool {
        let metric = point.metric_name();
        self.metric_filter.as_ref().is_none_or(|f| f.matches(metric))
            && self.dim_filters.as_ref().is_none_or(|filters| {
                filters
                    .get(metric)
                    .is_some_and(|f| f.matches(&dimensions_map(point)))
            })
    }
}

/// Datapoint filter with gitignore-like patterns and one dimension rule set
/// shared by every metric.
#[derive(Debug, Clone)]
pub struct OverridableDatapointFilter {
    metric_filter: Option<OverridableStringFilter>,
    dim_filter: Option<OverridableStringMapFilter>,
}

impl OverridableDatapointFilter {
    /// # Errors
    ///
    /// Fails with [`FilterError::NoCriteria`] when both inputs are empty, or
    /// with the first pattern or dimension error found.
    pub fn new<S: AsRef<str>>(
        metric_names: &[S],
        dimensions: &HashMap<String, Vec<S>>,
    ) -> Result<Self, FilterError> {
        let dim_filter = if dimensions.is_empty() {
            None
        } else {
            Some(OverridableStringMapFilter::new(dimensions)?)
        };

        let metric_filter = if metric_names.is_empty() {
            None
        } else {
            Some(OverridableStringFilter::from_items(metric_names)?)
        };

        if metric_filter.is_none() && dim_filter.is_none() {
            return Err(FilterError::NoCriteria);
        }

        Ok(OverridableDatapointFilter {
            metric_filter,
            dim_filter,
        })
    }
}

impl DatapointFilter for OverridableDatapointFilter {
    fn matches<P: Datapoint>(&self, point: &P) -> bool {
        self.metric_filter
            .as_ref()
            .is_none_or(|f| f.matches(point.metric_name()))
            && self
                .dim_filter
                .as_ref()
                .is_none_or(|f| f.matches(&dimensions_map(point)))
    }
}
