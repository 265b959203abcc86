use tracing::debug;

use crate::config::Config;
use crate::filter::datapoint::{Datapoint, DatapointFilter};
use crate::filter::errors::FilterError;
use crate::filter::filter_set::{FilterSet, MetricFilter};

/// Decides which data points are dropped before export.
///
/// A point is dropped when it matches the exclude set and is not rescued by
/// the include set.
#[derive(Debug, Clone, Default)]
pub struct MetricsFilter {
    exclude: FilterSet,
    include: FilterSet,
}

impl MetricsFilter {
    pub fn new(exclude: &[MetricFilter], include: &[MetricFilter]) -> Result<Self, FilterError> {
        Ok(MetricsFilter {
            exclude: FilterSet::new(exclude)?,
            include: FilterSet::new(include)?,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, FilterError> {
        Self::new(&config.exclude_metrics, &config.include_metrics)
    }

    #[must_use]
    pub fn should_drop<P: Datapoint>(&self, point: &P) -> bool {
        if !self.exclude.matches(point) {
            return false;
        }
        if self.include.matches(point) {
            debug!(
                "FILTER | Keeping excluded metric {} due to include rule",
                point.metric_name()
            );
            return false;
        }
        debug!("FILTER | Dropping metric {}", point.metric_name());
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::filter::datapoint::DataPoint;
    use serde_json::json;
    use std::collections::HashMap;

    fn names(items: &[&str]) -> MetricFilter {
        MetricFilter {
            metric_names: items.iter().map(|s| (*s).to_string()).collect(),
            ..MetricFilter::default()
        }
    }

    #[test]
    fn test_no_rules_keeps_everything() {
        let filter = MetricsFilter::default();
        assert!(!filter.should_drop(&DataPoint::new("cpu.utilization")));
    }

    #[test]
    fn test_exclude_drops_matches() {
        let filter = MetricsFilter::new(&[names(&["m1", "m2"])], &[]).unwrap();
        assert!(!filter.should_drop(&DataPoint::new("m0")));
        assert!(filter.should_drop(&DataPoint::new("m1")));
        assert!(filter.should_drop(&DataPoint::new("m2")));
    }

    #[test]
    fn test_include_overrides_exclude() {
        let include = MetricFilter {
            metric_name: "process.cpu".to_string(),
            dimensions: HashMap::from([("host".to_string(), json!(["important-*"]))]),
            ..MetricFilter::default()
        };
        let filter = MetricsFilter::new(&[names(&["process.*"])], &[include]).unwrap();

        assert!(filter.should_drop(&DataPoint::new("process.cpu").with_dimension("host", "other")));
        assert!(!filter.should_drop(
            &DataPoint::new("process.cpu").with_dimension("host", "important-db")
        ));
        assert!(filter.should_drop(
            &DataPoint::new("process.mem").with_dimension("host", "important-db")
        ));
    }

    #[test]
    fn test_include_alone_drops_nothing() {
        let filter = MetricsFilter::new(&[], &[names(&["*"])]).unwrap();
        assert!(!filter.should_drop(&DataPoint::new("cpu.utilization")));
    }

    #[test]
    fn test_bad_rule_fails_construction() {
        assert!(MetricsFilter::new(&[names(&["/(/"])], &[]).is_err());
        assert!(MetricsFilter::new(&[], &[MetricFilter::default()]).is_err());
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            exclude_metrics: vec![names(&["cpu.*"])],
            include_metrics: vec![names(&["cpu.idle"])],
            ..Config::default()
        };
        let filter = MetricsFilter::from_config(&config).unwrap();
        assert!(filter.should_drop(&DataPoint::new("cpu.user")));
        assert!(!filter.should_drop(&DataPoint::new("cpu.idle")));
    }
}
