//! Datapoint filtering.
//!
//! Filters are described with tokens that are literals (`cpu.utilization`),
//! globs (`process_*`), or regexes (`/^node_/`), each optionally negated with a
//! leading `!`. Tokens are compiled into string filters, string filters into
//! per-dimension map filters, and both into datapoint filters:
//!
//! - **[`string`]**: strict (`BasicStringFilter`) and gitignore-like
//!   (`OverridableStringFilter`) matching of a single value
//! - **[`string_map`]**: all configured dimension keys must match; `key?` may be absent
//! - **[`datapoint`]**: metric name and dimensions combined into one predicate
//! - **[`filter_set`]**: configured `MetricFilter` lists, matched if any member matches
//! - **[`exclusion`]**: exclude/include rule deciding which points are dropped
//!
//! All filters are immutable once built and can be shared across threads.

pub mod datapoint;
pub mod errors;
pub mod exclusion;
pub mod filter_set;
pub mod pattern;
pub mod string;
pub mod string_map;

pub use datapoint::{
    DataPoint, Datapoint, DatapointFilter, Dimension, OverridableDatapointFilter,
    StrictDatapointFilter,
};
pub use errors::FilterError;
pub use exclusion::MetricsFilter;
pub use filter_set::{FilterSet, MetricFilter};
