//! Crate for the `dpfilter` project
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(unused_extern_crates)]
#![deny(unused_allocation)]
#![deny(unused_assignments)]
#![deny(unused_comparisons)]
#![deny(unreachable_pub)]
#![deny(missing_copy_implementations)]
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod filter;
pub mod logger;

pub use filter::{
    DataPoint, Datapoint, DatapointFilter, Dimension, FilterError, FilterSet, MetricFilter,
    MetricsFilter, OverridableDatapointFilter, StrictDatapointFilter,
};
