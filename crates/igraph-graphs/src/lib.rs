//! Hour-of-day intermission duration analysis and box plot generation.
//!
//! The filter/group pipeline turns a raw table of intermission records into
//! per-hour duration buckets ready for a box-and-whisker plot; the merger
//! fans the pipeline out over the registered locations and stacks the
//! results.

pub mod labels;
pub mod locations;
pub mod merger;
pub mod pipeline;
pub mod renderer;
pub mod types;

pub use labels::{range_label, y_axis_label, X_AXIS_LABEL};
pub use locations::{Location, LocationRegistry};
pub use merger::MultiLocationMerger;
pub use pipeline::FilterGroupPipeline;
pub use renderer::BoxPlotGraph;
pub use types::{ChartConfig, Comparator, FilterSpec, HourBucket, HourBucketTable, TimeDivision};
