//! The filter/group/rotate pipeline turning an event table into hour buckets

use std::collections::BTreeMap;

use chrono::Timelike;
use igraph_common::{total_seconds, EventTable, IGraphError, Result};
use tracing::debug;

use crate::types::{FilterSpec, HourBucket, HourBucketTable};

/// Filters an event table by duration, groups the survivors by the UTC
/// hour their start falls in, converts to the requested unit, and
/// optionally relabels the buckets for a fixed local-time offset.
#[derive(Debug, Clone)]
pub struct FilterGroupPipeline {
    spec: FilterSpec,
}

impl FilterGroupPipeline {
    /// Build a pipeline, rejecting specs that violate the filter invariants
    pub fn new(spec: FilterSpec) -> Result<Self> {
        spec.validate()?;
        Ok(Self { spec })
    }

    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    /// Run the pipeline over a table.
    ///
    /// `utc_offset_hours`, when given, must be in 0..=23 and cyclically
    /// relabels the output columns so UTC buckets read as local-time
    /// buckets. Columns are labeled by group index, truncated to the
    /// smallest group so every column has the same number of rows.
    pub fn process(
        &self,
        table: &EventTable,
        utc_offset_hours: Option<u8>,
    ) -> Result<HourBucketTable> {
        if let Some(offset) = utc_offset_hours {
            if offset > 23 {
                return Err(IGraphError::config(format!(
                    "timezone offset must be in 0..=23 hours, got {offset}"
                )));
            }
        }
        if table.is_empty() {
            return Err(IGraphError::empty_result("input table has no rows"));
        }

        let field = table.start_field()?;
        let cutoff_secs = total_seconds(&self.spec.cutoff);
        let maximum_secs = total_seconds(&self.spec.maximum);
        let per_unit = self.spec.division.seconds_per_unit();

        let mut groups: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
        for record in table.records() {
            let start = record.start(field).ok_or_else(|| {
                IGraphError::schema_column(
                    "record is missing the selected start column",
                    field.column_name(),
                )
            })?;
            let secs = total_seconds(&record.duration);
            if !self.spec.comparator.holds(secs, cutoff_secs) {
                continue;
            }
            // unconditional upper clamp, whatever the comparator direction
            if secs > maximum_secs {
                continue;
            }
            groups.entry(start.hour()).or_default().push(secs / per_unit);
        }

        if groups.is_empty() {
            return Err(IGraphError::empty_result(format!(
                "no rows satisfy duration {} {}s with maximum {}s",
                self.spec.comparator, cutoff_secs, maximum_secs
            )));
        }

        // Columns labeled by group index, every column cut to the shortest
        // group so rows stay complete across all columns.
        let shortest = groups.values().map(Vec::len).min().unwrap_or(0);
        let mut columns: Vec<HourBucket> = groups
            .into_values()
            .enumerate()
            .map(|(index, mut values)| {
                values.truncate(shortest);
                HourBucket {
                    label: index as u8,
                    values,
                }
            })
            .collect();

        if let Some(offset) = utc_offset_hours {
            // Shift the label sequence so UTC hour indices read as local
            // ones, then restore ascending label order.
            let count = columns.len();
            let mut labels: Vec<u8> = (0..count as u8).collect();
            labels.rotate_left(offset as usize % count);
            for (column, label) in columns.iter_mut().zip(labels) {
                column.label = label;
            }
            columns.sort_by_key(|column| column.label);
        }

        debug!(
            "Grouped durations into {} hour buckets with {} rows each",
            columns.len(),
            shortest
        );
        Ok(HourBucketTable::new(columns))
    }
}
