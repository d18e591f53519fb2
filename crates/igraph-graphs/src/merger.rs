//! Fans the pipeline out over the registered locations and stacks results

use igraph_common::{EventTable, Result};
use tracing::debug;

use crate::locations::LocationRegistry;
use crate::pipeline::FilterGroupPipeline;
use crate::types::{FilterSpec, HourBucketTable};

/// Runs the filter/group pipeline for a single named location, or once per
/// registered location with the results stacked row-wise.
#[derive(Debug, Clone)]
pub struct MultiLocationMerger<'a> {
    registry: &'a LocationRegistry,
}

impl<'a> MultiLocationMerger<'a> {
    pub fn new(registry: &'a LocationRegistry) -> Self {
        Self { registry }
    }

    /// Process the table for `location_key`, or for every registered
    /// location when the key is absent. "both" is an alias for the
    /// no-location fan-out.
    pub fn merge(
        &self,
        table: &EventTable,
        spec: &FilterSpec,
        location_key: Option<&str>,
    ) -> Result<HourBucketTable> {
        let pipeline = FilterGroupPipeline::new(spec.clone())?;
        let key = location_key.filter(|key| !key.eq_ignore_ascii_case("both"));

        match key {
            Some(key) => {
                let location = self.registry.resolve(key)?;
                pipeline.process(table, Some(location.utc_offset_hours))
            }
            None => {
                let mut parts = Vec::with_capacity(self.registry.len());
                for location in self.registry.iter() {
                    parts.push(pipeline.process(table, Some(location.utc_offset_hours))?);
                }
                let merged = HourBucketTable::concat_rows(&parts);
                debug!(
                    "Stacked {} per-location bucket tables into {} rows",
                    parts.len(),
                    merged.num_rows()
                );
                Ok(merged)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone, Utc};
    use igraph_common::IGraphError;

    fn ts(hour: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, hour, 20, 0).unwrap()
    }

    fn sample_table() -> EventTable {
        EventTable::from_start_times(vec![
            (ts(1), TimeDelta::seconds(30)),
            (ts(1), TimeDelta::seconds(45)),
            (ts(9), TimeDelta::seconds(70)),
        ])
    }

    #[test]
    fn test_single_location_delegates_to_pipeline() {
        let registry = LocationRegistry::with_defaults();
        let merger = MultiLocationMerger::new(&registry);
        let spec = FilterSpec::new(TimeDelta::hours(1));

        let merged = merger.merge(&sample_table(), &spec, Some("LA")).unwrap();

        let pipeline = FilterGroupPipeline::new(spec).unwrap();
        let direct = pipeline.process(&sample_table(), Some(17)).unwrap();
        assert_eq!(merged, direct);
    }

    #[test]
    fn test_merged_row_count_is_sum_of_parts() {
        let registry = LocationRegistry::with_defaults();
        let merger = MultiLocationMerger::new(&registry);
        let spec = FilterSpec::new(TimeDelta::hours(1));

        let la = merger.merge(&sample_table(), &spec, Some("LA")).unwrap();
        let pit = merger
            .merge(&sample_table(), &spec, Some("Pittsburgh"))
            .unwrap();
        let both = merger.merge(&sample_table(), &spec, None).unwrap();

        assert_eq!(both.num_rows(), la.num_rows() + pit.num_rows());
    }

    #[test]
    fn test_both_alias_matches_absent_key() {
        let registry = LocationRegistry::with_defaults();
        let merger = MultiLocationMerger::new(&registry);
        let spec = FilterSpec::new(TimeDelta::hours(1));

        let absent = merger.merge(&sample_table(), &spec, None).unwrap();
        let alias = merger.merge(&sample_table(), &spec, Some("both")).unwrap();
        assert_eq!(absent, alias);
    }

    #[test]
    fn test_unknown_location_is_config_error() {
        let registry = LocationRegistry::with_defaults();
        let merger = MultiLocationMerger::new(&registry);
        let spec = FilterSpec::new(TimeDelta::hours(1));

        let err = merger
            .merge(&sample_table(), &spec, Some("Tokyo"))
            .unwrap_err();
        assert!(matches!(err, IGraphError::Config { .. }));
    }
}
