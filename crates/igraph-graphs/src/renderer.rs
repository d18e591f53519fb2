//! Box-and-whisker rendering of hour bucket tables

use std::path::Path;

use igraph_common::{IGraphError, Result};
use plotters::prelude::*;
use tracing::info;

use crate::types::{ChartConfig, HourBucketTable};

/// Box plot renderer for the pipeline's hour bucket tables
#[derive(Debug, Default)]
pub struct BoxPlotGraph;

impl BoxPlotGraph {
    pub fn new() -> Self {
        Self
    }

    /// One set of quartiles per drawable column.
    ///
    /// NAN cells (introduced by multi-location stacking) are skipped, and
    /// columns left with no finite values are dropped entirely.
    pub fn quartile_series(table: &HourBucketTable) -> Vec<(u8, Quartiles)> {
        table
            .columns()
            .iter()
            .filter_map(|column| {
                let finite: Vec<f64> = column
                    .values
                    .iter()
                    .copied()
                    .filter(|value| value.is_finite())
                    .collect();
                if finite.is_empty() {
                    None
                } else {
                    Some((column.label, Quartiles::new(&finite)))
                }
            })
            .collect()
    }

    /// Render the table as a box-and-whisker chart, one box per column
    pub fn render_to_file(
        &self,
        table: &HourBucketTable,
        config: &ChartConfig,
        path: &Path,
    ) -> Result<()> {
        let series = Self::quartile_series(table);
        if series.is_empty() {
            return Err(IGraphError::graph("no drawable columns in bucket table"));
        }

        let y_max = series
            .iter()
            .map(|(_, quartiles)| quartiles.values()[4])
            .fold(0f32, f32::max);
        let y_max = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };
        let y_min = series
            .iter()
            .map(|(_, quartiles)| quartiles.values()[0])
            .fold(0f32, f32::min);

        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&config.title, ("sans-serif", 24))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(80)
            .build_cartesian_2d((0i32..24i32).into_segmented(), y_min..y_max)?;

        chart
            .configure_mesh()
            .x_desc(config.x_label.as_deref().unwrap_or("Hour"))
            .y_desc(config.y_label.as_deref().unwrap_or("Duration"))
            .draw()?;

        chart.draw_series(series.iter().map(|(label, quartiles)| {
            Boxplot::new_vertical(SegmentValue::CenterOf(i32::from(*label)), quartiles)
                .width(16)
                .style(BLUE.filled())
        }))?;

        root.present()?;
        info!("Successfully rendered box plot to {}", path.display());
        Ok(())
    }
}
