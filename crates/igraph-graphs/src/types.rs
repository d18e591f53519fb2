//! Filter configuration and result table types

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;
use igraph_common::{total_seconds, IGraphError, Result};
use serde::{Deserialize, Serialize};

/// Inequality applied between a row's duration and the cutoff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparator {
    Lt,
    Le,
    Gt,
    Ge,
}

impl Comparator {
    /// Whether `lhs comparator rhs` holds
    pub fn holds(self, lhs: f64, rhs: f64) -> bool {
        match self {
            Self::Lt => lhs < rhs,
            Self::Le => lhs <= rhs,
            Self::Gt => lhs > rhs,
            Self::Ge => lhs >= rhs,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
        }
    }

    /// Lower-bound comparators keep rows above the cutoff, so the maximum
    /// becomes a meaningful upper end of the range
    pub fn is_lower_bound(self) -> bool {
        matches!(self, Self::Gt | Self::Ge)
    }

    /// The mirrored symbol used when re-expressing a lower bound as an
    /// upper bound in display labels
    pub fn complement_symbol(self) -> &'static str {
        match self {
            Self::Lt => ">",
            Self::Le => ">=",
            Self::Gt => "<",
            Self::Ge => "<=",
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Comparator {
    type Err = IGraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "<" => Ok(Self::Lt),
            "<=" => Ok(Self::Le),
            ">" => Ok(Self::Gt),
            ">=" => Ok(Self::Ge),
            other => Err(IGraphError::config(format!(
                "unrecognized comparator symbol: {other:?}"
            ))),
        }
    }
}

/// Unit the grouped durations are reported in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeDivision {
    Minutes,
    Hours,
}

impl TimeDivision {
    /// Seconds in one unit of this division
    pub fn seconds_per_unit(self) -> f64 {
        match self {
            Self::Minutes => igraph_common::SECONDS_PER_MINUTE,
            Self::Hours => igraph_common::SECONDS_PER_HOUR,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Minutes => "minutes",
            Self::Hours => "hours",
        }
    }
}

impl fmt::Display for TimeDivision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeDivision {
    type Err = IGraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "minutes" => Ok(Self::Minutes),
            "hours" => Ok(Self::Hours),
            other => Err(IGraphError::config(format!(
                "unrecognized time division: {other:?}"
            ))),
        }
    }
}

/// Filtering options for one pipeline run.
///
/// `maximum` is an unconditional upper clamp on surviving durations, applied
/// even when the comparator already imposes an upper bound.
#[derive(Debug, Clone)]
pub struct FilterSpec {
    pub cutoff: TimeDelta,
    pub comparator: Comparator,
    pub division: TimeDivision,
    pub maximum: TimeDelta,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            cutoff: TimeDelta::zero(),
            comparator: Comparator::Lt,
            division: TimeDivision::Hours,
            maximum: TimeDelta::hours(24),
        }
    }
}

impl FilterSpec {
    /// A spec with the given cutoff and the default comparator, division
    /// and maximum
    pub fn new(cutoff: TimeDelta) -> Self {
        Self {
            cutoff,
            ..Self::default()
        }
    }

    /// Check the spec invariants: a non-negative cutoff, and a maximum
    /// above the cutoff whenever the comparator is a lower bound
    pub fn validate(&self) -> Result<()> {
        let cutoff_secs = total_seconds(&self.cutoff);
        if cutoff_secs < 0.0 {
            return Err(IGraphError::config(format!(
                "cutoff must be non-negative, got {cutoff_secs}s"
            )));
        }
        if self.comparator.is_lower_bound() && total_seconds(&self.maximum) <= cutoff_secs {
            return Err(IGraphError::config(format!(
                "maximum must exceed cutoff for comparator {}, got maximum {}s with cutoff {}s",
                self.comparator,
                total_seconds(&self.maximum),
                cutoff_secs
            )));
        }
        Ok(())
    }
}

/// One output column: the durations (in the requested unit) of events whose
/// start fell in this bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourBucket {
    pub label: u8,
    pub values: Vec<f64>,
}

/// The pipeline's result table: ordered hour bucket columns of equal length.
///
/// Cells introduced by row-wise concatenation for columns absent in one of
/// the source tables hold `f64::NAN`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HourBucketTable {
    columns: Vec<HourBucket>,
}

impl HourBucketTable {
    pub fn new(columns: Vec<HourBucket>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[HourBucket] {
        &self.columns
    }

    pub fn column(&self, label: u8) -> Option<&HourBucket> {
        self.columns.iter().find(|c| c.label == label)
    }

    pub fn labels(&self) -> Vec<u8> {
        self.columns.iter().map(|c| c.label).collect()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Stack tables row-wise. Columns are unioned in order of first
    /// appearance; a column absent from one table contributes NAN cells for
    /// that table's rows.
    pub fn concat_rows(tables: &[HourBucketTable]) -> HourBucketTable {
        let mut labels: Vec<u8> = Vec::new();
        for table in tables {
            for column in &table.columns {
                if !labels.contains(&column.label) {
                    labels.push(column.label);
                }
            }
        }

        let mut columns: Vec<HourBucket> = labels
            .into_iter()
            .map(|label| HourBucket {
                label,
                values: Vec::new(),
            })
            .collect();

        for table in tables {
            let rows = table.num_rows();
            for column in &mut columns {
                match table.column(column.label) {
                    Some(source) => column.values.extend_from_slice(&source.values),
                    None => column.values.extend(std::iter::repeat(f64::NAN).take(rows)),
                }
            }
        }

        HourBucketTable { columns }
    }
}

/// Chart configuration for the box plot renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Intermission Durations".to_string(),
            // dimensions sized for a 24 column layout
            width: 1000,
            height: 500,
            x_label: None,
            y_label: None,
        }
    }
}
