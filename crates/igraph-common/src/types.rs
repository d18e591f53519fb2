//! Event table model shared across the igraph workspace

use chrono::{DateTime, TimeDelta, Utc};

use crate::error::{IGraphError, Result};

/// Timestamp type used throughout the workspace; recordings are UTC
pub type Timestamp = DateTime<Utc>;

/// Seconds in one minute, as used for duration unit conversion
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Seconds in one hour, as used for duration unit conversion
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// The two start-timestamp column conventions an event table may carry.
///
/// Tables recorded directly carry `start_time`; tables derived from event
/// gaps carry `intermission_start` so the two kinds cannot be mixed up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartField {
    StartTime,
    IntermissionStart,
}

impl StartField {
    /// The column name this field maps to in the source data
    pub fn column_name(self) -> &'static str {
        match self {
            Self::StartTime => "start_time",
            Self::IntermissionStart => "intermission_start",
        }
    }
}

/// One recorded intermission: a start instant and a signed duration.
///
/// Exactly one of the two start fields is populated, matching the column
/// convention of the table the record belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct IntermissionRecord {
    pub start_time: Option<Timestamp>,
    pub intermission_start: Option<Timestamp>,
    pub duration: TimeDelta,
}

impl IntermissionRecord {
    /// The start timestamp under the given column convention, if populated
    pub fn start(&self, field: StartField) -> Option<Timestamp> {
        match field {
            StartField::StartTime => self.start_time,
            StartField::IntermissionStart => self.intermission_start,
        }
    }
}

/// An ordered, immutable table of intermission records.
///
/// All records in one table populate the same start field; the analysis
/// pipeline never mutates a table, it derives new ones.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventTable {
    records: Vec<IntermissionRecord>,
}

impl EventTable {
    pub fn new(records: Vec<IntermissionRecord>) -> Self {
        Self { records }
    }

    /// Build a table using the `start_time` column convention
    pub fn from_start_times(rows: impl IntoIterator<Item = (Timestamp, TimeDelta)>) -> Self {
        Self {
            records: rows
                .into_iter()
                .map(|(start, duration)| IntermissionRecord {
                    start_time: Some(start),
                    intermission_start: None,
                    duration,
                })
                .collect(),
        }
    }

    /// Build a table using the `intermission_start` column convention
    pub fn from_intermission_starts(
        rows: impl IntoIterator<Item = (Timestamp, TimeDelta)>,
    ) -> Self {
        Self {
            records: rows
                .into_iter()
                .map(|(start, duration)| IntermissionRecord {
                    start_time: None,
                    intermission_start: Some(start),
                    duration,
                })
                .collect(),
        }
    }

    pub fn records(&self) -> &[IntermissionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Select the start column: `start_time` wins when present, otherwise
    /// `intermission_start`. A table populating neither has no usable
    /// schema.
    pub fn start_field(&self) -> Result<StartField> {
        if self.records.iter().any(|r| r.start_time.is_some()) {
            Ok(StartField::StartTime)
        } else if self.records.iter().any(|r| r.intermission_start.is_some()) {
            Ok(StartField::IntermissionStart)
        } else {
            Err(IGraphError::schema(
                "table has neither a start_time nor an intermission_start column",
            ))
        }
    }
}
