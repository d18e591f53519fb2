//! Axis label derivation for the box plot renderer

use igraph_common::{total_seconds, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

use crate::types::{Comparator, FilterSpec};

/// Fixed label for the grouping dimension
pub const X_AXIS_LABEL: &str = "Start of Intermission (24 Hours)";

/// Human-readable description of the duration range a spec keeps.
///
/// Lower-bound comparators are re-expressed with the complement operator so
/// the range reads left to right; the maximum scales to hours only when it
/// exceeds one hour.
pub fn range_label(spec: &FilterSpec) -> String {
    let cutoff_secs = total_seconds(&spec.cutoff);
    let maximum_secs = total_seconds(&spec.maximum);

    let cutoff = cutoff_secs / spec.division.seconds_per_unit();
    let maximum = if maximum_secs > SECONDS_PER_HOUR {
        maximum_secs / SECONDS_PER_HOUR
    } else {
        maximum_secs / SECONDS_PER_MINUTE
    };

    match spec.comparator {
        Comparator::Lt | Comparator::Le => {
            format!("[0 < d {} {:.1}]", spec.comparator.symbol(), cutoff)
        }
        Comparator::Gt | Comparator::Ge => format!(
            "[{:.1} {} d <= {:.1}]",
            cutoff,
            spec.comparator.complement_symbol(),
            maximum
        ),
    }
}

/// The full y-axis label, range description and unit included
pub fn y_axis_label(spec: &FilterSpec) -> String {
    format!(
        "Avg. Intermission Duration {} ({})",
        range_label(spec),
        spec.division
    )
}
