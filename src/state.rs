//! Core application state types and constants.
//!
//! This module contains the fundamental data structures used throughout
//! the application: the time-series records being annotated, the colors
//! shared by the live chart and the exported artifacts, and toast types.

use uuid::Uuid;

// ============================================================================
// Constants
// ============================================================================

/// Series line color (blue)
pub const LINE_COLOR: [u8; 3] = [59, 130, 246];

/// Marker fill for plain (unannotated) points, same blue as the line
pub const MARKER_COLOR: [u8; 3] = [59, 130, 246];

/// Marker fill for annotated points (red)
pub const ANNOTATED_MARKER_COLOR: [u8; 3] = [239, 68, 68];

/// White ring drawn around every marker
pub const MARKER_RING_COLOR: [u8; 3] = [255, 255, 255];

/// Bubble background (pale amber)
pub const BUBBLE_FILL_COLOR: [u8; 3] = [254, 243, 199];

/// Bubble border and tail outline (amber)
pub const BUBBLE_BORDER_COLOR: [u8; 3] = [245, 158, 11];

/// Bubble label text (dark amber)
pub const BUBBLE_TEXT_COLOR: [u8; 3] = [146, 64, 14];

/// Dashed guide line between a marker and its bubble (slate)
pub const GUIDE_LINE_COLOR: [u8; 3] = [148, 163, 184];

/// Chart grid lines in exported charts (light gray)
pub const GRID_COLOR: [u8; 3] = [229, 231, 235];

/// Axis tick labels in exported charts (dark gray)
pub const AXIS_TEXT_COLOR: [u8; 3] = [55, 65, 81];

/// Radius of a plain point marker
pub const MARKER_RADIUS: f32 = 5.0;

/// Radius of an annotated point marker
pub const ANNOTATED_MARKER_RADIUS: f32 = 6.0;

/// Radius of the marker under the pointer
pub const HOVERED_MARKER_RADIUS: f32 = 7.0;

/// Width of the white ring around markers
pub const MARKER_RING_WIDTH: f32 = 2.0;

/// Width of the series line
pub const LINE_WIDTH: f32 = 2.0;

// ============================================================================
// Core Types
// ============================================================================

/// Opaque identifier for a record, stable across edits and never reused
/// after deletion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

/// One data point of the edited time series
#[derive(Clone, Debug)]
pub struct Record {
    /// Stable identifier, assigned once at creation
    pub id: RecordId,
    /// Calendar date label in `YYYY-MM-DD` form. Fixed-width ISO dates make
    /// lexicographic order equal chronological order, so this doubles as
    /// the sort key.
    pub date: String,
    /// Plotted value
    pub value: f64,
    /// Optional note; blank (empty or whitespace-only) means no annotation
    pub note: String,
}

impl Record {
    /// Create a record with a fresh id. The note is trimmed on entry;
    /// later inline edits may reintroduce surrounding whitespace, which
    /// [`Record::has_note`] ignores.
    pub fn new(date: impl Into<String>, value: f64, note: &str) -> Self {
        Self {
            id: RecordId::new(),
            date: date.into(),
            value,
            note: note.trim().to_string(),
        }
    }

    /// Whether this record carries an annotation. Blank notes are treated
    /// identically to no note at all.
    pub fn has_note(&self) -> bool {
        !self.note.trim().is_empty()
    }
}

/// Return a copy of `records` sorted ascending by date string. The chart
/// renderer and the exporter consume this snapshot and never re-sort.
pub fn sorted_by_date(records: &[Record]) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));
    sorted
}

/// Initial data shown on startup
pub fn seed_records() -> Vec<Record> {
    vec![
        Record::new("2025-10-01", 1200.0, "Launch"),
        Record::new("2025-11-01", 1800.0, ""),
        Record::new("2025-12-01", 1400.0, "Dip"),
        Record::new("2026-01-01", 2200.0, "New high"),
    ]
}

/// Format a value with grouped thousands for tooltips and axis labels
/// (1200 -> "1,200"). Fractional digits are kept up to three places with
/// trailing zeros dropped.
pub fn format_value(value: f64) -> String {
    let formatted = format!("{:.3}", value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (formatted.as_str(), ""),
    };

    let digits = int_part.as_bytes();
    let mut grouped = String::with_capacity(formatted.len() + digits.len() / 3 + 1);
    if value < 0.0 {
        grouped.push('-');
    }
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit as char);
    }

    let frac = frac_part.trim_end_matches('0');
    if !frac.is_empty() {
        grouped.push('.');
        grouped.push_str(frac);
    }

    grouped
}

/// Type of toast notification (determines color)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastType {
    /// Informational message (blue)
    #[default]
    Info,
    /// Success message (green)
    Success,
    /// Warning message (amber)
    Warning,
    /// Error message (red)
    Error,
}

impl ToastType {
    /// Background color, drawn from the chart palette where one fits
    pub fn color(&self) -> [u8; 3] {
        match self {
            ToastType::Info => LINE_COLOR,
            ToastType::Success => [22, 163, 74], // Green
            ToastType::Warning => BUBBLE_BORDER_COLOR,
            ToastType::Error => ANNOTATED_MARKER_COLOR,
        }
    }

    /// Text color readable on [`ToastType::color`]
    pub fn text_color(&self) -> [u8; 3] {
        match self {
            ToastType::Warning => [30, 30, 30], // Dark text for amber background
            _ => [255, 255, 255],
        }
    }
}
