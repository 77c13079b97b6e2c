//! Tests for record state, identifiers, sorting, and value formatting

use chart_annotator::state::{
    format_value, seed_records, sorted_by_date, Record, ToastType, ANNOTATED_MARKER_RADIUS,
    HOVERED_MARKER_RADIUS, MARKER_RADIUS,
};

// ============================================
// Record Tests
// ============================================

#[test]
fn test_record_ids_are_unique() {
    let a = Record::new("2025-01-01", 1.0, "");
    let b = Record::new("2025-01-01", 1.0, "");
    assert_ne!(a.id, b.id, "Each record should get a fresh id");
}

#[test]
fn test_record_id_stable_across_edits() {
    let mut record = Record::new("2025-01-01", 100.0, "note");
    let id = record.id;

    record.value = 250.0;
    record.note = "edited".to_string();

    assert_eq!(record.id, id, "Edits should never change the id");
}

#[test]
fn test_note_trimmed_on_creation() {
    let record = Record::new("2025-01-01", 1.0, "  Launch  ");
    assert_eq!(record.note, "Launch");
}

#[test]
fn test_has_note_for_text() {
    let record = Record::new("2025-01-01", 1.0, "Launch");
    assert!(record.has_note());
}

#[test]
fn test_blank_note_means_no_annotation() {
    let empty = Record::new("2025-01-01", 1.0, "");
    assert!(!empty.has_note(), "Empty note should not count");

    // Whitespace can be reintroduced by inline edits
    let mut whitespace = Record::new("2025-01-01", 1.0, "");
    whitespace.note = "   ".to_string();
    assert!(
        !whitespace.has_note(),
        "Whitespace-only note should be treated as no note"
    );
}

// ============================================
// Sorting Tests
// ============================================

#[test]
fn test_sorted_by_date_orders_ascending() {
    let records = vec![
        Record::new("2026-01-01", 3.0, ""),
        Record::new("2025-10-01", 1.0, ""),
        Record::new("2025-12-01", 2.0, ""),
    ];

    let sorted = sorted_by_date(&records);
    let dates: Vec<&str> = sorted.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, vec!["2025-10-01", "2025-12-01", "2026-01-01"]);
}

#[test]
fn test_sorted_by_date_is_stable_for_equal_dates() {
    let first = Record::new("2025-10-01", 1.0, "first");
    let second = Record::new("2025-10-01", 2.0, "second");
    let records = vec![first.clone(), second.clone()];

    let sorted = sorted_by_date(&records);
    assert_eq!(sorted[0].id, first.id);
    assert_eq!(sorted[1].id, second.id);
}

#[test]
fn test_sorted_by_date_leaves_input_untouched() {
    let records = vec![
        Record::new("2026-01-01", 3.0, ""),
        Record::new("2025-10-01", 1.0, ""),
    ];
    let _ = sorted_by_date(&records);
    assert_eq!(records[0].date, "2026-01-01");
}

#[test]
fn test_seed_records_are_sorted_and_annotated() {
    let seeds = seed_records();
    assert_eq!(seeds.len(), 4);

    for window in seeds.windows(2) {
        assert!(
            window[0].date <= window[1].date,
            "Seed data should be date-sorted"
        );
    }

    let annotated: Vec<&str> = seeds
        .iter()
        .filter(|r| r.has_note())
        .map(|r| r.note.as_str())
        .collect();
    assert_eq!(annotated, vec!["Launch", "Dip", "New high"]);
}

// ============================================
// Value Formatting Tests
// ============================================

#[test]
fn test_format_value_groups_thousands() {
    assert_eq!(format_value(1200.0), "1,200");
    assert_eq!(format_value(1800.0), "1,800");
    assert_eq!(format_value(1000000.0), "1,000,000");
}

#[test]
fn test_format_value_small_numbers_ungrouped() {
    assert_eq!(format_value(0.0), "0");
    assert_eq!(format_value(7.0), "7");
    assert_eq!(format_value(999.0), "999");
}

#[test]
fn test_format_value_negative() {
    assert_eq!(format_value(-4200.0), "-4,200");
}

#[test]
fn test_format_value_keeps_meaningful_fraction() {
    assert_eq!(format_value(1234567.5), "1,234,567.5");
    assert_eq!(format_value(0.25), "0.25");
}

// ============================================
// Constant and Toast Tests
// ============================================

#[test]
fn test_marker_radii_ordering() {
    assert!(MARKER_RADIUS < ANNOTATED_MARKER_RADIUS);
    assert!(ANNOTATED_MARKER_RADIUS < HOVERED_MARKER_RADIUS);
}

#[test]
fn test_toast_types_have_distinct_colors() {
    let mut colors = vec![
        ToastType::Info.color(),
        ToastType::Success.color(),
        ToastType::Warning.color(),
        ToastType::Error.color(),
    ];
    colors.dedup();
    assert_eq!(colors.len(), 4, "Toast colors should be distinct");
}

#[test]
fn test_warning_toast_uses_dark_text() {
    assert_eq!(ToastType::Warning.text_color(), [30, 30, 30]);
    assert_eq!(ToastType::Error.text_color(), [255, 255, 255]);
}
