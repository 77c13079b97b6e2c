//! Tests for annotation placement alternation and bubble geometry

use chart_annotator::annotation::{
    bubble_geometry, bubble_width, display_text, placements, Placement, BUBBLE_GAP, BUBBLE_HEIGHT,
    BUBBLE_MAX_WIDTH, TAIL_SIZE,
};
use chart_annotator::state::Record;

use crate::common::{launch_dip_records, record};

// ============================================
// Display Text Tests
// ============================================

#[test]
fn test_short_notes_display_unmodified() {
    assert_eq!(display_text("Launch"), "Launch");
    assert_eq!(display_text(""), "");

    // Exactly at the limit
    let at_limit = "a".repeat(26);
    assert_eq!(display_text(&at_limit), at_limit);
}

#[test]
fn test_long_notes_truncated_with_ellipsis() {
    let long = "a".repeat(27);
    let displayed = display_text(&long);

    let expected = format!("{}…", "a".repeat(24));
    assert_eq!(displayed, expected);
    assert_eq!(displayed.chars().count(), 25);
}

#[test]
fn test_truncation_counts_characters_not_bytes() {
    let long: String = "é".repeat(30);
    let displayed = display_text(&long);
    assert_eq!(displayed.chars().count(), 25);
    assert!(displayed.ends_with('…'));
}

#[test]
fn test_truncation_does_not_mutate_record() {
    let note = "a very long note that exceeds the display limit";
    let record = Record::new("2025-01-01", 1.0, note);

    let _ = display_text(&record.note);
    assert_eq!(record.note, note, "Display truncation must not alter data");
}

// ============================================
// Bubble Width Tests
// ============================================

#[test]
fn test_bubble_width_scales_with_length() {
    assert_eq!(bubble_width(""), 16.0);
    assert_eq!(bubble_width("abcd"), 4.0 * 6.0 + 16.0);
}

#[test]
fn test_bubble_width_clamped_to_maximum() {
    let long = "a".repeat(40);
    assert_eq!(bubble_width(&long), BUBBLE_MAX_WIDTH);
}

// ============================================
// Placement Alternation Tests
// ============================================

#[test]
fn test_launch_dip_scenario() {
    // Three points, middle one unannotated: two bubbles, Launch on top,
    // Dip below
    let records = launch_dip_records();
    let placed = placements(&records, true);

    assert_eq!(placed.len(), 2);
    assert_eq!(placed[0], (0, Placement::Top));
    assert_eq!(placed[1], (2, Placement::Bottom));
}

#[test]
fn test_alternation_over_annotated_subsequence() {
    // Gaps between annotated records must not break the alternation
    let records = vec![
        record("2025-01-01", 1.0, "first"),
        record("2025-02-01", 2.0, ""),
        record("2025-03-01", 3.0, ""),
        record("2025-04-01", 4.0, "second"),
        record("2025-05-01", 5.0, "third"),
        record("2025-06-01", 6.0, ""),
        record("2025-07-01", 7.0, "fourth"),
    ];

    let placed = placements(&records, true);
    assert_eq!(
        placed,
        vec![
            (0, Placement::Top),
            (3, Placement::Bottom),
            (4, Placement::Top),
            (6, Placement::Bottom),
        ]
    );
}

#[test]
fn test_no_placements_when_notes_hidden() {
    let records = launch_dip_records();
    assert!(placements(&records, false).is_empty());
}

#[test]
fn test_blank_notes_excluded_from_placement() {
    let mut records = vec![
        record("2025-01-01", 1.0, "real"),
        record("2025-02-01", 2.0, ""),
        record("2025-03-01", 3.0, "also real"),
    ];
    // Whitespace reintroduced by an inline edit
    records[1].note = "   ".to_string();

    let placed = placements(&records, true);
    assert_eq!(placed, vec![(0, Placement::Top), (2, Placement::Bottom)]);
}

#[test]
fn test_empty_records_no_placements() {
    assert!(placements(&[], true).is_empty());
}

// ============================================
// Bubble Geometry Tests
// ============================================

#[test]
fn test_top_bubble_sits_above_marker() {
    let geometry = bubble_geometry(100.0, 200.0, "note", Placement::Top);

    assert_eq!(geometry.height, BUBBLE_HEIGHT);
    assert_eq!(
        geometry.y,
        200.0 - BUBBLE_HEIGHT - TAIL_SIZE - BUBBLE_GAP,
        "Top bubble rests tail + gap above the marker"
    );

    // Tail tip points down toward the marker, ending gap pixels short of it
    let tip = geometry.tail[2];
    assert_eq!(tip, [100.0, 200.0 - BUBBLE_GAP]);

    // Guide runs from the marker to the bubble's bottom edge
    assert_eq!(geometry.guide[0], [100.0, 200.0]);
    assert_eq!(geometry.guide[1], [100.0, geometry.y + BUBBLE_HEIGHT]);
}

#[test]
fn test_bottom_bubble_sits_below_marker() {
    let geometry = bubble_geometry(100.0, 200.0, "note", Placement::Bottom);

    assert_eq!(geometry.y, 200.0 + TAIL_SIZE + BUBBLE_GAP);

    // Tail tip points up toward the marker
    let tip = geometry.tail[2];
    assert_eq!(tip, [100.0, 200.0 + BUBBLE_GAP]);

    assert_eq!(geometry.guide[0], [100.0, 200.0]);
    assert_eq!(geometry.guide[1], [100.0, geometry.y]);
}

#[test]
fn test_bubble_centered_on_anchor() {
    let geometry = bubble_geometry(100.0, 200.0, "abcd", Placement::Top);

    assert_eq!(geometry.width, bubble_width("abcd"));
    assert_eq!(geometry.x, 100.0 - geometry.width / 2.0);

    let center = geometry.center();
    assert_eq!(center[0], 100.0);
}
