//! Annotation bubble layout.
//!
//! Pure geometry: which side of its marker each note bubble lands on, how
//! wide it is, and where its tail and guide line go. Both the interactive
//! chart and the export rasterizer consume these results, so the two views
//! stay pixel-consistent. Coordinates are screen-space (y grows downward).

use crate::state::Record;

/// Maximum bubble width in logical pixels
pub const BUBBLE_MAX_WIDTH: f32 = 180.0;

/// Horizontal padding inside a bubble, applied on both sides
pub const BUBBLE_PADDING: f32 = 8.0;

/// Fixed bubble height
pub const BUBBLE_HEIGHT: f32 = 40.0;

/// Length of the pointer tail between bubble and marker
pub const TAIL_SIZE: f32 = 8.0;

/// Clearance between the tail tip and the marker
pub const BUBBLE_GAP: f32 = 15.0;

/// Rough per-character width used to estimate note text width
pub const NOTE_CHAR_WIDTH: f32 = 6.0;

/// Notes longer than this many characters are truncated for display
pub const MAX_NOTE_DISPLAY_CHARS: usize = 26;

/// Number of characters kept when a note is truncated
pub const TRUNCATED_NOTE_CHARS: usize = 24;

/// Which side of its marker a bubble is placed on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Bubble above the marker
    Top,
    /// Bubble below the marker
    Bottom,
}

/// Assign placements over the subsequence of annotated records, in order:
/// the 1st, 3rd, 5th... annotated record goes on top, the 2nd, 4th... below.
/// The alternation runs over the filtered subsequence, so unannotated
/// records in between do not break the pattern. Adjacent annotated points
/// on the same side can still collide when notes are long; only the side
/// alternates, there is no collision detection.
///
/// Returns `(index into records, placement)` pairs; empty when `show_notes`
/// is off.
pub fn placements(records: &[Record], show_notes: bool) -> Vec<(usize, Placement)> {
    if !show_notes {
        return Vec::new();
    }

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.has_note())
        .enumerate()
        .map(|(note_index, (record_index, _))| {
            let placement = if note_index % 2 == 0 {
                Placement::Top
            } else {
                Placement::Bottom
            };
            (record_index, placement)
        })
        .collect()
}

/// Bubble width for a note: a rough text-width estimate plus padding,
/// clamped to [`BUBBLE_MAX_WIDTH`].
pub fn bubble_width(note: &str) -> f32 {
    (note.chars().count() as f32 * NOTE_CHAR_WIDTH + 2.0 * BUBBLE_PADDING).min(BUBBLE_MAX_WIDTH)
}

/// Text shown inside a bubble. Notes longer than [`MAX_NOTE_DISPLAY_CHARS`]
/// characters are cut to [`TRUNCATED_NOTE_CHARS`] plus an ellipsis. Display
/// truncation only; the stored note is never modified.
pub fn display_text(note: &str) -> String {
    if note.chars().count() > MAX_NOTE_DISPLAY_CHARS {
        let truncated: String = note.chars().take(TRUNCATED_NOTE_CHARS).collect();
        format!("{}…", truncated)
    } else {
        note.to_string()
    }
}

/// Resolved geometry for one bubble, anchored at its marker position
#[derive(Clone, Debug)]
pub struct BubbleGeometry {
    /// Top-left corner of the bubble rectangle
    pub x: f32,
    /// Top edge of the bubble rectangle
    pub y: f32,
    /// Rectangle width
    pub width: f32,
    /// Rectangle height
    pub height: f32,
    /// Pointer tail triangle, last point is the tip facing the marker
    pub tail: [[f32; 2]; 3],
    /// Dashed guide segment from the marker to the bubble edge
    pub guide: [[f32; 2]; 2],
}

impl BubbleGeometry {
    /// Center of the bubble rectangle (text anchor)
    pub fn center(&self) -> [f32; 2] {
        [self.x + self.width / 2.0, self.y + self.height / 2.0]
    }
}

/// Compute the bubble rectangle, tail triangle, and guide line for a note
/// anchored at marker position `(anchor_x, anchor_y)`.
pub fn bubble_geometry(
    anchor_x: f32,
    anchor_y: f32,
    note: &str,
    placement: Placement,
) -> BubbleGeometry {
    let width = bubble_width(note);
    let x = anchor_x - width / 2.0;

    match placement {
        Placement::Top => {
            let y = anchor_y - BUBBLE_HEIGHT - TAIL_SIZE - BUBBLE_GAP;
            let base = y + BUBBLE_HEIGHT;
            BubbleGeometry {
                x,
                y,
                width,
                height: BUBBLE_HEIGHT,
                tail: [
                    [anchor_x - TAIL_SIZE, base],
                    [anchor_x + TAIL_SIZE, base],
                    [anchor_x, base + TAIL_SIZE],
                ],
                guide: [[anchor_x, anchor_y], [anchor_x, base]],
            }
        }
        Placement::Bottom => {
            let y = anchor_y + TAIL_SIZE + BUBBLE_GAP;
            BubbleGeometry {
                x,
                y,
                width,
                height: BUBBLE_HEIGHT,
                tail: [
                    [anchor_x - TAIL_SIZE, y],
                    [anchor_x + TAIL_SIZE, y],
                    [anchor_x, y - TAIL_SIZE],
                ],
                guide: [[anchor_x, anchor_y], [anchor_x, y]],
            }
        }
    }
}
