//! Interactive chart rendering: line plot, markers, note bubbles, tooltip.
//!
//! The plot itself (grid, axes, series line) is egui_plot; markers and
//! bubbles are painted over it in screen space through the plot transform
//! so their pixel geometry matches the exported raster exactly.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotBounds, PlotPoint, PlotPoints};

use crate::annotation::{self, BubbleGeometry};
use crate::app::ChartAnnotatorApp;
use crate::state::{
    format_value, Record, ANNOTATED_MARKER_COLOR, ANNOTATED_MARKER_RADIUS, BUBBLE_BORDER_COLOR,
    BUBBLE_FILL_COLOR, BUBBLE_TEXT_COLOR, GUIDE_LINE_COLOR, HOVERED_MARKER_RADIUS, LINE_COLOR,
    LINE_WIDTH, MARKER_COLOR, MARKER_RADIUS, MARKER_RING_COLOR, MARKER_RING_WIDTH,
};

/// Height of the chart container in logical pixels
const CHART_HEIGHT: f32 = 520.0;

/// Maximum pointer-to-marker distance for hover pickup
const HOVER_PICK_RADIUS: f32 = 12.0;

/// Extra headroom on the value axis so top/bottom bubbles stay inside the
/// plot frame
const VALUE_PADDING_RATIO: f64 = 0.3;

impl ChartAnnotatorApp {
    /// Render the chart card: title row with export buttons, then the plot
    pub fn render_chart_panel(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Data Visualization");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                self.render_export_buttons(ui);
            });
        });
        ui.add_space(6.0);
        self.render_chart(ui);
    }

    /// Render the line chart with annotation bubbles and hover tooltip
    pub fn render_chart(&mut self, ui: &mut egui::Ui) {
        // Read-only snapshot, already sorted by date; never re-sorted here
        let records = self.records.clone();
        let show_notes = self.show_notes;
        let count = records.len();

        let (y_min, y_max) = value_bounds(&records);
        let x_max = if count == 0 {
            0.5
        } else {
            count as f64 - 0.5
        };

        let dates: Vec<String> = records.iter().map(|record| record.date.clone()).collect();

        let plot = Plot::new("annotated_chart")
            .height(CHART_HEIGHT)
            .legend(Legend::default())
            .show_axes([true, true])
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .x_axis_formatter(move |mark, _range| {
                // Categorical axis: label only the integer positions that
                // correspond to a record
                let index = mark.value.round();
                if index < 0.0 || (mark.value - index).abs() > 1e-3 {
                    return String::new();
                }
                dates.get(index as usize).cloned().unwrap_or_default()
            })
            .y_axis_formatter(|mark, _range| format_value(mark.value));

        let response = plot.show(ui, |plot_ui| {
            // Fixed view: half a slot of padding on x, bubble headroom on y
            plot_ui.set_plot_bounds(PlotBounds::from_min_max([-0.5, y_min], [x_max, y_max]));

            if records.len() >= 2 {
                let points: PlotPoints = records
                    .iter()
                    .enumerate()
                    .map(|(index, record)| [index as f64, record.value])
                    .collect();
                let color = color32(LINE_COLOR);
                plot_ui.line(Line::new("Value", points).color(color).width(LINE_WIDTH));
            }
        });

        // Exports capture at this container's logical size
        self.last_chart_rect = Some(response.response.rect);

        if records.is_empty() {
            return;
        }

        // Marker screen positions via the plot transform
        let positions: Vec<egui::Pos2> = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                response
                    .transform
                    .position_from_point(&PlotPoint::new(index as f64, record.value))
            })
            .collect();

        let hovered = response.response.hover_pos().and_then(|pointer| {
            let mut best = HOVER_PICK_RADIUS;
            let mut found = None;
            for (index, position) in positions.iter().enumerate() {
                let distance = position.distance(pointer);
                if distance <= best {
                    best = distance;
                    found = Some(index);
                }
            }
            found
        });

        let painter = ui.painter();

        // Markers: annotated points are larger and red, hovered larger still
        for (index, record) in records.iter().enumerate() {
            let annotated = show_notes && record.has_note();
            let radius = if hovered == Some(index) {
                HOVERED_MARKER_RADIUS
            } else if annotated {
                ANNOTATED_MARKER_RADIUS
            } else {
                MARKER_RADIUS
            };
            let fill = if annotated {
                ANNOTATED_MARKER_COLOR
            } else {
                MARKER_COLOR
            };
            painter.circle_filled(positions[index], radius, color32(fill));
            painter.circle_stroke(
                positions[index],
                radius,
                egui::Stroke::new(MARKER_RING_WIDTH, color32(MARKER_RING_COLOR)),
            );
        }

        // Note bubbles, alternating sides over the annotated subsequence
        for (index, placement) in annotation::placements(&records, show_notes) {
            let anchor = positions[index];
            let geometry = annotation::bubble_geometry(
                anchor.x,
                anchor.y,
                &records[index].note,
                placement,
            );
            paint_bubble(painter, &geometry, &records[index].note);
        }

        if let Some(index) = hovered {
            show_point_tooltip(ui, &records[index]);
        }
    }
}

/// Paint one bubble: dashed guide line, tail, bordered rectangle, label
fn paint_bubble(painter: &egui::Painter, geometry: &BubbleGeometry, note: &str) {
    let border_stroke = egui::Stroke::new(1.5, color32(BUBBLE_BORDER_COLOR));

    let guide = [
        egui::pos2(geometry.guide[0][0], geometry.guide[0][1]),
        egui::pos2(geometry.guide[1][0], geometry.guide[1][1]),
    ];
    painter.extend(egui::Shape::dashed_line(
        &guide,
        egui::Stroke::new(1.5, color32(GUIDE_LINE_COLOR)),
        3.0,
        3.0,
    ));

    let tail: Vec<egui::Pos2> = geometry
        .tail
        .iter()
        .map(|point| egui::pos2(point[0], point[1]))
        .collect();
    painter.add(egui::Shape::convex_polygon(
        tail,
        color32(BUBBLE_FILL_COLOR),
        border_stroke,
    ));

    let rect = egui::Rect::from_min_size(
        egui::pos2(geometry.x, geometry.y),
        egui::vec2(geometry.width, geometry.height),
    );
    painter.rect_filled(rect, egui::CornerRadius::same(6), color32(BUBBLE_FILL_COLOR));
    painter.rect_stroke(
        rect,
        egui::CornerRadius::same(6),
        border_stroke,
        egui::StrokeKind::Outside,
    );

    let center = geometry.center();
    painter.text(
        egui::pos2(center[0], center[1]),
        egui::Align2::CENTER_CENTER,
        annotation::display_text(note),
        egui::FontId::proportional(11.0),
        color32(BUBBLE_TEXT_COLOR),
    );
}

/// Tooltip for the hovered marker: date, grouped value, and the note when
/// one is present
fn show_point_tooltip(ui: &egui::Ui, record: &Record) {
    egui::show_tooltip(
        ui.ctx(),
        ui.layer_id(),
        egui::Id::new("point_tooltip"),
        |ui| {
            ui.set_max_width(260.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Date:").strong());
                ui.label(&record.date);
            });
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Value:").strong());
                ui.label(format_value(record.value));
            });
            if record.has_note() {
                ui.separator();
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new("Note:").strong());
                    ui.label(record.note.trim());
                });
            }
        },
    );
}

/// Value-axis bounds with bubble headroom; degenerate ranges get a unit pad
fn value_bounds(records: &[Record]) -> (f64, f64) {
    if records.is_empty() {
        return (0.0, 1.0);
    }

    let mut min = f64::MAX;
    let mut max = f64::MIN;
    for record in records {
        min = min.min(record.value);
        max = max.max(record.value);
    }
    if (max - min).abs() < f64::EPSILON {
        min -= 1.0;
        max += 1.0;
    }

    let pad = (max - min) * VALUE_PADDING_RATIO;
    (min - pad, max + pad)
}

fn color32(color: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(color[0], color[1], color[2])
}
