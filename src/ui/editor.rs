//! Data editing surface: header, add-point form, and record table.
//!
//! This is the single writer of the record collection. Validation happens
//! here so malformed input never reaches the chart renderer or exporter.

use eframe::egui;

use crate::app::ChartAnnotatorApp;
use crate::state::RecordId;

impl ChartAnnotatorApp {
    /// Render the page header with the show-notes toggle
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.heading("Chart Annotator");
        ui.label(
            egui::RichText::new("Add notes to points and export the chart as PNG/PDF.")
                .color(egui::Color32::GRAY),
        );
        ui.add_space(6.0);
        ui.checkbox(&mut self.show_notes, "Show notes on chart");
    }

    /// Render the editing section: add form and record table
    pub fn render_editor(&mut self, ui: &mut egui::Ui) {
        ui.heading("Edit data");
        ui.separator();
        self.render_add_form(ui);
        ui.add_space(10.0);
        self.render_record_table(ui);
    }

    /// Render the add-point form
    fn render_add_form(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Date:");
            ui.add(
                egui::TextEdit::singleline(&mut self.new_date)
                    .desired_width(100.0)
                    .hint_text("YYYY-MM-DD"),
            );

            ui.label("Value:");
            ui.add(egui::TextEdit::singleline(&mut self.new_value).desired_width(80.0));

            ui.label("Note:");
            ui.add(
                egui::TextEdit::singleline(&mut self.new_note)
                    .desired_width(220.0)
                    .hint_text("e.g., Product launch"),
            );

            if ui.button("Add point").clicked() {
                self.add_record();
            }
        });
    }

    /// Render the record table with inline value and note editing
    fn render_record_table(&mut self, ui: &mut egui::Ui) {
        if self.records.is_empty() {
            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("No data yet.")
                        .italics()
                        .color(egui::Color32::GRAY),
                );
            });
            return;
        }

        let mut record_to_remove: Option<RecordId> = None;

        egui::Grid::new("record_table")
            .num_columns(4)
            .striped(true)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                ui.label(egui::RichText::new("Date").strong());
                ui.label(egui::RichText::new("Value").strong());
                ui.label(egui::RichText::new("Note").strong());
                ui.label("");
                ui.end_row();

                // Rows are already in date order; edits go straight into the
                // owned records, removal is deferred past the loop
                for record in &mut self.records {
                    ui.label(&record.date);
                    ui.add(egui::DragValue::new(&mut record.value).speed(10.0));
                    ui.add(egui::TextEdit::singleline(&mut record.note).desired_width(260.0));
                    if ui.small_button("Remove").clicked() {
                        record_to_remove = Some(record.id);
                    }
                    ui.end_row();
                }
            });

        if let Some(id) = record_to_remove {
            self.remove_record(id);
        }
    }
}
