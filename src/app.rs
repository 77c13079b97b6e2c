//! Main application state and `eframe::App` implementation.

use std::time::Instant;

use chrono::NaiveDate;
use eframe::egui;

use crate::capture::ExportFormat;
use crate::state::{seed_records, Record, RecordId, ToastType};

/// Main application state.
///
/// The record collection has a single writer (the user, via the UI thread);
/// the chart renderer and the exporter only ever see read-only snapshots.
pub struct ChartAnnotatorApp {
    /// The edited time series, kept sorted ascending by date string.
    /// Value and note edits cannot change the order; adds re-sort.
    pub records: Vec<Record>,
    /// Whether note bubbles are drawn on the chart
    pub show_notes: bool,
    /// Add-form date input (`YYYY-MM-DD`)
    pub new_date: String,
    /// Add-form value input, parsed on submit
    pub new_value: String,
    /// Add-form note input, optional
    pub new_note: String,
    /// Toast message for user feedback
    pub toast_message: Option<(String, Instant, ToastType)>,
    /// Chart container rectangle as painted this frame; exports capture at
    /// this logical size
    pub last_chart_rect: Option<egui::Rect>,
    /// Export request queued by a button click, processed after the chart
    /// has painted
    pub pending_export: Option<ExportFormat>,
}

impl Default for ChartAnnotatorApp {
    fn default() -> Self {
        Self {
            records: seed_records(),
            show_notes: true,
            new_date: "2026-02-01".to_string(),
            new_value: "2000".to_string(),
            new_note: String::new(),
            toast_message: None,
            last_chart_rect: None,
            pending_export: None,
        }
    }
}

impl ChartAnnotatorApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Add a record from the form fields. Invalid input is rejected with a
    /// warning toast so malformed data never reaches the renderer.
    pub fn add_record(&mut self) {
        let date = self.new_date.trim().to_string();
        if NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
            self.show_toast_warning("Enter the date as YYYY-MM-DD");
            return;
        }

        let value = match self.new_value.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                self.show_toast_warning("Enter a numeric value");
                return;
            }
        };

        self.records.push(Record::new(date, value, &self.new_note));
        // Stable sort: equal dates keep insertion order
        self.records.sort_by(|a, b| a.date.cmp(&b.date));
        self.new_note.clear();
    }

    /// Remove a record by its stable id
    pub fn remove_record(&mut self, id: RecordId) {
        self.records.retain(|record| record.id != id);
    }

    /// Show a toast message of the given type
    pub fn show_toast(&mut self, message: &str, toast_type: ToastType) {
        self.toast_message = Some((message.to_string(), Instant::now(), toast_type));
    }

    /// Show a success toast message
    pub fn show_toast_success(&mut self, message: &str) {
        self.show_toast(message, ToastType::Success);
    }

    /// Show a warning toast message
    pub fn show_toast_warning(&mut self, message: &str) {
        self.show_toast(message, ToastType::Warning);
    }

    /// Show an error toast message
    pub fn show_toast_error(&mut self, message: &str) {
        self.show_toast(message, ToastType::Error);
    }
}

impl eframe::App for ChartAnnotatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.render_header(ui);
                    ui.add_space(10.0);
                    self.render_chart_panel(ui);
                    ui.add_space(10.0);
                    self.render_editor(ui);
                });
        });

        // After the chart has painted, so the capture sees settled layout
        self.process_pending_export();

        self.render_toast(ctx);
    }
}
