//! Chart export boundary (PNG, PDF).
//!
//! Export failures are caught here: logged, surfaced as an error toast,
//! and never allowed to escape further. A cancelled save dialog aborts
//! without noise.

use std::path::Path;

use eframe::egui;

use crate::app::ChartAnnotatorApp;
use crate::capture::{self, CaptureSize, ExportError, ExportFormat};

impl ChartAnnotatorApp {
    /// Render the export buttons (laid out right-to-left)
    pub fn render_export_buttons(&mut self, ui: &mut egui::Ui) {
        if ui.button("Export PDF").clicked() {
            self.pending_export = Some(ExportFormat::Pdf);
        }
        if ui.button("Export PNG").clicked() {
            self.pending_export = Some(ExportFormat::Png);
        }
    }

    /// Process a queued export request. Runs at the end of the frame, after
    /// the chart has painted, so the captured size reflects settled layout.
    pub fn process_pending_export(&mut self) {
        let Some(format) = self.pending_export.take() else {
            return;
        };

        // Show save dialog
        let Some(path) = rfd::FileDialog::new()
            .add_filter(format.filter_name(), &[format.extension()])
            .set_file_name(capture::export_file_name_today(format))
            .save_file()
        else {
            return;
        };

        match self.export_chart(format, &path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "chart exported");
                self.show_toast_success(&format!(
                    "Chart exported as {}",
                    format.extension().to_uppercase()
                ));
            }
            Err(e) => {
                tracing::error!(error = %e, "chart export failed");
                self.show_toast_error(&format!("Export failed: {}", e));
            }
        }
    }

    /// Capture the chart at its on-screen logical size and write one file
    /// in the requested format
    fn export_chart(&self, format: ExportFormat, path: &Path) -> Result<(), ExportError> {
        let rect = self.last_chart_rect.ok_or(ExportError::ChartNotVisible)?;
        let size = CaptureSize::new(
            rect.width().round() as u32,
            rect.height().round() as u32,
        );

        // Snapshot of the collection; edits made from here on are not part
        // of this export
        let records = self.records.clone();
        let image = capture::capture_chart(&records, self.show_notes, size)?;

        match format {
            ExportFormat::Png => capture::write_png(&image, path),
            ExportFormat::Pdf => capture::write_pdf(&image, size, path),
        }
    }
}
