//! Chart Annotator - annotate a short time series and export the chart
//!
//! A small desktop application: edit (date, value, note) points, see them
//! on a line chart with note bubbles, and export the chart as PNG or PDF.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use chart_annotator::app::ChartAnnotatorApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Configure native options
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 920.0])
            .with_min_inner_size([820.0, 700.0])
            .with_title("Chart Annotator")
            .with_app_id("ChartAnnotator"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Chart Annotator",
        native_options,
        Box::new(|cc| Ok(Box::new(ChartAnnotatorApp::new(cc)))),
    )
}
