//! Chart Annotator - annotate a short time series and export the chart
//!
//! This library holds the state, layout, and export logic behind the
//! Chart Annotator desktop application: a short (date, value, note) time
//! series rendered as a line chart with note bubbles, exportable as a PNG
//! image or a single-page PDF.
//!
//! ## Module Structure
//!
//! - [`app`] - Main application state and eframe::App implementation
//! - [`state`] - Core data types, colors, and constants
//! - [`annotation`] - Bubble placement and geometry (pure layout core)
//! - [`capture`] - Chart rasterization and PNG/PDF export artifacts
//! - [`ui`] - User interface components
//!   - `chart` - Interactive chart, markers, bubbles, hover tooltip
//!   - `editor` - Add-point form and record table
//!   - `export` - Export buttons and save-dialog boundary
//!   - `toast` - Toast notification system

pub mod annotation;
pub mod app;
pub mod capture;
pub mod state;
pub mod ui;
