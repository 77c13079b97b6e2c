//! UI rendering modules for the Chart Annotator application.
//!
//! - `chart` - Line chart with markers, note bubbles, and hover tooltip
//! - `editor` - Header, add-point form, and record table
//! - `export` - Export buttons and the save-dialog/export boundary
//! - `toast` - Toast notification system

pub mod chart;
pub mod editor;
pub mod export;
pub mod toast;
