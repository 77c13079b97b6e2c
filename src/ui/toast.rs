//! Toast notifications anchored to the bottom-right corner.

use std::time::Duration;

use eframe::egui;

use crate::app::ChartAnnotatorApp;

/// How long a toast stays on screen
const TOAST_LIFETIME: Duration = Duration::from_secs(3);

/// Distance from the window edges
const TOAST_MARGIN: f32 = 20.0;

impl ChartAnnotatorApp {
    /// Render the active toast, if any. Expired toasts are cleared here,
    /// and a repaint is requested for the expiry moment so the toast
    /// disappears without waiting for further input events.
    pub fn render_toast(&mut self, ctx: &egui::Context) {
        let Some((message, shown_at, toast_type)) = &self.toast_message else {
            return;
        };

        let age = shown_at.elapsed();
        if age >= TOAST_LIFETIME {
            self.toast_message = None;
            return;
        }
        ctx.request_repaint_after(TOAST_LIFETIME - age);

        let [r, g, b] = toast_type.color();
        let [tr, tg, tb] = toast_type.text_color();

        egui::Area::new(egui::Id::new("toast"))
            .anchor(
                egui::Align2::RIGHT_BOTTOM,
                egui::vec2(-TOAST_MARGIN, -TOAST_MARGIN),
            )
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(egui::Color32::from_rgb(r, g, b))
                    .corner_radius(8)
                    .inner_margin(egui::Margin::symmetric(16, 12))
                    .show(ui, |ui| {
                        // Bounded width so long export paths wrap
                        ui.set_min_width(200.0);
                        ui.set_max_width(400.0);
                        ui.label(
                            egui::RichText::new(message)
                                .color(egui::Color32::from_rgb(tr, tg, tb))
                                .size(14.0),
                        );
                    });
            });
    }
}
