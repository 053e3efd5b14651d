// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Flash notification banner.

use eframe::egui;

use crate::models::document::Element;
use crate::models::notification::NotificationKind;

/// Banner colors for a notification kind: (fill, text).
pub fn palette(kind: NotificationKind) -> (egui::Color32, egui::Color32) {
    match kind {
        NotificationKind::Error => (
            egui::Color32::from_rgb(248, 215, 218),
            egui::Color32::from_rgb(114, 28, 36),
        ),
        NotificationKind::Success => (
            egui::Color32::from_rgb(212, 237, 218),
            egui::Color32::from_rgb(21, 87, 36),
        ),
    }
}

fn icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Error => egui_phosphor::regular::WARNING_CIRCLE,
        NotificationKind::Success => egui_phosphor::regular::CHECK_CIRCLE,
    }
}

/// Render a `flash-message` element as a full-width banner.
///
/// Elements whose class does not name a known kind are skipped.
pub fn view(ui: &mut egui::Ui, element: &Element) {
    let Some(kind) = NotificationKind::from_class_name(&element.class_name) else {
        return;
    };
    let (fill, text) = palette(kind);

    egui::Frame::new()
        .fill(fill)
        .stroke(egui::Stroke::new(1.0, text.gamma_multiply(0.4)))
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(icon(kind)).color(text));
                ui.label(egui::RichText::new(&element.text).color(text));
            });
        });
}
