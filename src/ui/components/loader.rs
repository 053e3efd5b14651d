// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Processing indicator shown after a submission goes through.

use eframe::egui;

use crate::models::document::{Element, ElementKind};

/// Render a `loader` element: a spinner per spinner child, then its caption.
pub fn view(ui: &mut egui::Ui, element: &Element) {
    ui.horizontal(|ui| {
        for child in &element.children {
            match child.kind {
                ElementKind::Spinner => {
                    ui.add(egui::Spinner::new().size(18.0));
                }
                ElementKind::Label => {
                    ui.label(egui::RichText::new(&child.text).strong());
                }
                _ => {}
            }
        }
    });
}
