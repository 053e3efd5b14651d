// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Application entry point wiring logging, configuration and egui/eframe to launch the upload window.

pub mod config;

use anyhow::{Result, anyhow};
use eframe::egui;
use egui_phosphor::Variant;

use crate::mvu::AppModel;
use crate::ui::UploadApp;

/// Install the `tracing` subscriber, honoring `RUST_LOG` and defaulting to `info`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Bootstrap the desktop application and run the main egui event loop.
///
/// The upload guard is bound once here, before the first frame.
pub fn run() -> Result<()> {
    let config = config::from_env()?;
    tracing::info!(action = %config.form_action, "starting upload window");
    let model = AppModel::new(config)?;

    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 420.0])
            .with_min_inner_size([420.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Excel Upload",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(UploadApp::new(model)))
        }),
    )
    .map_err(|err| anyhow!("UI event loop failed: {err}"))
}
