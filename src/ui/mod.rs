// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for the upload page.
//! Renders the page document and wires user input to the MVU kernel.

pub mod components;

use std::time::Instant;

use eframe::egui;

use crate::models::document::{Element, ElementKind};
use crate::models::notification::{FLASH_CLASS, LOADER_CLASS};
use crate::mvu::{self, AppModel, Command, Msg};
use crate::ui::components::upload_form::{self, UploadFormMsg};
use crate::ui::components::{flash, loader};

/// Stateful egui application hosting the guarded upload form.
pub struct UploadApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl UploadApp {
    /// Wrap an initialized model and start the command workers.
    pub fn new(model: AppModel) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        // File dialogs block; two workers keep a submit from queuing behind one.
        for _ in 0..2 {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    let msg = mvu::run_command(cmd);
                    let _ = msg_tx.send(msg);
                }
            });
        }

        Self {
            model,
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
        }
    }
}

impl eframe::App for UploadApp {
    /// Drives a single UI frame.
    ///
    /// Drains worker replies, fires due notification removals, applies queued
    /// messages in arrival order, then renders the page body and status bar.
    /// A repaint is requested for the next pending removal so notifications
    /// disappear on time without user input.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Pull messages produced by the command workers.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }
        self.inbox.push(Msg::Tick(Instant::now()));

        let msgs = std::mem::take(&mut self.inbox);
        for msg in msgs {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading(format!(
                    "{} Excel Upload",
                    egui_phosphor::regular::FILE_XLS
                ));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_switch(ui);
                });
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_body(ui);
            });
        });

        if let Some(deadline) = self.model.timers.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(Instant::now()));
        }
    }

    /// Required by eframe 0.34; all rendering happens in `update`, which
    /// eframe still invokes immediately before this method each frame.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}
}

impl UploadApp {
    /// Render body elements in document order.
    fn render_body(&mut self, ui: &mut egui::Ui) {
        let mut form_msgs = Vec::new();
        for element in self.model.document.body() {
            match &element.kind {
                ElementKind::Form { action } if element.id == self.model.guard.form() => {
                    let files = self
                        .model
                        .document
                        .files(self.model.guard.file_input())
                        .unwrap_or(&[]);
                    form_msgs.extend(upload_form::view(ui, files, action));
                }
                _ => render_element(ui, element),
            }
            ui.add_space(8.0);
        }

        for msg in form_msgs {
            self.inbox.push(match msg {
                UploadFormMsg::PickFile => Msg::RequestPickFile,
                UploadFormMsg::Submit => Msg::SubmitRequested { at: Instant::now() },
            });
        }
    }

    /// Render latest status message and background work indicator.
    fn render_status(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let text = self.model.status.as_deref().unwrap_or("Ready");
            ui.label(egui::RichText::new(text).color(egui::Color32::from_gray(110)));
            if self.model.pending_commands > 0 {
                ui.add(egui::Spinner::new().size(14.0)).on_hover_text(format!(
                    "{} task(s) running in background",
                    self.model.pending_commands
                ));
            }
            let notices = self.model.document.elements_with_class(FLASH_CLASS).len();
            if notices > 0 {
                ui.label(
                    egui::RichText::new(format!("{notices} notice(s)"))
                        .small()
                        .color(egui::Color32::from_gray(130)),
                );
            }
        });
    }
}

/// Render a non-form element by class.
fn render_element(ui: &mut egui::Ui, element: &Element) {
    if element.has_class(FLASH_CLASS) {
        flash::view(ui, element);
    } else if element.has_class(LOADER_CLASS) {
        loader::view(ui, element);
    } else if !element.text.is_empty() {
        ui.label(element.text.as_str());
    }
}
