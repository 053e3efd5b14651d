// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Upload form: file picker button, current selection, and submit button.

use eframe::egui;

use crate::models::selected_file::SelectedFile;

/// Messages emitted by the upload form view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadFormMsg {
    PickFile,
    Submit,
}

/// Text shown next to the picker for the current selection.
pub fn selection_label(files: &[SelectedFile]) -> String {
    match files {
        [] => "No file chosen".to_string(),
        [only] => only.name.clone(),
        [first, rest @ ..] => format!("{} (+{} more)", first.name, rest.len()),
    }
}

/// Render the form and return any messages triggered by user interaction.
///
/// The submit button is always enabled; validation happens on submit.
pub fn view(ui: &mut egui::Ui, files: &[SelectedFile], action: &str) -> Vec<UploadFormMsg> {
    let mut msgs = Vec::new();

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label("Upload an Excel (.xlsx) file");
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let pick = ui
                .button(format!(
                    "{} Choose file",
                    egui_phosphor::regular::FOLDER_OPEN
                ))
                .on_hover_text("Select a file to upload");
            if pick.clicked() {
                msgs.push(UploadFormMsg::PickFile);
            }

            let label = selection_label(files);
            let color = if files.is_empty() {
                egui::Color32::from_gray(150)
            } else {
                ui.visuals().text_color()
            };
            ui.label(egui::RichText::new(label).color(color));
        });

        ui.add_space(8.0);
        let submit = ui
            .button(format!("{} Upload", egui_phosphor::regular::UPLOAD_SIMPLE))
            .on_hover_text(format!("Submit to {action}"));
        if submit.clicked() {
            msgs.push(UploadFormMsg::Submit);
        }
    });

    msgs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_label_describes_selection() {
        assert_eq!(selection_label(&[]), "No file chosen");
        assert_eq!(
            selection_label(&[SelectedFile::named("a.xlsx")]),
            "a.xlsx"
        );
        assert_eq!(
            selection_label(&[
                SelectedFile::named("a.xlsx"),
                SelectedFile::named("b.xlsx"),
                SelectedFile::named("c.xlsx"),
            ]),
            "a.xlsx (+2 more)"
        );
    }
}
