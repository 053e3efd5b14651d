// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring the page document, upload guard, timers, and commands.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;

use crate::logic::guard::{
    DeferredTask, GuardConfig, GuardOutcome, SubmitEvent, UploadGuard, run_due_tasks,
};
use crate::logic::timers::TimerQueue;
use crate::models::document::{Document, UploadPage, upload_page};
use crate::models::selected_file::SelectedFile;

/// Top-level application state.
pub struct AppModel {
    /// Page content rendered by the view.
    pub document: Document,
    /// Ids of the form and file input inside `document`.
    pub page: UploadPage,
    /// Guard bound to `page` at startup.
    pub guard: UploadGuard,
    /// Pending notification removals.
    pub timers: TimerQueue<DeferredTask>,
    /// Latest status line.
    pub status: Option<String>,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

impl AppModel {
    /// Build the upload page and bind the guard to its form and file input.
    pub fn new(config: GuardConfig) -> Result<Self> {
        let (document, page) = upload_page(&config.form_action)?;
        let guard = UploadGuard::init(&document, page.form, page.file_input, config)?;
        Ok(Self {
            document,
            page,
            guard,
            timers: TimerQueue::new(),
            status: None,
            pending_commands: 0,
        })
    }

    /// Current selection of the upload file input.
    pub fn selected_files(&self) -> &[SelectedFile] {
        self.document.files(self.page.file_input).unwrap_or(&[])
    }
}

/// Application messages routed through the update function.
#[derive(Debug)]
pub enum Msg {
    RequestPickFile,
    FilesPicked(Vec<PathBuf>),
    FilePickCancelled,
    SubmitRequested { at: Instant },
    Tick(Instant),
    SubmissionDispatched { action: String, file: SelectedFile },
}

/// Commands represent side-effects executed off the UI thread.
#[derive(Debug)]
pub enum Command {
    PickFile,
    Submit(SubmissionPayload),
}

/// Validated submission handed to the form's target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionPayload {
    /// Form `action` the submission goes to.
    pub action: String,
    /// The accepted file, unmodified.
    pub file: SelectedFile,
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::RequestPickFile => cmds.push(Command::PickFile),
        Msg::FilesPicked(paths) => {
            let files = paths.iter().map(|p| SelectedFile::from_path(p)).collect();
            if let Err(err) = model.document.set_files(model.page.file_input, files) {
                tracing::warn!("could not store file selection: {err:#}");
            }
        }
        // Keep the previous selection.
        Msg::FilePickCancelled => {}
        Msg::SubmitRequested { at } => {
            let mut event = SubmitEvent::new(model.page.form);
            let outcome =
                model
                    .guard
                    .handle_submit(&mut model.document, &mut model.timers, &mut event, at);
            if event.default_prevented() {
                return;
            }
            if let GuardOutcome::Accepted { file, .. } = outcome {
                match model.document.form_action(model.page.form) {
                    Ok(action) => cmds.push(Command::Submit(SubmissionPayload {
                        action: action.to_string(),
                        file,
                    })),
                    Err(err) => tracing::error!("cannot submit: {err:#}"),
                }
            }
        }
        Msg::Tick(now) => {
            run_due_tasks(&mut model.document, &mut model.timers, now);
        }
        Msg::SubmissionDispatched { action, file } => {
            model.status = Some(format!("Submitted {} to {}", file.name, action));
        }
    }
}

/// Execute a command and return the resulting message.
pub fn run_command(cmd: Command) -> Msg {
    match cmd {
        Command::PickFile => {
            let file = rfd::FileDialog::new()
                .set_title("Select a file to upload")
                .pick_file();
            match file {
                Some(path) => Msg::FilesPicked(vec![path]),
                None => Msg::FilePickCancelled,
            }
        }
        Command::Submit(payload) => {
            tracing::info!(
                action = %payload.action,
                file = %payload.file.name,
                "submission dispatched"
            );
            Msg::SubmissionDispatched {
                action: payload.action,
                file: payload.file,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::notification::{FLASH_CLASS, LOADER_CLASS, NotificationKind};
    use std::time::Duration;

    fn model() -> AppModel {
        AppModel::new(GuardConfig::default()).unwrap()
    }

    fn pick(model: &mut AppModel, path: &str) {
        let mut cmds = Vec::new();
        update(model, Msg::FilesPicked(vec![PathBuf::from(path)]), &mut cmds);
        assert!(cmds.is_empty());
    }

    #[test]
    fn pick_request_enqueues_command() {
        let mut model = model();
        let mut cmds = Vec::new();

        update(&mut model, Msg::RequestPickFile, &mut cmds);

        assert_eq!(cmds.len(), 1);
        assert!(matches!(cmds[0], Command::PickFile));
    }

    #[test]
    fn picked_path_becomes_selection_and_cancel_keeps_it() {
        let mut model = model();
        pick(&mut model, "/home/me/grades.xlsx");

        let mut cmds = Vec::new();
        update(&mut model, Msg::FilePickCancelled, &mut cmds);

        assert_eq!(model.selected_files().len(), 1);
        assert_eq!(model.selected_files()[0].name, "grades.xlsx");
    }

    #[test]
    fn submit_without_file_enqueues_nothing() {
        let mut model = model();
        let mut cmds = Vec::new();

        update(
            &mut model,
            Msg::SubmitRequested { at: Instant::now() },
            &mut cmds,
        );

        assert!(cmds.is_empty());
        let flashes = model.document.elements_with_class(FLASH_CLASS);
        assert_eq!(flashes.len(), 1);
        assert_eq!(flashes[0].class_name, NotificationKind::Error.class_name());
    }

    #[test]
    fn submit_uppercase_extension_is_rejected() {
        let mut model = model();
        pick(&mut model, "/tmp/data.XLSX");
        let mut cmds = Vec::new();

        update(
            &mut model,
            Msg::SubmitRequested { at: Instant::now() },
            &mut cmds,
        );

        assert!(cmds.is_empty());
        assert!(model.document.elements_with_class(LOADER_CLASS).is_empty());
    }

    #[test]
    fn valid_submit_dispatches_and_completes() {
        let mut model = model();
        pick(&mut model, "/tmp/report.xlsx");
        let mut cmds = Vec::new();

        update(
            &mut model,
            Msg::SubmitRequested { at: Instant::now() },
            &mut cmds,
        );

        assert_eq!(cmds.len(), 1, "accepted submit should enqueue command");
        assert_eq!(model.document.elements_with_class(LOADER_CLASS).len(), 1);

        let msg = run_command(cmds.pop().unwrap());
        let mut cmds2 = Vec::new();
        update(&mut model, msg, &mut cmds2);

        assert!(cmds2.is_empty());
        assert_eq!(
            model.status.as_deref(),
            Some("Submitted report.xlsx to /upload")
        );
    }

    #[test]
    fn ticks_expire_notifications_but_keep_loader() {
        let mut model = model();
        pick(&mut model, "/tmp/report.xlsx");
        let start = Instant::now();
        let mut cmds = Vec::new();
        update(&mut model, Msg::SubmitRequested { at: start }, &mut cmds);

        update(
            &mut model,
            Msg::Tick(start + Duration::from_millis(2999)),
            &mut cmds,
        );
        assert_eq!(model.document.elements_with_class(FLASH_CLASS).len(), 1);

        update(
            &mut model,
            Msg::Tick(start + Duration::from_millis(3000)),
            &mut cmds,
        );
        assert!(model.document.elements_with_class(FLASH_CLASS).is_empty());
        assert_eq!(model.document.elements_with_class(LOADER_CLASS).len(), 1);
    }

    #[test]
    fn pending_commands_track_submit_flow() {
        let mut model = model();
        pick(&mut model, "/tmp/report.xlsx");
        let mut cmds = Vec::new();

        update(
            &mut model,
            Msg::SubmitRequested { at: Instant::now() },
            &mut cmds,
        );

        // UI increments when dispatching commands to the worker.
        model.pending_commands += cmds.len();
        assert_eq!(model.pending_commands, 1);

        let msg = run_command(cmds.pop().unwrap());
        let mut cmds2 = Vec::new();
        update(&mut model, msg, &mut cmds2);
        model.pending_commands = model.pending_commands.saturating_sub(1);

        assert_eq!(model.pending_commands, 0);
    }

    #[test]
    fn custom_action_reaches_submission() {
        let config = GuardConfig {
            form_action: "https://grades.example/upload".into(),
            ..GuardConfig::default()
        };
        let mut model = AppModel::new(config).unwrap();
        pick(&mut model, "/tmp/report.xlsx");
        let mut cmds = Vec::new();

        update(
            &mut model,
            Msg::SubmitRequested { at: Instant::now() },
            &mut cmds,
        );

        match cmds.pop() {
            Some(Command::Submit(payload)) => {
                assert_eq!(payload.action, "https://grades.example/upload");
                assert_eq!(payload.file.name, "report.xlsx");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
