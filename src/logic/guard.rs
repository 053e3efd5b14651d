// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Pre-submit validation for the upload form.
//!
//! Responsibilities:
//! - Check that a file is selected and that its name ends with `.xlsx`.
//! - Cancel rejected submissions and surface an error flash notification.
//! - Announce accepted submissions with a success notification and a loader.
//!
//! Notifications remove themselves after a fixed lifetime through the
//! [`TimerQueue`]; the loader stays until the page goes away.

use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};

use crate::logic::timers::{TimerHandle, TimerQueue};
use crate::models::document::{Document, ElementId, ElementKind};
use crate::models::notification::{LOADER_CLASS, LOADER_LABEL, NotificationKind, SPINNER_CLASS};
use crate::models::selected_file::SelectedFile;

/// Literal suffix an accepted file name must end with (case-sensitive).
pub const REQUIRED_SUFFIX: &str = ".xlsx";
/// Default time a flash notification stays in the document.
pub const NOTIFICATION_LIFETIME: Duration = Duration::from_millis(3000);
/// Message shown once a submission is allowed through.
pub const SUCCESS_MESSAGE: &str = "File uploaded successfully! Processing...";

/// Runtime knobs for the guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardConfig {
    /// How long a flash notification stays before it is removed.
    pub notification_lifetime: Duration,
    /// Submission target written into the form.
    pub form_action: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            notification_lifetime: NOTIFICATION_LIFETIME,
            form_action: "/upload".to_string(),
        }
    }
}

/// Why a submission was blocked. `Display` is the user-facing text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UploadRejection {
    #[error("Please select a file before uploading.")]
    MissingFile,

    #[error("Invalid file format. Please upload an Excel (.xlsx) file.")]
    InvalidExtension { name: String },
}

/// Submit event delivered to the guard; cancellation is recorded on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitEvent {
    pub form: ElementId,
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new(form: ElementId) -> Self {
        Self {
            form,
            default_prevented: false,
        }
    }

    /// Stop the submission from being dispatched.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Result of running the guard on one submit event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Event targeted a form this guard is not bound to.
    Ignored,
    Rejected {
        reason: UploadRejection,
        notification: NotificationHandle,
    },
    Accepted {
        file: SelectedFile,
        notification: NotificationHandle,
        loader: ElementId,
    },
}

/// Deferred work scheduled by the guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeferredTask {
    RemoveElement(ElementId),
}

/// A displayed notification and its pending removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationHandle {
    pub element: ElementId,
    pub removal: TimerHandle,
}

/// Validation bound to exactly one form and one file input.
#[derive(Clone, Debug)]
pub struct UploadGuard {
    form: ElementId,
    file_input: ElementId,
    config: GuardConfig,
}

impl UploadGuard {
    /// Bind the guard to the given form and file input.
    ///
    /// Fails when either id is missing from `doc` or refers to the wrong
    /// kind of element.
    pub fn init(
        doc: &Document,
        form: ElementId,
        file_input: ElementId,
        config: GuardConfig,
    ) -> Result<Self> {
        doc.form_action(form)
            .context("Upload guard needs a form element")?;
        doc.files(file_input)
            .context("Upload guard needs a file input element")?;
        if config.notification_lifetime.is_zero() {
            bail!("Notification lifetime must be greater than zero");
        }
        tracing::debug!(?form, ?file_input, "upload guard bound");
        Ok(Self {
            form,
            file_input,
            config,
        })
    }

    pub fn form(&self) -> ElementId {
        self.form
    }

    pub fn file_input(&self) -> ElementId {
        self.file_input
    }

    /// Validate the current selection of the bound file input.
    pub fn validate(&self, doc: &Document) -> Result<SelectedFile, UploadRejection> {
        let files: &[SelectedFile] = match doc.files(self.file_input) {
            Ok(files) => files,
            Err(err) => {
                tracing::warn!("file input unavailable: {err:#}");
                &[]
            }
        };
        validate_selection(files).cloned()
    }

    /// Run the guard for one submit event.
    pub fn handle_submit(
        &self,
        doc: &mut Document,
        timers: &mut TimerQueue<DeferredTask>,
        event: &mut SubmitEvent,
        now: Instant,
    ) -> GuardOutcome {
        if event.form != self.form {
            return GuardOutcome::Ignored;
        }

        let lifetime = self.config.notification_lifetime;
        match self.validate(doc) {
            Ok(file) => {
                tracing::info!(file = %file.name, "upload accepted");
                let notification = show_notification(
                    doc,
                    timers,
                    SUCCESS_MESSAGE,
                    NotificationKind::Success,
                    now,
                    lifetime,
                );
                let loader = show_loader(doc);
                GuardOutcome::Accepted {
                    file,
                    notification,
                    loader,
                }
            }
            Err(reason) => {
                tracing::info!(?reason, "upload rejected");
                let notification = show_notification(
                    doc,
                    timers,
                    &reason.to_string(),
                    NotificationKind::Error,
                    now,
                    lifetime,
                );
                event.prevent_default();
                GuardOutcome::Rejected {
                    reason,
                    notification,
                }
            }
        }
    }
}

/// Check a file input selection. Only the first file is inspected.
pub fn validate_selection(files: &[SelectedFile]) -> Result<&SelectedFile, UploadRejection> {
    let file = files.first().ok_or(UploadRejection::MissingFile)?;
    if !file.has_suffix(REQUIRED_SUFFIX) {
        return Err(UploadRejection::InvalidExtension {
            name: file.name.clone(),
        });
    }
    Ok(file)
}

/// Insert a flash notification as the first body child and schedule its removal.
pub fn show_notification(
    doc: &mut Document,
    timers: &mut TimerQueue<DeferredTask>,
    message: &str,
    kind: NotificationKind,
    now: Instant,
    lifetime: Duration,
) -> NotificationHandle {
    let element = doc.create_element(ElementKind::Container, kind.class_name(), message);
    let element = doc.prepend(element);
    let removal = timers.schedule(now, lifetime, DeferredTask::RemoveElement(element));
    NotificationHandle { element, removal }
}

/// Remove a notification right away and cancel its scheduled removal.
///
/// Returns false when the notification was already gone.
#[allow(dead_code)]
pub fn dismiss_notification(
    doc: &mut Document,
    timers: &mut TimerQueue<DeferredTask>,
    handle: NotificationHandle,
) -> bool {
    timers.cancel(handle.removal);
    doc.remove(handle.element)
}

/// Append the loader (spinner plus caption) at the end of the body.
pub fn show_loader(doc: &mut Document) -> ElementId {
    let mut loader = doc.create_element(ElementKind::Container, LOADER_CLASS, "");
    let spinner = doc.create_element(ElementKind::Spinner, SPINNER_CLASS, "");
    let label = doc.create_element(ElementKind::Label, "", LOADER_LABEL);
    loader.children.push(spinner);
    loader.children.push(label);
    doc.append(loader)
}

/// Run every deferred task due at `now`. Returns how many fired.
pub fn run_due_tasks(
    doc: &mut Document,
    timers: &mut TimerQueue<DeferredTask>,
    now: Instant,
) -> usize {
    let due = timers.take_due(now);
    for task in &due {
        match task {
            DeferredTask::RemoveElement(id) => {
                let removed = doc.remove(*id);
                tracing::trace!(?id, removed, "deferred removal fired");
            }
        }
    }
    due.len()
}
