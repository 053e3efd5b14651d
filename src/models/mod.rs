// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: page document, selected files and notification kinds shared between UI and guard logic.

pub mod document;
pub mod notification;
pub mod selected_file;
