// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Business logic: upload validation and deferred task scheduling.

pub mod guard;
pub mod timers;
