// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Environment overrides for the guard configuration.

use std::time::Duration;

use anyhow::{Context, Result, bail};

use crate::logic::guard::GuardConfig;

/// Overrides the form's submission target.
pub const ENV_FORM_ACTION: &str = "XLSXGUARD_FORM_ACTION";
/// Overrides the flash notification lifetime, in milliseconds.
pub const ENV_NOTIFICATION_MS: &str = "XLSXGUARD_NOTIFICATION_MS";

/// Load the configuration from process environment variables.
pub fn from_env() -> Result<GuardConfig> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Build a configuration from an arbitrary key lookup, falling back to defaults.
pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<GuardConfig> {
    let mut config = GuardConfig::default();

    if let Some(action) = lookup(ENV_FORM_ACTION) {
        let action = action.trim();
        if action.is_empty() {
            bail!("{ENV_FORM_ACTION} must not be empty");
        }
        config.form_action = action.to_string();
    }

    if let Some(raw) = lookup(ENV_NOTIFICATION_MS) {
        let millis: u64 = raw
            .trim()
            .parse()
            .with_context(|| format!("{ENV_NOTIFICATION_MS} must be a whole number, got {raw:?}"))?;
        config.notification_lifetime = Duration::from_millis(millis);
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, GuardConfig::default());
        assert_eq!(config.notification_lifetime, Duration::from_millis(3000));
    }

    #[test]
    fn overrides_are_applied() {
        let config = from_lookup(lookup(&[
            (ENV_FORM_ACTION, " /reports/upload "),
            (ENV_NOTIFICATION_MS, "1500"),
        ]))
        .unwrap();

        assert_eq!(config.form_action, "/reports/upload");
        assert_eq!(config.notification_lifetime, Duration::from_millis(1500));
    }

    #[test]
    fn bad_lifetime_is_reported() {
        let err = from_lookup(lookup(&[(ENV_NOTIFICATION_MS, "3s")])).unwrap_err();

        assert!(err.to_string().contains(ENV_NOTIFICATION_MS));
    }

    #[test]
    fn blank_action_is_rejected() {
        assert!(from_lookup(lookup(&[(ENV_FORM_ACTION, "  ")])).is_err());
    }
}
