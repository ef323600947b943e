#![forbid(unsafe_code)]

//! Drag session configuration.
//!
//! Defaults suit native drag backends. Each field can be overridden from the
//! environment:
//!
//! | field                  | env var                     | default |
//! |------------------------|-----------------------------|---------|
//! | `defer_copy_hover`     | `SORTKIT_DEFER_COPY_HOVER`  | true    |
//! | `match_types`          | `SORTKIT_MATCH_TYPES`       | true    |
//! | `check_drop_on_commit` | `SORTKIT_CHECK_DROP`        | true    |
//!
//! Booleans accept `1/true/yes/on` and `0/false/no/off`; other values keep
//! the default.

use serde::{Deserialize, Serialize};

pub const ENV_DEFER_COPY_HOVER: &str = "SORTKIT_DEFER_COPY_HOVER";
pub const ENV_MATCH_TYPES: &str = "SORTKIT_MATCH_TYPES";
pub const ENV_CHECK_DROP: &str = "SORTKIT_CHECK_DROP";

/// Behaviour switches for a [`DragSession`](crate::session::DragSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Deliver the initial hover of a copy on the next tick instead of
    /// synchronously inside `begin_drag`.
    ///
    /// Some native backends end the drag immediately if a hover is
    /// delivered in the same tick as the drag start.
    pub defer_copy_hover: bool,
    /// Ignore hovers over slots whose type tag differs from the item's.
    pub match_types: bool,
    /// Consult `can_drop` again when dropping, rejecting the commit if the
    /// final position is disallowed.
    pub check_drop_on_commit: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            defer_copy_hover: true,
            match_types: true,
            check_drop_on_commit: true,
        }
    }
}

impl SessionConfig {
    /// Defaults overridden by the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by a custom environment lookup (for tests).
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = env_override_bool(&get_env, ENV_DEFER_COPY_HOVER) {
            config.defer_copy_hover = value;
        }
        if let Some(value) = env_override_bool(&get_env, ENV_MATCH_TYPES) {
            config.match_types = value;
        }
        if let Some(value) = env_override_bool(&get_env, ENV_CHECK_DROP) {
            config.check_drop_on_commit = value;
        }
        config
    }

    #[must_use]
    pub fn with_defer_copy_hover(mut self, defer: bool) -> Self {
        self.defer_copy_hover = defer;
        self
    }

    #[must_use]
    pub fn with_match_types(mut self, match_types: bool) -> Self {
        self.match_types = match_types;
        self
    }

    #[must_use]
    pub fn with_check_drop_on_commit(mut self, check: bool) -> Self {
        self.check_drop_on_commit = check;
        self
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn env_override_bool<F>(get_env: &F, key: &str) -> Option<bool>
where
    F: Fn(&str) -> Option<String>,
{
    get_env(key).and_then(|value| parse_bool(&value))
}
