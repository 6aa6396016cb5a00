//! Configuration for scriptex with multi-source loading.
//!
//! Priority: CLI > Environment (`SCRIPTEX_*`) > File > Defaults.
//! With nothing set, extraction behaves exactly like the plain scan: dangling
//! `<script>` blocks are dropped.

mod loading;

use scriptex::UnterminatedPolicy;
use serde::{Deserialize, Serialize};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "scriptex.config.json";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "SCRIPTEX_";

/// Scriptex configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ScriptexConfig {
    /// Policy for an opening tag with no closing tag (drop, emit, error)
    #[serde(default)]
    pub unterminated: UnterminatedPolicy,
}
