use crate::config::{DEFAULT_CONFIG_FILE, ENV_PREFIX, ScriptexConfig};
use crate::error::{ConfigError, Result, ResultExt};
use figment::{
    Figment,
    error::Kind,
    providers::{Env, Format as _, Json, Serialized, Toml, Yaml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

impl ScriptexConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    ///
    /// An explicit `--config` path is resolved against `cwd`; without one,
    /// [`DEFAULT_CONFIG_FILE`] is read from `cwd` when present.
    pub fn load(args: &crate::cli::Cli, cwd: &Path) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let config_file = Self::config_file(args.config.as_deref(), cwd)?;
        if let Some(path) = &config_file {
            debug!(path = %path.display(), "loading config file");
            figment = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => figment.merge(Toml::file(path)),
                Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
                _ => figment.merge(Json::file(path)),
            };
        }

        // SCRIPTEX_UNTERMINATED=emit etc.
        figment = figment.merge(Env::prefixed(ENV_PREFIX).only(&["unterminated"]));

        if let Some(unterminated) = args.unterminated {
            figment = figment.merge(Serialized::default(
                "unterminated",
                scriptex::UnterminatedPolicy::from(unterminated),
            ));
        }

        let e = match figment.extract::<Self>() {
            Ok(config) => return Ok(config),
            Err(e) => e,
        };

        match (&e.kind, config_file) {
            // Providers report unreadable or malformed files as a bare message
            (Kind::Message(message), Some(path)) => {
                let hint = format!("Fix the syntax of {} or pass --config <FILE>", path.display());
                Err(ConfigError::Parse {
                    path,
                    message: message.clone(),
                })
                .with_hint(hint)
            }
            _ => {
                let field = if e.path.is_empty() {
                    "configuration".to_string()
                } else {
                    e.path.join(".")
                };
                Err(ConfigError::InvalidValue {
                    field,
                    value: e.kind.to_string(),
                    hint: "Valid settings: unterminated = \"drop\" | \"emit\" | \"error\""
                        .to_string(),
                }
                .into())
            }
        }
    }

    /// Resolve which config file to read, if any.
    fn config_file(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
        match explicit {
            Some(path) => {
                let path = if path.is_absolute() {
                    path.to_path_buf()
                } else {
                    cwd.join(path)
                };
                if path.is_file() {
                    Ok(Some(path))
                } else {
                    Err(ConfigError::NotFound(path).into())
                }
            }
            None => {
                let default_path = cwd.join(DEFAULT_CONFIG_FILE);
                Ok(default_path.is_file().then_some(default_path))
            }
        }
    }
}
