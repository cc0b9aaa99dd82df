//! Backend configuration and factory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use tutorkit_core::traits::TutorBackend;

use crate::mock::MockTutor;
use crate::openai::OpenAiTutor;

/// Configuration for a single backend.
///
/// Note: Custom Debug impl masks API keys to prevent accidental exposure in logs.
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BackendConfig {
    OpenAi {
        #[serde(default)]
        api_key: String,
        #[serde(default)]
        model: Option<String>,
        #[serde(default)]
        base_url: Option<String>,
    },
    Mock,
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendConfig::OpenAi {
                api_key: _,
                model,
                base_url,
            } => f
                .debug_struct("OpenAi")
                .field("api_key", &"***")
                .field("model", model)
                .field("base_url", base_url)
                .finish(),
            BackendConfig::Mock => f.debug_struct("Mock").finish(),
        }
    }
}

/// Top-level tutorkit configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutorConfig {
    /// Which backend to use. Defaults to the mock backend.
    #[serde(default = "default_backend")]
    pub backend: BackendConfig,
}

fn default_backend() -> BackendConfig {
    BackendConfig::Mock
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Unset variables resolve to the empty string; an unterminated `${` is
/// kept verbatim.
fn resolve_env_vars(s: &str) -> String {
    let mut resolved = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        resolved.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            resolved.push_str(&rest[start..]);
            return resolved;
        };
        resolved.push_str(&std::env::var(&after[..end]).unwrap_or_default());
        rest = &after[end + 1..];
    }
    resolved.push_str(rest);
    resolved
}

fn resolve_backend_config(config: &BackendConfig) -> BackendConfig {
    match config {
        BackendConfig::OpenAi {
            api_key,
            model,
            base_url,
        } => BackendConfig::OpenAi {
            api_key: resolve_env_vars(api_key),
            model: model.clone(),
            base_url: base_url.as_ref().map(|u| resolve_env_vars(u)),
        },
        BackendConfig::Mock => BackendConfig::Mock,
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `tutorkit.toml` in the current directory
/// 2. `~/.config/tutorkit/config.toml`
///
/// Environment variable override: `TUTORKIT_OPENAI_KEY` replaces the
/// configured OpenAI key (and switches a default config onto OpenAI).
pub fn load_config() -> Result<TutorConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<TutorConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("tutorkit.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            global.exists().then_some(global)
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<TutorConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => TutorConfig::default(),
    };

    if let Ok(key) = std::env::var("TUTORKIT_OPENAI_KEY") {
        config.backend = match config.backend {
            BackendConfig::OpenAi {
                model, base_url, ..
            } => BackendConfig::OpenAi {
                api_key: key,
                model,
                base_url,
            },
            BackendConfig::Mock => BackendConfig::OpenAi {
                api_key: key,
                model: None,
                base_url: None,
            },
        };
    }

    config.backend = resolve_backend_config(&config.backend);
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("tutorkit"))
}

/// Create a backend instance from its configuration.
pub fn create_backend(config: &BackendConfig) -> Result<Arc<dyn TutorBackend>> {
    match config {
        BackendConfig::OpenAi {
            api_key,
            model,
            base_url,
        } => {
            let api_key = (!api_key.is_empty()).then(|| api_key.clone());
            let backend = OpenAiTutor::new(api_key, model.clone(), base_url.clone())?;
            Ok(Arc::new(backend))
        }
        BackendConfig::Mock => Ok(Arc::new(MockTutor::new())),
    }
}
