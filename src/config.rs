//! Configuration file support for srclib-pydep.
//!
//! Provides YAML-based configuration through `srclib-pydep.config.yml` files:
//! the pydep container environment, the dependency override table and
//! symbol-kind table additions. A built-in configuration is embedded in the
//! binary and user configuration is merged on top of it.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::dependency_listing::domain::{
    DependencyOverrides, OverrideEntry, PythonEnv, SymbolKind, SymbolKindTable,
};
use crate::shared::Result;

const CONFIG_FILENAME: &str = "srclib-pydep.config.yml";

const BUILTIN_CONFIG: &str = include_str!("../config/default.config.yml");

const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// Schema of `srclib-pydep.config.yml`.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub python: Option<PythonSection>,
    pub docker: Option<DockerSection>,
    pub overrides: Option<Vec<OverrideEntry>>,
    /// Extra or replacement symbol kinds, e.g. `DECORATOR: func`
    pub symbol_kinds: Option<HashMap<String, String>>,
    pub callable_kinds: Option<Vec<String>>,
    /// Top-level keys this version does not understand.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

#[derive(Debug, Deserialize, Default)]
pub struct PythonSection {
    pub base_image: Option<String>,
    pub python_version: Option<String>,
    pub pydep_version: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct DockerSection {
    pub binary: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Resolved settings the lister, resolver and container runner are built from.
#[derive(Debug, Clone)]
pub struct ListerConfig {
    pub python_env: PythonEnv,
    pub overrides: DependencyOverrides,
    pub symbol_kinds: SymbolKindTable,
    pub docker_binary: String,
    pub container_timeout: Duration,
}

impl Default for ListerConfig {
    fn default() -> Self {
        Self {
            python_env: PythonEnv::default(),
            overrides: DependencyOverrides::new(),
            symbol_kinds: SymbolKindTable::python(),
            docker_binary: "docker".to_string(),
            container_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ListerConfig {
    /// The defaults with the embedded configuration applied.
    pub fn builtin() -> Result<Self> {
        let file: ConfigFile =
            serde_yaml_ng::from_str(BUILTIN_CONFIG).context("Failed to parse built-in configuration")?;
        validate_config(&file)?;
        Self::default().merge(file)
    }

    /// Applies a configuration file on top of these settings.
    ///
    /// Scalars are replaced, override entries and symbol kinds are added
    /// (replacing entries with the same key).
    pub fn merge(mut self, file: ConfigFile) -> Result<Self> {
        if let Some(python) = file.python {
            if let Some(base_image) = python.base_image {
                self.python_env.base_image = base_image;
            }
            if let Some(python_version) = python.python_version {
                self.python_env.python_version = python_version;
            }
            if let Some(pydep_version) = python.pydep_version {
                self.python_env.pydep_version = pydep_version;
            }
        }

        if let Some(docker) = file.docker {
            if let Some(binary) = docker.binary {
                self.docker_binary = binary;
            }
            if let Some(secs) = docker.timeout_secs {
                self.container_timeout = Duration::from_secs(secs);
            }
        }

        if let Some(entries) = file.overrides {
            self.overrides.extend(entries);
        }

        if let Some(kinds) = file.symbol_kinds {
            for (name, kind) in kinds {
                self.symbol_kinds.insert(&name, parse_kind(&name, &kind)?);
            }
        }

        for name in file.callable_kinds.unwrap_or_default() {
            self.symbol_kinds.mark_callable(&name);
        }

        Ok(self)
    }
}

/// Loads the built-in configuration and merges user configuration on top.
///
/// An explicit path must exist; otherwise `dir` is searched for
/// `srclib-pydep.config.yml` and a missing file is not an error.
pub fn load_lister_config(explicit: Option<&Path>, dir: &Path) -> Result<ListerConfig> {
    let config = ListerConfig::builtin()?;

    let file = match explicit {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(dir)?,
    };

    match file {
        Some(file) => config.merge(file),
        None => Ok(config),
    }
}

/// Reads and validates one configuration file. A missing file is an error.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Cannot read config file: {}\n\n💡 Hint: Check the path given with --config.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Config file is not valid YAML: {}\n\n💡 Hint: Compare it with config/default.config.yml.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Looks for `srclib-pydep.config.yml` in `dir`; `Ok(None)` when there is none.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn parse_kind(name: &str, kind: &str) -> Result<SymbolKind> {
    match SymbolKind::parse(&kind.to_lowercase()) {
        Some(parsed) => Ok(parsed),
        None => bail!(
            "Invalid config: symbol_kinds.{} has unknown kind '{}'.\n\n\
             💡 Hint: Use one of package, module, field, func, var, type.",
            name,
            kind
        ),
    }
}

/// Rejects empty override keys, unknown symbol kinds and a zero timeout.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref overrides) = config.overrides {
        for (i, entry) in overrides.iter().enumerate() {
            for (field, value) in [
                ("repo", &entry.repo),
                ("unit", &entry.unit),
                ("unit_type", &entry.unit_type),
            ] {
                if value.trim().is_empty() {
                    bail!(
                        "Invalid config: overrides[{}].{} must not be empty.\n\n\
                         💡 Hint: Each override is keyed by repo, unit and unit_type.",
                        i,
                        field
                    );
                }
            }
        }
    }

    if let Some(ref kinds) = config.symbol_kinds {
        for (name, kind) in kinds {
            parse_kind(name, kind)?;
        }
    }

    if let Some(DockerSection {
        timeout_secs: Some(0),
        ..
    }) = &config.docker
    {
        bail!("Invalid config: docker.timeout_secs must be greater than 0.");
    }

    Ok(())
}

/// Unknown top-level keys are reported and otherwise ignored.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Ignoring unknown config field '{}'.",
            key
        );
    }
}
