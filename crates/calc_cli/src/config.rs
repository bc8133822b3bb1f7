use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use calc_engine::{EvalOptions, MAX_FRACTION_DIGITS};
use calc_session::{Placeholders, Resolver, ResolverOptions};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// File looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "selcalc.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelcalcConfig {
    pub previous_result_token: char,
    pub selection_index_token: char,
    pub max_fraction_digits: usize,
    pub max_exponent: u32,
}

impl Default for SelcalcConfig {
    fn default() -> Self {
        let placeholders = Placeholders::default();
        let eval = EvalOptions::default();
        Self {
            previous_result_token: placeholders.previous_result,
            selection_index_token: placeholders.selection_index,
            max_fraction_digits: eval.max_fraction_digits,
            max_exponent: eval.max_exponent,
        }
    }
}

impl SelcalcConfig {
    /// Load from an explicit path, or from `selcalc.toml` when present.
    ///
    /// A broken explicit file is an error. A broken discovered file is
    /// reported and replaced by defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            let config = Self::read(path)?;
            config.check()?;
            return Ok(config);
        }

        let path = Path::new(CONFIG_FILE_NAME);
        if !path.exists() {
            debug!("no {} found, using defaults", CONFIG_FILE_NAME);
            return Ok(Self::default());
        }

        match Self::read(path).and_then(|config| config.check().map(|_| config)) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!("{:#}. Using defaults.", e);
                Ok(Self::default())
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Write this configuration, refusing to clobber an existing file.
    pub fn save_new(&self, path: &Path) -> Result<()> {
        if path.exists() {
            bail!("{} already exists", path.display());
        }
        let content = toml::to_string_pretty(self).context("serializing config")?;
        fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("serializing config")
    }

    pub fn resolver_options(&self) -> ResolverOptions {
        ResolverOptions {
            placeholders: Placeholders {
                previous_result: self.previous_result_token,
                selection_index: self.selection_index_token,
            },
            eval: EvalOptions {
                max_exponent: self.max_exponent,
                max_fraction_digits: self.max_fraction_digits,
                ..EvalOptions::default()
            },
        }
    }

    fn check(&self) -> Result<()> {
        if self.max_fraction_digits > MAX_FRACTION_DIGITS {
            bail!(
                "max_fraction_digits is {}, the limit is {}",
                self.max_fraction_digits,
                MAX_FRACTION_DIGITS
            );
        }
        self.resolver_options()
            .placeholders
            .check()
            .context("invalid placeholder tokens")
    }

    pub fn build_resolver(&self) -> Result<Resolver> {
        Resolver::from_options(&self.resolver_options()).context("invalid placeholder tokens")
    }
}

/// Where `config --init` writes: the `--config` path, else `selcalc.toml`.
pub fn target_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}
