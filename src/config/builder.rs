use crate::config::{merge::Merge, types::*};
use crate::constants::{COMMIT_BASE_ENV_VAR, GIT_ENV_VAR, VERSIONS_ENV_VAR};
use anyhow::{Result, anyhow};
use std::path::PathBuf;

type EnvLookup = Box<dyn Fn(&str) -> Option<String>>;

pub struct ConfigBuilder {
    config_input: ConfigInput,
    env: EnvLookup,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config_input: ConfigInput::default(),
            env: Box::new(|key| std::env::var(key).ok()),
        }
    }

    pub fn with_file(mut self, file_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(file_input);
        self
    }

    pub fn with_cli_args(mut self, cli_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(cli_input);
        self
    }

    /// Replace the process environment as the source of `AV_*` fallbacks
    pub fn with_env_lookup(mut self, lookup: impl Fn(&str) -> Option<String> + 'static) -> Self {
        self.env = Box::new(lookup);
        self
    }

    pub fn resolve(self) -> Result<Config> {
        let defaults = Config::default();

        Ok(Config {
            git: self.resolve_git(&defaults.git)?,
            directories: self.resolve_directories(&defaults.directories),
        })
    }

    fn env_var(&self, key: &str) -> Option<String> {
        (self.env)(key).filter(|value| !value.is_empty())
    }

    fn resolve_git(&self, defaults: &Git) -> Result<Git> {
        let git_input = self.config_input.git.as_ref();

        let executable = git_input
            .and_then(|g| g.executable.as_ref())
            .cloned()
            .or_else(|| self.env_var(GIT_ENV_VAR).map(PathBuf::from))
            .unwrap_or_else(|| defaults.executable.clone());

        if executable.as_os_str().is_empty() {
            return Err(anyhow!("Git executable path must not be empty"));
        }

        let commit_base = git_input
            .and_then(|g| g.commit_base.as_ref())
            .cloned()
            .or_else(|| self.env_var(COMMIT_BASE_ENV_VAR))
            .unwrap_or_else(|| defaults.commit_base.clone());

        if commit_base.trim().is_empty() {
            return Err(anyhow!("Base commit must not be empty"));
        }

        Ok(Git {
            executable,
            commit_base,
        })
    }

    fn resolve_directories(&self, defaults: &Directories) -> Directories {
        let dir_input = self.config_input.directories.as_ref();

        Directories {
            versions: dir_input
                .and_then(|d| d.versions.as_ref())
                .cloned()
                .or_else(|| self.env_var(VERSIONS_ENV_VAR).map(PathBuf::from))
                .unwrap_or_else(|| defaults.versions.clone()),
        }
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
