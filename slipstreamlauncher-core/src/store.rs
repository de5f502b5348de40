use crate::config::LauncherConfig;
use crate::launch::launch_executable;
use crate::paths::LauncherPaths;
use crate::settings::AppSettings;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("master executable not found: {}", .0.display())]
    MasterExecutableMissing(PathBuf),
    #[error("account '{0}' already exists")]
    DuplicateAccount(String),
    #[error("'{0}' is not a valid account name")]
    InvalidName(String),
    #[error("account directory already exists: {}", .0.display())]
    AccountDirectoryExists(PathBuf),
    #[error("unknown account '{0}'")]
    AccountNotFound(String),
    #[error("account executable not found: {}", .0.display())]
    ExecutableMissing(PathBuf),
    #[error("{action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to start {}: {source}", .path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

fn io_err<'a>(action: &'static str, path: &'a Path) -> impl FnOnce(io::Error) -> StoreError + 'a {
    move |source| StoreError::Io { action, path: path.to_path_buf(), source }
}

/// JSON-file-backed repository of accounts. Every operation re-reads the file,
/// mutates, and writes it back; nothing is cached between calls.
pub struct AccountStore {
    paths: LauncherPaths,
}

impl AccountStore {
    pub fn new(paths: LauncherPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &LauncherPaths {
        &self.paths
    }

    pub fn load(&self) -> StoreResult<LauncherConfig> {
        let path = &self.paths.config_file;
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(LauncherConfig::default()),
            Err(e) => return Err(io_err("read", path)(e)),
        };
        LauncherConfig::from_json(&text).map_err(|source| StoreError::Json { path: path.clone(), source })
    }

    pub fn save(&self, config: &LauncherConfig) -> StoreResult<()> {
        let path = &self.paths.config_file;
        let text = config.to_json().map_err(|source| StoreError::Json { path: path.clone(), source })?;
        fs::write(path, text).map_err(io_err("write", path))
    }

    /// A name is only ever used as a single directory directly under `accounts/`.
    fn is_valid_account_name(&self, name: &str) -> bool {
        !name.is_empty()
            && sanitize_filename::is_sanitized(name)
            && self.paths.account_dir(name).parent() == Some(self.paths.accounts_dir.as_path())
    }

    fn discard_account_dir(dir: &Path) {
        if let Err(e) = fs::remove_dir_all(dir) {
            warn!("Failed to clean up {}: {}", dir.display(), e);
        }
    }

    pub fn master_executable_available(&self) -> bool {
        self.paths.master_executable.is_file()
    }

    pub fn add_account(&self, name: &str) -> StoreResult<LauncherConfig> {
        let name = name.trim();
        if !self.is_valid_account_name(name) {
            return Err(StoreError::InvalidName(name.to_string()));
        }
        let master = &self.paths.master_executable;
        if !master.is_file() {
            return Err(StoreError::MasterExecutableMissing(master.clone()));
        }
        let mut config = self.load()?;
        if config.accounts.contains_key(name) {
            return Err(StoreError::DuplicateAccount(name.to_string()));
        }

        let dir = self.paths.account_dir(name);
        if dir.exists() {
            return Err(StoreError::AccountDirectoryExists(dir));
        }
        fs::create_dir_all(&self.paths.accounts_dir).map_err(io_err("create", &self.paths.accounts_dir))?;
        fs::create_dir(&dir).map_err(io_err("create", &dir))?;
        let exe = self.paths.account_executable(name);
        if let Err(e) = fs::copy(master, &exe) {
            Self::discard_account_dir(&dir);
            return Err(io_err("copy to", &exe)(e));
        }

        config.accounts.insert(name.to_string(), exe);
        if config.last_used.is_none() {
            config.last_used = Some(name.to_string());
        }
        if let Err(e) = self.save(&config) {
            Self::discard_account_dir(&dir);
            return Err(e);
        }
        info!("Added account '{}'", name);
        Ok(config)
    }

    /// Removes the account directory, then the entry. If the directory cannot be
    /// removed the config is left as it was. Entries whose name does not map to a
    /// directory under `accounts/` are unregistered without touching the disk.
    pub fn delete_account(&self, name: &str) -> StoreResult<LauncherConfig> {
        let mut config = self.load()?;
        if !config.accounts.contains_key(name) {
            return Ok(config);
        }
        if !self.is_valid_account_name(name) {
            warn!("Unregistering account {:?} without removing files: not a valid account name", name);
            config.remove_account(name);
            self.save(&config)?;
            return Ok(config);
        }
        let dir = self.paths.account_dir(name);
        match fs::remove_dir_all(&dir) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("Account directory {} was already gone", dir.display());
            }
            Err(e) => return Err(io_err("remove", &dir)(e)),
        }
        config.remove_account(name);
        self.save(&config)?;
        info!("Deleted account '{}'", name);
        Ok(config)
    }

    pub fn switch_account(&self, name: &str) -> StoreResult<LauncherConfig> {
        let mut config = self.load()?;
        if !config.accounts.contains_key(name) {
            return Err(StoreError::AccountNotFound(name.to_string()));
        }
        config.last_used = Some(name.to_string());
        self.save(&config)?;
        info!("Switched to account '{}'", name);
        Ok(config)
    }

    pub fn launch_account(&self, name: &str, settings: &AppSettings) -> StoreResult<LauncherConfig> {
        self.launch_account_with(name, |exe| launch_executable(exe, settings))
    }

    /// Selects `name` and hands its executable to `spawn`. Nothing is written if the
    /// account or its executable is missing.
    pub fn launch_account_with(
        &self,
        name: &str,
        spawn: impl FnOnce(&Path) -> io::Result<()>,
    ) -> StoreResult<LauncherConfig> {
        let mut config = self.load()?;
        let exe = config
            .accounts
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::AccountNotFound(name.to_string()))?;
        if !exe.is_file() {
            return Err(StoreError::ExecutableMissing(exe));
        }
        config.last_used = Some(name.to_string());
        self.save(&config)?;
        spawn(&exe).map_err(|source| StoreError::Spawn { path: exe.clone(), source })?;
        info!("Launched account '{}' ({})", name, exe.display());
        Ok(config)
    }
}
