use crate::settings::AppSettings;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// On-disk layout of the launcher, resolved against its root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherPaths {
    pub root: PathBuf,
    pub accounts_dir: PathBuf,
    pub config_file: PathBuf,
    pub master_executable: PathBuf,
    pub background_image: PathBuf,
    pub executable_name: String,
}

impl LauncherPaths {
    pub fn new(root: &Path, settings: &AppSettings) -> Self {
        let master_executable = match settings.master_executable.as_deref().map(str::trim) {
            Some(p) if !p.is_empty() => resolve(root, p),
            _ => root.join(&settings.executable_name),
        };
        Self {
            root: root.to_path_buf(),
            accounts_dir: root.join("accounts"),
            config_file: root.join("config.json"),
            master_executable,
            background_image: resolve(root, &settings.background_image),
            executable_name: settings.executable_name.clone(),
        }
    }

    pub fn account_dir(&self, name: &str) -> PathBuf {
        self.accounts_dir.join(name)
    }

    pub fn account_executable(&self, name: &str) -> PathBuf {
        self.account_dir(name).join(&self.executable_name)
    }

    pub fn ensure_dirs(&self) -> io::Result<()> {
        fs::create_dir_all(&self.accounts_dir)
    }
}

fn resolve(root: &Path, p: &str) -> PathBuf {
    let p = Path::new(p);
    if p.is_absolute() { p.to_path_buf() } else { root.join(p) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_is_adjacent_to_root() {
        let root = PathBuf::from("/srv/launcher");
        let paths = LauncherPaths::new(&root, &AppSettings::default());
        assert_eq!(paths.accounts_dir, root.join("accounts"));
        assert_eq!(paths.config_file, root.join("config.json"));
        assert_eq!(paths.master_executable, root.join("Slipstream.exe"));
        assert_eq!(paths.background_image, root.join("background.png"));
        assert_eq!(paths.account_executable("main"), root.join("accounts").join("main").join("Slipstream.exe"));
    }

    #[test]
    fn master_override_relative_and_blank() {
        let root = PathBuf::from("/srv/launcher");
        let mut settings = AppSettings { master_executable: Some("bin/Game.exe".into()), ..Default::default() };
        assert_eq!(LauncherPaths::new(&root, &settings).master_executable, root.join("bin/Game.exe"));
        settings.master_executable = Some("   ".into());
        assert_eq!(LauncherPaths::new(&root, &settings).master_executable, root.join("Slipstream.exe"));
    }
}
