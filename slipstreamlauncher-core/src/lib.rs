pub mod config;
pub mod launch;
pub mod logging;
pub mod paths;
pub mod settings;
pub mod store;

pub use config::LauncherConfig;
pub use launch::{build_launch_args, launch_executable};
pub use logging::init_logging;
pub use paths::LauncherPaths;
pub use settings::{launcher_root, AppSettings, SettingsStore, DEFAULT_EXECUTABLE_NAME};
pub use store::{AccountStore, StoreError, StoreResult};
