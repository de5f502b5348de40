use once_cell::sync::OnceCell;
use std::fs;
use std::path::Path;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: OnceCell<()> = OnceCell::new();
static FILE_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// Console plus daily rolling file under `<root>/logs`. Later calls are ignored.
pub fn init_logging(root: &Path) {
    let _ = INIT.get_or_init(|| {
        let dir = root.join("logs");
        let _ = fs::create_dir_all(&dir);
        let file_appender = rolling::daily(&dir, "slipstreamlauncher.log");
        let (nb_file, guard) = tracing_appender::non_blocking(file_appender);
        let _ = FILE_GUARD.set(guard); // flushes on drop, so it lives as long as the process

        let console_layer = fmt::layer().with_target(false);
        let file_layer = fmt::layer().with_writer(nb_file).with_target(false).with_ansi(false);

        let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::registry()
            .with(env)
            .with(console_layer)
            .with(file_layer)
            .try_init();
    });
}
