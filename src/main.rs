// Stratos Neural entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Ensure config files exist, load config
// 3. Open the preference store
// 4. Resolve the theme preference
// 5. Initialize the session store
// 6. Create mpsc channels
// 7. Create the toast bus
// 8. Spawn app logic task
// 9. Run the TUI event loop (blocking until user quits)
// 10. Cleanup on exit

use stratos::app;
use stratos::config;
use stratos::prefs;
use stratos::session;
use stratos::theme;
use stratos::toast;
use stratos::tui;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing (log to file, not terminal)
    init_tracing()?;
    info!("Stratos Neural starting up");

    // 2. Ensure config files exist, load config
    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: tick={}ms, theme={}, launch_delay={}ms",
        config.ui.tick_ms, config.theme.default, config.analysis.launch_delay_ms
    );

    // 3. Open the preference store
    let prefs_path = resolve_prefs_path(&config)?;
    let store = Arc::new(
        prefs::PrefStore::open(&prefs_path.to_string_lossy())
            .with_context(|| format!("failed to open preference store at {}", prefs_path.display()))?,
    );
    info!("Preference store opened at {}", prefs_path.display());

    // 4. Resolve the theme preference
    let mut theme_manager = theme::ThemeManager::new(
        config.theme.options(),
        Arc::clone(&store),
        Box::new(theme::EnvScheme),
    );
    let applied = theme_manager.resolve();
    info!("Theme resolved: {:?}", applied);

    // 5. Initialize the session store
    let session_store = session::SessionStore::new();
    let session = session_store.handle();

    // 6. Create mpsc channels
    let (cmd_tx, cmd_rx) = mpsc::channel(64);
    let (ui_tx, ui_rx) = mpsc::channel(64);

    // 7. Create the toast bus
    let toasts = toast::ToastBus::new();

    // 8. Spawn app logic task
    let app_state = app::AppState::new(config.clone(), session, theme_manager, toasts.clone());
    let app_handle = tokio::spawn(async move {
        if let Err(e) = app::run(cmd_rx, ui_tx, app_state).await {
            error!("Application loop error: {}", e);
        }
    });

    // 9. Run the TUI event loop (blocking until user quits)
    info!("Application ready");
    if let Err(e) = tui::run(ui_rx, cmd_tx, toasts, config.ui.tick_ms).await {
        error!("TUI error: {}", e);
    }

    // 10. Cleanup: close the session store so pending handles fail fast,
    //     then wait for the app task to drain (with timeout).
    session_store.close();
    let _ = tokio::time::timeout(std::time::Duration::from_secs(5), async {
        let _ = app_handle.await;
    })
    .await;

    info!("Stratos Neural shut down cleanly");
    Ok(())
}

/// Pick the preference database path: explicit config value if set,
/// otherwise the platform data directory.
fn resolve_prefs_path(config: &config::Config) -> anyhow::Result<PathBuf> {
    if !config.storage.prefs_path.is_empty() {
        return Ok(PathBuf::from(&config.storage.prefs_path));
    }
    let dir = match directories::ProjectDirs::from("", "", "stratos") {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => std::env::temp_dir().join("stratos"),
    };
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create data directory {}", dir.display()))?;
    Ok(dir.join("prefs.db"))
}

/// Initialize tracing to log to a file (not the terminal, which is used by the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("stratos.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stratos=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
