use portfolio::data;

/// Bundled config for mobile builds (iOS/Android)
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    // First try to load from .env file (desktop dev)
    if dotenvy::dotenv().is_ok() {
        return;
    }

    // Fall back to bundled config (mobile builds)
    load_bundled_config();
}

#[cfg(target_arch = "wasm32")]
fn load_dotenv() {
    load_bundled_config();
}

fn load_bundled_config() {
    for line in BUNDLED_CONFIG.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim();
            // Real env always wins over the bundled defaults
            if std::env::var(key).is_err() {
                // SAFETY: We're setting env vars at startup before any threads are spawned
                unsafe {
                    std::env::set_var(key, value);
                }
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

#[cfg(target_arch = "wasm32")]
fn init_tracing() {}

fn run_deploy_checks() -> Result<(), data::IntegrityError> {
    data::verify_integrity()?;
    tracing::info!(
        "content verified: {} projects, {} roles",
        data::DATA.projects.len(),
        data::DATA.experience.len()
    );
    for warning in data::config_warnings() {
        tracing::warn!("{warning}");
    }
    Ok(())
}

fn main() {
    load_dotenv();
    init_tracing();

    if let Err(err) = run_deploy_checks() {
        tracing::error!("deploy check failed: {err}");
        std::process::exit(1);
    }

    #[cfg(any(feature = "web", feature = "desktop", feature = "mobile"))]
    dioxus::launch(portfolio::ui::App);

    #[cfg(not(any(feature = "web", feature = "desktop", feature = "mobile")))]
    {
        match portfolio::assistant::active_provider() {
            Some(name) => tracing::info!("assistant provider: {name}"),
            None => tracing::warn!("assistant provider: none configured"),
        }
        tracing::info!("deploy checks passed");
    }
}
