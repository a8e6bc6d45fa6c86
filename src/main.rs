use std::{io::Write as _, path::PathBuf};

use eyre::Context as _;
use docs_footer::{Footer, SiteConfig};
use maud::Render as _;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn setup_tracing() -> color_eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to install tracing subscriber: {e}"))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    setup_tracing()?;

    let config_path = std::env::var("SITE_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("docusaurus.config.json"));

    let site = SiteConfig::load(&config_path)?;
    info!(path = %config_path.display(), base_url = %site.base_url, "Loaded site config");

    if site.theme_config.footer.is_none() {
        info!("No footer configured, nothing to render");
        return Ok(());
    }

    let markup = Footer::from_site(&site).render().into_string();

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(markup.as_bytes())
        .context("Failed to write footer markup")?;
    stdout.flush()?;

    Ok(())
}
