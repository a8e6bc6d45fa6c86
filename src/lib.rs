//! Server-rendered documentation site footer: a logo block, configurable link
//! columns and an optional copyright notice, driven by the site's theme config.

pub mod config;
pub mod url;
pub mod views;

pub use config::SiteConfig;
pub use views::Footer;
