use std::path::Path;

use eyre::Context as _;
use serde::Deserialize;

use crate::{url::BaseUrl, views::TrustedHtml};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    #[serde(default)]
    pub base_url: BaseUrl,
    #[serde(default)]
    pub theme_config: ThemeConfig,
}

impl SiteConfig {
    pub fn from_json_str(raw: &str) -> color_eyre::Result<Self> {
        serde_json::from_str(raw).context("Failed to parse site config")
    }

    #[tracing::instrument(err)]
    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read site config at {}", path.display()))?;

        Self::from_json_str(&raw).with_context(|| format!("Invalid site config {}", path.display()))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub footer: Option<FooterConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FooterConfig {
    #[serde(default)]
    pub style: FooterStyle,
    #[serde(default)]
    pub logo: LogoConfig,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub links: Vec<LinkColumn>,
    #[serde(default, deserialize_with = "non_empty_html")]
    pub copyright: Option<TrustedHtml>,
}

/// Only `"dark"` selects the dark variant. Anything else, including `null`,
/// is light.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FooterStyle {
    Dark,
    #[default]
    Light,
}

impl<'de> Deserialize<'de> for FooterStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(style) if style == "dark" => Ok(FooterStyle::Dark),
            _ => Ok(FooterStyle::Light),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoConfig {
    pub src: Option<String>,
    pub src_dark: Option<String>,
    pub href: Option<String>,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LinkColumn {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "sequence_or_empty")]
    pub items: Vec<LinkItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawLinkItem")]
pub enum LinkItem {
    /// Markup provided by the site author, emitted verbatim.
    Html(TrustedHtml),
    Link(LinkTarget),
}

impl LinkItem {
    /// Identity of the item within its column: `href`, else `to`, else its index.
    pub fn key(&self, index: usize) -> String {
        match self {
            LinkItem::Link(LinkTarget {
                href: Some(href), ..
            }) => href.clone(),
            LinkItem::Link(LinkTarget { to: Some(to), .. }) => to.clone(),
            _ => index.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkTarget {
    pub label: String,
    pub to: Option<String>,
    pub href: Option<String>,
    pub prepend_base_url_to_href: bool,
    pub attrs: LinkAttrs,
}

/// Anchor attributes passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkAttrs {
    pub target: Option<String>,
    pub rel: Option<String>,
    pub title: Option<String>,
    pub aria_label: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLinkItem {
    html: Option<String>,
    label: Option<String>,
    to: Option<String>,
    href: Option<String>,
    #[serde(default)]
    prepend_base_url_to_href: bool,
    target: Option<String>,
    rel: Option<String>,
    title: Option<String>,
    #[serde(rename = "aria-label")]
    aria_label: Option<String>,
}

impl From<RawLinkItem> for LinkItem {
    fn from(raw: RawLinkItem) -> Self {
        match raw.html {
            Some(html) if !html.is_empty() => LinkItem::Html(TrustedHtml::new(html)),
            _ => LinkItem::Link(LinkTarget {
                label: raw.label.unwrap_or_default(),
                to: raw.to,
                href: raw.href,
                prepend_base_url_to_href: raw.prepend_base_url_to_href,
                attrs: LinkAttrs {
                    target: raw.target,
                    rel: raw.rel,
                    title: raw.title,
                    aria_label: raw.aria_label,
                },
            }),
        }
    }
}

fn non_empty_html<'de, D>(deserializer: D) -> Result<Option<TrustedHtml>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|html| !html.is_empty()).map(TrustedHtml::new))
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Column items render only when they form a list; any other value is empty.
fn sequence_or_empty<'de, D>(deserializer: D) -> Result<Vec<LinkItem>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        items @ serde_json::Value::Array(_) => {
            serde_json::from_value(items).map_err(serde::de::Error::custom)
        }
        _ => Ok(Vec::new()),
    }
}
