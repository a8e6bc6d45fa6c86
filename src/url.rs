use std::fmt;

use serde::{Deserialize, Deserializer};

/// Site-wide path prefix. Always starts and ends with `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim_matches('/');
        if trimmed.is_empty() {
            Self("/".to_string())
        } else {
            Self(format!("/{trimmed}/"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self::new("/")
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::new(&raw))
    }
}

/// `scheme:` or protocol-relative `//`.
pub fn has_protocol(url: &str) -> bool {
    if url.starts_with("//") {
        return true;
    }

    match url.find(':') {
        Some(idx) => url[..idx]
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_'),
        None => false,
    }
}

pub fn is_internal_url(url: &str) -> bool {
    !url.is_empty() && !has_protocol(url)
}

/// Resolves `url` against the site base path.
///
/// Anchors, URLs carrying a protocol and paths already under the base are
/// left alone unless `force_prepend` is set, in which case the base path is
/// always prepended.
pub fn use_base_url(base: &BaseUrl, url: Option<&str>, force_prepend: bool) -> Option<String> {
    let url = url.filter(|url| !url.is_empty())?;
    let base = base.as_str();

    if force_prepend {
        return Some(prepend(base, url));
    }
    if url.starts_with('#') || has_protocol(url) {
        return Some(url.to_string());
    }
    // `/docs` under `/docs/`
    if url == base.trim_end_matches('/') {
        return Some(base.to_string());
    }
    if url.starts_with(base) {
        return Some(url.to_string());
    }

    Some(prepend(base, url))
}

fn prepend(base: &str, url: &str) -> String {
    let path = url.strip_prefix('/').unwrap_or(url);
    format!("{base}{path}")
}
