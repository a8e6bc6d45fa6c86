use maud::{html, Markup, Render};

use crate::{
    config::LogoConfig,
    url::{use_base_url, BaseUrl},
};

/// Logo URLs resolved for each color mode. A missing dark source falls back to
/// the light one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogoSources {
    pub light: Option<String>,
    pub dark: Option<String>,
}

impl LogoSources {
    pub fn resolve(logo: &LogoConfig, base_url: &BaseUrl) -> Self {
        let dark_src = logo.src_dark.as_deref().or(logo.src.as_deref());

        Self {
            light: use_base_url(base_url, logo.src.as_deref(), false),
            dark: use_base_url(base_url, dark_src, false),
        }
    }
}

pub struct FooterLogo<'a> {
    pub url: Option<&'a str>,
    pub alt: Option<&'a str>,
}

impl Render for FooterLogo<'_> {
    fn render(&self) -> Markup {
        html! {
            img.footer__logo loading="lazy" alt=[self.alt] src=[self.url];
        }
    }
}
