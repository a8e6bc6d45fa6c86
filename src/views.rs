use axum::response::IntoResponse;
use maud::{html, Markup, PreEscaped, Render};

pub use footer::Footer;
pub use link::FooterLink;
pub use logo::{FooterLogo, LogoSources};

mod footer;
mod link;
mod logo;

/// Markup supplied by the site author. Rendered without escaping, so it must
/// only ever come from site configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Render for TrustedHtml {
    fn render(&self) -> Markup {
        PreEscaped(self.0.clone())
    }
}

pub struct ExternalLinkIcon;

impl Render for ExternalLinkIcon {
    fn render(&self) -> Markup {
        html! {
            svg.iconExternalLink width="13.5" height="13.5" aria-hidden="true" viewBox="0 0 24 24" {
                path fill="currentColor" d="M21 13v10h-21v-19h12v2h-10v15h17v-8h2zm3-12h-10.988l4.035 4-6.977 7.07 2.828 2.828 6.977-7.07 4.125 4.172v-11z" {}
            }
        }
    }
}

impl IntoResponse for Footer<'_> {
    fn into_response(self) -> axum::response::Response {
        self.render().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trusted_html_is_not_escaped() {
        let html = TrustedHtml::new("<p>© Co</p>");
        assert_eq!(html.render().into_string(), "<p>© Co</p>");
    }

    #[test]
    fn external_link_icon_is_hidden_from_assistive_tech() {
        let icon = ExternalLinkIcon.render().into_string();
        assert!(icon.starts_with(r#"<svg class="iconExternalLink""#));
        assert!(icon.contains(r#"aria-hidden="true""#));
    }
}
