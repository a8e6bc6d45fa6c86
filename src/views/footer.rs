use maud::{html, Markup, Render};
use tracing::{debug, trace};

use crate::{
    config::{FooterConfig, FooterStyle, LinkColumn, LinkItem, SiteConfig},
    url::BaseUrl,
};

use super::{FooterLink, FooterLogo, LogoSources};

/// Site footer. Renders nothing when the theme has no footer configured.
pub struct Footer<'a> {
    config: Option<&'a FooterConfig>,
    base_url: &'a BaseUrl,
}

impl<'a> Footer<'a> {
    pub fn new(config: Option<&'a FooterConfig>, base_url: &'a BaseUrl) -> Self {
        Self { config, base_url }
    }

    pub fn from_site(site: &'a SiteConfig) -> Self {
        Self::new(site.theme_config.footer.as_ref(), &site.base_url)
    }

    pub fn logo_sources(&self) -> Option<LogoSources> {
        self.config
            .map(|footer| LogoSources::resolve(&footer.logo, self.base_url))
    }
}

struct Column<'a> {
    index: usize,
    column: &'a LinkColumn,
    base_url: &'a BaseUrl,
}

impl Render for Column<'_> {
    fn render(&self) -> Markup {
        debug!(
            column = self.index,
            items = self.column.items.len(),
            "Rendering footer column"
        );

        html! {
            div."col footer__col" {
                @if let Some(title) = &self.column.title {
                    div.footer__title { (title) }
                }
                @if !self.column.items.is_empty() {
                    ul.footer__items {
                        @for (index, item) in self.column.items.iter().enumerate() {
                            (Item { index, item, base_url: self.base_url })
                        }
                    }
                }
            }
        }
    }
}

struct Item<'a> {
    index: usize,
    item: &'a LinkItem,
    base_url: &'a BaseUrl,
}

impl Render for Item<'_> {
    fn render(&self) -> Markup {
        trace!(key = %self.item.key(self.index), "Rendering footer item");

        match self.item {
            LinkItem::Html(html) => html! {
                li.footer__item { (html) }
            },
            LinkItem::Link(link) => html! {
                li.footer__item { (FooterLink::new(link, self.base_url)) }
            },
        }
    }
}

impl Render for Footer<'_> {
    #[tracing::instrument(skip_all)]
    fn render(&self) -> Markup {
        let Some(footer) = self.config else {
            debug!("No footer configured, skipping");
            return html! {};
        };

        let logo = &footer.logo;
        let sources = LogoSources::resolve(logo, self.base_url);
        let footer_logo = FooterLogo {
            url: sources.light.as_deref(),
            alt: logo.alt.as_deref(),
        };

        html! {
            footer.footer."footer--dark"[footer.style == FooterStyle::Dark] {
                div.container {
                    div.row {
                        div."col col--3" {
                            span.footer__logo-tagline { "Made with </> by" }
                            @if let Some(href) = logo.href.as_deref().filter(|href| !href.is_empty()) {
                                a.footerLogoLink href=(href) target="_blank" rel="noopener" {
                                    (footer_logo)
                                }
                            } @else {
                                (footer_logo)
                            }
                        }
                        div."col col--9" {
                            @if !footer.links.is_empty() {
                                div."row footer__links" {
                                    @for (index, column) in footer.links.iter().enumerate() {
                                        (Column { index, column, base_url: self.base_url })
                                    }
                                }
                            }
                        }
                    }
                    @if let Some(copyright) = &footer.copyright {
                        div.footer__copyright { (copyright) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(json: &str) -> SiteConfig {
        SiteConfig::from_json_str(json).unwrap()
    }

    #[test]
    fn no_footer_renders_nothing() {
        let site = site(r#"{"themeConfig": {}}"#);
        let footer = Footer::from_site(&site);

        assert_eq!(footer.render().into_string(), "");
        assert_eq!(footer.logo_sources(), None);
    }

    #[test]
    fn empty_footer_renders_bare_layout() {
        let site = site(r#"{"themeConfig": {"footer": {}}}"#);

        assert_eq!(
            Footer::from_site(&site).render().into_string(),
            concat!(
                r#"<footer class="footer"><div class="container"><div class="row">"#,
                r#"<div class="col col--3"><span class="footer__logo-tagline">Made with &lt;/&gt; by</span>"#,
                r#"<img class="footer__logo" loading="lazy"></div>"#,
                r#"<div class="col col--9"></div></div></div></footer>"#,
            )
        );
    }

    #[test]
    fn dark_style_adds_variant_class() {
        let site = site(r#"{"themeConfig": {"footer": {"style": "dark"}}}"#);
        let markup = Footer::from_site(&site).render().into_string();

        assert!(markup.starts_with(r#"<footer class="footer footer--dark">"#));
    }

    #[test]
    fn logo_with_href_is_wrapped_in_anchor() {
        let site = site(
            r#"{"baseUrl": "/docs/", "themeConfig": {"footer": {"logo": {
                "src": "img/logo.svg", "srcDark": "img/logo-dark.svg",
                "href": "https://acme.dev", "alt": "Acme"
            }}}}"#,
        );
        let footer = Footer::from_site(&site);
        let markup = footer.render().into_string();

        assert!(markup.contains(concat!(
            r#"<a class="footerLogoLink" href="https://acme.dev" target="_blank" rel="noopener">"#,
            r#"<img class="footer__logo" loading="lazy" alt="Acme" src="/docs/img/logo.svg"></a>"#,
        )));
        assert_eq!(
            footer.logo_sources().and_then(|sources| sources.dark),
            Some("/docs/img/logo-dark.svg".to_string())
        );
        assert!(!markup.contains("logo-dark"));
    }

    #[test]
    fn logo_without_href_is_not_wrapped() {
        let site = site(r#"{"themeConfig": {"footer": {"logo": {"src": "/img/logo.svg"}}}}"#);
        let markup = Footer::from_site(&site).render().into_string();

        assert!(markup.contains(r#"<img class="footer__logo" loading="lazy" src="/img/logo.svg">"#));
        assert!(!markup.contains("footerLogoLink"));
    }

    #[test]
    fn columns_render_titles_and_items() {
        let site = site(
            r#"{"themeConfig": {"footer": {"links": [
                {"title": "Docs", "items": [
                    {"label": "Intro", "to": "/intro"},
                    {"html": "<a href=\"/raw\">Raw</a>"}
                ]},
                {"items": []},
                {"title": ""}
            ]}}}"#,
        );
        let markup = Footer::from_site(&site).render().into_string();

        assert!(markup.contains(concat!(
            r#"<div class="row footer__links"><div class="col footer__col">"#,
            r#"<div class="footer__title">Docs</div><ul class="footer__items">"#,
            r#"<li class="footer__item"><a class="footer__link-item" href="/intro">Intro</a></li>"#,
            r#"<li class="footer__item"><a href="/raw">Raw</a></li></ul></div>"#,
            r#"<div class="col footer__col"></div>"#,
            r#"<div class="col footer__col"><div class="footer__title"></div></div></div>"#,
        )));
    }

    #[test]
    fn copyright_is_injected_verbatim() {
        let site = site(r#"{"themeConfig": {"footer": {"copyright": "<p>© Co</p>"}}}"#);
        let markup = Footer::from_site(&site).render().into_string();

        assert!(markup.ends_with(
            r#"<div class="footer__copyright"><p>© Co</p></div></div></footer>"#
        ));
    }
}
