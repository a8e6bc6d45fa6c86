use maud::{html, Markup, Render};
use tracing::warn;

use crate::{
    config::LinkTarget,
    url::{is_internal_url, use_base_url, BaseUrl},
};

use super::ExternalLinkIcon;

pub struct FooterLink<'a> {
    link: &'a LinkTarget,
    base_url: &'a BaseUrl,
}

impl<'a> FooterLink<'a> {
    pub fn new(link: &'a LinkTarget, base_url: &'a BaseUrl) -> Self {
        Self { link, base_url }
    }

    fn href(&self) -> Option<&'a str> {
        self.link.href.as_deref().filter(|href| !href.is_empty())
    }

    /// Where the anchor points. `href` wins over `to`.
    pub fn destination(&self) -> Option<String> {
        match self.href() {
            Some(href) if self.link.prepend_base_url_to_href => {
                use_base_url(self.base_url, Some(href), true)
            }
            Some(href) => Some(href.to_string()),
            None => use_base_url(self.base_url, self.link.to.as_deref(), false),
        }
    }

    /// Whether the label gets the external-link glyph. Decided on the
    /// configured `href`, before any base path is prepended.
    pub fn is_external(&self) -> bool {
        self.href().is_some_and(|href| !is_internal_url(href))
    }
}

impl Render for FooterLink<'_> {
    fn render(&self) -> Markup {
        let destination = self.destination();
        if destination.is_none() {
            warn!(label = %self.link.label, "Footer link has neither `to` nor `href`");
        }

        let opens_elsewhere = destination
            .as_deref()
            .is_some_and(|dest| !is_internal_url(dest));
        let attrs = &self.link.attrs;
        let target = attrs
            .target
            .as_deref()
            .or(opens_elsewhere.then_some("_blank"));
        let rel = attrs
            .rel
            .as_deref()
            .or(opens_elsewhere.then_some("noopener noreferrer"));

        html! {
            a.footer__link-item
                href=[destination]
                target=[target]
                rel=[rel]
                title=[attrs.title.as_deref()]
                aria-label=[attrs.aria_label.as_deref()]
            {
                @if self.is_external() {
                    span {
                        (self.link.label)
                        (ExternalLinkIcon)
                    }
                } @else {
                    (self.link.label)
                }
            }
        }
    }
}
