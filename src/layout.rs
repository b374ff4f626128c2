//! Page shell shared by every generated document.
//!
//! [`assemble`] wraps a page body in the document head, the site header (banner,
//! framing switcher, language toggle), the navigation bar, and the footer. All
//! links stay inside the current axis combination except the two switchers,
//! which change exactly one axis.
//!
//! Authored content is trusted markup: resolved strings are inserted with
//! [`raw`] and never escaped. Only values computed here (hrefs, language codes)
//! go through Maud's escaping.

use crate::axis::{AxisSelector, AxisShape, Framing, Page};
use crate::content::{ContentNode, ContentStore};
use crate::naming::{STYLESHEET_FILENAME, page_filename};
use crate::resolve::Resolver;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

/// Everything a page renderer needs: the content, the build's axes, and where
/// this document sits on them.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub content: &'a ContentStore,
    pub shape: &'a AxisShape,
    pub page: Page,
    pub axis: AxisSelector,
}

impl<'a> PageContext<'a> {
    pub fn new(
        content: &'a ContentStore,
        shape: &'a AxisShape,
        page: Page,
        axis: AxisSelector,
    ) -> Self {
        Self {
            content,
            shape,
            page,
            axis,
        }
    }

    pub fn resolver(&self) -> Resolver {
        Resolver::new(self.axis)
    }

    /// Resolve a node under this page's axis combination.
    pub fn t<'n>(&self, node: &'n ContentNode) -> &'n str {
        self.resolver().text(node)
    }

    /// Link to another page under the same axis combination.
    pub fn href(&self, page: Page) -> String {
        page_filename(page, self.axis)
    }

    /// Display label of a framing, falling back to its key.
    pub fn framing_label(&self, framing: Framing) -> &'a str {
        self.content
            .framings
            .get(&framing)
            .map(|text| self.t(&text.label))
            .filter(|label| !label.is_empty())
            .unwrap_or(framing.key())
    }
}

/// Trusted authored markup, inserted verbatim.
pub fn raw(text: &str) -> PreEscaped<&str> {
    PreEscaped(text)
}

/// Multi-paragraph authored text rendered as CommonMark. Inline HTML passes through.
pub fn prose(text: &str) -> Markup {
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, Parser::new(text));
    PreEscaped(body_html)
}

// ============================================================================
// Document
// ============================================================================

/// Wrap a page body in the full document shell.
pub fn assemble(ctx: &PageContext, title: &str, body: Markup) -> Markup {
    let body_class = match ctx.axis.framing {
        Some(framing) => format!("site {} framing-{}", ctx.page.body_class(), framing.key()),
        None => format!("site {}", ctx.page.body_class()),
    };

    html! {
        (DOCTYPE)
        html lang=(ctx.axis.lang.code()) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (raw(title)) " — " (ctx.content.site.title) }
                link rel="stylesheet" href=(STYLESHEET_FILENAME);
            }
            body class=(body_class) {
                (site_header(ctx))
                (site_nav(ctx))
                main.main {
                    (body)
                }
                (site_footer(ctx))
            }
        }
    }
}

/// The root `index.html`: an immediate meta-refresh to `target`.
pub fn redirect_document(target: &str) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="UTF-8";
                meta http-equiv="refresh" content={ "0; url=" (target) };
                link rel="canonical" href=(target);
            }
            body {
                a href=(target) { (target) }
            }
        }
    }
}

// ============================================================================
// Shell components
// ============================================================================

/// Banner, framing switcher, and language toggle.
fn site_header(ctx: &PageContext) -> Markup {
    let other = ctx.shape.other_language(ctx.axis.lang);
    let toggle_href = page_filename(ctx.page, ctx.axis.with_lang(other));

    html! {
        header.site-header {
            div.header-inner {
                div.header-flag {
                    span.flag-stripe.red {}
                    span.flag-stripe.white {}
                    span.flag-stripe.blue {}
                }
                div.header-title { (raw(ctx.t(&ctx.content.site.header))) }
                div.header-controls {
                    @if ctx.shape.has_framing_axis() {
                        (framing_switcher(ctx))
                    }
                    a.lang-toggle href=(toggle_href) hreflang=(other.code()) { (other.label()) }
                }
            }
            @if let Some(framing) = ctx.axis.framing {
                (framing_banner(ctx, framing))
            }
        }
    }
}

fn framing_banner(ctx: &PageContext, framing: Framing) -> Markup {
    let banner = ctx
        .content
        .framings
        .get(&framing)
        .map(|text| ctx.t(&text.banner))
        .unwrap_or_default();

    html! {
        div class={ "framing-banner framing-" (framing.key()) } {
            span.framing-banner-label { (raw(ctx.framing_label(framing))) }
            @if !banner.is_empty() {
                span.framing-banner-text { (raw(banner)) }
            }
        }
    }
}

/// Links to this page in this language under every enabled framing.
fn framing_switcher(ctx: &PageContext) -> Markup {
    html! {
        nav.framing-switcher aria-label=(ctx.t(&ctx.content.labels.framing)) {
            @for &framing in &ctx.shape.framings {
                @let current = ctx.axis.framing == Some(framing);
                @let href = page_filename(ctx.page, ctx.axis.with_framing(Some(framing)));
                a.framing-link.current[current] href=(href) {
                    (raw(ctx.framing_label(framing)))
                }
            }
        }
    }
}

fn site_nav(ctx: &PageContext) -> Markup {
    let nav = &ctx.content.nav;
    let site = &ctx.content.site;

    html! {
        nav.nav {
            div.nav-inner {
                a.nav-logo href=(ctx.href(Page::Home)) { (site.name) }
                div.nav-links {
                    @for page in Page::ALL {
                        @let current = page == ctx.page;
                        a.nav-link.current[current] href=(ctx.href(page)) aria-current=[current.then_some("page")] {
                            (raw(ctx.t(nav.label(page))))
                        }
                    }
                    a.nav-link.nav-link-external href=(site.repository) target="_blank" rel="noopener" {
                        (raw(ctx.t(&nav.github)))
                    }
                }
            }
        }
    }
}

fn site_footer(ctx: &PageContext) -> Markup {
    let content = ctx.content;

    html! {
        footer.footer {
            div.footer-inner {
                p.footer-tagline { (raw(ctx.t(&content.footer.tagline))) }
                div.footer-links {
                    a.footer-link href=(ctx.href(Page::Methodology)) {
                        (raw(ctx.t(&content.nav.methodology)))
                    }
                    a.footer-link href=(ctx.href(Page::Sources)) {
                        (raw(ctx.t(&content.nav.sources)))
                    }
                    a.footer-link href=(content.site.repository) target="_blank" rel="noopener" {
                        (raw(ctx.t(&content.nav.github)))
                    }
                }
                p.footer-copy { (raw(ctx.t(&content.footer.copy))) }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::Lang;
    use crate::test_helpers::{content, hrefs, shape};

    fn render(shape: &AxisShape, page: Page, axis: AxisSelector, body: Markup) -> String {
        let content = content();
        let ctx = PageContext::new(&content, shape, page, axis);
        assemble(&ctx, "Test Title", body).into_string()
    }

    #[test]
    fn document_starts_with_doctype() {
        let s = shape(&[]);
        let doc = render(&s, Page::Home, AxisSelector::new(Lang::En, None), html! {});
        assert!(doc.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn html_lang_matches_selector() {
        let s = shape(&[]);
        let doc = render(&s, Page::Home, AxisSelector::new(Lang::Es, None), html! {});
        assert!(doc.contains(r#"<html lang="es">"#));
    }

    #[test]
    fn title_has_site_suffix() {
        let s = shape(&[]);
        let doc = render(&s, Page::Sources, AxisSelector::new(Lang::En, None), html! {});
        assert!(doc.contains("<title>Test Title — Nullius</title>"));
    }

    #[test]
    fn links_stylesheet() {
        let s = shape(&[]);
        let doc = render(&s, Page::Home, AxisSelector::new(Lang::En, None), html! {});
        assert!(doc.contains(r#"href="style.css""#));
    }

    #[test]
    fn language_toggle_keeps_page_and_framing() {
        let s = shape(&[Framing::Red, Framing::Blue]);
        let axis = AxisSelector::new(Lang::En, Some(Framing::Blue));
        let doc = render(&s, Page::Analysis, axis, html! {});
        assert!(doc.contains(r#"<a class="lang-toggle" href="analysis-blue-es.html" hreflang="es">ES</a>"#));
    }

    #[test]
    fn language_toggle_without_framing() {
        let s = shape(&[]);
        let doc = render(&s, Page::Home, AxisSelector::new(Lang::Es, None), html! {});
        assert!(doc.contains(r#"href="index-en.html" hreflang="en">EN</a>"#));
    }

    #[test]
    fn nav_links_every_page_under_same_axis() {
        let s = shape(&[Framing::Balanced, Framing::Conservative]);
        let axis = AxisSelector::new(Lang::Es, Some(Framing::Conservative));
        let doc = render(&s, Page::Biography, axis, html! {});
        for page in Page::ALL {
            let href = page_filename(page, axis);
            assert!(doc.contains(&format!(r#"href="{href}""#)), "missing {href}");
        }
    }

    #[test]
    fn nav_marks_current_page() {
        let s = shape(&[]);
        let doc = render(&s, Page::Methodology, AxisSelector::new(Lang::En, None), html! {});
        assert!(doc.contains(
            r#"<a class="nav-link current" href="methodology-en.html" aria-current="page">Methodology</a>"#
        ));
        assert!(doc.contains(r#"<a class="nav-link" href="sources-en.html">Sources</a>"#));
    }

    #[test]
    fn nav_uses_resolved_language() {
        let s = shape(&[]);
        let doc = render(&s, Page::Home, AxisSelector::new(Lang::Es, None), html! {});
        assert!(doc.contains("Biografía"));
        assert!(doc.contains("Metodología"));
    }

    #[test]
    fn unframed_build_has_no_framing_controls() {
        let s = shape(&[]);
        let doc = render(&s, Page::Home, AxisSelector::new(Lang::En, None), html! {});
        assert!(!doc.contains("framing-switcher"));
        assert!(!doc.contains("framing-banner"));
    }

    #[test]
    fn framing_switcher_lists_enabled_framings() {
        let s = shape(&[Framing::Balanced, Framing::Conservative, Framing::Progressive]);
        let axis = AxisSelector::new(Lang::En, Some(Framing::Progressive));
        let doc = render(&s, Page::Sources, axis, html! {});
        assert!(doc.contains(r#"href="sources-balanced-en.html""#));
        assert!(doc.contains(r#"href="sources-conservative-en.html""#));
        assert!(doc.contains(r#"<a class="framing-link current" href="sources-progressive-en.html">Progressive</a>"#));
    }

    #[test]
    fn framing_banner_reflects_framing() {
        let s = shape(&[Framing::Red, Framing::Blue]);
        let axis = AxisSelector::new(Lang::Es, Some(Framing::Red));
        let doc = render(&s, Page::Home, axis, html! {});
        assert!(doc.contains(r#"class="framing-banner framing-red""#));
        assert!(doc.contains("Rojo"));
        assert!(doc.contains("framing-red"));
    }

    #[test]
    fn body_fragment_is_not_escaped() {
        let s = shape(&[]);
        let body = html! { (raw("<strong>trusted</strong>")) };
        let doc = render(&s, Page::Home, AxisSelector::new(Lang::En, None), body);
        assert!(doc.contains("<main class=\"main\"><strong>trusted</strong></main>"));
    }

    #[test]
    fn every_link_in_shell_is_a_known_target() {
        let s = shape(&[Framing::Red, Framing::Blue]);
        let axis = AxisSelector::new(Lang::En, Some(Framing::Red));
        let doc = render(&s, Page::Home, axis, html! {});
        for href in hrefs(&doc) {
            let known = href == STYLESHEET_FILENAME
                || href.starts_with("https://")
                || crate::naming::parse_page_filename(&href)
                    .is_some_and(|parsed| s.contains(parsed.axis));
            assert!(known, "unexpected link target {href}");
        }
    }

    #[test]
    fn prose_renders_paragraphs_and_keeps_inline_html() {
        let html = prose("First <strong>bold</strong>.\n\nSecond.").into_string();
        assert!(html.contains("<p>First <strong>bold</strong>.</p>"));
        assert!(html.contains("<p>Second.</p>"));
    }

    #[test]
    fn redirect_refreshes_to_target() {
        let doc = redirect_document("index-balanced-en.html").into_string();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains(r#"http-equiv="refresh" content="0; url=index-balanced-en.html""#));
    }
}
