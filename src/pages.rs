//! Page generators: one body renderer per [`Page`].
//!
//! Each generator is a pure function of the [`PageContext`]: it reads the
//! content store through the context's resolver and returns a Maud fragment.
//! [`render_page`] picks the generator for the context's page and wraps the
//! result with the shared shell from [`crate::layout`].
//!
//! Two structures recur across pages:
//!
//! - **Claim cards**: every claim renders its full 2×3 matrix (conservative and
//!   progressive rows, strawman/steelman/reasonable columns) plus the
//!   convergence line. A framed build marks the row matching the framing's lean
//!   as `active`; it never hides the other row.
//! - **Framed fragments**: text that differs per framing. Under the neutral
//!   framing both constituent framings render side by side; any other framing
//!   renders its single view.

use crate::axis::{Lean, Page};
use crate::content::{Claim, ContentNode, MatrixLabels, Strength, Table};
use crate::layout::{PageContext, assemble, prose, raw};
use crate::resolve::Resolver;
use maud::{Markup, html};

/// Render the full document for the context's page.
pub fn render_page(ctx: &PageContext) -> Markup {
    let title = ctx.t(ctx.content.nav.label(ctx.page));
    assemble(ctx, title, render_body(ctx))
}

/// Render only the page body, without the shell.
pub fn render_body(ctx: &PageContext) -> Markup {
    match ctx.page {
        Page::Home => render_home(ctx),
        Page::Biography => render_biography(ctx),
        Page::Analysis => render_analysis(ctx),
        Page::Methodology => render_methodology(ctx),
        Page::Sources => render_sources(ctx),
    }
}

// ============================================================================
// Pages
// ============================================================================

fn render_home(ctx: &PageContext) -> Markup {
    let content = ctx.content;
    let labels = &content.labels;

    html! {
        section.hero {
            div.hero-inner {
                h1.hero-headline { (raw(ctx.t(&content.hero.headline))) }
                p.hero-subhead { (raw(ctx.t(&content.hero.subhead))) }
                p.hero-tagline { (raw(ctx.t(&content.hero.tagline))) }
                a.btn.btn-primary.btn-large href=(ctx.href(Page::Analysis)) {
                    (raw(ctx.t(&labels.see_analysis)))
                }
            }
        }
        section.section.section-intro {
            div.section-inner {
                h2.section-headline { (raw(ctx.t(&content.intro.title))) }
                div.section-body { (prose(ctx.t(&content.intro.body))) }
            }
        }
        (claims_section(ctx, &labels.evidence))
        section.section.section-cta {
            div.section-inner {
                p.cta-text { (raw(ctx.t(&labels.verify_cta))) }
                a.btn.btn-secondary href=(ctx.href(Page::Sources)) {
                    (raw(ctx.t(&labels.view_sources)))
                }
            }
        }
    }
}

fn render_biography(ctx: &PageContext) -> Markup {
    let bio = &ctx.content.bio;
    let facts = ctx.resolver().list(&bio.facts);

    html! {
        (page_heading(ctx, &bio.headline, None))
        section.section.section-bio-summary {
            div.section-inner {
                table.bio-table {
                    @for [label, value] in facts {
                        tr {
                            td.bio-label { (raw(label)) }
                            td.bio-value { (raw(value)) }
                        }
                    }
                }
            }
        }
        section.section.section-perspective {
            div.section-inner {
                h2.section-headline { (raw(ctx.t(&ctx.content.labels.perspective))) }
                (framed_fragment(ctx, "perspective", &bio.perspective))
            }
        }
        (claims_section(ctx, &ctx.content.labels.key_claims))
    }
}

fn render_analysis(ctx: &PageContext) -> Markup {
    let content = ctx.content;
    let analysis = &content.analysis;
    let labels = &content.labels;

    let bayes_final = ctx
        .resolver()
        .list(&analysis.bayes.rows)
        .len()
        .checked_sub(1)
        .map(|last| (last, "final"));
    let decision_optimal = analysis.decision.highlight.map(|row| (row, "optimal"));

    html! {
        (page_heading(ctx, &analysis.headline, Some(&analysis.intro)))
        section.section.section-analysis {
            div.section-inner {
                div.analysis-section {
                    h2.analysis-section-title { (raw(ctx.t(&labels.chain))) }
                    pre.chain-diagram { (raw(ctx.t(&analysis.chain))) }
                }
                div.analysis-section {
                    h2.analysis-section-title { (raw(ctx.t(&labels.bayes))) }
                    (data_table(ctx, "bayes-table", &analysis.bayes, bayes_final))
                }
                div.analysis-section {
                    h2.analysis-section-title { (raw(ctx.t(&labels.decision))) }
                    (data_table(ctx, "decision-table", &analysis.decision, decision_optimal))
                    div.conclusion { (raw(ctx.t(&analysis.conclusion))) }
                }
                div.analysis-section {
                    h2.analysis-section-title { (raw(ctx.t(&labels.meta))) }
                    blockquote.key-question { (raw(ctx.t(&analysis.meta_question))) }
                    p.meta-note { (raw(ctx.t(&labels.meta_note))) }
                }
                div.analysis-section {
                    h2.analysis-section-title { (raw(ctx.t(&labels.reading))) }
                    (framed_fragment(ctx, "reading", &analysis.reading))
                }
            }
        }
        section.section.section-github-cta {
            div.section-inner {
                h3 { (raw(ctx.t(&labels.formalization))) }
                p { (raw(ctx.t(&labels.formalization_note))) }
                a.btn.btn-primary href=(content.site.repository) target="_blank" rel="noopener" {
                    (raw(ctx.t(&content.nav.github)))
                }
            }
        }
    }
}

fn render_methodology(ctx: &PageContext) -> Markup {
    let methodology = &ctx.content.methodology;

    html! {
        (page_heading(ctx, &methodology.headline, Some(&methodology.intro)))
        section.section.section-methodology {
            div.section-inner {
                @for section in &methodology.sections {
                    div.methodology-section {
                        h2.methodology-section-title { (raw(ctx.t(&section.title))) }
                        div.methodology-section-body { (prose(ctx.t(&section.body))) }
                    }
                }
            }
        }
    }
}

fn render_sources(ctx: &PageContext) -> Markup {
    let sources = &ctx.content.sources;

    html! {
        (page_heading(ctx, &ctx.content.nav.sources, Some(&sources.intro)))
        section.section.section-sources {
            div.section-inner {
                @for category in &sources.categories {
                    div.sources-category {
                        h2.sources-category-title { (raw(ctx.t(&category.title))) }
                        ul.sources-list {
                            @for item in &category.items {
                                li {
                                    a href=(item.url) target="_blank" rel="noopener" { (raw(&item.text)) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Shared fragments
// ============================================================================

/// Small hero with the page headline and optional intro line.
fn page_heading(ctx: &PageContext, headline: &ContentNode, intro: Option<&ContentNode>) -> Markup {
    html! {
        section.section-hero-small {
            div.section-inner {
                h1.page-headline { (raw(ctx.t(headline))) }
                @if let Some(intro) = intro {
                    p.page-intro { (raw(ctx.t(intro))) }
                }
            }
        }
    }
}

fn claims_section(ctx: &PageContext, heading: &ContentNode) -> Markup {
    html! {
        section.section.section-claims {
            div.section-inner {
                h2.section-headline { (raw(ctx.t(heading))) }
                div.claims-grid {
                    @for claim in &ctx.content.claims {
                        (claim_card(ctx, claim))
                    }
                }
            }
        }
    }
}

/// A claim's fact, its full 2×3 matrix, and the convergence line.
fn claim_card(ctx: &PageContext, claim: &Claim) -> Markup {
    let r = ctx.resolver();
    let labels = &ctx.content.labels;
    let columns = r.pick(&ctx.content.matrix.columns);
    let rows = r.pick(&ctx.content.matrix.rows);
    let active = ctx.axis.framing.and_then(|framing| framing.lean());

    html! {
        div.claim-card id=(claim.id) {
            div.claim-fact {
                div.claim-fact-label { (raw(r.text(&labels.fact))) }
                div.claim-fact-text { (raw(r.text(&claim.fact))) }
                div.claim-fact-source {
                    (raw(r.text(&labels.source))) ": " (raw(r.text(&claim.source)))
                }
            }
            div.matrix {
                div.matrix-header {
                    div.matrix-corner {}
                    @for strength in Strength::ALL {
                        div class={ "matrix-col-header " (strength.key()) } {
                            @if let Some(columns) = columns {
                                (raw(MatrixLabels::column(columns, strength)))
                            }
                        }
                    }
                }
                @for lean in Lean::ALL {
                    div class=(matrix_row_class(lean, active == Some(lean))) {
                        div.matrix-row-header {
                            @if let Some(rows) = rows {
                                (raw(MatrixLabels::row(rows, lean)))
                            }
                        }
                        @for strength in Strength::ALL {
                            div class={ "matrix-cell " (strength.key()) } {
                                (raw(r.text(claim.matrix.cell(lean, strength))))
                            }
                        }
                    }
                }
            }
            div.convergence {
                div.convergence-label { (raw(r.text(&labels.convergence))) }
                div.convergence-text { (raw(r.text(&claim.matrix.convergence))) }
            }
        }
    }
}

fn matrix_row_class(lean: Lean, active: bool) -> String {
    if active {
        format!("matrix-row {} active", lean.key())
    } else {
        format!("matrix-row {}", lean.key())
    }
}

/// Text that differs per framing.
///
/// The neutral framing renders each constituent's view in its own column;
/// every other axis renders the single resolved view.
fn framed_fragment(ctx: &PageContext, class: &str, node: &ContentNode) -> Markup {
    match ctx.axis.framing {
        Some(framing) if framing.is_neutral() => html! {
            div class={ (class) " framing-dual" } {
                @for &side in framing.constituents() {
                    @let resolver = Resolver::new(ctx.axis.with_framing(Some(side)));
                    div class={ "framing-column framing-" (side.key()) } {
                        h3.framing-column-title { (raw(ctx.framing_label(side))) }
                        (prose(resolver.text(node)))
                    }
                }
            }
        },
        _ => html! {
            div class=(class) {
                (prose(ctx.t(node)))
            }
        },
    }
}

/// A precomputed table, with an optional `(row, class)` mark.
fn data_table(ctx: &PageContext, class: &str, table: &Table, mark: Option<(usize, &str)>) -> Markup {
    let r = ctx.resolver();

    html! {
        table class=(class) {
            thead {
                tr {
                    @for cell in r.list(&table.header) {
                        th { (raw(cell)) }
                    }
                }
            }
            tbody {
                @for (i, row) in r.list(&table.rows).iter().enumerate() {
                    @let row_class = mark.filter(|&(marked, _)| marked == i).map(|(_, c)| c);
                    tr class=[row_class] {
                        @for cell in row {
                            td { (raw(cell)) }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
