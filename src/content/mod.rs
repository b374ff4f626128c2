//! The authored content store.
//!
//! All site text lives in `store.toml`, compiled into the binary and
//! deserialized once at startup into a read-only [`ContentStore`]. Page
//! generators receive the store explicitly; nothing reads it as global state.
//!
//! ## Content Nodes
//!
//! The smallest unit of text is a [`ContentNode`], written in one of three shapes:
//!
//! ```toml
//! source = "FEC Q4 2025 Filing"                  # same in every language
//! title = { en = "Sources", es = "Fuentes" }     # per language
//!
//! [bio.perspective]                              # per framing, then per language
//! fallback = { en = "...", es = "..." }
//! views.conservative = { en = "...", es = "..." }
//! views.progressive = { en = "..." }
//! ```
//!
//! Nodes are turned into strings by [`crate::resolve::Resolver`]. Structured
//! per-language values (table rows, matrix labels) use [`LangMap`] directly.
//!
//! ## Validation
//!
//! Loading rejects unknown keys, framed nodes without views, views without any
//! language, duplicate claim ids, and table highlights past the last row. Missing
//! translations are not errors: they resolve to the fallback language or blank.

use crate::axis::{Framing, Lang, Lean, Page};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

pub(crate) const STORE_TOML: &str = include_str!("store.toml");

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Content validation error: {0}")]
    Invalid(String),
}

/// Values keyed by language.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct LangMap<T>(BTreeMap<Lang, T>);

impl<T> LangMap<T> {
    /// Exact lookup, no fallback.
    pub fn get(&self, lang: Lang) -> Option<&T> {
        self.0.get(&lang)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.values()
    }
}

impl<T> Default for LangMap<T> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<T> FromIterator<(Lang, T)> for LangMap<T> {
    fn from_iter<I: IntoIterator<Item = (Lang, T)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A piece of authored text, resolved against an axis combination at render time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ContentNode {
    /// Axis-independent text.
    Text(String),
    /// One string per language.
    Localized(LangMap<String>),
    /// Per-framing views, each per language, over an axis-independent fallback.
    Framed(Framed),
}

impl Default for ContentNode {
    fn default() -> Self {
        ContentNode::Text(String::new())
    }
}

/// The two-level variant of a [`ContentNode`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "FramedRepr")]
pub struct Framed {
    views: BTreeMap<Framing, LangMap<String>>,
    fallback: LangMap<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct FramedRepr {
    views: BTreeMap<Framing, LangMap<String>>,
    #[serde(default)]
    fallback: LangMap<String>,
}

impl TryFrom<FramedRepr> for Framed {
    type Error = String;

    fn try_from(repr: FramedRepr) -> Result<Self, Self::Error> {
        if repr.views.is_empty() {
            return Err("framed content needs at least one view".into());
        }
        if let Some((framing, _)) = repr.views.iter().find(|(_, v)| v.is_empty()) {
            return Err(format!("view '{}' has no language entries", framing.key()));
        }
        Ok(Framed {
            views: repr.views,
            fallback: repr.fallback,
        })
    }
}

impl Framed {
    pub fn view(&self, framing: Framing) -> Option<&LangMap<String>> {
        self.views.get(&framing)
    }

    pub fn fallback(&self) -> &LangMap<String> {
        &self.fallback
    }
}

/// Column of the claim matrix: how charitably an argument is put.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Strawman,
    Steelman,
    Reasonable,
}

impl Strength {
    pub const ALL: [Strength; 3] = [Strength::Strawman, Strength::Steelman, Strength::Reasonable];

    pub fn key(self) -> &'static str {
        match self {
            Strength::Strawman => "strawman",
            Strength::Steelman => "steelman",
            Strength::Reasonable => "reasonable",
        }
    }

    fn index(self) -> usize {
        match self {
            Strength::Strawman => 0,
            Strength::Steelman => 1,
            Strength::Reasonable => 2,
        }
    }
}

// =============================================================================
// Store records
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentStore {
    pub site: SiteText,
    pub nav: NavText,
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub framings: BTreeMap<Framing, FramingText>,
    pub matrix: MatrixLabels,
    pub hero: Hero,
    pub intro: Section,
    pub claims: Vec<Claim>,
    pub bio: Biography,
    pub analysis: Analysis,
    pub methodology: Methodology,
    pub sources: Sources,
    pub footer: Footer,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteText {
    /// Short wordmark used as the nav logo.
    pub name: String,
    /// Suffix of every document `<title>`.
    pub title: String,
    /// Banner text in the page header.
    pub header: ContentNode,
    pub repository: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavText {
    pub home: ContentNode,
    pub biography: ContentNode,
    pub analysis: ContentNode,
    pub methodology: ContentNode,
    pub sources: ContentNode,
    pub github: ContentNode,
}

impl NavText {
    /// Nav label of a page. Doubles as the page's document title.
    pub fn label(&self, page: Page) -> &ContentNode {
        match page {
            Page::Home => &self.home,
            Page::Biography => &self.biography,
            Page::Analysis => &self.analysis,
            Page::Methodology => &self.methodology,
            Page::Sources => &self.sources,
        }
    }
}

/// Fixed interface strings. Any label left out renders blank.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Labels {
    pub fact: ContentNode,
    pub source: ContentNode,
    pub convergence: ContentNode,
    pub see_analysis: ContentNode,
    pub evidence: ContentNode,
    pub verify_cta: ContentNode,
    pub view_sources: ContentNode,
    pub key_claims: ContentNode,
    pub perspective: ContentNode,
    pub chain: ContentNode,
    pub bayes: ContentNode,
    pub decision: ContentNode,
    pub meta: ContentNode,
    pub meta_note: ContentNode,
    pub reading: ContentNode,
    pub formalization: ContentNode,
    pub formalization_note: ContentNode,
    pub framing: ContentNode,
}

/// Display text for one framing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FramingText {
    pub label: ContentNode,
    pub banner: ContentNode,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatrixLabels {
    pub columns: LangMap<[String; 3]>,
    pub rows: LangMap<[String; 2]>,
}

impl MatrixLabels {
    pub fn column<'a>(labels: &'a [String; 3], strength: Strength) -> &'a str {
        &labels[strength.index()]
    }

    pub fn row(labels: &[String; 2], lean: Lean) -> &str {
        match lean {
            Lean::Conservative => &labels[0],
            Lean::Progressive => &labels[1],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hero {
    pub headline: ContentNode,
    pub tagline: ContentNode,
    pub subhead: ContentNode,
}

/// A titled block of prose.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Section {
    pub title: ContentNode,
    pub body: ContentNode,
}

/// A sourced fact with its six-perspective matrix.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Claim {
    /// Anchor id of the claim card.
    pub id: String,
    pub fact: ContentNode,
    pub source: ContentNode,
    pub matrix: ClaimMatrix,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClaimMatrix {
    pub conservative: Stance,
    pub progressive: Stance,
    /// Where the two reasonable columns agree.
    pub convergence: ContentNode,
}

impl ClaimMatrix {
    pub fn stance(&self, lean: Lean) -> &Stance {
        match lean {
            Lean::Conservative => &self.conservative,
            Lean::Progressive => &self.progressive,
        }
    }

    pub fn cell(&self, lean: Lean, strength: Strength) -> &ContentNode {
        self.stance(lean).cell(strength)
    }
}

/// One row of the claim matrix.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stance {
    pub strawman: ContentNode,
    pub steelman: ContentNode,
    pub reasonable: ContentNode,
}

impl Stance {
    pub fn cell(&self, strength: Strength) -> &ContentNode {
        match strength {
            Strength::Strawman => &self.strawman,
            Strength::Steelman => &self.steelman,
            Strength::Reasonable => &self.reasonable,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Biography {
    pub headline: ContentNode,
    /// `[label, value]` rows of the summary table.
    pub facts: LangMap<Vec<[String; 2]>>,
    /// Framed commentary shown above the claims.
    pub perspective: ContentNode,
}

/// A precomputed table. Cell text is authored, never calculated.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Table {
    pub header: LangMap<Vec<String>>,
    pub rows: LangMap<Vec<Vec<String>>>,
    /// Zero-based row to emphasize.
    #[serde(default)]
    pub highlight: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Analysis {
    pub headline: ContentNode,
    pub intro: ContentNode,
    /// Endorsement chain diagram, rendered preformatted.
    pub chain: ContentNode,
    pub bayes: Table,
    pub decision: Table,
    pub conclusion: ContentNode,
    pub meta_question: ContentNode,
    /// Framed interpretation of the numbers.
    pub reading: ContentNode,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Methodology {
    pub headline: ContentNode,
    pub intro: ContentNode,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Sources {
    pub intro: ContentNode,
    pub categories: Vec<SourceCategory>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceCategory {
    pub title: ContentNode,
    pub items: Vec<SourceLink>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceLink {
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Footer {
    pub tagline: ContentNode,
    pub copy: ContentNode,
}

// =============================================================================
// Loading
// =============================================================================

impl ContentStore {
    /// Load the content compiled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_toml_str(STORE_TOML)
    }

    /// Parse and validate a content document.
    pub fn from_toml_str(source: &str) -> Result<Self, ContentError> {
        let store: ContentStore = toml::from_str(source)?;
        store.validate()?;
        Ok(store)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let mut ids = HashSet::new();
        for claim in &self.claims {
            if claim.id.is_empty() {
                return Err(ContentError::Invalid("claim id must not be empty".into()));
            }
            if !ids.insert(claim.id.as_str()) {
                return Err(ContentError::Invalid(format!(
                    "duplicate claim id '{}'",
                    claim.id
                )));
            }
        }
        check_highlight("analysis.bayes", &self.analysis.bayes)?;
        check_highlight("analysis.decision", &self.analysis.decision)?;
        Ok(())
    }
}

fn check_highlight(name: &str, table: &Table) -> Result<(), ContentError> {
    let Some(row) = table.highlight else {
        return Ok(());
    };
    if table.rows.values().any(|rows| row >= rows.len()) {
        return Err(ContentError::Invalid(format!(
            "{name}.highlight = {row} is past the last row"
        )));
    }
    Ok(())
}
