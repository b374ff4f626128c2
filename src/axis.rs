//! The closed axes a site is rendered along.
//!
//! Every output document is one [`Page`] rendered under one [`AxisSelector`]:
//! a language plus, when the build has a framing axis, a framing. The set of
//! enabled languages and framings for a build is an [`AxisShape`], derived from
//! the site config.
//!
//! ```text
//! framings = []                                  → 2 langs × 5 pages = 10 documents
//! framings = [red, blue]                         → 2 × 2 × 5         = 20 documents
//! framings = [balanced, conservative, progressive] → 3 × 2 × 5       = 30 documents
//! ```

use serde::{Deserialize, Serialize};

/// A supported content language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Es,
}

impl Lang {
    /// Language that per-language content falls back to when a translation is missing.
    pub const FALLBACK: Lang = Lang::En;

    pub const ALL: [Lang; 2] = [Lang::En, Lang::Es];

    /// Lowercase code used in filenames and the `lang` attribute.
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
        }
    }

    /// Label shown on the language toggle.
    pub fn label(self) -> &'static str {
        match self {
            Lang::En => "EN",
            Lang::Es => "ES",
        }
    }
}

/// Which side of the 2×3 claim matrix a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lean {
    Conservative,
    Progressive,
}

impl Lean {
    pub const ALL: [Lean; 2] = [Lean::Conservative, Lean::Progressive];

    pub fn key(self) -> &'static str {
        match self {
            Lean::Conservative => "conservative",
            Lean::Progressive => "progressive",
        }
    }
}

/// An ideological lens a page can be rendered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framing {
    Balanced,
    Conservative,
    Progressive,
    Red,
    Blue,
}

impl Framing {
    pub const ALL: [Framing; 5] = [
        Framing::Balanced,
        Framing::Conservative,
        Framing::Progressive,
        Framing::Red,
        Framing::Blue,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Framing::Balanced => "balanced",
            Framing::Conservative => "conservative",
            Framing::Progressive => "progressive",
            Framing::Red => "red",
            Framing::Blue => "blue",
        }
    }

    /// The neutral framing renders its constituents side by side instead of one view.
    pub fn is_neutral(self) -> bool {
        self == Framing::Balanced
    }

    /// Framings whose text a page under this framing shows.
    ///
    /// The neutral framing shows both partisan framings; every other framing
    /// shows only itself.
    pub fn constituents(self) -> &'static [Framing] {
        match self {
            Framing::Balanced => &[Framing::Conservative, Framing::Progressive],
            Framing::Conservative => &[Framing::Conservative],
            Framing::Progressive => &[Framing::Progressive],
            Framing::Red => &[Framing::Red],
            Framing::Blue => &[Framing::Blue],
        }
    }

    /// The framing whose content view stands in when a node has no view of its own
    /// for this one. Red reads conservative text, blue reads progressive text.
    pub fn alias(self) -> Option<Framing> {
        match self {
            Framing::Red => Some(Framing::Conservative),
            Framing::Blue => Some(Framing::Progressive),
            _ => None,
        }
    }

    /// Matrix row this framing emphasizes, if any.
    pub fn lean(self) -> Option<Lean> {
        match self {
            Framing::Conservative | Framing::Red => Some(Lean::Conservative),
            Framing::Progressive | Framing::Blue => Some(Lean::Progressive),
            Framing::Balanced => None,
        }
    }
}

/// One logical document of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Biography,
    Analysis,
    Methodology,
    Sources,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Biography,
        Page::Analysis,
        Page::Methodology,
        Page::Sources,
    ];

    /// Filename stem. The home page keeps `index` so it sorts first in listings.
    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "index",
            Page::Biography => "biography",
            Page::Analysis => "analysis",
            Page::Methodology => "methodology",
            Page::Sources => "sources",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.slug() == slug)
    }

    /// CSS class applied to `<body>`.
    pub fn body_class(self) -> &'static str {
        match self {
            Page::Home => "page-home",
            Page::Biography => "page-biography",
            Page::Analysis => "page-analysis",
            Page::Methodology => "page-methodology",
            Page::Sources => "page-sources",
        }
    }
}

/// A concrete (language, framing) combination a full set of pages is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisSelector {
    pub lang: Lang,
    pub framing: Option<Framing>,
}

impl AxisSelector {
    pub fn new(lang: Lang, framing: Option<Framing>) -> Self {
        Self { lang, framing }
    }

    pub fn with_lang(self, lang: Lang) -> Self {
        Self { lang, ..self }
    }

    pub fn with_framing(self, framing: Option<Framing>) -> Self {
        Self { framing, ..self }
    }
}

/// The enabled languages and framings of one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisShape {
    pub languages: Vec<Lang>,
    /// Empty when the build has no framing axis.
    pub framings: Vec<Framing>,
}

impl AxisShape {
    pub fn new(languages: Vec<Lang>, framings: Vec<Framing>) -> Self {
        Self {
            languages,
            framings,
        }
    }

    pub fn has_framing_axis(&self) -> bool {
        !self.framings.is_empty()
    }

    /// Every axis combination, framing-major then language, in declaration order.
    pub fn selectors(&self) -> Vec<AxisSelector> {
        if self.framings.is_empty() {
            return self
                .languages
                .iter()
                .map(|&lang| AxisSelector::new(lang, None))
                .collect();
        }
        self.framings
            .iter()
            .flat_map(|&framing| {
                self.languages
                    .iter()
                    .map(move |&lang| AxisSelector::new(lang, Some(framing)))
            })
            .collect()
    }

    pub fn contains(&self, axis: AxisSelector) -> bool {
        let framing_ok = match axis.framing {
            Some(f) => self.framings.contains(&f),
            None => self.framings.is_empty(),
        };
        framing_ok && self.languages.contains(&axis.lang)
    }

    /// The language the toggle on a `lang` page points at: the next enabled
    /// language, wrapping around. A single-language build toggles to itself.
    pub fn other_language(&self, lang: Lang) -> Lang {
        match self.languages.iter().position(|&l| l == lang) {
            Some(i) => self.languages[(i + 1) % self.languages.len()],
            None => self.languages.first().copied().unwrap_or(lang),
        }
    }
}
