//! Text resolution across the language × framing axes.
//!
//! A [`Resolver`] is bound to one [`AxisSelector`] and turns any
//! [`ContentNode`] into a string, first match wins:
//!
//! 1. A plain string is returned unchanged.
//! 2. With a framing, the node's view for that framing, then the framing's
//!    alias (`red` reads `conservative`): requested language, then the fallback
//!    language.
//! 3. The node's own per-language text (or a framed node's `fallback`):
//!    requested language, then the fallback language.
//! 4. The empty string.
//!
//! An empty translation counts as missing. Resolution never fails: a missing
//! translation renders blank instead of aborting the build.

use crate::axis::{AxisSelector, Lang};
use crate::content::{ContentNode, Framed, LangMap};

/// Values that can be authored but left empty.
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Blank for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<const N: usize> Blank for [String; N] {
    fn is_blank(&self) -> bool {
        self.iter().all(String::is_empty)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolver {
    axis: AxisSelector,
}

impl Resolver {
    pub fn new(axis: AxisSelector) -> Self {
        Self { axis }
    }

    /// Resolve a node to its text for this axis combination.
    pub fn text<'a>(&self, node: &'a ContentNode) -> &'a str {
        let resolved = match node {
            ContentNode::Text(text) => Some(text),
            ContentNode::Localized(map) => self.pick(map),
            ContentNode::Framed(framed) => self
                .framed_view(framed)
                .or_else(|| self.pick(framed.fallback())),
        };
        resolved.map(String::as_str).unwrap_or("")
    }

    /// Per-language lookup with fallback to [`Lang::FALLBACK`].
    pub fn pick<'a, T: Blank>(&self, map: &'a LangMap<T>) -> Option<&'a T> {
        [self.axis.lang, Lang::FALLBACK]
            .into_iter()
            .filter_map(|lang| map.get(lang))
            .find(|value| !value.is_blank())
    }

    /// Per-language list, empty when neither language has one.
    pub fn list<'a, T>(&self, map: &'a LangMap<Vec<T>>) -> &'a [T] {
        self.pick(map).map(Vec::as_slice).unwrap_or(&[])
    }

    fn framed_view<'a>(&self, framed: &'a Framed) -> Option<&'a String> {
        let framing = self.axis.framing?;
        std::iter::once(framing)
            .chain(framing.alias())
            .filter_map(|f| framed.view(f))
            .find_map(|view| self.pick(view))
    }
}
