//! Parse-tree output types.
//!
//! A [`Node`] is produced fresh on every successful match and never mutated
//! afterwards. Spans are absolute into the original source, so a node stays
//! meaningful independent of its parent once built. Children are owned by
//! their parent's capture map; the tree has no back-pointers and no sharing.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// How a node came to be: a normal match, or a resynchronization via a
/// rule's recovery symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    #[serde(rename = "MATCH")]
    Match,
    #[serde(rename = "RECOVER")]
    Recover,
}

/// Half-open byte range into the source, serialized as `[start, end]`.
///
/// `raw.len() == end - start` holds for every node; an empty match at
/// position `p` is `[p, p]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `other` lies entirely within this span.
    pub fn contains(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl From<(usize, usize)> for Span {
    fn from((start, end): (usize, usize)) -> Self {
        Self { start, end }
    }
}

impl From<Span> for (usize, usize) {
    fn from(span: Span) -> Self {
        (span.start, span.end)
    }
}

/// Capture buckets: name to ordered list of nodes.
///
/// A bucket always holds a list - exactly one element for a non-greedy
/// capture, one per repetition for a greedy one - so the shape is derivable
/// from the grammar alone.
pub type Children = IndexMap<String, Vec<Node>>;

/// One produced parse-tree unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// The full consumed substring.
    pub raw: String,
    /// Named capture buckets, in capture-encounter order.
    #[serde(default)]
    pub children: Children,
    #[serde(rename = "range")]
    pub span: Span,
}

impl Node {
    /// A normally matched node.
    pub fn matched(raw: impl Into<String>, children: Children, span: Span) -> Self {
        Self {
            kind: NodeKind::Match,
            raw: raw.into(),
            children,
            span,
        }
    }

    /// A leaf match with no captures.
    pub fn leaf(raw: impl Into<String>, span: Span) -> Self {
        Self::matched(raw, Children::new(), span)
    }

    /// A node produced by recovery resynchronization. Always childless.
    pub fn recovered(raw: impl Into<String>, span: Span) -> Self {
        Self {
            kind: NodeKind::Recover,
            raw: raw.into(),
            children: Children::new(),
            span,
        }
    }

    /// Nodes captured under `name`, empty if the bucket is absent.
    pub fn captures(&self, name: &str) -> &[Node] {
        self.children.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Append `from`'s buckets into `into`, preserving encounter order.
    ///
    /// A name already present keeps its position and grows at the end of its
    /// bucket - capture names are not required to be unique across the
    /// symbol sets of a rule.
    pub fn merge_children(into: &mut Children, from: Children) {
        for (name, nodes) in from {
            into.entry(name).or_default().extend(nodes);
        }
    }
}
