use serde::{Deserialize, Serialize};

/// One parsed unit of a chord progression.
///
/// A token is either a single chord name or a bracketed group of
/// alternatives. Groups are kept as lists, never expanded — downstream
/// classification treats a note matching *any* alternative as a chord tone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordTokenKind {
    Single(String),
    Group(Vec<String>),
}

/// A chord token with its zero-based position in the progression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordToken {
    pub kind: ChordTokenKind,
    pub index: usize,
}

impl ChordToken {
    pub fn single(name: impl Into<String>, index: usize) -> Self {
        ChordToken {
            kind: ChordTokenKind::Single(name.into()),
            index,
        }
    }

    pub fn group(names: Vec<String>, index: usize) -> Self {
        ChordToken {
            kind: ChordTokenKind::Group(names),
            index,
        }
    }

    /// The chord names this token offers, one for a single chord and
    /// one per alternative for a group.
    pub fn names(&self) -> &[String] {
        match &self.kind {
            ChordTokenKind::Single(name) => std::slice::from_ref(name),
            ChordTokenKind::Group(names) => names,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, ChordTokenKind::Group(_))
    }
}
