//! Variable labels and canonical label pairs.
//!
//! Labels are reference-counted strings: cloning one is a pointer copy, and
//! two labels compare equal when their text does.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// The name of a variable.
///
/// Ordering is the lexicographic ordering of the underlying text. It is used
/// to canonicalize pairs and to print models deterministically.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(Arc<str>);

impl Label {
    /// Creates a new label.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// Returns the label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Label {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Label {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl From<&String> for Label {
    fn from(name: &String) -> Self {
        Self::new(name)
    }
}

impl From<&Label> for Label {
    fn from(label: &Label) -> Self {
        label.clone()
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An unordered pair of labels, the key of a quadratic term.
///
/// Invariant: `first() <= second()`. A pair whose two labels are equal is a
/// self-pair.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair(Label, Label);

impl Pair {
    /// Creates a canonical pair; `Pair::new(a, b) == Pair::new(b, a)`.
    #[must_use]
    pub fn new(u: impl Into<Label>, v: impl Into<Label>) -> Self {
        let (u, v) = (u.into(), v.into());
        if u <= v {
            Self(u, v)
        } else {
            Self(v, u)
        }
    }

    /// Returns the smaller label.
    #[must_use]
    pub fn first(&self) -> &Label {
        &self.0
    }

    /// Returns the larger label.
    #[must_use]
    pub fn second(&self) -> &Label {
        &self.1
    }

    /// Returns true if both labels are the same variable.
    #[must_use]
    pub fn is_self_pair(&self) -> bool {
        self.0 == self.1
    }

    /// Returns true if `label` is one of the two ends.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.0.as_str() == label || self.1.as_str() == label
    }

    /// Returns the end opposite to `label`, or `None` if `label` is not in
    /// the pair. A self-pair returns `label` itself.
    #[must_use]
    pub fn other(&self, label: &str) -> Option<&Label> {
        if self.0.as_str() == label {
            Some(&self.1)
        } else if self.1.as_str() == label {
            Some(&self.0)
        } else {
            None
        }
    }
}

impl<U: Into<Label>, V: Into<Label>> From<(U, V)> for Pair {
    fn from((u, v): (U, V)) -> Self {
        Self::new(u, v)
    }
}

impl From<&Pair> for Pair {
    fn from(pair: &Pair) -> Self {
        pair.clone()
    }
}

impl fmt::Debug for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.0, self.1)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*{}", self.0, self.1)
    }
}
