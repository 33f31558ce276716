//! The diet tag — the resource-type key matching storages to enclosures.

use std::fmt;

/// The feed class an enclosure requires and a storage supplies.
///
/// A closed set of labels used strictly as an exact-match key; diets are
/// never ordered or compared for preference.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Diet {
    Carnivore,
    Herbivore,
    Omnivore,
}

impl Diet {
    /// All diets in a fixed order.  Candidate generation iterates this so
    /// allocation results are reproducible run to run.
    pub const ALL: [Diet; 3] = [Diet::Carnivore, Diet::Herbivore, Diet::Omnivore];

    /// The single-letter tag used by the textual zone format.
    #[inline]
    pub const fn tag(self) -> char {
        match self {
            Diet::Carnivore => 'c',
            Diet::Herbivore => 'h',
            Diet::Omnivore  => 'o',
        }
    }

    /// Parse a single-letter tag.  Returns `None` for unknown letters.
    #[inline]
    pub const fn from_tag(tag: char) -> Option<Diet> {
        match tag {
            'c' => Some(Diet::Carnivore),
            'h' => Some(Diet::Herbivore),
            'o' => Some(Diet::Omnivore),
            _   => None,
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
