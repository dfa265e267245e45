use std::collections::BTreeSet;

/// A single owned title and the sources that offer it.
///
/// Equality only looks at `name` and `played`. Two records for the same
/// title that differ in `distributors` compare equal, and so do libraries
/// built from them; snapshot round trips rely on this.
#[derive(Debug, Clone, Default)]
pub struct Game {
    /// Display title, also the key inside a library. Empty when absent.
    pub name: String,
    /// Whether the title was launched on at least one contributing source
    pub played: bool,
    /// Source identifiers, kept sorted and unique
    pub distributors: BTreeSet<String>,
}

impl Game {
    /// Create an unplayed game with no sources
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            played: false,
            distributors: BTreeSet::new(),
        }
    }

    /// Add one source identifier
    pub fn with_distributor(mut self, distributor: impl Into<String>) -> Self {
        self.distributors.insert(distributor.into());
        self
    }

    /// Add several source identifiers
    pub fn with_distributors<I, S>(mut self, distributors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.distributors
            .extend(distributors.into_iter().map(Into::into));
        self
    }

    pub fn with_played(mut self, played: bool) -> Self {
        self.played = played;
        self
    }

    /// Sources as a sorted list
    pub fn distributor_list(&self) -> Vec<&str> {
        self.distributors.iter().map(String::as_str).collect()
    }

    /// Union another game's sources into this one. Name and played flag are kept.
    pub(crate) fn absorb_distributors(&mut self, other: &Game) {
        self.distributors
            .extend(other.distributors.iter().cloned());
    }
}

impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.played == other.played
    }
}

impl Eq for Game {}
