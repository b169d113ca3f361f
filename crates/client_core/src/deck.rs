//! Fixed, cyclic candidate list backing the home screen.
//!
//! The mock deck stands in for a real data source; swap in an injected
//! provider if this ever grows past prototype scope.

use shared::domain::{Candidate, CandidateId};

/// Ordered, non-empty, cyclic sequence of candidates.
pub struct CandidateDeck {
    candidates: Vec<Candidate>,
}

impl CandidateDeck {
    /// Precondition: `candidates` is non-empty.
    pub fn new(candidates: Vec<Candidate>) -> Self {
        assert!(!candidates.is_empty(), "candidate deck must be non-empty");
        Self { candidates }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Precondition: `index < len()`; the swipe controller keeps its index
    /// in range by construction.
    pub fn get(&self, index: usize) -> &Candidate {
        &self.candidates[index]
    }

    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.candidates.len()
    }

    /// The card rendered behind the current one.
    pub fn peek_next(&self, index: usize) -> &Candidate {
        self.get(self.next_index(index))
    }

    /// The fixed in-memory list used by the prototype.
    pub fn mock() -> Self {
        Self::new(vec![
            Candidate {
                id: CandidateId::new("1"),
                name: "John Doe".to_string(),
                interests: "Photography, Hiking, Technology".to_string(),
                bio: "Adventure seeker and tech enthusiast looking to connect locally!"
                    .to_string(),
            },
            Candidate {
                id: CandidateId::new("2"),
                name: "Jane Smith".to_string(),
                interests: "Cooking, Music, Travel".to_string(),
                bio: "Passionate about exploring new cuisines and discovering local gems."
                    .to_string(),
            },
            Candidate {
                id: CandidateId::new("3"),
                name: "Alex Johnson".to_string(),
                interests: "Reading, Cycling, Art".to_string(),
                bio: "Creative mind with a passion for exploration and learning.".to_string(),
            },
        ])
    }
}

#[cfg(test)]
#[path = "tests/deck_tests.rs"]
mod tests;
