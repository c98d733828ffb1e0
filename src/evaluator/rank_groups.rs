use crate::cards::Rank;

/// Ranks grouped by multiplicity, sorted by (count desc, rank desc).
/// A 5-card hand has at most five distinct ranks, so the groups live inline.
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankGroups {
    groups: [(Rank, u8); 5],
    len: usize,
}

impl RankGroups {
    /// Build from a count array indexed by rank value (2..=14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups = [(Rank::Two, 0u8); 5];
        let mut len = 0;
        for rank in Rank::ALL {
            let count = rank_counts[rank.value() as usize];
            if count > 0 && len < groups.len() {
                groups[len] = (rank, count);
                len += 1;
            }
        }
        groups[..len].sort_unstable_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
        Self { groups, len }
    }

    fn with_count(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        self.groups[..self.len].iter().filter(move |(_, count)| *count == n).map(|(rank, _)| *rank)
    }

    pub fn quad(&self) -> Option<Rank> {
        self.with_count(4).next()
    }

    pub fn trips(&self) -> Option<Rank> {
        self.with_count(3).next()
    }

    /// Pair ranks, highest first.
    pub fn pairs(&self) -> impl Iterator<Item = Rank> + '_ {
        self.with_count(2)
    }

    /// Unpaired ranks, highest first.
    pub fn kickers(&self) -> impl Iterator<Item = Rank> + '_ {
        self.with_count(1)
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups[..self.len]
    }
}
