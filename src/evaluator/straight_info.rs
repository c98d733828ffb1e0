use crate::cards::Rank;

/// Straight detection result; `top_rank` is the high card of the straight,
/// Five for the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Detect a straight among 5 ranks given in any order.
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let mut sorted = *ranks;
        sorted.sort_by(|a, b| b.cmp(a));

        if sorted.windows(2).all(|w| w[0].value() == w[1].value() + 1) {
            return StraightInfo { top_rank: Some(sorted[0]) };
        }

        // A-2-3-4-5: the ace plays low
        if sorted == [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two] {
            return StraightInfo { top_rank: Some(Rank::Five) };
        }

        StraightInfo { top_rank: None }
    }
}
