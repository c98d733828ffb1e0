use std::iter;

use super::hand_analysis::HandAnalysis;
use crate::evaluator::{Category, Evaluation};

/// Each detector recognises one category and, on a match, builds the
/// evaluation with that category's kicker layout.
pub trait CategoryDetector {
    fn evaluate(&self, analysis: &HandAnalysis) -> Option<Evaluation>;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Straight Flush: kickers = [high card]
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn evaluate(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        if !analysis.suit_info.is_flush {
            return None;
        }
        let top = analysis.straight_info.top_rank?;
        Some(analysis.build_evaluation(Category::StraightFlush, [top]))
    }
}

/// Four of a Kind: kickers = [quad rank, kicker]
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn evaluate(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let quad = analysis.rank_groups.quad()?;
        let kicker = analysis.rank_groups.kickers().next()?;
        Some(analysis.build_evaluation(Category::FourOfAKind, [quad, kicker]))
    }
}

/// Full House: kickers = [trips rank, pair rank]
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn evaluate(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let trips = analysis.rank_groups.trips()?;
        let pair = analysis.rank_groups.pairs().next()?;
        Some(analysis.build_evaluation(Category::FullHouse, [trips, pair]))
    }
}

/// Flush: kickers = all five ranks, descending
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn evaluate(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        analysis
            .suit_info
            .is_flush
            .then(|| analysis.build_evaluation(Category::Flush, analysis.ranks))
    }
}

/// Straight: kickers = [high card]
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn evaluate(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let top = analysis.straight_info.top_rank?;
        Some(analysis.build_evaluation(Category::Straight, [top]))
    }
}

/// Three of a Kind: kickers = [trips rank, two kickers descending]
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn evaluate(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let trips = analysis.rank_groups.trips()?;
        let tiebreak = iter::once(trips).chain(analysis.rank_groups.kickers());
        Some(analysis.build_evaluation(Category::ThreeOfAKind, tiebreak))
    }
}

/// Two Pair: kickers = [high pair, low pair, kicker]
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn evaluate(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let mut pairs = analysis.rank_groups.pairs();
        let (high, low) = (pairs.next()?, pairs.next()?);
        let tiebreak = [high, low].into_iter().chain(analysis.rank_groups.kickers());
        Some(analysis.build_evaluation(Category::TwoPair, tiebreak))
    }
}

/// One Pair: kickers = [pair rank, three kickers descending]
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn evaluate(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let pair = analysis.rank_groups.pairs().next()?;
        let tiebreak = iter::once(pair).chain(analysis.rank_groups.kickers());
        Some(analysis.build_evaluation(Category::Pair, tiebreak))
    }
}

// High Card is the fallback in `evaluate_five`.

pub const DETECTORS: [&dyn CategoryDetector; 8] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn analyze(s: &str) -> HandAnalysis {
        let v = parse_cards(s).expect("valid cards");
        HandAnalysis::new(&[v[0], v[1], v[2], v[3], v[4]])
    }

    #[test]
    fn straight_flush_detector() {
        let eval = StraightFlushDetector.evaluate(&analyze("9h 8h 7h 6h 5h")).unwrap();
        assert_eq!(eval.category, Category::StraightFlush);
        assert_eq!(eval.kickers.as_slice(), &[9]);
    }

    #[test]
    fn full_house_detector_skips_plain_trips() {
        assert!(FullHouseDetector.evaluate(&analyze("Ks Kh Kd Qc 2s")).is_none());
        let eval = FullHouseDetector.evaluate(&analyze("Ks Kh Kd Qc Qs")).unwrap();
        assert_eq!(eval.kickers.as_slice(), &[13, 12]);
    }

    #[test]
    fn two_pair_detector_needs_two_pairs() {
        assert!(TwoPairDetector.evaluate(&analyze("As Ah Kd Qc Js")).is_none());
        let eval = TwoPairDetector.evaluate(&analyze("As Ah Kd Kc Qs")).unwrap();
        assert_eq!(eval.kickers.as_slice(), &[14, 13, 12]);
    }

    #[test]
    fn lower_detectors_also_match_a_straight_flush() {
        let analysis = analyze("9h 8h 7h 6h 5h");
        assert!(FlushDetector.evaluate(&analysis).is_some());
        assert!(StraightDetector.evaluate(&analysis).is_some());
        assert!(OnePairDetector.evaluate(&analysis).is_none());
    }

    #[test]
    fn tiebreaks_list_groups_before_kickers() {
        let trips = ThreeOfAKindDetector.evaluate(&analyze("2c 9d 9s Ah 9h")).unwrap();
        assert_eq!(trips.kickers.as_slice(), &[9, 14, 2]);
        let pair = OnePairDetector.evaluate(&analyze("3s Td 7c 3h Kd")).unwrap();
        assert_eq!(pair.kickers.as_slice(), &[3, 13, 10, 7]);
        let two_pair = TwoPairDetector.evaluate(&analyze("4d Qs 4c 8h Qh")).unwrap();
        assert_eq!(two_pair.kickers.as_slice(), &[12, 4, 8]);
        let quads = FourOfAKindDetector.evaluate(&analyze("6c Jd 6d 6h 6s")).unwrap();
        assert_eq!(quads.kickers.as_slice(), &[6, 11]);
    }

    #[test]
    fn first_matching_detector_wins() {
        let analysis = analyze("Jd Jh Js 9c 9s");
        let first = DETECTORS.iter().find_map(|d| d.evaluate(&analysis)).unwrap();
        assert_eq!(first.category, Category::FullHouse);
    }
}
