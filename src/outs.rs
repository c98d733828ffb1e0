//! Outs: single cards that lift a hand into a higher category.
//!
//! Counting is exhaustive. Every unseen card is added to the known cards and
//! the result re-evaluated, so the count is exactly as correct as the
//! evaluator. Improvements inside a category (a better kicker) are not outs.

use crate::cards::Card;
use crate::deck::Deck;
use crate::evaluator::{evaluate, evaluate_holdem, Category, EvalError};
use crate::hand::{Board, HoleCards};
use std::collections::BTreeMap;
use std::fmt;

/// What an out turns the hand into, named after the destination category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum DrawType {
    StraightFlush,
    Quads,
    FullHouse,
    Flush,
    Straight,
    Trips,
    TwoPair,
    Pair,
    Other,
}

impl DrawType {
    pub const fn as_str(self) -> &'static str {
        match self {
            DrawType::StraightFlush => "straight_flush",
            DrawType::Quads => "quads",
            DrawType::FullHouse => "full_house",
            DrawType::Flush => "flush",
            DrawType::Straight => "straight",
            DrawType::Trips => "trips",
            DrawType::TwoPair => "two_pair",
            DrawType::Pair => "pair",
            DrawType::Other => "other",
        }
    }
}

impl From<Category> for DrawType {
    fn from(to: Category) -> Self {
        match to {
            Category::StraightFlush => DrawType::StraightFlush,
            Category::FourOfAKind => DrawType::Quads,
            Category::FullHouse => DrawType::FullHouse,
            Category::Flush => DrawType::Flush,
            Category::Straight => DrawType::Straight,
            Category::ThreeOfAKind => DrawType::Trips,
            Category::TwoPair => DrawType::TwoPair,
            Category::Pair => DrawType::Pair,
            Category::HighCard => DrawType::Other,
        }
    }
}

impl fmt::Display for DrawType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Out {
    pub card: Card,
    pub from_category: Category,
    pub to_category: Category,
    pub draw_type: DrawType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutsReport {
    pub total_outs: usize,
    pub current_category: Category,
    pub outs: Vec<Out>,
    pub by_type: BTreeMap<DrawType, usize>,
}

impl OutsReport {
    /// Number of outs of one draw type, zero when absent.
    pub fn count(&self, draw_type: DrawType) -> usize {
        self.by_type.get(&draw_type).copied().unwrap_or(0)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OutsError {
    #[error("board must have 3 or 4 cards to count outs, got {0}")]
    BoardSize(usize),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Count every unseen card that raises the hand's category.
///
/// ```
/// use poker_odds::hand::{Board, HoleCards};
/// use poker_odds::outs::{count_outs, DrawType};
///
/// let hole: HoleCards = "As 9s".parse().unwrap();
/// let board: Board = "Ts 6s 3d".parse().unwrap();
/// let report = count_outs(&hole, &board).unwrap();
/// assert_eq!(report.count(DrawType::Flush), 9);
/// ```
pub fn count_outs(hole: &HoleCards, board: &Board) -> Result<OutsReport, OutsError> {
    if !(3..=4).contains(&board.len()) {
        return Err(OutsError::BoardSize(board.len()));
    }

    let current = evaluate_holdem(hole, board)?;
    let mut known = Vec::with_capacity(7);
    known.extend_from_slice(&hole.as_array());
    known.extend_from_slice(board.as_slice());
    log::debug!("counting outs for {} cards, currently {}", known.len(), current.category);

    let remaining = Deck::standard().without(&known);
    let mut outs = Vec::new();
    let mut by_type = BTreeMap::new();

    for &card in remaining.as_slice() {
        known.push(card);
        let improved = evaluate(&known);
        known.pop();

        let to = improved?.category;
        if to > current.category {
            let draw_type = DrawType::from(to);
            outs.push(Out { card, from_category: current.category, to_category: to, draw_type });
            *by_type.entry(draw_type).or_insert(0) += 1;
        }
    }

    log::debug!("found {} outs: {:?}", outs.len(), by_type);
    Ok(OutsReport { total_outs: outs.len(), current_category: current.category, outs, by_type })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Visibility {
    High,
    Medium,
    Low,
    VeryLow,
}

impl Visibility {
    pub const fn as_str(self) -> &'static str {
        match self {
            Visibility::High => "high",
            Visibility::Medium => "medium",
            Visibility::Low => "low",
            Visibility::VeryLow => "very_low",
        }
    }
}

/// How much an opponent is likely to pay off once the draw completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DrawImpliedOdds {
    Worst,
    Medium,
    Good,
    Best,
}

impl DrawImpliedOdds {
    pub const fn as_str(self) -> &'static str {
        match self {
            DrawImpliedOdds::Worst => "worst",
            DrawImpliedOdds::Medium => "medium",
            DrawImpliedOdds::Good => "good",
            DrawImpliedOdds::Best => "best",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawVisibility {
    pub label: &'static str,
    pub outs: usize,
    pub visibility: Visibility,
    pub implied_odds: DrawImpliedOdds,
    pub reason: &'static str,
}

/// Rate how obvious each present draw is to an opponent. A fixed heuristic
/// table, one record per present draw in the order flush, straight, pair,
/// then trips and full house combined.
pub fn analyze_draw_visibility(by_type: &BTreeMap<DrawType, usize>) -> Vec<DrawVisibility> {
    let count = |t: DrawType| by_type.get(&t).copied().unwrap_or(0);
    let mut draws = Vec::new();

    let flush = count(DrawType::Flush);
    if flush > 0 {
        draws.push(DrawVisibility {
            label: "Flush draw",
            outs: flush,
            visibility: Visibility::High,
            implied_odds: DrawImpliedOdds::Worst,
            reason: "Third suited card on board is impossible to miss",
        });
    }

    let straight = count(DrawType::Straight);
    if straight >= 8 {
        draws.push(DrawVisibility {
            label: "Open-ended straight draw",
            outs: straight,
            visibility: Visibility::Medium,
            implied_odds: DrawImpliedOdds::Medium,
            reason: "Connected board cards signal straight possibilities",
        });
    } else if straight > 0 {
        draws.push(DrawVisibility {
            label: "Gutshot straight draw",
            outs: straight,
            visibility: Visibility::Low,
            implied_odds: DrawImpliedOdds::Good,
            reason: "Gutshots on disconnected boards are hard to spot",
        });
    }

    let pair = count(DrawType::Pair);
    if pair > 0 {
        draws.push(DrawVisibility {
            label: "Overcard outs",
            outs: pair,
            visibility: Visibility::High,
            implied_odds: DrawImpliedOdds::Worst,
            reason: "High cards on the turn/river are universal scare cards",
        });
    }

    let sets = count(DrawType::Trips) + count(DrawType::FullHouse);
    if sets > 0 {
        draws.push(DrawVisibility {
            label: "Set/trips outs",
            outs: sets,
            visibility: Visibility::VeryLow,
            implied_odds: DrawImpliedOdds::Best,
            reason: "Sets are nearly invisible, opponents stack off against them",
        });
    }

    draws
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(hole: &str, board: &str) -> OutsReport {
        let hole: HoleCards = hole.parse().unwrap();
        let board: Board = board.parse().unwrap();
        count_outs(&hole, &board).unwrap()
    }

    #[test]
    fn rejects_preflop_and_river_boards() {
        let hole: HoleCards = "Ah Kh".parse().unwrap();
        for board in ["2h 3h", "2h 3h 4h 5h 6h"] {
            let board: Board = board.parse().unwrap();
            assert!(matches!(count_outs(&hole, &board), Err(OutsError::BoardSize(_))));
        }
    }

    #[test]
    fn rejects_overlapping_cards() {
        let hole: HoleCards = "Ah Kh".parse().unwrap();
        let board: Board = "Ah 3h 4d".parse().unwrap();
        assert!(matches!(count_outs(&hole, &board), Err(OutsError::Eval(_))));
    }

    #[test]
    fn gutshot_on_the_turn() {
        let r = report("9s 8d", "Jh 5c 3s 6d");
        assert_eq!(r.count(DrawType::Straight), 4);
        assert_eq!(r.current_category, Category::HighCard);
    }

    #[test]
    fn trips_improve_to_boat_or_quads() {
        let r = report("Ah Ad", "Ac Kd Qs");
        assert_eq!(r.current_category, Category::ThreeOfAKind);
        assert_eq!(r.count(DrawType::FullHouse), 6);
        assert_eq!(r.count(DrawType::Quads), 1);
        assert_eq!(r.total_outs, 7);
    }

    #[test]
    fn every_out_strictly_improves() {
        let r = report("Ts 9s", "Js 8s 2c");
        assert!(r.total_outs >= 20);
        assert_eq!(r.total_outs, r.outs.len());
        assert_eq!(r.by_type.values().sum::<usize>(), r.total_outs);
        assert!(r.outs.iter().all(|o| o.to_category > o.from_category));
        assert!(r.count(DrawType::Flush) > 0);
        assert!(r.count(DrawType::Straight) > 0);
    }

    #[test]
    fn draw_type_labels() {
        assert_eq!(DrawType::from(Category::FourOfAKind).as_str(), "quads");
        assert_eq!(DrawType::from(Category::ThreeOfAKind).as_str(), "trips");
        assert_eq!(DrawType::from(Category::HighCard), DrawType::Other);
    }

    #[test]
    fn visibility_table() {
        let flush = analyze_draw_visibility(&BTreeMap::from([(DrawType::Flush, 9)]));
        assert_eq!(flush[0].visibility, Visibility::High);
        assert_eq!(flush[0].implied_odds, DrawImpliedOdds::Worst);

        let gutshot = analyze_draw_visibility(&BTreeMap::from([(DrawType::Straight, 4)]));
        assert_eq!(gutshot[0].visibility.as_str(), "low");
        assert_eq!(gutshot[0].implied_odds.as_str(), "good");

        let oesd = analyze_draw_visibility(&BTreeMap::from([(DrawType::Straight, 8)]));
        assert_eq!(oesd[0].visibility, Visibility::Medium);
        assert_eq!(oesd[0].implied_odds, DrawImpliedOdds::Medium);

        let sets = analyze_draw_visibility(&BTreeMap::from([
            (DrawType::Trips, 2),
            (DrawType::FullHouse, 3),
        ]));
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].outs, 5);
        assert_eq!(sets[0].visibility.as_str(), "very_low");
        assert_eq!(sets[0].implied_odds.as_str(), "best");
    }

    #[test]
    fn visibility_records_follow_fixed_order() {
        let by_type = BTreeMap::from([
            (DrawType::Pair, 6),
            (DrawType::Trips, 2),
            (DrawType::Straight, 8),
            (DrawType::Flush, 9),
            (DrawType::TwoPair, 3),
        ]);
        let labels: Vec<&str> = analyze_draw_visibility(&by_type).iter().map(|d| d.label).collect();
        assert_eq!(
            labels,
            ["Flush draw", "Open-ended straight draw", "Overcard outs", "Set/trips outs"]
        );
    }
}
