pub(crate) mod combinations;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use crate::hand::{validate_distinct, validate_holdem, Board, HandError, HoleCards};
use core::cmp::Ordering;
use core::fmt;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tiebreak rank values in priority order, at most five.
///
/// Ordering is lexicographic over the stored values. Within one category
/// every evaluation stores the same number of values, so comparison is always
/// element-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Kickers {
    values: [u8; 5],
    len: u8,
}

impl Kickers {
    pub fn as_slice(&self) -> &[u8] {
        &self.values[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The primary tiebreaker (straight high card, pair rank, ...).
    pub fn top(&self) -> Option<u8> {
        self.as_slice().first().copied()
    }
}

/// Collects ranks in priority order. Anything past the fifth is ignored.
impl FromIterator<Rank> for Kickers {
    fn from_iter<I: IntoIterator<Item = Rank>>(iter: I) -> Self {
        let mut values = [0u8; 5];
        let mut len = 0;
        for (slot, r) in values.iter_mut().zip(iter) {
            *slot = r.value();
            len += 1;
        }
        Self { values, len }
    }
}

impl Ord for Kickers {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl PartialOrd for Kickers {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Detailed evaluation result. `category` then `kickers` drive ordering;
/// `best_five` is informational.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    pub kickers: Kickers,
    pub best_five: [Card; 5],
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category.cmp(&other.category).then_with(|| self.kickers.cmp(&other.kickers))
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Evaluation {}

impl Evaluation {
    pub fn name(&self) -> &'static str {
        self.category.name()
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
    #[error("need at least 5 cards to evaluate, got {0}")]
    NotEnoughCards(usize),
    #[error("at most 7 cards can be evaluated, got {0}")]
    TooManyCards(usize),
}

/// Evaluate exactly five cards; detects category and assigns kickers.
///
/// ```
/// use poker_odds::cards::parse_cards;
/// use poker_odds::evaluator::{evaluate_five, Category};
///
/// let cards = parse_cards("Ah 2d 3c 4s 5h").unwrap();
/// let eval = evaluate_five(&[cards[0], cards[1], cards[2], cards[3], cards[4]]);
/// assert_eq!(eval.category, Category::Straight);
/// assert_eq!(eval.kickers.as_slice(), &[5]);
/// ```
pub fn evaluate_five(cards: &[Card; 5]) -> Evaluation {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);

    // Highest category first; HighCard is the fallback.
    DETECTORS
        .iter()
        .find_map(|detector| detector.evaluate(&analysis))
        .unwrap_or_else(|| analysis.build_evaluation(Category::HighCard, analysis.ranks))
}

/// Evaluate the best five-card hand among 5 to 7 distinct cards.
///
/// ```
/// use poker_odds::cards::parse_cards;
/// use poker_odds::evaluator::{evaluate, Category};
///
/// let cards = parse_cards("As Kd Qh 7s 2d").unwrap();
/// let eval = evaluate(&cards).unwrap();
/// assert_eq!(eval.category, Category::HighCard);
/// assert_eq!(eval.kickers.top(), Some(14));
/// ```
pub fn evaluate(cards: &[Card]) -> Result<Evaluation, EvalError> {
    match cards.len() {
        n if n < 5 => return Err(EvalError::NotEnoughCards(n)),
        n if n > 7 => return Err(EvalError::TooManyCards(n)),
        _ => {}
    }
    validate_distinct(cards)?;
    Ok(best_of(cards))
}

/// Evaluate seven cards without validation; the simulator's hot path.
pub fn evaluate_seven(cards: &[Card; 7]) -> Evaluation {
    best_of(cards)
}

/// Evaluate hole cards plus a board of 3 to 5 cards.
pub fn evaluate_holdem(hole: &HoleCards, board: &Board) -> Result<Evaluation, EvalError> {
    validate_holdem(hole, board)?;
    let mut cards = Vec::with_capacity(2 + board.len());
    cards.extend_from_slice(&hole.as_array());
    cards.extend_from_slice(board.as_slice());
    evaluate(&cards)
}

/// Total order over evaluations: category first, then kickers.
pub fn compare_hands(a: &Evaluation, b: &Evaluation) -> Ordering {
    a.cmp(b)
}

pub fn hand_name(evaluation: &Evaluation) -> &'static str {
    evaluation.category.name()
}

// Caller guarantees 5..=7 cards.
fn best_of(cards: &[Card]) -> Evaluation {
    use combinations::FiveCardCombinations;

    let mut best = evaluate_five(&[cards[0], cards[1], cards[2], cards[3], cards[4]]);
    for indices in FiveCardCombinations::new(cards.len()).skip(1) {
        let eval = evaluate_five(&indices.map(|i| cards[i]));
        if eval > best {
            best = eval;
        }
    }
    best
}
