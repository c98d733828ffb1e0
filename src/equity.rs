//! Monte Carlo equity for two or more players.
//!
//! Each iteration deals the unseen cards afresh: two to every player whose
//! hand is unknown (in seat order), then the rest of the board. The best
//! hand wins the iteration outright, or every player sharing the best hand
//! records a tie. Equity is `(wins + ties / 2) / iterations`.
//!
//! Iterations can be split into shards. Every shard draws from its own
//! ChaCha stream derived from one seed, so shards never share randomness and
//! a fixed seed and shard count always reproduce the same result.

use crate::cards::Card;
use crate::deck::Deck;
use crate::evaluator::{evaluate_seven, Evaluation};
use crate::hand::{validate_distinct, Board, HandError, HoleCards};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A seat's hole cards as far as the simulation knows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerHand {
    Known(HoleCards),
    Unknown,
}

impl PlayerHand {
    pub fn known(&self) -> Option<HoleCards> {
        match self {
            PlayerHand::Known(h) => Some(*h),
            PlayerHand::Unknown => None,
        }
    }
}

impl From<HoleCards> for PlayerHand {
    fn from(hole: HoleCards) -> Self {
        PlayerHand::Known(hole)
    }
}

/// Simulation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct EquityConfig {
    pub iterations: u64,
    /// Fixed seed for reproducible runs; fresh entropy when `None`.
    pub seed: Option<u64>,
    /// Number of independent streams the iterations are split across.
    pub shards: usize,
}

impl EquityConfig {
    pub const DEFAULT_ITERATIONS: u64 = 10_000;

    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_shards(mut self, shards: usize) -> Self {
        self.shards = shards.max(1);
        self
    }
}

impl Default for EquityConfig {
    fn default() -> Self {
        Self { iterations: Self::DEFAULT_ITERATIONS, seed: None, shards: 1 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerEquity {
    pub equity: f64,
    pub wins: u64,
    pub ties: u64,
}

/// Per-player results, aligned with the input seats.
#[derive(Debug, Clone, PartialEq)]
pub struct EquityReport {
    pub iterations: u64,
    pub players: Vec<PlayerEquity>,
}

impl EquityReport {
    /// Sum of all equities; 1.0 up to sampling error.
    pub fn total_equity(&self) -> f64 {
        self.players.iter().map(|p| p.equity).sum()
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EquityError {
    #[error("need at least 2 players, got {0}")]
    TooFewPlayers(usize),
    #[error("iteration count must be positive")]
    NoIterations,
    #[error("card {0} appears more than once among hands and board")]
    DuplicateCard(Card),
    #[error("deal needs {needed} unseen cards but only {available} remain")]
    DeckExhausted { needed: usize, available: usize },
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// Equity with default settings and `iterations` trials.
///
/// ```
/// use poker_odds::equity::{calculate_equity, PlayerHand};
/// use poker_odds::hand::Board;
///
/// let players = [
///     PlayerHand::Known("Ah Kh".parse().unwrap()),
///     PlayerHand::Known("Qs Qd".parse().unwrap()),
/// ];
/// let board: Board = "Qh Jh Th 2s 3c".parse().unwrap();
/// let result = calculate_equity(&players, &board, 100).unwrap();
/// assert_eq!(result[0].equity, 1.0);
/// assert_eq!(result[1].equity, 0.0);
/// ```
pub fn calculate_equity(
    players: &[PlayerHand],
    board: &Board,
    iterations: u64,
) -> Result<Vec<PlayerEquity>, EquityError> {
    let config = EquityConfig::default().with_iterations(iterations);
    calculate_equity_with(players, board, &config).map(|report| report.players)
}

/// Equity under an explicit configuration, sharding iterations when asked.
pub fn calculate_equity_with(
    players: &[PlayerHand],
    board: &Board,
    config: &EquityConfig,
) -> Result<EquityReport, EquityError> {
    if config.iterations == 0 {
        return Err(EquityError::NoIterations);
    }
    let deal = Deal::prepare(players, board)?;
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let plan = shard_sizes(config.iterations, config.shards);
    log::debug!(
        "equity: {} players ({} unknown), {} board cards, {} iterations over {} shards",
        players.len(),
        deal.unknown_players,
        board.len(),
        config.iterations,
        plan.len()
    );

    let run_shard = |(index, iterations): (usize, u64)| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(index as u64);
        log::trace!("shard {index}: {iterations} iterations");
        deal.run(iterations, &mut rng)
    };

    #[cfg(feature = "parallel")]
    let tallies: Vec<Tally> = plan.into_par_iter().enumerate().map(run_shard).collect();
    #[cfg(not(feature = "parallel"))]
    let tallies: Vec<Tally> = plan.into_iter().enumerate().map(run_shard).collect();

    let mut total = Tally::new(players.len());
    for tally in &tallies {
        total.merge(tally);
    }
    Ok(total.into_report(config.iterations))
}

/// Single-stream simulation driven by the caller's RNG.
pub fn simulate<R: Rng + ?Sized>(
    players: &[PlayerHand],
    board: &Board,
    iterations: u64,
    rng: &mut R,
) -> Result<EquityReport, EquityError> {
    if iterations == 0 {
        return Err(EquityError::NoIterations);
    }
    let deal = Deal::prepare(players, board)?;
    Ok(deal.run(iterations, rng).into_report(iterations))
}

/// Split `iterations` into `shards` near-equal parts. The shard count is
/// clamped to `1..=iterations` so no shard is ever empty.
fn shard_sizes(iterations: u64, shards: usize) -> Vec<u64> {
    let shards = u64::try_from(shards).unwrap_or(u64::MAX).clamp(1, iterations.max(1));
    let base = iterations / shards;
    let extra = iterations % shards;
    (0..shards).map(|i| base + u64::from(i < extra)).collect()
}

/// Everything about the deal that stays fixed across iterations.
#[derive(Debug)]
struct Deal {
    hands: Vec<Option<[Card; 2]>>,
    board: Vec<Card>,
    pool: Vec<Card>,
    unknown_players: usize,
}

impl Deal {
    fn prepare(players: &[PlayerHand], board: &Board) -> Result<Self, EquityError> {
        if players.len() < 2 {
            return Err(EquityError::TooFewPlayers(players.len()));
        }

        let hands: Vec<Option<[Card; 2]>> =
            players.iter().map(|p| p.known().map(|h| h.as_array())).collect();
        let mut known: Vec<Card> = board.as_slice().to_vec();
        known.extend(hands.iter().flatten().flatten());
        validate_distinct(&known).map_err(|err| match err {
            HandError::DuplicateCard(card) => EquityError::DuplicateCard(card),
            other => EquityError::Hand(other),
        })?;

        let pool = Deck::standard().without(&known).into_vec();
        let unknown_players = hands.iter().filter(|h| h.is_none()).count();
        let deal = Self { hands, board: board.as_slice().to_vec(), pool, unknown_players };

        let needed = deal.draws();
        if needed > deal.pool.len() {
            return Err(EquityError::DeckExhausted { needed, available: deal.pool.len() });
        }
        Ok(deal)
    }

    /// Cards drawn per iteration.
    fn draws(&self) -> usize {
        2 * self.unknown_players + (5 - self.board.len())
    }

    fn run<R: Rng + ?Sized>(&self, iterations: u64, rng: &mut R) -> Tally {
        let n = self.hands.len();
        let draws = self.draws();
        let known_board = self.board.len();
        let mut pool = self.pool.clone();
        let mut holes: Vec<[Card; 2]> = Vec::with_capacity(n);
        let mut evals: Vec<Evaluation> = Vec::with_capacity(n);
        let mut tally = Tally::new(n);

        for _ in 0..iterations {
            let dealt: &[Card] = if draws == 0 { &[] } else { pool.partial_shuffle(rng, draws).0 };

            // Unknown hands take the first cards, the board the rest.
            let mut next = 0;
            holes.clear();
            for hand in &self.hands {
                holes.push(hand.unwrap_or_else(|| {
                    next += 2;
                    [dealt[next - 2], dealt[next - 1]]
                }));
            }
            let full_board: [Card; 5] = std::array::from_fn(|i| {
                if i < known_board {
                    self.board[i]
                } else {
                    dealt[next + i - known_board]
                }
            });

            evals.clear();
            evals.extend(holes.iter().map(|h| {
                evaluate_seven(&[
                    h[0],
                    h[1],
                    full_board[0],
                    full_board[1],
                    full_board[2],
                    full_board[3],
                    full_board[4],
                ])
            }));
            tally.record(&evals);
        }
        tally
    }
}

/// Win and tie counters per seat.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Tally {
    wins: Vec<u64>,
    ties: Vec<u64>,
}

impl Tally {
    fn new(players: usize) -> Self {
        Self { wins: vec![0; players], ties: vec![0; players] }
    }

    fn record(&mut self, evals: &[Evaluation]) {
        let Some(best) = evals.iter().max() else {
            return;
        };
        let winners = evals.iter().filter(|e| *e == best).count();
        for (i, eval) in evals.iter().enumerate() {
            if eval == best {
                if winners == 1 {
                    self.wins[i] += 1;
                } else {
                    self.ties[i] += 1;
                }
            }
        }
    }

    fn merge(&mut self, other: &Tally) {
        for (a, b) in self.wins.iter_mut().zip(&other.wins) {
            *a += b;
        }
        for (a, b) in self.ties.iter_mut().zip(&other.ties) {
            *a += b;
        }
    }

    fn into_report(self, iterations: u64) -> EquityReport {
        let players: Vec<PlayerEquity> = self
            .wins
            .iter()
            .zip(&self.ties)
            .map(|(&wins, &ties)| PlayerEquity {
                equity: (wins as f64 + 0.5 * ties as f64) / iterations as f64,
                wins,
                ties,
            })
            .collect();
        log::debug!(
            "equity: {:?}",
            players.iter().map(|p| format!("{:.4}", p.equity)).collect::<Vec<_>>()
        );
        EquityReport { iterations, players }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known(s: &str) -> PlayerHand {
        PlayerHand::Known(s.parse().expect("valid hole cards"))
    }

    #[test]
    fn needs_two_players_and_some_iterations() {
        let board = Board::empty();
        assert_eq!(
            calculate_equity(&[known("Ah As")], &board, 100).unwrap_err(),
            EquityError::TooFewPlayers(1)
        );
        assert_eq!(
            calculate_equity(&[known("Ah As"), known("Kh Ks")], &board, 0).unwrap_err(),
            EquityError::NoIterations
        );
    }

    #[test]
    fn duplicate_known_cards_are_rejected() {
        let board: Board = "Ah 2c 3d".parse().unwrap();
        let err = calculate_equity(&[known("Ah As"), known("Kh Ks")], &board, 10).unwrap_err();
        assert_eq!(err, EquityError::DuplicateCard("Ah".parse().unwrap()));
    }

    #[test]
    fn too_many_unknown_players_exhaust_the_deck() {
        let players = vec![PlayerHand::Unknown; 24];
        let err = calculate_equity(&players, &Board::empty(), 10).unwrap_err();
        assert_eq!(err, EquityError::DeckExhausted { needed: 53, available: 52 });
    }

    #[test]
    fn shard_sizes_cover_all_iterations() {
        assert_eq!(shard_sizes(10, 3), vec![4, 3, 3]);
        assert_eq!(shard_sizes(7, 1), vec![7]);
    }

    #[test]
    fn shard_count_never_exceeds_iterations() {
        assert_eq!(shard_sizes(2, 4), vec![1, 1]);
        assert_eq!(shard_sizes(3, 0), vec![3]);
        assert_eq!(shard_sizes(5, usize::MAX), vec![1; 5]);
    }

    #[test]
    fn huge_shard_counts_still_run() {
        let config = EquityConfig::default().with_iterations(10).with_seed(3).with_shards(usize::MAX);
        let players = [known("Ah As"), known("Kh Ks")];
        let report = calculate_equity_with(&players, &Board::empty(), &config).unwrap();
        assert_eq!(report.iterations, 10);
        assert!((report.total_equity() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn split_pot_on_the_board() {
        // Broadway on board, both players play it
        let board: Board = "Ah Kd Qc Js Th".parse().unwrap();
        let result = calculate_equity(&[known("2c 3d"), known("4h 5s")], &board, 50).unwrap();
        for p in &result {
            assert_eq!(p.ties, 50);
            assert_eq!(p.wins, 0);
            assert_eq!(p.equity, 0.5);
        }
    }

    #[test]
    fn seeded_runs_reproduce() {
        let players = [known("As Ks"), PlayerHand::Unknown, known("7d 7c")];
        let board: Board = "Kh 7s 2d".parse().unwrap();
        let config = EquityConfig::default().with_iterations(2_000).with_seed(11).with_shards(4);
        let a = calculate_equity_with(&players, &board, &config).unwrap();
        let b = calculate_equity_with(&players, &board, &config).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.iterations, 2_000);
    }

    #[test]
    fn simulate_with_caller_rng() {
        let players = [known("Ah Ad"), known("Kh Kd")];
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let report = simulate(&players, &Board::empty(), 3_000, &mut rng).unwrap();
        let outcomes: u64 = report.players.iter().map(|p| p.wins).sum::<u64>()
            + report.players[0].ties;
        assert_eq!(outcomes, 3_000);
        assert!((report.total_equity() - 1.0).abs() < 1e-9);
    }
}
