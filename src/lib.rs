//! poker-odds: Texas Hold'em hand evaluation, outs and equity
//!
//! Goals:
//! - Deterministic evaluation of 5 to 7 card hands with a total order
//! - Exact outs counting by exhaustive re-evaluation
//! - Monte Carlo equity with explicit, seedable randomness
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: evaluate a Hold'em hand
//! ```
//! use poker_odds::cards::{Card, Rank, Suit};
//! use poker_odds::evaluator::{evaluate_holdem, Category};
//! use poker_odds::hand::{Board, HoleCards};
//!
//! let hole = HoleCards::try_new(
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::Ace, Suit::Hearts),
//! ).unwrap();
//! let board = Board::try_new(vec![
//!     Card::new(Rank::King, Suit::Clubs),
//!     Card::new(Rank::Queen, Suit::Diamonds),
//!     Card::new(Rank::Jack, Suit::Hearts),
//!     Card::new(Rank::Three, Suit::Spades),
//!     Card::new(Rank::Two, Suit::Clubs),
//! ]).unwrap();
//!
//! let eval = evaluate_holdem(&hole, &board).unwrap();
//! assert_eq!(eval.category, Category::Pair);
//! ```
//!
//! ## Equity with a seed
//! ```
//! use poker_odds::equity::{calculate_equity_with, EquityConfig, PlayerHand};
//! use poker_odds::hand::Board;
//!
//! let players = [
//!     PlayerHand::Known("Ac Ad".parse().unwrap()),
//!     PlayerHand::Unknown,
//! ];
//! let config = EquityConfig::default().with_iterations(2_000).with_seed(7);
//! let report = calculate_equity_with(&players, &Board::empty(), &config).unwrap();
//! assert!(report.players[0].equity > 0.7);
//! ```
//!
//! The crate logs through the `log` facade and never installs a logger.

pub mod cards;
pub mod deck;
pub mod equity;
pub mod evaluator;
pub mod hand;
pub mod odds;
pub mod outs;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
