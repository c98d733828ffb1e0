use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::Rng;

/// An ordered collection of distinct cards, starting life as the standard
/// 52-card deck. Shuffling and removal return new decks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use poker_odds::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for s in Suit::ALL {
            for r in Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn into_vec(self) -> Vec<Card> {
        self.cards
    }

    /// Return a uniformly shuffled copy; `self` is left untouched.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Deck {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        Deck { cards }
    }

    /// Copy of the deck with every card in `remove` taken out.
    pub fn without(&self, remove: &[Card]) -> Deck {
        Deck { cards: remove_cards(&self.cards, remove) }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

/// All 52 cards, suit by suit.
pub fn create_deck() -> Vec<Card> {
    Deck::standard().into_vec()
}

/// Uniform random permutation of `cards` as a new vector.
pub fn shuffle<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    let mut out = cards.to_vec();
    out.shuffle(rng);
    out
}

/// `cards` minus every card equal to one in `remove`.
pub fn remove_cards(cards: &[Card], remove: &[Card]) -> Vec<Card> {
    cards.iter().copied().filter(|c| !remove.contains(c)).collect()
}
