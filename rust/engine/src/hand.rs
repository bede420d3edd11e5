use crate::cards::{Card, Rank};

/// Bust threshold: a hand scoring above this value loses unconditionally.
pub const HIGHEST_SCORE: u32 = 21;

/// Computes a hand's total score with greedy ace reduction.
///
/// Each card contributes its base point value (Ace counts 11). If the naive
/// sum exceeds [`HIGHEST_SCORE`] and the hand contains aces, 10 is subtracted
/// once per ace until the sum is back at or below the threshold or all aces
/// are spent. The reduction is greedy per ace, not a search over assignments;
/// the result may still exceed the threshold when reduction is insufficient.
pub fn calculate_score(cards: &[Card]) -> u32 {
    let mut score: u32 = cards.iter().map(|c| c.points()).sum();
    let mut aces = cards.iter().filter(|c| c.rank == Rank::Ace).count();
    while score > HIGHEST_SCORE && aces > 0 {
        score -= 10;
        aces -= 1;
    }
    score
}

/// An ordered sequence of cards belonging to exactly one participant.
/// Mutated only by dealing (append) and round reset (clear).
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn score(&self) -> u32 {
        calculate_score(&self.cards)
    }

    pub fn is_bust(&self) -> bool {
        self.score() > HIGHEST_SCORE
    }

    /// Count of cards in this hand with the given rank.
    pub fn count_rank(&self, rank: Rank) -> usize {
        self.cards.iter().filter(|c| c.rank == rank).count()
    }
}
