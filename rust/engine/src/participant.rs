use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::Hand;
use crate::rules;

/// Identifies one side of the game. The two roles differ only in decision
/// policy and score visibility; hand ownership and scoring are shared.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Role {
    /// The human-controlled side
    Player,
    /// The computer-controlled dealer
    House,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Player => "Player",
            Role::House => "House",
        }
    }
}

/// A turn decision: take another card or end the turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Choice {
    /// Take one more card
    Hit,
    /// End the turn with the current hand
    Stand,
}

/// One side of the game: a role, its hand, and whether the hand's score is
/// shown openly. The player is always revealed; the house starts concealed
/// and is revealed when its turn begins.
#[derive(Debug, Clone)]
pub struct Participant {
    role: Role,
    hand: Hand,
    revealed: bool,
}

impl Participant {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            hand: Hand::new(),
            revealed: matches!(role, Role::Player),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn label(&self) -> &'static str {
        self.role.label()
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn give_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn clear_cards(&mut self) {
        self.hand.clear();
    }

    pub fn score(&self) -> u32 {
        self.hand.score()
    }

    pub fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    /// The decision for this participant's turn. The house decides
    /// deterministically from its score; the player returns `None`, meaning
    /// the choice must be collected from external input by the caller.
    pub fn decide(&self) -> Option<Choice> {
        match self.role {
            Role::House => Some(rules::house_policy(self.score())),
            Role::Player => None,
        }
    }

    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    pub fn conceal(&mut self) {
        self.revealed = matches!(self.role, Role::Player);
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// The score as it may be shown to the player: `None` while this
    /// participant's hand is concealed, the true score otherwise. The true
    /// score stays observable through [`Participant::score`] regardless.
    pub fn displayed_score(&self) -> Option<u32> {
        if self.revealed {
            Some(self.score())
        } else {
            None
        }
    }
}
