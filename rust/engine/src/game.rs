use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::participant::{Participant, Role};
use crate::rules;

/// Round state machine core: owns the shared deck, both participants, and
/// the acting role. All round-transient state lives here; there are no
/// globals and no shared mutation outside this struct.
///
/// # Examples
///
/// ```
/// use twentyone_engine::game::Game;
/// use twentyone_engine::participant::Role;
///
/// let mut game = Game::new(Some(42));
/// game.shuffle();
/// game.deal_initial().expect("52 cards cover the opening deal");
///
/// assert_eq!(game.participant(Role::Player).hand().len(), 2);
/// assert_eq!(game.participant(Role::House).hand().len(), 2);
/// assert_eq!(game.current(), Role::Player);
/// ```
#[derive(Debug)]
pub struct Game {
    deck: Deck,
    player: Participant,
    house: Participant,
    current: Role,
}

impl Game {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or(0xB1AC_4AC4);
        Self {
            deck: Deck::new_with_seed(seed),
            player: Participant::new(Role::Player),
            house: Participant::new(Role::House),
            current: Role::Player,
        }
    }

    pub fn shuffle(&mut self) {
        self.deck.shuffle();
    }

    pub fn participant(&self, role: Role) -> &Participant {
        match role {
            Role::Player => &self.player,
            Role::House => &self.house,
        }
    }

    pub fn current(&self) -> Role {
        self.current
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Moves exactly one card from the front of the deck into the given
    /// participant's hand.
    pub fn deal_to(&mut self, role: Role) -> Result<Card, GameError> {
        let card = self.deck.deal_card().ok_or(GameError::EmptyDeck)?;
        match role {
            Role::Player => self.player.give_card(card),
            Role::House => self.house.give_card(card),
        }
        Ok(card)
    }

    /// Opening deal: two cards each, alternating Player, House, Player,
    /// House, before the first turn.
    pub fn deal_initial(&mut self) -> Result<(), GameError> {
        for _ in 0..2 {
            self.deal_to(Role::Player)?;
            self.deal_to(Role::House)?;
        }
        Ok(())
    }

    /// Hands the turn to the house and reveals its hand. Entered only when
    /// the player has not busted.
    pub fn begin_house_turn(&mut self) {
        self.current = Role::House;
        self.house.reveal();
    }

    /// Round resolution over both final scores. The house wins ties; a
    /// busted player loses without the house turn ever running.
    pub fn winner(&self) -> Role {
        rules::resolve_winner(self.player.score(), self.house.score())
    }

    /// Full between-round reset: fresh shuffled deck (the old one is
    /// discarded), both hands cleared, house concealed, player to act.
    pub fn reset(&mut self) {
        self.deck.shuffle();
        self.player.clear_cards();
        self.house.clear_cards();
        self.house.conceal();
        self.current = Role::Player;
    }
}
