//! Card, hand, and choice formatters for terminal display.
//!
//! This module provides pure functions for formatting game elements for
//! terminal output. Unicode suit symbols are used where the terminal supports
//! them, with single-letter ASCII fallback. All functions take the rendering
//! mode explicitly so they stay deterministic under test.
//!
//! ## Example
//!
//! ```rust
//! use twentyone_engine::cards::{Card, Rank, Suit};
//! use twentyone_cli::formatters::{format_card, format_hand};
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert_eq!(format_card(&ace_spades, true), "A♠");
//! assert_eq!(format_card(&ace_spades, false), "As");
//! ```

use twentyone_engine::cards::{Card, Rank, Suit};
use twentyone_engine::participant::Choice;

/// Concealed-card placeholder shown in place of the house's first card.
pub const HIDDEN_CARD: &str = "??";

/// Check if the terminal supports Unicode card symbols by detecting modern
/// terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM), or VS Code (VSCODE_INJECTION). On Unix-like systems,
/// assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a Suit as a string: ♠ ♥ ♦ ♣ in Unicode mode, s h d c otherwise.
pub fn format_suit(suit: &Suit, unicode: bool) -> String {
    if unicode {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Format a Rank as its display symbol (2-10, J, Q, K, A). Ten renders as
/// the two-character "10", not "T".
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "10",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
    .to_string()
}

/// Format a Card as rank symbol followed by suit symbol, e.g. "A♠" or "10♥".
pub fn format_card(card: &Card, unicode: bool) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit, unicode))
}

/// Format a hand as its cards joined by two spaces, e.g. "A♠  10♥".
pub fn format_hand(cards: &[Card], unicode: bool) -> String {
    cards
        .iter()
        .map(|c| format_card(c, unicode))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Format a hand with the first card replaced by [`HIDDEN_CARD`], used for
/// the house before its hand is revealed.
pub fn format_hand_concealed(cards: &[Card], unicode: bool) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if i == 0 {
                HIDDEN_CARD.to_string()
            } else {
                format_card(c, unicode)
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Format a displayed score: the number when revealed, [`HIDDEN_CARD`] when
/// concealed.
pub fn format_score(score: Option<u32>) -> String {
    match score {
        Some(s) => s.to_string(),
        None => HIDDEN_CARD.to_string(),
    }
}

/// Lower-case verb for a turn choice, used in announcements.
pub fn format_choice(choice: Choice) -> &'static str {
    match choice {
        Choice::Hit => "hit",
        Choice::Stand => "stand",
    }
}
