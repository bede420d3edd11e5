//! Deal command handler for single-table dealing and display.
//!
//! This module provides the `deal` command which performs one opening deal
//! and prints both hands fully revealed with their scores. Useful for
//! inspecting a seeded shuffle without playing a round.

use crate::error::CliError;
use crate::formatters::{self, format_hand};
use std::io::Write;
use twentyone_engine::game::Game;
use twentyone_engine::participant::Role;

/// Handle the deal command.
///
/// Deals the opening four cards (Player, House, Player, House) and displays
/// both hands with scores. Supports optional seeding for deterministic
/// dealing and reproducibility.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed for deterministic dealing
/// * `out` - Output stream for command results
///
/// # Returns
///
/// Returns `Ok(())` on success, or `CliError` on I/O errors.
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let base_seed = seed.unwrap_or_else(rand::random);
    let mut game = Game::new(Some(base_seed));
    game.shuffle();
    game.deal_initial()?;

    let unicode = formatters::supports_unicode();
    for role in [Role::Player, Role::House] {
        let p = game.participant(role);
        writeln!(
            out,
            "{}: {}  (score {})",
            p.label(),
            format_hand(p.hand().cards(), unicode),
            p.score()
        )?;
    }
    writeln!(out, "Deck remaining: {}", game.deck_remaining())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_prints_both_hands() {
        let mut out = Vec::new();
        handle_deal_command(Some(42), &mut out).unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(s.contains("Player:"));
        assert!(s.contains("House:"));
        assert!(s.contains("Deck remaining: 48"));
    }

    #[test]
    fn test_deal_is_deterministic_with_seed() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        handle_deal_command(Some(7), &mut a).unwrap();
        handle_deal_command(Some(7), &mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_deal_without_seed_succeeds() {
        let mut out = Vec::new();
        assert!(handle_deal_command(None, &mut out).is_ok());
    }
}
