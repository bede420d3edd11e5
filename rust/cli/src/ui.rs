//! Render collaborator for terminal output.
//!
//! This module provides the output half of the game's external interface:
//! screen clearing, the table view, and the announcement messages. Functions
//! write to an injected stream so command handlers stay testable.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Clear the screen and move the cursor to the top-left corner.
pub fn clear_screen(out: &mut dyn Write) -> std::io::Result<()> {
    write!(out, "\x1b[2J\x1b[1;1H")
}

pub fn show_welcome(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "Welcome to Twenty One!")?;
    writeln!(out, "House rules: House wins in a tie condition!")
}

pub fn show_goodbye(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "Thanks for playing Twenty One. Goodbye!")
}

/// Render the ruled table view with one row per participant. Scores and card
/// strings arrive pre-formatted; a concealed house shows "??" in both.
#[allow(clippy::too_many_arguments)]
pub fn show_table(
    out: &mut dyn Write,
    player_label: &str,
    player_score: &str,
    player_cards: &str,
    house_label: &str,
    house_score: &str,
    house_cards: &str,
) -> std::io::Result<()> {
    writeln!(out, "-----------------------------------------")?;
    writeln!(out, " PLAYER | SCORE  | CARDS")?;
    writeln!(out, "-----------------------------------------")?;
    writeln!(
        out,
        "{:<17}| {}",
        format!(" {} |  {}", player_label, player_score),
        player_cards
    )?;
    writeln!(
        out,
        "{:<17}| {}",
        format!(" {} |  {}", house_label, house_score),
        house_cards
    )?;
    writeln!(out, "-----------------------------------------")
}

pub fn announce_choice(
    out: &mut dyn Write,
    choice: &str,
    participant_label: &str,
) -> std::io::Result<()> {
    writeln!(out, "{} chose to {}", participant_label, choice)
}

pub fn announce_bust(out: &mut dyn Write, participant_label: &str) -> std::io::Result<()> {
    writeln!(out, "{} busted!", participant_label)
}

pub fn announce_winner(out: &mut dyn Write, participant_label: &str) -> std::io::Result<()> {
    writeln!(out, "{} won the game!", participant_label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_table_layout() {
        let mut out = Vec::new();
        show_table(&mut out, "Player", "19", "10♣  9♦", "House", "??", "??  5♥").unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(s.contains(" PLAYER | SCORE  | CARDS"));
        assert!(s.contains(" Player |  19"));
        assert!(s.contains("| 10♣  9♦"));
        assert!(s.contains(" House  |  ??") || s.contains(" House |  ??"));
    }

    #[test]
    fn test_announcements() {
        let mut out = Vec::new();
        announce_choice(&mut out, "hit", "Player").unwrap();
        announce_bust(&mut out, "Player").unwrap();
        announce_winner(&mut out, "House").unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(s.contains("Player chose to hit"));
        assert!(s.contains("Player busted!"));
        assert!(s.contains("House won the game!"));
    }

    #[test]
    fn test_clear_screen_emits_ansi() {
        let mut out = Vec::new();
        clear_screen(&mut out).unwrap();
        assert_eq!(out, b"\x1b[2J\x1b[1;1H");
    }
}
