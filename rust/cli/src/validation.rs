//! Input parsing and validation for interactive prompts.
//!
//! This module parses the two kinds of interactive input the game accepts:
//! the player's hit/stand choice and the replay confirmation. Invalid input
//! is reported back with a short message and recovered by re-prompting; it
//! never becomes a process failure.

use twentyone_engine::participant::Choice;

/// Result type for parsing the player's turn input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid choice parsed from input
    Choice(Choice),
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into a turn [`Choice`].
///
/// Accepts exactly the single letters "h" (Hit) and "s" (Stand),
/// case-insensitive; anything else, full words included, is invalid and
/// triggers a re-prompt.
///
/// # Example
///
/// ```rust
/// # use twentyone_cli::validation::{parse_choice, ParseResult};
/// use twentyone_engine::participant::Choice;
///
/// assert_eq!(parse_choice("h"), ParseResult::Choice(Choice::Hit));
/// assert_eq!(parse_choice("S"), ParseResult::Choice(Choice::Stand));
///
/// match parse_choice("stand") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("valid choice")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_choice(input: &str) -> ParseResult {
    match input.trim().to_lowercase().as_str() {
        "h" => ParseResult::Choice(Choice::Hit),
        "s" => ParseResult::Choice(Choice::Stand),
        _ => ParseResult::Invalid("Sorry, that's not a valid choice".to_string()),
    }
}

/// Parse a yes/no answer for the replay prompt.
///
/// Accepts exactly "y" and "n", case-insensitive. Returns `Some(true)` for
/// "y", `Some(false)` for "n", and `None` for anything else, in which case
/// the caller re-prompts.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}
