//! # Play Command
//!
//! Interactive Twenty-One gameplay against the house.
//!
//! This module drives the round state machine end to end: welcome, initial
//! deal, player turn, conditional house turn, winner resolution, and the
//! replay loop. The player's hit/stand choice and the replay confirmation
//! are the only two points where execution blocks on input; the house
//! decides deterministically through the engine.
//!
//! ## Features
//!
//! - Interactive input validation with re-prompting on invalid input
//! - Concealed house hand until the house turn begins
//! - Fixed pacing delay after announcements for readable play
//! - Graceful session end on closed stdin

use std::io::{BufRead, Write};
use std::time::Duration;

use twentyone_engine::game::Game;
use twentyone_engine::participant::{Choice, Role};

use crate::config;
use crate::error::CliError;
use crate::formatters::{
    self, format_choice, format_hand, format_hand_concealed, format_score,
};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_choice, parse_yes_no};

/// Outcome of one participant's turn.
enum TurnStatus {
    /// Turn ended by stand or bust
    Done,
    /// Stdin reached EOF mid-turn; the session ends
    InputClosed,
}

/// Handle the play command: interactive rounds until the player declines a
/// replay or stdin closes.
///
/// # Arguments
///
/// * `seed` - RNG seed for reproducibility (default: config, then random)
/// * `ascii` - Force ASCII suit letters
/// * `pacing_ms` - Pacing delay override in milliseconds (default: config)
/// * `out` - Output stream for game display
/// * `err` - Error stream for failures
/// * `stdin` - Input stream for player choices
///
/// # Returns
///
/// * `Ok(())` when the session ends normally
/// * `Err(CliError)` on configuration failure, I/O errors, or an exhausted
///   deck (fatal; never silently continued)
pub fn handle_play_command(
    seed: Option<u64>,
    ascii: bool,
    pacing_ms: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = match config::load() {
        Ok(c) => c,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let unicode = formatters::supports_unicode() && !ascii && !cfg.ascii;
    let pacing = Duration::from_millis(pacing_ms.unwrap_or(cfg.pacing_ms));

    let mut game = Game::new(Some(seed));
    game.shuffle();

    ui::show_welcome(out)?;
    pause(pacing);

    loop {
        game.deal_initial()?;

        if let TurnStatus::InputClosed =
            run_turn(&mut game, Role::Player, unicode, pacing, stdin, out)?
        {
            break;
        }

        if !game.participant(Role::Player).is_bust() {
            game.begin_house_turn();
            run_turn(&mut game, Role::House, unicode, pacing, stdin, out)?;
        }

        ui::announce_winner(out, game.winner().label())?;

        match prompt_replay(stdin, out)? {
            Some(true) => game.reset(),
            Some(false) | None => break,
        }
    }

    ui::show_goodbye(out)?;
    Ok(())
}

/// One participant's turn: render, decide, announce, deal on hit, until
/// stand or bust. Mirrors the round protocol exactly; no numeric return.
fn run_turn(
    game: &mut Game,
    role: Role,
    unicode: bool,
    pacing: Duration,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<TurnStatus, CliError> {
    loop {
        show_table(game, unicode, out)?;

        let choice = match game.participant(role).decide() {
            Some(c) => c,
            None => match prompt_choice(stdin, out)? {
                Some(c) => c,
                None => return Ok(TurnStatus::InputClosed),
            },
        };

        ui::announce_choice(out, format_choice(choice), role.label())?;
        pause(pacing);

        if choice == Choice::Hit {
            game.deal_to(role)?;
        }
        if game.participant(role).is_bust() || choice == Choice::Stand {
            break;
        }
    }

    show_table(game, unicode, out)?;
    if game.participant(role).is_bust() {
        ui::announce_bust(out, role.label())?;
    }
    Ok(TurnStatus::Done)
}

/// Prompt for the player's choice, re-prompting until valid. `None` on EOF.
fn prompt_choice(
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<Option<Choice>, CliError> {
    loop {
        writeln!(out, "Hit or Stand? (type H or S)")?;
        let Some(line) = read_stdin_line(stdin) else {
            return Ok(None);
        };
        match parse_choice(&line) {
            ParseResult::Choice(c) => return Ok(Some(c)),
            ParseResult::Invalid(msg) => writeln!(out, "{}", msg)?,
        }
    }
}

/// Prompt for replay confirmation, re-prompting until y/n. `None` on EOF.
fn prompt_replay(
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<Option<bool>, CliError> {
    loop {
        writeln!(out, "Would you like to play again? (y/n)")?;
        let Some(line) = read_stdin_line(stdin) else {
            return Ok(None);
        };
        match parse_yes_no(&line) {
            Some(again) => return Ok(Some(again)),
            None => writeln!(out, "Sorry, must be y or n")?,
        }
    }
}

/// Clear the screen and render the current table, concealing the house hand
/// until it has been revealed.
fn show_table(game: &Game, unicode: bool, out: &mut dyn Write) -> Result<(), CliError> {
    let player = game.participant(Role::Player);
    let house = game.participant(Role::House);
    let house_cards = if house.is_revealed() {
        format_hand(house.hand().cards(), unicode)
    } else {
        format_hand_concealed(house.hand().cards(), unicode)
    };

    ui::clear_screen(out)?;
    ui::show_table(
        out,
        player.label(),
        &format_score(player.displayed_score()),
        &format_hand(player.hand().cards(), unicode),
        house.label(),
        &format_score(house.displayed_score()),
        &house_cards,
    )?;
    Ok(())
}

fn pause(pacing: Duration) {
    if !pacing.is_zero() {
        std::thread::sleep(pacing);
    }
}
