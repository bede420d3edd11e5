use crate::hand::HIGHEST_SCORE;
use crate::participant::{Choice, Role};

/// Score at which the house stops hitting.
pub const HOUSE_STAND_SCORE: u32 = 17;

/// Deterministic house decision policy: stand at or above
/// [`HOUSE_STAND_SCORE`], hit below it.
///
/// # Examples
///
/// ```
/// use twentyone_engine::rules::house_policy;
/// use twentyone_engine::participant::Choice;
///
/// assert_eq!(house_policy(16), Choice::Hit);
/// assert_eq!(house_policy(17), Choice::Stand);
/// ```
pub fn house_policy(score: u32) -> Choice {
    if score >= HOUSE_STAND_SCORE {
        Choice::Stand
    } else {
        Choice::Hit
    }
}

/// Determines the round winner from both final scores.
///
/// A busted player loses unconditionally regardless of the house hand; a
/// busted house loses to any standing player. Otherwise the house wins ties
/// and every case where its score is at least the player's; the player wins
/// only on a strictly greater score.
///
/// # Examples
///
/// ```
/// use twentyone_engine::rules::resolve_winner;
/// use twentyone_engine::participant::Role;
///
/// assert_eq!(resolve_winner(19, 19), Role::House); // house wins ties
/// assert_eq!(resolve_winner(20, 19), Role::Player);
/// assert_eq!(resolve_winner(22, 16), Role::House); // player bust
/// ```
pub fn resolve_winner(player_score: u32, house_score: u32) -> Role {
    if player_score > HIGHEST_SCORE {
        Role::House
    } else if house_score > HIGHEST_SCORE {
        Role::Player
    } else if house_score >= player_score {
        Role::House
    } else {
        Role::Player
    }
}
