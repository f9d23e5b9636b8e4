//! Round metadata: round counts, display names and default best-of per round.

use crate::models::{BestOf, Bracket, BracketError, EliminationBracket, RoundInfo, Side, Slot};

const WINNERS_DEFAULT: BestOf = BestOf::FIVE;
const WINNERS_FIRST_TWO_DEFAULT: BestOf = BestOf::THREE;
const GRAND_FINALS_DEFAULT: BestOf = BestOf::SEVEN;
const GRAND_FINALS_RESET_DEFAULT: BestOf = BestOf::SEVEN;
const LOSERS_DEFAULT: BestOf = BestOf::THREE;
const LOSERS_FINALS_DEFAULT: BestOf = BestOf::FIVE;

/// Number of rounds on each side.
///
/// Winners: `log2(participants_with_byes_count)`, plus grand finals and bracket
/// reset in double elimination. Losers: length of the winner-destination chain
/// starting at the first losers match.
///
/// With `skip_first_round_losers_if_not_played`, the first losers round is not
/// counted when at least as many first-round winners matches are byes as are
/// real matches: that round has nobody to play.
pub fn count_rounds(
    bracket: &Bracket,
    skip_first_round_losers_if_not_played: bool,
) -> EliminationBracket<usize> {
    let is_de = bracket.is_double_elimination();
    let mut winners = bracket.participants_with_byes_count.trailing_zeros() as usize;
    if is_de {
        winners += 2;
    } else {
        return EliminationBracket { winners, losers: 0 };
    }

    let mut losers = 0;
    let mut current = bracket.losers.first();
    while let Some(m) = current {
        losers += 1;
        current = m
            .winner_destination
            .filter(|&id| bracket.side_of(id) == Some(Side::Losers))
            .and_then(|id| bracket.get(id));
    }

    let (matches_with_byes, matches_with_opponent) =
        bracket.first_round().fold((0usize, 0usize), |(byes, opponents), m| {
            if m.upper_team.is_some_and(Slot::is_bye) || m.lower_team.is_some_and(Slot::is_bye) {
                (byes + 1, opponents)
            } else {
                (byes, opponents + 1)
            }
        });

    if skip_first_round_losers_if_not_played
        && matches_with_byes > 0
        && matches_with_byes >= matches_with_opponent
    {
        losers -= 1;
    }

    EliminationBracket { winners, losers }
}

/// Winners round names. Grand finals, winners' finals and semifinals are
/// counted back from the end; single elimination has no bracket reset so
/// everything shifts by one.
pub fn winners_round_names(count: usize, is_se: bool) -> Vec<String> {
    let count = count as i64;
    let offset = i64::from(is_se);
    (0..count)
        .map(|i| {
            if i == count - 4 + offset {
                "Winners' Semifinals".to_string()
            } else if i == count - 3 + offset {
                "Winners' Finals".to_string()
            } else if i == count - 2 + offset {
                "Grand Finals".to_string()
            } else if !is_se && i == count - 1 {
                "Bracket Reset".to_string()
            } else {
                format!("Winners' Round {}", i + 1)
            }
        })
        .collect()
}

pub fn losers_round_names(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            if i == count - 1 {
                "Losers' Finals".to_string()
            } else {
                format!("Losers' Round {}", i + 1)
            }
        })
        .collect()
}

pub fn round_names(bracket: &Bracket) -> EliminationBracket<Vec<String>> {
    let counts = count_rounds(bracket, true);
    EliminationBracket {
        winners: winners_round_names(counts.winners, counts.losers == 0),
        losers: losers_round_names(counts.losers),
    }
}

/// Default best-of for every round, used until an organizer overrides them.
pub fn default_best_of(bracket: &Bracket) -> EliminationBracket<Vec<BestOf>> {
    let counts = count_rounds(bracket, true);
    let winners_count = counts.winners as i64;
    let losers_count = counts.losers;
    let offset = i64::from(losers_count == 0);

    EliminationBracket {
        winners: (0..winners_count)
            .map(|i| {
                if i == 0 || i == 1 {
                    WINNERS_FIRST_TWO_DEFAULT
                } else if i == winners_count - 2 + offset {
                    GRAND_FINALS_DEFAULT
                } else if i == winners_count - 1 {
                    GRAND_FINALS_RESET_DEFAULT
                } else {
                    WINNERS_DEFAULT
                }
            })
            .collect(),
        losers: (0..losers_count)
            .map(|i| {
                if i == losers_count - 1 {
                    LOSERS_FINALS_DEFAULT
                } else {
                    LOSERS_DEFAULT
                }
            })
            .collect(),
    }
}

/// Name and default best-of of every round.
pub fn rounds_info(bracket: &Bracket) -> Result<EliminationBracket<Vec<RoundInfo>>, BracketError> {
    let names = round_names(bracket);
    let best_of = default_best_of(bracket);

    let zip = |names: Vec<String>, best_of: &[BestOf], side: &str| {
        names
            .into_iter()
            .enumerate()
            .map(|(i, name)| -> Result<RoundInfo, BracketError> {
                let best_of = *best_of
                    .get(i)
                    .ok_or_else(|| BracketError::invariant(format!("best of undefined in {side}")))?;
                Ok(RoundInfo { name, best_of })
            })
            .collect::<Result<Vec<_>, BracketError>>()
    };

    Ok(EliminationBracket {
        winners: zip(names.winners, best_of.winners.as_slice(), "winners")?,
        losers: zip(names.losers, best_of.losers.as_slice(), "losers")?,
    })
}

/// Round name (e.g. "Winners' Round 1") from signed round positions.
///
/// `all_positions` holds one position per round: positive for winners rounds,
/// negative for losers rounds.
pub fn round_name_for(position: i32, all_positions: &[i32]) -> Result<String, BracketError> {
    let winners_count = all_positions.iter().filter(|&&p| p > 0).count();
    let losers_count = all_positions.iter().filter(|&&p| p < 0).count();

    let names = if position > 0 {
        winners_round_names(winners_count, losers_count == 0)
    } else {
        losers_round_names(losers_count)
    };

    let index = (position.unsigned_abs() as usize).checked_sub(1);
    index
        .and_then(|i| names.into_iter().nth(i))
        .ok_or_else(|| BracketError::invariant(format!("no round name found for position {position}")))
}
