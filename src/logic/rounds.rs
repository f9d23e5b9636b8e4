//! Round grouping: partition the match graph into ordered rounds per side.

use crate::logic::metadata::count_rounds;
use crate::models::{Bracket, BracketError, EliminationBracket, Match, MatchId, Side};
use std::collections::HashSet;

/// Matches of each side grouped by round, round 1 first.
pub type Rounds = EliminationBracket<Vec<Vec<Match>>>;

/// Group the matches of `bracket` by round.
///
/// Starting at every first-round winners match, follow winner destinations
/// towards the final; a match's round is its distance from the start. The
/// loser destination of each first-round match starts the same walk on the
/// losers side. Paths converge, so matches already placed are skipped.
///
/// Every match must be placed exactly once.
pub fn group_by_round(bracket: &Bracket) -> Result<Rounds, BracketError> {
    let counts = count_rounds(bracket, false);
    let mut result = Rounds {
        winners: vec![Vec::new(); counts.winners],
        losers: vec![Vec::new(); counts.losers],
    };
    let mut visited: HashSet<MatchId> = HashSet::new();

    for m in bracket.winners.iter().filter(|m| m.is_seeded()) {
        place_chain(bracket, Some(m.id), Side::Winners, &mut visited, &mut result)?;
        place_chain(bracket, m.loser_destination, Side::Losers, &mut visited, &mut result)?;
    }

    if visited.len() != bracket.match_count() {
        return Err(BracketError::invariant(format!(
            "grouped {} matches; winners: {}; losers: {}",
            visited.len(),
            bracket.winners.len(),
            bracket.losers.len()
        )));
    }

    log::debug!(
        "Grouped {} matches into {} winners and {} losers rounds",
        visited.len(),
        result.winners.len(),
        result.losers.len()
    );
    Ok(result)
}

/// Place `start` and its unplaced winner destinations at increasing depth.
fn place_chain(
    bracket: &Bracket,
    start: Option<MatchId>,
    side: Side,
    visited: &mut HashSet<MatchId>,
    result: &mut Rounds,
) -> Result<(), BracketError> {
    let mut depth = 1;
    let mut current = start;
    while let Some(id) = current {
        if !visited.insert(id) {
            break;
        }
        let m = bracket
            .get(id)
            .ok_or_else(|| BracketError::invariant(format!("unresolved destination match {id}")))?;
        result
            .side_mut(side)
            .get_mut(depth - 1)
            .ok_or_else(|| {
                BracketError::invariant(format!("no {side:?} round {depth} for match {}", m.position))
            })?
            .push(m.clone());
        current = m.winner_destination;
        depth += 1;
    }
    Ok(())
}
