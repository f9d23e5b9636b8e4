//! Bye advancement: participants facing a bye in round 1 move straight into round 2.

use crate::logic::rounds::Rounds;
use crate::models::{BracketError, Match, MatchId, Slot, TeamOrder};
use std::collections::HashMap;

/// Return a copy of `rounds` where every first-round winners match against a
/// bye has its participant already placed in the round-2 destination.
///
/// Of the two first-round matches feeding a destination, the one with the
/// lower position feeds the upper slot. Only round 1 into round 2 of the
/// winners side is touched; later rounds never contain byes.
pub fn advance_byes(rounds: &Rounds) -> Result<Rounds, BracketError> {
    let first_round = rounds.winners.first().map(Vec::as_slice).unwrap_or_default();
    let feeders = destination_feeders(first_round);

    let mut advancing: Vec<(MatchId, TeamOrder, u32)> = Vec::new();
    for m in first_round {
        let Some(seed) = m.bye_survivor()? else {
            continue;
        };
        let destination = m.winner_destination.ok_or_else(|| {
            BracketError::invariant(format!("bye match {} has no winner destination", m.position))
        })?;
        let order = resolve_order(m, destination, &feeders)?;
        advancing.push((destination, order, seed));
    }

    let mut result = rounds.clone();
    if advancing.is_empty() {
        return Ok(result);
    }

    let second_round = result
        .winners
        .get_mut(1)
        .ok_or_else(|| BracketError::invariant("no second round in winners bracket"))?;
    for (destination, order, seed) in advancing {
        let m = second_round
            .iter_mut()
            .find(|m| m.id == destination)
            .ok_or_else(|| {
                BracketError::invariant(format!("destination {destination} is not in round 2"))
            })?;
        m.set_slot(order, Slot::Seed(seed));
        log::debug!("Seed {} advances on a bye into match {} ({:?})", seed, m.position, order);
    }
    Ok(result)
}

/// First-round positions feeding each destination match.
fn destination_feeders(first_round: &[Match]) -> HashMap<MatchId, Vec<i32>> {
    let mut feeders: HashMap<MatchId, Vec<i32>> = HashMap::new();
    for m in first_round {
        if let Some(destination) = m.winner_destination {
            feeders.entry(destination).or_default().push(m.position);
        }
    }
    feeders
}

fn resolve_order(
    current: &Match,
    destination: MatchId,
    feeders: &HashMap<MatchId, Vec<i32>>,
) -> Result<TeamOrder, BracketError> {
    let other = feeders
        .get(&destination)
        .and_then(|positions| positions.iter().find(|&&p| p != current.position))
        .ok_or_else(|| {
            BracketError::invariant(format!(
                "no other first-round match feeds the destination of match {}",
                current.position
            ))
        })?;
    Ok(if *other > current.position {
        TeamOrder::Upper
    } else {
        TeamOrder::Lower
    })
}
