//! Topology: build the single/double elimination match graph for a participant count.

use crate::models::{Bracket, BracketError, BracketType, Match, MatchId, Slot};

/// Largest participant count a bracket is generated for.
pub const MAX_PARTICIPANTS: u32 = 1024;

/// Build the match graph for `participant_count` seeded participants.
///
/// 1. Round the count up to a power of two; seeds above the real count are byes.
/// 2. Winners side: balanced tree, first-round match `k` feeds round-2 match `ceil(k/2)`.
/// 3. Double elimination: losers side mirroring the dropouts of every winners
///    round, then grand finals and bracket reset appended to the winners side.
///
/// Double elimination needs at least 3 participants to have a losers side;
/// below that the bracket is single elimination.
pub fn build(participant_count: u32, bracket_type: BracketType) -> Result<Bracket, BracketError> {
    if participant_count < 1 {
        return Err(BracketError::input(
            "need at least 1 participant to build a bracket",
        ));
    }
    if participant_count > MAX_PARTICIPANTS {
        return Err(BracketError::input(format!(
            "too many participants: {participant_count} (max {MAX_PARTICIPANTS})"
        )));
    }
    let size = participant_count
        .checked_next_power_of_two()
        .ok_or_else(|| BracketError::input(format!("too many participants: {participant_count}")))?;
    let mut winners = winners_rounds(size);

    if let Some(first) = winners.first_mut() {
        for (m, pair) in first.iter_mut().zip(seed_order(size).chunks_exact(2)) {
            m.upper_team = Some(slot_for(pair[0], participant_count));
            m.lower_team = Some(slot_for(pair[1], participant_count));
        }
    }

    let is_de = bracket_type == BracketType::DoubleElimination && size >= 4;
    let losers = if is_de {
        let mut losers = losers_rounds(&mut winners);
        let grand_finals_position = winners.iter().map(|r| r.len() as i32).sum::<i32>() + 1;
        let mut grand_finals = Match::new(grand_finals_position, 1);
        let reset = Match::new(grand_finals_position + 1, 1);
        grand_finals.winner_destination = Some(reset.id);
        grand_finals.loser_destination = Some(reset.id);
        for m in winners.last_mut().into_iter().flatten() {
            m.winner_destination = Some(grand_finals.id);
        }
        for m in losers.last_mut().into_iter().flatten() {
            m.winner_destination = Some(grand_finals.id);
        }
        winners.push(vec![grand_finals]);
        winners.push(vec![reset]);
        losers
    } else {
        Vec::new()
    };

    log::debug!(
        "Built {} bracket for {} participants ({} slots): {} winners rounds, {} losers rounds",
        if is_de { "DE" } else { "SE" },
        participant_count,
        size,
        winners.len(),
        losers.len()
    );

    Ok(Bracket::new(
        winners.into_iter().flatten().collect(),
        losers.into_iter().flatten().collect(),
        size,
    ))
}

/// Standard bracket seeding for `size` slots, as consecutive (upper, lower) pairs.
/// Seeds 1 and 2 can only meet in the final; every pair sums to `size + 1`.
pub fn seed_order(size: u32) -> Vec<u32> {
    let mut order = vec![1];
    while (order.len() as u32) < size {
        let pair_sum = order.len() as u32 * 2 + 1;
        order = order.iter().flat_map(|&s| [s, pair_sum - s]).collect();
    }
    order
}

fn slot_for(seed: u32, participant_count: u32) -> Slot {
    if seed > participant_count {
        Slot::Bye
    } else {
        Slot::Seed(seed)
    }
}

fn ids(round: &[Match]) -> Vec<MatchId> {
    round.iter().map(|m| m.id).collect()
}

/// Winners tree without grand finals, linked round to round.
fn winners_rounds(size: u32) -> Vec<Vec<Match>> {
    let mut rounds: Vec<Vec<Match>> = Vec::new();
    let mut position = 0;
    let mut matches_in_round = size / 2;
    while matches_in_round >= 1 {
        let round = (1..=matches_in_round)
            .map(|number| {
                position += 1;
                Match::new(position, number)
            })
            .collect();
        rounds.push(round);
        matches_in_round /= 2;
    }

    for r in 1..rounds.len() {
        let next = ids(&rounds[r]);
        for (i, m) in rounds[r - 1].iter_mut().enumerate() {
            m.winner_destination = Some(next[i / 2]);
        }
    }
    rounds
}

/// Losers side for a winners tree of at least 2 rounds. Sets the loser
/// destinations of the winners matches as it goes.
///
/// Round 1 pairs the losers of winners round 1. Every later winners round
/// drops into a round that meets the previous losers survivors; a
/// consolidation round halves the survivors first when needed.
fn losers_rounds(winners: &mut [Vec<Match>]) -> Vec<Vec<Match>> {
    let mut rounds: Vec<Vec<Match>> = Vec::new();
    let mut position = 0;
    let mut new_round = |len: usize| -> Vec<Match> {
        (1..=len as u32)
            .map(|number| {
                position -= 1;
                Match::new(position, number)
            })
            .collect()
    };

    let first = new_round(winners[0].len() / 2);
    let first_ids = ids(&first);
    for (i, m) in winners[0].iter_mut().enumerate() {
        m.loser_destination = Some(first_ids[i / 2]);
    }
    rounds.push(first);

    for (w, winners_round) in winners.iter_mut().enumerate().skip(1) {
        let survivors = rounds.last().map_or(0, Vec::len);
        if survivors > winners_round.len() {
            let consolidation = new_round(survivors / 2);
            link_winners(rounds.last_mut(), &consolidation, |i| i / 2);
            rounds.push(consolidation);
        }

        let drop = new_round(winners_round.len());
        link_winners(rounds.last_mut(), &drop, |i| i);
        let drop_ids = ids(&drop);
        // Alternate the drop order so early rematches are pushed back.
        let reversed = w % 2 == 1;
        let len = drop_ids.len();
        for (i, m) in winners_round.iter_mut().enumerate() {
            let target = if reversed { len - 1 - i } else { i };
            m.loser_destination = Some(drop_ids[target]);
        }
        rounds.push(drop);
    }
    rounds
}

fn link_winners(from: Option<&mut Vec<Match>>, to: &[Match], target: impl Fn(usize) -> usize) {
    let to_ids = ids(to);
    for (i, m) in from.into_iter().flatten().enumerate() {
        m.winner_destination = Some(to_ids[target(i)]);
    }
}
