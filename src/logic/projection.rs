//! Projection: generate a bracket for seeded participants and flatten it into round/match records.

use crate::logic::byes::advance_byes;
use crate::logic::rounds::group_by_round;
use crate::logic::topology::{build, MAX_PARTICIPANTS};
use crate::models::{
    BracketError, BracketType, Match, MatchRecord, RoundRecord, SeededParticipant, Side, Slot,
    SlotAssignment, SlotTeam, TeamOrder,
};
use uuid::Uuid;

/// Build, group and advance byes for `seeded` (best seed first), then flatten
/// into records the host application persists.
///
/// Winners rounds get positions 1, 2, ...; losers rounds -1, -2, ... Every round
/// gets a fresh id. Slots hold the participant of that seed, or the bye
/// sentinel; unreachable slots are left out.
pub fn to_persistable_rounds<P: SeededParticipant>(
    bracket_type: BracketType,
    seeded: &[P],
) -> Result<Vec<RoundRecord>, BracketError> {
    let participant_count = u32::try_from(seeded.len())
        .ok()
        .filter(|&n| n <= MAX_PARTICIPANTS)
        .ok_or_else(|| {
            BracketError::input(format!(
                "too many participants: {} (max {MAX_PARTICIPANTS})",
                seeded.len()
            ))
        })?;
    let bracket = build(participant_count, bracket_type)?;
    let rounds = advance_byes(&group_by_round(&bracket)?)?;

    let mut result = Vec::with_capacity(rounds.winners.len() + rounds.losers.len());
    for (sign, side) in [(1, Side::Winners), (-1, Side::Losers)] {
        for (i, round) in rounds.side(side).iter().enumerate() {
            let matches = round
                .iter()
                .map(|m| match_record(m, seeded))
                .collect::<Result<Vec<_>, _>>()?;
            result.push(RoundRecord {
                id: Uuid::new_v4(),
                position: sign * (i as i32 + 1),
                matches,
            });
        }
    }

    log::debug!(
        "Generated {} rounds for {} participants ({})",
        result.len(),
        participant_count,
        bracket_type
    );
    Ok(result)
}

fn match_record<P: SeededParticipant>(m: &Match, seeded: &[P]) -> Result<MatchRecord, BracketError> {
    let mut participants = Vec::with_capacity(2);
    for order in [TeamOrder::Upper, TeamOrder::Lower] {
        let Some(slot) = m.slot(order) else {
            continue;
        };
        let team = match slot {
            Slot::Bye => SlotTeam::BYE,
            Slot::Seed(seed) => {
                let participant = (seed as usize)
                    .checked_sub(1)
                    .and_then(|i| seeded.get(i))
                    .ok_or_else(|| {
                        BracketError::InvalidState(format!(
                            "seed {} has no participant; {} participants seeded",
                            seed,
                            seeded.len()
                        ))
                    })?;
                SlotTeam::Participant {
                    id: participant.participant_id(),
                }
            }
        };
        participants.push(SlotAssignment { team, order });
    }

    Ok(MatchRecord {
        id: m.id,
        position: m.position,
        number: m.number,
        winner_destination_match_id: m.winner_destination,
        loser_destination_match_id: m.loser_destination,
        participants,
    })
}
