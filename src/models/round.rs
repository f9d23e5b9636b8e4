//! Round metadata and the flat round/match records handed to persistence.

use crate::models::bracket::{MatchId, TeamOrder};
use crate::models::error::BracketError;
use crate::models::team::ParticipantId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a round.
pub type RoundId = Uuid;

/// Best-of values an organizer can pick for a round.
pub const BEST_OF_OPTIONS: [u8; 4] = [3, 5, 7, 9];

/// Number of games in a set: always one of [`BEST_OF_OPTIONS`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BestOf(u8);

impl BestOf {
    pub const THREE: BestOf = BestOf(3);
    pub const FIVE: BestOf = BestOf(5);
    pub const SEVEN: BestOf = BestOf(7);

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for BestOf {
    type Error = BracketError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if BEST_OF_OPTIONS.contains(&value) {
            Ok(BestOf(value))
        } else {
            Err(BracketError::input(format!(
                "best of {value} is not one of {BEST_OF_OPTIONS:?}"
            )))
        }
    }
}

impl From<BestOf> for u8 {
    fn from(value: BestOf) -> Self {
        value.0
    }
}

/// Display metadata for one round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundInfo {
    pub name: String,
    pub best_of: BestOf,
}

/// Marker serialized as the string `"BYE"`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ByeMarker {
    #[serde(rename = "BYE")]
    Bye,
}

/// Occupant of a persisted slot: a participant or the bye sentinel.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotTeam {
    Bye(ByeMarker),
    Participant { id: ParticipantId },
}

impl SlotTeam {
    pub const BYE: SlotTeam = SlotTeam::Bye(ByeMarker::Bye);

    pub fn participant_id(&self) -> Option<ParticipantId> {
        match self {
            SlotTeam::Participant { id } => Some(*id),
            SlotTeam::Bye(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SlotAssignment {
    pub team: SlotTeam,
    pub order: TeamOrder,
}

/// One match as stored by the host application.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub position: i32,
    pub number: u32,
    pub winner_destination_match_id: Option<MatchId>,
    pub loser_destination_match_id: Option<MatchId>,
    /// Only populated slots; upper first.
    pub participants: Vec<SlotAssignment>,
}

/// One round as stored by the host application.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub id: RoundId,
    /// Winners rounds 1, 2, ...; losers rounds -1, -2, ...
    pub position: i32,
    pub matches: Vec<MatchRecord>,
}
