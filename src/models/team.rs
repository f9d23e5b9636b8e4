//! Tournament teams and the seeded-participant seam.

use crate::models::error::BracketError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a participant (team).
pub type ParticipantId = Uuid;

/// Roster size a checked-in team needs to be counted as a participant.
pub const TEAM_MIN_MEMBERS_FOR_FULL: usize = 4;

/// Anything that can be placed into a bracket slot by seed.
pub trait SeededParticipant {
    fn participant_id(&self) -> ParticipantId;
}

impl SeededParticipant for ParticipantId {
    fn participant_id(&self) -> ParticipantId {
        *self
    }
}

/// A team registered to a tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentTeam {
    pub id: ParticipantId,
    pub name: String,
    /// None if the team has not checked in.
    pub checked_in_at: Option<DateTime<Utc>>,
    pub members: Vec<String>,
}

impl TournamentTeam {
    /// Create a team with the given name and members, not checked in.
    pub fn new(name: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            checked_in_at: None,
            members,
        }
    }

    pub fn check_in(&mut self, at: DateTime<Utc>) {
        self.checked_in_at = Some(at);
    }

    pub fn is_checked_in(&self) -> bool {
        self.checked_in_at.is_some()
    }
}

impl SeededParticipant for TournamentTeam {
    fn participant_id(&self) -> ParticipantId {
        self.id
    }
}

/// Number of teams that take part in the bracket: checked-in teams only.
/// A checked-in team with a short roster is rejected.
pub fn count_participants(teams: &[TournamentTeam]) -> Result<usize, BracketError> {
    let mut count = 0;
    for team in teams.iter().filter(|t| t.is_checked_in()) {
        if team.members.len() < TEAM_MIN_MEMBERS_FOR_FULL {
            return Err(BracketError::input(format!(
                "team with id {} has too small roster: {}",
                team.id,
                team.members.len()
            )));
        }
        count += 1;
    }
    Ok(count)
}
