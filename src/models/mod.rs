//! Data structures for the bracket engine: match graph, teams, round records, errors.

mod bracket;
mod error;
mod round;
mod team;

pub use bracket::{
    format_name, Bracket, BracketType, EliminationBracket, Match, MatchId, Side, Slot, TeamOrder,
};
pub use error::BracketError;
pub use round::{
    BestOf, ByeMarker, MatchRecord, RoundId, RoundInfo, RoundRecord, SlotAssignment, SlotTeam,
    BEST_OF_OPTIONS,
};
pub use team::{
    count_participants, ParticipantId, SeededParticipant, TournamentTeam, TEAM_MIN_MEMBERS_FOR_FULL,
};
