//! Tournament bracket engine: library with models and bracket generation logic.

pub mod logic;
pub mod models;

pub use logic::{
    advance_byes, build, count_rounds, default_best_of, group_by_round, losers_round_names,
    round_name_for, round_names, rounds_info, seed_order, to_persistable_rounds,
    winners_round_names, Rounds, MAX_PARTICIPANTS,
};
pub use models::{
    count_participants, format_name, BestOf, Bracket, BracketError, BracketType, ByeMarker,
    EliminationBracket, Match, MatchId, MatchRecord, ParticipantId, RoundId, RoundInfo,
    RoundRecord, SeededParticipant, Side, Slot, SlotAssignment, SlotTeam, TeamOrder,
    TournamentTeam, BEST_OF_OPTIONS, TEAM_MIN_MEMBERS_FOR_FULL,
};
