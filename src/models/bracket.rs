//! Match graph: matches, slots, the bracket arena and its two sides.

use crate::models::error::BracketError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Single or double elimination.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum BracketType {
    #[default]
    #[serde(rename = "SE")]
    SingleElimination,
    #[serde(rename = "DE")]
    DoubleElimination,
}

impl BracketType {
    /// Name shown to users, e.g. "Double Elimination".
    pub fn format_name(self) -> &'static str {
        match self {
            BracketType::SingleElimination => "Single Elimination",
            BracketType::DoubleElimination => "Double Elimination",
        }
    }
}

impl FromStr for BracketType {
    type Err = BracketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SE" => Ok(BracketType::SingleElimination),
            "DE" => Ok(BracketType::DoubleElimination),
            other => Err(BracketError::input(format!("unknown bracket type: {other}"))),
        }
    }
}

impl fmt::Display for BracketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BracketType::SingleElimination => write!(f, "SE"),
            BracketType::DoubleElimination => write!(f, "DE"),
        }
    }
}

/// Resolve a collection of brackets to the format string shown to users.
/// The first bracket decides.
pub fn format_name(brackets: &[BracketType]) -> Result<&'static str, BracketError> {
    brackets
        .first()
        .map(|t| t.format_name())
        .ok_or_else(|| BracketError::input("no brackets"))
}

/// Occupant of one side of a match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// 1-based seed of a real participant.
    Seed(u32),
    /// No opponent: the other participant advances without playing.
    Bye,
}

impl Slot {
    pub fn is_bye(self) -> bool {
        matches!(self, Slot::Bye)
    }
}

/// Which slot of a match a participant occupies.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamOrder {
    Upper,
    Lower,
}

/// One node of the match graph. Destinations are edges into the owning
/// [`Bracket`], never ownership.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    /// Positive on the winners side, negative on the losers side. Magnitude is
    /// the 1-based ordinal within the side, round 1 first.
    pub position: i32,
    /// 1-based index within its round.
    pub number: u32,
    /// None until the match is reachable.
    pub upper_team: Option<Slot>,
    pub lower_team: Option<Slot>,
    pub winner_destination: Option<MatchId>,
    /// Double elimination only.
    pub loser_destination: Option<MatchId>,
}

impl Match {
    pub(crate) fn new(position: i32, number: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            number,
            upper_team: None,
            lower_team: None,
            winner_destination: None,
            loser_destination: None,
        }
    }

    pub fn slot(&self, order: TeamOrder) -> Option<Slot> {
        match order {
            TeamOrder::Upper => self.upper_team,
            TeamOrder::Lower => self.lower_team,
        }
    }

    pub(crate) fn set_slot(&mut self, order: TeamOrder, slot: Slot) {
        match order {
            TeamOrder::Upper => self.upper_team = Some(slot),
            TeamOrder::Lower => self.lower_team = Some(slot),
        }
    }

    /// Both slots are populated (first-round match).
    pub fn is_seeded(&self) -> bool {
        self.upper_team.is_some() && self.lower_team.is_some()
    }

    /// The one real participant of a match against a bye.
    /// Errors on a match with byes in both slots.
    pub fn bye_survivor(&self) -> Result<Option<u32>, BracketError> {
        match (self.upper_team, self.lower_team) {
            (Some(Slot::Bye), Some(Slot::Bye)) => Err(BracketError::invariant(format!(
                "match {} has a bye in both slots",
                self.position
            ))),
            (Some(Slot::Seed(seed)), Some(Slot::Bye)) | (Some(Slot::Bye), Some(Slot::Seed(seed))) => {
                Ok(Some(seed))
            }
            _ => Ok(None),
        }
    }
}

/// A pair of values for the two sides of an elimination bracket.
/// For single elimination `losers` is empty.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct EliminationBracket<T> {
    pub winners: T,
    pub losers: T,
}

/// Which side of the bracket a match or round lives on.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Winners,
    Losers,
}

impl<T> EliminationBracket<T> {
    pub fn side(&self, side: Side) -> &T {
        match side {
            Side::Winners => &self.winners,
            Side::Losers => &self.losers,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Winners => &mut self.winners,
            Side::Losers => &mut self.losers,
        }
    }
}

/// Full match graph of one tournament stage.
///
/// Matches on each side are ordered round by round, round 1 first. Grand finals
/// and bracket reset are the last two winners matches of a double elimination
/// bracket.
#[derive(Clone, Debug)]
pub struct Bracket {
    pub winners: Vec<Match>,
    pub losers: Vec<Match>,
    /// Participant count rounded up to the next power of two.
    pub participants_with_byes_count: u32,
    index: HashMap<MatchId, (Side, usize)>,
}

impl Bracket {
    pub(crate) fn new(winners: Vec<Match>, losers: Vec<Match>, participants_with_byes_count: u32) -> Self {
        let index = winners
            .iter()
            .enumerate()
            .map(|(i, m)| (m.id, (Side::Winners, i)))
            .chain(losers.iter().enumerate().map(|(i, m)| (m.id, (Side::Losers, i))))
            .collect();
        Self {
            winners,
            losers,
            participants_with_byes_count,
            index,
        }
    }

    /// Match with this id. None if the id is unknown or the sides were
    /// reordered since the bracket was built.
    pub fn get(&self, id: MatchId) -> Option<&Match> {
        let &(side, i) = self.index.get(&id)?;
        let m = match side {
            Side::Winners => self.winners.get(i),
            Side::Losers => self.losers.get(i),
        }?;
        (m.id == id).then_some(m)
    }

    /// Side the match with this id lives on.
    pub fn side_of(&self, id: MatchId) -> Option<Side> {
        self.index.get(&id).map(|&(side, _)| side)
    }

    pub fn is_double_elimination(&self) -> bool {
        !self.losers.is_empty()
    }

    pub fn match_count(&self) -> usize {
        self.winners.len() + self.losers.len()
    }

    /// Leading winners matches that have participants assigned.
    pub fn first_round(&self) -> impl Iterator<Item = &Match> {
        self.winners.iter().take_while(|m| m.upper_team.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bracket_of_three() -> Bracket {
        let mut first = Match::new(1, 1);
        let mut second = Match::new(2, 2);
        let last = Match::new(3, 1);
        first.winner_destination = Some(last.id);
        second.winner_destination = Some(last.id);
        Bracket::new(vec![first, second, last], Vec::new(), 4)
    }

    #[test]
    fn get_finds_matches_by_id() {
        let b = bracket_of_three();
        for m in &b.winners {
            assert_eq!(b.get(m.id), Some(m));
        }
        assert_eq!(b.get(Uuid::new_v4()), None);
    }

    #[test]
    fn get_after_reordering_returns_none() {
        let mut b = bracket_of_three();
        let first_id = b.winners[0].id;
        b.winners.swap(0, 1);
        assert_eq!(b.get(first_id), None);
        b.winners.clear();
        assert_eq!(b.get(first_id), None);
    }

    #[test]
    fn bye_slots() {
        assert!(Slot::Bye.is_bye());
        assert!(!Slot::Seed(1).is_bye());
        let mut m = Match::new(1, 1);
        m.set_slot(TeamOrder::Lower, Slot::Bye);
        assert_eq!(m.slot(TeamOrder::Upper), None);
        assert_eq!(m.slot(TeamOrder::Lower), Some(Slot::Bye));
    }
}
