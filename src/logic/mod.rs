//! Bracket engine: topology, round grouping, bye advancement, round metadata and projection.

mod byes;
mod metadata;
mod projection;
mod rounds;
mod topology;

pub use byes::advance_byes;
pub use metadata::{
    count_rounds, default_best_of, losers_round_names, round_name_for, round_names, rounds_info,
    winners_round_names,
};
pub use projection::to_persistable_rounds;
pub use rounds::{group_by_round, Rounds};
pub use topology::{build, seed_order, MAX_PARTICIPANTS};
