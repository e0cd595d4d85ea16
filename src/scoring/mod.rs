pub mod engine;
pub mod leaderboard;
pub mod matching;
pub mod multiplier;
pub mod records;

pub use engine::{score, score_roster, tally, ScoreBreakdown, TeamTally};
pub use leaderboard::{leaderboard, RankedSquad};
pub use multiplier::{team_multiplier, Multiplier};
pub use records::{goalkeeper_table, player_table, team_records};
