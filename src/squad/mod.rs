//! Squad data model, roster payload validation and the transfer diff.

pub mod diff;
pub mod roster;
pub mod types;

pub use diff::diff_roster;
pub use roster::{normalize, EntryPayload, NormalizedRoster, RosterLimits, RosterPayload};
pub use types::{NewTransfer, Roster, RosterEntry, SlotKind, Squad, Transfer, TransferAction};
