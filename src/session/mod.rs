//! Session state: live game plus per-size resume cache

/// Snapshot cache keyed by board size
pub mod cache;
/// Game session orchestration
pub mod game;

pub use cache::{Snapshot, SnapshotCache};
pub use game::{GameSession, MoveReport, SizeChange};
