/// Single-line pack, merge, and pad
pub mod compress;
/// Directional whole-board moves
pub mod moves;
/// Random tile placement
pub mod spawn;
/// Game-over detection
pub mod terminal;

pub use compress::{Compressed, compress};
pub use moves::{MoveOutcome, apply_move, can_move};
pub use spawn::{SpawnedTile, TileSpawner};
pub use terminal::is_game_over;
