mod duckdb_favorite_player_repository;
mod duckdb_favorite_team_repository;
mod http_highlight_repository;
mod in_memory_favorite_player_repository;
mod in_memory_favorite_team_repository;
mod in_memory_highlight_repository;
mod snapshot_stream;

pub use duckdb_favorite_player_repository::*;
pub use duckdb_favorite_team_repository::*;
pub use http_highlight_repository::*;
pub use in_memory_favorite_player_repository::*;
pub use in_memory_favorite_team_repository::*;
pub use in_memory_highlight_repository::*;
