use async_trait::async_trait;

use crate::domain::{DomainError, FavoritePlayer};

use super::ResultStream;

/// Persistence for the players a user follows.
#[async_trait]
pub trait FavoritePlayerRepository: Send + Sync {
    async fn add_favorite_player(&self, player: &FavoritePlayer) -> Result<(), DomainError>;

    async fn remove_favorite_player(&self, player_id: &str) -> Result<(), DomainError>;

    async fn is_favorite_player(&self, player_id: &str) -> Result<bool, DomainError>;

    /// Stream of favorite-player snapshots: the current list first, then one
    /// list per change.
    fn observe_favorite_players(&self) -> ResultStream<Vec<FavoritePlayer>>;

    /// Flip the favorite state of `player`. Returns the new state
    /// (`true` when the player is now a favorite).
    async fn toggle_favorite_player(&self, player: &FavoritePlayer) -> Result<bool, DomainError>;
}
