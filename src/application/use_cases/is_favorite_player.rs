use std::sync::Arc;

use crate::application::FavoritePlayerRepository;
use crate::domain::DomainError;

/// Use case for checking whether a player is followed.
pub struct IsFavoritePlayerUseCase {
    player_repo: Arc<dyn FavoritePlayerRepository>,
}

impl IsFavoritePlayerUseCase {
    pub fn new(player_repo: Arc<dyn FavoritePlayerRepository>) -> Self {
        Self { player_repo }
    }

    pub async fn execute(&self, player_id: &str) -> Result<bool, DomainError> {
        self.player_repo.is_favorite_player(player_id).await
    }
}
