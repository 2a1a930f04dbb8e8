use std::sync::Arc;

use crate::application::FavoritePlayerRepository;
use crate::domain::{DomainError, FavoritePlayer};

/// Use case for following a player.
pub struct AddFavoritePlayerUseCase {
    player_repo: Arc<dyn FavoritePlayerRepository>,
}

impl AddFavoritePlayerUseCase {
    pub fn new(player_repo: Arc<dyn FavoritePlayerRepository>) -> Self {
        Self { player_repo }
    }

    pub async fn execute(&self, player: &FavoritePlayer) -> Result<(), DomainError> {
        self.player_repo.add_favorite_player(player).await
    }
}
