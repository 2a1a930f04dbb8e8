use std::sync::Arc;

use crate::application::FavoritePlayerRepository;
use crate::domain::{DomainError, FavoritePlayer};

pub struct ToggleFavoritePlayerUseCase {
    player_repo: Arc<dyn FavoritePlayerRepository>,
}

impl ToggleFavoritePlayerUseCase {
    pub fn new(player_repo: Arc<dyn FavoritePlayerRepository>) -> Self {
        Self { player_repo }
    }

    /// Returns `true` when the player is a favorite after the call.
    pub async fn execute(&self, player: &FavoritePlayer) -> Result<bool, DomainError> {
        self.player_repo.toggle_favorite_player(player).await
    }
}
