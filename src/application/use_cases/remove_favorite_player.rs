use std::sync::Arc;

use crate::application::FavoritePlayerRepository;
use crate::domain::DomainError;

pub struct RemoveFavoritePlayerUseCase {
    player_repo: Arc<dyn FavoritePlayerRepository>,
}

impl RemoveFavoritePlayerUseCase {
    pub fn new(player_repo: Arc<dyn FavoritePlayerRepository>) -> Self {
        Self { player_repo }
    }

    pub async fn execute(&self, player_id: &str) -> Result<(), DomainError> {
        self.player_repo.remove_favorite_player(player_id).await
    }
}
