use std::sync::Arc;

use crate::application::{FavoritePlayerRepository, ResultStream};
use crate::domain::FavoritePlayer;

/// Use case for watching the followed-players list.
///
/// The returned stream is the repository's own; its emission and error
/// semantics are whatever the repository provides.
pub struct ObserveFavoritePlayersUseCase {
    player_repo: Arc<dyn FavoritePlayerRepository>,
}

impl ObserveFavoritePlayersUseCase {
    pub fn new(player_repo: Arc<dyn FavoritePlayerRepository>) -> Self {
        Self { player_repo }
    }

    pub fn execute(&self) -> ResultStream<Vec<FavoritePlayer>> {
        self.player_repo.observe_favorite_players()
    }
}
