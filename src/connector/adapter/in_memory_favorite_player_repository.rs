use async_trait::async_trait;
use tokio::sync::{watch, Mutex};
use tracing::debug;

use crate::application::{FavoritePlayerRepository, ResultStream};
use crate::domain::{DomainError, FavoritePlayer};

use super::snapshot_stream::snapshot_stream;

/// Favorite players held in process memory, ordered by `added_at` then id.
pub struct InMemoryFavoritePlayerRepository {
    players: Mutex<Vec<FavoritePlayer>>,
    snapshots: watch::Sender<Vec<FavoritePlayer>>,
}

impl InMemoryFavoritePlayerRepository {
    pub fn new() -> Self {
        let (snapshots, _) = watch::channel(Vec::new());
        Self {
            players: Mutex::new(Vec::new()),
            snapshots,
        }
    }

    fn upsert(players: &mut Vec<FavoritePlayer>, player: &FavoritePlayer) {
        match players.iter_mut().find(|p| p.id() == player.id()) {
            Some(existing) => {
                let added_at = existing.added_at();
                *existing = player.clone().with_added_at(added_at);
            }
            None => {
                players.push(player.clone());
                Self::sort(players);
            }
        }
    }

    fn sort(players: &mut [FavoritePlayer]) {
        players.sort_by(|a, b| (a.added_at(), a.id()).cmp(&(b.added_at(), b.id())));
    }

    fn publish(&self, players: &[FavoritePlayer]) {
        self.snapshots.send_replace(players.to_vec());
    }
}

impl Default for InMemoryFavoritePlayerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FavoritePlayerRepository for InMemoryFavoritePlayerRepository {
    async fn add_favorite_player(&self, player: &FavoritePlayer) -> Result<(), DomainError> {
        let mut players = self.players.lock().await;
        Self::upsert(&mut players, player);
        self.publish(&players);

        debug!("Added favorite player {} to memory", player.id());
        Ok(())
    }

    async fn remove_favorite_player(&self, player_id: &str) -> Result<(), DomainError> {
        let mut players = self.players.lock().await;
        let before = players.len();
        players.retain(|p| p.id() != player_id);

        if players.len() != before {
            self.publish(&players);
            debug!("Removed favorite player {} from memory", player_id);
        }
        Ok(())
    }

    async fn is_favorite_player(&self, player_id: &str) -> Result<bool, DomainError> {
        let players = self.players.lock().await;
        Ok(players.iter().any(|p| p.id() == player_id))
    }

    fn observe_favorite_players(&self) -> ResultStream<Vec<FavoritePlayer>> {
        snapshot_stream(self.snapshots.subscribe())
    }

    async fn toggle_favorite_player(&self, player: &FavoritePlayer) -> Result<bool, DomainError> {
        let mut players = self.players.lock().await;

        let now_favorite = if players.iter().any(|p| p.id() == player.id()) {
            players.retain(|p| p.id() != player.id());
            false
        } else {
            players.push(player.clone());
            Self::sort(&mut players);
            true
        };
        self.publish(&players);

        debug!(
            "Toggled favorite player {} (favorite: {})",
            player.id(),
            now_favorite
        );
        Ok(now_favorite)
    }
}
