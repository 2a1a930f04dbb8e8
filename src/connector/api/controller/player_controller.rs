use anyhow::{Context, Result};
use futures_util::StreamExt;

use crate::cli::PlayerArgs;
use crate::FavoritePlayer;

use super::super::Container;

pub struct PlayerController<'a> {
    container: &'a Container,
}

impl<'a> PlayerController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn add(&self, args: PlayerArgs) -> Result<String> {
        let player = Self::player_from_args(args);
        let use_case = self.container.add_favorite_player_use_case();
        use_case.execute(&player).await?;

        Ok(self.with_storage_note(format!("Added favorite player: {}", player.summary())))
    }

    pub async fn remove(&self, id: String) -> Result<String> {
        let use_case = self.container.remove_favorite_player_use_case();
        use_case.execute(&id).await?;

        Ok(format!("Removed favorite player {}.", id))
    }

    pub async fn check(&self, id: String) -> Result<String> {
        let use_case = self.container.is_favorite_player_use_case();
        let is_favorite = use_case.execute(&id).await?;

        Ok(if is_favorite {
            format!("Player {} is a favorite.", id)
        } else {
            format!("Player {} is not a favorite.", id)
        })
    }

    pub async fn toggle(&self, args: PlayerArgs) -> Result<String> {
        let player = Self::player_from_args(args);
        let use_case = self.container.toggle_favorite_player_use_case();
        let now_favorite = use_case.execute(&player).await?;

        let message = if now_favorite {
            format!("Added favorite player: {}", player.summary())
        } else {
            format!("Removed favorite player: {}", player.summary())
        };
        Ok(self.with_storage_note(message))
    }

    /// Prints the first snapshot of the observe stream.
    pub async fn list(&self) -> Result<String> {
        let use_case = self.container.observe_favorite_players_use_case();
        let mut snapshots = use_case.execute();
        let players = snapshots
            .next()
            .await
            .context("Favorite players stream ended before emitting")??;

        Ok(self.format_player_list(&players))
    }

    fn player_from_args(args: PlayerArgs) -> FavoritePlayer {
        let mut player = FavoritePlayer::new(args.id, args.name);
        if let Some(team) = args.team {
            player = player.with_team_name(team);
        }
        if let Some(position) = args.position {
            player = player.with_position(position);
        }
        if let Some(url) = args.image_url {
            player = player.with_image_url(url);
        }
        player
    }

    fn with_storage_note(&self, message: String) -> String {
        if self.container.memory_storage() {
            format!("{}\n(in-memory storage: favorites are not persisted)", message)
        } else {
            message
        }
    }

    fn format_player_list(&self, players: &[FavoritePlayer]) -> String {
        if players.is_empty() {
            return "No favorite players.".to_string();
        }

        let mut output = "Favorite players:\n\n".to_string();
        for player in players {
            output.push_str(&format!("  {} ({})\n", player.summary(), player.id()));
        }
        output
    }
}
