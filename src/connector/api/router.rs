use anyhow::Result;

use crate::cli::{PlayerCommand, TeamCommand};
use crate::Commands;

use super::container::Container;
use super::controller::{HighlightsController, PlayerController, TeamController};

pub struct Router<'a> {
    player_controller: PlayerController<'a>,
    team_controller: TeamController<'a>,
    highlights_controller: HighlightsController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            player_controller: PlayerController::new(container),
            team_controller: TeamController::new(container),
            highlights_controller: HighlightsController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Player { action } => match action {
                PlayerCommand::Add(args) => self.player_controller.add(args).await,
                PlayerCommand::Remove { id } => self.player_controller.remove(id).await,
                PlayerCommand::Check { id } => self.player_controller.check(id).await,
                PlayerCommand::Toggle(args) => self.player_controller.toggle(args).await,
                PlayerCommand::List => self.player_controller.list().await,
            },
            Commands::Team { action } => match action {
                TeamCommand::Add {
                    team_id,
                    team_name,
                    league_id,
                    league_name,
                    country,
                } => {
                    self.team_controller
                        .add(team_id, team_name, league_id, league_name, country)
                        .await
                }
                TeamCommand::Remove { team_id } => self.team_controller.remove(team_id).await,
                TeamCommand::Check { team_id } => self.team_controller.check(team_id).await,
                TeamCommand::List => self.team_controller.list().await,
            },
            Commands::Highlights { query } => self.highlights_controller.highlights(query).await,
        }
    }
}
