use anyhow::Result;

use crate::{FavoriteTeam, LeagueInfo, TeamInfo};

use super::super::Container;

pub struct TeamController<'a> {
    container: &'a Container,
}

impl<'a> TeamController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn add(
        &self,
        team_id: String,
        team_name: String,
        league_id: String,
        league_name: String,
        country: Option<String>,
    ) -> Result<String> {
        let team = TeamInfo::new(team_id, team_name);
        let mut league = LeagueInfo::new(league_id, league_name);
        if let Some(country) = country {
            league = league.with_country(country);
        }

        let use_case = self.container.add_favorite_team_use_case();
        use_case.execute(&team, &league).await?;

        let mut output = format!(
            "Added favorite team: {} ({})",
            team.name(),
            league.name()
        );
        if self.container.memory_storage() {
            output.push_str("\n(in-memory storage: favorites are not persisted)");
        }
        Ok(output)
    }

    pub async fn remove(&self, team_id: String) -> Result<String> {
        let use_case = self.container.remove_favorite_team_use_case();
        use_case.execute(&team_id).await?;

        Ok(format!("Removed favorite team {}.", team_id))
    }

    pub async fn check(&self, team_id: String) -> Result<String> {
        let use_case = self.container.is_favorite_team_use_case();
        let is_favorite = use_case.execute(&team_id).await?;

        Ok(if is_favorite {
            format!("Team {} is a favorite.", team_id)
        } else {
            format!("Team {} is not a favorite.", team_id)
        })
    }

    pub async fn list(&self) -> Result<String> {
        let use_case = self.container.get_favorite_teams_use_case();
        let teams = use_case.execute().await?;
        Ok(self.format_team_list(&teams))
    }

    fn format_team_list(&self, teams: &[FavoriteTeam]) -> String {
        if teams.is_empty() {
            return "No favorite teams.".to_string();
        }

        let mut output = "Favorite teams:\n\n".to_string();
        for team in teams {
            output.push_str(&format!("  {} ({})\n", team.summary(), team.id()));
        }
        output
    }
}
