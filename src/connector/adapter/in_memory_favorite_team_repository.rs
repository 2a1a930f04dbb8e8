use async_trait::async_trait;
use tokio::sync::{watch, Mutex};
use tracing::debug;

use crate::application::{FavoriteTeamRepository, ResultStream};
use crate::domain::{DomainError, FavoriteTeam, LeagueInfo, TeamInfo};

use super::snapshot_stream::snapshot_stream;

/// Favorite teams held in process memory, ordered by `added_at` then id.
pub struct InMemoryFavoriteTeamRepository {
    teams: Mutex<Vec<FavoriteTeam>>,
    snapshots: watch::Sender<Vec<FavoriteTeam>>,
}

impl InMemoryFavoriteTeamRepository {
    pub fn new() -> Self {
        Self::with_teams(Vec::new())
    }

    /// Seed the repository with already-followed teams, e.g. restored from a
    /// previous session.
    pub fn with_teams(mut teams: Vec<FavoriteTeam>) -> Self {
        Self::sort(&mut teams);
        let (snapshots, _) = watch::channel(teams.clone());
        Self {
            teams: Mutex::new(teams),
            snapshots,
        }
    }

    fn sort(teams: &mut [FavoriteTeam]) {
        teams.sort_by(|a, b| (a.added_at(), a.id()).cmp(&(b.added_at(), b.id())));
    }
}

impl Default for InMemoryFavoriteTeamRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FavoriteTeamRepository for InMemoryFavoriteTeamRepository {
    async fn add_favorite_team(
        &self,
        team: &TeamInfo,
        league: &LeagueInfo,
    ) -> Result<(), DomainError> {
        let mut teams = self.teams.lock().await;

        match teams.iter_mut().find(|t| t.id() == team.id()) {
            Some(existing) => {
                *existing =
                    FavoriteTeam::reconstitute(team.clone(), league.clone(), existing.added_at());
            }
            None => {
                teams.push(FavoriteTeam::new(team.clone(), league.clone()));
                Self::sort(&mut teams);
            }
        }
        self.snapshots.send_replace(teams.clone());

        debug!("Added favorite team {} to memory", team.id());
        Ok(())
    }

    async fn remove_favorite_team(&self, team_id: &str) -> Result<(), DomainError> {
        let mut teams = self.teams.lock().await;
        let before = teams.len();
        teams.retain(|t| t.id() != team_id);

        if teams.len() != before {
            self.snapshots.send_replace(teams.clone());
            debug!("Removed favorite team {} from memory", team_id);
        }
        Ok(())
    }

    async fn get_favorite_teams(&self) -> Result<Vec<FavoriteTeam>, DomainError> {
        Ok(self.teams.lock().await.clone())
    }

    fn observe_favorite_teams(&self) -> ResultStream<Vec<FavoriteTeam>> {
        snapshot_stream(self.snapshots.subscribe())
    }

    async fn is_favorite_team(&self, team_id: &str) -> Result<bool, DomainError> {
        let teams = self.teams.lock().await;
        Ok(teams.iter().any(|t| t.id() == team_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    fn premier_league() -> LeagueInfo {
        LeagueInfo::new("4328", "English Premier League").with_country("England")
    }

    #[tokio::test]
    async fn test_add_get_and_check() {
        let repo = InMemoryFavoriteTeamRepository::new();
        let arsenal = TeamInfo::new("133604", "Arsenal");

        repo.add_favorite_team(&arsenal, &premier_league())
            .await
            .unwrap();

        let teams = repo.get_favorite_teams().await.unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].team(), &arsenal);
        assert_eq!(teams[0].league().country(), Some("England"));
        assert!(repo.is_favorite_team("133604").await.unwrap());
        assert!(!repo.is_favorite_team("133612").await.unwrap());
    }

    #[tokio::test]
    async fn test_re_adding_replaces_league_without_duplicating() {
        let repo = InMemoryFavoriteTeamRepository::new();
        let arsenal = TeamInfo::new("133604", "Arsenal");

        repo.add_favorite_team(&arsenal, &premier_league())
            .await
            .unwrap();
        let first_added_at = repo.get_favorite_teams().await.unwrap()[0].added_at();

        let ucl = LeagueInfo::new("4480", "UEFA Champions League");
        repo.add_favorite_team(&arsenal, &ucl).await.unwrap();

        let teams = repo.get_favorite_teams().await.unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].league().id(), "4480");
        assert_eq!(teams[0].added_at(), first_added_at);
    }

    #[tokio::test]
    async fn test_equal_added_at_is_ordered_by_id() {
        let repo = InMemoryFavoriteTeamRepository::with_teams(
            ["c", "a", "b"]
                .into_iter()
                .map(|id| FavoriteTeam::reconstitute(TeamInfo::new(id, id), premier_league(), 5))
                .collect(),
        );

        let teams = repo.get_favorite_teams().await.unwrap();
        let ids: Vec<_> = teams.iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_multiple_teams_ordered_by_added_at() {
        let repo = InMemoryFavoriteTeamRepository::with_teams(vec![
            FavoriteTeam::reconstitute(TeamInfo::new("1", "Liverpool"), premier_league(), 300),
            FavoriteTeam::reconstitute(TeamInfo::new("2", "Chelsea"), premier_league(), 100),
        ]);
        // Stamped with the current time, so it sorts after both seeded teams.
        repo.add_favorite_team(&TeamInfo::new("0", "Arsenal"), &premier_league())
            .await
            .unwrap();

        let teams = repo.get_favorite_teams().await.unwrap();
        let names: Vec<_> = teams.iter().map(|t| t.team().name()).collect();
        assert_eq!(names, vec!["Chelsea", "Liverpool", "Arsenal"]);

        let mut stream = repo.observe_favorite_teams();
        assert_eq!(stream.next().await.unwrap().unwrap(), teams);
    }

    #[tokio::test]
    async fn test_observe_tracks_removals() {
        let repo = InMemoryFavoriteTeamRepository::new();
        repo.add_favorite_team(&TeamInfo::new("1", "Arsenal"), &premier_league())
            .await
            .unwrap();

        let mut stream = repo.observe_favorite_teams();
        assert_eq!(stream.next().await.unwrap().unwrap().len(), 1);

        repo.remove_favorite_team("1").await.unwrap();
        assert!(stream.next().await.unwrap().unwrap().is_empty());
    }
}
