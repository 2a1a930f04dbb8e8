//! Pass-through tests for the favorite-team use cases.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures_util::{stream, StreamExt};

use scoreline::{
    AddFavoriteTeamUseCase, DomainError, FavoriteTeam, FavoriteTeamRepository,
    GetFavoriteTeamsUseCase, IsFavoriteTeamUseCase, LeagueInfo, ObserveFavoriteTeamsUseCase,
    RemoveFavoriteTeamUseCase, ResultStream, TeamInfo,
};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Add(TeamInfo, LeagueInfo),
    Remove(String),
    Get,
    Observe,
    IsFavorite(String),
}

struct RecordingTeamRepository {
    calls: Mutex<Vec<Call>>,
    teams: Vec<FavoriteTeam>,
    favorite: bool,
    not_found: bool,
}

impl RecordingTeamRepository {
    fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            teams: Vec::new(),
            favorite: false,
            not_found: false,
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<(), DomainError> {
        let id = match &call {
            Call::Remove(id) | Call::IsFavorite(id) => id.clone(),
            _ => String::new(),
        };
        self.calls.lock().unwrap().push(call);
        if self.not_found {
            return Err(DomainError::not_found(id));
        }
        Ok(())
    }
}

#[async_trait]
impl FavoriteTeamRepository for RecordingTeamRepository {
    async fn add_favorite_team(
        &self,
        team: &TeamInfo,
        league: &LeagueInfo,
    ) -> Result<(), DomainError> {
        self.record(Call::Add(team.clone(), league.clone()))
    }

    async fn remove_favorite_team(&self, team_id: &str) -> Result<(), DomainError> {
        self.record(Call::Remove(team_id.to_string()))
    }

    async fn get_favorite_teams(&self) -> Result<Vec<FavoriteTeam>, DomainError> {
        self.record(Call::Get)?;
        Ok(self.teams.clone())
    }

    fn observe_favorite_teams(&self) -> ResultStream<Vec<FavoriteTeam>> {
        self.calls.lock().unwrap().push(Call::Observe);
        stream::iter(vec![Ok(self.teams.clone())]).boxed()
    }

    async fn is_favorite_team(&self, team_id: &str) -> Result<bool, DomainError> {
        self.record(Call::IsFavorite(team_id.to_string()))?;
        Ok(self.favorite)
    }
}

fn arsenal() -> TeamInfo {
    TeamInfo::new("133604", "Arsenal").with_short_name("ARS")
}

fn premier_league() -> LeagueInfo {
    LeagueInfo::new("4328", "English Premier League").with_country("England")
}

#[tokio::test]
async fn add_forwards_team_and_league_once() {
    let repo = Arc::new(RecordingTeamRepository::new());
    let use_case = AddFavoriteTeamUseCase::new(repo.clone());

    use_case
        .execute(&arsenal(), &premier_league())
        .await
        .expect("add");

    assert_eq!(repo.calls(), vec![Call::Add(arsenal(), premier_league())]);
}

#[tokio::test]
async fn remove_forwards_id_and_error() {
    let repo = Arc::new(RecordingTeamRepository {
        not_found: true,
        ..RecordingTeamRepository::new()
    });
    let use_case = RemoveFavoriteTeamUseCase::new(repo.clone());

    let err = use_case.execute("133604").await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Not found: 133604");
    assert_eq!(repo.calls(), vec![Call::Remove("133604".to_string())]);
}

#[tokio::test]
async fn get_returns_repository_list_unmodified() {
    let teams = vec![
        FavoriteTeam::reconstitute(arsenal(), premier_league(), 10),
        FavoriteTeam::reconstitute(TeamInfo::new("133602", "Liverpool"), premier_league(), 5),
    ];
    let repo = Arc::new(RecordingTeamRepository {
        teams: teams.clone(),
        ..RecordingTeamRepository::new()
    });
    let use_case = GetFavoriteTeamsUseCase::new(repo.clone());

    // Order is whatever the repository produced; nothing is re-sorted.
    assert_eq!(use_case.execute().await.expect("get"), teams);
    assert_eq!(repo.calls(), vec![Call::Get]);
}

#[tokio::test]
async fn observe_returns_repository_stream() {
    let teams = vec![FavoriteTeam::reconstitute(arsenal(), premier_league(), 1)];
    let repo = Arc::new(RecordingTeamRepository {
        teams: teams.clone(),
        ..RecordingTeamRepository::new()
    });
    let use_case = ObserveFavoriteTeamsUseCase::new(repo.clone());

    let emitted: Vec<_> = use_case.execute().collect().await;

    assert_eq!(emitted.len(), 1);
    assert_eq!(emitted[0].as_ref().expect("snapshot"), &teams);
    assert_eq!(repo.calls(), vec![Call::Observe]);
}

#[tokio::test]
async fn is_favorite_forwards_id_and_answer() {
    let repo = Arc::new(RecordingTeamRepository {
        favorite: true,
        ..RecordingTeamRepository::new()
    });
    let use_case = IsFavoriteTeamUseCase::new(repo.clone());

    assert!(use_case.execute("133604").await.expect("check"));
    assert_eq!(repo.calls(), vec![Call::IsFavorite("133604".to_string())]);
}
