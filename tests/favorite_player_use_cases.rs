//! Pass-through tests for the favorite-player use cases.
//!
//! Each use case must call its repository method exactly once with the
//! arguments it was given and hand back whatever the repository returned.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures_util::{stream, StreamExt};

use scoreline::{
    AddFavoritePlayerUseCase, DomainError, FavoritePlayer, FavoritePlayerRepository,
    IsFavoritePlayerUseCase, ObserveFavoritePlayersUseCase, RemoveFavoritePlayerUseCase,
    ResultStream, ToggleFavoritePlayerUseCase,
};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Add(FavoritePlayer),
    Remove(String),
    IsFavorite(String),
    Observe,
    Toggle(FavoritePlayer),
}

/// Records calls and answers with preset values.
struct RecordingPlayerRepository {
    calls: Mutex<Vec<Call>>,
    fail_with: Option<String>,
    favorite: bool,
    snapshots: Vec<Vec<FavoritePlayer>>,
}

impl RecordingPlayerRepository {
    fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_with: None,
            favorite: false,
            snapshots: Vec::new(),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::new()
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<(), DomainError> {
        self.calls.lock().unwrap().push(call);
        match &self.fail_with {
            Some(message) => Err(DomainError::storage(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl FavoritePlayerRepository for RecordingPlayerRepository {
    async fn add_favorite_player(&self, player: &FavoritePlayer) -> Result<(), DomainError> {
        self.record(Call::Add(player.clone()))
    }

    async fn remove_favorite_player(&self, player_id: &str) -> Result<(), DomainError> {
        self.record(Call::Remove(player_id.to_string()))
    }

    async fn is_favorite_player(&self, player_id: &str) -> Result<bool, DomainError> {
        self.record(Call::IsFavorite(player_id.to_string()))?;
        Ok(self.favorite)
    }

    fn observe_favorite_players(&self) -> ResultStream<Vec<FavoritePlayer>> {
        self.calls.lock().unwrap().push(Call::Observe);
        let items: Vec<Result<Vec<FavoritePlayer>, DomainError>> = match &self.fail_with {
            Some(message) => vec![Err(DomainError::storage(message.clone()))],
            None => self.snapshots.iter().cloned().map(Ok).collect(),
        };
        stream::iter(items).boxed()
    }

    async fn toggle_favorite_player(&self, player: &FavoritePlayer) -> Result<bool, DomainError> {
        self.record(Call::Toggle(player.clone()))?;
        Ok(self.favorite)
    }
}

fn saka() -> FavoritePlayer {
    FavoritePlayer::new("34145937", "Bukayo Saka")
        .with_team_name("Arsenal")
        .with_position("Right Winger")
}

#[tokio::test]
async fn add_forwards_player_once() {
    let repo = Arc::new(RecordingPlayerRepository::new());
    let use_case = AddFavoritePlayerUseCase::new(repo.clone());

    let player = saka();

    use_case.execute(&player).await.expect("add");

    assert_eq!(repo.calls(), vec![Call::Add(player)]);
}

#[tokio::test]
async fn add_propagates_repository_error_unchanged() {
    let repo = Arc::new(RecordingPlayerRepository::failing("disk full"));
    let use_case = AddFavoritePlayerUseCase::new(repo.clone());

    let err = use_case.execute(&saka()).await.unwrap_err();

    assert!(err.is_storage_error());
    assert_eq!(err.to_string(), "Storage error: disk full");
    assert_eq!(repo.calls().len(), 1);
}

#[tokio::test]
async fn remove_forwards_id_once() {
    let repo = Arc::new(RecordingPlayerRepository::new());
    let use_case = RemoveFavoritePlayerUseCase::new(repo.clone());

    use_case.execute("34145937").await.expect("remove");

    assert_eq!(repo.calls(), vec![Call::Remove("34145937".to_string())]);
}

#[tokio::test]
async fn is_favorite_returns_repository_answer() {
    for favorite in [true, false] {
        let repo = Arc::new(RecordingPlayerRepository {
            favorite,
            ..RecordingPlayerRepository::new()
        });
        let use_case = IsFavoritePlayerUseCase::new(repo.clone());

        assert_eq!(use_case.execute("42").await.expect("check"), favorite);
        assert_eq!(repo.calls(), vec![Call::IsFavorite("42".to_string())]);
    }
}

#[tokio::test]
async fn toggle_returns_repository_state() {
    let repo = Arc::new(RecordingPlayerRepository {
        favorite: true,
        ..RecordingPlayerRepository::new()
    });
    let use_case = ToggleFavoritePlayerUseCase::new(repo.clone());

    let player = saka();

    let now_favorite = use_case.execute(&player).await.expect("toggle");

    assert!(now_favorite);
    assert_eq!(repo.calls(), vec![Call::Toggle(player)]);
}

#[tokio::test]
async fn toggle_propagates_error() {
    let repo = Arc::new(RecordingPlayerRepository::failing("locked"));
    let use_case = ToggleFavoritePlayerUseCase::new(repo.clone());

    assert!(use_case.execute(&saka()).await.is_err());
    assert_eq!(repo.calls().len(), 1);
}

#[tokio::test]
async fn observe_returns_repository_stream_unmodified() {
    let first = vec![];
    let second = vec![saka()];
    let repo = Arc::new(RecordingPlayerRepository {
        snapshots: vec![first.clone(), second.clone()],
        ..RecordingPlayerRepository::new()
    });
    let use_case = ObserveFavoritePlayersUseCase::new(repo.clone());

    let emitted: Vec<Vec<FavoritePlayer>> = use_case
        .execute()
        .map(|item| item.expect("snapshot"))
        .collect()
        .await;

    assert_eq!(emitted, vec![first, second]);
    assert_eq!(repo.calls(), vec![Call::Observe]);
}

#[tokio::test]
async fn observe_passes_errors_through_the_stream() {
    let repo = Arc::new(RecordingPlayerRepository::failing("sync failed"));
    let use_case = ObserveFavoritePlayersUseCase::new(repo);

    let mut stream = use_case.execute();
    let err = stream.next().await.expect("one item").unwrap_err();

    assert_eq!(err.to_string(), "Storage error: sync failed");
    assert!(stream.next().await.is_none());
}
