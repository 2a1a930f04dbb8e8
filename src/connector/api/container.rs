use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, warn};

use crate::application::{
    AddFavoritePlayerUseCase, AddFavoriteTeamUseCase, FavoritePlayerRepository,
    FavoriteTeamRepository, GetFavoriteTeamsUseCase, GetHighlightsUseCase, HighlightRepository,
    IsFavoritePlayerUseCase, IsFavoriteTeamUseCase, ObserveFavoritePlayersUseCase,
    ObserveFavoriteTeamsUseCase, RemoveFavoritePlayerUseCase, RemoveFavoriteTeamUseCase,
    ToggleFavoritePlayerUseCase,
};
use crate::connector::adapter::{
    DuckdbFavoritePlayerRepository, DuckdbFavoriteTeamRepository, HttpHighlightRepository,
    InMemoryFavoritePlayerRepository, InMemoryFavoriteTeamRepository, InMemoryHighlightRepository,
    API_KEY_ENV,
};

pub const DATABASE_FILE: &str = "scoreline.duckdb";

pub struct ContainerConfig {
    pub data_dir: String,
    pub memory_storage: bool,
    /// Base URL of a remote highlights provider. Takes precedence over
    /// `highlights_file` and the environment.
    pub highlights_url: Option<String>,
    /// JSON file holding an array of highlights to search locally.
    pub highlights_file: Option<String>,
}

pub struct Container {
    player_repo: Arc<dyn FavoritePlayerRepository>,
    team_repo: Arc<dyn FavoriteTeamRepository>,
    highlight_repo: Arc<dyn HighlightRepository>,
    config: ContainerConfig,
}

impl Container {
    pub async fn new(config: ContainerConfig) -> Result<Self> {
        let (player_repo, team_repo) = if config.memory_storage {
            debug!("Using in-memory favorites storage");
            Self::in_memory_favorites()
        } else {
            let db_path = PathBuf::from(&config.data_dir).join(DATABASE_FILE);
            match Self::duckdb_favorites(&db_path).await {
                Ok(repos) => {
                    debug!("Using DuckDB favorites storage at {:?}", db_path);
                    repos
                }
                Err(e) => {
                    warn!(
                        "Failed to initialize DuckDB ({}): {}. Falling back to in-memory storage.",
                        db_path.display(),
                        e
                    );
                    Self::in_memory_favorites()
                }
            }
        };

        let highlight_repo: Arc<dyn HighlightRepository> =
            if let Some(url) = config.highlights_url.as_deref() {
                debug!("Using highlights provider at {}", url);
                Arc::new(HttpHighlightRepository::new(
                    url,
                    std::env::var(API_KEY_ENV).ok(),
                ))
            } else if let Some(file) = config.highlights_file.as_deref() {
                debug!("Using highlights catalog from {}", file);
                Arc::new(InMemoryHighlightRepository::from_json_file(Path::new(file))?)
            } else if let Some(http) = HttpHighlightRepository::from_env() {
                debug!("Using highlights provider at {}", http.url());
                Arc::new(http)
            } else {
                debug!("No highlights source configured, using an empty catalog");
                Arc::new(InMemoryHighlightRepository::default())
            };

        Ok(Self {
            player_repo,
            team_repo,
            highlight_repo,
            config,
        })
    }

    fn in_memory_favorites() -> (
        Arc<dyn FavoritePlayerRepository>,
        Arc<dyn FavoriteTeamRepository>,
    ) {
        (
            Arc::new(InMemoryFavoritePlayerRepository::new()),
            Arc::new(InMemoryFavoriteTeamRepository::new()),
        )
    }

    async fn duckdb_favorites(
        db_path: &Path,
    ) -> Result<(
        Arc<dyn FavoritePlayerRepository>,
        Arc<dyn FavoriteTeamRepository>,
    )> {
        // DuckDB allows a single write connection per file; both adapters share it.
        let players = DuckdbFavoritePlayerRepository::new(db_path)?;
        let teams =
            DuckdbFavoriteTeamRepository::with_connection(players.shared_connection()).await?;
        Ok((Arc::new(players), Arc::new(teams)))
    }

    pub fn add_favorite_player_use_case(&self) -> AddFavoritePlayerUseCase {
        AddFavoritePlayerUseCase::new(self.player_repo.clone())
    }

    pub fn remove_favorite_player_use_case(&self) -> RemoveFavoritePlayerUseCase {
        RemoveFavoritePlayerUseCase::new(self.player_repo.clone())
    }

    pub fn is_favorite_player_use_case(&self) -> IsFavoritePlayerUseCase {
        IsFavoritePlayerUseCase::new(self.player_repo.clone())
    }

    pub fn observe_favorite_players_use_case(&self) -> ObserveFavoritePlayersUseCase {
        ObserveFavoritePlayersUseCase::new(self.player_repo.clone())
    }

    pub fn toggle_favorite_player_use_case(&self) -> ToggleFavoritePlayerUseCase {
        ToggleFavoritePlayerUseCase::new(self.player_repo.clone())
    }

    pub fn add_favorite_team_use_case(&self) -> AddFavoriteTeamUseCase {
        AddFavoriteTeamUseCase::new(self.team_repo.clone())
    }

    pub fn remove_favorite_team_use_case(&self) -> RemoveFavoriteTeamUseCase {
        RemoveFavoriteTeamUseCase::new(self.team_repo.clone())
    }

    pub fn get_favorite_teams_use_case(&self) -> GetFavoriteTeamsUseCase {
        GetFavoriteTeamsUseCase::new(self.team_repo.clone())
    }

    pub fn observe_favorite_teams_use_case(&self) -> ObserveFavoriteTeamsUseCase {
        ObserveFavoriteTeamsUseCase::new(self.team_repo.clone())
    }

    pub fn is_favorite_team_use_case(&self) -> IsFavoriteTeamUseCase {
        IsFavoriteTeamUseCase::new(self.team_repo.clone())
    }

    pub fn get_highlights_use_case(&self) -> GetHighlightsUseCase {
        GetHighlightsUseCase::new(self.highlight_repo.clone())
    }

    pub fn memory_storage(&self) -> bool {
        self.config.memory_storage
    }
}
