pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    AddFavoritePlayerUseCase, AddFavoriteTeamUseCase, FavoritePlayerRepository,
    FavoriteTeamRepository, GetFavoriteTeamsUseCase, GetHighlightsUseCase, HighlightRepository,
    IsFavoritePlayerUseCase, IsFavoriteTeamUseCase, ObserveFavoritePlayersUseCase,
    ObserveFavoriteTeamsUseCase, RemoveFavoritePlayerUseCase, RemoveFavoriteTeamUseCase,
    ResultStream, ToggleFavoritePlayerUseCase,
};

pub use cli::Commands;

pub use connector::{
    Container, ContainerConfig, DuckdbFavoritePlayerRepository, DuckdbFavoriteTeamRepository,
    HttpHighlightRepository, InMemoryFavoritePlayerRepository, InMemoryFavoriteTeamRepository,
    InMemoryHighlightRepository, Router,
};

pub use domain::{DomainError, FavoritePlayer, FavoriteTeam, Highlight, LeagueInfo, TeamInfo};
