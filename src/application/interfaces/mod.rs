mod favorite_player_repository;
mod favorite_team_repository;
mod highlight_repository;

pub use favorite_player_repository::*;
pub use favorite_team_repository::*;
pub use highlight_repository::*;

use futures_util::stream::BoxStream;

use crate::domain::DomainError;

/// Boxed stream of repository results, as returned by the `observe_*` methods.
pub type ResultStream<T> = BoxStream<'static, Result<T, DomainError>>;
