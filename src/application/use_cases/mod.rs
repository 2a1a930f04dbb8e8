mod add_favorite_player;
mod add_favorite_team;
mod get_favorite_teams;
mod get_highlights;
mod is_favorite_player;
mod is_favorite_team;
mod observe_favorite_players;
mod observe_favorite_teams;
mod remove_favorite_player;
mod remove_favorite_team;
mod toggle_favorite_player;

pub use add_favorite_player::*;
pub use add_favorite_team::*;
pub use get_favorite_teams::*;
pub use get_highlights::*;
pub use is_favorite_player::*;
pub use is_favorite_team::*;
pub use observe_favorite_players::*;
pub use observe_favorite_teams::*;
pub use remove_favorite_player::*;
pub use remove_favorite_team::*;
pub use toggle_favorite_player::*;
