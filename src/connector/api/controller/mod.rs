pub mod highlights_controller;
pub mod player_controller;
pub mod team_controller;

pub use highlights_controller::HighlightsController;
pub use player_controller::PlayerController;
pub use team_controller::TeamController;
