use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum Commands {
    /// Follow, unfollow and list favorite players
    Player {
        #[command(subcommand)]
        action: PlayerCommand,
    },

    /// Follow, unfollow and list favorite teams
    Team {
        #[command(subcommand)]
        action: TeamCommand,
    },

    /// Search video highlights
    Highlights { query: String },
}

#[derive(Subcommand)]
pub enum PlayerCommand {
    Add(PlayerArgs),

    Remove { id: String },

    /// Print whether the player is a favorite
    Check { id: String },

    /// Follow the player if not followed yet, otherwise unfollow
    Toggle(PlayerArgs),

    List,
}

#[derive(Args)]
pub struct PlayerArgs {
    pub id: String,

    pub name: String,

    #[arg(long)]
    pub team: Option<String>,

    #[arg(long)]
    pub position: Option<String>,

    #[arg(long)]
    pub image_url: Option<String>,
}

#[derive(Subcommand)]
pub enum TeamCommand {
    Add {
        team_id: String,

        team_name: String,

        league_id: String,

        league_name: String,

        #[arg(long)]
        country: Option<String>,
    },

    Remove { team_id: String },

    /// Print whether the team is a favorite
    Check { team_id: String },

    List,
}
