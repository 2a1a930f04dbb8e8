use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use duckdb::{params, Connection};
use tokio::sync::{watch, Mutex};
use tracing::{debug, warn};

use crate::application::{FavoriteTeamRepository, ResultStream};
use crate::domain::{DomainError, FavoriteTeam, LeagueInfo, TeamInfo};

use super::snapshot_stream::snapshot_stream;

pub struct DuckdbFavoriteTeamRepository {
    conn: Arc<Mutex<Connection>>,
    snapshots: watch::Sender<Vec<FavoriteTeam>>,
}

impl DuckdbFavoriteTeamRepository {
    pub fn new(db_path: &Path) -> Result<Self, DomainError> {
        let conn = Connection::open(db_path)
            .map_err(|e| DomainError::storage(format!("Failed to open DuckDB database: {}", e)))?;
        Self::from_connection(conn)
    }

    pub fn in_memory() -> Result<Self, DomainError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            DomainError::storage(format!("Failed to open DuckDB in-memory DB: {}", e))
        })?;
        Self::from_connection(conn)
    }

    /// Create a new adapter using an existing shared connection.
    pub async fn with_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, DomainError> {
        let conn_guard = conn.lock().await;
        Self::initialize_schema(&conn_guard)?;
        let teams = Self::load_all(&conn_guard)?;
        drop(conn_guard);

        let (snapshots, _) = watch::channel(teams);
        Ok(Self { conn, snapshots })
    }

    /// Returns a clone of the shared connection Arc.
    pub fn shared_connection(&self) -> Arc<Mutex<Connection>> {
        Arc::clone(&self.conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, DomainError> {
        Self::initialize_schema(&conn)?;
        let teams = Self::load_all(&conn)?;
        let (snapshots, _) = watch::channel(teams);

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            snapshots,
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), DomainError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS favorite_teams (
                team_id TEXT PRIMARY KEY,
                team_name TEXT NOT NULL,
                team_short_name TEXT,
                team_logo_url TEXT,
                league_id TEXT NOT NULL,
                league_name TEXT NOT NULL,
                league_country TEXT,
                league_logo_url TEXT,
                added_at BIGINT NOT NULL
            );
            "#,
        )
        .map_err(|e| {
            DomainError::storage(format!("Failed to initialize favorite_teams schema: {}", e))
        })?;

        debug!("DuckDB favorite_teams table initialized");
        Ok(())
    }

    fn load_all(conn: &Connection) -> Result<Vec<FavoriteTeam>, DomainError> {
        let mut stmt = conn
            .prepare(
                "SELECT team_id, team_name, team_short_name, team_logo_url, \
                        league_id, league_name, league_country, league_logo_url, added_at \
                 FROM favorite_teams ORDER BY added_at, team_id",
            )
            .map_err(|e| DomainError::storage(format!("Failed to prepare statement: {}", e)))?;

        let rows = stmt
            .query_map([], |row| {
                let mut team = TeamInfo::new(row.get::<_, String>(0)?, row.get::<_, String>(1)?);
                if let Some(short_name) = row.get::<_, Option<String>>(2)? {
                    team = team.with_short_name(short_name);
                }
                if let Some(logo_url) = row.get::<_, Option<String>>(3)? {
                    team = team.with_logo_url(logo_url);
                }

                let mut league =
                    LeagueInfo::new(row.get::<_, String>(4)?, row.get::<_, String>(5)?);
                if let Some(country) = row.get::<_, Option<String>>(6)? {
                    league = league.with_country(country);
                }
                if let Some(logo_url) = row.get::<_, Option<String>>(7)? {
                    league = league.with_logo_url(logo_url);
                }

                Ok(FavoriteTeam::reconstitute(team, league, row.get(8)?))
            })
            .map_err(|e| DomainError::storage(format!("Failed to query favorite teams: {}", e)))?;

        let mut teams = Vec::new();
        for row in rows {
            teams.push(row.map_err(|e| DomainError::storage(format!("Failed to read row: {}", e)))?);
        }
        Ok(teams)
    }

    /// Pushes a fresh snapshot to observers. Runs after the write has been
    /// applied, so a failed re-read is logged and the write still reports success.
    fn publish(&self, conn: &Connection) {
        match Self::load_all(conn) {
            Ok(teams) => {
                self.snapshots.send_replace(teams);
            }
            Err(e) => warn!(
                "Favorite teams changed but the snapshot could not be reloaded: {}",
                e
            ),
        }
    }
}

#[async_trait]
impl FavoriteTeamRepository for DuckdbFavoriteTeamRepository {
    async fn add_favorite_team(
        &self,
        team: &TeamInfo,
        league: &LeagueInfo,
    ) -> Result<(), DomainError> {
        let favorite = FavoriteTeam::new(team.clone(), league.clone());
        let conn = self.conn.lock().await;

        conn.execute(
            r#"
            INSERT INTO favorite_teams (team_id, team_name, team_short_name, team_logo_url,
                                        league_id, league_name, league_country, league_logo_url, added_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            ON CONFLICT (team_id) DO UPDATE SET
                team_name = excluded.team_name,
                team_short_name = excluded.team_short_name,
                team_logo_url = excluded.team_logo_url,
                league_id = excluded.league_id,
                league_name = excluded.league_name,
                league_country = excluded.league_country,
                league_logo_url = excluded.league_logo_url
            "#,
            params![
                team.id(),
                team.name(),
                team.short_name(),
                team.logo_url(),
                league.id(),
                league.name(),
                league.country(),
                league.logo_url(),
                favorite.added_at(),
            ],
        )
        .map_err(|e| DomainError::storage(format!("Failed to save favorite team: {}", e)))?;
        self.publish(&conn);

        debug!("Saved favorite team {} ({})", team.id(), league.name());
        Ok(())
    }

    async fn remove_favorite_team(&self, team_id: &str) -> Result<(), DomainError> {
        let conn = self.conn.lock().await;
        let deleted = conn
            .execute(
                "DELETE FROM favorite_teams WHERE team_id = ?1",
                params![team_id],
            )
            .map_err(|e| DomainError::storage(format!("Failed to delete favorite team: {}", e)))?;

        if deleted > 0 {
            self.publish(&conn);
            debug!("Deleted favorite team {}", team_id);
        }
        Ok(())
    }

    async fn get_favorite_teams(&self) -> Result<Vec<FavoriteTeam>, DomainError> {
        let conn = self.conn.lock().await;
        Self::load_all(&conn)
    }

    fn observe_favorite_teams(&self) -> ResultStream<Vec<FavoriteTeam>> {
        snapshot_stream(self.snapshots.subscribe())
    }

    async fn is_favorite_team(&self, team_id: &str) -> Result<bool, DomainError> {
        let conn = self.conn.lock().await;
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM favorite_teams WHERE team_id = ?1",
                params![team_id],
                |row| row.get(0),
            )
            .map_err(|e| DomainError::storage(format!("Failed to check favorite team: {}", e)))?;
        Ok(count > 0)
    }
}
