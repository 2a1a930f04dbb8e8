use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use duckdb::{params, Connection};
use tokio::sync::{watch, Mutex};
use tracing::{debug, warn};

use crate::application::{FavoritePlayerRepository, ResultStream};
use crate::domain::{DomainError, FavoritePlayer};

use super::snapshot_stream::snapshot_stream;

pub struct DuckdbFavoritePlayerRepository {
    conn: Arc<Mutex<Connection>>,
    snapshots: watch::Sender<Vec<FavoritePlayer>>,
}

impl DuckdbFavoritePlayerRepository {
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
    /// DuckDB only allows one write connection per file, so the favorites
    /// adapters share whichever connection was opened first.
    pub async fn with_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, DomainError> {
        let conn_guard = conn.lock().await;
        Self::initialize_schema(&conn_guard)?;
        let players = Self::load_all(&conn_guard)?;
        drop(conn_guard);

        let (snapshots, _) = watch::channel(players);
        Ok(Self { conn, snapshots })
    }

    /// Returns a clone of the shared connection Arc.
    pub fn shared_connection(&self) -> Arc<Mutex<Connection>> {
        Arc::clone(&self.conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, DomainError> {
        Self::initialize_schema(&conn)?;
        let players = Self::load_all(&conn)?;
        let (snapshots, _) = watch::channel(players);

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            snapshots,
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), DomainError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS favorite_players (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                team_name TEXT,
                player_position TEXT,
                image_url TEXT,
                added_at BIGINT NOT NULL
            );
            "#,
        )
        .map_err(|e| {
            DomainError::storage(format!(
                "Failed to initialize favorite_players schema: {}",
                e
            ))
        })?;

        debug!("DuckDB favorite_players table initialized");
        Ok(())
    }

    fn load_all(conn: &Connection) -> Result<Vec<FavoritePlayer>, DomainError> {
        let mut stmt = conn
            .prepare(
                "SELECT id, name, team_name, player_position, image_url, added_at \
                 FROM favorite_players ORDER BY added_at, id",
            )
            .map_err(|e| DomainError::storage(format!("Failed to prepare statement: {}", e)))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(FavoritePlayer::reconstitute(
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                    row.get(5)?,
                ))
            })
            .map_err(|e| DomainError::storage(format!("Failed to query favorite players: {}", e)))?;

        let mut players = Vec::new();
        for row in rows {
            players
                .push(row.map_err(|e| DomainError::storage(format!("Failed to read row: {}", e)))?);
        }
        Ok(players)
    }

    fn exists(conn: &Connection, player_id: &str) -> Result<bool, DomainError> {
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM favorite_players WHERE id = ?1",
                params![player_id],
                |row| row.get(0),
            )
            .map_err(|e| DomainError::storage(format!("Failed to check favorite player: {}", e)))?;
        Ok(count > 0)
    }

    fn upsert(conn: &Connection, player: &FavoritePlayer) -> Result<(), DomainError> {
        conn.execute(
            r#"
            INSERT INTO favorite_players (id, name, team_name, player_position, image_url, added_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT (id) DO UPDATE SET
                name = excluded.name,
                team_name = excluded.team_name,
                player_position = excluded.player_position,
                image_url = excluded.image_url
            "#,
            params![
                player.id(),
                player.name(),
                player.team_name(),
                player.position(),
                player.image_url(),
                player.added_at(),
            ],
        )
        .map_err(|e| DomainError::storage(format!("Failed to save favorite player: {}", e)))?;
        Ok(())
    }

    fn delete(conn: &Connection, player_id: &str) -> Result<usize, DomainError> {
        conn.execute(
            "DELETE FROM favorite_players WHERE id = ?1",
            params![player_id],
        )
        .map_err(|e| DomainError::storage(format!("Failed to delete favorite player: {}", e)))
    }

    /// Pushes a fresh snapshot to observers. Runs after the write has been
    /// applied, so a failed re-read is logged and the write still reports success.
    fn publish(&self, conn: &Connection) {
        match Self::load_all(conn) {
            Ok(players) => {
                self.snapshots.send_replace(players);
            }
            Err(e) => warn!(
                "Favorite players changed but the snapshot could not be reloaded: {}",
                e
            ),
        }
    }
}

#[async_trait]
impl FavoritePlayerRepository for DuckdbFavoritePlayerRepository {
    async fn add_favorite_player(&self, player: &FavoritePlayer) -> Result<(), DomainError> {
        let conn = self.conn.lock().await;
        Self::upsert(&conn, player)?;
        self.publish(&conn);

        debug!("Saved favorite player {}", player.id());
        Ok(())
    }

    async fn remove_favorite_player(&self, player_id: &str) -> Result<(), DomainError> {
        let conn = self.conn.lock().await;
        if Self::delete(&conn, player_id)? > 0 {
            self.publish(&conn);
            debug!("Deleted favorite player {}", player_id);
        }
        Ok(())
    }

    async fn is_favorite_player(&self, player_id: &str) -> Result<bool, DomainError> {
        let conn = self.conn.lock().await;
        Self::exists(&conn, player_id)
    }

    fn observe_favorite_players(&self) -> ResultStream<Vec<FavoritePlayer>> {
        snapshot_stream(self.snapshots.subscribe())
    }

    async fn toggle_favorite_player(&self, player: &FavoritePlayer) -> Result<bool, DomainError> {
        let conn = self.conn.lock().await;

        let now_favorite = if Self::exists(&conn, player.id())? {
            Self::delete(&conn, player.id())?;
            false
        } else {
            Self::upsert(&conn, player)?;
            true
        };
        self.publish(&conn);

        Ok(now_favorite)
    }
}
