mod highlight;
mod player;
mod team;

pub use highlight::*;
pub use player::*;
pub use team::*;

pub(crate) fn current_timestamp() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
