use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::{User, leaderboard::LeaderBoard},
};

#[derive(FromRow)]
struct LeaderBoardRow {
    id: Uuid,
    name: String,
    total_points: f64,
    created_at: chrono::DateTime<chrono::Utc>,
    total_picks: i64,
    total_wins: i64,
}

pub async fn get_leaderboard(postgres: &PgPool) -> Result<Vec<LeaderBoard>, AppError> {
    let rows = sqlx::query_as::<_, LeaderBoardRow>(
        "SELECT u.id, u.name, u.total_points, u.created_at,
            COUNT(p.id) AS total_picks,
            COUNT(p.id) FILTER (WHERE p.did_win) AS total_wins
        FROM users u
        LEFT JOIN picks p ON p.user_id = u.id
        GROUP BY u.id
        ORDER BY u.total_points DESC, u.created_at ASC",
    )
    .fetch_all(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch leaderboard: {}", e)))?;

    // Rank follows the total_points ordering above
    let leaderboard = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| LeaderBoard {
            user: User {
                id: row.id,
                name: row.name,
                total_points: row.total_points,
                created_at: row.created_at,
            },
            rank: (index + 1) as u64,
            total_picks: row.total_picks,
            total_wins: row.total_wins,
        })
        .collect();

    Ok(leaderboard)
}
