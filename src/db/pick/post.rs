use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::{game::get_game_by_id, user::get_user_by_id},
    errors::AppError,
    models::pick::Pick,
};

/// Creates or replaces a user's pick for one game. At most one pick per
/// (user, game) exists; the unique constraint is the conflict target.
/// Picks lock at kickoff and only the reconciler touches them after.
pub async fn upsert_pick(
    user_id: Uuid,
    game_id: Uuid,
    team_picked: Uuid,
    postgres: &PgPool,
) -> Result<Pick, AppError> {
    let game = get_game_by_id(game_id, postgres).await?;
    let user = get_user_by_id(user_id, postgres).await?;

    if Utc::now() >= game.commence_time {
        return Err(AppError::BadRequest(
            "Picks are locked once the game has kicked off".into(),
        ));
    }

    let spread_at_time = game.spread_for(team_picked).ok_or_else(|| {
        AppError::NotFound(format!(
            "Team {} is not playing in game {}",
            team_picked, game_id
        ))
    })?;

    sqlx::query_as::<_, Pick>(
        "INSERT INTO picks (id, user_id, game_id, team_picked, week, spread_at_time)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (user_id, game_id) DO UPDATE SET
            team_picked = EXCLUDED.team_picked,
            spread_at_time = EXCLUDED.spread_at_time
        RETURNING id, user_id, game_id, team_picked, week, spread_at_time,
            did_win, points_earned, created_at",
    )
    .bind(Uuid::new_v4())
    .bind(user.id)
    .bind(game_id)
    .bind(team_picked)
    .bind(game.week)
    .bind(spread_at_time)
    .fetch_one(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to save pick: {}", e)))
}
