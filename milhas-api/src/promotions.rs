use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::WithRejection;
use milhas_matcher::{
    find_matching_promotions, get_best_promotion_for_goal, suggest_trips, MatchTier, PromotionMatch,
    TravelSuggestion,
};
use milhas_shared::{MileageGoal, ScrapedPromotion};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/promotions/matches", post(match_promotions))
        .route("/v1/promotions/best", post(best_promotion))
        .route("/v1/goals/{goal_id}/best-promotion", get(best_promotion_for_stored_goal))
        .route("/v1/users/{user_id}/suggestions", get(user_suggestions))
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct MatchPromotionsRequest {
    #[serde(default)]
    pub promotions: Vec<ScrapedPromotion>,
    #[serde(default)]
    pub goals: Vec<MileageGoal>,
}

#[derive(Debug, Deserialize)]
pub struct BestPromotionRequest {
    #[serde(default)]
    pub promotions: Vec<ScrapedPromotion>,
    pub goal: MileageGoal,
    pub user_miles: f64,
}

#[derive(Debug, Deserialize)]
pub struct MilesQuery {
    pub user_miles: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub promotion: ScrapedPromotion,
    pub goal: MileageGoal,
    pub match_score: u32,
    pub match_tier: MatchTier,
    pub match_reason: String,
}

impl From<PromotionMatch<'_>> for MatchResponse {
    fn from(m: PromotionMatch<'_>) -> Self {
        Self {
            promotion: m.promotion.clone(),
            goal: m.goal.clone(),
            match_score: m.match_score,
            match_tier: m.match_tier,
            match_reason: m.match_reason,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResponse {
    pub goal_id: Uuid,
    pub goal_name: String,
    pub goal_progress: f64,
    pub redeemable: bool,
    pub miles_short: f64,
    pub best_match: MatchResponse,
}

impl From<TravelSuggestion<'_>> for SuggestionResponse {
    fn from(s: TravelSuggestion<'_>) -> Self {
        Self {
            goal_id: s.goal.id,
            goal_name: s.goal.name.clone(),
            goal_progress: s.goal_progress,
            redeemable: s.redeemable,
            miles_short: s.miles_short,
            best_match: s.best_match.into(),
        }
    }
}

fn validate_miles(user_miles: f64) -> Result<f64, AppError> {
    if !user_miles.is_finite() || user_miles < 0.0 {
        return Err(AppError::ValidationError(
            "user_miles must be a non-negative number".to_string(),
        ));
    }
    Ok(user_miles)
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /v1/promotions/matches
/// Rank every promotion/goal pair supplied in the body
pub async fn match_promotions(
    WithRejection(Json(req), _): WithRejection<Json<MatchPromotionsRequest>, AppError>,
) -> Result<Json<Vec<MatchResponse>>, AppError> {
    let matches = find_matching_promotions(&req.promotions, &req.goals);
    tracing::info!(
        "Ranked {} matches for {} promotions and {} goals",
        matches.len(),
        req.promotions.len(),
        req.goals.len()
    );

    Ok(Json(matches.into_iter().map(MatchResponse::from).collect()))
}

/// POST /v1/promotions/best
/// Best promotion for a single goal given the user's balance
pub async fn best_promotion(
    WithRejection(Json(req), _): WithRejection<Json<BestPromotionRequest>, AppError>,
) -> Result<Json<Option<MatchResponse>>, AppError> {
    let user_miles = validate_miles(req.user_miles)?;
    let best = get_best_promotion_for_goal(&req.promotions, &req.goal, user_miles);

    Ok(Json(best.map(MatchResponse::from)))
}

/// GET /v1/goals/{goal_id}/best-promotion
/// Uses the goal's own balance when `user_miles` is omitted
pub async fn best_promotion_for_stored_goal(
    State(state): State<AppState>,
    WithRejection(Path(goal_id), _): WithRejection<Path<Uuid>, AppError>,
    WithRejection(Query(query), _): WithRejection<Query<MilesQuery>, AppError>,
) -> Result<Json<Option<MatchResponse>>, AppError> {
    let goal = state.goal_repo.get_goal(goal_id).await?;

    let user_miles = validate_miles(query.user_miles.unwrap_or(goal.current_miles))?;
    let promotions = state.promotion_repo.list_promotions(None).await?;

    let best = get_best_promotion_for_goal(&promotions, &goal, user_miles);
    Ok(Json(best.map(MatchResponse::from)))
}

/// GET /v1/users/{user_id}/suggestions
/// Trip suggestions across all of a user's goals
pub async fn user_suggestions(
    State(state): State<AppState>,
    WithRejection(Path(user_id), _): WithRejection<Path<Uuid>, AppError>,
    WithRejection(Query(query), _): WithRejection<Query<MilesQuery>, AppError>,
) -> Result<Json<Vec<SuggestionResponse>>, AppError> {
    let user_miles = validate_miles(query.user_miles.unwrap_or(0.0))?;

    let goals = state.goal_repo.list_goals(user_id).await?;
    if goals.is_empty() {
        return Ok(Json(Vec::new()));
    }
    let promotions = state.promotion_repo.list_promotions(None).await?;

    let suggestions: Vec<SuggestionResponse> = suggest_trips(&promotions, &goals, user_miles)
        .into_iter()
        .take(state.matcher.max_suggestions)
        .map(SuggestionResponse::from)
        .collect();

    tracing::info!("Built {} suggestions for user {}", suggestions.len(), user_id);
    Ok(Json(suggestions))
}
