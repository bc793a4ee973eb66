use crate::api::server::AppState;
use crate::error::ServiceError;
use crate::models::api::ErrorBody;
use crate::models::goal::Goal;
use actix_web::{
    web::{self, get, post, Data},
    HttpResponse, Scope,
};
use log::error;

/// Path-derived goal ids go through the same validation as unknown ids so
/// the wire error shape stays uniform.
fn resolve_goal(app_state: &AppState, raw_id: &str) -> Option<Goal> {
    let id: u32 = raw_id.parse().ok()?;
    app_state.store_context.goal_store.get_goal(id)
}

async fn get_current_user(app_state: Data<AppState>) -> HttpResponse {
    match app_state.store_context.user_store.get_current_user() {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => {
            error!("Error reading current user: {}", e);
            ErrorBody::internal().into()
        }
    }
}

async fn accept_goal(goal_id: web::Path<String>, app_state: Data<AppState>) -> HttpResponse {
    let Some(goal) = resolve_goal(&app_state, &goal_id) else {
        return ErrorBody::validation("Invalid goal specified", "goal").into();
    };
    match app_state.store_context.user_store.accept_goal(goal) {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(e) => {
            error!("Error accepting goal: {}", e);
            ErrorBody::internal().into()
        }
    }
}

async fn achieve_goal(goal_id: web::Path<String>, app_state: Data<AppState>) -> HttpResponse {
    let Some(goal) = resolve_goal(&app_state, &goal_id) else {
        return ErrorBody::validation("Invalid goal specified", "goal").into();
    };
    match app_state.store_context.user_store.achieve_goal(goal) {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(e) => {
            error!("Error achieving goal: {}", e);
            ErrorBody::internal().into()
        }
    }
}

async fn challenge_goal(
    path: web::Path<(String, String)>,
    app_state: Data<AppState>,
) -> HttpResponse {
    let (goal_id, user_id) = path.into_inner();
    let Some(goal) = resolve_goal(&app_state, &goal_id) else {
        return ErrorBody::validation("Invalid goal specified", "goal").into();
    };
    let Ok(user_id) = user_id.parse::<u32>() else {
        return ErrorBody::validation("Invalid user specified", "userId").into();
    };
    match app_state
        .store_context
        .user_store
        .challenge_goal(user_id, goal)
    {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(ServiceError::Validation { field, message }) => {
            ErrorBody::validation(&message, field).into()
        }
        Err(e) => {
            error!("Error challenging goal: {}", e);
            ErrorBody::internal().into()
        }
    }
}

pub fn me_routes() -> Scope {
    web::scope("/v1/me")
        .route("", get().to(get_current_user))
        .route("/goals/{goal_id}/accept", post().to(accept_goal))
        .route("/goals/{goal_id}/achieve", post().to(achieve_goal))
        .route(
            "/goals/{goal_id}/challenge/{user_id}",
            post().to(challenge_goal),
        )
}
