use crate::api::server::AppState;
use crate::models::api::ErrorBody;
use actix_web::{
    web::{self, get, Data, Query},
    HttpResponse, Scope,
};
use serde::Deserialize;

#[derive(Deserialize)]
struct GoalsQuery {
    category: Option<String>,
}

async fn get_goals(query: Query<GoalsQuery>, app_state: Data<AppState>) -> HttpResponse {
    let goal_store = app_state.store_context.goal_store.clone();
    match &query.category {
        Some(name) => match goal_store.find_category(name) {
            Some(category) => {
                HttpResponse::Ok().json(goal_store.goals_in_category(&category.id))
            }
            None => ErrorBody::validation("Invalid category specified", "category").into(),
        },
        None => HttpResponse::Ok().json(goal_store.get_goals()),
    }
}

pub fn goals_routes() -> Scope {
    web::scope("/v1/goals").route("", get().to(get_goals))
}
