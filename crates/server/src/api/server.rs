use crate::api::routes::goals::goals_routes;
use crate::api::routes::me::me_routes;
use crate::models::api::ErrorBody;
use crate::store::core::StoreContext;
use actix_web::middleware::{Compress, NormalizePath, TrailingSlash};
use actix_web::{middleware, web, web::Data, App, HttpResponse, HttpServer};
use anyhow::Error;
use log::info;
use serde_json::json;
use std::sync::Arc;

pub struct AppState {
    pub store_context: Arc<StoreContext>,
}

pub async fn start_server(
    host: &str,
    port: u16,
    store_context: Arc<StoreContext>,
) -> Result<(), Error> {
    info!("Starting server at http://{}:{}", host, port);
    let app_state = Data::new(AppState { store_context });

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .wrap(Compress::default())
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .service(web::resource("/health").route(web::get().to(
                |data: web::Data<AppState>| async move {
                    let goal_store = &data.store_context.goal_store;
                    HttpResponse::Ok().json(json!({
                        "healthy": true,
                        "goals": goal_store.get_goals().len(),
                    }))
                },
            )))
            .service(goals_routes())
            .service(me_routes())
            .default_service(
                web::route().to(|| async { HttpResponse::from(ErrorBody::not_found()) }),
            )
    })
    .bind((host, port))?
    .run()
    .await?;
    Ok(())
}
