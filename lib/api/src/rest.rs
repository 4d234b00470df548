use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use readnext_core::similarity::ItemFeatures;
use readnext_core::ScoredItem;
use readnext_engine::{
    Recommender, DEFAULT_LIST_SUGGESTIONS, DEFAULT_NEIGHBORS, DEFAULT_RECOMMENDATIONS,
    DEFAULT_SUGGESTIONS,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
struct LimitQuery {
    limit: Option<usize>,
}

// Query items may carry an id; only title and author feed the scorer
#[derive(Deserialize)]
struct SuggestRequest {
    title: String,
    author: String,
    limit: Option<usize>,
}

#[derive(Deserialize)]
struct QueryItemRequest {
    title: String,
    author: String,
}

#[derive(Deserialize)]
struct SuggestBatchRequest {
    items: Vec<QueryItemRequest>,
    limit: Option<usize>,
}

#[derive(Serialize)]
struct SuggestResult {
    id: String,
    title: String,
    author: String,
    similarity_percentage: f32,
}

#[derive(Serialize)]
struct SuggestBatchResult {
    id: String,
    title: String,
    author: String,
    average_similarity: f32,
}

#[derive(Serialize)]
struct CatalogInfo {
    items: usize,
    users: usize,
    ratings: usize,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(recommender: Arc<Recommender>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(recommender.clone()))
                .route("/catalog", web::get().to(catalog_info))
                .route("/recommend/{user_id}", web::get().to(recommend))
                .route("/users/{user_id}/neighbors", web::get().to(neighbors))
                .route("/items/suggest", web::post().to(suggest))
                .route("/items/suggest-batch", web::post().to(suggest_batch))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

async fn catalog_info(recommender: web::Data<Arc<Recommender>>) -> ActixResult<HttpResponse> {
    let catalog = recommender.catalog();
    Ok(HttpResponse::Ok().json(CatalogInfo {
        items: catalog.item_count(),
        users: catalog.user_count(),
        ratings: catalog.rating_count(),
    }))
}

async fn recommend(
    recommender: web::Data<Arc<Recommender>>,
    path: web::Path<String>,
    query: web::Query<LimitQuery>,
) -> ActixResult<HttpResponse> {
    let user_id = path.into_inner();
    let limit = query.limit.unwrap_or(DEFAULT_RECOMMENDATIONS);

    match recommender.recommend(&user_id, limit) {
        Ok(items) => Ok(HttpResponse::Ok().json(items)),
        Err(e) => Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "error": e.to_string()
        }))),
    }
}

async fn neighbors(
    recommender: web::Data<Arc<Recommender>>,
    path: web::Path<String>,
    query: web::Query<LimitQuery>,
) -> ActixResult<HttpResponse> {
    let user_id = path.into_inner();
    let limit = query.limit.unwrap_or(DEFAULT_NEIGHBORS);

    match recommender.similar_users(&user_id, limit) {
        Ok(neighbors) => Ok(HttpResponse::Ok().json(neighbors)),
        Err(e) => Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "error": e.to_string()
        }))),
    }
}

async fn suggest(
    recommender: web::Data<Arc<Recommender>>,
    req: web::Json<SuggestRequest>,
) -> ActixResult<HttpResponse> {
    let limit = req.limit.unwrap_or(DEFAULT_SUGGESTIONS);
    let features = ItemFeatures::new(&req.title, &req.author);

    let results: Vec<SuggestResult> = recommender
        .suggest(&features, limit)
        .into_iter()
        .map(to_suggest_result)
        .collect();

    Ok(HttpResponse::Ok().json(results))
}

async fn suggest_batch(
    recommender: web::Data<Arc<Recommender>>,
    req: web::Json<SuggestBatchRequest>,
) -> ActixResult<HttpResponse> {
    if req.items.is_empty() {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "At least one query item is required"
        })));
    }

    let limit = req.limit.unwrap_or(DEFAULT_LIST_SUGGESTIONS);
    let queries: Vec<ItemFeatures> = req
        .items
        .iter()
        .map(|item| ItemFeatures::new(&item.title, &item.author))
        .collect();

    let results: Vec<SuggestBatchResult> = recommender
        .suggest_from_list(&queries, limit)
        .into_iter()
        .map(|scored| SuggestBatchResult {
            id: scored.item.id.clone(),
            title: scored.item.title.clone(),
            author: scored.item.author.clone(),
            average_similarity: scored.score,
        })
        .collect();

    Ok(HttpResponse::Ok().json(results))
}

fn to_suggest_result(scored: ScoredItem) -> SuggestResult {
    SuggestResult {
        similarity_percentage: scored.percent(),
        id: scored.item.id,
        title: scored.item.title,
        author: scored.item.author,
    }
}
