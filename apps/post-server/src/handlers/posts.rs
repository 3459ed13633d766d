//! Post list handlers.

use actix_web::{HttpResponse, web};

use postboard_core::domain::NewPost;
use postboard_infra::api::normalize::to_raw_post;
use postboard_shared::{ApiResponse, CreatePostRequest, PostListResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/post
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    let records = posts.iter().map(to_raw_post).collect();

    Ok(HttpResponse::Ok().json(PostListResponse { records }))
}

/// POST /api/post
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.title.is_empty() {
        return Err(AppError::BadRequest("title is required".to_string()));
    }

    let post = state.posts.insert(NewPost::new(req.title, req.content)).await?;
    tracing::info!(id = ?post.id, "Post created");

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        to_raw_post(&post),
        "Post created",
    )))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test, web};
    use serde_json::{Value, json};

    use crate::config::AppConfig;
    use crate::handlers::configure_routes;
    use crate::state::AppState;

    fn state(seed_posts: bool) -> AppState {
        AppState::new(&AppConfig {
            seed_posts,
            ..AppConfig::default()
        })
        .unwrap()
    }

    #[actix_web::test]
    async fn test_list_uses_records_envelope() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(true)))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/post").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let records = body["records"].as_array().unwrap();
        assert_eq!(records.len(), 3);
        assert!(records[0]["id"].is_string());
        assert!(records[0].get("createdAt").is_some());
    }

    #[actix_web::test]
    async fn test_create_then_list() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(false)))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/post")
            .set_json(json!({"title": "Hello", "content": "New content created"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = test::TestRequest::get().uri("/api/post").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["records"][0]["title"], "Hello");
    }

    #[actix_web::test]
    async fn test_empty_title_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(false)))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/post")
            .set_json(json!({"title": "", "content": "x"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 400);
    }
}
