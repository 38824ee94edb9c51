//! Post handlers - `/postagens`.

use actix_web::{HttpResponse, web};

use blog_core::domain::{Post, PostDraft};
use blog_shared::dto::{PostRequest, PostResponse, ThemeRef};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        titulo: post.title,
        texto: post.text,
        data: post.created_at,
        tema: ThemeRef { id: post.theme_id },
    }
}

/// Check that every required field is present. Content rules are enforced by
/// `PostDraft::validate` in the service.
fn draft_from_request(req: PostRequest) -> AppResult<PostDraft> {
    match (req.titulo, req.texto, req.tema) {
        (Some(titulo), Some(texto), Some(tema)) => Ok(PostDraft::new(titulo, texto, tema.id)),
        (titulo, texto, tema) => {
            let missing = [
                ("titulo", titulo.is_none()),
                ("texto", texto.is_none()),
                ("tema", tema.is_none()),
            ]
            .into_iter()
            .filter(|(_, absent)| *absent)
            .map(|(field, _)| format!("{field} is required"))
            .collect();
            Err(AppError::Validation(missing))
        }
    }
}

/// GET /postagens
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_all().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /postagens/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// GET /postagens/titulo/{titulo}
pub async fn search_posts_by_title(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let posts = state.posts.search_by_title(&path.into_inner()).await?;
    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /postagens
///
/// Any `id` in the body is ignored; the store assigns one.
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let draft = draft_from_request(body.into_inner())?;
    let post = state.posts.create(draft).await?;

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// PUT /postagens
///
/// The body's `id` is the only source of identity for the update.
pub async fn update_post(
    state: web::Data<AppState>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let mut req = body.into_inner();
    let id = req
        .id
        .take()
        .ok_or_else(|| AppError::Validation(vec!["id is required".to_string()]))?;
    let draft = draft_from_request(req)?;
    let post = state.posts.update(id, draft).await?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// DELETE /postagens/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    state.posts.delete(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use blog_core::domain::ThemeDraft;
    use blog_shared::ErrorResponse;
    use blog_shared::dto::PostResponse;
    use serde_json::json;

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    /// In-memory state with theme 1 ("Rust") already stored.
    async fn seeded_state() -> AppState {
        let state = AppState::in_memory();
        state
            .themes
            .create(ThemeDraft::new("Rust"))
            .await
            .unwrap();
        state
    }

    #[actix_web::test]
    async fn test_create_then_get() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(seeded_state().await))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/postagens")
            .set_json(json!({"titulo": "Hello", "texto": "World", "tema": {"id": 1}}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: PostResponse = test::read_body_json(resp).await;
        assert_eq!(created.id, 1);
        assert_eq!(created.titulo, "Hello");
        assert_eq!(created.texto, "World");
        assert_eq!(created.tema.id, 1);

        let req = test::TestRequest::get().uri("/postagens/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let fetched: PostResponse = test::read_body_json(resp).await;
        assert_eq!(fetched, created);
    }

    #[actix_web::test]
    async fn test_list_starts_empty() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::in_memory()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/postagens").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let posts: Vec<PostResponse> = test::read_body_json(resp).await;
        assert!(posts.is_empty());
    }

    #[actix_web::test]
    async fn test_get_missing_post_is_404() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::in_memory()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/postagens/5").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let problem: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(problem.status, 404);
    }

    #[actix_web::test]
    async fn test_non_numeric_id_is_400() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::in_memory()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/postagens/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_create_with_unknown_theme_is_400() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(seeded_state().await))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/postagens")
            .set_json(json!({"titulo": "Hello", "texto": "World", "tema": {"id": 99}}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get().uri("/postagens").to_request();
        let posts: Vec<PostResponse> = test::call_and_read_body_json(&app, req).await;
        assert!(posts.is_empty());
    }

    #[actix_web::test]
    async fn test_create_with_missing_fields_is_400() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(seeded_state().await))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/postagens")
            .set_json(json!({"texto": "World"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let problem: ErrorResponse = test::read_body_json(resp).await;
        let detail = problem.detail.unwrap();
        assert!(detail.contains("titulo is required"));
        assert!(detail.contains("tema is required"));
    }

    #[actix_web::test]
    async fn test_create_with_oversized_title_is_400() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(seeded_state().await))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/postagens")
            .set_json(json!({"titulo": "a".repeat(101), "texto": "World", "tema": {"id": 1}}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_malformed_json_is_400() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(seeded_state().await))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/postagens")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_search_by_title_ignores_case() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(seeded_state().await))
                .configure(configure_routes),
        )
        .await;

        for titulo in ["xABCy", "other"] {
            let req = test::TestRequest::post()
                .uri("/postagens")
                .set_json(json!({"titulo": titulo, "texto": "Body", "tema": {"id": 1}}))
                .to_request();
            assert_eq!(
                test::call_service(&app, req).await.status(),
                StatusCode::CREATED
            );
        }

        let req = test::TestRequest::get()
            .uri("/postagens/titulo/abc")
            .to_request();
        let found: Vec<PostResponse> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].titulo, "xABCy");
    }

    #[actix_web::test]
    async fn test_update_existing_post() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(seeded_state().await))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/postagens")
            .set_json(json!({"titulo": "Hello", "texto": "World", "tema": {"id": 1}}))
            .to_request();
        let created: PostResponse = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::put()
            .uri("/postagens")
            .set_json(json!({"id": created.id, "titulo": "Hi", "texto": "There", "tema": {"id": 1}}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let updated: PostResponse = test::read_body_json(resp).await;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.titulo, "Hi");
        assert_eq!(updated.data, created.data);
    }

    #[actix_web::test]
    async fn test_update_missing_post_is_404() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(seeded_state().await))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/postagens")
            .set_json(json!({"id": 8, "titulo": "Hi", "texto": "There", "tema": {"id": 1}}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_update_with_unknown_theme_is_400() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(seeded_state().await))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/postagens")
            .set_json(json!({"titulo": "Hello", "texto": "World", "tema": {"id": 1}}))
            .to_request();
        let created: PostResponse = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::put()
            .uri("/postagens")
            .set_json(json!({"id": created.id, "titulo": "Hi", "texto": "There", "tema": {"id": 42}}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_update_without_id_is_400() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(seeded_state().await))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/postagens")
            .set_json(json!({"titulo": "Hi", "texto": "There", "tema": {"id": 1}}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_delete_then_get_is_404() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(seeded_state().await))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/postagens")
            .set_json(json!({"titulo": "Hello", "texto": "World", "tema": {"id": 1}}))
            .to_request();
        let created: PostResponse = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::delete()
            .uri(&format!("/postagens/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(test::read_body(resp).await.is_empty());

        let req = test::TestRequest::get()
            .uri(&format!("/postagens/{}", created.id))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );

        let req = test::TestRequest::delete()
            .uri(&format!("/postagens/{}", created.id))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );
    }
}
