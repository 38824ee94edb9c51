//! Theme handlers - `/temas`.

use actix_web::{HttpResponse, web};

use blog_core::domain::{Theme, ThemeDraft};
use blog_shared::dto::{ThemeRequest, ThemeResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(theme: Theme) -> ThemeResponse {
    ThemeResponse {
        id: theme.id,
        descricao: theme.description,
    }
}

fn draft_from_request(req: &mut ThemeRequest) -> AppResult<ThemeDraft> {
    req.descricao
        .take()
        .map(ThemeDraft::new)
        .ok_or_else(|| AppError::Validation(vec!["descricao is required".to_string()]))
}

/// GET /temas
pub async fn list_themes(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let themes = state.themes.list_all().await?;
    let body: Vec<ThemeResponse> = themes.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /temas/{id}
pub async fn get_theme(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let theme = state.themes.get_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(to_response(theme)))
}

/// GET /temas/descricao/{descricao}
pub async fn search_themes_by_description(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let themes = state
        .themes
        .search_by_description(&path.into_inner())
        .await?;
    let body: Vec<ThemeResponse> = themes.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /temas
pub async fn create_theme(
    state: web::Data<AppState>,
    body: web::Json<ThemeRequest>,
) -> AppResult<HttpResponse> {
    let draft = draft_from_request(&mut body.into_inner())?;
    let theme = state.themes.create(draft).await?;

    Ok(HttpResponse::Created().json(to_response(theme)))
}

/// PUT /temas
pub async fn update_theme(
    state: web::Data<AppState>,
    body: web::Json<ThemeRequest>,
) -> AppResult<HttpResponse> {
    let mut req = body.into_inner();
    let id = req
        .id
        .ok_or_else(|| AppError::Validation(vec!["id is required".to_string()]))?;
    let draft = draft_from_request(&mut req)?;
    let theme = state.themes.update(id, draft).await?;

    Ok(HttpResponse::Ok().json(to_response(theme)))
}

/// DELETE /temas/{id}
///
/// Refused with 409 while posts are filed under the theme.
pub async fn delete_theme(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    state.themes.delete(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use blog_shared::dto::ThemeResponse;
    use serde_json::json;

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    #[actix_web::test]
    async fn test_theme_lifecycle() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::in_memory()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/temas")
            .set_json(json!({"descricao": "Rust"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: ThemeResponse = test::read_body_json(resp).await;

        let req = test::TestRequest::get()
            .uri("/temas/descricao/rUsT")
            .to_request();
        let found: Vec<ThemeResponse> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(found, vec![created.clone()]);

        let req = test::TestRequest::put()
            .uri("/temas")
            .set_json(json!({"id": created.id, "descricao": "Rust async"}))
            .to_request();
        let updated: ThemeResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.descricao, "Rust async");

        let req = test::TestRequest::delete()
            .uri(&format!("/temas/{}", created.id))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NO_CONTENT
        );

        let req = test::TestRequest::get()
            .uri(&format!("/temas/{}", created.id))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[actix_web::test]
    async fn test_theme_in_use_cannot_be_deleted() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::in_memory()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/temas")
            .set_json(json!({"descricao": "Rust"}))
            .to_request();
        let theme: ThemeResponse = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/postagens")
            .set_json(json!({"titulo": "Hello", "texto": "World", "tema": {"id": theme.id}}))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CREATED
        );

        let req = test::TestRequest::delete()
            .uri(&format!("/temas/{}", theme.id))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CONFLICT
        );
    }

    #[actix_web::test]
    async fn test_create_theme_without_description_is_400() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::in_memory()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/temas")
            .set_json(json!({}))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::BAD_REQUEST
        );
    }
}
