//! Data Transfer Objects - request/response types for the API.
//!
//! Field names follow the public JSON contract (`titulo`, `texto`, `data`,
//! `tema`, `descricao`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reference to a theme by id, as nested inside a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeRef {
    pub id: i64,
}

/// Body of `POST /postagens` and `PUT /postagens`.
///
/// Every field is optional at the wire level so that missing fields surface
/// as validation errors rather than opaque parse failures. `id` is ignored on
/// create and required on update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostRequest {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub titulo: Option<String>,
    #[serde(default)]
    pub texto: Option<String>,
    #[serde(default)]
    pub tema: Option<ThemeRef>,
}

/// A stored post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub titulo: String,
    pub texto: String,
    pub data: DateTime<Utc>,
    pub tema: ThemeRef,
}

/// Body of `POST /temas` and `PUT /temas`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeRequest {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub descricao: Option<String>,
}

/// A stored theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeResponse {
    pub id: i64,
    pub descricao: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_request_accepts_partial_body() {
        let req: PostRequest = serde_json::from_str(r#"{"titulo": "Hello"}"#).unwrap();
        assert_eq!(req.titulo.as_deref(), Some("Hello"));
        assert!(req.texto.is_none());
        assert!(req.tema.is_none());
    }

    #[test]
    fn test_post_request_nested_theme() {
        let req: PostRequest = serde_json::from_str(
            r#"{"id": 3, "titulo": "Hello", "texto": "World", "tema": {"id": 1}}"#,
        )
        .unwrap();
        assert_eq!(req.id, Some(3));
        assert_eq!(req.tema, Some(ThemeRef { id: 1 }));
    }

    #[test]
    fn test_post_response_field_names() {
        let resp = PostResponse {
            id: 1,
            titulo: "Hello".to_string(),
            texto: "World".to_string(),
            data: Utc::now(),
            tema: ThemeRef { id: 1 },
        };
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["titulo"], "Hello");
        assert_eq!(value["texto"], "World");
        assert_eq!(value["tema"]["id"], 1);
        assert!(value["data"].is_string());
    }
}
