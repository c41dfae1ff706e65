// src/presentation/http/openapi.rs
use serde::{Deserialize, Serialize};
use std::env;
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};

const DEFAULT_PUBLIC_URL: &str = "http://localhost:8080";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::create_article,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::ArticleListParams,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::application::dto::AuthorDto,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleListItemDto
        )
    ),
    tags(
        (name = "Articles", description = "Article listing and creation"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ServerList),
    info(
        title = "Article API",
        description = "Articles with embedded authors, backed by Postgres and a write-through cache",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Advertises `PUBLIC_API_URL` when set, otherwise the local default.
struct ServerList;

impl Modify for ServerList {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let url = env::var("PUBLIC_API_URL")
            .ok()
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_PUBLIC_URL.to_string());

        openapi.servers = Some(vec![Server::new(url)]);
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}
