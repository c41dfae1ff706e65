// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::CreateArticleCommand,
    dto::{ArticleDto, ArticleListItemDto},
    queries::articles::ListArticlesQuery,
};
use crate::domain::article::DEFAULT_PAGE_LIMIT;
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Query, rejection::JsonRejection},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

pub const TOTAL_COUNT_HEADER: &str = "x-total-count";
pub const PAGE_HEADER: &str = "x-page";
pub const LIMIT_HEADER: &str = "x-limit";
pub const TOTAL_PAGES_HEADER: &str = "x-total-pages";

/// Query string for `GET /articles`. Numbers are kept as text so malformed
/// values fall back to defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Substring matched against title or body, case-insensitively.
    #[serde(default)]
    pub search: Option<String>,
    /// Substring matched against the author's name, case-insensitively.
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    #[serde(default)]
    pub author_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

fn parse_positive(value: Option<&str>, default: i64) -> i64 {
    value
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .filter(|parsed| *parsed > 0)
        .unwrap_or(default)
}

fn pagination_headers(total: u64, page: u32, limit: u32, total_pages: u64) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(HeaderName::from_static(TOTAL_COUNT_HEADER), HeaderValue::from(total));
    headers.insert(HeaderName::from_static(PAGE_HEADER), HeaderValue::from(page));
    headers.insert(HeaderName::from_static(LIMIT_HEADER), HeaderValue::from(limit));
    headers.insert(HeaderName::from_static(TOTAL_PAGES_HEADER), HeaderValue::from(total_pages));
    headers
}

#[utoipa::path(
    get,
    path = "/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "One page of articles, newest first.", body = [ArticleListItemDto],
            headers(
                ("X-Total-Count" = u64, description = "Rows matching the filters"),
                ("X-Page" = u32, description = "Effective page"),
                ("X-Limit" = u32, description = "Effective page size"),
                ("X-Total-Pages" = u64, description = "Pages available at this size")
            )
        ),
        (status = 500, description = "Store failure.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<(HeaderMap, Json<Vec<ArticleListItemDto>>)> {
    let query = ListArticlesQuery {
        search: params.search,
        author_name: params.author,
        page: parse_positive(params.page.as_deref(), 1),
        limit: parse_positive(params.limit.as_deref(), i64::from(DEFAULT_PAGE_LIMIT)),
    };

    let result = state
        .services
        .article_queries
        .list_articles(query)
        .await
        .into_http()?;

    let headers = pagination_headers(result.total, result.page, result.limit, result.total_pages());
    Ok((headers, Json(result.articles)))
}

#[utoipa::path(
    post,
    path = "/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Missing fields or unknown author.", body = ErrorResponse),
        (status = 500, description = "Store failure.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<CreateArticleRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected article payload");
        HttpError::bad_request("invalid JSON payload")
    })?;

    if [&payload.author_id, &payload.title, &payload.body]
        .iter()
        .any(|field| field.trim().is_empty())
    {
        return Err(HttpError::bad_request(
            "missing required fields: author_id, title, body",
        ));
    }

    let command = CreateArticleCommand {
        author_id: payload.author_id,
        title: payload.title,
        body: payload.body,
    };

    state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()
        .map(|article| (StatusCode::CREATED, Json(article)))
}
