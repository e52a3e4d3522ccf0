//! Post analytics handler.

use actix_web::{HttpResponse, web};

use miniblog_core::analytics::{analyze_one, summarize, summarize_by_author};
use miniblog_shared::ApiResponse;
use miniblog_shared::dto::{AnalyticsQuery, AnalyticsResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Author summarized when the query names none.
const DEFAULT_AUTHOR: &str = "serhii";

/// GET /api/analytics?author=
pub async fn post_analytics(
    state: web::Data<AppState>,
    query: web::Query<AnalyticsQuery>,
) -> AppResult<HttpResponse> {
    let posts = state.posts.get_all_posts();
    let author = query.into_inner().author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string());

    let totals = summarize(&posts);
    let by_author = summarize_by_author(&posts, &author);

    Ok(HttpResponse::Ok().json(ApiResponse::ok(AnalyticsResponse {
        posts: posts.iter().map(analyze_one).collect(),
        summary: vec![totals.to_string(), by_author.to_string()],
        totals,
        by_author,
    })))
}
