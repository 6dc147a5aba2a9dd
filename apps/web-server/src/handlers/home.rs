//! Home page: the five most recent posts.

use actix_web::{HttpRequest, HttpResponse, web};
use minijinja::context;

use blogly_core::domain::RECENT_POST_LIMIT;

use crate::error::AppResult;
use crate::state::AppState;
use crate::templates::PostView;

/// GET /
pub async fn home(state: web::Data<AppState>, req: HttpRequest) -> AppResult<HttpResponse> {
    let posts: Vec<PostView> = state
        .posts
        .recent(RECENT_POST_LIMIT)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    super::render(&state, &req, "home.html", context! { posts })
}
