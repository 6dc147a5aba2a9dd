//! Tag CRUD handlers.

use actix_web::{HttpRequest, HttpResponse, web};
use minijinja::context;

use blogly_core::domain::{NewTag, Tag};
use blogly_shared::TagForm;

use crate::error::{AppError, AppResult};
use crate::flash::Flash;
use crate::state::AppState;
use crate::templates::{PostView, TagView};

async fn load_tag(state: &AppState, id: i32) -> AppResult<Tag> {
    state
        .tags
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Tag {id} not found")))
}

/// GET /tags
pub async fn list(state: web::Data<AppState>, req: HttpRequest) -> AppResult<HttpResponse> {
    let tags: Vec<TagView> = state
        .tags
        .list()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    super::render(&state, &req, "tags.html", context! { tags })
}

/// GET /tags/new
pub async fn new_form(state: web::Data<AppState>, req: HttpRequest) -> AppResult<HttpResponse> {
    super::render(&state, &req, "tag_new.html", context! {})
}

/// POST /tags/new
pub async fn create(
    state: web::Data<AppState>,
    form: web::Form<TagForm>,
) -> AppResult<HttpResponse> {
    let new = NewTag {
        name: form.into_inner().name,
    };

    let flash = match state.tags.insert(new).await {
        Ok(_) => Flash::success("New tag created!"),
        Err(e) => {
            tracing::warn!(error = %e, "Tag create failed");
            Flash::warning("Something went wrong :/")
        }
    };

    Ok(super::see_other("/tags", flash))
}

/// GET /tags/{id}
pub async fn detail(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    req: HttpRequest,
) -> AppResult<HttpResponse> {
    let tag = load_tag(&state, path.into_inner()).await?;
    let posts: Vec<PostView> = state
        .tags
        .posts_of(tag.id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    super::render(
        &state,
        &req,
        "tag_detail.html",
        context! { tag => TagView::from(tag), posts },
    )
}

/// GET /tags/{id}/edit
pub async fn edit_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    req: HttpRequest,
) -> AppResult<HttpResponse> {
    let tag = load_tag(&state, path.into_inner()).await?;

    super::render(
        &state,
        &req,
        "tag_edit.html",
        context! { tag => TagView::from(tag) },
    )
}

/// POST /tags/{id}/edit
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    form: web::Form<TagForm>,
) -> AppResult<HttpResponse> {
    let mut tag = load_tag(&state, path.into_inner()).await?;
    tag.name = form.into_inner().name;

    let flash = match state.tags.update(tag).await {
        Ok(_) => Flash::success("Tag updated!"),
        Err(e) => {
            tracing::warn!(error = %e, "Tag update failed");
            Flash::warning("Something went wrong :/")
        }
    };

    Ok(super::see_other("/tags", flash))
}

/// POST /tags/{id}/delete
pub async fn delete(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let tag = load_tag(&state, path.into_inner()).await?;

    let flash = match state.tags.delete(tag.id).await {
        Ok(()) => Flash::success("Tag deleted!"),
        Err(e) => {
            tracing::warn!(error = %e, "Tag delete failed");
            Flash::warning("Something went wrong :/")
        }
    };

    Ok(super::see_other("/tags", flash))
}
