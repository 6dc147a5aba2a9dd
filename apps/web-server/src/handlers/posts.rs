//! Post CRUD handlers, including tag-set reconciliation on edit.

use actix_web::{HttpRequest, HttpResponse, web};
use minijinja::context;

use blogly_core::domain::{NewPost, Post};
use blogly_shared::PostForm;

use crate::error::{AppError, AppResult};
use crate::flash::Flash;
use crate::state::AppState;
use crate::templates::{PostView, TagView, UserView};

async fn load_post(state: &AppState, id: i32) -> AppResult<Post> {
    state
        .posts
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {id} not found")))
}

async fn all_tags(state: &AppState) -> AppResult<Vec<TagView>> {
    Ok(state.tags.list().await?.into_iter().map(Into::into).collect())
}

/// GET /users/{id}/posts/new
pub async fn new_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    req: HttpRequest,
) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();
    let user = state
        .users
        .find(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))?;
    let tags = all_tags(&state).await?;

    super::render(
        &state,
        &req,
        "post_new.html",
        context! {
            user => UserView::from(user),
            tags,
            selected_tag_ids => Vec::<i32>::new(),
        },
    )
}

/// POST /users/{id}/posts/new
pub async fn create(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: String,
) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();
    if state.users.find(user_id).await?.is_none() {
        return Err(AppError::NotFound(format!("User {user_id} not found")));
    }

    let form = PostForm::from_urlencoded(&body)?;
    let new = NewPost::new(user_id, form.title, form.content);

    let flash = match state.posts.insert(new, &form.tags).await {
        Ok(_) => Flash::success("New post created!"),
        Err(e) => {
            tracing::warn!(error = %e, "Post create failed");
            Flash::warning("Something went wrong :/")
        }
    };

    Ok(super::see_other(&format!("/users/{user_id}"), flash))
}

/// GET /posts/{id}
pub async fn detail(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    req: HttpRequest,
) -> AppResult<HttpResponse> {
    let post = load_post(&state, path.into_inner()).await?;
    let author = state
        .users
        .find(post.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", post.user_id)))?;
    let tags: Vec<TagView> = state
        .posts
        .tags_of(post.id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    super::render(
        &state,
        &req,
        "post_detail.html",
        context! {
            post => PostView::from(post),
            author => UserView::from(author),
            tags,
        },
    )
}

/// GET /posts/{id}/edit
pub async fn edit_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    req: HttpRequest,
) -> AppResult<HttpResponse> {
    let post = load_post(&state, path.into_inner()).await?;
    let tags = all_tags(&state).await?;
    let selected_tag_ids: Vec<i32> = state
        .posts
        .tags_of(post.id)
        .await?
        .into_iter()
        .map(|t| t.id)
        .collect();

    super::render(
        &state,
        &req,
        "post_edit.html",
        context! {
            post => PostView::from(post),
            tags,
            selected_tag_ids,
        },
    )
}

/// POST /posts/{id}/edit
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: String,
) -> AppResult<HttpResponse> {
    let mut post = load_post(&state, path.into_inner()).await?;
    let form = PostForm::from_urlencoded(&body)?;

    post.title = form.title;
    post.content = form.content;
    let post_id = post.id;

    let flash = match state.posts.update(post, &form.tags).await {
        Ok(_) => Flash::success("Post updated!"),
        Err(e) => {
            tracing::warn!(error = %e, "Post update failed");
            Flash::warning("Something went wrong :/")
        }
    };

    Ok(super::see_other(&format!("/posts/{post_id}"), flash))
}

/// POST /posts/{id}/delete
pub async fn delete(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let post = load_post(&state, path.into_inner()).await?;
    // Capture the owner before the row goes away; it is the redirect target.
    let author_id = post.user_id;

    let flash = match state.posts.delete(post.id).await {
        Ok(()) => Flash::success("Post deleted!"),
        Err(e) => {
            tracing::warn!(error = %e, "Post delete failed");
            Flash::warning("Something went wrong :/")
        }
    };

    Ok(super::see_other(&format!("/users/{author_id}"), flash))
}
