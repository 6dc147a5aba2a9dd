//! User CRUD handlers.

use actix_web::{HttpRequest, HttpResponse, web};
use minijinja::context;

use blogly_core::domain::{NewUser, User};
use blogly_shared::UserForm;

use crate::error::{AppError, AppResult};
use crate::flash::Flash;
use crate::state::AppState;
use crate::templates::{PostView, UserView};

async fn load_user(state: &AppState, id: i32) -> AppResult<User> {
    state
        .users
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {id} not found")))
}

/// GET /users
pub async fn list(state: web::Data<AppState>, req: HttpRequest) -> AppResult<HttpResponse> {
    let users: Vec<UserView> = state
        .users
        .list()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    super::render(&state, &req, "users.html", context! { users })
}

/// GET /users/new
pub async fn new_form(state: web::Data<AppState>, req: HttpRequest) -> AppResult<HttpResponse> {
    super::render(&state, &req, "user_new.html", context! {})
}

/// POST /users/new
pub async fn create(
    state: web::Data<AppState>,
    form: web::Form<UserForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();
    let new = NewUser::new(form.first_name, form.last_name, form.image_url);

    let flash = match state.users.insert(new).await {
        Ok(_) => Flash::success("New user created!"),
        Err(e) => {
            tracing::warn!(error = %e, "User create failed");
            Flash::warning("Something went wrong :/")
        }
    };

    Ok(super::see_other("/users", flash))
}

/// GET /users/{id}
pub async fn detail(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    req: HttpRequest,
) -> AppResult<HttpResponse> {
    let user = load_user(&state, path.into_inner()).await?;
    let posts: Vec<PostView> = state
        .posts
        .find_by_user(user.id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    super::render(
        &state,
        &req,
        "user_detail.html",
        context! { user => UserView::from(user), posts },
    )
}

/// GET /users/{id}/edit
pub async fn edit_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    req: HttpRequest,
) -> AppResult<HttpResponse> {
    let user = load_user(&state, path.into_inner()).await?;

    super::render(
        &state,
        &req,
        "user_edit.html",
        context! { user => UserView::from(user) },
    )
}

/// POST /users/{id}/edit
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    form: web::Form<UserForm>,
) -> AppResult<HttpResponse> {
    let mut user = load_user(&state, path.into_inner()).await?;
    let form = form.into_inner();

    user.first_name = form.first_name;
    user.last_name = form.last_name;
    user.image_url = User::image_or_default(form.image_url);

    let flash = match state.users.update(user).await {
        Ok(_) => Flash::success("User updated!"),
        Err(e) => {
            tracing::warn!(error = %e, "User update failed");
            Flash::warning("Something went wrong :/")
        }
    };

    Ok(super::see_other("/users", flash))
}

/// POST /users/{id}/delete
pub async fn delete(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let user = load_user(&state, path.into_inner()).await?;

    let flash = match state.users.delete(user.id).await {
        Ok(()) => Flash::success("User deleted!"),
        Err(e) => {
            tracing::warn!(error = %e, "User delete failed");
            Flash::warning("Something went wrong :/")
        }
    };

    Ok(super::see_other("/users", flash))
}
