//! HTTP handlers and route configuration.

mod home;
mod posts;
mod tags;
mod users;

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, web};
use minijinja::context;

use crate::error::AppResult;
use crate::flash::Flash;
use crate::state::AppState;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home::home))
        .service(
            web::scope("/users")
                .route("", web::get().to(users::list))
                .route("/new", web::get().to(users::new_form))
                .route("/new", web::post().to(users::create))
                .route("/{id}", web::get().to(users::detail))
                .route("/{id}/edit", web::get().to(users::edit_form))
                .route("/{id}/edit", web::post().to(users::update))
                .route("/{id}/delete", web::post().to(users::delete))
                .route("/{id}/posts/new", web::get().to(posts::new_form))
                .route("/{id}/posts/new", web::post().to(posts::create)),
        )
        .service(
            web::scope("/posts")
                .route("/{id}", web::get().to(posts::detail))
                .route("/{id}/edit", web::get().to(posts::edit_form))
                .route("/{id}/edit", web::post().to(posts::update))
                .route("/{id}/delete", web::post().to(posts::delete)),
        )
        .service(
            web::scope("/tags")
                .route("", web::get().to(tags::list))
                .route("/new", web::get().to(tags::new_form))
                .route("/new", web::post().to(tags::create))
                .route("/{id}", web::get().to(tags::detail))
                .route("/{id}/edit", web::get().to(tags::edit_form))
                .route("/{id}/edit", web::post().to(tags::update))
                .route("/{id}/delete", web::post().to(tags::delete)),
        );
}

/// Render a page, folding any pending flash notice into the context and
/// clearing it from the client once shown.
pub(crate) fn render(
    state: &AppState,
    req: &HttpRequest,
    template: &str,
    ctx: minijinja::Value,
) -> AppResult<HttpResponse> {
    let flash = Flash::take(req);
    let had_flash = flash.is_some();

    let html = state.templates.render(template, context! { flash, ..ctx })?;

    let mut resp = HttpResponse::Ok();
    resp.content_type("text/html; charset=utf-8");
    if had_flash {
        resp.cookie(Flash::removal_cookie());
    }

    Ok(resp.body(html))
}

/// Redirect after a mutation, carrying a flash notice for the next page.
pub(crate) fn see_other(location: &str, flash: Flash) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.to_string()))
        .cookie(flash.into_cookie())
        .finish()
}
