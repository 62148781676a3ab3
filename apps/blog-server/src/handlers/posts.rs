//! Post listing, submission and single-post handlers.

use actix_web::{HttpResponse, http::header, web};

use quire_core::blog::not_found_view;
use quire_core::domain::PostId;
use quire_core::pagination::PageNumber;
use quire_core::validation::PostSubmission;
use quire_core::view::{Outcome, View};
use quire_shared::{ListQuery, PostForm};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET / and GET /blog?page=N
///
/// The query is taken as raw pairs so a repeated `page` cannot fail
/// extraction; the first value wins.
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<Vec<(String, String)>>,
) -> AppResult<HttpResponse> {
    let query = ListQuery::from_pairs(query.into_inner());
    let page = PageNumber::parse(query.page.as_deref());
    let view = state.blog.list(page).await?;
    render(&state, &view)
}

/// GET /blog/new
pub async fn new_form(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    render(&state, &state.blog.new_form())
}

/// POST /blog/new
pub async fn create(
    state: web::Data<AppState>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();
    let submission = PostSubmission::new(
        form.title.unwrap_or_default(),
        form.body.unwrap_or_default(),
    );

    match state.blog.create(submission).await? {
        Outcome::Redirect(location) => {
            tracing::info!(location = %location, "Post created");
            Ok(HttpResponse::SeeOther()
                .insert_header((header::LOCATION, location))
                .finish())
        }
        Outcome::Render(view) => {
            let fields: Vec<&str> = view
                .get("errors")
                .and_then(|e| e.as_object())
                .map(|e| e.keys().map(String::as_str).collect())
                .unwrap_or_default();
            tracing::debug!(?fields, "Post submission rejected");
            render(&state, &view)
        }
    }
}

/// GET /blog/{id}
///
/// The route only matches digits; a number too large for `u64` cannot have
/// been issued, so it gets the same notice as any other unknown id.
pub async fn view(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let view = match path.parse::<u64>() {
        Ok(id) => state.blog.view(PostId(id)).await?,
        Err(_) => not_found_view(),
    };

    if view.get("post").is_some_and(|p| p.is_null()) {
        tracing::debug!(id = %path.as_str(), "Post not found");
    }
    render(&state, &view)
}

fn render(state: &AppState, view: &View) -> AppResult<HttpResponse> {
    let html = state.renderer.render(view)?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}
