//! Request handlers for listing, submitting and viewing posts.
//!
//! Each call is a single transaction against the [`PostRepository`]; the
//! service keeps no state between requests.

use std::sync::Arc;

use serde_json::json;

use crate::domain::PostId;
use crate::error::RepoError;
use crate::pagination::{self, PageNumber};
use crate::ports::PostRepository;
use crate::validation::{PostSubmission, ValidationErrors};
use crate::view::{Outcome, Template, View};

/// Notice shown when a post id does not resolve.
pub const POST_NOT_FOUND: &str = "post not found";

/// URL of a single post.
pub fn post_url(id: PostId) -> String {
    format!("/blog/{id}")
}

#[derive(Clone)]
pub struct BlogService {
    posts: Arc<dyn PostRepository>,
}

impl BlogService {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Newest-first listing of one page.
    pub async fn list(&self, page: PageNumber) -> Result<View, RepoError> {
        let page = pagination::fetch_page(self.posts.as_ref(), page).await?;

        Ok(View::new(
            Template::Blog,
            json!({
                "posts": page.items,
                "page": page.number,
                "has_previous": page.has_previous,
                "has_next": page.has_next,
                "previous_page": page.previous_page(),
                "next_page": page.next_page(),
            }),
        ))
    }

    /// The empty submission form.
    pub fn new_form(&self) -> View {
        form_view(&PostSubmission::default(), &ValidationErrors::default())
    }

    /// Validate, persist and redirect; or re-render the form with errors.
    pub async fn create(&self, submission: PostSubmission) -> Result<Outcome, RepoError> {
        match submission.validate() {
            Ok(post) => {
                let id = self.posts.insert(post).await?;
                Ok(Outcome::Redirect(post_url(id)))
            }
            Err(errors) => Ok(Outcome::Render(form_view(&submission, &errors))),
        }
    }

    /// A single post, or the not-found notice.
    pub async fn view(&self, id: PostId) -> Result<View, RepoError> {
        match self.posts.find_by_id(id).await? {
            Some(post) => Ok(View::new(Template::SinglePost, json!({ "post": post }))),
            None => Ok(not_found_view()),
        }
    }
}

/// The view rendered for an id that names no post.
pub fn not_found_view() -> View {
    View::new(
        Template::SinglePost,
        json!({ "post": null, "notice": POST_NOT_FOUND }),
    )
}

fn form_view(submission: &PostSubmission, errors: &ValidationErrors) -> View {
    View::new(
        Template::NewPost,
        json!({
            "title": submission.title,
            "body": submission.body,
            "errors": errors,
        }),
    )
}
