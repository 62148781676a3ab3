//! What a handler hands back: a template to render, or a redirect.

use serde_json::Value;

/// Templates known to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    Blog,
    NewPost,
    SinglePost,
}

impl Template {
    pub const ALL: [Template; 3] = [Template::Blog, Template::NewPost, Template::SinglePost];

    pub fn name(self) -> &'static str {
        match self {
            Template::Blog => "blog.html",
            Template::NewPost => "newpost.html",
            Template::SinglePost => "singlepost.html",
        }
    }
}

/// A template plus the named values it renders.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub template: Template,
    pub context: Value,
}

impl View {
    pub fn new(template: Template, context: Value) -> Self {
        Self { template, context }
    }

    /// Look up a top-level context value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.context.get(key)
    }
}

/// Terminal state of a request handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Render(View),
    Redirect(String),
}
