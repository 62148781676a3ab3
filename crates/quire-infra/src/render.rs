//! Template rendering via minijinja.
//!
//! Templates live in `templates/` and are compiled into the binary. Names end in
//! `.html`, so minijinja's default auto-escape callback HTML-escapes every
//! interpolated value.

use chrono::DateTime;
use minijinja::{Environment, ErrorKind};

use quire_core::error::RenderError;
use quire_core::ports::Renderer;
use quire_core::view::View;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("blog.html", include_str!("../templates/blog.html")),
    ("newpost.html", include_str!("../templates/newpost.html")),
    ("singlepost.html", include_str!("../templates/singlepost.html")),
];

/// Renderer backed by a preloaded minijinja environment.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Compile the bundled templates.
    ///
    /// Fails if any template has a syntax error.
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.add_filter("date", format_date);

        for &(name, source) in TEMPLATES {
            env.add_template(name, source)
                .map_err(|e| RenderError::Render(format!("{name}: {e}")))?;
        }

        tracing::debug!(templates = TEMPLATES.len(), "Templates compiled");
        Ok(Self { env })
    }
}

impl Renderer for MiniJinjaRenderer {
    fn render(&self, view: &View) -> Result<String, RenderError> {
        let name = view.template.name();
        let template = self.env.get_template(name).map_err(|e| match e.kind() {
            ErrorKind::TemplateNotFound => RenderError::UnknownTemplate(name.to_string()),
            _ => RenderError::Render(e.to_string()),
        })?;

        template
            .render(&view.context)
            .map_err(|e| RenderError::Render(e.to_string()))
    }
}

/// `{{ ts | date }}` - RFC 3339 timestamp to a readable UTC date.
fn format_date(value: String) -> String {
    match DateTime::parse_from_rfc3339(&value) {
        Ok(ts) => ts.format("%b %-d, %Y %H:%M UTC").to_string(),
        Err(_) => value,
    }
}
