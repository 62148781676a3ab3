use crate::error::RenderError;
use crate::view::View;

/// Turns a [`View`] into markup. Implementations are responsible for escaping.
pub trait Renderer: Send + Sync {
    fn render(&self, view: &View) -> Result<String, RenderError>;
}
