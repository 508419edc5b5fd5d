use crate::composition::style::Template;
use crate::foundation::error::CoverResult;
use crate::render::academic::AcademicRenderer;
use crate::render::classic::ClassicRenderer;
use crate::render::modern::ModernRenderer;
use crate::render::scene::Scene;

/// One template's rendering strategy.
///
/// A renderer is a pure function over the scene: it draws, in order, the
/// background fill, the clipped photograph, any template decoration, and the
/// text elements. Inputs are already validated by the owning models; no
/// renderer re-validates, and a failure here is a programming defect that
/// propagates unhandled.
pub(crate) trait StyleRenderer: Sync {
    /// The template this strategy implements.
    fn template(&self) -> Template;

    /// Draw one full frame into `ctx`.
    fn render(&self, scene: &mut Scene<'_>, ctx: &mut vello_cpu::RenderContext)
    -> CoverResult<()>;
}

/// Resolve the rendering strategy for a template.
///
/// Adding a fourth template is a pure addition here plus its renderer
/// module; no other call site branches on the template.
pub(crate) fn renderer_for(template: Template) -> &'static dyn StyleRenderer {
    match template {
        Template::Classic => &ClassicRenderer,
        Template::Modern => &ModernRenderer,
        Template::Academic => &AcademicRenderer,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/style.rs"]
mod tests;
