//! Template rendering for reports.
//!
//! Uses Handlebars with HTML escaping off and two helpers:
//! - fixed: format a number with N decimals (`{{fixed elapsed_secs 6}}`)
//! - marker: a string value, or `#VALUE!` when it is null

use handlebars::{
    no_escape, Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext,
};
use numstat_core::NumstatError;
use serde_json::Value;
use tracing::debug;

use crate::templates::TemplatesFile;

/// Placeholder for a value that could not be produced
pub const VALUE_MARKER: &str = "#VALUE!";

/// Compiled renderer with registered helpers
pub struct TemplateRenderer<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateRenderer<'a> {
    /// Create a new renderer from a templates file
    pub fn new(templates: TemplatesFile) -> Result<Self, NumstatError> {
        let mut handlebars = Handlebars::new();

        handlebars.set_strict_mode(false);
        handlebars.register_escape_fn(no_escape);

        handlebars.register_helper("fixed", Box::new(FixedHelper));
        handlebars.register_helper("marker", Box::new(MarkerHelper));

        for (name, template) in &templates.templates {
            handlebars
                .register_template_string(name, &template.template)
                .map_err(|e| NumstatError::Render(format!("template '{}': {}", name, e)))?;
        }

        debug!(version = %templates.version, templates = ?templates.list_templates(), "registered report templates");
        Ok(TemplateRenderer { handlebars })
    }

    /// Render a named template with data
    pub fn render(&self, template_name: &str, data: &Value) -> Result<String, NumstatError> {
        self.handlebars
            .render(template_name, data)
            .map_err(|e| NumstatError::Render(e.to_string()))
    }
}

/// Fixed-point number: `{{fixed value decimals}}`
struct FixedHelper;

impl HelperDef for FixedHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let value = h.param(0)
            .and_then(|v| v.value().as_f64())
            .unwrap_or(0.0);

        let decimals = h.param(1)
            .and_then(|v| v.value().as_u64())
            .unwrap_or(6) as usize;

        out.write(&format!("{:.*}", decimals, value))?;
        Ok(())
    }
}

/// String or `#VALUE!`
struct MarkerHelper;

impl HelperDef for MarkerHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        match h.param(0).map(|v| v.value()) {
            Some(Value::String(s)) => out.write(s)?,
            Some(v) if !v.is_null() => out.write(&v.to_string())?,
            _ => out.write(VALUE_MARKER)?,
        }
        Ok(())
    }
}
