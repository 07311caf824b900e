// ABOUTME: Built-in handlebars helpers registered on every render registry
// ABOUTME: Covers timestamp formatting, environment lookup, and small string transforms

use chrono::Utc;
use handlebars::{Context, Handlebars, Helper, Output, RenderContext, RenderError};

const DEFAULT_TIME_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

// Pull a required string parameter out of a helper invocation.
fn param_str<'a>(h: &'a Helper, index: usize, helper: &str) -> Result<&'a str, RenderError> {
    h.param(index)
        .and_then(|p| p.value().as_str())
        .ok_or_else(|| {
            RenderError::new(format!(
                "{} expects a string as parameter {}",
                helper, index
            ))
        })
}

fn write_cased(
    h: &Helper,
    out: &mut dyn Output,
    helper: &str,
    to_upper: bool,
) -> Result<(), RenderError> {
    let input = param_str(h, 0, helper)?;
    let cased = if to_upper {
        input.to_uppercase()
    } else {
        input.to_lowercase()
    };
    out.write(&cased)?;
    Ok(())
}

/// `{{timestamp}}` or `{{timestamp "%H:%M"}}` - current UTC time
pub fn timestamp_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> Result<(), RenderError> {
    let pattern = h
        .param(0)
        .and_then(|p| p.value().as_str())
        .unwrap_or(DEFAULT_TIME_PATTERN);

    out.write(&Utc::now().format(pattern).to_string())?;
    Ok(())
}

/// `{{env "HOME"}}` - environment variable, with an optional second
/// parameter used when the variable is unset
pub fn env_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> Result<(), RenderError> {
    let name = param_str(h, 0, "env")?;
    let fallback = h.param(1).and_then(|p| p.value().as_str()).unwrap_or("");

    let value = std::env::var(name).unwrap_or_else(|_| fallback.to_string());
    out.write(&value)?;
    Ok(())
}

/// `{{upper text}}` - uppercase a string value
pub fn upper_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> Result<(), RenderError> {
    write_cased(h, out, "upper", true)
}

/// `{{lower text}}` - lowercase a string value
pub fn lower_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> Result<(), RenderError> {
    write_cased(h, out, "lower", false)
}

/// `{{default value "fallback"}}` - emit the fallback when the value is
/// absent or empty
pub fn default_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> Result<(), RenderError> {
    let fallback = param_str(h, 1, "default")?;
    let value = h.param(0).and_then(|p| p.value().as_str()).unwrap_or("");

    out.write(if value.is_empty() { fallback } else { value })?;
    Ok(())
}

/// `{{join ", " list}}` - concatenate string list elements with a separator
pub fn join_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> Result<(), RenderError> {
    let separator = h.param(0).and_then(|p| p.value().as_str()).unwrap_or(",");

    let items = h
        .param(1)
        .and_then(|p| p.value().as_array())
        .ok_or_else(|| RenderError::new("join expects a list as parameter 1"))?;

    for (i, item) in items.iter().enumerate() {
        let text = item
            .as_str()
            .ok_or_else(|| RenderError::new("join can only concatenate string elements"))?;
        if i > 0 {
            out.write(separator)?;
        }
        out.write(text)?;
    }
    Ok(())
}

/// Register all built-in helpers with a Handlebars instance
pub fn register_helpers(handlebars: &mut Handlebars) {
    handlebars.register_helper("timestamp", Box::new(timestamp_helper));
    handlebars.register_helper("env", Box::new(env_helper));
    handlebars.register_helper("upper", Box::new(upper_helper));
    handlebars.register_helper("lower", Box::new(lower_helper));
    handlebars.register_helper("default", Box::new(default_helper));
    handlebars.register_helper("join", Box::new(join_helper));
}
