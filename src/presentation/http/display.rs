// src/presentation/http/display.rs
//! HTML fragments for the computed admin list columns.
//!
//! Interpolated values go through the `html_attr` filter, which escapes
//! `& < > " '` and leaves `/` alone so image URLs stay intact.
use minijinja::{Environment, Value, context};
use std::sync::OnceLock;

const COLORED_NAME: &str = "colored_name.html";
const IMAGE_PREVIEW: &str = "image_preview.html";

static DISPLAY_ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn environment() -> &'static Environment<'static> {
    DISPLAY_ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.add_filter("html_attr", html_attr);
        let templates = [
            (
                COLORED_NAME,
                r#"<span style="color: {{ color|html_attr }};">{{ name|html_attr }}</span>"#,
            ),
            (
                IMAGE_PREVIEW,
                concat!(
                    "{% if url %}",
                    r#"<img src="{{ url|html_attr }}" style="width: 50px; height: 50px; object-fit: cover; border-radius: 4px;" />"#,
                    "{% else %}",
                    r#"<span style="color: #888888;">No Image</span>"#,
                    "{% endif %}"
                ),
            ),
        ];
        for (name, source) in templates {
            if let Err(err) = env.add_template(name, source) {
                tracing::error!(template = name, error = %err, "failed to compile display template");
            }
        }
        env
    })
}

fn html_attr(value: &str) -> Value {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    Value::from_safe_string(escaped)
}

fn render(name: &str, ctx: minijinja::Value) -> Result<String, minijinja::Error> {
    environment().get_template(name)?.render(ctx)
}

/// Category name wrapped in a span tinted with its color code.
pub fn colored_name(name: &str, color_code: &str) -> Result<String, minijinja::Error> {
    render(COLORED_NAME, context! { name => name, color => color_code })
}

/// 50x50 thumbnail, or a grey "No Image" placeholder when there is no URL.
pub fn image_preview(url: Option<&str>) -> Result<String, minijinja::Error> {
    let url = url.filter(|value| !value.trim().is_empty());
    render(IMAGE_PREVIEW, context! { url => url })
}
