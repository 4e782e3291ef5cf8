use leptos::IntoView;
use lumen_ui::utils::has_classes;
use std::sync::Once;

static TRACING: Once = Once::new();

pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "lumen_ui=trace".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Server-rendered markup plus every `<button>` found in it.
pub struct RenderedPage {
    pub html: String,
    pub buttons: Vec<ButtonTag>,
}

impl RenderedPage {
    pub fn render<F, N>(view: F) -> Self
    where
        F: FnOnce() -> N + 'static,
        N: IntoView,
    {
        init_tracing();

        let html = leptos::ssr::render_to_string(view).to_string();
        let buttons = parse_button_tags(&html);

        Self { html, buttons }
    }

    /// The single button on the page.
    pub fn button(&self) -> &ButtonTag {
        assert_eq!(
            self.buttons.len(),
            1,
            "expected exactly one <button> in {}",
            self.html
        );
        &self.buttons[0]
    }
}

#[derive(Debug, Clone)]
pub struct ButtonTag {
    attrs: Vec<(String, Option<String>)>,
}

impl ButtonTag {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_deref().unwrap_or(""))
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(key, _)| key == name)
    }

    pub fn class(&self) -> &str {
        self.attr("class").unwrap_or("")
    }

    pub fn has_class(&self, wanted: &str) -> bool {
        has_classes(self.class(), wanted)
    }
}

fn parse_button_tags(html: &str) -> Vec<ButtonTag> {
    let mut tags = Vec::new();
    let mut rest = html;

    while let Some(start) = rest.find("<button") {
        let after = &rest[start + "<button".len()..];
        if !after.starts_with(|c: char| c.is_whitespace() || c == '>') {
            rest = after;
            continue;
        }
        let end = after.find('>').expect("unterminated <button> tag");
        tags.push(ButtonTag {
            attrs: parse_attributes(&after[..end]),
        });
        rest = &after[end..];
    }

    tags
}

fn parse_attributes(source: &str) -> Vec<(String, Option<String>)> {
    let mut attrs = Vec::new();
    let mut chars = source.trim_end_matches('/').chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let mut name = String::new();
        while let Some(c) = chars.next_if(|c| !c.is_whitespace() && *c != '=') {
            name.push(c);
        }
        if name.is_empty() {
            break;
        }

        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        if chars.next_if_eq(&'=').is_none() {
            attrs.push((name, None));
            continue;
        }
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let mut value = String::new();
        match chars.next_if(|c| *c == '"' || *c == '\'') {
            Some(quote) => {
                for c in chars.by_ref() {
                    if c == quote {
                        break;
                    }
                    value.push(c);
                }
            }
            None => {
                while let Some(c) = chars.next_if(|c| !c.is_whitespace()) {
                    value.push(c);
                }
            }
        }
        attrs.push((name, Some(unescape(&value))));
    }

    attrs
}

fn unescape(value: &str) -> String {
    value
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[macro_export]
macro_rules! test_with_render {
    ($test_name:ident, $view:expr, $check:expr) => {
        #[test]
        fn $test_name() {
            let page = crate::common::RenderedPage::render($view);

            $check(&page);
        }
    };
}
