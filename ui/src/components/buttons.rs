// Button components
use leptos::ev::MouseEvent;
use leptos::html;
use leptos::*;

use crate::types::{button_class_names, ButtonColor, ButtonConfig, ButtonSize, ButtonType};

/// Everything needed to draw one `<button>`, shared by [`Button`] and
/// [`ConfiguredButton`] so both produce identical markup.
struct ButtonParts {
    color: ButtonColor,
    size: ButtonSize,
    disabled: MaybeSignal<bool>,
    button_type: ButtonType,
    class: Option<String>,
    node_ref: Option<NodeRef<html::Button>>,
    on_click: Option<Callback<MouseEvent>>,
    attributes: Vec<(&'static str, Attribute)>,
    children: Children,
}

fn render_button(parts: ButtonParts) -> impl IntoView {
    let ButtonParts {
        color,
        size,
        disabled,
        button_type,
        class,
        node_ref,
        on_click,
        attributes,
        children,
    } = parts;

    tracing::trace!(%color, %size, %button_type, "composing button");

    let class_names = button_class_names(color, size, class.as_deref());
    let click_disabled = disabled.clone();

    let button = view! {
        <button
            type=button_type.as_str()
            class=class_names
            disabled=move || disabled.get()
            on:click=move |ev: MouseEvent| {
                // synthetic events still reach the listener on a disabled button
                if click_disabled.get_untracked() {
                    tracing::debug!("suppressed click on disabled button");
                    ev.prevent_default();
                    return;
                }
                if let Some(handler) = on_click.as_ref() {
                    handler.call(ev);
                }
            }
            {..attributes}
        >
            {children()}
        </button>
    };

    match node_ref {
        Some(node_ref) => button.node_ref(node_ref),
        None => button,
    }
}

/// Tailwind-styled `<button>`.
///
/// The class set is the base classes plus the color and size tables, with
/// `class` appended last. Any `attr:*` passed by the caller (`attr:aria-label`,
/// `attr:aria-pressed`, `attr:data-*`, ...) lands on the element unchanged.
///
/// ```rust,ignore
/// view! {
///     <Button color=ButtonColor::Success size=ButtonSize::Large attr:aria-label="Save">
///         "Save"
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Background, hover and focus-ring color.
    #[prop(optional)]
    color: ButtonColor,
    /// Padding and text size.
    #[prop(optional)]
    size: ButtonSize,
    /// Renders the `disabled` attribute and refuses clicks while true.
    #[prop(into, default = false.into())]
    disabled: MaybeSignal<bool>,
    /// Rendered `type` attribute.
    #[prop(optional)]
    button_type: ButtonType,
    /// Extra classes, appended after the defaults.
    #[prop(into, optional)]
    class: Option<String>,
    /// Bound to the rendered `HTMLButtonElement`.
    #[prop(optional)]
    node_ref: Option<NodeRef<html::Button>>,
    #[prop(into, optional)]
    on_click: Option<Callback<MouseEvent>>,
    #[prop(attrs)]
    attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    render_button(ButtonParts {
        color,
        size,
        disabled,
        button_type,
        class,
        node_ref,
        on_click,
        attributes,
        children,
    })
}

/// [`Button`] driven by a [`ButtonConfig`] record.
#[component]
pub fn ConfiguredButton(
    config: ButtonConfig,
    #[prop(optional)]
    node_ref: Option<NodeRef<html::Button>>,
    #[prop(into, optional)]
    on_click: Option<Callback<MouseEvent>>,
    #[prop(attrs)]
    attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let ButtonConfig {
        color,
        size,
        disabled,
        button_type,
        class,
    } = config;

    render_button(ButtonParts {
        color,
        size,
        disabled: disabled.into(),
        button_type,
        class,
        node_ref,
        on_click,
        attributes,
        children,
    })
}
