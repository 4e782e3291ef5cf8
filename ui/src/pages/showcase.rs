// Gallery of every button variant
use leptos::*;

use crate::components::buttons::{Button, ConfiguredButton};
use crate::types::{ButtonColor, ButtonConfig, ButtonSize, ButtonType};

#[component]
pub fn ShowcasePage() -> impl IntoView {
    let (pressed, set_pressed) = create_signal(false);
    let (clicks, set_clicks) = create_signal(0u32);

    let preset = ButtonConfig {
        color: ButtonColor::Success,
        size: ButtonSize::Large,
        button_type: ButtonType::Submit,
        class: Some("w-full".to_string()),
        ..Default::default()
    };

    view! {
        <div class="space-y-8 p-8">
            <section id="colors" class="flex flex-wrap gap-3">
                {ButtonColor::ALL
                    .into_iter()
                    .map(|color| view! {
                        <Button color=color on_click=move |_| set_clicks.update(|n| *n += 1)>
                            {color.as_str()}
                        </Button>
                    })
                    .collect_view()}
            </section>

            <section id="sizes" class="flex flex-wrap items-center gap-3">
                {ButtonSize::ALL
                    .into_iter()
                    .map(|size| view! { <Button size=size>{size.as_str()}</Button> })
                    .collect_view()}
            </section>

            <section id="types" class="flex flex-wrap gap-3">
                {ButtonType::ALL
                    .into_iter()
                    .map(|button_type| view! {
                        <Button button_type=button_type>{button_type.as_str()}</Button>
                    })
                    .collect_view()}
            </section>

            <section id="states" class="flex flex-wrap gap-3">
                <Button disabled=true>"Disabled"</Button>
                <Button
                    color=ButtonColor::Info
                    attr:aria-label="Toggle bold"
                    attr:aria-pressed=move || pressed.get().to_string()
                    on_click=move |_| set_pressed.update(|p| *p = !*p)
                >
                    "Bold"
                </Button>
                <ConfiguredButton config=preset>"Save"</ConfiguredButton>
            </section>

            <p class="text-sm text-gray-600">
                "Clicks: " {move || clicks.get()}
            </p>
        </div>
    }
}
