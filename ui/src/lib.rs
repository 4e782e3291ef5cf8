// Lumen UI - Tailwind-styled button control for Leptos
use leptos::*;
use leptos_meta::*;

pub mod components;
pub mod error;
pub mod pages;
pub mod types;
pub mod utils;

pub use components::{Button, ConfiguredButton};
pub use error::{PropParseError, PropResult};
pub use types::{ButtonColor, ButtonConfig, ButtonSize, ButtonType};

use pages::ShowcasePage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/lumen-ui.css"/>
        <Title text="Lumen UI - Buttons"/>
        <Meta name="viewport" content="width=device-width, initial-scale=1"/>

        <main class="min-h-screen bg-gray-50">
            <ShowcasePage/>
        </main>
    }
}

// Mount the showcase for client-side rendering
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(App);
}
