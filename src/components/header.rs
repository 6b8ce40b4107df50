//! Header Component
//!
//! Title bar with the "new dish" button.

use leptos::prelude::*;

#[component]
pub fn Header(#[prop(into)] on_open_modal: Callback<()>) -> impl IntoView {
    view! {
        <header class="app-header">
            <div class="app-header-content">
                <span class="app-title">"GoRestaurant"</span>
                <button
                    type="button"
                    class="new-food-btn"
                    on:click=move |_| on_open_modal.run(())
                >
                    <div class="text">"Novo Prato"</div>
                    <div class="icon">"+"</div>
                </button>
            </div>
        </header>
    }
}
