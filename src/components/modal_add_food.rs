//! Add Food Modal
//!
//! Collects a new dish and hands it to the owner's create callback.

use leptos::prelude::*;

use crate::components::food_form::{FoodFormFields, FoodFormInputs};
use crate::components::Modal;
use crate::models::NewFood;

#[component]
pub fn ModalAddFood(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
    #[prop(into)] on_add: Callback<NewFood>,
) -> impl IntoView {
    let fields = FoodFormFields::new();

    // Closes whether or not the payload was usable
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match fields.snapshot().to_new_food() {
            Ok(food) => {
                on_add.run(food);
                fields.clear();
            }
            Err(err) => tracing::warn!("new food not submitted: {}", err),
        }
        on_toggle.run(());
    };

    view! {
        <Modal is_open=is_open on_close=on_toggle>
            <form class="food-form" on:submit=submit>
                <h1>"Novo Prato"</h1>
                <FoodFormInputs fields=fields />
                <button type="submit" data-testid="add-food-button">
                    <p class="text">"Adicionar Prato"</p>
                    <div class="icon">"✓"</div>
                </button>
            </form>
        </Modal>
    }
}
