//! Edit Food Modal
//!
//! Pre-filled from the selected food; submits the changed fields as a patch.

use leptos::prelude::*;

use crate::components::food_form::{FoodFormFields, FoodFormInputs};
use crate::components::Modal;
use crate::models::{Food, FoodForm, FoodPatch};

#[component]
pub fn ModalEditFood(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
    #[prop(into)] editing_food: Signal<Option<Food>>,
    #[prop(into)] on_update: Callback<FoodPatch>,
) -> impl IntoView {
    let fields = FoodFormFields::new();

    // Refill on every open so abandoned edits are discarded
    Effect::new(move |_| {
        if !is_open.get() {
            return;
        }
        if let Some(food) = editing_food.get() {
            fields.fill(FoodForm::from_food(&food));
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match fields.snapshot().to_patch() {
            Ok(patch) => on_update.run(patch),
            Err(err) => tracing::warn!("food edit not submitted: {}", err),
        }
        on_toggle.run(());
    };

    view! {
        <Modal is_open=is_open on_close=on_toggle>
            <form class="food-form" on:submit=submit>
                <h1>"Editar Prato"</h1>
                <FoodFormInputs fields=fields />
                <button type="submit" data-testid="edit-food-button">
                    <div class="text">"Editar Prato"</div>
                    <div class="icon">"✓"</div>
                </button>
            </form>
        </Modal>
    }
}
