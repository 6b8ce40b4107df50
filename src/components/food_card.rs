//! Food Card Component
//!
//! One menu item with edit/delete buttons and the availability switch.

use leptos::prelude::*;

use crate::models::{Food, FoodId};

/// Availability label shown next to the switch
pub fn availability_label(available: bool) -> &'static str {
    if available {
        "Disponível"
    } else {
        "Indisponível"
    }
}

/// Price as the backend sent it, e.g. `19.9` or `25`
pub fn price_label(price: f64) -> String {
    price.to_string()
}

/// A single food card
///
/// Renders straight from the dashboard list; the parent re-creates the card
/// whenever any field of `food` changes.
#[component]
pub fn FoodCard(
    food: Food,
    #[prop(into)] on_edit: Callback<Food>,
    #[prop(into)] on_delete: Callback<FoodId>,
    #[prop(into)] on_toggle: Callback<FoodId>,
) -> impl IntoView {
    let id = food.id;
    let available = food.available;
    let card_class = if available { "food-card" } else { "food-card unavailable" };
    let switch_id = format!("available-switch-{}", id);
    let label_for = switch_id.clone();
    let price = price_label(food.price);
    let image = food.image.clone();
    let alt = food.name.clone();
    let name = food.name.clone();
    let description = food.description.clone();

    view! {
        <div class=card_class>
            <header>
                <img src=image alt=alt />
            </header>
            <section class="body">
                <h2>{name}</h2>
                <p>{description}</p>
                <p class="price">"R$ " <b>{price}</b></p>
            </section>
            <section class="footer">
                <div class="icon-container">
                    <button
                        type="button"
                        class="icon"
                        data-testid=format!("edit-food-{}", id)
                        on:click=move |_| on_edit.run(food.clone())
                    >
                        "✎"
                    </button>
                    <button
                        type="button"
                        class="icon"
                        data-testid=format!("remove-food-{}", id)
                        on:click=move |_| on_delete.run(id)
                    >
                        "🗑"
                    </button>
                </div>

                <div class="availability-container">
                    <p>{availability_label(available)}</p>
                    <label for=label_for class="switch">
                        <input
                            id=switch_id
                            type="checkbox"
                            prop:checked=available
                            data-testid=format!("change-status-food-{}", id)
                            on:change=move |_| on_toggle.run(id)
                        />
                        <span class="slider" />
                    </label>
                </div>
            </section>
        </div>
    }
}
