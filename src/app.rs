//! Food Dashboard App
//!
//! Root component: owns the store and the controller, wires callbacks
//! between the header, the modals and the food list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{HttpClient, HttpFoodApi};
use crate::components::{FoodCard, Header, ModalAddFood, ModalEditFood};
use crate::config::AppConfig;
use crate::dashboard::Dashboard;
use crate::models::{Food, FoodId, FoodPatch, NewFood};
use crate::store::{DashboardState, DashboardStateStoreFields, DashboardStore};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = DashboardStore::new(DashboardState::default());
    let api = HttpFoodApi::new(HttpClient::new(config.api_base_url));
    let dashboard = Dashboard::new(api, store);

    // Load foods on mount
    {
        let dashboard = dashboard.clone();
        spawn_local(async move { dashboard.load().await });
    }

    let toggle_modal = {
        let dashboard = dashboard.clone();
        Callback::new(move |_: ()| dashboard.toggle_add_modal())
    };
    let toggle_edit_modal = {
        let dashboard = dashboard.clone();
        Callback::new(move |_: ()| dashboard.toggle_edit_modal())
    };
    let edit_food = {
        let dashboard = dashboard.clone();
        Callback::new(move |food: Food| dashboard.select_for_edit(food))
    };
    let add_food = {
        let dashboard = dashboard.clone();
        Callback::new(move |food: NewFood| {
            let dashboard = dashboard.clone();
            spawn_local(async move { dashboard.add_food(food).await });
        })
    };
    let update_food = {
        let dashboard = dashboard.clone();
        Callback::new(move |patch: FoodPatch| {
            let dashboard = dashboard.clone();
            spawn_local(async move { dashboard.update_food(patch).await });
        })
    };
    let delete_food = {
        let dashboard = dashboard.clone();
        Callback::new(move |id: FoodId| {
            let dashboard = dashboard.clone();
            spawn_local(async move { dashboard.delete_food(id).await });
        })
    };
    let toggle_available = Callback::new(move |id: FoodId| {
        let dashboard = dashboard.clone();
        spawn_local(async move { dashboard.toggle_available(id).await });
    });

    let add_modal_open = Signal::derive(move || store.add_modal_open().get());
    let edit_modal_open = Signal::derive(move || store.edit_modal_open().get());
    let editing_food = Signal::derive(move || store.editing_food().get());

    view! {
        <Header on_open_modal=toggle_modal />
        <ModalAddFood
            is_open=add_modal_open
            on_toggle=toggle_modal
            on_add=add_food
        />
        <ModalEditFood
            is_open=edit_modal_open
            on_toggle=toggle_edit_modal
            editing_food=editing_food
            on_update=update_food
        />

        <div class="foods-container" data-testid="foods-list">
            <For
                each=move || store.foods().get()
                key=|food| {
                    // Every displayed field, so edits and toggles re-render the card
                    (
                        food.id,
                        food.name.clone(),
                        food.description.clone(),
                        food.price.to_bits(),
                        food.available,
                        food.image.clone(),
                    )
                }
                children=move |food| {
                    view! {
                        <FoodCard
                            food=food
                            on_edit=edit_food
                            on_delete=delete_food
                            on_toggle=toggle_available
                        />
                    }
                }
            />
        </div>
    }
}
