//! Dashboard Controller
//!
//! Owns the food list and modal state. Every user action goes through here:
//! the controller performs the backend call, then applies the result to the
//! state cell. Failures are logged and never reach the UI.

use crate::api::FoodApi;
use crate::models::{Food, FoodId, FoodPatch, NewFood};
use crate::store::DashboardCell;

#[derive(Debug, Clone)]
pub struct Dashboard<A, C> {
    api: A,
    cell: C,
}

impl<A: FoodApi, C: DashboardCell> Dashboard<A, C> {
    pub fn new(api: A, cell: C) -> Self {
        Self { api, cell }
    }

    /// Fetch all foods and reset modal/selection state
    pub async fn load(&self) {
        match self.api.list_foods().await {
            Ok(foods) => {
                tracing::info!("loaded {} foods", foods.len());
                self.cell.mutate(|state| state.reset_with(foods));
            }
            Err(err) => tracing::error!("failed to load foods: {}", err),
        }
    }

    /// Create a food; the backend-assigned record is appended on success
    pub async fn add_food(&self, draft: NewFood) {
        let payload = NewFood {
            available: true,
            ..draft
        };
        match self.api.create_food(&payload).await {
            Ok(created) => {
                tracing::debug!("created food #{}", created.id);
                self.cell.mutate(|state| state.insert_food(created));
            }
            Err(err) => tracing::error!("failed to create food {:?}: {}", payload.name, err),
        }
    }

    /// Merge `patch` over the item selected for editing and save it
    pub async fn update_food(&self, patch: FoodPatch) {
        let Some(editing) = self.cell.inspect(|state| state.editing_food.clone()) else {
            tracing::warn!("update requested with no food selected");
            return;
        };

        let merged = editing.merged(&patch);
        match self.api.update_food(&merged).await {
            Ok(updated) => {
                let id = updated.id;
                let mut replaced = false;
                self.cell.mutate(|state| replaced = state.replace_food(updated));
                if !replaced {
                    tracing::warn!("updated food #{} is no longer listed", id);
                }
            }
            Err(err) => tracing::error!("failed to update food #{}: {}", merged.id, err),
        }
    }

    /// Delete a food. The entry is removed even if the request fails.
    pub async fn delete_food(&self, id: FoodId) {
        if let Err(err) = self.api.delete_food(id).await {
            tracing::error!("failed to delete food #{}: {}", id, err);
        }
        self.cell.mutate(|state| state.remove_food(id));
    }

    /// Flip availability in the list right away, then save the full record.
    ///
    /// A failed save keeps the flipped flag. With overlapping toggles the last
    /// response to arrive wins.
    pub async fn toggle_available(&self, id: FoodId) {
        let Some(toggled) = self
            .cell
            .inspect(|state| state.find(id).map(Food::with_toggled_availability))
        else {
            tracing::warn!("toggle requested for unknown food #{}", id);
            return;
        };

        self.cell
            .mutate(|state| state.set_available(id, toggled.available));
        match self.api.update_food(&toggled).await {
            Ok(updated) => {
                self.cell.mutate(|state| {
                    state.replace_food(updated);
                });
            }
            Err(err) => tracing::error!("failed to save availability of food #{}: {}", id, err),
        }
    }

    pub fn select_for_edit(&self, food: Food) {
        self.cell.mutate(|state| state.select_for_edit(food));
    }

    pub fn toggle_add_modal(&self) {
        self.cell
            .mutate(|state| state.add_modal_open = !state.add_modal_open);
    }

    pub fn toggle_edit_modal(&self) {
        self.cell
            .mutate(|state| state.edit_modal_open = !state.edit_modal_open);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiError, ApiResult};
    use crate::store::DashboardState;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    impl DashboardCell for Rc<RefCell<DashboardState>> {
        fn inspect<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
            f(&*self.borrow())
        }

        fn mutate(&self, f: impl FnOnce(&mut DashboardState)) {
            f(&mut *self.borrow_mut())
        }
    }

    /// In-memory backend that records every request
    #[derive(Default)]
    struct FakeBackend {
        foods: RefCell<Vec<Food>>,
        calls: RefCell<Vec<(String, String, Option<Value>)>>,
        next_id: Cell<FoodId>,
        failing: Cell<bool>,
        /// Dashboard state read while a PUT is in flight
        watched_state: RefCell<Option<Rc<RefCell<DashboardState>>>>,
        available_during_put: RefCell<Vec<Option<bool>>>,
    }

    impl FakeBackend {
        fn with_foods(foods: Vec<Food>) -> Rc<Self> {
            let next_id = foods.iter().map(|f| f.id).max().unwrap_or(0) + 1;
            let backend = Self::default();
            *backend.foods.borrow_mut() = foods;
            backend.next_id.set(next_id);
            Rc::new(backend)
        }

        fn record(&self, method: &str, path: String, body: Option<Value>) -> ApiResult<()> {
            self.calls.borrow_mut().push((method.to_string(), path, body));
            if self.failing.get() {
                return Err(ApiError::Rejected {
                    status: 500,
                    body: "boom".to_string(),
                });
            }
            Ok(())
        }

        fn calls(&self) -> Vec<(String, String, Option<Value>)> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl FoodApi for Rc<FakeBackend> {
        async fn list_foods(&self) -> ApiResult<Vec<Food>> {
            self.record("GET", "/foods".to_string(), None)?;
            Ok(self.foods.borrow().clone())
        }

        async fn create_food(&self, food: &NewFood) -> ApiResult<Food> {
            self.record("POST", "/foods".to_string(), serde_json::to_value(food).ok())?;
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            let created = Food {
                id,
                name: food.name.clone(),
                description: food.description.clone(),
                price: food.price,
                available: food.available,
                image: food.image.clone(),
            };
            self.foods.borrow_mut().push(created.clone());
            Ok(created)
        }

        async fn update_food(&self, food: &Food) -> ApiResult<Food> {
            if let Some(state) = self.watched_state.borrow().as_ref() {
                let shown = state.borrow().find(food.id).map(|f| f.available);
                self.available_during_put.borrow_mut().push(shown);
            }
            self.record("PUT", format!("/foods/{}", food.id), serde_json::to_value(food).ok())?;
            let mut foods = self.foods.borrow_mut();
            match foods.iter_mut().find(|f| f.id == food.id) {
                Some(existing) => {
                    *existing = food.clone();
                    Ok(food.clone())
                }
                None => Err(ApiError::NotFound(format!("/foods/{}", food.id))),
            }
        }

        async fn delete_food(&self, id: FoodId) -> ApiResult<()> {
            self.record("DELETE", format!("/foods/{}", id), None)?;
            self.foods.borrow_mut().retain(|f| f.id != id);
            Ok(())
        }
    }

    type TestDashboard = Dashboard<Rc<FakeBackend>, Rc<RefCell<DashboardState>>>;

    fn make_food(id: FoodId) -> Food {
        Food {
            id,
            name: format!("Food {}", id),
            description: format!("Description {}", id),
            price: 10.0 + id as f64,
            available: true,
            image: format!("http://img/{}.png", id),
        }
    }

    async fn setup(ids: &[FoodId]) -> (Rc<FakeBackend>, Rc<RefCell<DashboardState>>, TestDashboard) {
        let backend = FakeBackend::with_foods(ids.iter().copied().map(make_food).collect());
        let state = Rc::new(RefCell::new(DashboardState::default()));
        let dashboard = Dashboard::new(backend.clone(), state.clone());
        dashboard.load().await;
        backend.calls.borrow_mut().clear();
        (backend, state, dashboard)
    }

    fn listed_ids(state: &Rc<RefCell<DashboardState>>) -> Vec<FoodId> {
        state.borrow().foods.iter().map(|f| f.id).collect()
    }

    #[tokio::test]
    async fn test_load_keeps_backend_order() {
        let (_, state, _) = setup(&[3, 1, 2]).await;
        assert_eq!(listed_ids(&state), vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn test_load_resets_modal_state() {
        let (_, state, dashboard) = setup(&[1]).await;
        dashboard.toggle_add_modal();
        dashboard.select_for_edit(make_food(1));

        dashboard.load().await;

        let state = state.borrow();
        assert!(!state.add_modal_open);
        assert!(!state.edit_modal_open);
        assert!(state.editing_food.is_none());
    }

    #[tokio::test]
    async fn test_load_twice_is_idempotent() {
        let (_, state, dashboard) = setup(&[1, 2, 3]).await;
        let first = state.borrow().clone();
        dashboard.load().await;
        assert_eq!(*state.borrow(), first);
    }

    #[tokio::test]
    async fn test_load_failure_keeps_state() {
        let (backend, state, dashboard) = setup(&[1, 2]).await;
        backend.failing.set(true);
        dashboard.load().await;
        assert_eq!(listed_ids(&state), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_add_food_posts_available_and_appends() {
        let (backend, state, dashboard) = setup(&[1, 2]).await;

        dashboard
            .add_food(NewFood {
                name: "Pizza".to_string(),
                description: "d".to_string(),
                price: 19.9,
                available: false,
                image: "u".to_string(),
            })
            .await;

        let calls = backend.calls();
        assert_eq!(calls.len(), 1);
        let (method, path, body) = &calls[0];
        assert_eq!(method, "POST");
        assert_eq!(path, "/foods");
        assert_eq!(
            body.as_ref().unwrap(),
            &json!({"name": "Pizza", "description": "d", "price": 19.9, "available": true, "image": "u"})
        );

        assert_eq!(listed_ids(&state), vec![1, 2, 3]);
        let state = state.borrow();
        let created = state.find(3).unwrap();
        assert_eq!(created.name, "Pizza");
        assert!(created.available);
    }

    #[tokio::test]
    async fn test_add_food_failure_leaves_list() {
        let (backend, state, dashboard) = setup(&[1]).await;
        backend.failing.set(true);

        dashboard
            .add_food(NewFood {
                name: "Pizza".to_string(),
                description: String::new(),
                price: 1.0,
                available: true,
                image: String::new(),
            })
            .await;

        assert_eq!(backend.calls().len(), 1);
        assert_eq!(listed_ids(&state), vec![1]);
    }

    #[tokio::test]
    async fn test_toggle_sends_full_record_with_flipped_flag() {
        let (backend, state, dashboard) = setup(&[1, 3]).await;

        dashboard.toggle_available(3).await;

        let calls = backend.calls();
        assert_eq!(calls.len(), 1);
        let (method, path, body) = &calls[0];
        assert_eq!(method, "PUT");
        assert_eq!(path, "/foods/3");
        let mut expected = make_food(3);
        expected.available = false;
        assert_eq!(body.as_ref().unwrap(), &serde_json::to_value(&expected).unwrap());

        assert_eq!(state.borrow().find(3).map(|f| f.available), Some(false));
        assert_eq!(state.borrow().find(1).map(|f| f.available), Some(true));
    }

    #[tokio::test]
    async fn test_toggle_failure_keeps_flipped_flag() {
        let (backend, state, dashboard) = setup(&[3]).await;
        backend.failing.set(true);

        dashboard.toggle_available(3).await;

        assert_eq!(backend.calls().len(), 1);
        assert_eq!(state.borrow().find(3).map(|f| f.available), Some(false));
    }

    #[tokio::test]
    async fn test_toggle_flips_flag_before_response() {
        for failing in [false, true] {
            let (backend, state, dashboard) = setup(&[3]).await;
            *backend.watched_state.borrow_mut() = Some(state.clone());
            backend.failing.set(failing);

            dashboard.toggle_available(3).await;

            assert_eq!(*backend.available_during_put.borrow(), vec![Some(false)]);
        }
    }

    #[tokio::test]
    async fn test_toggle_unknown_id_sends_nothing() {
        let (backend, _, dashboard) = setup(&[1]).await;
        dashboard.toggle_available(9).await;
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_only_that_id() {
        let (backend, state, dashboard) = setup(&[4, 5, 6]).await;

        dashboard.delete_food(5).await;

        let calls = backend.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "DELETE");
        assert_eq!(calls[0].1, "/foods/5");
        assert_eq!(listed_ids(&state), vec![4, 6]);
        assert_eq!(state.borrow().find(4), Some(&make_food(4)));
    }

    #[tokio::test]
    async fn test_delete_failure_still_removes() {
        let (backend, state, dashboard) = setup(&[4, 5]).await;
        backend.failing.set(true);

        dashboard.delete_food(5).await;

        assert_eq!(listed_ids(&state), vec![4]);
    }

    #[tokio::test]
    async fn test_update_merges_patch_over_selection() {
        let (backend, state, dashboard) = setup(&[6, 7, 8]).await;
        dashboard.select_for_edit(make_food(7));

        dashboard
            .update_food(FoodPatch {
                price: Some(25.0),
                ..Default::default()
            })
            .await;

        let calls = backend.calls();
        assert_eq!(calls.len(), 1);
        let (method, path, body) = &calls[0];
        assert_eq!(method, "PUT");
        assert_eq!(path, "/foods/7");
        let mut expected = make_food(7);
        expected.price = 25.0;
        assert_eq!(body.as_ref().unwrap(), &serde_json::to_value(&expected).unwrap());

        let state = state.borrow();
        assert_eq!(state.find(7), Some(&expected));
        assert_eq!(state.find(6), Some(&make_food(6)));
        assert_eq!(state.find(8), Some(&make_food(8)));
        assert_eq!(state.foods.len(), 3);
    }

    #[tokio::test]
    async fn test_update_failure_leaves_list() {
        let (backend, state, dashboard) = setup(&[7]).await;
        dashboard.select_for_edit(make_food(7));
        backend.failing.set(true);

        dashboard
            .update_food(FoodPatch {
                name: Some("Changed".to_string()),
                ..Default::default()
            })
            .await;

        assert_eq!(state.borrow().find(7), Some(&make_food(7)));
    }

    #[tokio::test]
    async fn test_update_without_selection_sends_nothing() {
        let (backend, _, dashboard) = setup(&[7]).await;
        dashboard.update_food(FoodPatch::default()).await;
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_modal_toggles() {
        let (_, state, dashboard) = setup(&[1]).await;

        dashboard.toggle_add_modal();
        assert!(state.borrow().add_modal_open);
        dashboard.toggle_add_modal();
        assert!(!state.borrow().add_modal_open);

        dashboard.select_for_edit(make_food(1));
        assert!(state.borrow().edit_modal_open);
        assert_eq!(state.borrow().editing_food.as_ref().map(|f| f.id), Some(1));
        dashboard.toggle_edit_modal();
        assert!(!state.borrow().edit_modal_open);
    }
}
