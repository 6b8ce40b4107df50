//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Food, FoodId};

/// Dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct DashboardState {
    /// Foods in backend order; the only copy of each item's fields
    pub foods: Vec<Food>,
    /// Item targeted by the edit modal
    pub editing_food: Option<Food>,
    pub add_modal_open: bool,
    pub edit_modal_open: bool,
}

impl DashboardState {
    pub fn find(&self, id: FoodId) -> Option<&Food> {
        self.foods.iter().find(|food| food.id == id)
    }

    /// Replace the list and close everything.
    ///
    /// A repeated id keeps its first position and its last record.
    pub fn reset_with(&mut self, foods: Vec<Food>) {
        *self = DashboardState::default();
        for food in foods {
            self.insert_food(food);
        }
    }

    /// Append a created food, replacing any entry that already has its id
    pub fn insert_food(&mut self, food: Food) {
        match self.foods.iter_mut().find(|f| f.id == food.id) {
            Some(existing) => *existing = food,
            None => self.foods.push(food),
        }
    }

    /// Replace the entry with the same id; returns false when absent
    pub fn replace_food(&mut self, updated: Food) -> bool {
        match self.foods.iter_mut().find(|f| f.id == updated.id) {
            Some(existing) => {
                *existing = updated;
                true
            }
            None => false,
        }
    }

    pub fn remove_food(&mut self, id: FoodId) {
        self.foods.retain(|food| food.id != id);
    }

    pub fn set_available(&mut self, id: FoodId, available: bool) {
        if let Some(food) = self.foods.iter_mut().find(|f| f.id == id) {
            food.available = available;
        }
    }

    pub fn select_for_edit(&mut self, food: Food) {
        self.editing_food = Some(food);
        self.edit_modal_open = true;
    }
}

/// Where the dashboard controller keeps its state
///
/// The browser build uses the reactive store; tests use a plain `RefCell`.
pub trait DashboardCell {
    fn inspect<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R;
    fn mutate(&self, f: impl FnOnce(&mut DashboardState));
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

impl DashboardCell for DashboardStore {
    fn inspect<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        self.with_untracked(f)
    }

    fn mutate(&self, f: impl FnOnce(&mut DashboardState)) {
        self.update(f);
    }
}
