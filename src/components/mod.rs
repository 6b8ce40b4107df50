//! UI Components
//!
//! Leptos components of the food dashboard.

mod food_card;
mod food_form;
mod header;
mod modal;
mod modal_add_food;
mod modal_edit_food;

pub use food_card::FoodCard;
pub use header::Header;
pub use modal::Modal;
pub use modal_add_food::ModalAddFood;
pub use modal_edit_food::ModalEditFood;
