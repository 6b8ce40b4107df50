//! Food Form Inputs
//!
//! The four inputs shared by the add and edit modals.

use leptos::prelude::*;

use crate::models::FoodForm;

/// Signals backing the form inputs
#[derive(Clone, Copy)]
pub struct FoodFormFields {
    pub image: RwSignal<String>,
    pub name: RwSignal<String>,
    pub price: RwSignal<String>,
    pub description: RwSignal<String>,
}

impl FoodFormFields {
    pub fn new() -> Self {
        Self {
            image: RwSignal::new(String::new()),
            name: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
        }
    }

    pub fn fill(&self, form: FoodForm) {
        self.image.set(form.image);
        self.name.set(form.name);
        self.price.set(form.price);
        self.description.set(form.description);
    }

    pub fn clear(&self) {
        self.fill(FoodForm::default());
    }

    /// Current input text, read without tracking
    pub fn snapshot(&self) -> FoodForm {
        FoodForm {
            image: self.image.get_untracked(),
            name: self.name.get_untracked(),
            price: self.price.get_untracked(),
            description: self.description.get_untracked(),
        }
    }
}

#[component]
pub fn FoodFormInputs(fields: FoodFormFields) -> impl IntoView {
    view! {
        <FormInput name="image" placeholder="Cole o link aqui" value=fields.image />
        <FormInput name="name" placeholder="Ex: Moda Italiana" value=fields.name />
        <FormInput name="price" placeholder="Ex: 19.90" value=fields.price />
        <FormInput name="description" placeholder="Descrição" value=fields.description />
    }
}

#[component]
fn FormInput(
    name: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-input">
            <input
                type="text"
                name=name
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
