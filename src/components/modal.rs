//! Modal Shell Component
//!
//! Overlay container whose visibility mirrors the owner's `is_open` signal.
//! Overlay clicks and Escape ask the owner to close; the shell never hides
//! itself.

use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && is_open.get_untracked() {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    move || {
        is_open.get().then(|| {
            view! {
                <div class="modal-overlay" on:click=move |_| on_close.run(())>
                    <div
                        class="modal-content"
                        role="dialog"
                        on:click=|ev| ev.stop_propagation()
                    >
                        {children()}
                    </div>
                </div>
            }
        })
    }
}
