//! Pet Habitat Component
//!
//! Box the pet lives in. The pet can be dragged around; the drop point is
//! stored as percentages and persisted under `petPosition`.

use leptos::prelude::*;
use leptos_drag::{bind_global_drag, create_drag_signals, make_on_mousedown, Rect};

use crate::models::PetPosition;
use crate::storage::{self, BrowserStorage};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PetHabitat(
    #[prop(into)] avatar_class: Signal<String>,
    #[prop(into)] emoji: Signal<&'static str>,
) -> impl IntoView {
    let store = use_app_store();
    let initial = store.pet_position().get_untracked();
    let drag = create_drag_signals((initial.x, initial.y));
    let container = NodeRef::<leptos::html::Div>::new();
    let on_mousedown = make_on_mousedown(drag);

    let listeners = bind_global_drag(
        drag,
        move || {
            container
                .get_untracked()
                .map(|el| Rect::from(el.get_bounding_client_rect()))
        },
        move |(x, y)| {
            let position = PetPosition::new(x, y);
            let _ = store.pet_position().try_set(position);
            if let Err(e) = storage::save_position(&BrowserStorage, &position) {
                log::warn!("[STORE] saving pet position failed: {}", e);
            }
        },
    );
    if listeners.is_none() {
        log::warn!("[PET] drag listeners unavailable");
    }
    let listeners = StoredValue::new_local(listeners);
    on_cleanup(move || {
        let _ = listeners.try_update_value(|l| *l = None);
    });

    let avatar_class_full = move || {
        if drag.dragging_read.get() {
            format!("{} dragging", avatar_class.get())
        } else {
            avatar_class.get()
        }
    };
    let left = move || format!("{}%", drag.position_read.get().0);
    let top = move || format!("{}%", drag.position_read.get().1);

    view! {
        <div class="pet-habitat" node_ref=container>
            <div
                class=avatar_class_full
                style:left=left
                style:top=top
                on:mousedown=on_mousedown
                title="Drag me around"
            >
                {move || emoji.get()}
            </div>
        </div>
    }
}
