//! Centralized modal stack.
//!
//! Pages push a builder and get back a [`ModalHandle`] they can clone into
//! event handlers to close the modal. Closing is deferred to the next tick
//! so a modal removed during its own DOM event dispatch does not drop the
//! closure that is still running.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    builder: Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>,
    surface_class: Option<String>,
}

#[derive(Clone)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: RwSignal<u64>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn push<F>(&self, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push_with_class(None, builder)
    }

    /// Push with a class override for the modal surface (wide forms).
    pub fn push_with_class<F>(&self, surface_class: Option<String>, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        let handle = ModalHandle { id, svc: *self };
        let builder = Arc::new(builder) as Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;
        self.stack.update(|s| {
            s.push(ModalEntry {
                id,
                builder,
                surface_class,
            })
        });
        handle
    }

    /// Close the topmost modal, if any. Bound to the Escape key.
    pub fn close_top(&self) {
        if let Some(id) = self.stack.with_untracked(|s| s.last().map(|entry| entry.id)) {
            self.close_deferred(id);
        }
    }

    fn close_deferred(&self, id: u64) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            svc.stack.update(|s| s.retain(|entry| entry.id != id));
        });
    }

    pub fn clear(&self) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            svc.stack.update(|s| s.clear());
        });
    }
}

pub fn use_modals() -> ModalStackService {
    use_context::<ModalStackService>().expect("ModalStackService not found in context")
}

#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_modals();
    let entries = move || svc.stack.get();

    let escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            svc.close_top();
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <For
            each=entries
            key=|entry| entry.id
            children=move |entry: ModalEntry| {
                let handle = ModalHandle { id: entry.id, svc };
                let surface_class = entry
                    .surface_class
                    .clone()
                    .unwrap_or_else(|| "modal__surface".to_string());
                view! {
                    <div class="modal__backdrop">
                        <div class=surface_class>{(entry.builder)(handle)}</div>
                    </div>
                }
            }
        />
    }
}
