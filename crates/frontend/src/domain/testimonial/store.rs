use contracts::domain::testimonial::{Testimonial, TestimonialInput};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::toast::ToastService;

#[derive(Clone, Copy)]
pub struct TestimonialsStore {
    pub testimonials: RwSignal<Vec<Testimonial>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    toasts: ToastService,
}

impl TestimonialsStore {
    pub fn new(toasts: ToastService) -> Self {
        Self {
            testimonials: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            toasts,
        }
    }

    pub fn fetch(&self) {
        let store = *self;
        store.loading.set(true);
        store.error.set(None);
        spawn_local(async move {
            match api::fetch_testimonials().await {
                Ok(list) => store.testimonials.set(list),
                Err(e) => {
                    store.error.set(Some(e.message.clone()));
                    store.toasts.error(e.message);
                }
            }
            store.loading.set(false);
        });
    }

    pub fn create(&self, input: TestimonialInput, on_done: impl Fn(bool) + 'static) {
        let store = *self;
        spawn_local(async move {
            match api::create_testimonial(&input).await {
                Ok(created) => {
                    store.testimonials.update(|list| list.push(created));
                    store.toasts.success("Testimonial added");
                    on_done(true);
                }
                Err(e) => {
                    store.toasts.error(e.message);
                    on_done(false);
                }
            }
        });
    }

    pub fn remove(&self, id: String) {
        let store = *self;
        spawn_local(async move {
            match api::delete_testimonial(&id).await {
                Ok(()) => {
                    store.testimonials.update(|list| list.retain(|t| t.id != id));
                    store.toasts.success("Testimonial removed");
                }
                Err(e) => store.toasts.error(e.message),
            }
        });
    }
}
