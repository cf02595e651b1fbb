use contracts::domain::invoice::format_inr;
use contracts::domain::product::Product;
use leptos::prelude::*;

use super::form::ProductForm;
use crate::domain::product::store::ProductsStore;
use crate::layout::global_context::use_app_context;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::modal_stack::use_modals;
use crate::shared::toast::use_toasts;

#[derive(Clone, Debug)]
struct ProductRow {
    id: String,
    brand: String,
    model: String,
    ram: String,
    storage: String,
    condition: String,
    stock: u32,
    price: String,
    rating: f64,
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.clone(),
            brand: p.brand.clone(),
            model: p.name.clone(),
            ram: p.spec("ram").to_string(),
            storage: p.spec("storage").to_string(),
            condition: p.condition.clone(),
            stock: p.stock,
            price: format!("₹{}", format_inr(p.base_price)),
            rating: p.rating,
        }
    }
}

/// Whether this row is the one armed for delete confirmation.
fn awaiting_confirm(pending: &Option<String>, id: &str) -> bool {
    pending.as_deref() == Some(id)
}

#[component]
#[allow(non_snake_case)]
pub fn InventoryPage() -> impl IntoView {
    let ctx = use_app_context();
    let toasts = use_toasts();
    let modals = use_modals();
    let store = ProductsStore::new(toasts);
    // Delete asks for a second click instead of a native confirm dialog.
    let (pending_delete, set_pending_delete) = signal::<Option<String>>(None);

    // Inventory search is server-side; the header search box drives it.
    Effect::new(move |_| {
        store.search(ctx.search_term.get());
    });

    let rows = move || {
        store
            .products
            .get()
            .iter()
            .map(ProductRow::from)
            .collect::<Vec<_>>()
    };

    let open_form = move |id: Option<String>| {
        let product = id.as_ref().and_then(|id| {
            store
                .products
                .get_untracked()
                .iter()
                .find(|p| &p.id == id)
                .cloned()
        });
        modals.push_with_class(Some("modal__surface modal__surface--wide".to_string()), move |handle| {
            let close = Callback::new(move |_: ()| handle.close());
            view! {
                <ProductForm store=store product=product.clone() on_close=close />
            }
            .into_any()
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Inventory" subtitle="Refurbished and new stock">
                <button class="button button--primary" on:click=move |_| open_form(None)>
                    {icon("plus")}
                    "Add product"
                </button>
                <button class="button button--secondary" on:click=move |_| store.fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            {move || store.error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <Show when=move || store.loading.get()>
                <div class="loading-banner">"Loading products..."</div>
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Brand"</th>
                            <th class="table__header-cell">"Model"</th>
                            <th class="table__header-cell">"RAM"</th>
                            <th class="table__header-cell">"Storage"</th>
                            <th class="table__header-cell">"Condition"</th>
                            <th class="table__header-cell">"Stock"</th>
                            <th class="table__header-cell">"Price"</th>
                            <th class="table__header-cell">"Rating"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows().into_iter().map(|row| {
                            let id_for_edit = row.id.clone();
                            let id_for_delete = row.id.clone();
                            let id_for_state = row.id.clone();
                            // Memo is Copy, so both the click handler and the
                            // label closure can capture it.
                            let delete_pending = Memo::new(move |_| {
                                awaiting_confirm(&pending_delete.get(), &id_for_state)
                            });
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.brand}</td>
                                    <td class="table__cell">{row.model}</td>
                                    <td class="table__cell">{row.ram}</td>
                                    <td class="table__cell">{row.storage}</td>
                                    <td class="table__cell">{row.condition}</td>
                                    <td class="table__cell">{row.stock}</td>
                                    <td class="table__cell">{row.price}</td>
                                    <td class="table__cell">{format!("{:.1}", row.rating)}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--ghost"
                                            on:click=move |_| open_form(Some(id_for_edit.clone()))
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="button button--danger"
                                            on:click=move |_| {
                                                if delete_pending.get_untracked() {
                                                    store.remove(id_for_delete.clone());
                                                    set_pending_delete.set(None);
                                                } else {
                                                    set_pending_delete.set(Some(id_for_delete.clone()));
                                                }
                                            }
                                        >
                                            {icon("delete")}
                                            {move || if delete_pending.get() { "Confirm?" } else { "Delete" }}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_armed_row_awaits_confirmation() {
        let pending = Some("p1".to_string());
        assert!(awaiting_confirm(&pending, "p1"));
        assert!(!awaiting_confirm(&pending, "p2"));
        assert!(!awaiting_confirm(&None, "p1"));
    }
}
