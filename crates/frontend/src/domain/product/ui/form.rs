use contracts::domain::product::{
    BulkTier, Product, ProductInput, PRODUCT_CATEGORIES, PRODUCT_CONDITIONS, WARRANTY_OPTIONS,
};
use contracts::validation::{validate_product, ValidationReport};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlInputElement;

use crate::domain::product::api;
use crate::domain::product::store::ProductsStore;
use crate::domain::upload;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;

/// Spec-sheet rows shown as dedicated inputs. Anything else the API sends
/// in `specifications` is preserved untouched.
const SPEC_FIELDS: &[(&str, &str)] = &[
    ("ram", "RAM"),
    ("storage", "Storage"),
    ("processor", "Processor"),
    ("display", "Display"),
];

#[component]
#[allow(non_snake_case)]
pub fn ProductForm(
    store: ProductsStore,
    product: Option<Product>,
    on_close: Callback<()>,
) -> impl IntoView {
    let toasts = use_toasts();
    let editing_id = product.as_ref().map(|p| p.id.clone());
    let title = if editing_id.is_some() { "Edit product" } else { "Add product" };

    let form = RwSignal::new(match product {
        Some(p) => ProductInput::from(p),
        None => ProductInput {
            category: PRODUCT_CATEGORIES[0].to_string(),
            condition: "refurbished".to_string(),
            moq: 1,
            ..ProductInput::default()
        },
    });
    let report = RwSignal::new(ValidationReport::default());
    let saving = RwSignal::new(false);
    let uploading = RwSignal::new(false);

    // The built-in category list is only a fallback; the server may have
    // grown new categories and brands since this build shipped.
    let categories =
        RwSignal::new(PRODUCT_CATEGORIES.iter().map(|c| c.to_string()).collect::<Vec<_>>());
    let brands = RwSignal::new(Vec::<String>::new());
    spawn_local(async move {
        if let Ok(list) = api::fetch_categories().await {
            if !list.is_empty() {
                categories.set(list);
            }
        }
        if let Ok(list) = api::fetch_brands().await {
            brands.set(list);
        }
    });

    // When editing, refresh the form from the server copy in case the cached
    // row in the table is stale.
    if let Some(id) = editing_id.clone() {
        spawn_local(async move {
            if let Ok(Some(fresh)) = api::fetch_product(&id).await {
                form.set(ProductInput::from(fresh));
            }
        });
    }

    let field_class = move |field: &'static str| {
        if report.with(|r| r.has_error_for(field)) {
            "form__input form__input--invalid"
        } else {
            "form__input"
        }
    };

    let on_upload = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target::<HtmlInputElement>(&ev);
        let Some(files) = input.files() else { return };
        if files.length() == 0 {
            return;
        }
        uploading.set(true);
        spawn_local(async move {
            match upload::api::upload_images(&files).await {
                Ok(urls) => {
                    let count = urls.len();
                    form.update(|f| f.images.extend(urls));
                    toasts.success(format!("Uploaded {} image(s)", count));
                }
                Err(e) => toasts.error(e.message),
            }
            uploading.set(false);
            input.set_value("");
        });
    };

    let on_save = move |_| {
        let input = form.get_untracked();
        let checked = validate_product(&input);
        if !checked.is_valid() {
            report.set(checked);
            return;
        }
        report.set(ValidationReport::default());
        saving.set(true);
        let id = editing_id.clone();
        store.save(id, input, move |ok| {
            saving.set(false);
            if ok {
                on_close.run(());
            }
        });
    };

    view! {
        <div class="form">
            <div class="form__header">
                <h2 class="form__title">{title}</h2>
                <button class="button button--ghost" on:click=move |_| on_close.run(())>
                    {icon("close")}
                </button>
            </div>

            <Show when=move || report.with(|r| !r.is_valid())>
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <ul class="warning-box__list">
                        {move || report.with(|r| r.errors.iter().map(|e| {
                            view! { <li>{e.message.clone()}</li> }
                        }).collect_view())}
                    </ul>
                </div>
            </Show>

            <div class="form__section">
                <h3 class="form__section-title">"Basics"</h3>
                <div class="form__grid">
                    <label class="form__field">
                        <span class="form__label">"Name"</span>
                        <input
                            class=move || field_class("name")
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        <span class="form__label">"Brand"</span>
                        <input
                            class="form__input"
                            list="product-brands"
                            prop:value=move || form.with(|f| f.brand.clone())
                            on:input=move |ev| form.update(|f| f.brand = event_target_value(&ev))
                        />
                        <datalist id="product-brands">
                            {move || brands.get().into_iter().map(|b| view! {
                                <option value=b></option>
                            }).collect_view()}
                        </datalist>
                    </label>
                    <label class="form__field">
                        <span class="form__label">"Category"</span>
                        <select
                            class=move || field_class("category")
                            prop:value=move || form.with(|f| f.category.clone())
                            on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                        >
                            {move || categories.get().into_iter().map(|c| view! {
                                <option value=c.clone()>{c.clone()}</option>
                            }).collect_view()}
                        </select>
                    </label>
                    <label class="form__field">
                        <span class="form__label">"Condition"</span>
                        <select
                            class="form__input"
                            prop:value=move || form.with(|f| f.condition.clone())
                            on:change=move |ev| form.update(|f| f.condition = event_target_value(&ev))
                        >
                            {PRODUCT_CONDITIONS.iter().map(|c| view! {
                                <option value=*c>{*c}</option>
                            }).collect_view()}
                        </select>
                    </label>
                    <label class="form__field form__field--full">
                        <span class="form__label">"Description"</span>
                        <textarea
                            class="form__input"
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        ></textarea>
                    </label>
                </div>
            </div>

            <div class="form__section">
                <h3 class="form__section-title">"Pricing"</h3>
                <div class="form__grid">
                    <label class="form__field">
                        <span class="form__label">"Base price (₹)"</span>
                        <input
                            type="number"
                            class=move || field_class("basePrice")
                            prop:value=move || form.with(|f| f.base_price.to_string())
                            on:input=move |ev| form.update(|f| {
                                f.base_price = event_target_value(&ev).parse().unwrap_or(0.0)
                            })
                        />
                    </label>
                    <label class="form__field">
                        <span class="form__label">"MRP (₹)"</span>
                        <input
                            type="number"
                            class="form__input"
                            prop:value=move || form.with(|f| f.mrp.to_string())
                            on:input=move |ev| form.update(|f| {
                                f.mrp = event_target_value(&ev).parse().unwrap_or(0.0)
                            })
                        />
                    </label>
                    <label class="form__field">
                        <span class="form__label">"Discount %"</span>
                        <input
                            type="number"
                            class=move || field_class("discountPercentage")
                            prop:value=move || form.with(|f| {
                                f.discount_percentage.map(|p| p.to_string()).unwrap_or_default()
                            })
                            on:input=move |ev| form.update(|f| {
                                f.discount_percentage = event_target_value(&ev).parse().ok()
                            })
                        />
                    </label>
                    <label class="form__field">
                        <span class="form__label">"B2B price (₹)"</span>
                        <input
                            type="number"
                            class="form__input"
                            prop:value=move || form.with(|f| {
                                f.b2b_price.map(|p| p.to_string()).unwrap_or_default()
                            })
                            on:input=move |ev| form.update(|f| {
                                f.b2b_price = event_target_value(&ev).parse().ok()
                            })
                        />
                    </label>
                    <label class="form__field form__field--inline">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.gst_included)
                            on:change=move |ev| form.update(|f| f.gst_included = event_target_checked(&ev))
                        />
                        <span class="form__label">"GST included"</span>
                    </label>
                    <label class="form__field">
                        <span class="form__label">"GST %"</span>
                        <input
                            type="number"
                            class=move || field_class("gstPercentage")
                            prop:value=move || form.with(|f| {
                                f.gst_percentage.map(|p| p.to_string()).unwrap_or_default()
                            })
                            on:input=move |ev| form.update(|f| {
                                f.gst_percentage = event_target_value(&ev).parse().ok()
                            })
                        />
                    </label>
                    <label class="form__field">
                        <span class="form__label">"MOQ"</span>
                        <input
                            type="number"
                            class="form__input"
                            prop:value=move || form.with(|f| f.moq.to_string())
                            on:input=move |ev| form.update(|f| {
                                f.moq = event_target_value(&ev).parse().unwrap_or(1)
                            })
                        />
                    </label>
                    <label class="form__field">
                        <span class="form__label">"Stock"</span>
                        <input
                            type="number"
                            class="form__input"
                            prop:value=move || form.with(|f| f.stock.to_string())
                            on:input=move |ev| form.update(|f| {
                                f.stock = event_target_value(&ev).parse().unwrap_or(0)
                            })
                        />
                    </label>
                </div>

                <div class="form__subsection">
                    <span class="form__label">"Bulk pricing tiers"</span>
                    {move || {
                        let count = form.with(|f| f.bulk_pricing.len());
                        (0..count).map(|i| view! {
                            <div class="form__tier-row">
                                <input
                                    type="number"
                                    class="form__input form__input--narrow"
                                    placeholder="Min qty"
                                    prop:value=move || form.with(|f| {
                                        f.bulk_pricing
                                            .get(i)
                                            .map(|t| t.min_quantity.to_string())
                                            .unwrap_or_default()
                                    })
                                    on:input=move |ev| form.update(|f| {
                                        if let Some(tier) = f.bulk_pricing.get_mut(i) {
                                            tier.min_quantity =
                                                event_target_value(&ev).parse().unwrap_or(0);
                                        }
                                    })
                                />
                                <input
                                    type="number"
                                    class="form__input form__input--narrow"
                                    placeholder="Price (₹)"
                                    prop:value=move || form.with(|f| {
                                        f.bulk_pricing
                                            .get(i)
                                            .map(|t| t.price.to_string())
                                            .unwrap_or_default()
                                    })
                                    on:input=move |ev| form.update(|f| {
                                        if let Some(tier) = f.bulk_pricing.get_mut(i) {
                                            tier.price =
                                                event_target_value(&ev).parse().unwrap_or(0.0);
                                        }
                                    })
                                />
                                <button
                                    class="button button--ghost"
                                    on:click=move |_| form.update(|f| {
                                        if i < f.bulk_pricing.len() {
                                            f.bulk_pricing.remove(i);
                                        }
                                    })
                                >
                                    "×"
                                </button>
                            </div>
                        }).collect_view()
                    }}
                    <button
                        class="button button--secondary"
                        on:click=move |_| form.update(|f| {
                            let next_min = f.bulk_pricing.last().map(|t| t.min_quantity * 2).unwrap_or(10);
                            f.bulk_pricing.push(BulkTier { min_quantity: next_min, price: 0.0 });
                        })
                    >
                        "Add tier"
                    </button>
                </div>
            </div>

            <div class="form__section">
                <h3 class="form__section-title">"Specifications"</h3>
                <div class="form__grid">
                    {SPEC_FIELDS.iter().map(|(key, label)| view! {
                        <label class="form__field">
                            <span class="form__label">{*label}</span>
                            <input
                                class="form__input"
                                prop:value=move || form.with(|f| {
                                    f.specifications.get(*key).cloned().unwrap_or_default()
                                })
                                on:input=move |ev| form.update(|f| {
                                    let value = event_target_value(&ev);
                                    if value.is_empty() {
                                        f.specifications.remove(*key);
                                    } else {
                                        f.specifications.insert(key.to_string(), value);
                                    }
                                })
                            />
                        </label>
                    }).collect_view()}
                </div>
            </div>

            <div class="form__section">
                <h3 class="form__section-title">"Images"</h3>
                <label class="button button--secondary">
                    {icon("upload")}
                    {move || if uploading.get() { "Uploading..." } else { "Upload images" }}
                    <input
                        type="file"
                        accept="image/*"
                        multiple
                        class="form__file-input"
                        on:change=on_upload
                    />
                </label>
                <div class="form__thumbs">
                    {move || form.with(|f| f.images.clone()).into_iter().enumerate().map(|(i, url)| {
                        view! {
                            <div class="form__thumb">
                                <img class="form__thumb-image" src=url />
                                <button
                                    class="form__thumb-remove"
                                    on:click=move |_| form.update(|f| { f.images.remove(i); })
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>

            <div class="form__section">
                <h3 class="form__section-title">"Warranty"</h3>
                <select
                    class="form__input"
                    prop:value=move || form.with(|f| f.warranty.clone().unwrap_or_default())
                    on:change=move |ev| form.update(|f| {
                        let value = event_target_value(&ev);
                        f.warranty = if value.is_empty() { None } else { Some(value) };
                    })
                >
                    <option value="">"No warranty"</option>
                    {WARRANTY_OPTIONS.iter().map(|w| view! {
                        <option value=*w>{*w}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="form__actions">
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button
                    class="button button--primary"
                    disabled=move || saving.get() || uploading.get()
                    on:click=on_save
                >
                    {move || if saving.get() { "Saving..." } else { "Save product" }}
                </button>
            </div>
        </div>
    }
}
