use contracts::system::auth::RegisterRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::use_auth;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();

    let (registering, set_registering) = signal(false);
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    let submit = move || {
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if email_value.trim().is_empty() || password_value.is_empty() {
            set_error.set(Some("Email and password are required".to_string()));
            return;
        }
        if registering.get_untracked() && name.get_untracked().trim().is_empty() {
            set_error.set(Some("Name is required".to_string()));
            return;
        }
        set_busy.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = if registering.get_untracked() {
                let phone_value = phone.get_untracked();
                let request = RegisterRequest {
                    name: name.get_untracked().trim().to_string(),
                    email: email_value,
                    password: password_value,
                    phone: (!phone_value.trim().is_empty()).then(|| phone_value.trim().to_string()),
                };
                auth.register(request).await
            } else {
                auth.login(email_value, password_value).await
            };
            if let Err(e) = result {
                set_error.set(Some(e));
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="login">
            <form
                class="login__card"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }
            >
                <h1 class="login__title">"Bright Laptop Admin"</h1>
                <p class="login__subtitle">
                    {move || if registering.get() {
                        "Create an admin account"
                    } else {
                        "Sign in to manage the store"
                    }}
                </p>

                {move || error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"!"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                <Show when=move || registering.get()>
                    <label class="form__label">"Name"</label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </Show>

                <label class="form__label">"Email"</label>
                <input
                    type="email"
                    class="form__input"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />

                <Show when=move || registering.get()>
                    <label class="form__label">"Phone (optional)"</label>
                    <input
                        type="tel"
                        class="form__input"
                        prop:value=move || phone.get()
                        on:input=move |ev| set_phone.set(event_target_value(&ev))
                    />
                </Show>

                <label class="form__label">"Password"</label>
                <input
                    type="password"
                    class="form__input"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />

                <button type="submit" class="button button--primary login__submit" disabled=move || busy.get()>
                    {move || match (registering.get(), busy.get()) {
                        (_, true) => "Working...",
                        (true, false) => "Create account",
                        (false, false) => "Sign in",
                    }}
                </button>

                <button
                    type="button"
                    class="button button--link login__toggle"
                    on:click=move |_| {
                        set_error.set(None);
                        set_registering.update(|r| *r = !*r);
                    }
                >
                    {move || if registering.get() {
                        "Have an account? Sign in"
                    } else {
                        "New here? Create an account"
                    }}
                </button>
            </form>
        </div>
    }
}
