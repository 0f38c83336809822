//! Login Page

use leptos::prelude::*;

/// Login form shell. Default submission is suppressed and no call is made;
/// authentication lives in an external backend.
#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
    };

    view! {
        <div class="login">
            <h1>"Iniciar sesión"</h1>
            <form on:submit=submit>
                <div class="field">
                    <label>"Correo electrónico"</label>
                    <input
                        type="email"
                        placeholder="tucorreo@ejemplo.com"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label>"Contraseña"</label>
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn btn-primary">"Entrar"</button>
            </form>
            <p class="login-hint">
                <a href="/">"Volver al inicio"</a>
            </p>
        </div>
    }
}
