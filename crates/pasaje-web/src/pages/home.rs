//! Landing Page

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <Hero />
            <HowItWorks />
            <ContactForm />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <header class="hero">
            <h1>"Pasaje"</h1>
            <p class="tagline">"Compra tus pasajes de bus en línea, sin filas ni llamadas."</p>
            <div class="cta">
                <a href="/login" class="btn btn-primary">"Comprar pasaje"</a>
                <a href="#como-funciona" class="btn">"Cómo funciona"</a>
            </div>
        </header>
    }
}

#[component]
fn HowItWorks() -> impl IntoView {
    view! {
        <section id="como-funciona" class="features">
            <h2>"¿Cómo funciona?"</h2>
            <div class="feature">
                <h3>"🔍 Busca tu ruta"</h3>
                <p>"Elige origen, destino y fecha. Te mostramos todas las salidas disponibles."</p>
            </div>
            <div class="feature">
                <h3>"💺 Escoge tu asiento"</h3>
                <p>"Mira el plano del bus y reserva el asiento que prefieras."</p>
            </div>
            <div class="feature">
                <h3>"🎫 Viaja con tu pasaje digital"</h3>
                <p>"Recibe tu pasaje al instante y preséntalo desde tu teléfono al abordar."</p>
            </div>
        </section>
    }
}

/// Contact form shell. Submission is suppressed and nothing leaves the page;
/// the real endpoint belongs to a backend this frontend does not own.
#[component]
fn ContactForm() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (text, set_text) = signal(String::new());
    let (sent, set_sent) = signal(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_sent.set(true);
    };

    view! {
        <section class="contact">
            <h2>"Contáctanos"</h2>
            <form on:submit=submit>
                <div class="field">
                    <label>"Nombre"</label>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label>"Correo electrónico"</label>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label>"Mensaje"</label>
                    <textarea
                        prop:value=move || text.get()
                        on:input=move |ev| set_text.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn btn-primary">"Enviar"</button>
                <Show when=move || sent.get()>
                    <p class="form-ack">"¡Gracias! Te responderemos pronto."</p>
                </Show>
            </form>
        </section>
    }
}
