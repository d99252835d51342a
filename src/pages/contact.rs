use yew::prelude::*;

use crate::booking::form::BookingForm;

#[function_component(Contact)]
pub fn contact() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="contact-page">
            <style>
                {r#"
                .contact-page {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 8rem 1.5rem 3rem;
                    display: grid;
                    grid-template-columns: 1fr 1.4fr;
                    gap: 3rem;
                }
                .contact-intro h1 {
                    font-size: 2.4rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .contact-intro p {
                    color: rgba(255, 255, 255, 0.8);
                    line-height: 1.7;
                }
                .contact-intro ul {
                    color: rgba(255, 255, 255, 0.8);
                    line-height: 2;
                    padding-left: 1.2rem;
                }
                .contact-card {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 16px;
                    padding: 2.5rem;
                    backdrop-filter: blur(10px);
                }
                @media (max-width: 900px) {
                    .contact-page {
                        grid-template-columns: 1fr;
                        padding-top: 6rem;
                    }
                }
                "#}
            </style>

            <div class="contact-intro">
                <h1>{"Erstgespräch buchen"}</h1>
                <p>
                    {"Erzählen Sie uns kurz von Ihrem Vorhaben. Wir melden uns \
                      innerhalb von 4 Stunden mit einem Terminvorschlag."}
                </p>
                <ul>
                    <li>{"30 Minuten, unverbindlich und kostenlos"}</li>
                    <li>{"Konkrete Einschätzung der Förderchancen"}</li>
                    <li>{"Keine Weitergabe Ihrer Daten an Dritte"}</li>
                </ul>
            </div>

            <div class="contact-card">
                <BookingForm />
            </div>
        </div>
    }
}
