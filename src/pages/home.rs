use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

/// Smooth-scroll to an in-page section, leaving room for the fixed
/// header.
fn scroll_to_section(id: &str) {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    if let Some(target) = document.get_element_by_id(id) {
        if let Ok(element) = target.dyn_into::<web_sys::HtmlElement>() {
            let mut options = web_sys::ScrollToOptions::new();
            options.top(element.offset_top() as f64 - 100.0);
            options.behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

#[function_component(Home)]
pub fn home() -> Html {
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

    // Reveal sections once they scroll into view: 100px offset, one
    // shot per element, the transition itself lives in CSS.
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();
            let window_clone = window.clone();

            let reveal_callback = Closure::wrap(Box::new(move || {
                let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                let viewport = window_clone
                    .inner_height()
                    .ok()
                    .and_then(|h| h.as_f64())
                    .unwrap_or(0.0);
                let threshold = scroll_y + viewport - 100.0;

                if let Ok(nodes) = document.query_selector_all(".reveal") {
                    for index in 0..nodes.length() {
                        if let Some(node) = nodes.item(index) {
                            if let Ok(element) = node.dyn_into::<web_sys::HtmlElement>() {
                                if (element.offset_top() as f64) < threshold {
                                    let classes = element.class_name();
                                    if !classes.contains("visible") {
                                        element.set_class_name(&format!("{} visible", classes));
                                    }
                                }
                            }
                        }
                    }
                }
            }) as Box<dyn FnMut()>);

            window
                .add_event_listener_with_callback(
                    "scroll",
                    reveal_callback.as_ref().unchecked_ref(),
                )
                .unwrap();

            // run once so above-the-fold content shows without scrolling
            let initial: &js_sys::Function = reveal_callback.as_ref().unchecked_ref();
            let _ = initial.call0(&JsValue::NULL);

            move || {
                window
                    .remove_event_listener_with_callback(
                        "scroll",
                        reveal_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
            }
        },
        (),
    );

    let scroll_to_services = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("leistungen");
    });

    html! {
        <div class="home">
            <style>
                {r#"
                .home section {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                }
                .reveal {
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }
                .reveal.visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                .hero {
                    min-height: 90vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    text-align: center;
                }
                .hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero p {
                    font-size: 1.2rem;
                    color: rgba(255, 255, 255, 0.8);
                    max-width: 640px;
                    margin: 0 auto 2.5rem;
                }
                .hero-buttons {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                }
                .btn-primary, .btn-secondary {
                    display: inline-block;
                    padding: 0.9rem 2rem;
                    border-radius: 8px;
                    font-size: 1rem;
                    cursor: pointer;
                    border: none;
                    transition: transform 0.2s ease;
                }
                .btn-primary {
                    background: linear-gradient(45deg, #1E90FF, #7EB2FF);
                    color: #ffffff;
                }
                .btn-secondary {
                    background: transparent;
                    border: 1px solid rgba(255, 255, 255, 0.4);
                    color: #ffffff;
                }
                .btn-primary:hover, .btn-secondary:hover {
                    transform: translateY(-2px);
                }
                .section-heading {
                    text-align: center;
                    font-size: 2rem;
                    margin-bottom: 3rem;
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                }
                .service-card {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    padding: 2rem;
                }
                .service-card h3 {
                    margin-top: 0;
                    color: #7EB2FF;
                }
                .service-card p {
                    color: rgba(255, 255, 255, 0.75);
                    line-height: 1.6;
                }
                .process-steps {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                    counter-reset: step;
                }
                .process-step {
                    padding: 2rem;
                    border-left: 2px solid #1E90FF;
                }
                .process-step .step-number {
                    font-size: 2.5rem;
                    font-weight: 700;
                    color: #1E90FF;
                }
                .about p {
                    color: rgba(255, 255, 255, 0.8);
                    line-height: 1.7;
                    max-width: 760px;
                    margin: 0 auto;
                }
                .cta {
                    text-align: center;
                }
                .cta h2 {
                    font-size: 2rem;
                    margin-bottom: 1.5rem;
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.2rem;
                    }
                    .hero-buttons {
                        flex-direction: column;
                        align-items: center;
                    }
                }
                "#}
            </style>

            <section class="hero" id="hero">
                <h1>{"Fördermittel, die Ihr Unternehmen wirklich erreichen"}</h1>
                <p>
                    {"subsisdium findet die passenden Förderprogramme für Ihr Vorhaben, \
                      übernimmt die Antragstellung und begleitet Sie bis zur Auszahlung. \
                      Ohne Fachjargon, ohne Umwege."}
                </p>
                <div class="hero-buttons">
                    <Link<Route> to={Route::Contact} classes="btn-primary">
                        {"Kostenloses Erstgespräch"}
                    </Link<Route>>
                    <button class="btn-secondary" onclick={scroll_to_services}>
                        {"Mehr erfahren"}
                    </button>
                </div>
            </section>

            <section id="leistungen">
                <h2 class="section-heading reveal">{"Unsere Leistungen"}</h2>
                <div class="services-grid">
                    <div class="service-card reveal">
                        <h3>{"Fördermittel-Check"}</h3>
                        <p>
                            {"Wir prüfen, welche Programme von Bund, Ländern und EU zu \
                              Ihrem Vorhaben passen und wie hoch die realistische \
                              Förderquote ist."}
                        </p>
                    </div>
                    <div class="service-card reveal">
                        <h3>{"Antragstellung"}</h3>
                        <p>
                            {"Von der Projektskizze bis zum vollständigen Antrag: wir \
                              formulieren, kalkulieren und reichen fristgerecht ein."}
                        </p>
                    </div>
                    <div class="service-card reveal">
                        <h3>{"Projektbegleitung"}</h3>
                        <p>
                            {"Nach der Bewilligung unterstützen wir beim Mittelabruf, \
                              bei Änderungsanträgen und in der Kommunikation mit dem \
                              Fördergeber."}
                        </p>
                    </div>
                    <div class="service-card reveal">
                        <h3>{"Verwendungsnachweis"}</h3>
                        <p>
                            {"Wir bereiten die Nachweisführung so auf, dass am Ende \
                              keine Rückforderungen drohen."}
                        </p>
                    </div>
                </div>
            </section>

            <section id="prozess">
                <h2 class="section-heading reveal">{"So arbeiten wir"}</h2>
                <div class="process-steps">
                    <div class="process-step reveal">
                        <div class="step-number">{"1"}</div>
                        <h3>{"Erstgespräch"}</h3>
                        <p>{"30 Minuten, kostenlos. Wir klären Vorhaben, Zeitplan und Budget."}</p>
                    </div>
                    <div class="process-step reveal">
                        <div class="step-number">{"2"}</div>
                        <h3>{"Analyse & Strategie"}</h3>
                        <p>{"Sie erhalten eine konkrete Empfehlung, welche Programme sich lohnen."}</p>
                    </div>
                    <div class="process-step reveal">
                        <div class="step-number">{"3"}</div>
                        <h3>{"Antrag & Umsetzung"}</h3>
                        <p>{"Wir stellen den Antrag und bleiben bis zur Auszahlung an Bord."}</p>
                    </div>
                </div>
            </section>

            <section class="about reveal" id="ueber-uns">
                <h2 class="section-heading">{"Über subsisdium"}</h2>
                <p>
                    {"Wir sind ein Beratungsteam aus Förderexperten und ehemaligen \
                      Projektträger-Mitarbeitern. Seit 2019 haben wir über 200 Anträge \
                      für kleine und mittlere Unternehmen begleitet, mit einer \
                      Bewilligungsquote von über 80 Prozent. Unser Honorar ist \
                      transparent und zum größten Teil erfolgsabhängig."}
                </p>
            </section>

            <section class="cta reveal">
                <h2>{"Bereit, Ihr Vorhaben zu finanzieren?"}</h2>
                <Link<Route> to={Route::Contact} classes="btn-primary">
                    {"Jetzt Erstgespräch buchen"}
                </Link<Route>>
            </section>
        </div>
    }
}
