use yew::prelude::*;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-page">
            <style>
                {r#"
                .legal-page {
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 8rem 1.5rem 3rem;
                }
                .legal-page h1 {
                    font-size: 2rem;
                    margin-bottom: 2rem;
                }
                .legal-page h2 {
                    font-size: 1.3rem;
                    margin-top: 2.5rem;
                    color: #7EB2FF;
                }
                .legal-page p {
                    color: rgba(255, 255, 255, 0.8);
                    line-height: 1.7;
                }
                "#}
            </style>
            <h1>{"Datenschutzerklärung"}</h1>

            <h2>{"1. Verantwortlicher"}</h2>
            <p>
                {"Verantwortlich für die Verarbeitung personenbezogener Daten auf \
                  dieser Website ist die subsisdium GmbH, Musterstraße 12, 10115 \
                  Berlin, E-Mail: datenschutz@subsisdium.de."}
            </p>

            <h2>{"2. Buchungsformular"}</h2>
            <p>
                {"Wenn Sie über unser Formular ein Erstgespräch anfragen, übermitteln \
                  wir die von Ihnen eingegebenen Daten (Name, E-Mail-Adresse, \
                  Telefonnummer, Unternehmen sowie optionale Angaben) an unseren \
                  Automatisierungsdienstleister Make (Celonis SE), um Ihre Anfrage zu \
                  bearbeiten und Sie zu kontaktieren. Rechtsgrundlage ist Art. 6 \
                  Abs. 1 lit. b DSGVO. Die Daten werden nicht auf dieser Website \
                  gespeichert."}
            </p>

            <h2>{"3. Speicherdauer"}</h2>
            <p>
                {"Ihre Anfragedaten werden gelöscht, sobald sie für die Bearbeitung \
                  nicht mehr erforderlich sind und keine gesetzlichen \
                  Aufbewahrungspflichten entgegenstehen."}
            </p>

            <h2>{"4. Ihre Rechte"}</h2>
            <p>
                {"Sie haben das Recht auf Auskunft, Berichtigung, Löschung und \
                  Einschränkung der Verarbeitung Ihrer Daten sowie ein \
                  Beschwerderecht bei der zuständigen Aufsichtsbehörde."}
            </p>
        </div>
    }
}

#[function_component(Imprint)]
pub fn imprint() -> Html {
    html! {
        <div class="legal-page">
            <style>
                {r#"
                .legal-page {
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 8rem 1.5rem 3rem;
                }
                .legal-page h1 {
                    font-size: 2rem;
                    margin-bottom: 2rem;
                }
                .legal-page p {
                    color: rgba(255, 255, 255, 0.8);
                    line-height: 1.7;
                }
                "#}
            </style>
            <h1>{"Impressum"}</h1>
            <p>
                {"subsisdium GmbH"}<br />
                {"Musterstraße 12"}<br />
                {"10115 Berlin"}
            </p>
            <p>
                {"Vertreten durch: Maria Muster (Geschäftsführerin)"}<br />
                {"Handelsregister: Amtsgericht Charlottenburg, HRB 123456"}<br />
                {"USt-IdNr.: DE123456789"}
            </p>
            <p>
                {"Kontakt: kontakt@subsisdium.de, +49 30 1234567"}
            </p>
        </div>
    }
}
