use yew::prelude::*;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <article class="card about">
            <h1>{"About This Project"}</h1>
            <p>
                {"This platform was born from a simple, frustrating question: \"Why is my \
                  electricity bill so high?\" Many of us feel like we're being overcharged, \
                  but without data, it's just a feeling. This project aims to replace that \
                  feeling with facts."}
            </p>
            <p>
                {"By crowdsourcing anonymized bill data, we can create a transparent, \
                  community-driven benchmark. Our goal is to empower consumers with the \
                  information they need to understand their bills in context and hold \
                  utility providers accountable."}
            </p>
            <h2>{"Our Commitment to Anonymity"}</h2>
            <p>
                {"Your privacy is paramount. We do not ask for, collect, or store any \
                  personally identifiable information (PII). No names, no account numbers, \
                  no addresses. The data you submit is aggregated anonymously to power the \
                  comparison engine, ensuring that your participation helps the community \
                  without compromising your identity."}
            </p>
        </article>
    }
}
