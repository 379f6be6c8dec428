use log::debug;
use web_sys::SubmitEvent;
use yew::prelude::*;

use crate::content::{ContactContent, ProfileLinks};

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub content: ContactContent,
    pub links: ProfileLinks,
    pub mailto: String,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    // Nothing is sent anywhere; the form only keeps the page from reloading.
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        debug!("contact form submission suppressed");
    });

    html! {
        <section id="contact" class="section contact">
            <div class="container contact__grid">
                <div>
                    <h2 class="section-title">{ &props.content.heading }</h2>
                    <p class="contact__blurb muted">{ &props.content.blurb }</p>
                    <div class="contact__links">
                        <a href={props.mailto.clone()} class="chip">{"✉ "}{ &props.content.email }</a>
                        <a href={props.links.github.clone()} target="_blank" rel="noreferrer" class="chip">{"GitHub"}</a>
                        <a href={props.links.linkedin.clone()} target="_blank" rel="noreferrer" class="chip">{"LinkedIn"}</a>
                    </div>
                </div>
                <form {onsubmit} class="contact__form glass">
                    <div class="contact__fields">
                        <div>
                            <label class="tiny muted">{"Name"}</label>
                            <input class="field" placeholder="John Doe" />
                        </div>
                        <div>
                            <label class="tiny muted">{"Email"}</label>
                            <input type="email" class="field" placeholder="john@company.com" />
                        </div>
                        <div class="contact__wide">
                            <label class="tiny muted">{"Message"}</label>
                            <textarea rows="4" class="field" placeholder="Tell me about your project..."></textarea>
                        </div>
                    </div>
                    <button type="submit" class="contact__send">{"Send Message 🚀"}</button>
                </form>
            </div>
            <style>
                {r#"
                    .contact__grid {
                        display: grid;
                        gap: 2.5rem;
                        align-items: start;
                    }
                    .contact__blurb {
                        margin-top: 0.75rem;
                        max-width: 36rem;
                    }
                    .contact__links {
                        margin-top: 1.5rem;
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                    }
                    .contact__form {
                        padding: 1.5rem;
                        border-radius: 1.5rem;
                    }
                    .contact__fields {
                        display: grid;
                        gap: 1rem;
                    }
                    .field {
                        margin-top: 0.25rem;
                        width: 100%;
                        box-sizing: border-box;
                        border-radius: 0.75rem;
                        padding: 0.5rem 0.75rem;
                        color: #fff;
                        font: inherit;
                        background: rgba(255, 255, 255, 0.1);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        outline: none;
                    }
                    .field::placeholder {
                        color: rgba(255, 255, 255, 0.4);
                    }
                    .field:focus {
                        border-color: var(--accent-text);
                    }
                    .contact__send {
                        margin-top: 1rem;
                        border: none;
                        cursor: pointer;
                        border-radius: 0.75rem;
                        padding: 0.75rem 1.25rem;
                        font: inherit;
                        font-weight: 600;
                        color: rgba(0, 0, 0, 0.9);
                        background: linear-gradient(to right, var(--accent-from), var(--accent-to));
                        transition: transform 0.2s ease;
                    }
                    .contact__send:hover {
                        transform: translateY(-1px);
                    }
                    @media (min-width: 640px) {
                        .contact__fields { grid-template-columns: 1fr 1fr; }
                        .contact__wide { grid-column: span 2; }
                    }
                    @media (min-width: 1024px) {
                        .contact__grid { grid-template-columns: 1fr 1fr; }
                    }
                "#}
            </style>
        </section>
    }
}
