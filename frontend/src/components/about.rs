use yew::prelude::*;

use crate::content::AboutContent;
use crate::motion::reveal::{Reveal, RevealMotion};

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub content: AboutContent,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let content = &props.content;
    html! {
        <section id="about" class="section about">
            <div class="container about__grid">
                <Reveal motion={RevealMotion::SlideFromLeft(20)}>
                    <h2 class="section-title">{"About Me"}</h2>
                    <p class="about__intro muted">{ &content.intro }</p>
                    <div class="about__stats">
                        { for content.stats.iter().map(|stat| html! {
                            <div key={stat.label.clone()} class="about__stat glass">
                                <p class="about__stat-value">{ &stat.value }</p>
                                <p class="muted tiny">{ &stat.label }</p>
                            </div>
                        }) }
                    </div>
                </Reveal>
                <Reveal motion={RevealMotion::SlideFromRight(20)}>
                    <div class="about__panel">
                        <div class="about__blob about__blob--top"></div>
                        <div class="about__blob about__blob--bottom"></div>
                        <div class="about__cards">
                            { for content.cards.iter().map(|card| html! {
                                <div key={card.title.clone()} class="about__card glass">
                                    <p class="strong">{ &card.title }</p>
                                    <p class="muted small">{ &card.desc }</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </Reveal>
            </div>
            <style>
                {r#"
                    .about__grid {
                        display: grid;
                        gap: 2.5rem;
                        align-items: center;
                    }
                    .about__intro {
                        margin-top: 1rem;
                        line-height: 1.7;
                    }
                    .about__stats {
                        margin-top: 1.5rem;
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1rem;
                    }
                    .about__stat {
                        padding: 1rem;
                        border-radius: 1rem;
                        text-align: center;
                    }
                    .about__stat-value {
                        font-size: 1.5rem;
                        font-weight: 700;
                    }
                    .about__panel {
                        position: relative;
                        overflow: hidden;
                        padding: 1.5rem;
                        border-radius: 1.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: linear-gradient(to bottom right, var(--glow), transparent);
                    }
                    .about__blob {
                        position: absolute;
                        height: 8rem;
                        width: 8rem;
                        border-radius: 9999px;
                        filter: blur(40px);
                        opacity: 0.2;
                        pointer-events: none;
                    }
                    .about__blob--top { top: -1.5rem; right: -1.5rem; background: var(--accent-from); }
                    .about__blob--bottom { bottom: -2rem; left: -2rem; background: var(--accent-to); }
                    .about__cards {
                        position: relative;
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1rem;
                    }
                    .about__card {
                        padding: 1rem;
                        border-radius: 1rem;
                    }
                    @media (min-width: 1024px) {
                        .about__grid { grid-template-columns: 1fr 1fr; }
                    }
                "#}
            </style>
        </section>
    }
}
