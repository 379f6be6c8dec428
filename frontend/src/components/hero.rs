use yew::prelude::*;

use crate::config::{self, MotionConfig};
use crate::content::{HeroContent, ProfileLinks};
use crate::motion::reveal::{Reveal, RevealMotion, Trigger};
use crate::motion::scroll::use_scroll;
use crate::motion::style::DerivedStyle;
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct SplineSceneProps {
    pub url: AttrValue,
}

/// Third-party 3D scene. It is an opaque box to the rest of the page; if the
/// viewer script never loads, the custom element simply stays empty.
#[function_component(SplineScene)]
pub fn spline_scene(props: &SplineSceneProps) -> Html {
    html! {
        <div class="spline-scene">
            <@{"spline-viewer"} url={props.url.clone()} class="spline-scene__viewer"></@>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FocusCardProps {
    content: HeroContent,
}

#[function_component(FocusCard)]
fn focus_card(props: &FocusCardProps) -> Html {
    let icons = ["✦", "⚙", "☁"];
    html! {
        <div class="focus-card glass">
            <div class="focus-card__head">
                <div class="focus-card__icon">{"</>"}</div>
                <div>
                    <p class="muted small">{ &props.content.focus_label }</p>
                    <p class="strong">{ &props.content.focus_stack }</p>
                </div>
            </div>
            <div class="focus-card__tiles">
                { for props.content.focus_tiles.iter().zip(icons.iter().cycle()).map(|(label, icon)| html! {
                    <div key={label.clone()} class="focus-card__tile">
                        <span class="accent">{ *icon }</span>
                        { label }
                    </div>
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TiltProps {
    children: Children,
}

/// Leans its children back as the page scrolls down.
#[function_component(Tilt)]
fn tilt(props: &TiltProps) -> Html {
    let snapshot = use_scroll();
    let config = use_context::<MotionConfig>().unwrap_or_default();
    let degrees = DerivedStyle::from_snapshot(snapshot, &config).tilt_degrees;
    html! {
        <div class="tilt" style={format!("transform: perspective(1000px) rotateX({:.3}deg);", degrees)}>
            { props.children.clone() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub content: HeroContent,
    pub links: ProfileLinks,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let theme = use_context::<Theme>();
    let parallax = theme.map(|t| t.parallax).unwrap_or(false);
    let content = &props.content;

    let card = html! { <FocusCard content={content.clone()} /> };

    html! {
        <section id="home" class="hero">
            <div class="hero__backdrop">
                <div class="hero__glow hero__glow--main"></div>
                <div class="hero__glow hero__glow--corner"></div>
            </div>

            <SplineScene url={config::SPLINE_SCENE_URL} />

            <div class="hero__content container">
                <div>
                    <Reveal motion={RevealMotion::Rise(20)} trigger={Trigger::Mount}>
                        <div class="pill glass">
                            <span class="accent">{"✦"}</span>
                            { &content.badge }
                        </div>
                        <h1 class="hero__title">
                            <span class="fade-text">{ &content.headline }</span>
                            <br />
                            <span class="gradient-text">{ &content.headline_accent }</span>
                        </h1>
                        <p class="hero__blurb muted">{ &content.blurb }</p>
                        <div class="hero__actions">
                            <a href="#projects" class="btn btn--light">{"View Projects →"}</a>
                            <a href="#contact" class="btn btn--ghost">{"Contact Me"}</a>
                            <div class="hero__socials">
                                <a href={props.links.github.clone()} target="_blank" rel="noreferrer" class="icon-link" title="GitHub">{"GH"}</a>
                                <a href={props.links.linkedin.clone()} target="_blank" rel="noreferrer" class="icon-link" title="LinkedIn">{"in"}</a>
                                <a href="#contact" class="icon-link" title="Mail">{"✉"}</a>
                            </div>
                        </div>
                    </Reveal>
                </div>
                <div class="hero__card-slot">
                    <Reveal motion={RevealMotion::Rise(40)} duration_ms={700} class="hero__card">
                        if parallax {
                            <Tilt>{ card }</Tilt>
                        } else {
                            { card }
                        }
                    </Reveal>
                </div>
            </div>

            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 92vh;
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                        background: var(--bg);
                    }
                    .hero__backdrop, .spline-scene {
                        position: absolute;
                        inset: 0;
                    }
                    .spline-scene__viewer {
                        display: block;
                        width: 100%;
                        height: 100%;
                    }
                    .hero__glow {
                        position: absolute;
                        border-radius: 9999px;
                        filter: blur(64px);
                        pointer-events: none;
                    }
                    .hero__glow--main {
                        top: -6rem;
                        left: 50%;
                        transform: translateX(-50%);
                        height: 700px;
                        width: 900px;
                        background: linear-gradient(to bottom right, var(--accent-from), transparent, var(--accent-to));
                        opacity: 0.2;
                    }
                    .hero__glow--corner {
                        bottom: 0;
                        right: 0;
                        height: 16rem;
                        width: 16rem;
                        background: var(--accent-to);
                        opacity: 0.2;
                    }
                    .hero__content {
                        position: relative;
                        z-index: 10;
                        display: grid;
                        gap: 2.5rem;
                        align-items: center;
                        pointer-events: none;
                    }
                    .hero__content a, .hero__content .glass {
                        pointer-events: auto;
                    }
                    .hero__title {
                        margin-top: 1.25rem;
                        font-size: clamp(2.25rem, 5vw, 3.75rem);
                        font-weight: 800;
                        letter-spacing: -0.025em;
                        line-height: 1.1;
                    }
                    .fade-text {
                        background: linear-gradient(to bottom, #fff, rgba(255, 255, 255, 0.7));
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .hero__blurb {
                        margin-top: 1.25rem;
                        max-width: 36rem;
                    }
                    .hero__actions {
                        margin-top: 2rem;
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .hero__socials {
                        margin-left: 0.5rem;
                        display: flex;
                        gap: 0.5rem;
                    }
                    .hero__card-slot {
                        position: relative;
                        height: 420px;
                    }
                    .hero__card {
                        position: absolute;
                        right: 0;
                        top: 2.5rem;
                        width: 100%;
                        max-width: 28rem;
                    }
                    .tilt {
                        transform-origin: 50% 100%;
                        will-change: transform;
                    }
                    .focus-card {
                        padding: 1.5rem;
                        border-radius: 1rem;
                    }
                    .focus-card__head {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .focus-card__icon {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        height: 2.5rem;
                        width: 2.5rem;
                        border-radius: 0.75rem;
                        font-weight: 700;
                        background: linear-gradient(to bottom right, var(--accent-from), var(--accent-to));
                    }
                    .focus-card__tiles {
                        margin-top: 1.25rem;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 0.75rem;
                        font-size: 0.75rem;
                    }
                    .focus-card__tile {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.25rem;
                        padding: 0.75rem;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.05);
                    }
                    @media (min-width: 640px) {
                        .hero__card-slot { height: 520px; }
                    }
                    @media (min-width: 1024px) {
                        .hero__content { grid-template-columns: 1fr 1fr; }
                        .hero__card-slot { height: 620px; }
                    }
                "#}
            </style>
        </section>
    }
}
