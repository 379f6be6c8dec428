use yew::prelude::*;

use crate::components::{
    about::About,
    contact::Contact,
    footer::Footer,
    hero::Hero,
    navbar::{Navbar, ScrollProgress},
    projects::Projects,
    skills::Skills,
};
use crate::config::MotionConfig;
use crate::content::SiteContent;
use crate::motion::decor::FallingCode;
use crate::motion::scroll::ScrollObserver;
use crate::theme::{Theme, Variant};

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub variant: Variant,
    pub content: SiteContent,
    #[prop_or_default]
    pub motion: MotionConfig,
}

/// The whole single page, themed for one variant.
#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    let theme = props.variant.theme();
    let content = &props.content;

    html! {
        <>
        <ContextProvider<MotionConfig> context={props.motion}>
        <ContextProvider<Theme> context={theme.clone()}>
        <ScrollObserver>
            <div class={classes!("portfolio", props.variant.class_name())} style={theme.css_vars()}>
                if theme.progress_bar {
                    <ScrollProgress />
                }
                if theme.falling_code {
                    <FallingCode />
                }
                <Navbar brand={content.brand.clone()} links={content.nav.clone()} />
                <Hero content={content.hero.clone()} links={content.links.clone()} />
                <Projects projects={content.projects.clone()} />
                <About content={content.about.clone()} />
                <Skills skills={content.skills.clone()} />
                <Contact
                    content={content.contact.clone()}
                    links={content.links.clone()}
                    mailto={content.mailto()}
                />
                <Footer brand={content.brand.clone()} />
            </div>
        </ScrollObserver>
        </ContextProvider<Theme>>
        </ContextProvider<MotionConfig>>
        <style>
            {r#"
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    font-family: Inter, system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
                }
                .portfolio {
                    min-height: 100vh;
                    color: #fff;
                    background: var(--bg);
                }
                .portfolio ::selection {
                    background: var(--selection);
                    color: #fff;
                }
                .portfolio p, .portfolio h1, .portfolio h2, .portfolio h3 {
                    margin: 0;
                }
                .container {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .section {
                    position: relative;
                    padding: 6rem 0;
                    background: var(--bg);
                }
                .section--alt {
                    background: var(--bg-alt);
                }
                .section-title {
                    font-size: clamp(1.875rem, 4vw, 2.25rem);
                    font-weight: 700;
                }
                .section-lead {
                    margin-top: 0.5rem;
                    max-width: 42rem;
                }
                .gradient-text {
                    background: linear-gradient(to right, var(--accent-from), var(--accent-via), var(--accent-to));
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .glass {
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background-color: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(24px);
                    -webkit-backdrop-filter: blur(24px);
                }
                .muted { color: rgba(255, 255, 255, 0.65); }
                .small { font-size: 0.875rem; }
                .tiny { font-size: 0.75rem; }
                .strong { font-weight: 600; }
                .accent { color: var(--accent-text); }
                .pill, .tag, .chip {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    border-radius: 9999px;
                }
                .pill {
                    padding: 0.25rem 0.75rem;
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.8);
                }
                .tag {
                    padding: 0.25rem 0.5rem;
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.7);
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                .chip, .icon-link, .btn--ghost {
                    color: rgba(255, 255, 255, 0.85);
                    text-decoration: none;
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                .chip {
                    padding: 0.5rem 1rem;
                }
                .chip:hover, .btn--ghost:hover {
                    background: rgba(255, 255, 255, 0.15);
                }
                .icon-link {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    height: 2.5rem;
                    width: 2.5rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 600;
                }
                .btn {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    border-radius: 9999px;
                    padding: 0.75rem 1.25rem;
                    font-weight: 600;
                    text-decoration: none;
                    transition: transform 0.2s ease, background 0.2s ease;
                }
                .btn--light {
                    color: #000;
                    background: #fff;
                    box-shadow: 0 8px 30px rgba(0, 0, 0, 0.12);
                }
                .btn--light:hover {
                    transform: translateY(-1px);
                }
                .falling-code {
                    position: fixed;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                    z-index: 1;
                }
                .falling-code__column {
                    position: absolute;
                    top: -100%;
                    display: flex;
                    flex-direction: column;
                    gap: 0.6rem;
                    font-family: "JetBrains Mono", ui-monospace, monospace;
                    font-size: 0.75rem;
                    color: var(--accent-from);
                    animation-name: code-fall;
                    animation-timing-function: linear;
                    animation-iteration-count: infinite;
                }
                @keyframes code-fall {
                    from { transform: translateY(0); }
                    to { transform: translateY(220vh); }
                }
                .variant-neon .section, .variant-neon .footer, .variant-neon .hero__content {
                    z-index: 2;
                }
            "#}
        </style>
        </>
    }
}
