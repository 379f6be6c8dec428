use yew::prelude::*;

use crate::config::MotionConfig;
use crate::content::NavLink;
use crate::motion::scroll::use_scroll;
use crate::motion::spring::use_spring;
use crate::motion::style::DerivedStyle;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub brand: String,
    pub links: Vec<NavLink>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let snapshot = use_scroll();
    let config = use_context::<MotionConfig>().unwrap_or_default();
    let elevated = DerivedStyle::from_snapshot(snapshot, &config).nav_elevated;

    html! {
        <nav class={classes!("top-nav", elevated.then(|| "scrolled"))}>
            <div class="top-nav__inner">
                <a href="#home" class="top-nav__brand">
                    <span class="gradient-text">{ &props.brand }</span>
                </a>
                <div class="top-nav__links">
                    { for props.links.iter().map(|link| html! {
                        <a key={link.href.clone()} href={link.href.clone()} class="top-nav__link">
                            { &link.label }
                            <span class="top-nav__underline"></span>
                        </a>
                    }) }
                    <a href="#contact" class="top-nav__cta">
                        <span class="icon">{"✦"}</span>{" Hire Me"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: transparent;
                        transition: background 0.3s ease, box-shadow 0.3s ease, backdrop-filter 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(0, 0, 0, 0.3);
                        backdrop-filter: blur(24px);
                        -webkit-backdrop-filter: blur(24px);
                        box-shadow: 0 10px 15px -3px var(--glow);
                    }
                    .top-nav__inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        height: 4rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .top-nav__brand {
                        font-weight: 600;
                        font-size: 1.125rem;
                        letter-spacing: 0.025em;
                        text-decoration: none;
                    }
                    .top-nav__links {
                        display: none;
                        align-items: center;
                        gap: 0.25rem;
                    }
                    .top-nav__link {
                        position: relative;
                        padding: 0.5rem 0.75rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: rgba(255, 255, 255, 0.9);
                        text-decoration: none;
                    }
                    .top-nav__link:hover {
                        color: #fff;
                    }
                    .top-nav__underline {
                        position: absolute;
                        left: 0.75rem;
                        right: 0.75rem;
                        bottom: -2px;
                        height: 1px;
                        background: linear-gradient(to right, transparent, rgba(255, 255, 255, 0.7), transparent);
                        opacity: 0;
                        transition: opacity 0.2s ease;
                        pointer-events: none;
                    }
                    .top-nav__link:hover .top-nav__underline {
                        opacity: 1;
                    }
                    .top-nav__cta {
                        margin-left: 0.5rem;
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        border-radius: 9999px;
                        padding: 0.5rem 1rem;
                        font-size: 0.875rem;
                        font-weight: 600;
                        color: #fff;
                        text-decoration: none;
                        background: linear-gradient(to right, var(--accent-via), var(--accent-to));
                        box-shadow: 0 10px 15px -3px var(--glow);
                    }
                    @media (min-width: 768px) {
                        .top-nav__links {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}

/// Thin bar across the top that fills as the page is scrolled.
#[function_component(ScrollProgress)]
pub fn scroll_progress() -> Html {
    let snapshot = use_scroll();
    let config = use_context::<MotionConfig>().unwrap_or_default();
    let target = DerivedStyle::from_snapshot(snapshot, &config).progress_target;
    let ratio = use_spring(target, config.spring, config.frame_ms).clamp(0.0, 1.0);

    html! {
        <>
            <div class="scroll-progress" style={format!("transform: scaleX({:.4});", ratio)}></div>
            <style>
                {r#"
                    .scroll-progress {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 3px;
                        z-index: 60;
                        transform-origin: 0 50%;
                        background: linear-gradient(to right, var(--accent-from), var(--accent-via), var(--accent-to));
                        pointer-events: none;
                    }
                "#}
            </style>
        </>
    }
}
