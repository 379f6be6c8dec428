use yew::prelude::*;

use crate::content::Project;
use crate::motion::decor::Orbit;
use crate::motion::reveal::{Reveal, RevealMotion};

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub projects: Vec<Project>,
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    html! {
        <section id="projects" class="section section--alt projects">
            <div class="projects__wash"></div>
            <div class="container">
                <Reveal motion={RevealMotion::Rise(12)}>
                    <h2 class="section-title">{"Featured Projects"}</h2>
                </Reveal>
                <p class="section-lead muted">{"A selection of work that blends thoughtful UX with robust engineering."}</p>
                <div class="projects__grid">
                    { for props.projects.iter().enumerate().map(|(i, project)| {
                        let background = format!(
                            "background: linear-gradient(to bottom right, {}, {});",
                            project.gradient[0], project.gradient[1]
                        );
                        html! {
                            <Reveal key={project.title.clone()} motion={RevealMotion::Rise(16)} delay_index={i as u32}>
                                <a href="#" class="project-card glass" style={background}>
                                    <div class="project-card__hover"></div>
                                    <div class="project-card__body">
                                        <div class="tag">{ &project.tag }</div>
                                        <h3 class="project-card__title">{ &project.title }</h3>
                                        <p class="muted small">{"Click to explore the live demo and code."}</p>
                                        <div class="project-card__link accent">{"View Project ↗"}</div>
                                    </div>
                                    <Orbit />
                                </a>
                            </Reveal>
                        }
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .projects__wash {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        background:
                            radial-gradient(circle at 20% 10%, var(--glow), transparent 40%),
                            radial-gradient(circle at 80% 30%, var(--glow), transparent 35%);
                    }
                    .projects__grid {
                        margin-top: 2.5rem;
                        display: grid;
                        gap: 1.5rem;
                    }
                    .project-card {
                        position: relative;
                        display: block;
                        overflow: hidden;
                        border-radius: 1rem;
                        padding: 1.25rem;
                        text-decoration: none;
                        color: inherit;
                    }
                    .project-card__hover {
                        position: absolute;
                        inset: 0;
                        opacity: 0;
                        background: rgba(255, 255, 255, 0.05);
                        transition: opacity 0.2s ease;
                    }
                    .project-card:hover .project-card__hover {
                        opacity: 1;
                    }
                    .project-card__body {
                        position: relative;
                    }
                    .project-card__title {
                        margin-top: 1rem;
                        font-size: 1.25rem;
                        font-weight: 600;
                    }
                    .project-card__link {
                        margin-top: 1rem;
                    }
                    .orbit {
                        position: absolute;
                        right: -1.5rem;
                        bottom: -1.5rem;
                        height: 7rem;
                        width: 7rem;
                        border-radius: 9999px;
                        pointer-events: none;
                        background: linear-gradient(to bottom right, rgba(255, 255, 255, 0.1), rgba(255, 255, 255, 0));
                    }
                    @keyframes orbit-spin {
                        from { transform: rotate(0deg); }
                        to { transform: rotate(360deg); }
                    }
                    @media (min-width: 640px) {
                        .projects__grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (min-width: 1024px) {
                        .projects__grid { grid-template-columns: repeat(3, 1fr); }
                    }
                "#}
            </style>
        </section>
    }
}
