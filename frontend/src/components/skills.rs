use yew::prelude::*;

use crate::content::Skill;
use crate::motion::reveal::{Reveal, RevealMotion};

#[derive(Properties, PartialEq)]
pub struct SkillsProps {
    pub skills: Vec<Skill>,
}

#[function_component(Skills)]
pub fn skills(props: &SkillsProps) -> Html {
    html! {
        <section id="skills" class="section section--alt skills">
            <div class="container">
                <h2 class="section-title">{"Skills"}</h2>
                <div class="skills__grid">
                    { for props.skills.iter().enumerate().map(|(i, skill)| html! {
                        <Reveal key={skill.name.clone()} motion={RevealMotion::Rise(12)} delay_index={i as u32} class="skill glass">
                            <div class="skill__head muted small">
                                <span>{ &skill.name }</span>
                                <span>{ format!("{}%", skill.level) }</span>
                            </div>
                            <div class="skill__track">
                                // the fill reveals on its own, independent of the card
                                <Reveal motion={RevealMotion::Grow(skill.level)} duration_ms={1200} class="skill__fill" />
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .skills__grid {
                        margin-top: 2.5rem;
                        display: grid;
                        gap: 1.5rem;
                    }
                    .skill {
                        padding: 1.25rem;
                        border-radius: 1rem;
                    }
                    .skill__head {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .skill__track {
                        margin-top: 0.75rem;
                        height: 0.5rem;
                        width: 100%;
                        overflow: hidden;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.1);
                    }
                    .skill__fill {
                        height: 100%;
                        border-radius: 9999px;
                        background: linear-gradient(to right, var(--accent-from), var(--accent-to));
                    }
                    @media (min-width: 1024px) {
                        .skills__grid { grid-template-columns: 1fr 1fr; }
                    }
                "#}
            </style>
        </section>
    }
}
