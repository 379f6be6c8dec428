use yew::prelude::*;

use crate::config::MotionConfig;

/// Seconds per full turn of the project card decoration.
pub const ORBIT_PERIOD_S: u32 = 12;

const SNIPPETS: &[&str] = &[
    "fn", "let", "mut", "=>", "{}", "impl", "</>", "0x1f", "async", "await", "&&", "::", "[]", "ok()",
    "pub", "use", "Some", "None", "match", "=", "++", "const", "true", "//",
];

const GLYPHS_PER_COLUMN: usize = 14;

#[derive(Clone, Debug, PartialEq)]
pub struct GlyphColumn {
    pub left_percent: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub opacity: f64,
    pub glyphs: Vec<&'static str>,
}

impl GlyphColumn {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; opacity: {:.2}; animation-duration: {:.2}s; animation-delay: -{:.2}s;",
            self.left_percent, self.opacity, self.duration_s, self.delay_s
        )
    }
}

/// Lays out `count` columns across the width. The same seed always gives
/// the same layout, so re-renders don't reshuffle the rain.
pub fn glyph_columns(seed: u64, count: usize) -> Vec<GlyphColumn> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..count)
        .map(|i| {
            let slot = 100.0 / count as f64;
            GlyphColumn {
                left_percent: (i as f64 + rng.f64()) * slot,
                duration_s: 8.0 + rng.f64() * 10.0,
                delay_s: rng.f64() * 12.0,
                opacity: 0.08 + rng.f64() * 0.17,
                glyphs: (0..GLYPHS_PER_COLUMN)
                    .map(|_| SNIPPETS[rng.usize(..SNIPPETS.len())])
                    .collect(),
            }
        })
        .collect()
}

/// Background layer of slowly falling code fragments.
#[function_component(FallingCode)]
pub fn falling_code() -> Html {
    let config = use_context::<MotionConfig>().unwrap_or_default();
    let columns = use_state(|| glyph_columns(config.falling_code_seed, config.falling_code_columns));

    html! {
        <div class="falling-code" aria-hidden="true">
            { for columns.iter().map(|column| html! {
                <div class="falling-code__column" style={column.style()}>
                    { for column.glyphs.iter().map(|glyph| html! { <span>{ *glyph }</span> }) }
                </div>
            }) }
        </div>
    }
}

/// Slowly spinning highlight in a card corner.
#[function_component(Orbit)]
pub fn orbit() -> Html {
    let style = format!("animation: orbit-spin {ORBIT_PERIOD_S}s linear infinite;");
    html! { <div class="orbit" style={style}></div> }
}
