/// The two page variants. They share every component and differ only in
/// palette and in which motion flourishes are switched on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Classic,
    Neon,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub background: &'static str,
    pub background_alt: &'static str,
    pub accent_from: &'static str,
    pub accent_via: &'static str,
    pub accent_to: &'static str,
    pub accent_text: &'static str,
    pub glow: &'static str,
    pub selection: &'static str,
    pub progress_bar: bool,
    pub parallax: bool,
    pub falling_code: bool,
}

impl Variant {
    pub fn theme(self) -> Theme {
        match self {
            Variant::Classic => Theme {
                background: "#05060a",
                background_alt: "#07080f",
                accent_from: "#67e8f9",
                accent_via: "#60a5fa",
                accent_to: "#818cf8",
                accent_text: "#67e8f9",
                glow: "rgba(59, 130, 246, 0.10)",
                selection: "rgba(34, 211, 238, 0.30)",
                progress_bar: false,
                parallax: false,
                falling_code: false,
            },
            Variant::Neon => Theme {
                background: "#030806",
                background_alt: "#050d0a",
                accent_from: "#6ee7b7",
                accent_via: "#a3e635",
                accent_to: "#2dd4bf",
                accent_text: "#6ee7b7",
                glow: "rgba(16, 185, 129, 0.12)",
                selection: "rgba(52, 211, 153, 0.30)",
                progress_bar: true,
                parallax: true,
                falling_code: true,
            },
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Variant::Classic => "variant-classic",
            Variant::Neon => "variant-neon",
        }
    }
}

impl Theme {
    /// CSS custom properties consumed by the page stylesheet.
    pub fn css_vars(&self) -> String {
        format!(
            "--bg: {}; --bg-alt: {}; --accent-from: {}; --accent-via: {}; --accent-to: {}; --accent-text: {}; --glow: {}; --selection: {};",
            self.background,
            self.background_alt,
            self.accent_from,
            self.accent_via,
            self.accent_to,
            self.accent_text,
            self.glow,
            self.selection,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_has_no_flourishes() {
        let theme = Variant::Classic.theme();
        assert!(!theme.progress_bar);
        assert!(!theme.parallax);
        assert!(!theme.falling_code);
    }

    #[test]
    fn neon_enables_all_flourishes() {
        let theme = Variant::Neon.theme();
        assert!(theme.progress_bar && theme.parallax && theme.falling_code);
    }

    #[test]
    fn variants_differ_in_palette() {
        assert_ne!(Variant::Classic.theme().accent_from, Variant::Neon.theme().accent_from);
    }

    #[test]
    fn css_vars_carry_every_token() {
        let vars = Variant::Neon.theme().css_vars();
        for name in ["--bg:", "--bg-alt:", "--accent-from:", "--accent-via:", "--accent-to:", "--accent-text:", "--glow:", "--selection:"] {
            assert!(vars.contains(name), "missing {name}");
        }
        assert!(vars.contains("#6ee7b7"));
    }
}
