use chrono::Datelike;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub brand: String,
}

pub fn copyright(brand: &str, year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, brand)
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="footer">
            <div class="container footer__inner">
                <p class="footer__note">{ copyright(&props.brand, year) }</p>
                <div class="footer__links">
                    <a href="#home">{"Top"}</a>
                    <span class="footer__dot">{"•"}</span>
                    <a href="#projects">{"Projects"}</a>
                    <span class="footer__dot">{"•"}</span>
                    <a href="#contact">{"Contact"}</a>
                </div>
            </div>
            <style>
                {r#"
                    .footer {
                        position: relative;
                        padding: 2.5rem 0;
                        background: var(--bg);
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .footer__inner {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                    }
                    .footer__note {
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.5);
                    }
                    .footer__links {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .footer__links a {
                        color: rgba(255, 255, 255, 0.6);
                        text-decoration: none;
                    }
                    .footer__links a:hover {
                        color: #fff;
                    }
                    .footer__dot {
                        color: rgba(255, 255, 255, 0.2);
                    }
                    @media (min-width: 640px) {
                        .footer__inner { flex-direction: row; }
                    }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_line() {
        assert_eq!(copyright("DevPortfolio", 2026), "© 2026 DevPortfolio. All rights reserved.");
    }
}
