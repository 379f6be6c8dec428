use yew::prelude::*;
use log::{error, info};

mod config;
mod content;
mod theme;
mod motion {
    pub mod decor;
    pub mod reveal;
    pub mod scroll;
    pub mod spring;
    pub mod style;
}
mod components {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod navbar;
    pub mod projects;
    pub mod skills;
}
mod pages {
    pub mod portfolio;
}
#[cfg(all(test, target_arch = "wasm32"))]
mod test_dom;

use content::SiteContent;
use pages::portfolio::Portfolio;


#[function_component]
fn App() -> Html {
    let content = use_state(SiteContent::load);
    let variant = config::variant();

    match &*content {
        Ok(content) => {
            html! { <Portfolio variant={variant} content={content.clone()} /> }
        }
        Err(err) => {
            error!("{}", err);
            html! {
                <div class="content-error">
                    <p>{"This page could not be loaded."}</p>
                </div>
            }
        }
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting portfolio ({:?} variant)", config::variant());
    yew::Renderer::<App>::new().render();
}
