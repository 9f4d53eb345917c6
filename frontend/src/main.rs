use log::info;
use yew::prelude::*;

mod config;
mod api {
    pub mod leads;
}
mod state {
    pub mod faq;
    pub mod modal;
    pub mod reveal;
    pub mod scroll;
}
mod components {
    pub mod icons;
    pub mod lead_modal;
    pub mod reveal;
    pub mod scroll;
}
mod sections {
    pub mod bonus_website;
    pub mod faq;
    pub mod features;
    pub mod final_cta;
    pub mod footer;
    pub mod hero;
    pub mod navbar;
    pub mod package_details;
    pub mod pain_points;
    pub mod pricing;
    pub mod stats;
    pub mod sticky_cta;
    pub mod testimonials;
}
mod pages {
    pub mod landing;
}

use components::scroll::ScrollProvider;
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <ScrollProvider>
            <Landing />
        </ScrollProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    match config::lead_endpoint() {
        Some(endpoint) => info!("Starting landing page, leads go to {}", endpoint),
        None => info!("Starting landing page, no lead endpoint configured"),
    }
    yew::Renderer::<App>::new().render();
}
