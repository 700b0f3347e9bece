use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;

use stackdev_frontend::bootstrap::enhance;
use stackdev_frontend::config::{self, Config};
use stackdev_frontend::dom::WebPage;
use stackdev_frontend::page::Page;
use stackdev_frontend::year;

mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    // Wire the page behaviors once the landing markup is in the DOM
    use_effect_with_deps(
        move |_| {
            let enhancements = match WebPage::new() {
                Ok(page) => {
                    let page: Rc<dyn Page> = Rc::new(page);
                    let config = Config::from_page(page.as_ref());
                    Some(enhance(page, &config, year::current_year()))
                }
                Err(err) => {
                    error!("Page enhancements unavailable: {}", err);
                    None
                }
            };
            move || drop(enhancements)
        },
        (),
    );

    html! { <Landing /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
