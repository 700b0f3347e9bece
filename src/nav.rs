use std::rc::Rc;

use log::{debug, info, warn};

use crate::config::Config;
use crate::page::{EventKind, Guard, Page};

pub const NAVBAR_SELECTOR: &str = ".navbar-glass";
pub const PANEL_SELECTOR: &str = "#primaryNav";
pub const TOGGLER_SELECTOR: &str = ".navbar-toggler";

pub const SCROLLED_CLASS: &str = "is-scrolled";
pub const OPEN_CLASS: &str = "show";

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Keeps the `is-scrolled` class on the glass navbar in sync with the
/// window scroll offset.
pub fn mount_scroll_state(page: &Rc<dyn Page>, config: &Config) -> Option<Guard> {
    let Some(navbar) = page.find(NAVBAR_SELECTOR) else {
        debug!("No glass navbar, scroll state not tracked");
        return None;
    };
    let threshold = config.nav_scroll_threshold;
    let update = {
        let page = Rc::downgrade(page);
        move || {
            if let Some(page) = page.upgrade() {
                navbar.toggle_class(SCROLLED_CLASS, is_scrolled(page.scroll_y(), threshold));
            }
        }
    };

    update();
    Some(page.listen(EventKind::Scroll, Box::new(move |_| update())))
}

/// Burger button that opens and closes the mobile navigation panel.
pub fn mount_toggler(page: &dyn Page) -> Option<Guard> {
    let (Some(toggler), Some(panel)) = (page.find(TOGGLER_SELECTOR), page.find(PANEL_SELECTOR))
    else {
        debug!("No mobile navigation toggler");
        return None;
    };
    let button = toggler.clone();
    let guard = toggler.listen(
        EventKind::Click,
        Box::new(move |event| {
            event.prevent_default();
            let open = !panel.has_class(OPEN_CLASS);
            panel.toggle_class(OPEN_CLASS, open);
            if let Err(err) = button.set_attr("aria-expanded", if open { "true" } else { "false" }) {
                warn!("Could not update aria-expanded: {}", err);
            }
        }),
    );
    info!("Mobile navigation toggler wired");
    Some(guard)
}
