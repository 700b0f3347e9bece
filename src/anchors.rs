use std::rc::Rc;

use log::{debug, info};

use crate::nav::{OPEN_CLASS, PANEL_SELECTOR, TOGGLER_SELECTOR};
use crate::page::{EventKind, Guard, Page};

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// In-page anchors scroll smoothly to their target instead of jumping, and
/// close the mobile navigation panel if it is open.
pub fn mount(page: &Rc<dyn Page>) -> Vec<Guard> {
    let guards: Vec<Guard> = page
        .find_all(ANCHOR_SELECTOR)
        .into_iter()
        .filter_map(|link| {
            let href = link.attr("href").filter(|href| href.len() > 1)?;
            let page = Rc::downgrade(page);
            Some(link.listen(
                EventKind::Click,
                Box::new(move |event| {
                    let Some(page) = page.upgrade() else {
                        return;
                    };
                    let Some(target) = page.find(&href) else {
                        debug!("Anchor target {} not found, leaving navigation alone", href);
                        return;
                    };
                    event.prevent_default();
                    target.scroll_into_view();

                    let panel_open = page
                        .find(PANEL_SELECTOR)
                        .map_or(false, |panel| panel.has_class(OPEN_CLASS));
                    if panel_open {
                        if let Some(toggler) = page.find(TOGGLER_SELECTOR) {
                            toggler.click();
                        }
                    }
                }),
            ))
        })
        .collect();

    info!("Smooth scrolling wired for {} anchors", guards.len());
    guards
}
