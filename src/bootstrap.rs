use std::fmt;
use std::rc::Rc;

use log::info;

use crate::config::Config;
use crate::page::{Guard, Page};
use crate::{anchors, carousel, contact, glow, nav, reveal, year};

/// Everything wired onto the page. Dropping it detaches every listener and
/// cancels every timer, observer and running animation.
///
/// Behaviors only keep weak handles to the page, so this holds the one
/// strong handle for as long as the guards live.
#[derive(Default)]
pub struct Enhancements {
    guards: Vec<Guard>,
    page: Option<Rc<dyn Page>>,
}

impl fmt::Debug for Enhancements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Enhancements")
            .field("guards", &self.guards)
            .field("page", &self.page.is_some())
            .finish()
    }
}

impl Enhancements {
    pub fn len(&self) -> usize {
        self.guards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }
}

/// Wires every landing page behavior onto `page`. Each behavior whose
/// markup is missing is skipped on its own.
pub fn enhance(page: Rc<dyn Page>, config: &Config, current_year: i32) -> Enhancements {
    let mut guards = Vec::new();

    year::mount(page.as_ref(), current_year);
    guards.extend(nav::mount_toggler(page.as_ref()));
    guards.extend(anchors::mount(&page));
    guards.extend(nav::mount_scroll_state(&page, config));
    guards.extend(glow::mount(page.as_ref()));
    guards.extend(reveal::mount_counters(&page, config));
    guards.extend(reveal::mount_progress(&page, config));
    guards.extend(carousel::mount(&page, config));
    guards.extend(contact::mount(&page, config));

    info!("Landing page enhanced ({} handles)", guards.len());
    Enhancements {
        guards,
        page: Some(page),
    }
}
