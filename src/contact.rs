//! Contact form stub. Submissions are validated and acknowledged in place;
//! nothing leaves the browser.

use std::rc::Rc;

use log::{debug, info};

use crate::config::Config;
use crate::page::{EventKind, Guard, Page};

pub const FORM_SELECTOR: &str = "#contactForm";
pub const STATUS_SELECTOR: &str = "#formStatus";
pub const NAME_SELECTOR: &str = "#name";

/// Fills `{name}` into the acknowledgment template. A blank name drops the
/// placeholder together with the space before it.
pub fn acknowledgment(template: &str, name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        template.replace(" {name}", "").replace("{name}", "")
    } else {
        template.replace("{name}", name)
    }
}

pub fn mount(page: &Rc<dyn Page>, config: &Config) -> Option<Guard> {
    let Some(form) = page.find(FORM_SELECTOR) else {
        debug!("No contact form on the page");
        return None;
    };
    let status = page.find(STATUS_SELECTOR);
    let invalid = config.form_invalid_message.clone();
    let template = config.form_ack_message.clone();
    let target = form.clone();
    let page = Rc::downgrade(page);

    let guard = form.listen(
        EventKind::Submit,
        Box::new(move |event| {
            event.prevent_default();

            if !target.check_validity() {
                if let Some(status) = &status {
                    status.set_text(&invalid);
                }
                return;
            }

            let name = page
                .upgrade()
                .and_then(|page| page.find(NAME_SELECTOR))
                .and_then(|field| field.value())
                .unwrap_or_default();
            if let Some(status) = &status {
                status.set_text(&acknowledgment(&template, &name));
            }
            target.reset();
            info!("Contact form captured locally");
        }),
    );
    info!("Contact form stub wired");
    Some(guard)
}
