//! Auto-advancing testimonial carousel.
//!
//! Index math lives in [`Cursor`]; [`Carousel`] adds rendering and the one
//! auto-advance timer it owns.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};

use crate::config::Config;
use crate::page::{EventKind, Guard, NodeHandle, Page};

pub const ITEM_SELECTOR: &str = ".testimonial-item";
pub const INDICATOR_SELECTOR: &str = "#testIndicator";
pub const PREV_SELECTOR: &str = "#testPrev";
pub const NEXT_SELECTOR: &str = "#testNext";
pub const TRACK_SELECTOR: &str = "#testimonialTrack";

pub const ACTIVE_CLASS: &str = "is-active";

/// Position within a cycle of `len` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    len: usize,
}

impl Cursor {
    /// `None` for an empty cycle.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Moves `direction` steps, wrapping at both ends.
    pub fn advance(&mut self, direction: isize) {
        let len = self.len as isize;
        self.index = (self.index as isize + direction).rem_euclid(len) as usize;
    }

    /// `"03 / 10"` style position label.
    pub fn indicator(&self) -> String {
        format!("{:02} / {:02}", self.index + 1, self.len)
    }
}

pub struct Carousel {
    page: Rc<dyn Page>,
    items: Vec<NodeHandle>,
    indicator: Option<NodeHandle>,
    cursor: RefCell<Cursor>,
    timer: RefCell<Option<Guard>>,
    interval_ms: u32,
}

impl Carousel {
    /// `None` unless there is more than one item to cycle through.
    pub fn new(
        page: Rc<dyn Page>,
        items: Vec<NodeHandle>,
        indicator: Option<NodeHandle>,
        interval_ms: u32,
    ) -> Option<Rc<Self>> {
        if items.len() <= 1 {
            return None;
        }
        let cursor = Cursor::new(items.len())?;
        Some(Rc::new(Self {
            page,
            items,
            indicator,
            cursor: RefCell::new(cursor),
            timer: RefCell::new(None),
            interval_ms,
        }))
    }

    pub fn index(&self) -> usize {
        self.cursor.borrow().index()
    }

    pub fn render(&self) {
        let cursor = *self.cursor.borrow();
        for (i, item) in self.items.iter().enumerate() {
            item.toggle_class(ACTIVE_CLASS, i == cursor.index());
        }
        if let Some(indicator) = &self.indicator {
            indicator.set_text(&cursor.indicator());
        }
    }

    pub fn go(&self, direction: isize) {
        self.cursor.borrow_mut().advance(direction);
        self.render();
    }

    /// (Re)starts auto-advance. Any running timer is cancelled first.
    pub fn start(self: &Rc<Self>) {
        self.stop();
        let carousel = Rc::downgrade(self);
        let timer = self.page.every(
            self.interval_ms,
            Box::new(move || {
                if let Some(carousel) = carousel.upgrade() {
                    carousel.go(1);
                }
            }),
        );
        *self.timer.borrow_mut() = Some(timer);
    }

    pub fn stop(&self) {
        let timer = self.timer.borrow_mut().take();
        drop(timer);
    }

    pub fn is_running(&self) -> bool {
        self.timer.borrow().is_some()
    }
}

fn on(
    target: &NodeHandle,
    kind: EventKind,
    carousel: &Rc<Carousel>,
    act: fn(&Rc<Carousel>),
) -> Guard {
    let carousel = carousel.clone();
    target.listen(kind, Box::new(move |_| act(&carousel)))
}

/// Wires the testimonial carousel. Returns nothing to hold when the page has
/// at most one testimonial.
pub fn mount(page: &Rc<dyn Page>, config: &Config) -> Option<Guard> {
    let items = page.find_all(ITEM_SELECTOR);
    let count = items.len();
    let indicator = page.find(INDICATOR_SELECTOR);
    let Some(carousel) = Carousel::new(page.clone(), items, indicator, config.carousel_interval_ms)
    else {
        debug!("Testimonial carousel skipped: {} item(s)", count);
        return None;
    };

    let mut listeners = Vec::new();
    if let Some(prev) = page.find(PREV_SELECTOR) {
        listeners.push(on(&prev, EventKind::Click, &carousel, |c| {
            c.go(-1);
            c.start();
        }));
    }
    if let Some(next) = page.find(NEXT_SELECTOR) {
        listeners.push(on(&next, EventKind::Click, &carousel, |c| {
            c.go(1);
            c.start();
        }));
    }
    if let Some(track) = page.find(TRACK_SELECTOR) {
        listeners.push(on(&track, EventKind::MouseEnter, &carousel, |c| c.stop()));
        listeners.push(on(&track, EventKind::MouseLeave, &carousel, |c| c.start()));
        listeners.push(on(&track, EventKind::FocusIn, &carousel, |c| c.stop()));
        listeners.push(on(&track, EventKind::FocusOut, &carousel, |c| c.start()));
    }

    carousel.render();
    carousel.start();
    info!("Testimonial carousel wired with {} items", count);

    Some(Guard::on_drop(move || {
        drop(listeners);
        carousel.stop();
    }))
}
