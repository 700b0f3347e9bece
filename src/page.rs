//! The capability surface the enhancements are written against.
//!
//! Behaviors never touch `web_sys` directly. They find nodes, listen for
//! events, read and write visual properties and schedule work through
//! [`Page`] and [`Node`]. [`crate::dom::WebPage`] is the browser backend.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::error::FxError;

#[cfg(test)]
pub(crate) mod fake;

pub type NodeHandle = Rc<dyn Node>;
pub type Handler = Box<dyn FnMut(&Event)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Submit,
    MouseMove,
    MouseEnter,
    MouseLeave,
    FocusIn,
    FocusOut,
    Scroll,
}

impl EventKind {
    pub fn name(self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::Submit => "submit",
            EventKind::MouseMove => "mousemove",
            EventKind::MouseEnter => "mouseenter",
            EventKind::MouseLeave => "mouseleave",
            EventKind::FocusIn => "focusin",
            EventKind::FocusOut => "focusout",
            EventKind::Scroll => "scroll",
        }
    }
}

/// What a handler gets to see of a dispatched event.
#[derive(Debug, Default)]
pub struct Event {
    pointer: Option<(f64, f64)>,
    prevented: Cell<bool>,
}

impl Event {
    pub fn new() -> Self {
        Self::default()
    }

    /// An event carrying the pointer's viewport coordinates.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            pointer: Some((x, y)),
            prevented: Cell::new(false),
        }
    }

    pub fn pointer(&self) -> Option<(f64, f64)> {
        self.pointer
    }

    pub fn prevent_default(&self) {
        self.prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.prevented.get()
    }
}

/// Viewport-relative box of a node.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Keeps a listener, timer, frame loop or observer alive.
///
/// Dropping the guard detaches whatever it holds.
pub struct Guard(Option<Box<dyn FnOnce()>>);

impl Guard {
    pub fn on_drop(release: impl FnOnce() + 'static) -> Self {
        Guard(Some(Box::new(release)))
    }

    /// Ties the lifetime of `value` to the guard.
    pub fn hold<T: 'static>(value: T) -> Self {
        Guard::on_drop(move || drop(value))
    }

    pub fn noop() -> Self {
        Guard(None)
    }
}

impl Drop for Guard {
    fn drop(&mut self) {
        if let Some(release) = self.0.take() {
            release();
        }
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Guard").field(&self.0.is_some()).finish()
    }
}

/// A single element of the page.
pub trait Node {
    fn attr(&self, name: &str) -> Option<String>;
    fn set_attr(&self, name: &str, value: &str) -> Result<(), FxError>;

    fn has_class(&self, class: &str) -> bool;
    fn toggle_class(&self, class: &str, on: bool);

    fn text(&self) -> String;
    fn set_text(&self, text: &str);

    fn set_style(&self, property: &str, value: &str) -> Result<(), FxError>;
    fn remove_style(&self, property: &str) -> Result<(), FxError>;

    fn bounds(&self) -> Rect;
    /// Smoothly scrolls the node to the top of the viewport.
    fn scroll_into_view(&self);
    fn click(&self);

    /// Current value of a text input or textarea, `None` for anything else.
    fn value(&self) -> Option<String>;
    /// Constraint validation of a form. Non-forms are always valid.
    fn check_validity(&self) -> bool;
    fn reset(&self);

    fn listen(&self, kind: EventKind, handler: Handler) -> Guard;
}

/// The document plus the window-level services the behaviors need.
pub trait Page {
    fn find(&self, selector: &str) -> Option<NodeHandle>;
    /// All matches in document order.
    fn find_all(&self, selector: &str) -> Vec<NodeHandle>;

    fn scroll_y(&self) -> f64;
    /// Window-level listener. Scroll listeners are registered passive.
    fn listen(&self, kind: EventKind, handler: Handler) -> Guard;

    /// Repeating timer, cancelled when the guard drops.
    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Guard;

    /// Monotonic milliseconds on the same clock as frame timestamps.
    fn now(&self) -> f64;
    /// Calls `step` once per paint frame with the frame timestamp until it
    /// returns `false` or the guard drops.
    fn frames(&self, step: Box<dyn FnMut(f64) -> bool>) -> Guard;

    /// Reports the position (in [`Page::find_all`] order) of every node
    /// matching `selector` each time it becomes at least `threshold` visible.
    fn on_visible(
        &self,
        selector: &str,
        threshold: f64,
        handler: Box<dyn FnMut(usize)>,
    ) -> Result<Guard, FxError>;
}
