//! In-memory page used by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use super::{Event, EventKind, Guard, Handler, Node, NodeHandle, Page, Rect};
use crate::error::FxError;

struct Entry<T> {
    id: usize,
    value: Option<T>,
}

/// Registry whose entries may be invoked while other entries are added or
/// removed from inside the call.
struct Slots<T> {
    next: Cell<usize>,
    entries: RefCell<Vec<Entry<T>>>,
}

impl<T> Default for Slots<T> {
    fn default() -> Self {
        Self {
            next: Cell::new(0),
            entries: RefCell::new(Vec::new()),
        }
    }
}

impl<T: 'static> Slots<T> {
    fn insert(self: &Rc<Self>, value: T) -> Guard {
        let id = self.next.get();
        self.next.set(id + 1);
        self.entries.borrow_mut().push(Entry {
            id,
            value: Some(value),
        });
        let slots = Rc::downgrade(self);
        Guard::on_drop(move || {
            if let Some(slots) = slots.upgrade() {
                slots.remove(id);
            }
        })
    }

    fn remove(&self, id: usize) {
        let removed: Vec<Entry<T>> = {
            let mut entries = self.entries.borrow_mut();
            let (gone, kept) = entries.drain(..).partition(|e| e.id == id);
            *entries = kept;
            gone
        };
        drop(removed);
    }

    fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    fn ids_where(&self, pred: impl Fn(&T) -> bool) -> Vec<usize> {
        self.entries
            .borrow()
            .iter()
            .filter(|e| e.value.as_ref().map_or(false, &pred))
            .map(|e| e.id)
            .collect()
    }

    fn with<R>(&self, id: usize, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let mut value = self
            .entries
            .borrow_mut()
            .iter_mut()
            .find(|e| e.id == id)
            .and_then(|e| e.value.take())?;
        let out = f(&mut value);
        if let Some(entry) = self.entries.borrow_mut().iter_mut().find(|e| e.id == id) {
            entry.value = Some(value);
        }
        Some(out)
    }
}

fn dispatch(listeners: &Slots<(EventKind, Handler)>, kind: EventKind, event: &Event) {
    for id in listeners.ids_where(|(k, _)| *k == kind) {
        listeners.with(id, |(_, handler)| handler(event));
    }
}

#[derive(Default)]
pub(crate) struct FakeNode {
    attrs: RefCell<HashMap<String, String>>,
    classes: RefCell<BTreeSet<String>>,
    styles: RefCell<HashMap<String, String>>,
    text: RefCell<String>,
    bounds: Cell<Rect>,
    value: RefCell<Option<String>>,
    fields: RefCell<Vec<Rc<FakeNode>>>,
    scrolls: Cell<usize>,
    refused_styles: RefCell<BTreeSet<String>>,
    listeners: Rc<Slots<(EventKind, Handler)>>,
}

impl FakeNode {
    pub(crate) fn with_attr(self: Rc<Self>, name: &str, value: &str) -> Rc<Self> {
        self.attrs
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        self
    }

    pub(crate) fn with_bounds(self: Rc<Self>, bounds: Rect) -> Rc<Self> {
        self.bounds.set(bounds);
        self
    }

    pub(crate) fn with_text(self: Rc<Self>, text: &str) -> Rc<Self> {
        *self.text.borrow_mut() = text.to_string();
        self
    }

    /// Turns the node into a text input holding `value`.
    pub(crate) fn as_input(self: Rc<Self>, value: &str) -> Rc<Self> {
        *self.value.borrow_mut() = Some(value.to_string());
        self
    }

    /// Form controls validated and reset with this node.
    pub(crate) fn with_fields(self: Rc<Self>, fields: &[Rc<FakeNode>]) -> Rc<Self> {
        self.fields.borrow_mut().extend(fields.iter().cloned());
        self
    }

    /// Makes every later write or removal of `property` fail.
    pub(crate) fn refuse_style(&self, property: &str) {
        self.refused_styles.borrow_mut().insert(property.to_string());
    }

    fn check_style(&self, property: &str) -> Result<(), FxError> {
        if self.refused_styles.borrow().contains(property) {
            return Err(FxError::Js(format!("style {} rejected", property)));
        }
        Ok(())
    }

    pub(crate) fn set_value(&self, value: &str) {
        *self.value.borrow_mut() = Some(value.to_string());
    }

    pub(crate) fn style(&self, property: &str) -> Option<String> {
        self.styles.borrow().get(property).cloned()
    }

    pub(crate) fn scrolls(&self) -> usize {
        self.scrolls.get()
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Dispatches `kind` and reports whether a handler prevented the default.
    pub(crate) fn fire(&self, kind: EventKind, event: Event) -> bool {
        dispatch(&self.listeners, kind, &event);
        event.default_prevented()
    }
}

impl Node for FakeNode {
    fn attr(&self, name: &str) -> Option<String> {
        self.attrs.borrow().get(name).cloned()
    }

    fn set_attr(&self, name: &str, value: &str) -> Result<(), FxError> {
        self.attrs
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    fn toggle_class(&self, class: &str, on: bool) {
        let mut classes = self.classes.borrow_mut();
        if on {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    fn text(&self) -> String {
        self.text.borrow().clone()
    }

    fn set_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
    }

    fn set_style(&self, property: &str, value: &str) -> Result<(), FxError> {
        self.check_style(property)?;
        self.styles
            .borrow_mut()
            .insert(property.to_string(), value.to_string());
        Ok(())
    }

    fn remove_style(&self, property: &str) -> Result<(), FxError> {
        self.check_style(property)?;
        self.styles.borrow_mut().remove(property);
        Ok(())
    }

    fn bounds(&self) -> Rect {
        self.bounds.get()
    }

    fn scroll_into_view(&self) {
        self.scrolls.set(self.scrolls.get() + 1);
    }

    fn click(&self) {
        self.fire(EventKind::Click, Event::new());
    }

    fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    // Mirrors `required`: an empty value fails, whitespace passes.
    fn check_validity(&self) -> bool {
        self.fields.borrow().iter().all(|field| {
            field.attr("required").is_none() || !field.value().unwrap_or_default().is_empty()
        })
    }

    fn reset(&self) {
        for field in self.fields.borrow().iter() {
            field.set_value("");
        }
    }

    fn listen(&self, kind: EventKind, handler: Handler) -> Guard {
        self.listeners.insert((kind, handler))
    }
}

struct Observer {
    selector: String,
    threshold: f64,
    handler: Box<dyn FnMut(usize)>,
}

#[derive(Default)]
pub(crate) struct FakePage {
    nodes: RefCell<Vec<(Vec<String>, Rc<FakeNode>)>>,
    scroll_y: Cell<f64>,
    clock: Cell<f64>,
    listeners: Rc<Slots<(EventKind, Handler)>>,
    timers: Rc<Slots<(u32, Box<dyn FnMut()>)>>,
    frames: Rc<Slots<Box<dyn FnMut(f64) -> bool>>>,
    observers: Rc<Slots<Observer>>,
}

impl FakePage {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Adds a node matched by each of `selectors`, verbatim.
    pub(crate) fn add(&self, selectors: &[&str]) -> Rc<FakeNode> {
        let node = Rc::new(FakeNode::default());
        let selectors = selectors.iter().map(|s| s.to_string()).collect();
        self.nodes.borrow_mut().push((selectors, node.clone()));
        node
    }

    pub(crate) fn scroll_to(&self, y: f64) {
        self.scroll_y.set(y);
        dispatch(&self.listeners, EventKind::Scroll, &Event::new());
    }

    pub(crate) fn window_listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub(crate) fn live_timers(&self) -> usize {
        self.timers.len()
    }

    pub(crate) fn timer_periods(&self) -> Vec<u32> {
        let ids = self.timers.ids_where(|_| true);
        ids.into_iter()
            .filter_map(|id| self.timers.with(id, |(period, _)| *period))
            .collect()
    }

    /// Fires every live timer once.
    pub(crate) fn tick(&self) {
        for id in self.timers.ids_where(|_| true) {
            self.timers.with(id, |(_, tick)| tick());
        }
    }

    pub(crate) fn live_frame_loops(&self) -> usize {
        self.frames.len()
    }

    /// Moves the clock forward by `dt` and runs one paint frame.
    pub(crate) fn advance_frame(&self, dt: f64) {
        let now = self.clock.get() + dt;
        self.clock.set(now);
        for id in self.frames.ids_where(|_| true) {
            if self.frames.with(id, |step| step(now)) == Some(false) {
                self.frames.remove(id);
            }
        }
    }

    pub(crate) fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Reports the `index`-th match of `selector` as `ratio` visible.
    pub(crate) fn reveal(&self, selector: &str, index: usize, ratio: f64) {
        let ids = self
            .observers
            .ids_where(|o| o.selector == selector && ratio >= o.threshold);
        for id in ids {
            self.observers.with(id, |o| (o.handler)(index));
        }
    }
}

impl Page for FakePage {
    fn find(&self, selector: &str) -> Option<NodeHandle> {
        self.find_all(selector).into_iter().next()
    }

    fn find_all(&self, selector: &str) -> Vec<NodeHandle> {
        self.nodes
            .borrow()
            .iter()
            .filter(|(selectors, _)| selectors.iter().any(|s| s == selector))
            .map(|(_, node)| node.clone() as NodeHandle)
            .collect()
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn listen(&self, kind: EventKind, handler: Handler) -> Guard {
        self.listeners.insert((kind, handler))
    }

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Guard {
        self.timers.insert((period_ms, tick))
    }

    fn now(&self) -> f64 {
        self.clock.get()
    }

    fn frames(&self, step: Box<dyn FnMut(f64) -> bool>) -> Guard {
        self.frames.insert(step)
    }

    fn on_visible(
        &self,
        selector: &str,
        threshold: f64,
        handler: Box<dyn FnMut(usize)>,
    ) -> Result<Guard, FxError> {
        Ok(self.observers.insert(Observer {
            selector: selector.to_string(),
            threshold,
            handler,
        }))
    }
}
