//! Browser backend for [`Page`] and [`Node`], built on web-sys.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    AddEventListenerOptions, EventTarget, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use crate::error::FxError;
use crate::page::{Event, EventKind, Guard, Handler, Node, NodeHandle, Page, Rect};

fn attach(target: &EventTarget, kind: EventKind, mut handler: Handler) -> Guard {
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        let fx = match event.dyn_ref::<MouseEvent>() {
            Some(mouse) => Event::at(mouse.client_x() as f64, mouse.client_y() as f64),
            None => Event::new(),
        };
        handler(&fx);
        if fx.default_prevented() {
            event.prevent_default();
        }
    });

    let options = AddEventListenerOptions::new();
    options.set_passive(kind == EventKind::Scroll);
    if let Err(err) = target.add_event_listener_with_callback_and_add_event_listener_options(
        kind.name(),
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        warn!("Could not listen for {}: {}", kind.name(), FxError::from(err));
        return Guard::noop();
    }

    let target = target.clone();
    Guard::on_drop(move || {
        let _ = target.remove_event_listener_with_callback(
            kind.name(),
            callback.as_ref().unchecked_ref(),
        );
    })
}

pub struct WebNode {
    element: HtmlElement,
}

impl WebNode {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl Node for WebNode {
    fn attr(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }

    fn set_attr(&self, name: &str, value: &str) -> Result<(), FxError> {
        Ok(self.element.set_attribute(name, value)?)
    }

    fn has_class(&self, class: &str) -> bool {
        self.element.class_list().contains(class)
    }

    fn toggle_class(&self, class: &str, on: bool) {
        let _ = self.element.class_list().toggle_with_force(class, on);
    }

    fn text(&self) -> String {
        self.element.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.element.set_text_content(Some(text));
    }

    fn set_style(&self, property: &str, value: &str) -> Result<(), FxError> {
        Ok(self.element.style().set_property(property, value)?)
    }

    fn remove_style(&self, property: &str) -> Result<(), FxError> {
        self.element.style().remove_property(property)?;
        Ok(())
    }

    fn bounds(&self) -> Rect {
        let rect = self.element.get_bounding_client_rect();
        Rect {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }

    fn scroll_into_view(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        self.element
            .scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn click(&self) {
        self.element.click();
    }

    fn value(&self) -> Option<String> {
        if let Some(input) = self.element.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        self.element
            .dyn_ref::<HtmlTextAreaElement>()
            .map(|area| area.value())
    }

    fn check_validity(&self) -> bool {
        self.element
            .dyn_ref::<HtmlFormElement>()
            .map_or(true, |form| form.check_validity())
    }

    fn reset(&self) {
        if let Some(form) = self.element.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }

    fn listen(&self, kind: EventKind, handler: Handler) -> Guard {
        attach(self.element.as_ref(), kind, handler)
    }
}

pub struct WebPage {
    window: web_sys::Window,
    document: web_sys::Document,
}

impl WebPage {
    pub fn new() -> Result<Self, FxError> {
        let window = web_sys::window().ok_or(FxError::NoWindow)?;
        let document = window.document().ok_or(FxError::NoWindow)?;
        Ok(Self { window, document })
    }

    // An href that is not a valid selector simply matches nothing.
    fn elements(&self, selector: &str) -> Vec<HtmlElement> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }
}

impl Page for WebPage {
    fn find(&self, selector: &str) -> Option<NodeHandle> {
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|el| Rc::new(WebNode::new(el)) as NodeHandle)
    }

    fn find_all(&self, selector: &str) -> Vec<NodeHandle> {
        self.elements(selector)
            .into_iter()
            .map(|el| Rc::new(WebNode::new(el)) as NodeHandle)
            .collect()
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn listen(&self, kind: EventKind, handler: Handler) -> Guard {
        attach(self.window.as_ref(), kind, handler)
    }

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Guard {
        Guard::hold(Interval::new(period_ms, tick))
    }

    fn now(&self) -> f64 {
        self.window
            .performance()
            .map(|perf| perf.now())
            .unwrap_or(0.0)
    }

    fn frames(&self, mut step: Box<dyn FnMut(f64) -> bool>) -> Guard {
        type Frame = Closure<dyn FnMut(f64)>;

        let slot: Rc<RefCell<Option<Frame>>> = Rc::new(RefCell::new(None));
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let request = {
            let window = self.window.clone();
            let pending = pending.clone();
            move |frame: &Frame| match window.request_animation_frame(frame.as_ref().unchecked_ref()) {
                Ok(id) => pending.set(Some(id)),
                Err(err) => {
                    pending.set(None);
                    warn!("Animation frame refused: {}", FxError::from(err));
                }
            }
        };

        {
            let slot_inner = slot.clone();
            let request = request.clone();
            *slot.borrow_mut() = Some(Closure::new(move |now: f64| {
                if !step(now) {
                    // Breaks the self-reference so the closure can be freed.
                    let _ = slot_inner.borrow_mut().take();
                    return;
                }
                if let Some(frame) = slot_inner.borrow().as_ref() {
                    request(frame);
                }
            }));
        }
        if let Some(frame) = slot.borrow().as_ref() {
            request(frame);
        }

        let window = self.window.clone();
        Guard::on_drop(move || {
            if let Some(id) = pending.take() {
                let _ = window.cancel_animation_frame(id);
            }
            let _ = slot.borrow_mut().take();
        })
    }

    fn on_visible(
        &self,
        selector: &str,
        threshold: f64,
        mut handler: Box<dyn FnMut(usize)>,
    ) -> Result<Guard, FxError> {
        let elements = self.elements(selector);
        let targets: Vec<web_sys::Element> = elements.iter().map(|el| el.clone().into()).collect();

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if let Some(index) = targets.iter().position(|el| *el == target) {
                        handler(index);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for element in &elements {
            observer.observe(element);
        }

        Ok(Guard::on_drop(move || {
            observer.disconnect();
            drop(callback);
        }))
    }
}
