//! Scroll-into-view reveals: number counters and progress bars.
//!
//! Each observed element fires at most once. Positions come from
//! [`Page::find_all`] order, so the seen-tracking is a plain flag per slot.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, info, warn};

use crate::config::Config;
use crate::page::{Guard, NodeHandle, Page};

pub const COUNTER_SELECTOR: &str = ".counter";
pub const PROGRESS_SELECTOR: &str = ".progress-bar[data-progress]";

/// One "has fired" flag per observed element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnceFlags(Vec<bool>);

impl OnceFlags {
    pub fn new(len: usize) -> Self {
        Self(vec![false; len])
    }

    /// `true` only the first time `index` is seen. Out of range is never new.
    pub fn fire(&mut self, index: usize) -> bool {
        match self.0.get_mut(index) {
            Some(seen) if !*seen => {
                *seen = true;
                true
            }
            _ => false,
        }
    }
}

/// Numeric data attribute. Missing, blank or garbage counts as zero.
pub fn parse_number(raw: Option<&str>) -> f64 {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

pub fn clamp_percent(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

pub fn ease_out_cubic(p: f64) -> f64 {
    1.0 - (1.0 - p).powi(3)
}

/// Displayed counter value `elapsed` ms into a `duration` ms run.
pub fn counter_frame(target: f64, elapsed: f64, duration: f64) -> (i64, bool) {
    let p = (elapsed / duration).clamp(0.0, 1.0);
    // Halves round up, negative targets included
    let value = (target * ease_out_cubic(p) + 0.5).floor() as i64;
    (value, p >= 1.0)
}

fn animate_counter(page: &dyn Page, node: NodeHandle, target: f64, duration: f64) -> Guard {
    let started = page.now();
    page.frames(Box::new(move |now| {
        let (value, done) = counter_frame(target, now - started, duration);
        node.set_text(&value.to_string());
        !done
    }))
}

struct Counters {
    page: Weak<dyn Page>,
    nodes: Vec<NodeHandle>,
    targets: Vec<f64>,
    seen: RefCell<OnceFlags>,
    runs: RefCell<Vec<Guard>>,
    duration: f64,
}

impl Counters {
    fn reveal(&self, index: usize) {
        if !self.seen.borrow_mut().fire(index) {
            return;
        }
        let (Some(page), Some(node)) = (self.page.upgrade(), self.nodes.get(index)) else {
            return;
        };
        let run = animate_counter(page.as_ref(), node.clone(), self.targets[index], self.duration);
        self.runs.borrow_mut().push(run);
    }
}

pub fn mount_counters(page: &Rc<dyn Page>, config: &Config) -> Option<Guard> {
    let nodes = page.find_all(COUNTER_SELECTOR);
    if nodes.is_empty() {
        debug!("No counters on the page");
        return None;
    }
    let targets = nodes
        .iter()
        .map(|n| parse_number(n.attr("data-target").as_deref()))
        .collect();
    let count = nodes.len();
    let counters = Rc::new(Counters {
        page: Rc::downgrade(page),
        seen: RefCell::new(OnceFlags::new(count)),
        nodes,
        targets,
        runs: RefCell::new(Vec::new()),
        duration: config.counter_duration(),
    });

    let observed = counters.clone();
    match page.on_visible(
        COUNTER_SELECTOR,
        config.counter_visibility,
        Box::new(move |index| observed.reveal(index)),
    ) {
        Ok(observer) => {
            info!("Observing {} counters", count);
            Some(Guard::on_drop(move || {
                drop(observer);
                counters.runs.borrow_mut().clear();
            }))
        }
        Err(err) => {
            warn!("Counters disabled: {}", err);
            None
        }
    }
}

pub fn mount_progress(page: &Rc<dyn Page>, config: &Config) -> Option<Guard> {
    let bars = page.find_all(PROGRESS_SELECTOR);
    if bars.is_empty() {
        debug!("No progress bars on the page");
        return None;
    }
    let widths: Vec<f64> = bars
        .iter()
        .map(|b| clamp_percent(parse_number(b.attr("data-progress").as_deref())))
        .collect();
    let mut seen = OnceFlags::new(bars.len());
    let count = bars.len();

    let observer = page.on_visible(
        PROGRESS_SELECTOR,
        config.progress_visibility,
        Box::new(move |index| {
            if !seen.fire(index) {
                return;
            }
            if let Err(err) = bars[index].set_style("width", &format!("{}%", widths[index])) {
                warn!("Could not size progress bar {}: {}", index, err);
            }
        }),
    );
    match observer {
        Ok(observer) => {
            info!("Observing {} progress bars", count);
            Some(observer)
        }
        Err(err) => {
            warn!("Progress bars disabled: {}", err);
            None
        }
    }
}
