use log::{info, warn};

use crate::page::{EventKind, Guard, NodeHandle, Page, Rect};

pub const GLOW_SELECTOR: &str = ".btn-glow";

const X_VAR: &str = "--mx";
const Y_VAR: &str = "--my";

/// Pointer position inside `rect` as percentages of its width and height.
/// `None` for a collapsed box.
pub fn relative_position(rect: Rect, x: f64, y: f64) -> Option<(f64, f64)> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    Some((
        (x - rect.left) / rect.width * 100.0,
        (y - rect.top) / rect.height * 100.0,
    ))
}

pub fn css_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

fn track(button: NodeHandle) -> [Guard; 2] {
    let target = button.clone();
    let moved = button.listen(
        EventKind::MouseMove,
        Box::new(move |event| {
            let Some((x, y)) = event.pointer() else {
                return;
            };
            let Some((px, py)) = relative_position(target.bounds(), x, y) else {
                return;
            };
            let result = target
                .set_style(X_VAR, &css_percent(px))
                .and_then(|_| target.set_style(Y_VAR, &css_percent(py)));
            if let Err(err) = result {
                warn!("Glow position not applied: {}", err);
            }
        }),
    );

    let target = button.clone();
    let left = button.listen(
        EventKind::MouseLeave,
        Box::new(move |_| {
            for var in [X_VAR, Y_VAR] {
                if let Err(err) = target.remove_style(var) {
                    warn!("Glow variable {} not cleared: {}", var, err);
                }
            }
        }),
    );

    [moved, left]
}

/// Exposes the pointer position over each glow button as `--mx` / `--my`.
pub fn mount(page: &dyn Page) -> Vec<Guard> {
    let guards: Vec<Guard> = page
        .find_all(GLOW_SELECTOR)
        .into_iter()
        .flat_map(track)
        .collect();
    info!("Glow tracking wired for {} buttons", guards.len() / 2);
    guards
}
