//! Kinetic auto-scroll while an item is dragged near the list edges.

use crate::types::{ContainerMetrics, DragSettings, ScrollDirection, ScrollState};

/// Edge falloff curve: 1 at (or past) the edge, 0 at `threshold` and beyond
pub fn edge_factor(distance: f64, threshold: f64, exponent: f64) -> f64 {
    if distance >= threshold {
        return 0.0;
    }
    (1.0 - distance / threshold).clamp(0.0, 1.0).powf(exponent)
}

/// Re-aim the scroll from the latest pointer position
///
/// The top zone wins when the container is shorter than two thresholds.
pub fn handle_pointer_near_edges(
    state: &mut ScrollState,
    container: &ContainerMetrics,
    pointer_y: f64,
    now_ms: f64,
    settings: &DragSettings,
) {
    let distance_from_top = pointer_y - container.top;
    let distance_from_bottom = container.bottom - pointer_y;
    let threshold = settings.scroll_threshold_px;

    let (direction, speed) = if distance_from_top < threshold {
        let factor = edge_factor(distance_from_top, threshold, settings.scroll_acceleration);
        (ScrollDirection::Up, -settings.scroll_base_speed * factor)
    } else if distance_from_bottom < threshold {
        let factor = edge_factor(distance_from_bottom, threshold, settings.scroll_acceleration);
        (ScrollDirection::Down, settings.scroll_base_speed * factor)
    } else {
        (ScrollDirection::None, 0.0)
    };

    if direction == ScrollDirection::None || speed == 0.0 {
        if state.active {
            log::debug!("auto-scroll stopped: pointer left the edge zones");
        }
        state.stop();
        return;
    }

    if !state.active {
        log::debug!("auto-scroll started {direction:?}");
        state.last_tick_ms = Some(now_ms);
    }
    state.active = true;
    state.direction = direction;
    state.speed = speed;
}

/// Advance the scroll position by one timer tick
///
/// The step is scaled by the time since the previous tick so the speed does not
/// depend on the timer cadence.
pub fn tick(
    state: &mut ScrollState,
    container: &ContainerMetrics,
    now_ms: f64,
    settings: &DragSettings,
) {
    if !state.active {
        return;
    }

    let elapsed = state
        .last_tick_ms
        .map_or(0.0, |last| (now_ms - last).max(0.0));
    state.last_tick_ms = Some(now_ms);

    let max = container.max_scroll_top();
    let next = (container.scroll_top + state.speed * (elapsed / settings.ideal_frame_ms))
        .clamp(0.0, max);
    state.scroll_to = Some(next);

    let reached_boundary = match state.direction {
        ScrollDirection::Up => next <= 0.0,
        ScrollDirection::Down => next >= max,
        ScrollDirection::None => true,
    };
    if reached_boundary {
        log::debug!("auto-scroll stopped at scroll boundary {next}");
        state.stop();
    }
}
