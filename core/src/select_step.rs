#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelStep {
    Up,
    Down,
}

impl WheelStep {
    /// Negative `deltaY` scrolls up. Zero counts as down.
    pub fn from_delta_y(delta_y: f64) -> Self {
        if delta_y < 0.0 {
            WheelStep::Up
        } else {
            WheelStep::Down
        }
    }

    pub fn offset(self) -> i64 {
        match self {
            WheelStep::Up => 1,
            WheelStep::Down => -1,
        }
    }
}

/// Index the select should move to, or `None` when the selection stays put.
///
/// `current` is the DOM `selectedIndex`, so `-1` means nothing is selected.
pub fn next_selected_index(current: i32, option_count: u32, step: WheelStep) -> Option<u32> {
    if option_count == 0 {
        return None;
    }
    let last = i64::from(option_count) - 1;
    let target = (i64::from(current) + step.offset()).clamp(0, last);
    if target == i64::from(current) {
        return None;
    }
    u32::try_from(target).ok()
}
