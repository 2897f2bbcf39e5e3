use ogi_web_core::{next_selected_index, WheelStep};

const OPTIONS: u32 = 3;

#[test]
fn wheel_up_moves_selection_forward() {
    let step = WheelStep::from_delta_y(-100.0);
    assert_eq!(next_selected_index(1, OPTIONS, step), Some(2));
}

#[test]
fn wheel_down_moves_selection_back() {
    let step = WheelStep::from_delta_y(100.0);
    assert_eq!(next_selected_index(2, OPTIONS, step), Some(1));
}

#[test]
fn lower_bound_is_a_no_op() {
    assert_eq!(next_selected_index(0, OPTIONS, WheelStep::Down), None);
}

#[test]
fn upper_bound_is_a_no_op() {
    assert_eq!(next_selected_index(2, OPTIONS, WheelStep::Up), None);
}

#[test]
fn repeated_ticks_walk_to_the_end_and_stop() {
    let mut index = 0i32;
    let mut changes = 0;
    for _ in 0..10 {
        if let Some(next) = next_selected_index(index, OPTIONS, WheelStep::Up) {
            index = next as i32;
            changes += 1;
        }
    }
    assert_eq!(index, 2);
    assert_eq!(changes, 2);
}
