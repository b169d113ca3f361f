use super::*;

const WIDTH: f32 = 400.0;
const DT: f32 = 1.0 / 60.0;
// Ample headroom over the spring settle time at 60 ticks/sec.
const MAX_TICKS: usize = 1200;

fn controller(deck_len: usize) -> SwipeController {
    SwipeController::new(deck_len, WIDTH)
}

fn drag(controller: &mut SwipeController, dx: f32, dy: f32) {
    controller.handle_gesture(GesturePhase::Begin, 0.0, 0.0);
    controller.handle_gesture(GesturePhase::Active, dx / 2.0, dy / 2.0);
    controller.handle_gesture(GesturePhase::Active, dx, dy);
    controller.handle_gesture(GesturePhase::End, dx, dy);
}

fn settle(controller: &mut SwipeController) -> SwipeEvent {
    for _ in 0..MAX_TICKS {
        if let Some(event) = controller.tick(DT) {
            return event;
        }
    }
    panic!("animation did not settle within {MAX_TICKS} ticks");
}

#[test]
fn active_gesture_tracks_translation_one_to_one() {
    let mut c = controller(3);
    c.handle_gesture(GesturePhase::Begin, 0.0, 0.0);
    c.handle_gesture(GesturePhase::Active, 42.0, -13.0);
    assert_eq!(c.offset(), (42.0, -13.0));
    assert_eq!(c.opacity(), 1.0);
}

#[test]
fn below_threshold_release_returns_to_center_without_advancing() {
    let mut c = controller(3);
    let t = c.threshold();
    drag(&mut c, t * 0.9, 25.0);

    assert_eq!(settle(&mut c), SwipeEvent::Cancelled);
    assert_eq!(c.current_index(), 0);
    let (x, y) = c.offset();
    assert_eq!((x, y), (0.0, 0.0));
    assert_eq!(c.opacity(), 1.0);
}

#[test]
fn release_exactly_at_threshold_cancels() {
    let mut c = controller(3);
    let t = c.threshold();
    drag(&mut c, t, 0.0);

    assert_eq!(settle(&mut c), SwipeEvent::Cancelled);
    assert_eq!(c.current_index(), 0);
}

#[test]
fn above_threshold_release_commits_right() {
    let mut c = controller(3);
    let t = c.threshold();
    drag(&mut c, t * 1.2, 10.0);

    let event = settle(&mut c);
    assert_eq!(
        event,
        SwipeEvent::Committed {
            direction: SwipeDirection::Right,
            new_index: 1,
        }
    );
    assert_eq!(c.current_index(), 1);
    assert_eq!(c.offset(), (0.0, 0.0));
    assert_eq!(c.opacity(), 1.0);
}

#[test]
fn leftward_commit_wraps_to_last_candidate() {
    let mut c = controller(3);
    let t = c.threshold();
    drag(&mut c, -t * 1.5, 0.0);

    let event = settle(&mut c);
    assert_eq!(
        event,
        SwipeEvent::Committed {
            direction: SwipeDirection::Left,
            new_index: 2,
        }
    );
    assert_eq!(c.current_index(), 2);
}

#[test]
fn three_rightward_commits_walk_the_deck_and_wrap() {
    let mut c = controller(3);
    for expected in [1, 2, 0] {
        drag(&mut c, WIDTH * 0.5, 0.0);
        let event = settle(&mut c);
        assert_eq!(
            event,
            SwipeEvent::Committed {
                direction: SwipeDirection::Right,
                new_index: expected,
            }
        );
        assert_eq!(c.current_index(), expected);
    }
}

#[test]
fn index_advance_is_deferred_until_exit_settles() {
    let mut c = controller(3);
    drag(&mut c, WIDTH * 0.5, 0.0);

    // A handful of frames into the exit the index must not have moved yet.
    for _ in 0..5 {
        assert_eq!(c.tick(DT), None);
        assert_eq!(c.current_index(), 0);
        assert!(c.is_animating());
    }
    assert_eq!(
        settle(&mut c),
        SwipeEvent::Committed {
            direction: SwipeDirection::Right,
            new_index: 1,
        }
    );
}

#[test]
fn gestures_during_exit_are_ignored_so_commit_happens_once() {
    let mut c = controller(3);
    drag(&mut c, WIDTH * 0.5, 0.0);
    assert!(c.is_animating());

    // Rapid second fling before the first settles.
    drag(&mut c, WIDTH * 0.6, 0.0);
    c.swipe(SwipeDirection::Right);

    let mut events = Vec::new();
    for _ in 0..MAX_TICKS {
        if let Some(event) = c.tick(DT) {
            events.push(event);
        }
    }
    assert_eq!(
        events,
        vec![SwipeEvent::Committed {
            direction: SwipeDirection::Right,
            new_index: 1,
        }]
    );
    assert_eq!(c.current_index(), 1);
}

#[test]
fn programmatic_swipe_matches_a_threshold_exceeding_drag() {
    let mut by_button = controller(3);
    by_button.swipe(SwipeDirection::Right);
    assert!(by_button.is_animating());
    assert_eq!(by_button.current_index(), 0);

    let mut by_drag = controller(3);
    drag(&mut by_drag, WIDTH * 0.9, 0.0);

    let button_event = settle(&mut by_button);
    let drag_event = settle(&mut by_drag);
    assert_eq!(
        button_event,
        SwipeEvent::Committed {
            direction: SwipeDirection::Right,
            new_index: 1,
        }
    );
    assert_eq!(button_event, drag_event);
    assert_eq!(by_button.current_index(), by_drag.current_index());
    assert_eq!(by_button.offset(), by_drag.offset());
}

#[test]
fn new_gesture_may_take_over_a_return_animation() {
    let mut c = controller(3);
    let t = c.threshold();
    drag(&mut c, t * 0.5, 0.0);
    assert_eq!(c.tick(DT), None);
    assert!(c.is_animating());

    // Grabbing the card mid-return goes straight back to 1:1 tracking.
    c.handle_gesture(GesturePhase::Begin, 0.0, 0.0);
    c.handle_gesture(GesturePhase::Active, 12.0, 3.0);
    assert!(!c.is_animating());
    assert_eq!(c.offset(), (12.0, 3.0));
}

#[test]
fn rotation_maps_linearly_and_clamps_at_the_extremes() {
    let mut c = controller(3);
    assert_eq!(c.rotation_degrees(), 0.0);

    c.handle_gesture(GesturePhase::Begin, 0.0, 0.0);
    c.handle_gesture(GesturePhase::Active, WIDTH, 0.0);
    assert_eq!(c.rotation_degrees(), 15.0);

    c.handle_gesture(GesturePhase::Active, -WIDTH, 0.0);
    assert_eq!(c.rotation_degrees(), -15.0);

    c.handle_gesture(GesturePhase::Active, WIDTH / 2.0, 0.0);
    assert_eq!(c.rotation_degrees(), 7.5);

    // Beyond the viewport width the rotation clamps, never extrapolates.
    c.handle_gesture(GesturePhase::Active, WIDTH * 3.0, 0.0);
    assert_eq!(c.rotation_degrees(), 15.0);
    c.handle_gesture(GesturePhase::Active, -WIDTH * 3.0, 0.0);
    assert_eq!(c.rotation_degrees(), -15.0);
}

#[test]
fn rotation_is_monotonic_across_the_tracked_range() {
    let mut c = controller(3);
    c.handle_gesture(GesturePhase::Begin, 0.0, 0.0);
    let mut last = f32::NEG_INFINITY;
    let mut dx = -WIDTH;
    while dx <= WIDTH {
        c.handle_gesture(GesturePhase::Active, dx, 0.0);
        let rotation = c.rotation_degrees();
        assert!(rotation >= last, "rotation regressed at dx={dx}");
        last = rotation;
        dx += 25.0;
    }
}

#[test]
fn single_candidate_deck_commits_back_onto_itself() {
    let mut c = controller(1);
    c.swipe(SwipeDirection::Right);
    assert_eq!(
        settle(&mut c),
        SwipeEvent::Committed {
            direction: SwipeDirection::Right,
            new_index: 0,
        }
    );
}

#[test]
fn stray_end_without_a_drag_is_ignored() {
    let mut c = controller(3);
    c.handle_gesture(GesturePhase::End, WIDTH, 0.0);
    assert!(!c.is_animating());
    assert_eq!(c.current_index(), 0);
}

#[test]
#[should_panic(expected = "non-empty deck")]
fn empty_deck_is_a_precondition_violation() {
    let _ = SwipeController::new(0, WIDTH);
}

#[test]
fn resize_rescales_the_commit_threshold() {
    let mut c = controller(3);
    assert_eq!(c.threshold(), WIDTH * 0.3);
    c.set_viewport_width(1000.0);
    assert!((c.threshold() - 300.0).abs() < 0.01);
}
