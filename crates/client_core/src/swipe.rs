//! Gesture-to-animation mapping for the swipeable card stack.
//!
//! The controller is a pure state machine: the GUI feeds it gesture phases
//! and a per-frame `tick`, and it answers with the current card transform
//! plus at most one [`SwipeEvent`] per settled animation. The candidate
//! index mutates strictly after the exit animation settles, never before,
//! and exactly once per commit — gestures arriving mid-exit are dropped so
//! a rapid second fling can neither double-advance nor skip a card.
//!
//! The screen owns the controller; dropping the screen drops any in-flight
//! animation with it, so no settle work can run after disposal.

use tracing::debug;

/// Commit distance as a fraction of the viewport width.
pub const DEFAULT_THRESHOLD_FRACTION: f32 = 0.3;
/// Rotation applied at a full viewport-width of horizontal offset.
pub const MAX_ROTATION_DEGREES: f32 = 15.0;

const EXIT_STIFFNESS: f32 = 200.0;
const EXIT_DAMPING: f32 = 20.0;
const RETURN_STIFFNESS: f32 = 100.0;
const RETURN_DAMPING: f32 = 10.0;

// Springs become unstable if fed a huge dt after the window was hidden.
const MAX_TICK_DT: f32 = 1.0 / 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Begin,
    Active,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    pub fn delta(self) -> isize {
        match self {
            SwipeDirection::Left => -1,
            SwipeDirection::Right => 1,
        }
    }

    fn from_dx(dx: f32) -> Self {
        if dx < 0.0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        }
    }
}

/// Outcome of a settled animation, reported exactly once from [`SwipeController::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeEvent {
    Committed {
        direction: SwipeDirection,
        new_index: usize,
    },
    Cancelled,
}

/// Damped spring toward a fixed target, advanced with semi-implicit Euler.
#[derive(Debug, Clone, Copy)]
struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
    stiffness: f32,
    damping: f32,
    rest_delta: f32,
    rest_speed: f32,
}

impl Spring {
    fn new(value: f32, target: f32, stiffness: f32, damping: f32, rest_delta: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target,
            stiffness,
            damping,
            rest_delta,
            rest_speed: rest_delta * 10.0,
        }
    }

    fn step(&mut self, dt: f32) {
        let acceleration =
            self.stiffness * (self.target - self.value) - self.damping * self.velocity;
        self.velocity += acceleration * dt;
        self.value += self.velocity * dt;
    }

    fn is_settled(&self) -> bool {
        (self.target - self.value).abs() <= self.rest_delta
            && self.velocity.abs() <= self.rest_speed
    }

    fn snap(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
    }
}

enum Phase {
    Resting,
    Dragging,
    Exiting {
        direction: SwipeDirection,
        x: Spring,
        fade: Spring,
    },
    Returning {
        x: Spring,
        y: Spring,
    },
}

/// Translates a continuous drag into either a cancelled return-to-center or
/// a committed dismissal that advances the candidate index cyclically.
pub struct SwipeController {
    deck_len: usize,
    viewport_width: f32,
    threshold: f32,
    current_index: usize,
    offset_x: f32,
    offset_y: f32,
    opacity: f32,
    phase: Phase,
}

impl SwipeController {
    /// Precondition: `deck_len > 0` and `viewport_width > 0` — a zero-length
    /// deck has nothing to swipe and is a caller bug, not a runtime error.
    pub fn new(deck_len: usize, viewport_width: f32) -> Self {
        assert!(deck_len > 0, "swipe controller requires a non-empty deck");
        assert!(viewport_width > 0.0, "viewport width must be positive");
        Self {
            deck_len,
            viewport_width,
            threshold: viewport_width * DEFAULT_THRESHOLD_FRACTION,
            current_index: 0,
            offset_x: 0.0,
            offset_y: 0.0,
            opacity: 1.0,
            phase: Phase::Resting,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn offset(&self) -> (f32, f32) {
        (self.offset_x, self.offset_y)
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Exiting { .. } | Phase::Returning { .. })
    }

    /// Derived visual rotation: linear over `[-w, 0, +w] -> [-15, 0, +15]`
    /// degrees, clamped at the extremes rather than extrapolated.
    pub fn rotation_degrees(&self) -> f32 {
        (self.offset_x / self.viewport_width).clamp(-1.0, 1.0) * MAX_ROTATION_DEGREES
    }

    /// The window was resized; commit distance scales with the new width.
    pub fn set_viewport_width(&mut self, viewport_width: f32) {
        if viewport_width > 0.0 && viewport_width != self.viewport_width {
            self.viewport_width = viewport_width;
            self.threshold = viewport_width * DEFAULT_THRESHOLD_FRACTION;
        }
    }

    /// Feeds one gesture update. `(dx, dy)` is the translation relative to
    /// gesture start; `Active` tracks it 1:1 with no smoothing. While an exit
    /// animation is in flight all gesture input is dropped.
    pub fn handle_gesture(&mut self, gesture: GesturePhase, dx: f32, dy: f32) {
        if let Phase::Exiting { .. } = self.phase {
            debug!(?gesture, "gesture ignored while card exit is in flight");
            return;
        }

        match gesture {
            // A new gesture may take over a return animation mid-flight.
            GesturePhase::Begin | GesturePhase::Active => {
                self.phase = Phase::Dragging;
                self.offset_x = dx;
                self.offset_y = dy;
            }
            GesturePhase::End => {
                if !matches!(self.phase, Phase::Dragging) {
                    return;
                }
                if dx.abs() > self.threshold {
                    self.begin_exit(SwipeDirection::from_dx(dx));
                } else {
                    self.begin_return();
                }
            }
        }
    }

    /// Programmatic commit (the on-screen arrow buttons). Same exit
    /// animation and deferred index advance as a threshold-exceeding drag.
    pub fn swipe(&mut self, direction: SwipeDirection) {
        if let Phase::Exiting { .. } = self.phase {
            debug!("programmatic swipe ignored while card exit is in flight");
            return;
        }
        self.begin_exit(direction);
    }

    /// Advances animations by `dt` seconds. Returns the settle outcome at
    /// most once per gesture: the committed index advance happens here,
    /// strictly after the exit animation has visually completed.
    pub fn tick(&mut self, dt: f32) -> Option<SwipeEvent> {
        let dt = dt.clamp(0.0, MAX_TICK_DT);
        match &mut self.phase {
            Phase::Resting | Phase::Dragging => None,
            Phase::Exiting { direction, x, fade } => {
                x.step(dt);
                fade.step(dt);
                self.offset_x = x.value;
                self.opacity = fade.value.clamp(0.0, 1.0);
                if x.is_settled() && fade.is_settled() {
                    let direction = *direction;
                    self.current_index = wrap_index(self.current_index, direction, self.deck_len);
                    self.offset_x = 0.0;
                    self.offset_y = 0.0;
                    self.opacity = 1.0;
                    self.phase = Phase::Resting;
                    debug!(new_index = self.current_index, "swipe committed");
                    Some(SwipeEvent::Committed {
                        direction,
                        new_index: self.current_index,
                    })
                } else {
                    None
                }
            }
            Phase::Returning { x, y } => {
                x.step(dt);
                y.step(dt);
                self.offset_x = x.value;
                self.offset_y = y.value;
                if x.is_settled() && y.is_settled() {
                    x.snap();
                    y.snap();
                    self.offset_x = 0.0;
                    self.offset_y = 0.0;
                    self.phase = Phase::Resting;
                    Some(SwipeEvent::Cancelled)
                } else {
                    None
                }
            }
        }
    }

    fn begin_exit(&mut self, direction: SwipeDirection) {
        // The vertical offset stays wherever the drag left it until the
        // post-settle reset; only x and opacity animate out.
        let target_x = direction.delta() as f32 * self.viewport_width;
        self.phase = Phase::Exiting {
            direction,
            x: Spring::new(self.offset_x, target_x, EXIT_STIFFNESS, EXIT_DAMPING, 0.5),
            fade: Spring::new(self.opacity, 0.0, EXIT_STIFFNESS, EXIT_DAMPING, 0.005),
        };
    }

    fn begin_return(&mut self) {
        self.phase = Phase::Returning {
            x: Spring::new(self.offset_x, 0.0, RETURN_STIFFNESS, RETURN_DAMPING, 0.5),
            y: Spring::new(self.offset_y, 0.0, RETURN_STIFFNESS, RETURN_DAMPING, 0.5),
        };
    }
}

fn wrap_index(index: usize, direction: SwipeDirection, len: usize) -> usize {
    (index as isize + direction.delta() + len as isize) as usize % len
}

#[cfg(test)]
#[path = "tests/swipe_tests.rs"]
mod tests;
