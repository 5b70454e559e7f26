use log::debug;

use crate::geometry::Rect;

/// Linearly moves a rectangle from a start state to an end state, one step
/// per [`RectAnimator::update`] call.
///
/// Progress is counted in steps rather than wall-clock time; the caller
/// decides how often to tick.
#[derive(Debug, Clone, Default)]
pub struct RectAnimator {
    start: Rect,
    end: Rect,
    current: Rect,
    steps: u32,
    step: u32,
    active: bool,
}

impl RectAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the animator. `steps` below 1 is treated as 1.
    ///
    /// Can be called at any time, including mid-animation, to restart.
    pub fn start(&mut self, start: Rect, end: Rect, steps: u32) {
        self.start = start;
        self.end = end;
        self.current = start;
        self.steps = steps.max(1);
        self.step = 0;
        self.active = true;

        debug!("Animating {} -> {} over {} steps", start, end, self.steps);
    }

    /// Advance one step.
    ///
    /// Returns true while more steps remain. The final step lands exactly on
    /// the end rectangle, deactivates the animator and returns false; calls on
    /// an idle animator do nothing and also return false.
    pub fn update(&mut self) -> bool {
        if !self.active {
            return false;
        }

        self.step += 1;
        if self.step >= self.steps {
            self.step = self.steps;
            self.current = self.end;
            self.active = false;
            return false;
        }

        let t = f64::from(self.step) / f64::from(self.steps);
        self.current = Rect::new(
            lerp(self.start.left, self.end.left, t),
            lerp(self.start.top, self.end.top, t),
            lerp(self.start.right, self.end.right, t),
            lerp(self.start.bottom, self.end.bottom, t),
        );
        true
    }

    /// Stop without reaching the end. The current rectangle is kept.
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Fraction of steps completed, in `0.0..=1.0`
    pub fn progress(&self) -> f64 {
        if self.steps == 0 {
            return 1.0;
        }
        f64::from(self.step) / f64::from(self.steps)
    }

    pub fn is_animating(&self) -> bool {
        self.active
    }

    pub fn start_rect(&self) -> Rect {
        self.start
    }

    pub fn end_rect(&self) -> Rect {
        self.end
    }

    pub fn current(&self) -> Rect {
        self.current
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Drive the animation to completion, collecting the rectangle after
    /// every step (the last one is the end rectangle).
    pub fn run_to_end(&mut self) -> Vec<Rect> {
        let mut frames = Vec::new();
        while self.is_animating() {
            self.update();
            frames.push(self.current);
        }
        frames
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "interpolated value lies between two i32 values"
)]
fn lerp(from: i32, to: i32, t: f64) -> i32 {
    (f64::from(from) + (f64::from(to) - f64::from(from)) * t) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: Rect = Rect::new(0, 0, 10, 10);
    const END: Rect = Rect::new(100, 100, 110, 110);

    #[test]
    fn test_new_is_idle() {
        let mut animator = RectAnimator::new();
        assert!(!animator.is_animating());
        assert_eq!(animator.progress(), 1.0);
        assert!(!animator.update());
        assert_eq!(animator.current(), Rect::ZERO);
    }

    #[test]
    fn test_start_sets_current() {
        let mut animator = RectAnimator::new();
        animator.start(START, END, 10);
        assert!(animator.is_animating());
        assert_eq!(animator.current(), START);
        assert_eq!(animator.progress(), 0.0);
    }

    #[test]
    fn test_halfway_and_completion() {
        let mut animator = RectAnimator::new();
        animator.start(START, END, 10);

        for _ in 0..5 {
            assert!(animator.update());
        }
        assert_eq!(animator.current(), Rect::new(50, 50, 60, 60));
        assert_eq!(animator.progress(), 0.5);

        for _ in 0..4 {
            assert!(animator.update());
        }
        // Tenth call reaches the end
        assert!(!animator.update());
        assert_eq!(animator.current(), END);
        assert!(!animator.is_animating());
        assert_eq!(animator.progress(), 1.0);

        // Eleventh call is a no-op
        assert!(!animator.update());
        assert_eq!(animator.current(), END);
        assert_eq!(animator.step(), 10);
    }

    #[test]
    fn test_zero_steps_clamped() {
        let mut animator = RectAnimator::new();
        animator.start(START, END, 0);
        assert_eq!(animator.steps(), 1);
        assert!(!animator.update());
        assert_eq!(animator.current(), END);
    }

    #[test]
    fn test_progress_monotonic() {
        let mut animator = RectAnimator::new();
        animator.start(START, Rect::new(-33, 7, 250, 19), 7);

        let mut last = animator.progress();
        while animator.is_animating() {
            animator.update();
            let progress = animator.progress();
            assert!(progress >= last);
            last = progress;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn test_no_overshoot() {
        let end = Rect::new(-33, 7, 250, 19);
        let mut animator = RectAnimator::new();
        animator.start(START, end, 7);

        for frame in animator.run_to_end() {
            assert!((end.left..=START.left).contains(&frame.left));
            assert!((START.top..=end.top).contains(&frame.top));
            assert!((START.right..=end.right).contains(&frame.right));
            assert!((START.bottom..=end.bottom).contains(&frame.bottom));
        }
    }

    #[test]
    fn test_truncates_toward_zero() {
        let mut animator = RectAnimator::new();
        animator.start(Rect::ZERO, Rect::new(-15, 15, -15, 15), 2);
        animator.update();
        assert_eq!(animator.current(), Rect::new(-7, 7, -7, 7));
    }

    #[test]
    fn test_restart_mid_animation() {
        let mut animator = RectAnimator::new();
        animator.start(START, END, 10);
        animator.update();
        animator.update();

        animator.start(END, START, 4);
        assert_eq!(animator.step(), 0);
        assert_eq!(animator.current(), END);
        assert_eq!(animator.run_to_end().len(), 4);
        assert_eq!(animator.current(), START);
    }

    #[test]
    fn test_stop_keeps_current() {
        let mut animator = RectAnimator::new();
        animator.start(START, END, 4);
        animator.update();
        let mid = animator.current();

        animator.stop();
        assert!(!animator.is_animating());
        assert!(!animator.update());
        assert_eq!(animator.current(), mid);
    }

    #[test]
    fn test_run_to_end_from_midway() {
        let mut animator = RectAnimator::new();
        animator.start(START, END, 4);
        animator.update();
        animator.update();
        assert_eq!(animator.run_to_end(), vec![Rect::new(75, 75, 85, 85), END]);
        assert!(animator.run_to_end().is_empty());
    }

    #[test]
    fn test_endpoints_kept() {
        let mut animator = RectAnimator::new();
        animator.start(START, END, u32::MAX);
        assert_eq!(animator.start_rect(), START);
        assert_eq!(animator.end_rect(), END);
        assert!(animator.update());
        animator.stop();
        assert!(animator.run_to_end().is_empty());
    }

    #[test]
    fn test_run_to_end_frames() {
        let mut animator = RectAnimator::new();
        animator.start(START, END, 4);
        let frames = animator.run_to_end();
        assert_eq!(
            frames,
            vec![
                Rect::new(25, 25, 35, 35),
                Rect::new(50, 50, 60, 60),
                Rect::new(75, 75, 85, 85),
                END,
            ]
        );
    }
}
