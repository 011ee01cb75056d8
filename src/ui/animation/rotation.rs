//! Palette rotation for animated gradients
//!
//! A palette of N colors yields N rotation states, each a cyclic shift of
//! the palette. While running, the rotation cross-fades from the state it
//! rests on to the next one over `duration`, holds the new state, and
//! schedules the following step. One full cycle takes `N * duration`.
//!
//! Time is always passed in explicitly, so the host decides what drives it
//! (usually `iced::window::frames()`).

use std::time::{Duration, Instant};

use iced::Color;
use iced::animation::{Animation, Easing};

use crate::utils::mix_colors;

/// Default cross-fade length of one rotation step
pub const DEFAULT_DURATION: Duration = Duration::from_secs(2);

/// Shortest accepted step duration
pub const MIN_DURATION: Duration = Duration::from_millis(1);

/// Longest accepted step duration
pub const MAX_DURATION: Duration = Duration::from_secs(60 * 60);

/// Clamp a step duration into [`MIN_DURATION`, `MAX_DURATION`]
pub fn clamp_duration(duration: Duration) -> Duration {
    duration.clamp(MIN_DURATION, MAX_DURATION)
}

/// Anything that animates a gradient over a fixed step duration
pub trait GradientAnimated {
    /// Length of one cross-fade step
    fn duration(&self) -> Duration;
}

/// Replace an empty palette with a single transparent color
pub fn normalize_palette(palette: Vec<Color>) -> Vec<Color> {
    if palette.is_empty() {
        vec![Color::TRANSPARENT]
    } else {
        palette
    }
}

/// Build every cyclic shift of the palette
///
/// `states[i][j] == palette[(j + i) % n]`
pub fn rotation_states(palette: &[Color]) -> Vec<Vec<Color>> {
    let n = palette.len();
    (0..n)
        .map(|offset| (0..n).map(|j| palette[(j + offset) % n]).collect())
        .collect()
}

/// One in-flight cross-fade
struct Step {
    fade: Animation<bool>,
    from: Vec<Color>,
    started_at: Instant,
    duration: Duration,
}

impl Step {
    fn begin(from: Vec<Color>, at: Instant, duration: Duration) -> Self {
        let mut fade = Animation::new(false)
            .easing(Easing::Linear)
            .duration(duration);
        fade.go_mut(true, at);

        Self {
            fade,
            from,
            started_at: at,
            duration,
        }
    }

    /// End instant, `None` if it is past what `Instant` can represent
    fn ends_at(&self) -> Option<Instant> {
        self.started_at.checked_add(self.duration)
    }

    fn progress(&self, now: Instant) -> f32 {
        self.fade.interpolate(0.0_f32, 1.0_f32, now)
    }
}

/// Animation state of a gradient button
///
/// There is intentionally no `Default` or `Deserialize`: a rotation is only
/// ever built from a palette through [`GradientRotation::new`].
pub struct GradientRotation {
    palette: Vec<Color>,
    states: Vec<Vec<Color>>,
    /// Index of the state the gradient rests on
    current: usize,
    /// Colors the gradient shows when no step is in flight
    resting: Vec<Color>,
    step: Option<Step>,
    duration: Duration,
    running: bool,
}

impl GradientRotation {
    /// Create a rotation resting on the first state, not yet animating
    pub fn new(palette: Vec<Color>) -> Self {
        let palette = normalize_palette(palette);
        let states = rotation_states(&palette);
        let resting = states[0].clone();

        Self {
            palette,
            states,
            current: 0,
            resting,
            step: None,
            duration: DEFAULT_DURATION,
            running: false,
        }
    }

    /// Create a rotation and start animating immediately
    pub fn animated(palette: Vec<Color>, now: Instant) -> Self {
        let mut rotation = Self::new(palette);
        rotation.start(now);
        rotation
    }

    /// The normalized palette (never empty)
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    /// All rotation states, one per palette offset
    pub fn states(&self) -> &[Vec<Color>] {
        &self.states
    }

    /// Index of the rotation state the gradient currently rests on
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Index the in-flight step is fading towards, if any
    pub fn target_index(&self) -> Option<usize> {
        self.step.as_ref().map(|_| self.next_index())
    }

    /// Set the cross-fade length for the next step and all later ones
    ///
    /// The step already in flight keeps its own timing. Values outside
    /// [`MIN_DURATION`, `MAX_DURATION`] are clamped.
    pub fn set_duration(&mut self, duration: Duration) {
        let clamped = clamp_duration(duration);
        if clamped != duration {
            tracing::warn!("Gradient duration {:?} clamped to {:?}", duration, clamped);
        }
        self.duration = clamped;
    }

    /// Whether new steps keep being scheduled
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the host should keep delivering frames
    ///
    /// True while a step is in flight, including a step that has elapsed
    /// but has not been completed by [`tick`](Self::tick) yet.
    pub fn needs_frames(&self) -> bool {
        self.step.is_some()
    }

    /// Start (or resume) the rotation
    pub fn start(&mut self, now: Instant) {
        if self.running {
            return;
        }
        self.running = true;
        tracing::debug!(
            "Gradient rotation started ({} states, {:?} per step)",
            self.states.len(),
            self.duration
        );

        // A step left over from before `stop` reschedules on completion
        if self.step.is_none() {
            self.schedule(now);
        }
    }

    /// Stop scheduling new steps
    ///
    /// The step in flight still completes and its end state is held.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            tracing::debug!("Gradient rotation stopped at state {}", self.current);
        }
    }

    /// Advance time, completing every step that has ended by `now`
    ///
    /// Steps stay on a fixed grid: after the step in flight ends, any further
    /// whole steps that fit before `now` are skipped arithmetically and the
    /// new step starts on the grid line just before `now`. Returns the number
    /// of steps completed.
    pub fn tick(&mut self, now: Instant) -> usize {
        let Some(ends_at) = self.step.as_ref().and_then(Step::ends_at) else {
            return 0;
        };
        if now < ends_at {
            return 0;
        }

        self.step = None;
        let mut completed: u128 = 1;
        let mut next_start = ends_at;

        if self.running {
            let elapsed = now.duration_since(ends_at).as_nanos();
            let step = self.duration.as_nanos();
            let skipped = elapsed / step;
            // Below MAX_DURATION, so it fits in u64
            let remainder = Duration::from_nanos((elapsed % step) as u64);

            completed += skipped;
            next_start = now.checked_sub(remainder).unwrap_or(now);
        }

        let n = self.states.len() as u128;
        self.current = ((self.current as u128 + completed % n) % n) as usize;
        self.resting = self.states[self.current].clone();

        if self.running {
            self.schedule(next_start);
        }

        tracing::trace!(
            "Gradient rotation completed {} step(s), now at state {}",
            completed,
            self.current
        );

        usize::try_from(completed).unwrap_or(usize::MAX)
    }

    /// Colors to paint at `now`
    pub fn colors(&self, now: Instant) -> Vec<Color> {
        match &self.step {
            Some(step) => mix_colors(
                &step.from,
                &self.states[self.next_index()],
                step.progress(now),
            ),
            None => self.resting.clone(),
        }
    }

    fn next_index(&self) -> usize {
        (self.current + 1) % self.states.len()
    }

    fn schedule(&mut self, at: Instant) {
        self.step = Some(Step::begin(self.resting.clone(), at, self.duration));
    }
}

impl GradientAnimated for GradientRotation {
    fn duration(&self) -> Duration {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P0: Color = Color {
        r: 0.557,
        g: 0.176,
        b: 0.886,
        a: 1.0,
    };
    const P1: Color = Color {
        r: 0.29,
        g: 0.0,
        b: 0.878,
        a: 1.0,
    };
    const P2: Color = Color {
        r: 1.0,
        g: 0.5,
        b: 0.0,
        a: 1.0,
    };

    fn secs(s: f32) -> Duration {
        Duration::from_secs_f32(s)
    }

    #[test]
    fn test_states_are_cyclic_shifts() {
        for n in 1..=6 {
            let palette: Vec<Color> = (0..n)
                .map(|i| Color::from_rgb(i as f32 / 10.0, 0.0, 0.0))
                .collect();
            let states = rotation_states(&palette);

            assert_eq!(states.len(), n);
            for (i, state) in states.iter().enumerate() {
                assert_eq!(state.len(), n);
                for (j, color) in state.iter().enumerate() {
                    assert_eq!(*color, palette[(j + i) % n]);
                }
            }
        }
    }

    #[test]
    fn test_empty_palette_is_transparent() {
        let rotation = GradientRotation::new(Vec::new());
        assert_eq!(rotation.palette(), &[Color::TRANSPARENT]);
        assert_eq!(rotation.states(), &[vec![Color::TRANSPARENT]]);
        assert_eq!(rotation.colors(Instant::now()), vec![Color::TRANSPARENT]);
    }

    #[test]
    fn test_new_rests_on_first_state() {
        let now = Instant::now();
        let rotation = GradientRotation::new(vec![P0, P1]);

        assert_eq!(rotation.current_index(), 0);
        assert_eq!(rotation.duration(), DEFAULT_DURATION);
        assert!(!rotation.is_running());
        assert!(!rotation.needs_frames());
        assert_eq!(rotation.colors(now), vec![P0, P1]);
    }

    #[test]
    fn test_two_color_scenario() {
        let t0 = Instant::now();
        let mut rotation = GradientRotation::animated(vec![P0, P1], t0);

        assert_eq!(rotation.states(), &[vec![P0, P1], vec![P1, P0]]);
        assert_eq!(rotation.target_index(), Some(1));

        let mut seen = vec![rotation.current_index()];
        for k in 1..=4 {
            let at = t0 + secs(2.0) * k;
            assert_eq!(rotation.tick(at), 1);
            seen.push(rotation.current_index());
        }
        assert_eq!(seen, vec![0, 1, 0, 1, 0]);
    }

    #[test]
    fn test_step_does_not_complete_early() {
        let t0 = Instant::now();
        let mut rotation = GradientRotation::animated(vec![P0, P1], t0);

        assert_eq!(rotation.tick(t0 + secs(1.9)), 0);
        assert_eq!(rotation.current_index(), 0);
        assert_eq!(rotation.target_index(), Some(1));
        assert_eq!(rotation.tick(t0 + secs(2.0)), 1);
        assert_eq!(rotation.current_index(), 1);
    }

    #[test]
    fn test_index_after_k_steps() {
        let t0 = Instant::now();
        let mut rotation = GradientRotation::animated(vec![P0, P1, P2], t0);

        for k in 1..=10_u32 {
            rotation.tick(t0 + DEFAULT_DURATION * k);
            assert_eq!(rotation.current_index(), k as usize % 3);
        }
    }

    #[test]
    fn test_late_tick_catches_up() {
        let t0 = Instant::now();
        let mut rotation = GradientRotation::animated(vec![P0, P1, P2], t0);

        // Three and a half steps elapsed in one frame
        assert_eq!(rotation.tick(t0 + secs(7.0)), 3);
        assert_eq!(rotation.current_index(), 0);
        assert_eq!(rotation.target_index(), Some(1));

        // The fourth step still ends on the 2s grid
        assert_eq!(rotation.tick(t0 + secs(7.9)), 0);
        assert_eq!(rotation.tick(t0 + secs(8.0)), 1);
        assert_eq!(rotation.current_index(), 1);
    }

    #[test]
    fn test_colors_snap_to_state_after_step() {
        let t0 = Instant::now();
        let mut rotation = GradientRotation::animated(vec![P0, P1, P2], t0);
        rotation.stop();

        rotation.tick(t0 + DEFAULT_DURATION);
        assert_eq!(rotation.colors(t0 + secs(10.0)), vec![P1, P2, P0]);
    }

    #[test]
    fn test_colors_fade_between_states() {
        let t0 = Instant::now();
        let rotation = GradientRotation::animated(vec![Color::BLACK, Color::WHITE], t0);

        let start = rotation.colors(t0);
        assert_eq!(start, vec![Color::BLACK, Color::WHITE]);

        let mid = rotation.colors(t0 + secs(1.0));
        assert!(mid[0].r > 0.1 && mid[0].r < 0.9);
        assert!(mid[1].r > 0.1 && mid[1].r < 0.9);
    }

    #[test]
    fn test_duration_change_applies_to_next_step_only() {
        let t0 = Instant::now();
        let mut rotation = GradientRotation::animated(vec![P0, P1], t0);

        rotation.set_duration(secs(5.0));
        assert_eq!(rotation.duration(), secs(5.0));

        // In-flight step keeps its 2s timing
        assert_eq!(rotation.tick(t0 + secs(2.0)), 1);

        // Next step uses 5s
        assert_eq!(rotation.tick(t0 + secs(6.9)), 0);
        assert_eq!(rotation.tick(t0 + secs(7.0)), 1);
        assert_eq!(rotation.current_index(), 0);
    }

    #[test]
    fn test_durations_are_clamped() {
        let mut rotation = GradientRotation::new(vec![P0, P1]);

        rotation.set_duration(Duration::ZERO);
        assert_eq!(rotation.duration(), MIN_DURATION);

        rotation.set_duration(Duration::MAX);
        assert_eq!(rotation.duration(), MAX_DURATION);
    }

    #[test]
    fn test_huge_duration_ticks_without_overflow() {
        let t0 = Instant::now();
        let mut rotation = GradientRotation::new(vec![P0, P1]);
        rotation.set_duration(Duration::MAX);
        rotation.start(t0);

        assert_eq!(rotation.tick(t0), 0);
        assert_eq!(rotation.tick(t0 + secs(600.0)), 0);
        assert_eq!(rotation.tick(t0 + MAX_DURATION), 1);
        assert_eq!(rotation.current_index(), 1);
    }

    #[test]
    fn test_long_gap_with_tiny_duration_skips_ahead() {
        let t0 = Instant::now();
        let mut rotation = GradientRotation::new(vec![P0, P1, P2]);
        rotation.set_duration(Duration::from_nanos(1));
        assert_eq!(rotation.duration(), MIN_DURATION);
        rotation.start(t0);

        // One frame an hour late
        let late = t0 + secs(3600.0) + Duration::from_micros(400);
        assert_eq!(rotation.tick(late), 3_600_000);
        assert_eq!(rotation.current_index(), 3_600_000 % 3);

        // The next step is still on the 1ms grid
        assert_eq!(rotation.tick(t0 + secs(3600.0) + Duration::from_micros(999)), 0);
        assert_eq!(rotation.tick(t0 + secs(3600.0) + MIN_DURATION), 1);
        assert_eq!(rotation.current_index(), 3_600_001 % 3);
    }

    #[test]
    fn test_stop_lets_step_finish_then_holds() {
        let t0 = Instant::now();
        let mut rotation = GradientRotation::animated(vec![P0, P1], t0);

        rotation.stop();
        assert!(!rotation.is_running());
        assert!(rotation.needs_frames());

        assert_eq!(rotation.tick(t0 + secs(2.0)), 1);
        assert_eq!(rotation.current_index(), 1);
        assert!(!rotation.needs_frames());

        // Nothing else happens, however long we wait
        assert_eq!(rotation.tick(t0 + secs(60.0)), 0);
        assert_eq!(rotation.colors(t0 + secs(60.0)), vec![P1, P0]);
    }

    #[test]
    fn test_restart_after_stop() {
        let t0 = Instant::now();
        let mut rotation = GradientRotation::animated(vec![P0, P1], t0);
        rotation.stop();
        rotation.tick(t0 + secs(2.0));

        rotation.start(t0 + secs(10.0));
        assert!(rotation.is_running());
        assert_eq!(rotation.target_index(), Some(0));
        assert_eq!(rotation.tick(t0 + secs(12.0)), 1);
        assert_eq!(rotation.current_index(), 0);
    }

    #[test]
    fn test_resume_before_step_ends_keeps_step() {
        let t0 = Instant::now();
        let mut rotation = GradientRotation::animated(vec![P0, P1], t0);
        rotation.stop();
        rotation.start(t0 + secs(1.0));

        // Same step, not a fresh one started at 1s
        assert_eq!(rotation.tick(t0 + secs(2.0)), 1);
        assert!(rotation.needs_frames());
    }

    #[test]
    fn test_single_color_still_cycles() {
        let t0 = Instant::now();
        let mut rotation = GradientRotation::animated(vec![P0], t0);

        assert_eq!(rotation.states(), &[vec![P0]]);
        assert_eq!(rotation.target_index(), Some(0));
        assert_eq!(rotation.tick(t0 + secs(4.0)), 2);
        assert_eq!(rotation.current_index(), 0);
        assert_eq!(rotation.colors(t0 + secs(5.0)), vec![P0]);
    }
}
