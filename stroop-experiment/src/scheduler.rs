use rand::Rng;
use stroop_core::{ColorName, StroopTrial, TrialResponse};
use stroop_timing::Clock;
use tracing::debug;

use crate::config::SchedulerConfig;
use crate::generator::generate_trial;

/// Discrete input events the scheduler consumes while a trial is blocking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerEvent {
    /// A labeled choice was picked directly.
    ColorChosen(ColorName),
    /// Raw keystroke; digits 1..=N select by list position, anything else is
    /// ignored.
    Keystroke(char),
}

/// Per-session interrupt scheduler state.
///
/// The machine cycles Idle -> Triggered -> AwaitingResponse -> Idle for the
/// life of the session. `current` doubles as the active flag: a trial is
/// blocking the conversation iff it is `Some`. All operations take `now`
/// explicitly (seconds since the Unix epoch), so the machine is testable
/// without a wall clock or a UI harness.
#[derive(Debug, Clone)]
pub struct SchedulerState {
    pub config: SchedulerConfig,
    /// When the last trial was presented; epoch-zero initially so the first
    /// trial fires once the interval elapses from session start.
    pub last_shown_at: f64,
    pub current: Option<StroopTrial>,
    pub last_response: Option<TrialResponse>,
    /// Every completed trial in answer order, for the external research-data
    /// collector.
    pub responses: Vec<TrialResponse>,
}

impl SchedulerState {
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            config,
            last_shown_at: 0.0,
            current: None,
            last_response: None,
            responses: Vec::new(),
        }
    }

    /// A trial is currently blocking the conversation.
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Whether the next conversational turn should be interrupted. Always
    /// false while a trial is active: a trial never preempts another trial.
    pub fn is_trigger_due(&self, now: f64) -> bool {
        !self.is_active() && now - self.last_shown_at > self.config.interval_seconds as f64
    }

    /// Generates and stores a fresh trial, marking it as presented at `now`.
    /// Calling this while a trial is already active returns the existing
    /// trial unchanged.
    pub fn begin_trial<R: Rng + ?Sized>(&mut self, rng: &mut R, now: f64) -> &StroopTrial {
        if self.current.is_none() {
            let trial = generate_trial(rng, self.config.incongruent_probability);
            debug!(
                word = %trial.word,
                ink = %trial.display_color,
                congruent = trial.is_congruent(),
                "stroop trial presented"
            );
            self.current = Some(trial);
            self.last_shown_at = now;
        }
        // Just stored above, or already present.
        self.current.as_ref().unwrap()
    }

    /// Captures an answer for the active trial and returns control to the
    /// conversation. Correctness is judged against the ink color of the trial
    /// stored at `begin_trial` time. While idle this is a no-op.
    pub fn submit_response(&mut self, selected: ColorName, now: f64) -> Option<TrialResponse> {
        let trial = self.current.take()?;
        let response = TrialResponse {
            selected,
            was_correct: selected == trial.display_color,
            answered_at: now,
        };
        debug!(
            selected = %selected,
            correct = response.was_correct,
            "stroop response captured"
        );
        self.last_shown_at = now;
        self.last_response = Some(response);
        self.responses.push(response);
        Some(response)
    }

    /// Routes a raw keystroke: digits 1..=N submit the color at that list
    /// position; anything else (including an out-of-range digit) is ignored
    /// with no state change, leaving the trial awaiting its answer.
    pub fn handle_keystroke(&mut self, ch: char, now: f64) -> Option<TrialResponse> {
        if !self.is_active() {
            return None;
        }
        let position = ch.to_digit(10)? as usize;
        let selected = ColorName::from_position(position)?;
        self.submit_response(selected, now)
    }
}

/// Clock- and rng-owning wrapper around [`SchedulerState`], the shape a UI
/// driver holds for the lifetime of one session.
pub struct StroopScheduler<C: Clock, R: Rng> {
    pub state: SchedulerState,
    clock: C,
    rng: R,
}

impl<C: Clock, R: Rng> StroopScheduler<C, R> {
    pub fn new(config: SchedulerConfig, clock: C, rng: R) -> Self {
        Self {
            state: SchedulerState::new(config),
            clock,
            rng,
        }
    }

    /// Turn-boundary check: begins and returns a new trial when one is due,
    /// `None` otherwise.
    pub fn poll(&mut self) -> Option<StroopTrial> {
        let now = self.clock.now_seconds();
        if self.state.is_trigger_due(now) {
            Some(*self.state.begin_trial(&mut self.rng, now))
        } else {
            None
        }
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Seconds since the last trial was presented (or since session start).
    pub fn seconds_since_last_trial(&self) -> f64 {
        self.clock.now_seconds() - self.state.last_shown_at
    }

    /// Consumes one input event while a trial is blocking. Returns the
    /// recorded response once a valid answer arrives; invalid events leave
    /// the machine awaiting input.
    pub fn handle_event(&mut self, event: SchedulerEvent) -> Option<TrialResponse> {
        let now = self.clock.now_seconds();
        match event {
            SchedulerEvent::ColorChosen(color) => self.state.submit_response(color, now),
            SchedulerEvent::Keystroke(ch) => self.state.handle_keystroke(ch, now),
        }
    }

    pub fn responses(&self) -> &[TrialResponse] {
        &self.state.responses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use stroop_timing::ManualClock;

    fn state_with_interval(interval_seconds: u64) -> SchedulerState {
        SchedulerState::new(SchedulerConfig {
            interval_seconds,
            ..SchedulerConfig::default()
        })
    }

    #[test]
    fn first_trial_fires_once_the_interval_elapses_from_session_start() {
        let state = state_with_interval(60);
        assert!(!state.is_trigger_due(59.0));
        assert!(!state.is_trigger_due(60.0));
        assert!(state.is_trigger_due(61.0));
    }

    #[test]
    fn trigger_check_is_idempotent() {
        let state = state_with_interval(60);
        for _ in 0..5 {
            assert!(state.is_trigger_due(61.0));
        }
        for _ in 0..5 {
            assert!(!state.is_trigger_due(30.0));
        }
    }

    #[test]
    fn active_trial_suppresses_the_trigger_regardless_of_elapsed_time() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = state_with_interval(60);
        state.begin_trial(&mut rng, 61.0);
        assert!(state.is_active());
        assert!(!state.is_trigger_due(61.0));
        assert!(!state.is_trigger_due(10_000.0));
    }

    #[test]
    fn begin_trial_while_active_returns_the_existing_trial() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut state = state_with_interval(60);
        let first = *state.begin_trial(&mut rng, 61.0);
        let second = *state.begin_trial(&mut rng, 200.0);
        assert_eq!(first, second);
        assert_eq!(state.last_shown_at, 61.0);
    }

    #[test]
    fn correctness_is_judged_against_the_ink_of_the_presented_trial() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = state_with_interval(60);
        let trial = *state.begin_trial(&mut rng, 61.0);

        let response = state.submit_response(trial.display_color, 65.0).unwrap();
        assert!(response.was_correct);
        assert_eq!(response.answered_at, 65.0);
        assert!(!state.is_active());
        assert_eq!(state.last_response, Some(response));
        assert_eq!(state.responses, vec![response]);
    }

    #[test]
    fn wrong_ink_is_recorded_as_incorrect() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut state = state_with_interval(60);
        let trial = *state.begin_trial(&mut rng, 61.0);

        let wrong = ColorName::ALL
            .into_iter()
            .find(|c| *c != trial.display_color)
            .unwrap();
        let response = state.submit_response(wrong, 70.0).unwrap();
        assert!(!response.was_correct);
    }

    #[test]
    fn answering_resets_the_interval_from_the_answer_time() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = state_with_interval(60);
        let trial = *state.begin_trial(&mut rng, 61.0);
        state.submit_response(trial.display_color, 90.0);

        assert!(!state.is_trigger_due(120.0));
        assert!(state.is_trigger_due(151.0));
    }

    #[test]
    fn out_of_range_digit_is_ignored_while_awaiting_response() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut state = state_with_interval(60);
        state.begin_trial(&mut rng, 61.0);

        assert_eq!(state.handle_keystroke('7', 65.0), None);
        assert_eq!(state.handle_keystroke('0', 65.0), None);
        assert_eq!(state.handle_keystroke('x', 65.0), None);
        assert!(state.is_active());
        assert_eq!(state.last_response, None);
        assert!(state.responses.is_empty());
    }

    #[test]
    fn digit_keystroke_selects_by_list_position() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut state = state_with_interval(60);
        state.begin_trial(&mut rng, 61.0);

        let response = state.handle_keystroke('3', 66.0).unwrap();
        assert_eq!(response.selected, ColorName::Green);
        assert!(!state.is_active());
    }

    #[test]
    fn keystroke_while_idle_is_a_no_op() {
        let mut state = state_with_interval(60);
        assert_eq!(state.handle_keystroke('1', 10.0), None);
        assert_eq!(state.last_response, None);
    }

    #[test]
    fn submit_while_idle_is_a_no_op() {
        let mut state = state_with_interval(60);
        assert_eq!(state.submit_response(ColorName::Red, 10.0), None);
        assert_eq!(state.last_shown_at, 0.0);
    }

    #[test]
    fn poll_begins_a_trial_exactly_once_per_interval() {
        let clock = ManualClock::new(0.0);
        let rng = StdRng::seed_from_u64(9);
        let mut scheduler =
            StroopScheduler::new(SchedulerConfig::default(), clock.clone(), rng);

        assert!(scheduler.poll().is_none());
        clock.set(61.0);
        let trial = scheduler.poll().expect("trial due at t=61");
        // Still active: repeated polls never preempt the open trial.
        assert!(scheduler.poll().is_none());

        let response = scheduler
            .handle_event(SchedulerEvent::ColorChosen(trial.display_color))
            .unwrap();
        assert!(response.was_correct);
        assert_eq!(response.answered_at, 61.0);
        assert!(scheduler.poll().is_none());

        clock.set(130.0);
        assert!(scheduler.poll().is_some());
        assert_eq!(scheduler.responses().len(), 1);
    }
}
