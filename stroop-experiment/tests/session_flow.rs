//! End-to-end session flow: interval resolution, periodic interrupts, and a
//! scripted blocking overlay feeding keystrokes back into the scheduler.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::VecDeque;
use std::convert::Infallible;
use stroop_core::{BlockingOverlay, OverlayInput, StroopTrial};
use stroop_experiment::{
    IntervalSources, SchedulerConfig, SchedulerEvent, StroopScheduler,
};
use stroop_timing::ManualClock;

/// Overlay double that records what was shown and replays scripted inputs.
struct ScriptedOverlay {
    shown: Vec<StroopTrial>,
    inputs: VecDeque<OverlayInput>,
}

impl ScriptedOverlay {
    fn new(inputs: Vec<OverlayInput>) -> Self {
        Self {
            shown: Vec::new(),
            inputs: inputs.into(),
        }
    }
}

impl BlockingOverlay for ScriptedOverlay {
    type Error = Infallible;

    fn show(&mut self, trial: &StroopTrial) -> Result<(), Infallible> {
        self.shown.push(*trial);
        Ok(())
    }

    fn next_input(&mut self) -> Result<OverlayInput, Infallible> {
        Ok(self.inputs.pop_front().expect("script exhausted"))
    }
}

fn drive_trial<O: BlockingOverlay<Error = Infallible>>(
    scheduler: &mut StroopScheduler<ManualClock, StdRng>,
    overlay: &mut O,
    trial: &StroopTrial,
) -> stroop_core::TrialResponse {
    overlay.show(trial).unwrap();
    loop {
        let event = match overlay.next_input().unwrap() {
            OverlayInput::Keystroke(ch) => SchedulerEvent::Keystroke(ch),
            OverlayInput::Choice(color) => SchedulerEvent::ColorChosen(color),
        };
        if let Some(response) = scheduler.handle_event(event) {
            return response;
        }
        // Invalid input: the trial keeps blocking until answered.
        assert!(scheduler.is_active());
    }
}

#[test]
fn session_interleaves_trials_with_conversation_turns() {
    let sources = IntervalSources {
        secret: Some("30".into()),
        query_param: Some("45".into()),
        env_var: None,
    };
    let config = SchedulerConfig::from_sources(&sources);
    assert_eq!(config.interval_seconds, 45);

    let clock = ManualClock::new(0.0);
    let mut scheduler =
        StroopScheduler::new(config, clock.clone(), StdRng::seed_from_u64(99));

    // Conversation turns inside the first interval pass untouched.
    clock.set(10.0);
    assert!(scheduler.poll().is_none());
    clock.set(45.0);
    assert!(scheduler.poll().is_none());

    // First interrupt. The participant fumbles (out-of-range digit, then a
    // letter) before answering correctly via keystroke.
    clock.set(46.0);
    let trial = scheduler.poll().expect("first trial due");
    let correct_key =
        char::from_digit(trial.display_color.position() as u32, 10).unwrap();
    let mut overlay = ScriptedOverlay::new(vec![
        OverlayInput::Keystroke('9'),
        OverlayInput::Keystroke('q'),
        OverlayInput::Keystroke(correct_key),
    ]);
    let response = drive_trial(&mut scheduler, &mut overlay, &trial);
    assert!(response.was_correct);
    assert_eq!(overlay.shown, vec![trial]);

    // Back in conversation; nothing fires until another interval elapses
    // from the answer.
    clock.set(80.0);
    assert!(scheduler.poll().is_none());

    // Second interrupt, answered by clicking a deliberately wrong choice.
    clock.set(100.0);
    let second = scheduler.poll().expect("second trial due");
    let wrong = stroop_core::ColorName::ALL
        .into_iter()
        .find(|c| *c != second.display_color)
        .unwrap();
    let mut overlay = ScriptedOverlay::new(vec![OverlayInput::Choice(wrong)]);
    let response = drive_trial(&mut scheduler, &mut overlay, &second);
    assert!(!response.was_correct);

    let log = scheduler.responses();
    assert_eq!(log.len(), 2);
    assert!(log[0].was_correct);
    assert!(!log[1].was_correct);
    assert_eq!(log[1].answered_at, 100.0);
}
