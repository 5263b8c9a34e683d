use crate::color::ColorName;
use crate::trial::StroopTrial;

/// A discrete input event captured by a blocking overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayInput {
    /// Raw keystroke; digit keys 1..=N select the color at that position.
    Keystroke(char),
    /// A labeled choice was picked directly (e.g. a button).
    Choice(ColorName),
}

/// Capability of presenting a trial as a modal surface that cannot be
/// dismissed without an answer.
///
/// The scheduler never depends on the concrete overlay mechanism; the host
/// picks one implementation at startup and mediates between its input events
/// and the scheduler's submit operations.
pub trait BlockingOverlay {
    type Error;

    /// Render the trial: the word in its ink color plus the numbered list of
    /// color choices. No close affordance may be offered.
    fn show(&mut self, trial: &StroopTrial) -> Result<(), Self::Error>;

    /// Block until the next input event is available.
    fn next_input(&mut self) -> Result<OverlayInput, Self::Error>;
}
