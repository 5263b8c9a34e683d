use std::io::{self, BufRead, Write};

use stroop_core::{BlockingOverlay, ColorName, OverlayInput, StroopTrial};

/// ANSI-terminal rendering of the blocking trial prompt.
///
/// There is no dismiss path: the driver loops on `next_input` until the
/// scheduler accepts an answer.
#[derive(Default)]
pub struct TerminalOverlay;

impl TerminalOverlay {
    pub fn new() -> Self {
        Self
    }
}

/// Builds the trial prompt: the word painted in its ink color (24-bit ANSI)
/// above the numbered choice list.
pub fn render_trial(trial: &StroopTrial) -> String {
    let (r, g, b) = trial.display_color.rgb();
    let mut out = String::new();
    out.push_str("\nQuick color naming task\n");
    out.push_str("Select the color of the text, not the word's meaning.\n\n");
    out.push_str(&format!(
        "    \x1b[1;38;2;{r};{g};{b}m{}\x1b[0m\n\n",
        trial.word
    ));
    for color in ColorName::ALL {
        out.push_str(&format!("  {}. {}\n", color.position(), color));
    }
    out.push_str("\nPress 1-6: ");
    out
}

impl BlockingOverlay for TerminalOverlay {
    type Error = io::Error;

    fn show(&mut self, trial: &StroopTrial) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(render_trial(trial).as_bytes())?;
        stdout.flush()
    }

    fn next_input(&mut self) -> io::Result<OverlayInput> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed while a trial was awaiting its answer",
            ));
        }
        // Last typed character wins, matching the keystroke-shortcut surface.
        let ch = line.trim().chars().last().unwrap_or('\n');
        Ok(OverlayInput::Keystroke(ch))
    }
}
