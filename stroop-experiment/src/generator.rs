use rand::Rng;
use stroop_core::{ColorName, StroopTrial};

/// Fraction of trials forced into the incongruent condition by default.
pub const DEFAULT_INCONGRUENT_PROBABILITY: f64 = 0.7;

/// Samples one Stroop trial.
///
/// `word` is drawn uniformly from the color set. With probability
/// `force_incongruent_probability` the ink is drawn uniformly from the set
/// excluding the word; otherwise the trial is congruent. The probability is
/// clamped to `[0, 1]` rather than rejected: this is a research instrument,
/// availability beats strictness on a caller contract slip.
pub fn generate_trial<R: Rng + ?Sized>(
    rng: &mut R,
    force_incongruent_probability: f64,
) -> StroopTrial {
    let p = force_incongruent_probability.clamp(0.0, 1.0);
    let colors = &ColorName::ALL;
    let word = colors[rng.random_range(0..colors.len())];

    let display_color = if colors.len() > 1 && rng.random_bool(p) {
        let others: Vec<ColorName> = colors.iter().copied().filter(|c| *c != word).collect();
        others[rng.random_range(0..others.len())]
    } else {
        word
    };

    StroopTrial::new(word, display_color)
}
