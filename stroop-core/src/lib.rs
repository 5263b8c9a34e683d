pub mod color;
pub mod overlay;
pub mod trial;

pub use color::ColorName;
pub use overlay::{BlockingOverlay, OverlayInput};
pub use trial::{StroopTrial, TrialResponse};
