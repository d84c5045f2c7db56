use serde::{Deserialize, Serialize};

const MIN_ASPECT_RATIO: f64 = 0.8;
const MAX_ASPECT_RATIO: f64 = 1.5;

/// A stock photo returned by the image search provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoCandidate {
    pub width: u32,
    pub height: u32,
    pub url: String,
}

impl PhotoCandidate {
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.height == 0 {
            return None;
        }

        Some(f64::from(self.width) / f64::from(self.height))
    }

    /// Close to square, which reads best on recipe cards.
    pub fn has_pleasing_ratio(&self) -> bool {
        self.aspect_ratio()
            .is_some_and(|ratio| ratio > MIN_ASPECT_RATIO && ratio < MAX_ASPECT_RATIO)
    }
}
