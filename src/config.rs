// Tunables for primality testing and key generation

/// Configuration for prime search and key generation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaConfig {
    /// Miller-Rabin rounds per candidate. A composite survives all rounds
    /// with probability at most 4^-confidence.
    pub confidence: u32,
    /// First public exponent tried; the scan moves upward from here
    pub exponent_start: u64,
    /// Candidate budget for each prime search, `None` for no limit
    pub max_attempts: Option<u64>,
}

impl Default for RsaConfig {
    fn default() -> Self {
        Self {
            confidence: 5,
            exponent_start: 13,
            max_attempts: Some(1_000_000),
        }
    }
}

impl RsaConfig {
    pub fn with_confidence(mut self, confidence: u32) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_exponent_start(mut self, start: u64) -> Self {
        self.exponent_start = start;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: Option<u64>) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}
