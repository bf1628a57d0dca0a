//! How the aggregator walks the discovered sheets.

/// Batch size the lookup used when early exit was hard-wired.
pub const DEFAULT_BATCH_SIZE: usize = 3;

/// Strategy for scanning sheets during a search.
///
/// `Exhaustive` visits every sheet and is the default. `FirstMatchingBatch`
/// walks sheets in sequential batches and stops after the first batch that
/// produced any record, trading completeness for latency: matches that live
/// only in later sheets are not returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanPolicy {
    #[default]
    Exhaustive,
    FirstMatchingBatch { batch_size: usize },
}

impl ScanPolicy {
    /// Parses a policy name (`exhaustive` or `first-match`).
    ///
    /// `batch_size` is only used by `first-match` and must be at least 1.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason when the name is unknown or the batch
    /// size is zero.
    pub fn parse(name: &str, batch_size: usize) -> Result<Self, String> {
        match name.trim().to_ascii_lowercase().as_str() {
            "exhaustive" => Ok(Self::Exhaustive),
            "first-match" | "first_match" => {
                if batch_size == 0 {
                    return Err("batch size must be at least 1".to_string());
                }
                Ok(Self::FirstMatchingBatch { batch_size })
            }
            other => Err(format!(
                "unknown scan policy \"{other}\" (expected \"exhaustive\" or \"first-match\")"
            )),
        }
    }
}

impl std::fmt::Display for ScanPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanPolicy::Exhaustive => write!(f, "exhaustive"),
            ScanPolicy::FirstMatchingBatch { batch_size } => {
                write!(f, "first-match(batch_size={batch_size})")
            }
        }
    }
}
