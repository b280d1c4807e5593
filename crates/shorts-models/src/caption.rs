//! Word-level caption units from narration transcription.
//!
//! The transcription service returns one unit per spoken word with start/end
//! times in seconds. The sequence is sorted by start time and intervals do
//! not overlap; adjacent units may touch at an exact boundary.

use serde::{Deserialize, Serialize};

/// One transcribed word with its timing in the narration audio.
///
/// Immutable once received from the transcription service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionUnit {
    /// The spoken word as transcribed.
    pub word: String,
    /// Start time in seconds (>= 0).
    pub start: f64,
    /// End time in seconds (> start).
    pub end: f64,
}

impl CaptionUnit {
    /// Create a new caption unit.
    pub fn new(word: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            word: word.into(),
            start,
            end,
        }
    }

    /// Duration of the spoken word in seconds.
    pub fn duration(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }

    /// Whether the given time falls inside this unit's interval.
    ///
    /// Inclusive on both ends: a boundary instant shared by two adjacent
    /// units belongs to both, and callers resolve the tie by iteration
    /// order.
    pub fn contains(&self, time_seconds: f64) -> bool {
        time_seconds >= self.start && time_seconds <= self.end
    }
}

/// End time of the last caption, if any.
///
/// Captions are sorted by start; the last unit also carries the latest end
/// time for non-overlapping input.
pub fn last_end(captions: &[CaptionUnit]) -> Option<f64> {
    captions.last().map(|c| c.end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_unit_duration() {
        let unit = CaptionUnit::new("hello", 1.0, 1.4);
        assert!((unit.duration() - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_caption_unit_contains_inclusive_bounds() {
        let unit = CaptionUnit::new("word", 1.0, 2.0);
        assert!(unit.contains(1.0));
        assert!(unit.contains(1.5));
        assert!(unit.contains(2.0));
        assert!(!unit.contains(0.999));
        assert!(!unit.contains(2.001));
    }

    #[test]
    fn test_last_end() {
        assert_eq!(last_end(&[]), None);

        let captions = vec![
            CaptionUnit::new("a", 0.0, 0.5),
            CaptionUnit::new("b", 0.5, 1.2),
        ];
        assert_eq!(last_end(&captions), Some(1.2));
    }

    #[test]
    fn test_caption_unit_serde_roundtrip() {
        let unit = CaptionUnit::new("viral", 3.25, 3.75);
        let json = serde_json::to_string(&unit).unwrap();
        let back: CaptionUnit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, unit);
    }
}
