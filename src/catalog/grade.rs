use serde::{Deserialize, Serialize};

/// Inclusive grade range. Families and sampling both scope by band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeBand {
    pub low: u8,
    pub high: u8,
}

impl GradeBand {
    pub const ELEMENTARY: GradeBand = GradeBand { low: 3, high: 5 };
    pub const MIDDLE: GradeBand = GradeBand { low: 6, high: 8 };
    pub const HIGH: GradeBand = GradeBand { low: 9, high: 12 };

    pub fn new(low: u8, high: u8) -> Self {
        if low <= high {
            Self { low, high }
        } else {
            Self {
                low: high,
                high: low,
            }
        }
    }

    pub fn contains(&self, grade: u8) -> bool {
        self.low <= grade && grade <= self.high
    }

    pub fn overlaps(&self, other: GradeBand) -> bool {
        self.low <= other.high && other.low <= self.high
    }
}
