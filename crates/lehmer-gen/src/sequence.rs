//! Generation results.

use std::io::{self, Write};

/// First repetition observed in a generated sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Period {
    /// Distance between the repeated value and its first occurrence.
    pub length: usize,
    /// Index at which the repeated value first appeared.
    pub first_index: usize,
    /// Index at which the repetition was detected.
    pub detected_at: usize,
}

/// Values produced by one generation run together with the period verdict.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LehmerSequence {
    pub(crate) values: Vec<u64>,
    pub(crate) repetition: Option<Period>,
}

impl LehmerSequence {
    /// Generated values in order, seed first.
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// Consumes the result and returns the generated values.
    pub fn into_values(self) -> Vec<u64> {
        self.values
    }

    /// Number of generated values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when no value was generated.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// First repetition, if one occurred within the generated horizon.
    pub fn repetition(&self) -> Option<Period> {
        self.repetition
    }

    /// Period length of the first repetition.
    pub fn period(&self) -> Option<usize> {
        self.repetition.map(|p| p.length)
    }

    /// Index at which the first repetition was detected.
    pub fn first_period_occurrence(&self) -> Option<usize> {
        self.repetition.map(|p| p.detected_at)
    }

    /// Writes one value per line.
    pub fn write_lines<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for value in &self.values {
            writeln!(writer, "{value}")?;
        }
        writer.flush()
    }
}
