use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::core::segment::{SegmentSlot, SEGMENT_COUNT};
use crate::matching::rules::{classify_header, identify_segment, MatchKind};

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Missing segments: {}", describe_missing(.0))]
    MissingSegments(Vec<SegmentSlot>),

    #[error(
        "Segment {slot} claimed twice: {} duplicates {}",
        .input.display(),
        .existing.display()
    )]
    DuplicateSegment {
        slot: SegmentSlot,
        input: PathBuf,
        existing: PathBuf,
    },
}

fn describe_missing(missing: &[SegmentSlot]) -> String {
    missing
        .iter()
        .map(|slot| format!("one of {:?}", slot.aliases()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// An input assigned to a segment slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentMatch {
    pub slot: SegmentSlot,

    /// Alias recorded for the slot
    pub alias: String,

    /// Index of the input in the order it was given
    pub input: usize,

    pub source: PathBuf,

    pub kind: MatchKind,
}

/// An input whose header names a slot another input already filled
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateClaim {
    pub slot: SegmentSlot,
    pub source: PathBuf,
    pub existing: PathBuf,
}

/// Matching state accumulated over the inputs.
///
/// Each input is offered once, in order; the first input to claim a slot keeps
/// it. Inputs that name only an already-filled slot are recorded as duplicates,
/// inputs that name no slot at all as unrecognized.
#[derive(Debug, Clone, Default)]
pub struct SegmentMatches {
    slots: [Option<SegmentMatch>; SEGMENT_COUNT],
    duplicates: Vec<DuplicateClaim>,
    unrecognized: Vec<PathBuf>,
    inputs: usize,
}

impl SegmentMatches {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer the next input's header and return the updated state
    #[must_use]
    pub fn with_input(mut self, source: &Path, header: &str) -> Self {
        let input = self.inputs;
        self.inputs += 1;

        if let Some(claim) = identify_segment(header, |slot| self.is_filled(slot)) {
            self.slots[claim.slot.index()] = Some(SegmentMatch {
                slot: claim.slot,
                alias: claim.alias.to_string(),
                input,
                source: source.to_path_buf(),
                kind: claim.kind,
            });
        } else if let Some((slot, existing)) = classify_header(header)
            .and_then(|c| self.get(c.slot))
            .map(|m| (m.slot, m.source.clone()))
        {
            self.duplicates.push(DuplicateClaim {
                slot,
                source: source.to_path_buf(),
                existing,
            });
        } else {
            self.unrecognized.push(source.to_path_buf());
        }

        self
    }

    #[must_use]
    pub fn is_filled(&self, slot: SegmentSlot) -> bool {
        self.slots[slot.index()].is_some()
    }

    #[must_use]
    pub fn get(&self, slot: SegmentSlot) -> Option<&SegmentMatch> {
        self.slots[slot.index()].as_ref()
    }

    /// Filled slots in canonical order
    pub fn matches(&self) -> impl Iterator<Item = &SegmentMatch> {
        self.slots.iter().flatten()
    }

    /// Slots no input has claimed, in canonical order
    #[must_use]
    pub fn missing(&self) -> Vec<SegmentSlot> {
        SegmentSlot::ALL
            .into_iter()
            .filter(|&slot| !self.is_filled(slot))
            .collect()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn duplicates(&self) -> &[DuplicateClaim] {
        &self.duplicates
    }

    #[must_use]
    pub fn unrecognized(&self) -> &[PathBuf] {
        &self.unrecognized
    }

    /// Require exactly one input per slot.
    ///
    /// Returns the eight matches in canonical order.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::DuplicateSegment` for the first input naming an
    /// already-filled slot, otherwise `MatchError::MissingSegments` listing
    /// every unfilled slot.
    pub fn into_complete(self) -> Result<Vec<SegmentMatch>, MatchError> {
        if let Some(dup) = self.duplicates.first() {
            return Err(MatchError::DuplicateSegment {
                slot: dup.slot,
                input: dup.source.clone(),
                existing: dup.existing.clone(),
            });
        }

        if !self.is_complete() {
            return Err(MatchError::MissingSegments(self.missing()));
        }

        Ok(self.slots.into_iter().flatten().collect())
    }
}

/// Match every input header to a segment slot, in input order
pub fn match_segments<'a, I>(inputs: I) -> SegmentMatches
where
    I: IntoIterator<Item = (&'a Path, &'a str)>,
{
    inputs
        .into_iter()
        .fold(SegmentMatches::new(), |acc, (source, header)| {
            acc.with_input(source, header)
        })
}
