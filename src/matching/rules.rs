//! Header classification rules.
//!
//! A header names its segment either explicitly ("segment 4", any case) or by
//! one of the segment's protein aliases ("HA", "PB1-F2"). An explicit number
//! outranks any alias in the same header. Aliases are case-sensitive whole
//! words and must not be directly followed by `-`, so "PB1" does not match
//! inside "PB1-F2".

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::core::segment::SegmentSlot;

/// How a header was tied to its segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// "segment N" phrase
    Explicit,
    /// Protein/segment alias such as "HA" or "NS1"
    Alias,
}

/// A header's claim on a segment slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentClaim {
    pub slot: SegmentSlot,
    pub alias: &'static str,
    pub kind: MatchKind,
}

static SEGMENT_PHRASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bsegment ([1-8])\b").expect("segment phrase pattern is valid")
});

static ALIAS_RES: LazyLock<Vec<(SegmentSlot, &'static str, Regex)>> = LazyLock::new(|| {
    SegmentSlot::ALL
        .iter()
        .flat_map(|&slot| slot.aliases().iter().map(move |&alias| (slot, alias)))
        .map(|(slot, alias)| {
            let re = Regex::new(&format!(r"\b{}\b", regex::escape(alias)))
                .expect("alias pattern is valid");
            (slot, alias, re)
        })
        .collect()
});

/// Segment positions named by "segment N" phrases, in header order
fn explicit_positions(header: &str) -> impl Iterator<Item = usize> + '_ {
    SEGMENT_PHRASE_RE
        .captures_iter(header)
        .filter_map(|caps| caps.get(1)?.as_str().parse().ok())
}

/// True if `alias` occurs in `header` as a whole word not followed by `-`
fn contains_alias(re: &Regex, header: &str) -> bool {
    re.find_iter(header)
        .any(|m| !header[m.end()..].starts_with('-'))
}

/// True if the header names `slot` explicitly with "segment N"
#[must_use]
pub fn names_segment_number(header: &str, slot: SegmentSlot) -> bool {
    explicit_positions(header).any(|p| p == slot.position())
}

/// The alias of `slot` named in the header, if any (aliases tried in order)
#[must_use]
pub fn matching_alias(header: &str, slot: SegmentSlot) -> Option<&'static str> {
    ALIAS_RES
        .iter()
        .filter(|(s, _, _)| *s == slot)
        .find(|(_, _, re)| contains_alias(re, header))
        .map(|(_, alias, _)| *alias)
}

/// Classify a header against the slots not yet filled.
///
/// Slots are tried in canonical order, explicit "segment N" phrases first,
/// then aliases. `is_filled` reports slots already claimed by earlier inputs;
/// those are skipped.
pub fn identify_segment<F>(header: &str, is_filled: F) -> Option<SegmentClaim>
where
    F: Fn(SegmentSlot) -> bool,
{
    let open: Vec<SegmentSlot> = SegmentSlot::ALL
        .into_iter()
        .filter(|&s| !is_filled(s))
        .collect();

    open.iter()
        .copied()
        .find(|&slot| names_segment_number(header, slot))
        .map(|slot| SegmentClaim {
            slot,
            alias: slot.primary_alias(),
            kind: MatchKind::Explicit,
        })
        .or_else(|| {
            open.iter().copied().find_map(|slot| {
                matching_alias(header, slot).map(|alias| SegmentClaim {
                    slot,
                    alias,
                    kind: MatchKind::Alias,
                })
            })
        })
}

/// Classify a header ignoring which slots are already filled
#[must_use]
pub fn classify_header(header: &str) -> Option<SegmentClaim> {
    identify_segment(header, |_| false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot_of(header: &str) -> Option<SegmentSlot> {
        classify_header(header).map(|c| c.slot)
    }

    #[test]
    fn test_header_table() {
        let cases = [
            (">PB2 A/Hawaii/70/2019", Some(SegmentSlot::Pb2)),
            (">seq polymerase PB1 gene", Some(SegmentSlot::Pb1)),
            (">x PA", Some(SegmentSlot::Pa)),
            (">4 | A/Test/1/2020 (HA) H5N1 AB123456.7", Some(SegmentSlot::Ha)),
            (">nucleoprotein (NP) gene", Some(SegmentSlot::Np)),
            (">neuraminidase (NA)", Some(SegmentSlot::Na)),
            (">matrix protein 2 (M2) and M1", Some(SegmentSlot::M)),
            (">nuclear export protein NEP", Some(SegmentSlot::Ns)),
            (">something unrelated", None),
            (">HAPPY little header", None),
        ];
        for (header, expected) in cases {
            assert_eq!(slot_of(header), expected, "header: {header}");
        }
    }

    #[test]
    fn test_explicit_segment_number() {
        let claim = classify_header(">Influenza A virus SEGMENT 4 complete").unwrap();
        assert_eq!(claim.slot, SegmentSlot::Ha);
        assert_eq!(claim.alias, "HA");
        assert_eq!(claim.kind, MatchKind::Explicit);
    }

    #[test]
    fn test_explicit_outranks_alias() {
        // PB2 alias would claim slot 1, but the explicit number wins
        let claim = classify_header(">PB2-like segment 4").unwrap();
        assert_eq!(claim.slot, SegmentSlot::Ha);
        assert_eq!(claim.kind, MatchKind::Explicit);

        let claim = classify_header(">segment 7 matrix M2").unwrap();
        assert_eq!(claim.slot, SegmentSlot::M);
        assert_eq!(claim.alias, "M1");
    }

    #[test]
    fn test_segment_number_must_be_whole() {
        assert_eq!(slot_of(">segment 10"), None);
        assert_eq!(slot_of(">segment 0"), None);
        assert_eq!(slot_of(">subsegment 3"), None);
        assert_eq!(slot_of(">segment 04"), None);
    }

    #[test]
    fn test_zero_padded_number_falls_back_to_alias() {
        let claim = classify_header(">segment 04 PB2").unwrap();
        assert_eq!(claim.slot, SegmentSlot::Pb2);
        assert_eq!(claim.kind, MatchKind::Alias);
    }

    #[test]
    fn test_ns1_alias() {
        let claim = classify_header(">A/Test/1/2020 NS1 gene").unwrap();
        assert_eq!(claim.slot, SegmentSlot::Ns);
        assert_eq!(claim.alias, "NS1");
    }

    #[test]
    fn test_pb1_f2_alias() {
        let claim = classify_header(">A/Test/1/2020 PB1-F2 protein").unwrap();
        assert_eq!(claim.slot, SegmentSlot::Pb1);
        assert_eq!(claim.alias, "PB1-F2");

        let claim = classify_header(">A/Test/1/2020 PB1 protein").unwrap();
        assert_eq!(claim.alias, "PB1");
    }

    #[test]
    fn test_alias_followed_by_hyphen_is_skipped() {
        assert_eq!(matching_alias(">HA-tagged construct", SegmentSlot::Ha), None);
        // A later clean occurrence still counts
        assert_eq!(
            matching_alias(">HA-tagged construct (HA)", SegmentSlot::Ha),
            Some("HA")
        );
    }

    #[test]
    fn test_alias_is_case_sensitive() {
        assert_eq!(slot_of(">hemagglutinin ha"), None);
        assert_eq!(slot_of(">hemagglutinin segment 4"), Some(SegmentSlot::Ha));
    }

    #[test]
    fn test_filled_slots_are_skipped() {
        let header = ">HA and NA";
        let claim = identify_segment(header, |s| s == SegmentSlot::Ha).unwrap();
        assert_eq!(claim.slot, SegmentSlot::Na);

        let claim = identify_segment(header, |_| false).unwrap();
        assert_eq!(claim.slot, SegmentSlot::Ha);

        assert_eq!(identify_segment(">HA", |s| s == SegmentSlot::Ha), None);
    }

    #[test]
    fn test_lowest_slot_wins() {
        // Both aliases present: slot order decides
        assert_eq!(slot_of(">NS1 and PB2"), Some(SegmentSlot::Pb2));
    }
}
