//! Case-style tallies shared by the key and parameter style rules.

use std::collections::BTreeMap;

use oas_model::CaseStyle;

use crate::issue::StyleTarget;

/// Counts of classified names, ignoring single-word (`Flat`) names.
#[derive(Debug, Default)]
pub struct StyleTally {
    counts: BTreeMap<CaseStyle, usize>,
}

impl StyleTally {
    pub fn add(&mut self, style: CaseStyle) {
        if style != CaseStyle::Flat {
            *self.counts.entry(style).or_default() += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Most frequent style. Ties go to the style declared first.
    pub fn dominant(&self) -> Option<(CaseStyle, usize)> {
        let mut best: Option<(CaseStyle, usize)> = None;
        for (&style, &count) in &self.counts {
            if best.is_none_or(|(_, best_count)| count > best_count) {
                best = Some((style, count));
            }
        }
        best
    }

    /// Style names are judged against: the configured one, else the
    /// dominant one when at least two styles compete.
    pub fn target(&self, configured: Option<CaseStyle>) -> Option<StyleTarget> {
        if let Some(style) = configured {
            return Some(StyleTarget::Configured(style));
        }
        if self.counts.len() < 2 {
            return None;
        }
        self.dominant().map(|(style, count)| StyleTarget::Dominant {
            style,
            count,
            total: self.total(),
        })
    }
}

/// True when a name of `style` breaks the target convention.
pub fn deviates(style: CaseStyle, target: &StyleTarget) -> bool {
    style != CaseStyle::Flat && style != target.style()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(names: &[&str]) -> StyleTally {
        let mut tally = StyleTally::default();
        for name in names {
            tally.add(CaseStyle::classify(name));
        }
        tally
    }

    #[test]
    fn flat_names_are_not_counted() {
        let tally = tally(&["id", "name", "firstName"]);
        assert_eq!(tally.total(), 1);
        assert!(tally.target(None).is_none());
    }

    #[test]
    fn ties_prefer_camel_case() {
        let tally = tally(&["first_name", "lastName"]);
        assert_eq!(tally.dominant(), Some((CaseStyle::Camel, 1)));
        assert_eq!(
            tally.target(None),
            Some(StyleTarget::Dominant {
                style: CaseStyle::Camel,
                count: 1,
                total: 2
            })
        );
    }

    #[test]
    fn configured_style_always_applies() {
        let tally = tally(&["firstName"]);
        let target = tally.target(Some(CaseStyle::Snake)).expect("target");
        assert!(deviates(CaseStyle::Camel, &target));
        assert!(!deviates(CaseStyle::Flat, &target));
    }
}
