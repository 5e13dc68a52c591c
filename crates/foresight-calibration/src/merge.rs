//! Two-pointer merge of two ascending timestamp sequences.

use chrono::{DateTime, Utc};

/// Which input sequence a boundary came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Vote,
    Trend,
    Both,
}

impl Source {
    pub fn has_vote(self) -> bool {
        matches!(self, Source::Vote | Source::Both)
    }

    pub fn has_trend(self) -> bool {
        matches!(self, Source::Trend | Source::Both)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    pub at: DateTime<Utc>,
    pub source: Source,
}

/// Yields each distinct timestamp of `votes ∪ trend` once, ascending.
///
/// Both inputs must be sorted ascending. Equal timestamps, within one input or
/// across both, collapse into a single boundary tagged with every source that
/// produced it.
pub struct BoundaryMerge<'a> {
    votes: &'a [DateTime<Utc>],
    trend: &'a [DateTime<Utc>],
    vi: usize,
    ti: usize,
    last: Option<DateTime<Utc>>,
}

impl<'a> BoundaryMerge<'a> {
    pub fn new(votes: &'a [DateTime<Utc>], trend: &'a [DateTime<Utc>]) -> Self {
        Self {
            votes,
            trend,
            vi: 0,
            ti: 0,
            last: None,
        }
    }
}

impl Iterator for BoundaryMerge<'_> {
    type Item = Boundary;

    fn next(&mut self) -> Option<Boundary> {
        loop {
            let vote = self.votes.get(self.vi).copied();
            let trend = self.trend.get(self.ti).copied();
            let (at, source) = match (vote, trend) {
                (None, None) => return None,
                (Some(v), None) => (v, Source::Vote),
                (None, Some(t)) => (t, Source::Trend),
                (Some(v), Some(t)) if v < t => (v, Source::Vote),
                (Some(v), Some(t)) if t < v => (t, Source::Trend),
                (Some(v), Some(_)) => (v, Source::Both),
            };
            if source.has_vote() {
                self.vi += 1;
            }
            if source.has_trend() {
                self.ti += 1;
            }

            match self.last {
                // Repeat of an already emitted timestamp.
                Some(last) if at <= last => continue,
                _ => {
                    self.last = Some(at);
                    return Some(Boundary {
                        at,
                        source: self.absorb_ties(at, source),
                    });
                }
            }
        }
    }
}

impl BoundaryMerge<'_> {
    /// Consume any further entries equal to `at` and widen the tag to cover them.
    fn absorb_ties(&mut self, at: DateTime<Utc>, mut source: Source) -> Source {
        while self.votes.get(self.vi) == Some(&at) {
            self.vi += 1;
            if source == Source::Trend {
                source = Source::Both;
            }
        }
        while self.trend.get(self.ti) == Some(&at) {
            self.ti += 1;
            if source == Source::Vote {
                source = Source::Both;
            }
        }
        source
    }
}
