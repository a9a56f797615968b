use serde::Serialize;

use crate::distance::DistanceEngine;

/// Maximum number of suggestions returned.
pub const SUGGESTION_LIMIT: usize = 5;

/// Slack for the optional length pre-filter: candidates whose byte length
/// differs from the query's by more than this are skipped without being
/// scored.
pub const LENGTH_SLACK: usize = 2;

/// A candidate paired with its edit distance to the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredCandidate {
    pub text: String,
    pub distance: usize,
}

/// Ranks candidates against a query by edit distance.
///
/// Every candidate is scored by default. The length pre-filter is an
/// opt-in approximation: a skipped candidate could in principle still
/// have ranked, so enabling it trades exactness for speed.
pub struct Ranker {
    engine: DistanceEngine,
    limit: usize,
    length_slack: Option<usize>,
}

impl Ranker {
    pub fn new() -> Self {
        Self {
            engine: DistanceEngine::new(),
            limit: SUGGESTION_LIMIT,
            length_slack: None,
        }
    }

    /// Skip candidates whose byte length differs from the query's by more
    /// than `slack` before scoring.
    pub fn with_length_filter(mut self, slack: usize) -> Self {
        self.length_slack = Some(slack);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Scores the candidates and returns the best matches, closest first.
    ///
    /// Ties on distance are broken by byte-wise lexical order of the text,
    /// so the output is fully determined by the candidate multiset.
    /// Duplicate candidates are treated as independent entries and are not
    /// collapsed. An empty result is a legitimate "no suggestions" answer,
    /// not an error.
    pub fn rank<I>(&mut self, query: &str, candidates: I) -> Vec<ScoredCandidate>
    where
        I: IntoIterator<Item = String>,
    {
        let mut scored = Vec::new();

        for candidate in candidates {
            if let Some(slack) = self.length_slack {
                if candidate.len().abs_diff(query.len()) > slack {
                    continue;
                }
            }

            // The query always takes the first argument position.
            let distance = self.engine.distance(query, &candidate);
            scored.push(ScoredCandidate {
                text: candidate,
                distance,
            });
        }

        scored.sort_by(|a, b| {
            a.distance
                .cmp(&b.distance)
                .then_with(|| a.text.cmp(&b.text))
        });
        scored.truncate(self.limit);
        scored
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new()
    }
}
