//! Review filtering and ordering
//!
//! Filters compose by AND:
//! - `location`: exact match against a valid location; an unknown location
//!   matches nothing
//! - `start_date`: timestamp at or after the date's midnight
//! - `end_date`: timestamp at or before the date's midnight, so later times
//!   on that day are excluded
//!
//! A date that does not parse as `YYYY-MM-DD` is ignored. Empty values count
//! as absent. Survivors are annotated and stably sorted by compound score,
//! highest first; ties keep store order.

use crate::annotate::Annotator;
use crate::store::StoredReview;
use chrono::NaiveDateTime;
use rva_common::locations::is_valid_location;
use rva_common::time::parse_date_midnight;
use rva_common::Review;
use std::sync::Arc;
use tracing::debug;

/// Read-side filter criteria, as received
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewQuery {
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ReviewQuery {
    /// Build from decoded key/value pairs; the first non-empty value of each key wins
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            location: first_value(pairs, "location").map(str::to_owned),
            start_date: first_value(pairs, "start_date").map(str::to_owned),
            end_date: first_value(pairs, "end_date").map(str::to_owned),
        }
    }
}

/// First non-empty value for `key`
pub fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, v)| k == key && !v.is_empty())
        .map(|(_, v)| v.as_str())
}

/// Apply `query` to `records`, annotate the matches and order them
pub fn filter_reviews(
    records: &[Arc<StoredReview>],
    query: &ReviewQuery,
    annotator: &Annotator,
) -> Vec<Review> {
    let location = query.location.as_deref().filter(|l| !l.is_empty());
    if let Some(location) = location {
        if !is_valid_location(location) {
            debug!(location, "Unknown location, no matches");
            return Vec::new();
        }
    }

    let start = date_bound(query.start_date.as_deref(), "start_date");
    let end = date_bound(query.end_date.as_deref(), "end_date");

    let mut matches: Vec<Review> = records
        .iter()
        .filter(|r| location.map_or(true, |l| r.location == l))
        .filter(|r| start.map_or(true, |s| r.timestamp >= s))
        .filter(|r| end.map_or(true, |e| r.timestamp <= e))
        .map(|r| annotator.ensure_scored(r))
        .collect();

    sort_by_sentiment(&mut matches);
    matches
}

/// Stable sort, highest compound first
pub fn sort_by_sentiment(reviews: &mut [Review]) {
    reviews.sort_by(|a, b| b.sentiment.compound.total_cmp(&a.sentiment.compound));
}

fn date_bound(raw: Option<&str>, name: &str) -> Option<NaiveDateTime> {
    let raw = raw.filter(|s| !s.is_empty())?;
    let bound = parse_date_midnight(raw);
    if bound.is_none() {
        debug!(param = name, value = raw, "Ignoring unparseable date");
    }
    bound
}

#[cfg(test)]
mod tests {
    use super::*;
    use rva_common::time::parse_timestamp;
    use rva_common::{Sentiment, SentimentScorer};
    use std::collections::HashMap;

    /// Scores each body by a fixed table; unknown bodies are neutral
    struct TableScorer(HashMap<&'static str, f64>);

    impl SentimentScorer for TableScorer {
        fn score(&self, text: &str) -> Sentiment {
            let compound = self.0.get(text).copied().unwrap_or(0.0);
            Sentiment {
                neg: 0.0,
                neu: 1.0,
                pos: 0.0,
                compound,
            }
        }
    }

    fn annotator() -> Annotator {
        Annotator::new(Arc::new(TableScorer(HashMap::from([
            ("great", 0.9),
            ("good", 0.5),
            ("meh", 0.0),
            ("bad", -0.6),
        ]))))
    }

    fn rec(id: &str, location: &str, body: &str, ts: &str) -> Arc<StoredReview> {
        Arc::new(StoredReview::new(
            id,
            location,
            body,
            parse_timestamp(ts).unwrap(),
        ))
    }

    fn records() -> Vec<Arc<StoredReview>> {
        vec![
            rec("1", "Denver, Colorado", "good", "2023-12-31 23:59:59"),
            rec("2", "Phoenix, Arizona", "great", "2024-01-01 00:00:00"),
            rec("3", "Denver, Colorado", "bad", "2024-01-01 08:15:00"),
            rec("4", "Denver, Colorado", "good", "2024-01-02 00:00:00"),
            rec("5", "Tucson, Arizona", "meh", "2024-01-03 12:00:00"),
        ]
    }

    fn query(location: Option<&str>, start: Option<&str>, end: Option<&str>) -> ReviewQuery {
        ReviewQuery {
            location: location.map(String::from),
            start_date: start.map(String::from),
            end_date: end.map(String::from),
        }
    }

    fn ids(reviews: &[Review]) -> Vec<&str> {
        reviews.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_no_filters_returns_all_sorted() {
        let out = filter_reviews(&records(), &ReviewQuery::default(), &annotator());
        // Equal scores (1 and 4) keep insertion order
        assert_eq!(ids(&out), vec!["2", "1", "4", "5", "3"]);
    }

    #[test]
    fn test_all_results_scored_in_bounds() {
        let out = filter_reviews(&records(), &ReviewQuery::default(), &annotator());
        assert!(out
            .iter()
            .all(|r| (-1.0..=1.0).contains(&r.sentiment.compound)));
    }

    #[test]
    fn test_location_exact_match() {
        let out = filter_reviews(
            &records(),
            &query(Some("Denver, Colorado"), None, None),
            &annotator(),
        );
        assert_eq!(ids(&out), vec!["1", "4", "3"]);
    }

    #[test]
    fn test_location_is_case_sensitive() {
        let out = filter_reviews(
            &records(),
            &query(Some("denver, colorado"), None, None),
            &annotator(),
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_unknown_location_is_empty_regardless_of_dates() {
        let a = annotator();
        let recs = records();
        assert!(filter_reviews(&recs, &query(Some("Nonexistent, Place"), None, None), &a).is_empty());
        assert!(filter_reviews(
            &recs,
            &query(Some("Nonexistent, Place"), Some("2000-01-01"), Some("2100-01-01")),
            &a
        )
        .is_empty());
        assert!(filter_reviews(
            &recs,
            &query(Some("Nonexistent, Place"), Some("garbage"), None),
            &a
        )
        .is_empty());
    }

    #[test]
    fn test_unknown_location_skips_scoring() {
        let recs = records();
        filter_reviews(&recs, &query(Some("Nowhere, Nowhere"), None, None), &annotator());
        assert!(recs.iter().all(|r| !r.is_scored()));
    }

    #[test]
    fn test_start_date_inclusive_at_midnight() {
        let out = filter_reviews(&records(), &query(None, Some("2024-01-01"), None), &annotator());
        assert_eq!(ids(&out), vec!["2", "4", "5", "3"]);
    }

    #[test]
    fn test_end_date_is_midnight_boundary() {
        let out = filter_reviews(&records(), &query(None, None, Some("2024-01-01")), &annotator());
        // 08:15 on the end date is excluded
        assert_eq!(ids(&out), vec!["2", "1"]);
    }

    #[test]
    fn test_same_start_and_end_matches_exact_midnight_only() {
        let out = filter_reviews(
            &records(),
            &query(None, Some("2024-01-01"), Some("2024-01-01")),
            &annotator(),
        );
        assert_eq!(ids(&out), vec!["2"]);
    }

    #[test]
    fn test_invalid_dates_are_ignored() {
        let a = annotator();
        let recs = records();
        let baseline = filter_reviews(&recs, &ReviewQuery::default(), &a);

        let bad_start = filter_reviews(&recs, &query(None, Some("not-a-date"), None), &a);
        let bad_end = filter_reviews(&recs, &query(None, None, Some("2024-02-31")), &a);

        assert_eq!(bad_start, baseline);
        assert_eq!(bad_end, baseline);
    }

    #[test]
    fn test_invalid_start_with_valid_end() {
        let out = filter_reviews(
            &records(),
            &query(None, Some("01/01/2024"), Some("2024-01-02")),
            &annotator(),
        );
        assert_eq!(ids(&out), vec!["2", "1", "4", "3"]);
    }

    #[test]
    fn test_filters_compose() {
        let out = filter_reviews(
            &records(),
            &query(Some("Denver, Colorado"), Some("2024-01-01"), Some("2024-01-02")),
            &annotator(),
        );
        assert_eq!(ids(&out), vec!["4", "3"]);
    }

    #[test]
    fn test_empty_values_mean_no_filter() {
        let a = annotator();
        let recs = records();
        let out = filter_reviews(&recs, &query(Some(""), Some(""), Some("")), &a);
        assert_eq!(out, filter_reviews(&recs, &ReviewQuery::default(), &a));
    }

    #[test]
    fn test_only_matches_are_scored() {
        let recs = records();
        filter_reviews(&recs, &query(Some("Tucson, Arizona"), None, None), &annotator());
        let scored: Vec<&str> = recs
            .iter()
            .filter(|r| r.is_scored())
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(scored, vec!["5"]);
    }

    #[test]
    fn test_from_pairs_first_non_empty_wins() {
        let pairs = vec![
            ("location".to_string(), "".to_string()),
            ("location".to_string(), "Denver, Colorado".to_string()),
            ("location".to_string(), "Tucson, Arizona".to_string()),
            ("start_date".to_string(), "2024-01-01".to_string()),
            ("other".to_string(), "x".to_string()),
        ];
        let q = ReviewQuery::from_pairs(&pairs);
        assert_eq!(q, query(Some("Denver, Colorado"), Some("2024-01-01"), None));
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let recs = vec![
            rec("a", "Denver, Colorado", "meh", "2024-01-01 00:00:00"),
            rec("b", "Denver, Colorado", "meh", "2024-01-01 00:00:00"),
            rec("c", "Denver, Colorado", "great", "2024-01-01 00:00:00"),
            rec("d", "Denver, Colorado", "meh", "2024-01-01 00:00:00"),
        ];
        let out = filter_reviews(&recs, &ReviewQuery::default(), &annotator());
        assert_eq!(ids(&out), vec!["c", "a", "b", "d"]);
    }
}
