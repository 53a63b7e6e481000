//! VADER lexicon scorer
//!
//! Wraps `vader_sentiment`'s `polarity_scores`. Proportions are reported to
//! three places and `compound` to four, matching VADER's published output.

use super::SentimentScorer;
use crate::models::Sentiment;
use vader_sentiment::SentimentIntensityAnalyzer;

/// Deterministic VADER sentiment scorer
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> Sentiment {
        let analyzer = SentimentIntensityAnalyzer::new();
        let scores = analyzer.polarity_scores(text);
        let axis = |key: &str| scores.get(key).copied().unwrap_or(0.0);

        Sentiment {
            neg: round_to(axis("neg"), 3),
            neu: round_to(axis("neu"), 3),
            pos: round_to(axis("pos"), 3),
            compound: round_to(axis("compound").clamp(-1.0, 1.0), 4),
        }
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> Sentiment {
        LexiconScorer::new().score(text)
    }

    #[test]
    fn test_positive_phrase() {
        let s = score("Great service");
        assert_eq!(s.compound, 0.6249);
        assert_eq!(s.pos, 0.804);
        assert_eq!(s.neu, 0.196);
        assert_eq!(s.neg, 0.0);
    }

    #[test]
    fn test_negative_phrase() {
        let s = score("The food was terrible and the staff were rude");
        assert!(s.compound < -0.5);
        assert!(s.neg > s.pos);
    }

    #[test]
    fn test_neutral_phrase() {
        let s = score("We ordered the soup at noon");
        assert_eq!(s.compound, 0.0);
        assert_eq!(s.neu, 1.0);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(score("   ").compound, 0.0);
    }

    #[test]
    fn test_negation_flips_sign() {
        assert!(score("The service was good").compound > 0.0);
        assert!(score("The service was not good").compound < 0.0);
    }

    #[test]
    fn test_booster_intensifies() {
        assert!(score("very good").compound > score("good").compound);
    }

    #[test]
    fn test_exclamation_amplifies() {
        assert!(score("good!!!").compound > score("good").compound);
        assert!(score("bad!!!").compound < score("bad").compound);
    }

    #[test]
    fn test_but_favors_second_clause() {
        assert!(score("The room was nice but the staff was rude").compound < 0.0);
    }

    #[test]
    fn test_vocabulary_beyond_common_words() {
        // Words like these carry valence in the full VADER lexicon
        assert!(score("The barista was adorable").compound > 0.0);
        assert!(score("What a disaster").compound < 0.0);
    }

    #[test]
    fn test_compound_bounds() {
        let gush = "amazing wonderful excellent superb perfect best love great!!!! ".repeat(20);
        let s = score(&gush);
        assert!(s.compound <= 1.0 && s.compound > 0.99);

        let rant = "worst horrible awful terrible hate disgusting!!!! ".repeat(20);
        let s = score(&rant);
        assert!(s.compound >= -1.0 && s.compound < -0.99);
    }

    #[test]
    fn test_proportions_sum_to_one() {
        let s = score("Friendly staff, but the wait was slow and the room was dirty");
        let total = s.neg + s.neu + s.pos;
        assert!((total - 1.0).abs() < 0.01, "total was {total}");
    }

    #[test]
    fn test_deterministic() {
        let text = "Really helpful people, would recommend!";
        assert_eq!(score(text), score(text));
    }
}
