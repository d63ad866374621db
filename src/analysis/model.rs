//! Wire types returned by the analysis service.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// The three sentiment classes the UI knows how to style.
///
/// The service sends a free-form label; anything it doesn't recognise is
/// styled as `Neutral`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Positive" => Sentiment::Positive,
            "Negative" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }

    /// Tag used by sentence badges.
    pub fn sentence_tag(&self) -> &'static str {
        match self {
            Sentiment::Positive => "pos",
            Sentiment::Negative => "neg",
            Sentiment::Neutral => "neu",
        }
    }

    /// Tag used by history rows.
    pub fn history_tag(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Pos",
            Sentiment::Negative => "Neg",
            Sentiment::Neutral => "Neu",
        }
    }
}

/// Emotion name → percentage, in the order the service listed them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Emotions(Vec<(String, f64)>);

impl Emotions {
    #[cfg(test)]
    pub fn new(entries: Vec<(String, f64)>) -> Self {
        Self(entries)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, pct)| (name.as_str(), *pct))
    }

    /// Entries sorted by percentage, highest first. Ties keep insertion order.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        entries
    }

    /// `"joy (40%), anger (25%)"` in insertion order, or a placeholder when empty.
    pub fn summary(&self) -> String {
        if self.is_empty() {
            return t!("result.no_emotions").to_string();
        }
        self.iter()
            .map(|(name, pct)| format!("{} ({})", name, crate::utils::format_percent(pct)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<'de> Deserialize<'de> for Emotions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EmotionsVisitor;

        impl<'de> Visitor<'de> for EmotionsVisitor {
            type Value = Emotions;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of emotion name to percentage")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Emotions, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, pct)) = map.next_entry::<String, f64>()? {
                    entries.push((name, pct));
                }
                Ok(Emotions(entries))
            }

            fn visit_unit<E>(self) -> Result<Emotions, E> {
                Ok(Emotions::default())
            }
        }

        deserializer.deserialize_any(EmotionsVisitor)
    }
}

/// Per-sentence sub-result.
#[derive(Debug, Clone, Deserialize)]
pub struct SentenceResult {
    pub text: String,
    pub sentiment: String,
    #[serde(default)]
    pub emotions: Emotions,
}

impl SentenceResult {
    pub fn sentiment_class(&self) -> Sentiment {
        Sentiment::from_label(&self.sentiment)
    }
}

/// Response body of `POST /analyze`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisResult {
    pub text: String,
    pub sentiment: String,
    pub polarity: f64,
    #[serde(default)]
    pub subjectivity: Option<f64>,
    #[serde(default)]
    pub emotions: Emotions,
    #[serde(default)]
    pub sentence_breakdown: Vec<SentenceResult>,
}

impl AnalysisResult {
    pub fn sentiment_class(&self) -> Sentiment {
        Sentiment::from_label(&self.sentiment)
    }

    /// Subjectivity, treating a missing value as 0.
    pub fn subjectivity_or_zero(&self) -> f64 {
        self.subjectivity.unwrap_or(0.0)
    }
}

/// Request body of `POST /analyze`.
#[derive(Debug, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub text: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> AnalysisResult {
        rust_i18n::set_locale("en");
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn sentiment_from_label_known_values() {
        assert_eq!(Sentiment::from_label("Positive"), Sentiment::Positive);
        assert_eq!(Sentiment::from_label("Negative"), Sentiment::Negative);
        assert_eq!(Sentiment::from_label("Neutral"), Sentiment::Neutral);
    }

    #[test]
    fn sentiment_unknown_label_is_neutral() {
        assert_eq!(Sentiment::from_label("Mixed"), Sentiment::Neutral);
        assert_eq!(Sentiment::from_label("positive"), Sentiment::Neutral);
        assert_eq!(Sentiment::from_label(""), Sentiment::Neutral);
    }

    #[test]
    fn sentiment_tags() {
        assert_eq!(Sentiment::Positive.sentence_tag(), "pos");
        assert_eq!(Sentiment::Negative.history_tag(), "Neg");
        assert_eq!(Sentiment::Neutral.history_tag(), "Neu");
    }

    #[test]
    fn parses_full_service_response() {
        let r = parse(
            r#"{
                "text": "I love it. I hate waiting.",
                "polarity": 0.42,
                "subjectivity": 0.6,
                "sentiment": "Positive",
                "emotions": {"Happy": 66.7, "Anger": 33.3},
                "sentence_breakdown": [
                    {"text": "I love it.", "polarity": 0.64, "subjectivity": 0.6,
                     "sentiment": "Positive", "emotions": {"Happy": 100.0}},
                    {"text": "I hate waiting.", "polarity": -0.57, "subjectivity": 0.9,
                     "sentiment": "Negative", "emotions": {}}
                ]
            }"#,
        );
        assert_eq!(r.sentiment_class(), Sentiment::Positive);
        assert_eq!(r.polarity, 0.42);
        assert_eq!(r.subjectivity_or_zero(), 0.6);
        assert_eq!(r.emotions.len(), 2);
        assert_eq!(r.sentence_breakdown.len(), 2);
        assert_eq!(r.sentence_breakdown[1].sentiment_class(), Sentiment::Negative);
        assert!(r.sentence_breakdown[1].emotions.is_empty());
    }

    #[test]
    fn optional_fields_default() {
        let r = parse(r#"{"text": "ok", "polarity": 0.0, "sentiment": "Neutral"}"#);
        assert_eq!(r.subjectivity, None);
        assert_eq!(r.subjectivity_or_zero(), 0.0);
        assert!(r.emotions.is_empty());
        assert!(r.sentence_breakdown.is_empty());
    }

    #[test]
    fn null_subjectivity_and_emotions_are_tolerated() {
        let r = parse(
            r#"{"text": "ok", "polarity": 0.1, "sentiment": "Neutral",
                "subjectivity": null, "emotions": null}"#,
        );
        assert_eq!(r.subjectivity_or_zero(), 0.0);
        assert!(r.emotions.is_empty());
    }

    #[test]
    fn emotions_keep_wire_order() {
        let r = parse(
            r#"{"text": "x", "polarity": 0, "sentiment": "Neutral",
                "emotions": {"zeal": 10, "awe": 30, "calm": 60}}"#,
        );
        let names: Vec<&str> = r.emotions.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["zeal", "awe", "calm"]);
    }

    #[test]
    fn ranked_sorts_descending() {
        let e = Emotions::new(vec![
            ("calm".into(), 10.0),
            ("joy".into(), 40.0),
            ("anger".into(), 25.0),
        ]);
        let names: Vec<&str> = e.ranked().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["joy", "anger", "calm"]);
    }

    #[test]
    fn ranked_ties_keep_insertion_order() {
        let e = Emotions::new(vec![
            ("b".into(), 50.0),
            ("a".into(), 50.0),
            ("c".into(), 50.0),
        ]);
        let names: Vec<&str> = e.ranked().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn summary_joins_in_insertion_order() {
        rust_i18n::set_locale("en");
        let e = Emotions::new(vec![("Fear".into(), 25.0), ("Hope".into(), 75.0)]);
        assert_eq!(e.summary(), "Fear (25%), Hope (75%)");
    }

    #[test]
    fn summary_placeholder_when_empty() {
        rust_i18n::set_locale("en");
        assert_eq!(Emotions::default().summary(), "No specific emotions detected");
    }

    #[test]
    fn missing_required_field_is_a_decode_error() {
        let err = serde_json::from_str::<AnalysisResult>(r#"{"text": "x", "polarity": 0}"#);
        assert!(err.is_err());
    }

    #[test]
    fn request_body_shape() {
        let body = serde_json::to_string(&AnalyzeRequest { text: "hi there" }).unwrap();
        assert_eq!(body, r#"{"text":"hi there"}"#);
    }
}
