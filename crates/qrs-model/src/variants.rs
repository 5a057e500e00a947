//! Per-variant survey records: metadata, options, and participant tallies.
//!
//! Each survey variant groups three nested records on the wire
//! (`surveyMetadata`, `options`, `participants`) next to the flattened base
//! fields. Metadata and participants are server-owned and immutable here;
//! options are the only user-mutable group.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::survey::SurveyBase;

/// Marker metadata for variants that carry no display configuration.
///
/// The wire shape is `{"thisIsEmpty": true}`; the flag is kept as decoded so
/// a record re-encodes exactly what it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyMetadata {
    #[serde(rename = "thisIsEmpty")]
    this_is_empty: bool,
}

impl Default for EmptyMetadata {
    fn default() -> Self {
        Self { this_is_empty: true }
    }
}

/// One end of a slider scale: the label text and its display color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderLabel {
    pub title: String,
    pub color: String,
}

/// Display configuration for a slider-average survey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderAverageMetadata {
    pub left: SliderLabel,
    pub right: SliderLabel,
}

/// Display configuration for a slider-histogram survey: the inclusive
/// bucket range of the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderHistogramMetadata {
    pub min: i64,
    pub max: i64,
}

/// Mutable behavioral settings, identical in shape for every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyOptions {
    pub allows_duplicate_votes: bool,
}

/// Tally record for scan-to-vote surveys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanToVoteParticipants {
    pub count: u64,
}

/// Tally record for like-or-dislike surveys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeOrDislikeParticipants {
    pub count: u64,
    pub likes: u64,
    pub dislikes: u64,
}

/// Tally record for slider-average surveys.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderAverageParticipants {
    pub count: u64,
    pub average: f32,
}

/// Tally record for slider-histogram surveys.
///
/// `histogram` is `None` when the server reports `null` or omits the key
/// (no votes yet); an empty object is a distinct state and decodes to an
/// empty map. Re-encoding always writes the key, `null` for the absent
/// state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderHistogramParticipants {
    pub count: u64,
    #[serde(default, with = "histogram_buckets")]
    pub histogram: Option<BTreeMap<i64, u64>>,
}

/// A survey whose participants simply scan the QR code; scanning is the vote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanToVoteSurvey {
    #[serde(flatten)]
    pub base: SurveyBase,
    survey_metadata: EmptyMetadata,
    pub options: SurveyOptions,
    participants: ScanToVoteParticipants,
}

impl ScanToVoteSurvey {
    pub fn new(base: SurveyBase, options: SurveyOptions, participants: ScanToVoteParticipants) -> Self {
        Self {
            base,
            survey_metadata: EmptyMetadata::default(),
            options,
            participants,
        }
    }

    pub fn metadata(&self) -> &EmptyMetadata {
        &self.survey_metadata
    }

    pub fn participants(&self) -> &ScanToVoteParticipants {
        &self.participants
    }

    pub fn number_of_participants(&self) -> u64 {
        self.participants.count
    }
}

/// A survey where each participant votes like or dislike.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeOrDislikeSurvey {
    #[serde(flatten)]
    pub base: SurveyBase,
    survey_metadata: EmptyMetadata,
    pub options: SurveyOptions,
    participants: LikeOrDislikeParticipants,
}

impl LikeOrDislikeSurvey {
    pub fn new(
        base: SurveyBase,
        options: SurveyOptions,
        participants: LikeOrDislikeParticipants,
    ) -> Self {
        Self {
            base,
            survey_metadata: EmptyMetadata::default(),
            options,
            participants,
        }
    }

    pub fn metadata(&self) -> &EmptyMetadata {
        &self.survey_metadata
    }

    pub fn participants(&self) -> &LikeOrDislikeParticipants {
        &self.participants
    }

    pub fn number_of_participants(&self) -> u64 {
        self.participants.count
    }

    pub fn likes(&self) -> u64 {
        self.participants.likes
    }

    pub fn dislikes(&self) -> u64 {
        self.participants.dislikes
    }
}

/// A survey where participants place a slider between two labeled ends and
/// the server reports the running average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderAverageSurvey {
    #[serde(flatten)]
    pub base: SurveyBase,
    survey_metadata: SliderAverageMetadata,
    pub options: SurveyOptions,
    participants: SliderAverageParticipants,
}

impl SliderAverageSurvey {
    pub fn new(
        base: SurveyBase,
        metadata: SliderAverageMetadata,
        options: SurveyOptions,
        participants: SliderAverageParticipants,
    ) -> Self {
        Self {
            base,
            survey_metadata: metadata,
            options,
            participants,
        }
    }

    pub fn metadata(&self) -> &SliderAverageMetadata {
        &self.survey_metadata
    }

    pub fn participants(&self) -> &SliderAverageParticipants {
        &self.participants
    }

    pub fn number_of_participants(&self) -> u64 {
        self.participants.count
    }

    pub fn average(&self) -> f32 {
        self.participants.average
    }

    pub fn left_title(&self) -> &str {
        &self.survey_metadata.left.title
    }

    pub fn left_color(&self) -> &str {
        &self.survey_metadata.left.color
    }

    pub fn right_title(&self) -> &str {
        &self.survey_metadata.right.title
    }

    pub fn right_color(&self) -> &str {
        &self.survey_metadata.right.color
    }
}

/// A survey where participants pick an integer bucket on a slider and the
/// server reports a bucket histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderHistogramSurvey {
    #[serde(flatten)]
    pub base: SurveyBase,
    survey_metadata: SliderHistogramMetadata,
    pub options: SurveyOptions,
    participants: SliderHistogramParticipants,
}

impl SliderHistogramSurvey {
    pub fn new(
        base: SurveyBase,
        metadata: SliderHistogramMetadata,
        options: SurveyOptions,
        participants: SliderHistogramParticipants,
    ) -> Self {
        Self {
            base,
            survey_metadata: metadata,
            options,
            participants,
        }
    }

    pub fn metadata(&self) -> &SliderHistogramMetadata {
        &self.survey_metadata
    }

    pub fn participants(&self) -> &SliderHistogramParticipants {
        &self.participants
    }

    pub fn number_of_participants(&self) -> u64 {
        self.participants.count
    }

    pub fn min(&self) -> i64 {
        self.survey_metadata.min
    }

    pub fn max(&self) -> i64 {
        self.survey_metadata.max
    }

    pub fn histogram(&self) -> Option<&BTreeMap<i64, u64>> {
        self.participants.histogram.as_ref()
    }
}

/// Wire mapping for histogram buckets.
///
/// JSON object keys are strings, and the internally tagged survey envelope
/// buffers nested content, which defeats `serde_json`'s built-in
/// integer-keyed map handling. Keys are therefore converted explicitly in
/// both directions.
mod histogram_buckets {
    use std::collections::BTreeMap;

    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(
        value: &Option<BTreeMap<i64, u64>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(buckets) => {
                let keyed: BTreeMap<String, u64> = buckets
                    .iter()
                    .map(|(bucket, frequency)| (bucket.to_string(), *frequency))
                    .collect();
                keyed.serialize(serializer)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<BTreeMap<i64, u64>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let keyed = Option::<BTreeMap<String, u64>>::deserialize(deserializer)?;
        keyed
            .map(|buckets| {
                buckets
                    .into_iter()
                    .map(|(bucket, frequency)| {
                        bucket
                            .parse::<i64>()
                            .map(|bucket| (bucket, frequency))
                            .map_err(|_| {
                                D::Error::custom(format!("non-integer histogram bucket: {bucket}"))
                            })
                    })
                    .collect::<Result<BTreeMap<i64, u64>, D::Error>>()
            })
            .transpose()
    }
}
