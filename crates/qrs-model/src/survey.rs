//! The survey entity: a closed sum over the four variants.
//!
//! A survey is always one of four concrete shapes, selected on the wire by
//! the `surveyType` discriminator. The shared identity and presentation
//! fields live in [`SurveyBase`], embedded in every variant, so there is no
//! representable "base-only" survey and no variant/discriminator mismatch.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::SurveyError;
use crate::variants::{
    LikeOrDislikeSurvey, ScanToVoteSurvey, SliderAverageSurvey, SliderHistogramSurvey,
};

/// Identity and presentation fields common to every survey variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyBase {
    /// Server-assigned identity, immutable after construction.
    #[serde(rename = "_id")]
    id: String,
    pub title: String,
    pub description: String,
    /// Canonical shareable link, the payload of the survey's QR code.
    pub generated_url: Url,
    /// Closed surveys accept no new responses.
    pub is_closed: bool,
    /// Archived surveys are hidden from active lists.
    pub is_archived: bool,
}

impl SurveyBase {
    /// Create the common record for a new survey. Lifecycle flags start
    /// cleared; the server owns them afterwards.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        generated_url: Url,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            generated_url,
            is_closed: false,
            is_archived: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// The four survey kinds, as used for the `surveyType` wire discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SurveyKind {
    ScanToVote,
    LikeOrDislike,
    SliderAverage,
    SliderHistogram,
}

impl SurveyKind {
    /// The discriminator value as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            SurveyKind::ScanToVote => "scanToVote",
            SurveyKind::LikeOrDislike => "likeOrDislike",
            SurveyKind::SliderAverage => "sliderAverage",
            SurveyKind::SliderHistogram => "sliderHistogram",
        }
    }
}

impl fmt::Display for SurveyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SurveyKind {
    type Err = SurveyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scanToVote" => Ok(SurveyKind::ScanToVote),
            "likeOrDislike" => Ok(SurveyKind::LikeOrDislike),
            "sliderAverage" => Ok(SurveyKind::SliderAverage),
            "sliderHistogram" => Ok(SurveyKind::SliderHistogram),
            other => Err(SurveyError::UnknownSurveyKind(other.to_string())),
        }
    }
}

/// A QR-code-backed survey in one of its four concrete shapes.
///
/// The enum is public: exhaustive `match` is the primary dispatch mechanism.
/// [`Survey::branch`] and the `as_*` narrowing accessors cover callers that
/// hold a survey behind callback-styled glue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "surveyType", rename_all = "camelCase")]
pub enum Survey {
    ScanToVote(ScanToVoteSurvey),
    LikeOrDislike(LikeOrDislikeSurvey),
    SliderAverage(SliderAverageSurvey),
    SliderHistogram(SliderHistogramSurvey),
}

impl Survey {
    /// The discriminator matching this survey's concrete shape.
    pub fn kind(&self) -> SurveyKind {
        match self {
            Survey::ScanToVote(_) => SurveyKind::ScanToVote,
            Survey::LikeOrDislike(_) => SurveyKind::LikeOrDislike,
            Survey::SliderAverage(_) => SurveyKind::SliderAverage,
            Survey::SliderHistogram(_) => SurveyKind::SliderHistogram,
        }
    }

    /// The common record shared by every variant.
    pub fn base(&self) -> &SurveyBase {
        match self {
            Survey::ScanToVote(survey) => &survey.base,
            Survey::LikeOrDislike(survey) => &survey.base,
            Survey::SliderAverage(survey) => &survey.base,
            Survey::SliderHistogram(survey) => &survey.base,
        }
    }

    /// Mutable access to the common record, for title/description edits and
    /// close/archive toggles. Identity stays private.
    pub fn base_mut(&mut self) -> &mut SurveyBase {
        match self {
            Survey::ScanToVote(survey) => &mut survey.base,
            Survey::LikeOrDislike(survey) => &mut survey.base,
            Survey::SliderAverage(survey) => &mut survey.base,
            Survey::SliderHistogram(survey) => &mut survey.base,
        }
    }

    pub fn id(&self) -> &str {
        self.base().id()
    }

    pub fn title(&self) -> &str {
        &self.base().title
    }

    pub fn description(&self) -> &str {
        &self.base().description
    }

    pub fn generated_url(&self) -> &Url {
        &self.base().generated_url
    }

    pub fn is_closed(&self) -> bool {
        self.base().is_closed
    }

    pub fn is_archived(&self) -> bool {
        self.base().is_archived
    }

    /// Whether a device may vote more than once, read from the variant's
    /// options record.
    pub fn allows_duplicate_votes(&self) -> bool {
        match self {
            Survey::ScanToVote(survey) => survey.options.allows_duplicate_votes,
            Survey::LikeOrDislike(survey) => survey.options.allows_duplicate_votes,
            Survey::SliderAverage(survey) => survey.options.allows_duplicate_votes,
            Survey::SliderHistogram(survey) => survey.options.allows_duplicate_votes,
        }
    }

    /// Write the duplicate-vote policy into the variant's options record.
    pub fn set_allows_duplicate_votes(&mut self, allows: bool) {
        match self {
            Survey::ScanToVote(survey) => survey.options.allows_duplicate_votes = allows,
            Survey::LikeOrDislike(survey) => survey.options.allows_duplicate_votes = allows,
            Survey::SliderAverage(survey) => survey.options.allows_duplicate_votes = allows,
            Survey::SliderHistogram(survey) => survey.options.allows_duplicate_votes = allows,
        }
    }

    /// Total response count, whatever the variant's tally shape.
    pub fn number_of_participants(&self) -> u64 {
        match self {
            Survey::ScanToVote(survey) => survey.number_of_participants(),
            Survey::LikeOrDislike(survey) => survey.number_of_participants(),
            Survey::SliderAverage(survey) => survey.number_of_participants(),
            Survey::SliderHistogram(survey) => survey.number_of_participants(),
        }
    }

    /// Invoke exactly the callback matching this survey's variant, passing
    /// the narrowed value.
    pub fn branch<R>(
        &self,
        scan_to_vote: impl FnOnce(&ScanToVoteSurvey) -> R,
        like_or_dislike: impl FnOnce(&LikeOrDislikeSurvey) -> R,
        slider_average: impl FnOnce(&SliderAverageSurvey) -> R,
        slider_histogram: impl FnOnce(&SliderHistogramSurvey) -> R,
    ) -> R {
        match self {
            Survey::ScanToVote(survey) => scan_to_vote(survey),
            Survey::LikeOrDislike(survey) => like_or_dislike(survey),
            Survey::SliderAverage(survey) => slider_average(survey),
            Survey::SliderHistogram(survey) => slider_histogram(survey),
        }
    }

    pub fn as_scan_to_vote(&self) -> Option<&ScanToVoteSurvey> {
        match self {
            Survey::ScanToVote(survey) => Some(survey),
            _ => None,
        }
    }

    pub fn as_scan_to_vote_mut(&mut self) -> Option<&mut ScanToVoteSurvey> {
        match self {
            Survey::ScanToVote(survey) => Some(survey),
            _ => None,
        }
    }

    pub fn as_like_or_dislike(&self) -> Option<&LikeOrDislikeSurvey> {
        match self {
            Survey::LikeOrDislike(survey) => Some(survey),
            _ => None,
        }
    }

    pub fn as_like_or_dislike_mut(&mut self) -> Option<&mut LikeOrDislikeSurvey> {
        match self {
            Survey::LikeOrDislike(survey) => Some(survey),
            _ => None,
        }
    }

    pub fn as_slider_average(&self) -> Option<&SliderAverageSurvey> {
        match self {
            Survey::SliderAverage(survey) => Some(survey),
            _ => None,
        }
    }

    pub fn as_slider_average_mut(&mut self) -> Option<&mut SliderAverageSurvey> {
        match self {
            Survey::SliderAverage(survey) => Some(survey),
            _ => None,
        }
    }

    pub fn as_slider_histogram(&self) -> Option<&SliderHistogramSurvey> {
        match self {
            Survey::SliderHistogram(survey) => Some(survey),
            _ => None,
        }
    }

    pub fn as_slider_histogram_mut(&mut self) -> Option<&mut SliderHistogramSurvey> {
        match self {
            Survey::SliderHistogram(survey) => Some(survey),
            _ => None,
        }
    }
}
