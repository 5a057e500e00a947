//! Wire codec tests for the four survey variants.

use std::collections::BTreeMap;

use qrs_model::{
    Survey, SurveyError, SurveyKind, decode_survey, decode_surveys, encode_survey, encode_surveys,
};
use serde_json::{Value, json};

fn scan_to_vote_record() -> Value {
    json!({
        "_id": "s1",
        "title": "T",
        "description": "D",
        "surveyType": "scanToVote",
        "generatedUrl": "https://x/s1",
        "isClosed": false,
        "isArchived": false,
        "surveyMetadata": {"thisIsEmpty": true},
        "options": {"allowsDuplicateVotes": false},
        "participants": {"count": 0}
    })
}

fn reencoded(survey: &Survey) -> Value {
    let json = encode_survey(survey).expect("encode survey");
    serde_json::from_str(&json).expect("encoded survey is valid JSON")
}

#[test]
fn scan_to_vote_decodes_and_reencodes_identically() {
    let record = scan_to_vote_record();
    let survey = decode_survey(&record.to_string()).expect("decode scanToVote");

    assert_eq!(survey.kind(), SurveyKind::ScanToVote);
    assert_eq!(survey.id(), "s1");
    assert_eq!(survey.title(), "T");
    assert_eq!(survey.description(), "D");
    assert_eq!(survey.generated_url().as_str(), "https://x/s1");
    assert!(!survey.is_closed());
    assert!(!survey.is_archived());
    assert!(!survey.allows_duplicate_votes());
    assert_eq!(survey.number_of_participants(), 0);

    assert_eq!(reencoded(&survey), record);
}

#[test]
fn like_or_dislike_decodes_tallies() {
    let record = json!({
        "_id": "s2",
        "title": "Lunch menu",
        "description": "Did you like it?",
        "surveyType": "likeOrDislike",
        "generatedUrl": "https://x/s2",
        "isClosed": false,
        "isArchived": false,
        "surveyMetadata": {"thisIsEmpty": true},
        "options": {"allowsDuplicateVotes": true},
        "participants": {"count": 12, "likes": 9, "dislikes": 3}
    });
    let survey = decode_survey(&record.to_string()).expect("decode likeOrDislike");

    let narrowed = survey.as_like_or_dislike().expect("narrow to likeOrDislike");
    assert_eq!(narrowed.likes(), 9);
    assert_eq!(narrowed.dislikes(), 3);
    assert_eq!(narrowed.number_of_participants(), 12);
    assert!(survey.allows_duplicate_votes());

    assert_eq!(reencoded(&survey), record);
}

#[test]
fn slider_average_decodes_scale_metadata() {
    let record = json!({
        "_id": "s3",
        "title": "Spiciness",
        "description": "Mild to hot",
        "surveyType": "sliderAverage",
        "generatedUrl": "https://x/s3",
        "isClosed": true,
        "isArchived": false,
        "surveyMetadata": {
            "left": {"title": "Mild", "color": "#00ff00"},
            "right": {"title": "Hot", "color": "#ff0000"}
        },
        "options": {"allowsDuplicateVotes": false},
        "participants": {"count": 4, "average": 2.25}
    });
    let survey = decode_survey(&record.to_string()).expect("decode sliderAverage");

    let narrowed = survey.as_slider_average().expect("narrow to sliderAverage");
    assert_eq!(narrowed.left_title(), "Mild");
    assert_eq!(narrowed.left_color(), "#00ff00");
    assert_eq!(narrowed.right_title(), "Hot");
    assert_eq!(narrowed.right_color(), "#ff0000");
    assert_eq!(narrowed.average(), 2.25);
    assert!(survey.is_closed());

    assert_eq!(reencoded(&survey), record);
}

#[test]
fn slider_histogram_decodes_buckets() {
    let record = json!({
        "_id": "s4",
        "title": "Rate 1-10",
        "description": "",
        "surveyType": "sliderHistogram",
        "generatedUrl": "https://x/s4",
        "isClosed": false,
        "isArchived": true,
        "surveyMetadata": {"min": 1, "max": 10},
        "options": {"allowsDuplicateVotes": false},
        "participants": {"count": 5, "histogram": {"2": 1, "7": 4}}
    });
    let survey = decode_survey(&record.to_string()).expect("decode sliderHistogram");

    let narrowed = survey
        .as_slider_histogram()
        .expect("narrow to sliderHistogram");
    assert_eq!(narrowed.min(), 1);
    assert_eq!(narrowed.max(), 10);
    let histogram = narrowed.histogram().expect("histogram present");
    assert_eq!(histogram, &BTreeMap::from([(2, 1), (7, 4)]));

    assert_eq!(reencoded(&survey), record);
}

#[test]
fn null_histogram_is_absent_and_reencodes_null() {
    let record = json!({
        "_id": "s5",
        "title": "Fresh",
        "description": "No votes yet",
        "surveyType": "sliderHistogram",
        "generatedUrl": "https://x/s5",
        "isClosed": false,
        "isArchived": false,
        "surveyMetadata": {"min": 0, "max": 5},
        "options": {"allowsDuplicateVotes": false},
        "participants": {"count": 0, "histogram": null}
    });
    let survey = decode_survey(&record.to_string()).expect("decode sliderHistogram");

    let narrowed = survey
        .as_slider_histogram()
        .expect("narrow to sliderHistogram");
    assert!(narrowed.histogram().is_none());

    let encoded = reencoded(&survey);
    assert_eq!(
        encoded.pointer("/participants/histogram"),
        Some(&Value::Null)
    );
    assert_eq!(encoded, record);
}

#[test]
fn omitted_histogram_key_decodes_as_absent() {
    let record = json!({
        "_id": "s7",
        "title": "Sparse",
        "description": "Server omits empty tallies",
        "surveyType": "sliderHistogram",
        "generatedUrl": "https://x/s7",
        "isClosed": false,
        "isArchived": false,
        "surveyMetadata": {"min": 0, "max": 5},
        "options": {"allowsDuplicateVotes": false},
        "participants": {"count": 0}
    });
    let survey = decode_survey(&record.to_string()).expect("decode without histogram key");

    let narrowed = survey
        .as_slider_histogram()
        .expect("narrow to sliderHistogram");
    assert!(narrowed.histogram().is_none());

    // Re-encoding normalizes the absent state to an explicit null.
    let encoded = reencoded(&survey);
    assert_eq!(
        encoded.pointer("/participants/histogram"),
        Some(&Value::Null)
    );
}

#[test]
fn empty_histogram_object_is_an_empty_map_not_absent() {
    let record = json!({
        "_id": "s6",
        "title": "Edge",
        "description": "",
        "surveyType": "sliderHistogram",
        "generatedUrl": "https://x/s6",
        "isClosed": false,
        "isArchived": false,
        "surveyMetadata": {"min": 0, "max": 5},
        "options": {"allowsDuplicateVotes": false},
        "participants": {"count": 0, "histogram": {}}
    });
    let survey = decode_survey(&record.to_string()).expect("decode sliderHistogram");

    let narrowed = survey
        .as_slider_histogram()
        .expect("narrow to sliderHistogram");
    assert_eq!(narrowed.histogram(), Some(&BTreeMap::new()));

    let encoded = reencoded(&survey);
    assert_eq!(
        encoded.pointer("/participants/histogram"),
        Some(&json!({}))
    );
}

#[test]
fn unrecognized_discriminator_is_rejected() {
    let mut record = scan_to_vote_record();
    record["surveyType"] = json!("ranking");
    let err = decode_survey(&record.to_string()).expect_err("should reject unknown surveyType");
    assert!(matches!(err, SurveyError::MalformedRecord(_)));
}

#[test]
fn missing_discriminator_is_rejected() {
    let mut record = scan_to_vote_record();
    record.as_object_mut().expect("object").remove("surveyType");
    let err = decode_survey(&record.to_string()).expect_err("should reject missing surveyType");
    assert!(matches!(err, SurveyError::MalformedRecord(_)));
}

#[test]
fn discriminator_mismatching_nested_shape_is_rejected() {
    // A sliderAverage discriminator over scanToVote-shaped nested groups.
    let mut record = scan_to_vote_record();
    record["surveyType"] = json!("sliderAverage");
    let err = decode_survey(&record.to_string()).expect_err("should reject mismatched shape");
    assert!(matches!(err, SurveyError::MalformedRecord(_)));
}

#[test]
fn list_payloads_round_trip() {
    let records = json!([
        scan_to_vote_record(),
        {
            "_id": "s2",
            "title": "Second",
            "description": "",
            "surveyType": "likeOrDislike",
            "generatedUrl": "https://x/s2",
            "isClosed": false,
            "isArchived": false,
            "surveyMetadata": {"thisIsEmpty": true},
            "options": {"allowsDuplicateVotes": false},
            "participants": {"count": 1, "likes": 1, "dislikes": 0}
        }
    ]);
    let surveys = decode_surveys(&records.to_string()).expect("decode list");
    assert_eq!(surveys.len(), 2);
    assert_eq!(surveys[0].kind(), SurveyKind::ScanToVote);
    assert_eq!(surveys[1].kind(), SurveyKind::LikeOrDislike);

    let encoded = encode_surveys(&surveys).expect("encode list");
    let encoded: Value = serde_json::from_str(&encoded).expect("valid JSON");
    assert_eq!(encoded, records);
}

mod round_trip_law {
    use proptest::prelude::*;
    use qrs_model::{
        LikeOrDislikeParticipants, LikeOrDislikeSurvey, ScanToVoteParticipants, ScanToVoteSurvey,
        SliderAverageMetadata, SliderAverageParticipants, SliderAverageSurvey,
        SliderHistogramMetadata, SliderHistogramParticipants, SliderHistogramSurvey, SliderLabel,
        Survey, SurveyBase, SurveyOptions, decode_survey, encode_survey,
    };
    use url::Url;

    fn text() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 ]{0,24}"
    }

    fn base() -> impl Strategy<Value = SurveyBase> {
        ("[a-f0-9]{8}", text(), text(), any::<bool>(), any::<bool>()).prop_map(
            |(id, title, description, is_closed, is_archived)| {
                let url = Url::parse(&format!("https://qr.example/s/{id}"))
                    .expect("generated url is valid");
                let mut base = SurveyBase::new(id, title, description, url);
                base.is_closed = is_closed;
                base.is_archived = is_archived;
                base
            },
        )
    }

    fn options() -> impl Strategy<Value = SurveyOptions> {
        any::<bool>().prop_map(|allows_duplicate_votes| SurveyOptions {
            allows_duplicate_votes,
        })
    }

    fn label() -> impl Strategy<Value = SliderLabel> {
        (text(), "#[0-9a-f]{6}").prop_map(|(title, color)| SliderLabel { title, color })
    }

    // Eighths are exactly representable, so JSON round-trips are value-stable.
    fn average() -> impl Strategy<Value = f32> {
        (0u32..=8000).prop_map(|n| n as f32 / 8.0)
    }

    fn survey() -> impl Strategy<Value = Survey> {
        let scan_to_vote = (base(), options(), any::<u32>()).prop_map(|(base, options, count)| {
            Survey::ScanToVote(ScanToVoteSurvey::new(
                base,
                options,
                ScanToVoteParticipants {
                    count: u64::from(count),
                },
            ))
        });
        let like_or_dislike = (base(), options(), any::<u16>(), any::<u16>()).prop_map(
            |(base, options, likes, dislikes)| {
                Survey::LikeOrDislike(LikeOrDislikeSurvey::new(
                    base,
                    options,
                    LikeOrDislikeParticipants {
                        count: u64::from(likes) + u64::from(dislikes),
                        likes: u64::from(likes),
                        dislikes: u64::from(dislikes),
                    },
                ))
            },
        );
        let slider_average = (base(), label(), label(), options(), any::<u32>(), average())
            .prop_map(|(base, left, right, options, count, average)| {
                Survey::SliderAverage(SliderAverageSurvey::new(
                    base,
                    SliderAverageMetadata { left, right },
                    options,
                    SliderAverageParticipants {
                        count: u64::from(count),
                        average,
                    },
                ))
            });
        let slider_histogram = (
            base(),
            -50i64..0,
            0i64..50,
            options(),
            proptest::option::of(proptest::collection::btree_map(
                -50i64..50,
                0u64..10_000,
                0..8,
            )),
        )
            .prop_map(|(base, min, max, options, histogram)| {
                let count = histogram
                    .as_ref()
                    .map_or(0, |buckets| buckets.values().sum());
                Survey::SliderHistogram(SliderHistogramSurvey::new(
                    base,
                    SliderHistogramMetadata { min, max },
                    options,
                    SliderHistogramParticipants { count, histogram },
                ))
            });
        prop_oneof![scan_to_vote, like_or_dislike, slider_average, slider_histogram]
    }

    proptest! {
        #[test]
        fn decode_encode_is_identity(survey in survey()) {
            let encoded = encode_survey(&survey).expect("encode survey");
            let decoded = decode_survey(&encoded).expect("decode encoded survey");
            prop_assert_eq!(decoded, survey);
        }
    }
}
