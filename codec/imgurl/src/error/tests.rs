#![allow(clippy::unwrap_used)]

use super::{check_segments, RequestError, UrlPart};
use pretty_assertions::assert_eq;

#[test]
fn plain_segments_pass() {
    assert_eq!(check_segments(UrlPart::Endpoint, "https://cdn.example.com/media"), Ok(()));
    assert_eq!(check_segments(UrlPart::ImageId, "12345"), Ok(()));
    assert_eq!(check_segments(UrlPart::Version, "v2"), Ok(()));
    assert_eq!(check_segments(UrlPart::ImageName, "photos/cat.jpg"), Ok(()));
}

#[test]
fn keyword_spellings_are_rejected_in_any_case() {
    assert_eq!(
        check_segments(UrlPart::ImageId, "Crop"),
        Err(RequestError::KeywordSegment {
            part: UrlPart::ImageId,
            segment: "Crop".to_owned(),
        })
    );
    assert!(check_segments(UrlPart::Version, "FIT").is_err());
    assert!(check_segments(UrlPart::Endpoint, "http://fill/images").is_err());
    assert!(check_segments(UrlPart::Endpoint, "//cdn.example.com/canvas").is_err());
}

#[test]
fn keyword_inside_a_segment_is_fine() {
    assert_eq!(check_segments(UrlPart::Endpoint, "http://fill.example.com"), Ok(()));
    assert_eq!(check_segments(UrlPart::ImageId, "crop2"), Ok(()));
}

#[test]
fn image_name_may_end_with_a_keyword() {
    assert_eq!(check_segments(UrlPart::ImageName, "fit"), Ok(()));
    assert_eq!(check_segments(UrlPart::ImageName, "a/crop"), Ok(()));
    assert_eq!(
        check_segments(UrlPart::ImageName, "fit/cat.jpg"),
        Err(RequestError::KeywordSegment {
            part: UrlPart::ImageName,
            segment: "fit".to_owned(),
        })
    );
}

#[test]
fn id_and_version_are_single_segments() {
    assert_eq!(
        check_segments(UrlPart::ImageId, "a/b"),
        Err(RequestError::Slash {
            part: UrlPart::ImageId,
            value: "a/b".to_owned(),
        })
    );
    assert!(check_segments(UrlPart::Version, "v1/").is_err());
}

#[test]
fn messages_name_the_part() {
    let err = check_segments(UrlPart::ImageId, "crop").unwrap_err();
    assert_eq!(err.to_string(), "image id segment `crop` is an operation keyword");
}
