#![allow(clippy::unwrap_used)]

use super::*;
use crate::ImageRequest;
use pretty_assertions::assert_eq;

fn image() -> ImageRequest {
    ImageRequest::new("http://test.example.com", "12345")
        .and_then(|request| request.name("cat.jpg"))
        .unwrap()
}

#[test]
fn setters_write_their_bucket() {
    let fit = image().fit().width(10).brightness(5).oil(true);
    let d = fit.descriptor();
    assert_eq!(d.operation_params.get("w"), Some(Some("10")));
    assert_eq!(d.adjustments.get("br"), Some(Some("5")));
    assert_eq!(d.filters.get("oil"), Some(None));
}

#[test]
fn resetting_a_code_keeps_its_position() {
    let url = image().fit().width(1).height(2).width(3).to_url();
    assert_eq!(url, "http://test.example.com/12345/v1/fit/w_3,h_2/cat.jpg");
}

#[test]
fn false_removes_a_flag() {
    let fit = image().fit().oil(true).negative(true).oil(false);
    assert_eq!(fit.descriptor().filters.codes().collect::<Vec<_>>(), vec!["neg"]);
    let fit = fit.baseline(true).baseline(false).auto_adjust(false);
    assert!(fit.descriptor().operation_params.is_empty());
    assert!(!fit.has_adjustments());
}

#[test]
fn has_adjustments_and_filters() {
    let fit = image().fit();
    assert!(!fit.has_adjustments());
    assert!(!fit.has_filters());
    let fit = fit.hue(Level::Auto).blur(10);
    assert!(fit.has_adjustments());
    assert!(fit.has_filters());
}

#[test]
fn unsharp_mask_values() {
    let fill = image().fill().unsharp_mask(0.3, 0.1, 0.5);
    assert_eq!(fill.descriptor().filters.get("us"), Some(Some("0.3_0.1_0.5")));
    let fill = fill.unsharp_mask_auto();
    assert_eq!(fill.descriptor().filters.get("us"), Some(Some("auto")));
}

#[test]
fn quality_default_and_auto() {
    let fit = image().fit().quality_default();
    assert_eq!(fit.descriptor().operation_params.get("q"), Some(Some("75")));
    let fit = fit.quality(Level::Auto);
    assert_eq!(fit.descriptor().operation_params.get("q"), Some(Some("auto")));
}

#[test]
fn unsharp_mask_non_finite_values_are_lowercase() {
    let fill = image().fill().unsharp_mask(f64::INFINITY, f64::NAN, f64::NEG_INFINITY);
    assert_eq!(fill.descriptor().filters.get("us"), Some(Some("inf_nan_-inf")));
    let d = imgurl_parse::parse(&fill.to_url()).unwrap();
    assert_eq!(&d, fill.descriptor());
}

#[test]
fn sharpen_nan_reads_back_unchanged() {
    let fit = image().fit().sharpen(f64::NAN);
    assert_eq!(fit.descriptor().filters.get("shrp"), Some(Some("nan")));
    assert_eq!(&imgurl_parse::parse(&fit.to_url()).unwrap(), fit.descriptor());
    let fit = fit.sharpen(-0.5);
    assert_eq!(fit.descriptor().filters.get("shrp"), Some(Some("-0.5")));
}

#[test]
fn canvas_background_is_lowercase_hex() {
    let color = Color::from_hex(" #FF00AA ").unwrap();
    let canvas = image().canvas().background(color);
    assert_eq!(canvas.descriptor().operation_params.get("c"), Some(Some("ff00aa")));
}

#[test]
fn alignment_and_anchor_use_their_own_codes() {
    let canvas = image().canvas().anchor(Alignment::Left);
    let fill = image().fill().alignment(Alignment::TopRight);
    assert_eq!(canvas.descriptor().operation_params.get("a"), Some(Some("l")));
    assert_eq!(fill.descriptor().operation_params.get("al"), Some(Some("tr")));
}

#[test]
fn resize_filter_is_sent_by_id() {
    let fit = image().fit().resize_filter(ResizeFilter::Lanczos);
    assert_eq!(fit.descriptor().operation_params.get("rf"), Some(Some("22")));
}

#[test]
fn crop_coords() {
    let crop = image().crop().coords(20, 30);
    assert_eq!(
        crop.descriptor().operation_params.codes().collect::<Vec<_>>(),
        vec!["x", "y"]
    );
}

#[test]
fn name_overrides_request_name() {
    let url = image().fit().width(1).name(" dog.png ").unwrap().to_url();
    assert_eq!(url, "http://test.example.com/12345/v1/fit/w_1/dog.png");
}

#[test]
fn name_with_keyword_directory_is_rejected() {
    let fit = image().fit();
    assert_eq!(
        fit.clone().name("Fit/dog.png"),
        Err(RequestError::KeywordSegment {
            part: UrlPart::ImageName,
            segment: "Fit".to_owned(),
        })
    );
    let fit = fit.name("photos/fit").unwrap();
    assert_eq!(fit.descriptor().image_name, "photos/fit");
}

#[test]
fn operation_from_descriptor_picks_the_builder() {
    for kind in OperationKind::ALL {
        let d = Descriptor::new("http://h", "1", kind);
        let op = Operation::from(d.clone());
        assert_eq!(op.kind(), kind);
        assert_eq!(op.descriptor(), &d);
        assert_eq!(op.into_descriptor(), d);
    }
}

#[test]
fn builder_and_operation_display_as_url() {
    let fit = image().fit().width(1);
    let url = fit.to_url();
    assert_eq!(fit.to_string(), url);
    assert_eq!(Operation::Fit(fit.clone()).to_string(), url);
    assert_eq!(Descriptor::from(fit), imgurl_parse::parse(&url).unwrap_or_else(|e| panic!("{e}")));
}

#[test]
fn kinds_match_builders() {
    assert_eq!(Canvas::KIND, OperationKind::Canvas);
    assert_eq!(Fill::KIND, OperationKind::Fill);
    assert_eq!(Fit::KIND, OperationKind::Fit);
    assert_eq!(Crop::KIND, OperationKind::Crop);
}
