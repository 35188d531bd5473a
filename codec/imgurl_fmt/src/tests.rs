#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use imgurl_ir::OperationKind;
use pretty_assertions::assert_eq;

const ENDPOINT: &str = "http://test.example.com";

fn cat(operation: OperationKind) -> Descriptor {
    Descriptor::new(ENDPOINT, "12345", operation).with_image_name("cat.jpg")
}

#[test]
fn fill_with_size_and_alignment() {
    let mut d = cat(OperationKind::Fill);
    d.operation_params.insert_value("w", "100");
    d.operation_params.insert_value("h", "300");
    d.operation_params.insert_value("al", "l");
    assert_eq!(
        serialize(&d),
        "http://test.example.com/12345/v1/fill/w_100,h_300,al_l/cat.jpg"
    );
}

#[test]
fn operation_params_keep_insertion_order() {
    let mut d = cat(OperationKind::Crop);
    for (code, value) in [("x", "20"), ("y", "30"), ("w", "100"), ("h", "300")] {
        d.operation_params.insert_value(code, value);
    }
    assert_eq!(
        serialize(&d),
        "http://test.example.com/12345/v1/crop/x_20,y_30,w_100,h_300/cat.jpg"
    );
}

#[test]
fn adjustments_precede_filters_whatever_the_insertion_order() {
    let mut d = cat(OperationKind::Canvas);
    d.filters.insert_flag("oil");
    d.adjustments.insert_value("br", "100");
    assert_eq!(
        serialize(&d),
        "http://test.example.com/12345/v1/canvas/br_100,oil/cat.jpg"
    );
}

#[test]
fn sections_are_joined_into_one_run() {
    let mut d = cat(OperationKind::Fit);
    d.filters.insert_value("us", "0.3_0.1_0.5");
    d.filters.insert_flag("neg");
    d.adjustments.insert_value("con", "-20");
    d.operation_params.insert_value("q", "auto");
    d.operation_params.insert_flag("bl");
    assert_eq!(
        serialize(&d),
        "http://test.example.com/12345/v1/fit/q_auto,bl,con_-20,us_0.3_0.1_0.5,neg/cat.jpg"
    );
}

#[test]
fn empty_sections_leave_no_stray_commas() {
    let mut d = cat(OperationKind::Fit);
    d.filters.insert_flag("oil");
    assert_eq!(serialize(&d), "http://test.example.com/12345/v1/fit/oil/cat.jpg");

    let d = cat(OperationKind::Fit);
    assert_eq!(serialize(&d), "http://test.example.com/12345/v1/fit//cat.jpg");
}

#[test]
fn custom_version_and_empty_name() {
    let mut d = Descriptor::new(ENDPOINT, "abc", OperationKind::Fit).with_version("v2");
    d.operation_params.insert_value("w", "1");
    assert_eq!(serialize(&d), "http://test.example.com/abc/v2/fit/w_1/");
}

#[test]
fn endpoint_prefix_rules() {
    assert_eq!(endpoint_prefix("http://a.example.com"), "http://a.example.com");
    assert_eq!(endpoint_prefix("https://a.example.com"), "https://a.example.com");
    assert_eq!(endpoint_prefix("//a.example.com"), "//a.example.com");
    assert_eq!(endpoint_prefix("a.example.com"), "//a.example.com");
    assert_eq!(endpoint_prefix(""), "");
    assert_eq!(endpoint_prefix("cdn"), "//cdn");
    assert_eq!(endpoint_prefix("img"), "//img");
    assert!(matches!(endpoint_prefix("http://a"), Cow::Borrowed(_)));
}

#[test]
fn bare_host_endpoint_becomes_protocol_relative() {
    let mut d = Descriptor::new("media.example.com", "1", OperationKind::Fill)
        .with_image_name("x.png");
    d.operation_params.insert_value("w", "5");
    assert_eq!(serialize(&d), "//media.example.com/1/v1/fill/w_5/x.png");
}

#[test]
fn serialize_does_not_mutate() {
    let mut d = cat(OperationKind::Fill);
    d.adjustments.insert_value("sat", "10");
    let before = d.clone();
    let _ = serialize(&d);
    assert_eq!(d, before);
}

#[test]
fn serialize_into_appends_to_an_emitter() {
    let mut d = cat(OperationKind::Fit);
    d.operation_params.insert_value("w", "1");
    let mut emitter = StringEmitter::new();
    emitter.emit("<");
    serialize_into(&d, &mut emitter);
    emitter.emit(">");
    assert_eq!(
        emitter.output(),
        "<http://test.example.com/12345/v1/fit/w_1/cat.jpg>"
    );
}

#[test]
fn measured_length_matches_output() {
    let mut d = cat(OperationKind::Canvas);
    d.operation_params.insert_value("c", "ff0000");
    d.adjustments.insert_flag("auto_adj");
    d.filters.insert_value("blur", "3");
    let mut measure = LengthEmitter::new();
    serialize_into(&d, &mut measure);
    assert_eq!(measure.len(), serialize(&d).len());
}

// === Agreement with the parser ===

#[test]
fn parsed_urls_serialize_back_verbatim() {
    for url in [
        "http://test.example.com/12345/v1/fill/w_100,h_300,al_l/cat.jpg",
        "http://test.example.com/12345/v1/fit/q_auto/cat.jpg",
        "http://test.example.com/12345/v1/crop/x_20,y_30,w_100,h_300/cat.jpg",
        "http://test.example.com/12345/v1/canvas/br_100,oil/cat.jpg",
        "http://test.example.com/12345/v1/fill/w_100,h_300,q_80,us_0.3_0.1_0.5/cat.jpg",
        "//media.example.com/abc/v3/canvas/w_10,c_ff00aa,a_tl,auto_adj,pixfs_4/my_cat.png",
        "https://cdn.example.com/media/abc/v1/fit/rf_3,usm_auto/fit.jpg",
    ] {
        let d = imgurl_parse::parse(url).unwrap();
        assert_eq!(serialize(&d), url);
    }
}

#[test]
fn parser_reorders_sections_into_canonical_form() {
    let d = imgurl_parse::parse("http://h.example.com/1/v1/fit/oil,br_5,w_3/n.jpg").unwrap();
    assert_eq!(serialize(&d), "http://h.example.com/1/v1/fit/w_3,br_5,oil/n.jpg");
}
