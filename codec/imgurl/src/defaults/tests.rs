use super::*;
use pretty_assertions::assert_eq;

#[test]
fn alignment_codes_are_distinct_and_invertible() {
    for a in Alignment::ALL {
        assert_eq!(Alignment::from_code(a.code()), Some(a));
    }
    assert_eq!(Alignment::from_code("zz"), None);
}

#[test]
fn alignment_display() {
    assert_eq!(Alignment::Left.to_string(), "l");
    assert_eq!(Alignment::AllFaces.to_string(), "fs");
    let anchor: Anchor = Alignment::Auto;
    assert_eq!(anchor.to_string(), "auto");
}

#[test]
fn resize_filter_ids_run_from_one_to_twenty_eight() {
    let ids: Vec<u8> = ResizeFilter::ALL.iter().map(|f| f.id()).collect();
    assert_eq!(ids, (1..=28).collect::<Vec<u8>>());
    assert_eq!(ResizeFilter::from_id(22), Some(ResizeFilter::Lanczos));
    assert_eq!(ResizeFilter::from_id(0), None);
    assert_eq!(ResizeFilter::from_id(29), None);
    assert_eq!(ResizeFilter::Cosine.to_string(), "28");
}

#[test]
fn level_display() {
    assert_eq!(Level::Auto.to_string(), "auto");
    assert_eq!(Level::from(-20).to_string(), "-20");
    assert_eq!(Level::default(), Level::Auto);
}

#[test]
fn unsharp_defaults_render_like_numbers() {
    assert_eq!(format!("{US_RADIUS}_{US_AMOUNT}_{US_THRESHOLD}"), "0.5_0.2_0");
}

#[test]
fn default_version() {
    assert_eq!(DEFAULT_VERSION, "v1");
    assert_eq!(QUALITY, 75);
}

#[test]
fn color_from_hex() {
    assert_eq!(Color::from_hex("ff00aa"), Some(Color::rgb(0xff, 0x00, 0xaa)));
    assert_eq!(Color::from_hex(" #FF00AA "), Some(Color::rgb(0xff, 0x00, 0xaa)));
    assert_eq!(Color::rgb(1, 2, 171).to_string(), "0102ab");
}

#[test]
fn color_rejects_anything_but_six_hex_digits() {
    for bad in ["red,oil", "red", "ff00a", "ff00aa0", "#+f00aa", "gg0000", "ff 0aa", ""] {
        assert_eq!(Color::from_hex(bad), None, "{bad:?}");
    }
}
