use showcase_domain::content::{CARDS, FEATURES, READ_MORE, SAMPLE_BUTTONS};
use showcase_domain::{ColorToken, Demo};
use std::str::FromStr;
use strum::IntoEnumIterator;

#[test]
fn fixed_lists_hold_three_records() {
    assert_eq!(FEATURES.len(), 3);
    assert_eq!(CARDS.len(), 3);
    assert_eq!(SAMPLE_BUTTONS.len(), 3);
    assert_eq!(READ_MORE, "Read More");
}

#[test]
fn card_records_match_gallery_copy() {
    let titles: Vec<_> = CARDS.iter().map(|c| c.title).collect();
    assert_eq!(titles, ["First Card", "Second Card", "Third Card"]);
    assert!(CARDS.iter().all(|c| c.image_url.starts_with("https://")));
}

#[test]
fn color_token_defaults_to_blue() {
    assert_eq!(ColorToken::default(), ColorToken::BLUE);
    assert_eq!(ColorToken::default().as_str(), "blue");
    assert_eq!(ColorToken::from("green").to_string(), "green");
    assert_eq!(ColorToken::from("teal".to_owned()).as_str(), "teal");
}

#[test]
fn demo_names_round_trip_through_strings() {
    let names: Vec<String> = Demo::iter().map(|d| d.to_string()).collect();
    assert_eq!(names, ["landing", "gallery", "catalog"]);

    assert_eq!(Demo::from_str("catalog"), Ok(Demo::Catalog));
    assert!(Demo::from_str("Blog").is_err());
    assert_eq!(Demo::Gallery.file_name(), "gallery.html");
    assert_eq!(Demo::default(), Demo::Landing);
}

#[test]
fn sample_buttons_cover_three_palettes() {
    let colors: Vec<&str> = SAMPLE_BUTTONS.iter().map(|(_, color)| color.as_str()).collect();
    assert_eq!(colors, ["blue", "green", "red"]);
}
