use super::*;

// =============================================================
// Deserialization
// =============================================================

#[test]
fn parse_full_record() {
    let cards = parse_cards(
        r#"[{"category":"rookie","player":"Player 1","year":2023,"condition":"Mint","market_value":"$100","image_path":"rookie.jpg"}]"#,
    )
    .unwrap();
    assert_eq!(cards.len(), 1);
    let card = &cards[0];
    assert_eq!(card.category, "rookie");
    assert_eq!(card.player(), Some("Player 1"));
    assert_eq!(card.year, Some(CardYear::Number(2023)));
    assert_eq!(card.condition(), Some("Mint"));
    assert_eq!(card.market_value(), Some("$100"));
    assert_eq!(card.image_path, "rookie.jpg");
}

#[test]
fn parse_minimal_record() {
    let cards = parse_cards(r#"[{"category":"vintage","image_path":"v.png"}]"#).unwrap();
    let card = &cards[0];
    assert!(card.player().is_none());
    assert!(card.year().is_none());
    assert!(card.condition().is_none());
    assert!(card.market_value().is_none());
}

#[test]
fn parse_nulls_as_absent() {
    let cards =
        parse_cards(r#"[{"category":"x","player":null,"year":null,"condition":null,"image_path":"a.jpg"}]"#)
            .unwrap();
    assert!(cards[0].player.is_none());
    assert!(cards[0].year.is_none());
}

#[test]
fn parse_string_year() {
    let cards = parse_cards(r#"[{"category":"x","year":"1952-53","image_path":"a.jpg"}]"#).unwrap();
    assert_eq!(cards[0].year(), Some("1952-53".to_owned()));
}

#[test]
fn parse_ignores_unknown_keys() {
    let cards = parse_cards(r#"[{"category":"x","image_path":"a.jpg","grader":"PSA"}]"#).unwrap();
    assert_eq!(cards.len(), 1);
}

#[test]
fn parse_missing_required_keys_defaults_empty() {
    let cards = parse_cards(r#"[{"player":"Nobody"}]"#).unwrap();
    assert_eq!(cards[0].category, "");
    assert_eq!(cards[0].image_path, "");
}

#[test]
fn parse_empty_array() {
    assert!(parse_cards("[]").unwrap().is_empty());
}

#[test]
fn parse_rejects_non_array() {
    assert!(parse_cards(r#"{"category":"x"}"#).is_err());
    assert!(parse_cards("not json").is_err());
}

// =============================================================
// Off-schema values
// =============================================================

const GOOD: &str = r#"{"category":"rookie","player":"Player 1","image_path":"rookie.jpg"}"#;

fn parse_with_good(bad: &str) -> Vec<CardRecord> {
    let cards = parse_cards(&format!("[{GOOD},{bad}]")).unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].player(), Some("Player 1"));
    cards
}

#[test]
fn null_structural_fields_read_as_empty() {
    let cards = parse_with_good(r#"{"category":null,"image_path":null}"#);
    assert_eq!(cards[1].category, "");
    assert_eq!(cards[1].image_path, "");
}

#[test]
fn numeric_market_value_reads_as_text() {
    let cards = parse_with_good(r#"{"category":"x","market_value":100,"image_path":"a.jpg"}"#);
    assert_eq!(cards[1].market_value(), Some("100"));
}

#[test]
fn float_year_reads_as_whole_number() {
    let cards = parse_with_good(r#"{"category":"x","year":1989.0,"image_path":"a.jpg"}"#);
    assert_eq!(cards[1].year, Some(CardYear::Number(1989)));
    assert_eq!(cards[1].year(), Some("1989".to_owned()));
}

#[test]
fn fractional_year_keeps_its_digits() {
    let cards = parse_with_good(r#"{"category":"x","year":1989.5,"image_path":"a.jpg"}"#);
    assert_eq!(cards[1].year(), Some("1989.5".to_owned()));
}

#[test]
fn scalar_fields_read_as_text() {
    let cards = parse_with_good(
        r#"{"category":7,"player":true,"condition":9.5,"market_value":"$5","image_path":"a.jpg"}"#,
    );
    assert_eq!(cards[1].category, "7");
    assert_eq!(cards[1].player(), Some("true"));
    assert_eq!(cards[1].condition(), Some("9.5"));
}

#[test]
fn compound_values_read_as_json_text() {
    let cards = parse_with_good(r#"{"category":"x","player":["A","B"],"image_path":"a.jpg"}"#);
    assert_eq!(cards[1].player(), Some(r#"["A","B"]"#));
}

// =============================================================
// Accessors
// =============================================================

#[test]
fn blank_fields_read_as_absent() {
    let card = CardRecord {
        player: Some("   ".into()),
        year: Some(CardYear::Text(String::new())),
        condition: Some(String::new()),
        market_value: Some("\t".into()),
        ..CardRecord::default()
    };
    assert!(card.player().is_none());
    assert!(card.year().is_none());
    assert!(card.condition().is_none());
    assert!(card.market_value().is_none());
}

#[test]
fn year_display() {
    assert_eq!(CardYear::Number(1989).to_string(), "1989");
    assert_eq!(CardYear::Text("c. 1910".into()).to_string(), "c. 1910");
}
