use tech_digest::teams::{TeamsMessage, TextBlock, digest_card};

#[test]
fn test_digest_card_wire_shape() {
    let message = digest_card("AI/Tech News Digest - June 01, 2026", "digest body text");
    let value = serde_json::to_value(&message).expect("card should serialize");

    assert_eq!(value["type"], "message");

    let attachment = &value["attachments"][0];
    assert_eq!(
        attachment["contentType"],
        "application/vnd.microsoft.card.adaptive"
    );

    let card = &attachment["content"];
    assert_eq!(card["type"], "AdaptiveCard");
    assert_eq!(
        card["$schema"],
        "http://adaptivecards.io/schemas/adaptive-card.json"
    );
    assert_eq!(card["version"], "1.4");

    let body = card["body"].as_array().expect("card body");
    assert_eq!(body.len(), 2);

    // Title block is bold and large, never wrapped
    assert_eq!(body[0]["type"], "TextBlock");
    assert_eq!(body[0]["text"], "AI/Tech News Digest - June 01, 2026");
    assert_eq!(body[0]["weight"], "Bolder");
    assert_eq!(body[0]["size"], "Large");
    assert!(body[0].get("wrap").is_none());

    // Digest block carries the text unmodified and wraps
    assert_eq!(body[1]["text"], "digest body text");
    assert_eq!(body[1]["wrap"], true);
    assert!(body[1].get("weight").is_none());
    assert!(body[1].get("size").is_none());
}

#[test]
fn test_plain_text_block_omits_optional_attributes() {
    let block = TextBlock::new("hello");
    let value = serde_json::to_value(&block).expect("block should serialize");

    assert_eq!(value["type"], "TextBlock");
    assert_eq!(value["text"], "hello");
    assert!(value.get("weight").is_none());
    assert!(value.get("size").is_none());
    assert!(value.get("wrap").is_none());
}

#[test]
fn test_with_body_wraps_blocks_in_single_attachment() {
    let message = TeamsMessage::with_body(vec![
        TextBlock::new("one"),
        TextBlock::new("two"),
        TextBlock::new("three"),
    ]);
    let value = serde_json::to_value(&message).expect("message should serialize");

    assert_eq!(value["attachments"].as_array().map(Vec::len), Some(1));
    let body = value["attachments"][0]["content"]["body"]
        .as_array()
        .expect("card body");
    assert_eq!(body.len(), 3);
    assert_eq!(body[2]["text"], "three");
}
