use crate::models::{Item, MigrationOutcome, MigrationReport};

fn create_test_item() -> Item {
    Item {
        id: 2,
        name: "Banane".to_string(),
        quantity: 15,
        description: "Source d'énergie".to_string(),
    }
}

#[test]
fn test_item_serializes_all_fields() {
    let json = serde_json::to_value(create_test_item()).expect("Failed to serialize item");

    assert_eq!(json["id"], 2);
    assert_eq!(json["name"], "Banane");
    assert_eq!(json["quantity"], 15);
    assert_eq!(json["description"], "Source d'énergie");
}

#[test]
fn test_item_description_defaults_when_missing() {
    let item: Item = serde_json::from_str(r#"{"id": 1, "name": "Pomme", "quantity": 10}"#)
        .expect("Failed to deserialize item");
    assert_eq!(item.description, "");
}

#[test]
fn test_item_display_includes_description() {
    let output = format!("{}", create_test_item());
    assert!(output.contains("## 2. Banane"));
    assert!(output.contains("- Description: Source d'énergie"));
}

#[test]
fn test_stalled_outcome_serializes_missing_version() {
    let json = serde_json::to_value(MigrationOutcome::Stalled { missing_from: 3 })
        .expect("Failed to serialize outcome");
    assert_eq!(json["outcome"], "stalled");
    assert_eq!(json["missing_from"], 3);
}

#[test]
fn test_report_completion() {
    let mut report = MigrationReport {
        starting_version: None,
        current_version: 0,
        target_version: 1,
        applied: vec![0],
        statements_executed: 4,
        outcome: MigrationOutcome::Stalled { missing_from: 0 },
    };
    assert!(!report.is_complete());

    report.current_version = 1;
    assert!(report.is_complete());
}
