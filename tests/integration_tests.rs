//! End-to-end tests through the JSON table description
//!
//! These drive the same path as the CLI: parse a `TableInput`, compute the
//! span grid of the rendered page and inspect its serialized form.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use serde_json::{json, Value};
use tablespan::{MergeDirection, SpanResult, TableInput};

fn grid_json(input: &Value) -> Value {
    let table = TableInput::from_json(&input.to_string()).unwrap();
    serde_json::to_value(table.span_grid()).unwrap()
}

fn spans_of(grid: &Value) -> Vec<(u64, u64)> {
    grid["spans"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| (s["rowspan"].as_u64().unwrap(), s["colspan"].as_u64().unwrap()))
        .collect()
}

#[test]
fn test_row_scenario() {
    let grid = grid_json(&json!({
        "columns": [{"property": "g"}],
        "data": [{"g": "A"}, {"g": "A"}, {"g": "B"}],
        "config": {"direction": "row", "props": ["g"]}
    }));
    assert_eq!(spans_of(&grid), vec![(2, 1), (0, 0), (1, 1)]);
    assert_eq!(
        grid["merges"],
        json!([{"startRow": 0, "startCol": 0, "endRow": 1, "endCol": 0}])
    );
}

#[test]
fn test_column_scenario() {
    let grid = grid_json(&json!({
        "columns": [{"property": "a"}, {"property": "b"}, {"property": "c"}],
        "data": [{"a": "X", "b": "X", "c": "Y"}],
        "config": {"direction": "column", "auto": true}
    }));
    assert_eq!(spans_of(&grid), vec![(1, 2), (1, 0), (1, 1)]);
}

#[test]
fn test_element_table_column_shape() {
    let grid = grid_json(&json!({
        "columns": [
            {"type": "selection"},
            {"type": "index"},
            {"property": "region", "type": "default"},
            {"property": "amount"}
        ],
        "data": [
            {"region": "North", "amount": 10},
            {"region": "North", "amount": 10},
            {"region": "South", "amount": null}
        ]
    }));
    assert_eq!(grid["rows"], 3);
    assert_eq!(grid["cols"], 4);
    assert_eq!(
        spans_of(&grid),
        vec![
            (1, 1), (1, 1), (2, 1), (2, 1),
            (1, 1), (1, 1), (0, 0), (0, 0),
            (1, 1), (1, 1), (1, 1), (1, 1),
        ]
    );
}

#[test]
fn test_virtualized_window() {
    let data: Vec<Value> = (0..100).map(|i| json!({"bucket": i / 10})).collect();
    let input = json!({
        "columns": [{"property": "bucket"}],
        "data": data,
        "window": {"startIndex": 45, "endIndex": 58}
    });
    let table = TableInput::from_json(&input.to_string()).unwrap();
    let grid = table.span_grid();

    assert_eq!(grid.rows, 13);
    // rows 45..49 continue the run that started at 40
    for r in 0..5 {
        assert_eq!(grid.span(r, 0), Some(SpanResult::ROW_HIDDEN));
    }
    // run 50..59 is cut at the window end (58)
    assert_eq!(grid.span(5, 0), Some(SpanResult::new(8, 1)));
    assert_eq!(grid.uncovered_hidden_cells().len(), 5);
}

#[test]
fn test_defaults_and_direction_parsing() {
    let table = TableInput::from_json(r#"{"columns": [], "data": []}"#).unwrap();
    assert_eq!(table.config.direction, MergeDirection::Row);
    assert!(table.config.props.is_empty());
    assert!(!table.config.auto);
    assert_eq!(table.span_grid().rows, 0);

    let err = TableInput::from_json(r#"{"columns": [], "data": [], "config": {"direction": "x"}}"#);
    assert!(err.is_err());
}

#[test]
fn test_nested_values_are_rejected() {
    let err = TableInput::from_json(r#"{"columns": [], "data": [{"g": [1, 2]}]}"#);
    assert!(err.is_err());
}
