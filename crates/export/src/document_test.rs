//! Tests for whole-document assembly
//!
//! Tests cover the reference two-item export, empty catalogs, column
//! alignment, and determinism across repeated runs.

use tally_catalog::{Item, Price};

use crate::{FIXED_COLUMNS, build_document, write_document};

fn price(s: &str) -> Price {
    s.parse().unwrap()
}

fn widget_and_gadget() -> Vec<Item> {
    vec![
        Item::new(1, "Widget")
            .with_sku("W1")
            .with_regular_price(price("9.99"))
            .with_sale_price(price(""))
            .with_attribute("color", "red"),
        Item::new(2, "Gadget")
            .with_sku("G1")
            .with_regular_price(price("19.99"))
            .with_sale_price(price("14.99"))
            .with_attribute("size", "L")
            .with_attribute("color", "blue"),
    ]
}

#[test]
fn test_two_item_export() {
    let doc = build_document(&widget_and_gadget()).unwrap();
    let text = doc.text();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        r#""Product ID","Product Name","Product SKU","Regular Price","Sale Price","color","size""#
    );
    assert_eq!(lines[1], r#""1","Widget","W1","9.99","","red","""#);
    assert_eq!(lines[2], r#""2","Gadget","G1","19.99","14.99","blue","L""#);

    assert_eq!(doc.row_count(), 2);
    assert_eq!(doc.column_count(), 7);
    assert!(text.ends_with('\n'));
    assert!(!text.contains('\r'));
}

#[test]
fn test_empty_catalog_is_header_only() {
    let doc = build_document(&[]).unwrap();

    let expected = format!("\"{}\"\n", FIXED_COLUMNS.join("\",\""));
    assert_eq!(doc.text(), expected);
    assert_eq!(doc.row_count(), 0);
    assert_eq!(doc.column_count(), 5);
    assert!(!doc.is_empty());
}

#[test]
fn test_every_row_has_header_width() {
    let items = vec![
        Item::new(1, "a").with_attribute("k1", "v"),
        Item::new(2, "b"),
        Item::new(3, "c")
            .with_attribute("k2", "v")
            .with_attribute("k3", vec!["x", "y"]),
        Item::new(4, "d").with_attribute("k1", "v"),
    ];
    let doc = build_document(&items).unwrap();
    let text = doc.text();

    let widths: Vec<usize> = text.lines().map(|l| l.split("\",\"").count()).collect();
    assert_eq!(widths, vec![8; 5]);
}

#[test]
fn test_hostile_values_cannot_break_layout() {
    let items = vec![
        Item::new(1, "line\nbreak")
            .with_sku("\"quoted\"")
            .with_attribute("note", "carriage\rreturn"),
    ];
    let doc = build_document(&items).unwrap();
    let text = doc.text();

    assert_eq!(text.lines().count(), 2);
    assert_eq!(
        text.lines().nth(1),
        Some(r#""1","linebreak","quoted","","","carriagereturn""#)
    );
}

#[test]
fn test_deterministic() {
    let items = widget_and_gadget();
    let first = build_document(&items).unwrap();
    let second = build_document(&items).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_write_to_sink_matches_in_memory() {
    let items = widget_and_gadget();
    let (bytes, stats) = write_document(&items, Vec::new()).unwrap();
    let doc = build_document(&items).unwrap();

    assert_eq!(bytes, doc.as_bytes());
    assert_eq!(stats, doc.stats());
    assert_eq!(doc.len(), bytes.len());
}
