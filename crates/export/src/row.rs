//! Row projection

use tally_catalog::Item;

use crate::schema::Schema;

/// One item flattened to the schema's column order
///
/// Cells are unsanitized; the encoder sanitizes on write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn into_cells(self) -> Vec<String> {
        self.cells
    }
}

/// Project `item` onto `schema`
///
/// Fixed columns come first: id, name, SKU, regular price and sale price.
/// Each dynamic column then takes the item's value for that key, or an empty
/// string when the item lacks it. List values are joined with `|`.
pub fn project(item: &Item, schema: &Schema) -> Row {
    let mut cells = Vec::with_capacity(schema.width());

    cells.push(item.id.to_string());
    cells.push(item.name.clone());
    cells.push(item.sku.clone());
    cells.push(item.regular_price.to_string());
    cells.push(item.sale_price.to_string());

    for column in schema.dynamic_columns() {
        let cell = item
            .attributes
            .get(column)
            .map(|value| value.render().into_owned())
            .unwrap_or_default();
        cells.push(cell);
    }

    Row { cells }
}
