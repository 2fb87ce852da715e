// src/render.rs

use crate::config::OutputFormat;
use crate::error::RenderError;
use crate::pipeline::PickList;
use crate::pipeline::aggregate::{AggregateKey, PickListEntry};
use askama::Template;
use std::fmt::Write;

const VARIANT_COLUMNS: [&str; 5] = ["SKU", "Coffee Name", "Type", "Size", "Quantity"];
const RAW_COLUMNS: [&str; 3] = ["SKU", "Product Name", "Quantity"];

/// Render a pick list in the requested format. `source` is the report's
/// file name, shown in the heading.
pub fn render(
    list: &PickList,
    format: OutputFormat,
    title: &str,
    source: Option<&str>,
) -> Result<String, RenderError> {
    let heading = match source {
        Some(name) => format!("{title} - {name}"),
        None => title.to_string(),
    };

    Ok(match format {
        OutputFormat::Text => render_text(list, &heading),
        OutputFormat::Json => serde_json::to_string_pretty(list)?,
        OutputFormat::Html => render_html(list, &heading)?,
    })
}

fn columns(list: &PickList) -> &'static [&'static str] {
    match list.items.first().map(|e| &e.key) {
        Some(AggregateKey::Raw { .. }) => &RAW_COLUMNS,
        _ => &VARIANT_COLUMNS,
    }
}

fn cells(entry: &PickListEntry) -> Vec<String> {
    let mut row = match &entry.key {
        AggregateKey::Variant {
            sku,
            canonical_name,
            grind_type,
            package_size,
        } => vec![
            sku.clone(),
            canonical_name.clone(),
            grind_type.clone(),
            package_size.clone(),
        ],
        AggregateKey::Raw { sku, raw_name } => vec![sku.clone(), raw_name.clone()],
    };
    row.push(entry.total_quantity.to_string());
    row
}

// ---------------------------------------------------------------------------
// Plain text
// ---------------------------------------------------------------------------

fn render_text(list: &PickList, heading: &str) -> String {
    let mut out = format!("{heading}\n\n");
    if list.is_empty() {
        out.push_str("No items to pick.\n");
        return out;
    }

    let header: Vec<String> = columns(list).iter().map(|c| c.to_string()).collect();
    let rows: Vec<Vec<String>> = list.items.iter().map(cells).collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |row: &[String]| -> String {
        let padded: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell:<w$}"))
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    out.push_str(&line(header.as_slice()));
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');
    for row in &rows {
        out.push_str(&line(row.as_slice()));
        out.push('\n');
    }

    let _ = write!(
        out,
        "\n{} units, {} line(s)\nOrders ({}): {}\n",
        list.total_units(),
        list.items.len(),
        list.order_ids.len(),
        list.order_ids.join(", ")
    );
    out
}

// ---------------------------------------------------------------------------
// HTML
// ---------------------------------------------------------------------------

struct HtmlCell {
    text: String,
    no_wrap: bool,
}

#[derive(Template)]
#[template(path = "pick_list.html")]
struct PickListPage<'a> {
    heading: &'a str,
    columns: &'static [&'static str],
    rows: Vec<Vec<HtmlCell>>,
}

fn render_html(list: &PickList, heading: &str) -> Result<String, askama::Error> {
    // Size column keeps "12 oz" on one line.
    let no_wrap = matches!(
        list.items.first().map(|e| &e.key),
        Some(AggregateKey::Variant { .. })
    )
    .then_some(3);

    let rows = list
        .items
        .iter()
        .map(|entry| {
            cells(entry)
                .into_iter()
                .enumerate()
                .map(|(i, text)| HtmlCell {
                    text,
                    no_wrap: Some(i) == no_wrap,
                })
                .collect()
        })
        .collect();

    PickListPage {
        heading,
        columns: columns(list),
        rows,
    }
    .render()
}
