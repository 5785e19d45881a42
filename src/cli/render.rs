//! Plain-text rendering of screens for the terminal.

use chrono::{DateTime, Utc};

use inventory_admin::listing::{ListState, PageWindow, Projection, StockSummary};
use inventory_admin::model::Product;
use inventory_admin::validation::ValidationErrors;

/// US-dollar amount with thousands separators, e.g. `$1,234.56`.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let digits = (cents / 100).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}

pub fn format_date(date: Option<DateTime<Utc>>) -> String {
    match date {
        Some(date) => date.format("%b %-d, %Y, %I:%M %p").to_string(),
        None => "-".to_string(),
    }
}

pub fn summary_line(summary: &StockSummary) -> String {
    format!(
        "{} products | {} in stock | {} low stock | {} out of stock",
        summary.total, summary.in_stock, summary.low_stock, summary.out_of_stock
    )
}

/// "Showing X to Y of Z entries", or `None` when nothing is shown.
pub fn entries_line(projection: &Projection<'_>) -> Option<String> {
    let (first, last) = projection.range()?;
    Some(format!(
        "Showing {first} to {last} of {} entries",
        projection.match_count
    ))
}

pub fn page_controls(window: &PageWindow) -> String {
    let mut parts: Vec<String> = Vec::new();
    if window.has_previous() {
        parts.push("« Prev".into());
    }
    if window.shows_first() {
        parts.push("1".into());
        if window.leading_gap() {
            parts.push("…".into());
        }
    }
    for page in window.pages() {
        if page == window.current {
            parts.push(format!("[{page}]"));
        } else {
            parts.push(page.to_string());
        }
    }
    if window.shows_last() {
        if window.trailing_gap() {
            parts.push("…".into());
        }
        parts.push(window.total.to_string());
    }
    if window.has_next() {
        parts.push("Next »".into());
    }
    parts.join(" ")
}

fn table(projection: &Projection<'_>) -> String {
    let header = ["#", "Name", "Category", "Price", "Stock", "Status", "Created"];
    let rows: Vec<[String; 7]> = projection
        .items
        .iter()
        .enumerate()
        .map(|(i, product)| {
            [
                projection.row_number(i).to_string(),
                product.name.clone(),
                product.category.clone(),
                format_currency(product.price),
                product.stock.to_string(),
                product.stock_level().label().to_string(),
                format_date(product.created_at),
            ]
        })
        .collect();

    let mut widths = header.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };
    let mut lines = vec![line(header.to_vec())];
    lines.extend(rows.iter().map(|row| line(row.iter().map(String::as_str).collect())));
    to_text(&lines)
}

/// The whole list screen: statistics, active filters, table and page controls.
pub fn list_screen(state: &ListState) -> String {
    let projection = state.projection();
    let filters = state.filters();
    let mut lines = vec![summary_line(&state.summary())];
    if filters.is_active() {
        lines.push(format!("Filters: {}", filters.describe().join(" | ")));
        lines.push(format!(
            "Showing {} of {} products",
            projection.match_count,
            state.records().len()
        ));
    }
    lines.push(String::new());

    if projection.is_empty() {
        lines.push(if state.records().is_empty() {
            "No products found. Add your first product to get started.".to_string()
        } else if projection.match_count == 0 {
            "No products found matching your criteria.".to_string()
        } else {
            format!(
                "Page {} is empty; there are {} pages.",
                projection.current_page, projection.total_pages
            )
        });
        return to_text(&lines);
    }

    let mut out = to_text(&lines);
    out.push_str(&table(&projection));
    if let Some(line) = entries_line(&projection) {
        out.push('\n');
        out.push_str(&line);
        out.push('\n');
    }
    if let Some(window) = projection.page_window() {
        out.push_str(&page_controls(&window));
        out.push('\n');
    }
    out
}

pub fn product_detail(product: &Product) -> String {
    to_text(&[
        format!("ID:        {}", product.id),
        format!("Name:      {}", product.name),
        format!("Category:  {}", product.category),
        format!("Price:     {}", format_currency(product.price)),
        format!(
            "Stock:     {} ({})",
            product.stock,
            product.stock_level().label()
        ),
        format!("Created:   {}", format_date(product.created_at)),
        format!("Updated:   {}", format_date(product.updated_at)),
    ])
}

pub fn field_errors(errors: &ValidationErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("  {field}: {message}\n"))
        .collect()
}

/// Joins lines, each terminated by a newline.
fn to_text(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}
