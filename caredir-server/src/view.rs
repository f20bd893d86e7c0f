//! Generic tabular HTML view
//!
//! Every endpoint renders through the same template: a header row from the
//! fixed column labels and one row per result. Cell values are escaped, so
//! whatever is stored in the database cannot break out of the table markup.

/// Render a result set as a minimal HTML document containing one table.
///
/// The header row is always present; an empty result set renders a table
/// with headers and zero data rows.
pub fn render_table(columns: &[&str], rows: &[Vec<String>]) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Results</title></head>\n<body>\n<table border=\"1\">\n",
    );

    html.push_str("  <tr>");
    for column in columns {
        html.push_str("<th>");
        html.push_str(&escape(column));
        html.push_str("</th>");
    }
    html.push_str("</tr>\n");

    for row in rows {
        html.push_str("  <tr>");
        for cell in row {
            html.push_str("<td>");
            html.push_str(&escape(cell));
            html.push_str("</td>");
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</table>\n</body>\n</html>\n");
    html
}

/// Escape text for use inside HTML element content and attributes.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
