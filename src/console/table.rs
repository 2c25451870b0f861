//! Plain text table rendering

/// Render a padded text table with a header rule. Column widths fit the
/// widest cell; rows shorter than the header are padded with blanks.
pub fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    render_row(&mut out, &widths, headers.iter().map(|h| *h));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    render_row(&mut out, &widths, rule.iter().map(|s| s.as_str()));
    for row in rows {
        render_row(
            &mut out,
            &widths,
            row.iter().map(|s| s.as_str()).chain(std::iter::repeat("")),
        );
    }
    out
}

fn render_row<'a>(
    out: &mut String,
    widths: &[usize],
    cells: impl Iterator<Item = &'a str>,
) {
    let mut first = true;
    for (cell, width) in cells.zip(widths.iter()) {
        if !first {
            out.push_str("  ");
        }
        first = false;
        out.push_str(cell);
        for _ in cell.chars().count()..*width {
            out.push(' ');
        }
    }
    // Trailing pad spaces are noise on the last column
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}
