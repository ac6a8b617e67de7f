use unicode_width::UnicodeWidthStr;

/// Renders a bordered ASCII table.
///
/// Column widths are settled over the header and every row before anything is
/// written, so all lines come out the same width. Rows shorter than the header
/// are padded with empty cells.
///
/// ```text
/// +----+------+
/// | id | name |
/// +----+------+
/// | 1  | ab   |
/// +----+------+
/// ```
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let columns = rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(headers.len()))
        .max()
        .unwrap_or(0);

    let mut widths = vec![0usize; columns];
    for (i, header) in headers.iter().enumerate() {
        widths[i] = widths[i].max(header.width());
    }
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let rule = rule_line(&widths);
    let mut out = String::new();

    out.push_str(&rule);
    out.push_str(&row_line(&widths, headers));
    out.push_str(&rule);
    for row in rows {
        out.push_str(&row_line(&widths, row));
    }
    out.push_str(&rule);
    out
}

fn rule_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for w in widths {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn row_line<S: AsRef<str>>(widths: &[usize], cells: &[S]) -> String {
    let mut line = String::from("|");
    for (i, w) in widths.iter().enumerate() {
        let cell = cells.get(i).map(AsRef::as_ref).unwrap_or("");
        let padding = w.saturating_sub(cell.width());
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(padding));
        line.push_str(" |");
    }
    line.push('\n');
    line
}
