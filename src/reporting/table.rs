use console::{measure_text_width, pad_str, Alignment};

/// A borderless text table: cells padded by one space, a rule under the
/// header, no outer frame and no column separators.
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    alignments: Vec<Alignment>,
}

impl Table {
    pub fn new<S: Into<String>>(header: impl IntoIterator<Item = S>) -> Self {
        let header: Vec<String> = header.into_iter().map(Into::into).collect();
        let alignments = vec![Alignment::Left; header.len()];
        Self {
            header,
            rows: Vec::new(),
            alignments,
        }
    }

    pub fn align(mut self, column: usize, alignment: Alignment) -> Self {
        if let Some(slot) = self.alignments.get_mut(column) {
            *slot = alignment;
        }
        self
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Column widths measured without ANSI escapes.
    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.header.iter().map(|h| measure_text_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let width = measure_text_width(cell);
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(width),
                    None => widths.push(width),
                }
            }
        }
        widths
    }

    fn render_line(&self, cells: &[String], widths: &[usize], out: &mut String) {
        for (i, width) in widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let align = self.alignments.get(i).copied().unwrap_or(Alignment::Left);
            out.push(' ');
            out.push_str(&pad_str(cell, *width, align, None));
            out.push(' ');
        }
        out.push('\n');
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        self.render_line(&self.header, &widths, &mut out);
        let total: usize = widths.iter().map(|w| w + 2).sum();
        out.push_str(&"─".repeat(total));
        out.push('\n');
        for row in &self.rows {
            self.render_line(row, &widths, &mut out);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_pads_columns() {
        let mut table = Table::new(["A", "BB"]);
        table.push_row(vec!["long".into(), "x".into()]);
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], " A     BB ");
        assert_eq!(lines[1], "──────────");
        assert_eq!(lines[2], " long  x  ");
    }

    #[test]
    fn test_center_alignment() {
        let mut table = Table::new(["STATUS"]).align(0, Alignment::Center);
        table.push_row(vec!["ok".into()]);
        let rendered = table.render();
        assert_eq!(rendered.lines().nth(2), Some("   ok   "));
    }

    #[test]
    fn test_styled_cells_measured_without_escapes() {
        let mut table = Table::new(["S"]);
        table.push_row(vec![console::style("abc").red().force_styling(true).to_string()]);
        let rendered = console::strip_ansi_codes(&table.render()).to_string();
        assert_eq!(rendered.lines().nth(1), Some("─────"));
    }

    #[test]
    fn test_header_only_table() {
        let table = Table::new(["A"]);
        assert_eq!(table.render(), " A \n───\n");
    }
}
