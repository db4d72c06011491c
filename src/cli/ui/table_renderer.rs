use crate::cli::output::current_preferences;

const COLUMN_SEPARATOR: &str = " | ";

/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Specifies the configuration for a single column in the rendered table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub min_width: usize,
    pub max_width: Option<usize>,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, alignment: Alignment) -> Self {
        Self {
            header: header.into(),
            min_width: 0,
            max_width: None,
            alignment,
        }
    }

    pub fn with_min_width(mut self, width: usize) -> Self {
        self.min_width = width;
        self
    }

    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }
}

/// Column metadata plus rows of cell text.
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Computes the content widths for each column based on headers, rows, and
    /// column constraints.
    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let mut width = visible_width(&column.header).max(column.min_width);
                for row in &self.rows {
                    if let Some(cell) = row.get(idx) {
                        width = width.max(visible_width(cell));
                    }
                }
                if let Some(max_width) = column.max_width {
                    width = width.min(max_width);
                }
                width
            })
            .collect()
    }

    /// Full rendered width of a row, separators included.
    pub fn total_width(&self, widths: &[usize]) -> usize {
        if widths.is_empty() {
            return 0;
        }
        widths.iter().sum::<usize>() + visible_width(COLUMN_SEPARATOR) * (widths.len() - 1)
    }

    fn render_header(&self, widths: &[usize]) -> String {
        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        self.render_row(&header, widths)
    }

    /// Renders a single row using the provided column widths.
    pub fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let rendered_cells: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let cell_text = row.get(idx).map(|s| s.as_str()).unwrap_or("");
                render_cell(cell_text, widths[idx], column.alignment)
            })
            .collect();

        rendered_cells
            .join(COLUMN_SEPARATOR)
            .trim_end()
            .to_string()
    }

    /// Renders the header, a rule under it, then every row.
    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let mut lines = Vec::with_capacity(self.rows.len() + 2);

        lines.push(self.render_header(&widths));
        lines.push(horizontal_rule(self.total_width(&widths)));

        for row in &self.rows {
            lines.push(self.render_row(row, &widths));
        }

        lines.join("\n")
    }
}

/// Counts printable characters, skipping ANSI escape sequences.
pub fn visible_width(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut idx = 0;
    let mut width = 0;

    while idx < bytes.len() {
        if bytes[idx] == 0x1b {
            idx += 1;
            if idx < bytes.len() && bytes[idx] == b'[' {
                idx += 1;
                while idx < bytes.len() {
                    let byte = bytes[idx];
                    idx += 1;
                    if (0x40..=0x7E).contains(&byte) {
                        break;
                    }
                }
            }
            continue;
        }

        match text[idx..].chars().next() {
            Some(ch) => {
                width += 1;
                idx += ch.len_utf8();
            }
            None => break,
        }
    }

    width
}

pub fn truncate_text(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if visible_width(text) <= width {
        return text.to_string();
    }

    let ellipsis = if current_preferences().plain_mode {
        "~"
    } else {
        "…"
    };
    let mut result: String = text.chars().take(width - 1).collect();
    result.push_str(ellipsis);
    result
}

/// Fits a cell to `width`, truncating or padding on the alignment side.
pub fn render_cell(text: &str, width: usize, alignment: Alignment) -> String {
    let fitted = truncate_text(text, width);
    let fill = " ".repeat(width.saturating_sub(visible_width(&fitted)));

    match alignment {
        Alignment::Left => format!("{fitted}{fill}"),
        Alignment::Right => format!("{fill}{fitted}"),
    }
}

/// A light rule, drawn with `-` in plain mode.
pub fn horizontal_rule(width: usize) -> String {
    let ch = if current_preferences().plain_mode {
        '-'
    } else {
        '─'
    };
    ch.to_string().repeat(width)
}

/// A heavy rule framing titles and totals, drawn with `=` in plain mode.
pub fn heavy_rule(width: usize) -> String {
    let ch = if current_preferences().plain_mode {
        '='
    } else {
        '═'
    };
    ch.to_string().repeat(width)
}

pub fn centered(text: &str, width: usize) -> String {
    let remaining = width.saturating_sub(visible_width(text));
    format!("{}{}", " ".repeat(remaining / 2), text)
        .trim_end()
        .to_string()
}
