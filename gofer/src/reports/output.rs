//! Output trait for rendering reports to different formats.

use console::style;

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render a numbered list item.
    fn numbered_item(&mut self, index: usize, text: &str);

    /// Render an added item (e.g., new file).
    fn added_item(&mut self, text: &str);

    /// Render a table with a header row.
    fn table(&mut self, headers: &[&str], rows: &[Vec<String>]);

    /// Render a separator/divider with a label.
    fn divider(&mut self, label: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn numbered_item(&mut self, index: usize, text: &str) {
        println!("{}. {}", index, text);
    }

    fn added_item(&mut self, text: &str) {
        println!("  + {}", text);
    }

    fn table(&mut self, headers: &[&str], rows: &[Vec<String>]) {
        let widths = column_widths(headers, rows);

        let header: Vec<String> = headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| style(format!("{:<w$}", h, w = *w)).green().underlined().to_string())
            .collect();
        println!("{}", header.join("  "));

        for row in rows {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(i, (cell, w))| {
                    let padded = format!("{:<w$}", cell, w = *w);
                    if i == 0 {
                        style(padded).yellow().to_string()
                    } else {
                        padded
                    }
                })
                .collect();
            println!("{}", cells.join("  ").trim_end());
        }
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Width of each column: the widest of its header and cells.
fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| console::measure_text_width(cell))
                .chain(std::iter::once(console::measure_text_width(h)))
                .max()
                .unwrap_or(0)
        })
        .collect()
}
