//! Format-neutral document model and the Markdown renderer.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// A span of text, optionally emphasized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    pub bold: bool,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Block {
    Title { text: String },
    Subtitle { text: String },
    /// `level` 1..=3; deeper levels render as level 3.
    Heading { level: u8, text: String },
    Paragraph { runs: Vec<Run> },
    Bullet { runs: Vec<Run> },
    Table(Table),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub blocks: Vec<Block>,
}

impl ReportDocument {
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn headings(&self) -> impl Iterator<Item = (u8, &str)> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Heading { level, text } => Some((*level, text.as_str())),
            _ => None,
        })
    }
}

pub fn render_markdown(doc: &ReportDocument) -> Result<String, ReportError> {
    let mut out = String::new();
    let mut in_list = false;

    for block in &doc.blocks {
        let is_bullet = matches!(block, Block::Bullet { .. });
        if in_list && !is_bullet {
            out.push('\n');
        }
        in_list = is_bullet;

        match block {
            Block::Title { text } => writeln!(out, "# {text}\n")?,
            Block::Subtitle { text } => writeln!(out, "_{text}_\n")?,
            Block::Heading { level, text } => {
                let hashes = "#".repeat(usize::from((*level).clamp(1, 3)) + 1);
                writeln!(out, "{hashes} {text}\n")?;
            }
            Block::Paragraph { runs } => writeln!(out, "{}\n", render_runs(runs))?,
            Block::Bullet { runs } => writeln!(out, "- {}", render_runs(runs))?,
            Block::Table(table) => render_table(&mut out, table)?,
        }
    }

    // Bullet lists are written without a trailing blank line; normalize the end.
    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out.push('\n');
    Ok(out)
}

fn render_runs(runs: &[Run]) -> String {
    let mut line = String::new();
    for run in runs {
        if run.bold && !run.text.trim().is_empty() {
            // Markdown emphasis must hug the text, so keep edge whitespace outside.
            let start = run.text.len() - run.text.trim_start().len();
            let end = run.text.trim_end().len();
            line.push_str(&run.text[..start]);
            line.push_str("**");
            line.push_str(&run.text[start..end]);
            line.push_str("**");
            line.push_str(&run.text[end..]);
        } else {
            line.push_str(&run.text);
        }
    }
    line
}

fn render_table(out: &mut String, table: &Table) -> Result<(), ReportError> {
    let row = |cells: &[String]| {
        let escaped: Vec<String> = cells.iter().map(|c| c.replace('|', "\\|")).collect();
        format!("| {} |", escaped.join(" | "))
    };

    writeln!(out, "{}", row(&table.headers))?;
    let rule: Vec<&str> = table.headers.iter().map(|_| "---").collect();
    writeln!(out, "|{}|", rule.join("|"))?;
    for cells in &table.rows {
        writeln!(out, "{}", row(cells))?;
    }
    out.push('\n');
    Ok(())
}
