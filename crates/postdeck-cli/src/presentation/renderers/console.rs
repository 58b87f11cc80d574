use std::fmt;
use std::io::Write;

use anyhow::Result;
use owo_colors::OwoColorize;
use postdeck_types::Post;

use crate::presentation::view_models::{PostListViewModel, PostRowViewModel, StatusLevel};
use crate::types::OutputFormat;

/// Prints a fetched list for `postdeck list`
pub struct ConsoleRenderer {
    format: OutputFormat,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    /// JSON mode prints the posts exactly as decoded; plain mode prints
    /// the rows with their expansion state.
    pub fn render_post_list(
        &self,
        out: &mut impl Write,
        list: &PostListViewModel,
        posts: &[Post],
    ) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(posts)?)?;
            }
            OutputFormat::Plain => {
                write!(
                    out,
                    "{}",
                    PostListText {
                        list,
                        color: self.color,
                    }
                )?;
            }
        }
        Ok(())
    }
}

struct PostListText<'a> {
    list: &'a PostListViewModel,
    color: bool,
}

impl PostListText<'_> {
    fn paint(&self, text: &str, colored: impl fmt::Display) -> String {
        if self.color {
            colored.to_string()
        } else {
            text.to_string()
        }
    }

    fn write_row(&self, f: &mut fmt::Formatter<'_>, row: &PostRowViewModel) -> fmt::Result {
        let id = format!("#{}", row.id);
        writeln!(
            f,
            "{:<6}{}  {}",
            self.paint(&id, id.green().bold()),
            self.paint(&row.title, row.title.bold()),
            self.paint(&row.toggle_label, row.toggle_label.bright_black()),
        )?;
        writeln!(f, "      {}", self.paint(&row.user_line, row.user_line.bright_black()))?;

        if let Some(details) = &row.details {
            writeln!(f, "      {}", self.paint("Full Title", "Full Title".green().bold()))?;
            writeln!(f, "        {}", details.full_title)?;
            writeln!(f, "      {}", self.paint("Body", "Body".green().bold()))?;
            for line in details.body.lines() {
                writeln!(f, "        {}", line)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for PostListText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let badge = &self.list.badge;
        let label = match badge.level {
            StatusLevel::Error => self.paint(&badge.label, badge.label.red().bold()),
            _ => self.paint(&badge.label, badge.label.bold()),
        };
        writeln!(f, "{} {}", badge.icon(), label)?;

        if self.list.rows.is_empty() {
            return Ok(());
        }

        for row in &self.list.rows {
            writeln!(f)?;
            self.write_row(f, row)?;
        }
        Ok(())
    }
}
