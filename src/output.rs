//! 出力形式とキー/値の段組みレンダラ

use clap::ValueEnum;
use std::fmt::Display;

/// 詳細表示の出力形式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

struct Section {
    title: String,
    rows: Vec<(String, String)>,
}

/// タイトル付きのキー/値リスト
///
/// キーは全セクション共通の幅で右寄せする。
pub struct Columns {
    title: String,
    sections: Vec<Section>,
}

impl Columns {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    pub fn add_section_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.sections.push(Section {
            title: title.into(),
            rows: Vec::new(),
        });
        self
    }

    pub fn add_row(&mut self, key: impl Into<String>, value: impl Display) -> &mut Self {
        if self.sections.is_empty() {
            self.add_section_title("");
        }
        if let Some(section) = self.sections.last_mut() {
            section.rows.push((key.into(), value.to_string()));
        }
        self
    }

    pub fn render(&self) -> String {
        let width = self
            .sections
            .iter()
            .flat_map(|s| s.rows.iter())
            .map(|(k, _)| k.chars().count())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');

        for section in &self.sections {
            out.push('\n');
            if !section.title.is_empty() {
                out.push_str(&section.title);
                out.push_str(":\n\n");
            }
            for (key, value) in &section.rows {
                out.push_str(&format!("  {:>width$}: {}\n", key, value, width = width));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_aligns_keys_right() {
        let mut cols = Columns::new("Title");
        cols.add_section_title("Configuration");
        cols.add_row("Name", "orders");
        cols.add_row("Remote Subject", "orders.>");

        let expected = "Title\n\nConfiguration:\n\n            Name: orders\n  Remote Subject: orders.>\n";
        assert_eq!(cols.render(), expected);
    }

    #[test]
    fn render_without_section_title() {
        let mut cols = Columns::new("Title");
        cols.add_row("A", true);

        assert_eq!(cols.render(), "Title\n\n  A: true\n");
    }

    #[test]
    fn render_multiple_sections_share_width() {
        let mut cols = Columns::new("T");
        cols.add_section_title("One").add_row("Short", 1);
        cols.add_section_title("Two").add_row("Much Longer", 2);

        let rendered = cols.render();
        assert!(rendered.contains("        Short: 1\n"));
        assert!(rendered.contains("  Much Longer: 2\n"));
    }
}
