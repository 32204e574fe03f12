//! Output strategies for the assembled changelog.
use quick_xml::escape::escape;

use crate::{analyzer::changelog::Section, config::policy::TableConfig};

/// How sections are laid out in HTML output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HtmlLayout {
    /// Heading followed by an unordered list.
    List,
    /// Fixed three column table wrapping the item list.
    #[default]
    Table,
}

/// Output format and layout used to render a changelog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendering {
    Markdown,
    Html(HtmlLayout),
}

impl Default for Rendering {
    fn default() -> Self {
        Rendering::Html(HtmlLayout::default())
    }
}

impl Rendering {
    /// File the rendered changelog is written to, relative to the output
    /// directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Rendering::Markdown => "CHANGELOG.md",
            Rendering::Html(_) => "CHANGELOG.html",
        }
    }

    /// Render the content of a single line item.
    pub fn item(&self, description: &str, pr: Option<(&str, &str)>) -> String {
        match (self, pr) {
            (Rendering::Markdown, None) => description.to_string(),
            (Rendering::Markdown, Some((number, url))) => {
                format!("{description} ([#{number}]({url}))")
            }
            (Rendering::Html(_), None) => escape(description).to_string(),
            (Rendering::Html(_), Some((number, url))) => format!(
                r#"{} (<a href="{}">#{number}</a>)"#,
                escape(description),
                escape(url)
            ),
        }
    }

    /// Render the version heading followed by every section in order.
    pub fn document(
        &self,
        version: &str,
        sections: &[Section],
        table: &TableConfig,
    ) -> String {
        match self {
            Rendering::Markdown => markdown_document(version, sections),
            Rendering::Html(layout) => {
                let body = sections
                    .iter()
                    .map(|s| match layout {
                        HtmlLayout::List => html_list_section(s),
                        HtmlLayout::Table => html_table_section(s, table),
                    })
                    .collect::<String>();

                format!("<h2>{}</h2>{body}", escape(version))
            }
        }
    }
}

fn markdown_document(version: &str, sections: &[Section]) -> String {
    let mut blocks = vec![format!("# {version}")];

    for section in sections {
        let items = section
            .items
            .iter()
            .map(|i| format!("- {i}"))
            .collect::<Vec<String>>()
            .join("\n");

        blocks.push(format!("## {}\n{items}", section.title));
    }

    blocks.join("\n\n")
}

fn html_items(section: &Section) -> String {
    let items = section
        .items
        .iter()
        .map(|i| format!("<li>{i}</li>"))
        .collect::<String>();

    format!("<ul>{items}</ul>")
}

fn html_list_section(section: &Section) -> String {
    format!("<h3>{}</h3>{}", escape(&section.title), html_items(section))
}

fn html_table_section(section: &Section, table: &TableConfig) -> String {
    [
        r#"<table style="width: 100%; table-layout: fixed;">"#.to_string(),
        r#"<colgroup><col style="width: 50%" /><col style="width: 35%" /><col style="width: 15%" /></colgroup>"#.to_string(),
        "<tbody>".to_string(),
        format!(
            "<tr><th>{}</th><th>{}</th><th>{}</th></tr>",
            escape(&section.title),
            escape(&table.description_header),
            escape(&table.links_header)
        ),
        format!(
            "<tr><td>{}</td><td></td><td><ul><li>{}</li></ul></td></tr>",
            html_items(section),
            escape(&table.links_placeholder)
        ),
        "</tbody></table>".to_string(),
    ]
    .concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(title: &str, items: &[&str]) -> Section {
        Section {
            title: title.into(),
            items: items.iter().map(|i| i.to_string()).collect(),
        }
    }

    #[test]
    fn file_names_follow_format() {
        assert_eq!(Rendering::Markdown.file_name(), "CHANGELOG.md");
        assert_eq!(
            Rendering::Html(HtmlLayout::List).file_name(),
            "CHANGELOG.html"
        );
        assert_eq!(Rendering::default().file_name(), "CHANGELOG.html");
    }

    #[test]
    fn markdown_item_links_pull_request() {
        let item = Rendering::Markdown
            .item("add login", Some(("10", "https://github.com/o/r/pull/10")));

        assert_eq!(item, "add login ([#10](https://github.com/o/r/pull/10))");
        assert_eq!(Rendering::Markdown.item("add login", None), "add login");
    }

    #[test]
    fn html_item_escapes_description() {
        let rendering = Rendering::Html(HtmlLayout::List);
        let item = rendering.item(
            "handle <script> & friends",
            Some(("7", "https://github.com/o/r/pull/7")),
        );

        assert_eq!(
            item,
            r#"handle &lt;script&gt; &amp; friends (<a href="https://github.com/o/r/pull/7">#7</a>)"#
        );
    }

    #[test]
    fn markdown_document_layout() {
        let sections = vec![
            section("Features", &["one", "two"]),
            section("Fixes", &["three"]),
        ];

        let doc = Rendering::Markdown.document(
            "v1.2.0",
            &sections,
            &TableConfig::default(),
        );

        assert_eq!(
            doc,
            "# v1.2.0\n\n## Features\n- one\n- two\n\n## Fixes\n- three"
        );
    }

    #[test]
    fn html_list_document_layout() {
        let sections = vec![section("Features", &["one"])];

        let doc = Rendering::Html(HtmlLayout::List).document(
            "v1.2.0",
            &sections,
            &TableConfig::default(),
        );

        assert_eq!(doc, "<h2>v1.2.0</h2><h3>Features</h3><ul><li>one</li></ul>");
    }

    #[test]
    fn html_table_document_layout() {
        let sections = vec![section("Features", &["one", "two"])];
        let table = TableConfig {
            description_header: "Descrição".into(),
            ..TableConfig::default()
        };

        let doc = Rendering::Html(HtmlLayout::Table)
            .document("v1.2.0", &sections, &table);

        assert!(doc.starts_with("<h2>v1.2.0</h2><table"));
        assert!(doc.contains(
            "<tr><th>Features</th><th>Descrição</th><th>Links</th></tr>"
        ));
        assert!(doc.contains(
            "<tr><td><ul><li>one</li><li>two</li></ul></td><td></td><td><ul><li>Link to doc here</li></ul></td></tr>"
        ));
        assert!(doc.ends_with("</tbody></table>"));
        assert_eq!(doc.matches("<table").count(), 1);
    }

    #[test]
    fn empty_documents_only_contain_heading() {
        let table = TableConfig::default();

        assert_eq!(Rendering::Markdown.document("v2", &[], &table), "# v2");
        assert_eq!(
            Rendering::Html(HtmlLayout::Table).document("v2", &[], &table),
            "<h2>v2</h2>"
        );
    }
}
