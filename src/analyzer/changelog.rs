use crate::analyzer::render::Rendering;

/// Named group of rendered changelog items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub items: Vec<String>,
}

/// Rendered changelog for a single release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogDocument {
    pub version: String,
    pub rendering: Rendering,
    /// Sections in the order they were first populated
    pub sections: Vec<Section>,
    pub content: String,
}

impl ChangelogDocument {
    /// True when no commit survived filtering and only the version heading
    /// was rendered.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }
}

/// Append an item to the section with the given title, creating the section
/// at the end of the list on first use.
pub fn push_item(sections: &mut Vec<Section>, title: &str, item: String) {
    match sections.iter_mut().find(|s| s.title == title) {
        Some(section) => section.items.push(item),
        None => sections.push(Section {
            title: title.to_string(),
            items: vec![item],
        }),
    }
}
