use crate::catalog::{Catalog, Category, Project};

/// Category selector of the projects page.
///
/// Labels outside the closed set are kept as `Unrecognized` and match no project.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
    Unrecognized(String),
}

impl CategoryFilter {
    /// Filter buttons in display order.
    pub const CHOICES: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Web),
        CategoryFilter::Only(Category::Mobile),
        CategoryFilter::Only(Category::Fullstack),
    ];

    /// Exact, case-sensitive mapping of the page's category keys.
    pub fn from_label(label: &str) -> Self {
        match label {
            "all" => CategoryFilter::All,
            "web" => CategoryFilter::Only(Category::Web),
            "mobile" => CategoryFilter::Only(Category::Mobile),
            "fullstack" => CategoryFilter::Only(Category::Fullstack),
            other => CategoryFilter::Unrecognized(other.to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.key(),
            CategoryFilter::Unrecognized(label) => label,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All Projects",
            CategoryFilter::Only(category) => category.label(),
            CategoryFilter::Unrecognized(label) => label,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => project.category == *category,
            CategoryFilter::Unrecognized(_) => false,
        }
    }
}

/// Case-insensitive substring match over title, description and technologies.
///
/// The query is not trimmed; an empty query matches every project.
pub fn matches_search(project: &Project, query: &str) -> bool {
    let needle = query.to_lowercase();
    let hit = |text: &str| text.to_lowercase().contains(&needle);
    hit(&project.title)
        || hit(&project.description)
        || project.technologies.iter().any(|tech| hit(tech))
}

/// Projects passing both the category and the search predicate, in catalog order.
pub fn filter_projects<'a>(
    all: &'a [Project],
    category: &CategoryFilter,
    query: &str,
) -> Vec<&'a Project> {
    all.iter()
        .filter(|project| category.matches(project) && matches_search(project, query))
        .collect()
}

/// The two inputs of the projects page filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectQuery {
    pub category: CategoryFilter,
    pub search: String,
}

impl ProjectQuery {
    pub fn new(category: CategoryFilter, search: impl Into<String>) -> Self {
        Self {
            category,
            search: search.into(),
        }
    }

    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Project> {
        filter_projects(catalog.projects(), &self.category, &self.search)
    }

    pub fn is_default(&self) -> bool {
        self.category == CategoryFilter::All && self.search.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_case_sensitive() {
        assert_eq!(
            CategoryFilter::from_label("Web"),
            CategoryFilter::Unrecognized("Web".to_string())
        );
        assert_eq!(
            CategoryFilter::from_label("web"),
            CategoryFilter::Only(Category::Web)
        );
    }

    #[test]
    fn key_round_trips_through_from_label() {
        for choice in CategoryFilter::CHOICES {
            assert_eq!(CategoryFilter::from_label(choice.key()), choice);
        }
    }
}
