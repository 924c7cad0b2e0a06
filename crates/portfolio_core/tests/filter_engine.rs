use portfolio_core::{
    filter_projects, matches_search, Catalog, Category, CategoryFilter, Project, ProjectQuery,
};
use pretty_assertions::assert_eq;

fn titles(projects: &[&Project]) -> Vec<String> {
    projects.iter().map(|p| p.title.clone()).collect()
}

fn filter(category: &str, search: &str) -> Vec<String> {
    let catalog = Catalog::builtin();
    titles(&filter_projects(
        catalog.projects(),
        &CategoryFilter::from_label(category),
        search,
    ))
}

fn project(id: u32, title: &str, category: Category, technologies: &[&str]) -> Project {
    Project {
        id,
        title: title.to_string(),
        description: format!("{title} description"),
        long_description: String::new(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        demo_link: None,
        github_link: None,
        featured: false,
        category,
    }
}

fn synthetic_catalog() -> Vec<Project> {
    vec![
        project(10, "Rust CLI", Category::Web, &["Rust", "Clap"]),
        project(11, "Kotlin Notes", Category::Mobile, &["Kotlin"]),
        project(12, "GraphQL Gateway", Category::Fullstack, &["GraphQL", "Node.js"]),
        project(13, "Trusty Blog", Category::Web, &["Astro"]),
        project(14, "Offline Maps", Category::Mobile, &["SwiftUI", "MapKit"]),
    ]
}

#[test]
fn all_with_empty_search_returns_whole_catalog_in_order() {
    assert_eq!(
        filter("all", ""),
        vec![
            "E-Commerce Platform",
            "Mobile Fitness App",
            "Next.js Dashboard",
            "Social Media Platform",
        ]
    );
}

#[test]
fn mobile_category_returns_only_fitness_app() {
    assert_eq!(filter("mobile", ""), vec!["Mobile Fitness App"]);
}

#[test]
fn react_search_matches_react_family_technologies() {
    // The dashboard lists no React tag and never mentions it in title or description.
    assert_eq!(
        filter("all", "react"),
        vec![
            "E-Commerce Platform",
            "Mobile Fitness App",
            "Social Media Platform",
        ]
    );
}

#[test]
fn web_category_with_mongodb_search_is_empty() {
    assert!(filter("web", "mongodb").is_empty());
}

#[test]
fn search_is_case_insensitive_over_title_description_and_tags() {
    assert_eq!(filter("all", "DASHBOARD"), vec!["Next.js Dashboard"]);
    assert_eq!(filter("all", "real-time chat"), vec!["Social Media Platform"]);
    assert_eq!(filter("all", "neo4j"), vec!["Mobile Fitness App"]);
}

#[test]
fn search_query_is_not_trimmed() {
    assert!(filter("all", " react ").is_empty());
}

#[test]
fn unrecognized_category_matches_nothing() {
    assert!(filter("desktop", "").is_empty());
    assert!(filter("Web", "").is_empty());
}

#[test]
fn category_filter_returns_only_that_category() {
    let catalog = synthetic_catalog();
    for choice in CategoryFilter::CHOICES {
        let result = filter_projects(&catalog, &choice, "");
        match &choice {
            CategoryFilter::All => assert_eq!(result.len(), catalog.len()),
            CategoryFilter::Only(category) => {
                assert!(!result.is_empty());
                assert!(result.iter().all(|p| p.category == *category));
                let expected = catalog.iter().filter(|p| p.category == *category).count();
                assert_eq!(result.len(), expected);
            }
            CategoryFilter::Unrecognized(_) => unreachable!(),
        }
    }
}

#[test]
fn search_partitions_catalog_into_matching_and_non_matching() {
    let catalog = synthetic_catalog();
    for query in ["rust", "KOT", "node", "a", "zzz", ""] {
        let result = filter_projects(&catalog, &CategoryFilter::All, query);
        let needle = query.to_lowercase();
        let contains = |p: &Project| {
            p.title.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
                || p.technologies.iter().any(|t| t.to_lowercase().contains(&needle))
        };
        for p in &catalog {
            let included = result.iter().any(|r| r.id == p.id);
            assert_eq!(included, contains(p), "query {query:?} project {}", p.title);
        }
    }
}

#[test]
fn result_is_an_ordered_subsequence_of_the_catalog() {
    let catalog = synthetic_catalog();
    for choice in CategoryFilter::CHOICES {
        for query in ["", "s", "o"] {
            let result = filter_projects(&catalog, &choice, query);
            let positions: Vec<usize> = result
                .iter()
                .map(|r| catalog.iter().position(|p| p.id == r.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

#[test]
fn filtering_is_idempotent() {
    let catalog = Catalog::builtin();
    let query = ProjectQuery::new(CategoryFilter::Only(Category::Fullstack), "node");
    let first = titles(&query.apply(&catalog));
    let second = titles(&query.apply(&catalog));
    assert_eq!(first, second);
    assert_eq!(first, vec!["E-Commerce Platform", "Social Media Platform"]);
}

#[test]
fn empty_search_equals_category_only_filtering() {
    let catalog = synthetic_catalog();
    for choice in CategoryFilter::CHOICES {
        let searched = filter_projects(&catalog, &choice, "");
        let category_only: Vec<&Project> = catalog.iter().filter(|p| choice.matches(p)).collect();
        assert_eq!(searched, category_only);
    }
}

#[test]
fn matches_search_checks_every_technology() {
    let p = project(1, "Plain", Category::Web, &["Alpha", "Beta", "Gamma", "Delta"]);
    assert!(matches_search(&p, "delta"));
    assert!(!matches_search(&p, "epsilon"));
}
