use std::fs;
use std::sync::Arc;

use portfolio_app::config::SiteConfig;
use portfolio_app::site::{render_page, render_site, settled_view, site_routes};
use portfolio_core::{
    filter_projects, update, AppState, AppViewModel, Catalog, Category, CategoryFilter,
    ContactField, Msg, Route, SubmissionOutcome,
};
use portfolio_engine::{write_site, SiteOptions};
use pretty_assertions::assert_eq;
use scraper::{Html, Selector};
use tempfile::TempDir;

fn run(state: AppState, msgs: Vec<Msg>) -> AppState {
    msgs.into_iter().fold(state, |state, msg| update(state, msg).0)
}

fn page(view: &AppViewModel) -> Html {
    Html::parse_document(&render_page(view, &SiteConfig::default()))
}

fn select_texts(doc: &Html, css: &str) -> Vec<String> {
    let selector = Selector::parse(css).unwrap();
    doc.select(&selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}

fn count(doc: &Html, css: &str) -> usize {
    doc.select(&Selector::parse(css).unwrap()).count()
}

#[test]
fn projects_page_renders_exactly_the_filter_result() {
    let catalog = Catalog::builtin();
    let cases = [
        (CategoryFilter::All, ""),
        (CategoryFilter::Only(Category::Mobile), ""),
        (CategoryFilter::All, "react"),
        (CategoryFilter::Only(Category::Fullstack), "MONGO"),
        (CategoryFilter::Only(Category::Web), "mongodb"),
    ];

    for (category, search) in cases {
        let state = run(
            AppState::with_catalog(catalog.clone()),
            vec![
                Msg::Navigate("/projects".to_string()),
                Msg::CategorySelected(category.clone()),
                Msg::SearchChanged(search.to_string()),
            ],
        );
        let doc = page(&state.view());

        let expected: Vec<String> = filter_projects(catalog.projects(), &category, search)
            .into_iter()
            .map(|project| project.title.clone())
            .collect();
        assert_eq!(select_texts(&doc, "article.project-card h3"), expected);
        assert_eq!(
            count(&doc, "div.empty"),
            usize::from(expected.is_empty()),
            "{category:?} {search:?}"
        );
        let active = select_texts(&doc, "button.filter.active");
        assert_eq!(active, vec![category.label().to_string()]);
    }
}

#[test]
fn card_shows_three_technologies_then_a_count() {
    let state = run(AppState::new(), vec![Msg::Navigate("/projects".to_string())]);
    let doc = page(&state.view());
    let selector = Selector::parse(r#"article[data-project-id="1"] ul.technologies li"#).unwrap();
    let items: Vec<String> = doc
        .select(&selector)
        .map(|el| el.text().collect::<String>())
        .collect();
    let project = Catalog::builtin().get(1).unwrap().clone();
    let mut expected: Vec<String> = project.technologies.iter().take(3).cloned().collect();
    if project.technologies.len() > 3 {
        expected.push(format!("+{} more", project.technologies.len() - 3));
    }
    assert_eq!(items, expected);
}

#[test]
fn detail_page_lists_bullets_and_escapes_text() {
    let catalog = Catalog::builtin();
    let project = catalog.get(2).unwrap().clone();
    let doc = page(&settled_view(&catalog, "/projects/2"));

    assert_eq!(select_texts(&doc, "h1"), vec![project.title.clone()]);
    assert_eq!(select_texts(&doc, "ul.features li"), project.feature_list());
    assert_eq!(
        select_texts(&doc, "article.project-detail ul.technologies li"),
        project.technologies
    );

    let html = render_page(
        &settled_view(&catalog, "/projects/2"),
        &SiteConfig {
            site_title: "<script>alert(1)</script>".to_string(),
            ..SiteConfig::default()
        },
    );
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn unknown_project_renders_not_found_with_way_back() {
    let catalog = Catalog::builtin();
    for path in ["/projects/99", "/projects/abc"] {
        let doc = page(&settled_view(&catalog, path));
        assert_eq!(select_texts(&doc, "h1"), vec!["Project Not Found".to_string()]);
        let back = Selector::parse(r#"div.not-found a[href="/projects"]"#).unwrap();
        assert_eq!(doc.select(&back).count(), 1, "{path}");
        assert_eq!(select_texts(&doc, "a.nav-link.active"), vec!["Projects".to_string()]);
    }

    let doc = page(&settled_view(&catalog, "/blog"));
    assert_eq!(select_texts(&doc, "h1"), vec!["Page Not Found".to_string()]);
    assert_eq!(count(&doc, "a.nav-link.active"), 0);
}

#[test]
fn contact_form_marks_fields_required() {
    let doc = page(&settled_view(&Catalog::builtin(), "/contact"));

    for key in ["name", "email", "subject", "message"] {
        let selector = Selector::parse(&format!(r#"[name="{key}"][required]"#)).unwrap();
        assert_eq!(doc.select(&selector).count(), 1, "{key}");
    }
    assert_eq!(count(&doc, "select#subject option"), 6);
    assert_eq!(select_texts(&doc, "button.submit"), vec!["Send Message".to_string()]);
    assert_eq!(count(&doc, "button.submit[disabled]"), 0);
    assert_eq!(count(&doc, "form[action]"), 0);
}

fn filled_contact() -> AppState {
    let mut msgs = vec![Msg::Navigate("/contact".to_string())];
    for (field, value) in [
        (ContactField::Name, "Alice"),
        (ContactField::Email, "a@b.com"),
        (ContactField::Subject, "General Question"),
        (ContactField::Message, "Hi"),
    ] {
        msgs.push(Msg::ContactFieldChanged {
            field,
            value: value.to_string(),
        });
    }
    run(AppState::new(), msgs)
}

#[test]
fn contact_form_walks_through_submission_states() {
    let (submitting, effects) = update(filled_contact(), Msg::ContactSubmitClicked);
    assert_eq!(effects.len(), 1);
    let doc = page(&submitting.view());
    assert_eq!(select_texts(&doc, "button.submit[disabled]"), vec!["Sending...".to_string()]);
    let selected = Selector::parse("option[selected]").unwrap();
    assert_eq!(
        doc.select(&selected).next().unwrap().value().attr("value"),
        Some("General Question")
    );

    let failed = run(
        submitting.clone(),
        vec![Msg::ContactSubmitResolved {
            submission_id: 1,
            outcome: SubmissionOutcome::Failed {
                reason: "http status 502".to_string(),
            },
        }],
    );
    let doc = page(&failed.view());
    assert_eq!(
        select_texts(&doc, "p.form-error"),
        vec!["There was a problem sending your message. Please try again.".to_string()]
    );
    let name = Selector::parse("input#name").unwrap();
    assert_eq!(doc.select(&name).next().unwrap().value().attr("value"), Some("Alice"));

    let delivered = run(
        submitting,
        vec![Msg::ContactSubmitResolved {
            submission_id: 1,
            outcome: SubmissionOutcome::Delivered,
        }],
    );
    let doc = page(&delivered.view());
    assert_eq!(count(&doc, "form"), 0);
    assert_eq!(
        select_texts(&doc, "div.success button"),
        vec!["Send Another Message".to_string()]
    );
}

#[test]
fn empty_submit_flags_missing_fields() {
    let state = run(
        AppState::new(),
        vec![
            Msg::Navigate("/contact".to_string()),
            Msg::ContactFieldChanged {
                field: ContactField::Name,
                value: "Alice".to_string(),
            },
            Msg::ContactSubmitClicked,
        ],
    );
    let doc = page(&state.view());
    assert_eq!(count(&doc, r#"[aria-invalid="true"]"#), 3);
    assert_eq!(count(&doc, "#name[aria-invalid]"), 0);
}

#[test]
fn form_posts_to_configured_endpoint() {
    let mut config = SiteConfig::default();
    config.contact.endpoint = Some("https://forms.example.com/contact".to_string());
    let html = render_page(&settled_view(&Catalog::builtin(), "/contact"), &config);
    let doc = Html::parse_document(&html);
    let form = Selector::parse("form.contact-form").unwrap();
    assert_eq!(
        doc.select(&form).next().unwrap().value().attr("action"),
        Some("https://forms.example.com/contact")
    );
}

#[test]
fn home_renders_settled_headline_and_featured_projects() {
    let catalog = Catalog::builtin();
    let doc = page(&settled_view(&catalog, "/"));

    assert_eq!(
        select_texts(&doc, "span.typed"),
        vec![portfolio_core::profile::TYPED_HEADLINE.to_string()]
    );
    assert_eq!(count(&doc, "span.cursor"), 0);
    assert_eq!(count(&doc, "section.reveal:not(.revealed)"), 0);
    let featured: Vec<String> = catalog
        .projects()
        .iter()
        .filter(|p| p.featured)
        .map(|p| p.title.clone())
        .collect();
    assert_eq!(select_texts(&doc, "article.project-card h3"), featured);
}

#[test]
fn build_writes_every_route_and_the_404_page() {
    let catalog = Catalog::builtin();
    let temp = TempDir::new().unwrap();
    let pages = render_site(&catalog, &SiteConfig::default());
    let options = SiteOptions {
        generated_utc: Arc::new(|| "2024-05-01T12:00:00+00:00".to_string()),
        ..SiteOptions::default()
    };

    let summary = write_site(temp.path(), &pages, &options).unwrap();

    let routes = site_routes(&catalog);
    assert_eq!(routes.len(), 5 + catalog.len());
    assert!(routes.contains(&Route::ProjectDetail(4)));
    assert_eq!(summary.page_count, routes.len() + 1);
    for file in [
        "index.html",
        "about/index.html",
        "skills/index.html",
        "projects/index.html",
        "projects/3/index.html",
        "contact/index.html",
        "404.html",
        "manifest.json",
    ] {
        assert!(temp.path().join(file).is_file(), "{file}");
    }
    let missing = fs::read_to_string(temp.path().join("404.html")).unwrap();
    assert!(missing.contains("Page Not Found"));
}
