use portfolio_core::profile::{self, Education, Milestone, SkillGroup};
use portfolio_core::{
    AboutTab, AboutView, AppViewModel, ContactField, ContactPhase, ContactView, HomeView,
    PageView, ProjectCard, ProjectDetailView, ProjectsView, Section, SkillsView,
};

use super::html::{class_list, Markup};
use super::layout;
use crate::config::SiteConfig;

/// Renders the complete HTML document for the current page.
pub fn render_page(view: &AppViewModel, config: &SiteConfig) -> String {
    let mut body = Markup::new();
    match &view.page {
        PageView::Home(home) => render_home(&mut body, home, config),
        PageView::About(about) => render_about(&mut body, about, config),
        PageView::Skills(skills) => render_skills(&mut body, skills),
        PageView::Projects(projects) => render_projects(&mut body, projects),
        PageView::ProjectDetail(detail) => render_project_detail(&mut body, detail),
        PageView::ProjectNotFound { requested } => render_project_not_found(&mut body, requested),
        PageView::Contact(contact) => render_contact(&mut body, contact, config),
        PageView::NotFound { path } => render_not_found(&mut body, path),
    }
    layout::document(config, view.page.title(), &view.nav, &body.into_string())
}

fn open_section(html: &mut Markup, section: Section, revealed: &[Section]) {
    let class = if revealed.contains(&section) {
        "reveal revealed"
    } else {
        "reveal"
    };
    html.open(
        "section",
        &[("class", Some(class)), ("data-section", Some(section.key()))],
    );
}

fn render_home(html: &mut Markup, home: &HomeView, config: &SiteConfig) {
    open_section(html, Section::Hero, &home.revealed);
    html.element("h1", &[], &format!("Hi, I'm {}", config.owner_name));
    html.open("p", &[("class", Some("headline"))]);
    html.element("span", &[("class", Some("typed"))], &home.typed_headline);
    if !home.typing_done {
        html.element("span", &[("class", Some("cursor"))], "|");
    }
    html.close("p");
    html.element("p", &[("class", Some("tagline"))], &config.tagline);
    html.link("/projects", "button primary", "View My Work");
    html.link("/contact", "button", "Get In Touch");
    html.close("section");

    open_section(html, Section::Skills, &home.revealed);
    html.element("h2", &[], "What I Work With");
    html.open("ul", &[("class", Some("skill-preview"))]);
    for group in profile::SKILL_GROUPS {
        html.open("li", &[]);
        html.element("h3", &[], group.name);
        html.element("p", &[], group.description);
        html.close("li");
    }
    html.close("ul");
    html.link("/skills", "see-all", "Explore Skills");
    html.close("section");

    open_section(html, Section::Projects, &home.revealed);
    html.element("h2", &[], "Featured Projects");
    render_card_grid(html, &home.featured);
    html.link("/projects", "see-all", "View All Projects");
    html.close("section");
}

fn render_about(html: &mut Markup, about: &AboutView, config: &SiteConfig) {
    html.element("h1", &[], "About Me");

    open_section(html, Section::Bio, &about.revealed);
    html.element("h2", &[], &config.owner_name);
    html.element("p", &[("class", Some("bio"))], &config.tagline);
    html.close("section");

    open_section(html, Section::Tabs, &about.revealed);
    html.open("div", &[("class", Some("tabs")), ("role", Some("tablist"))]);
    for tab in AboutTab::ALL {
        let active = tab == about.active_tab;
        let class = class_list("tab", active);
        html.element(
            "button",
            &[
                ("type", Some("button")),
                ("role", Some("tab")),
                ("class", Some(class.as_str())),
                ("data-tab", Some(tab.key())),
                ("aria-selected", Some(if active { "true" } else { "false" })),
            ],
            tab.label(),
        );
    }
    html.close("div");

    html.open(
        "div",
        &[("class", Some("tab-panel")), ("data-tab", Some(about.active_tab.key()))],
    );
    match about.active_tab {
        AboutTab::Experience => render_timeline(html, about.experience),
        AboutTab::Education => render_education(html, about.education),
        AboutTab::Skills => {
            html.element(
                "p",
                &[],
                "MERN stack, Next.js and mobile development with React Native.",
            );
            html.link("/skills", "button", "See All Skills");
        }
    }
    html.close("div");
    html.close("section");

    open_section(html, Section::Stats, &about.revealed);
    html.open("dl", &[("class", Some("stats"))]);
    let stats = [
        ("Roles", about.experience.len()),
        ("Degrees", about.education.len()),
        ("Skill Areas", profile::SKILL_GROUPS.len()),
    ];
    for (label, count) in stats {
        html.element("dt", &[], label);
        html.element("dd", &[], &count.to_string());
    }
    html.close("dl");
    html.close("section");
}

fn render_timeline(html: &mut Markup, milestones: &[Milestone]) {
    html.open("ol", &[("class", Some("timeline"))]);
    for milestone in milestones {
        html.open("li", &[]);
        html.element("span", &[("class", Some("years"))], milestone.years);
        html.element("h3", &[], milestone.title);
        html.element("p", &[], milestone.organization);
        html.close("li");
    }
    html.close("ol");
}

fn render_education(html: &mut Markup, education: &[Education]) {
    html.open("ol", &[("class", Some("timeline"))]);
    for entry in education {
        html.open("li", &[]);
        html.element("span", &[("class", Some("years"))], entry.period);
        html.element("h3", &[], entry.degree);
        html.element("p", &[], entry.institution);
        html.close("li");
    }
    html.close("ol");
}

fn render_skills(html: &mut Markup, skills: &SkillsView) {
    html.element("h1", &[], "Skills");
    html.open("div", &[("class", Some("skill-groups"))]);
    for group in skills.groups {
        let class = class_list("skill-group", group.key == skills.active_group);
        html.element(
            "button",
            &[
                ("type", Some("button")),
                ("class", Some(class.as_str())),
                ("data-group", Some(group.key)),
            ],
            group.name,
        );
    }
    html.close("div");

    if let Some(group) = skills.groups.iter().find(|g| g.key == skills.active_group) {
        render_skill_group(html, group);
    }
}

fn render_skill_group(html: &mut Markup, group: &SkillGroup) {
    html.open(
        "section",
        &[("class", Some("skill-panel")), ("data-group", Some(group.key))],
    );
    html.element("h2", &[], group.name);
    html.element("p", &[], group.description);
    for skill in group.skills {
        html.open("div", &[("class", Some("skill"))]);
        html.element("h3", &[], skill.title);
        html.element("p", &[], skill.description);
        let width = format!("width:{}%", skill.level.min(100));
        html.open("div", &[("class", Some("skill-bar"))]);
        html.element("span", &[("style", Some(width.as_str()))], "");
        html.close("div");
        html.close("div");
    }
    html.close("section");
}

fn render_projects(html: &mut Markup, projects: &ProjectsView) {
    html.element("h1", &[], "Project Portfolio");

    html.open("div", &[("class", Some("filters"))]);
    for filter in &projects.filters {
        let class = class_list("filter", filter.active);
        html.element(
            "button",
            &[
                ("type", Some("button")),
                ("class", Some(class.as_str())),
                ("data-category", Some(filter.key.as_str())),
            ],
            &filter.label,
        );
    }
    html.close("div");

    html.open(
        "input",
        &[
            ("type", Some("search")),
            ("name", Some("search")),
            ("placeholder", Some("Search projects or technologies...")),
            ("value", Some(projects.search.as_str())),
        ],
    );
    html.element("p", &[("class", Some("count"))], &projects.count_label);

    if projects.is_empty {
        html.open("div", &[("class", Some("empty"))]);
        html.element("h3", &[], "No projects found");
        html.element("p", &[], "Try adjusting your search or filter criteria");
        html.element(
            "button",
            &[("type", Some("button")), ("class", Some("reset"))],
            "Reset filters",
        );
        html.close("div");
    } else {
        render_card_grid(html, &projects.cards);
    }
}

fn render_card_grid(html: &mut Markup, cards: &[ProjectCard]) {
    html.open("div", &[("class", Some("project-grid"))]);
    for card in cards {
        render_card(html, card);
    }
    html.close("div");
}

fn render_card(html: &mut Markup, card: &ProjectCard) {
    let id = card.id.to_string();
    html.open(
        "article",
        &[
            ("class", Some("project-card")),
            ("data-project-id", Some(id.as_str())),
            ("data-category", Some(card.category.key())),
        ],
    );
    // Image-free placeholder stands in for the project screenshot.
    html.element("div", &[("class", Some("thumbnail"))], &initials(&card.title));
    html.element("span", &[("class", Some("category"))], card.category_label);
    if card.featured {
        html.element("span", &[("class", Some("badge"))], "Featured");
    }
    html.open("h3", &[]);
    html.link(&card.href, "title", &card.title);
    html.close("h3");
    html.element("p", &[("class", Some("description"))], &card.description);
    html.open("ul", &[("class", Some("technologies"))]);
    for technology in &card.technologies {
        html.element("li", &[], technology);
    }
    if card.more_technologies > 0 {
        html.element(
            "li",
            &[("class", Some("more"))],
            &format!("+{} more", card.more_technologies),
        );
    }
    html.close("ul");
    html.close("article");
}

fn initials(title: &str) -> String {
    title
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .filter(|ch| ch.is_alphanumeric())
        .take(2)
        .collect()
}

fn render_project_detail(html: &mut Markup, detail: &ProjectDetailView) {
    html.link("/projects", "back", "Back to Projects");
    html.open("article", &[("class", Some("project-detail"))]);
    html.element("span", &[("class", Some("category"))], detail.category_label);
    if detail.featured {
        html.element("span", &[("class", Some("badge"))], "Featured");
    }
    html.element("h1", &[], &detail.title);
    html.element("p", &[("class", Some("lead"))], &detail.description);

    html.open("div", &[("class", Some("links"))]);
    if let Some(github) = &detail.github_link {
        html.element(
            "a",
            &[
                ("href", Some(github.as_str())),
                ("class", Some("github")),
                ("rel", Some("noopener noreferrer")),
                ("target", Some("_blank")),
            ],
            "View Code",
        );
    }
    if let Some(demo) = &detail.demo_link {
        html.element(
            "a",
            &[
                ("href", Some(demo.as_str())),
                ("class", Some("demo")),
                ("rel", Some("noopener noreferrer")),
                ("target", Some("_blank")),
            ],
            "Live Demo",
        );
    }
    html.close("div");

    html.element("h2", &[], "Overview");
    for paragraph in &detail.overview {
        html.element("p", &[("class", Some("overview"))], paragraph);
    }
    if !detail.features.is_empty() {
        html.element("h2", &[], "Key Features");
        html.open("ul", &[("class", Some("features"))]);
        for feature in &detail.features {
            html.element("li", &[], feature);
        }
        html.close("ul");
    }

    html.element("h2", &[], "Technologies");
    html.open("ul", &[("class", Some("technologies"))]);
    for technology in &detail.technologies {
        html.element("li", &[], technology);
    }
    html.close("ul");
    html.close("article");
}

fn render_project_not_found(html: &mut Markup, requested: &str) {
    html.open(
        "div",
        &[("class", Some("not-found")), ("data-requested", Some(requested))],
    );
    html.element("h1", &[], "Project Not Found");
    html.element(
        "p",
        &[],
        "We couldn't find the project you're looking for. It may have been moved or doesn't exist.",
    );
    html.link("/projects", "button", "Back to Projects");
    html.close("div");
}

fn render_not_found(html: &mut Markup, path: &str) {
    html.open("div", &[("class", Some("not-found")), ("data-path", Some(path))]);
    html.element("h1", &[], "Page Not Found");
    html.element("p", &[], "The page you're looking for doesn't exist.");
    html.link("/", "button", "Go Home");
    html.close("div");
}

fn render_contact(html: &mut Markup, contact: &ContactView, config: &SiteConfig) {
    html.element("h1", &[], "Contact Me");

    if contact.phase == ContactPhase::Submitted {
        html.open("div", &[("class", Some("success")), ("role", Some("status"))]);
        html.element("h3", &[], "Thank you for your message!");
        html.element("p", &[], "I'll get back to you as soon as possible.");
        html.element(
            "button",
            &[("type", Some("button")), ("class", Some("send-another"))],
            "Send Another Message",
        );
        html.close("div");
        return;
    }

    let mut form_attrs = vec![("class", Some("contact-form")), ("method", Some("post"))];
    if let Some(endpoint) = config.contact.endpoint.as_deref() {
        form_attrs.push(("action", Some(endpoint)));
    }
    html.open("form", &form_attrs);

    for field in [ContactField::Name, ContactField::Email] {
        open_field(html, contact, field);
        let input_type = if field == ContactField::Email {
            "email"
        } else {
            "text"
        };
        let mut attrs = field_attrs(contact, field);
        attrs.push(("type", Some(input_type)));
        attrs.push(("value", Some(contact.fields.get(field))));
        html.open("input", &attrs);
        html.close("div");
    }

    open_field(html, contact, ContactField::Subject);
    html.open("select", &field_attrs(contact, ContactField::Subject));
    let chosen = contact.fields.get(ContactField::Subject);
    let mut placeholder = vec![("value", Some(""))];
    if chosen.is_empty() {
        placeholder.push(("selected", None));
    }
    html.element("option", &placeholder, "Select a subject");
    for choice in contact.subject_choices {
        let mut attrs = vec![("value", Some(*choice))];
        if chosen == *choice {
            attrs.push(("selected", None));
        }
        html.element("option", &attrs, choice);
    }
    html.close("select");
    html.close("div");

    open_field(html, contact, ContactField::Message);
    let mut attrs = field_attrs(contact, ContactField::Message);
    attrs.push(("rows", Some("6")));
    html.element("textarea", &attrs, contact.fields.get(ContactField::Message));
    html.close("div");

    if let Some(error) = &contact.error {
        html.element("p", &[("class", Some("form-error")), ("role", Some("alert"))], error);
    }

    let mut button = vec![("type", Some("submit")), ("class", Some("submit"))];
    if !contact.submit_enabled {
        button.push(("disabled", None));
    }
    html.element("button", &button, contact.submit_label);
    html.close("form");
}

fn open_field(html: &mut Markup, contact: &ContactView, field: ContactField) {
    let missing = contact.missing.contains(&field);
    let class = if missing { "field missing" } else { "field" };
    html.open("div", &[("class", Some(class))]);
    html.element("label", &[("for", Some(field.key()))], field.label());
}

fn field_attrs<'a>(contact: &ContactView, field: ContactField) -> Vec<(&'a str, Option<&'a str>)> {
    let mut attrs = vec![
        ("id", Some(field.key())),
        ("name", Some(field.key())),
        ("required", None),
    ];
    if contact.missing.contains(&field) {
        attrs.push(("aria-invalid", Some("true")));
    }
    if !contact.submit_enabled {
        attrs.push(("readonly", None));
    }
    attrs
}
