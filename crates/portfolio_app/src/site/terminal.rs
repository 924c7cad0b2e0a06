//! Plain-text rendering used by the interactive `browse` command.

use std::fmt::Write;

use portfolio_core::{AboutTab, AppViewModel, ContactField, ContactPhase, PageView, ProjectCard};

pub fn render_text(view: &AppViewModel) -> String {
    let mut out = String::new();
    let nav: Vec<String> = view
        .nav
        .iter()
        .map(|item| {
            if item.active {
                format!("[{}]", item.label)
            } else {
                item.label.to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "{}", nav.join("  "));
    let _ = writeln!(out, "== {} ({}) ==", view.page.title(), view.route.path());

    match &view.page {
        PageView::Home(home) => {
            let cursor = if home.typing_done { "" } else { "_" };
            let _ = writeln!(out, "{}{}", home.typed_headline, cursor);
            let _ = writeln!(out, "Featured:");
            for card in &home.featured {
                write_card(&mut out, card);
            }
        }
        PageView::About(about) => {
            let _ = writeln!(out, "Tab: {}", about.active_tab.label());
            match about.active_tab {
                AboutTab::Experience => {
                    for milestone in about.experience {
                        let _ = writeln!(
                            out,
                            "  {}  {} @ {}",
                            milestone.years, milestone.title, milestone.organization
                        );
                    }
                }
                AboutTab::Education => {
                    for entry in about.education {
                        let _ = writeln!(
                            out,
                            "  {}  {}, {}",
                            entry.period, entry.degree, entry.institution
                        );
                    }
                }
                AboutTab::Skills => {
                    let _ = writeln!(out, "  See /skills");
                }
            }
        }
        PageView::Skills(skills) => {
            for group in skills.groups {
                let marker = if group.key == skills.active_group { '>' } else { ' ' };
                let _ = writeln!(out, "{marker} {} ({})", group.name, group.key);
                if group.key == skills.active_group {
                    for skill in group.skills {
                        let _ = writeln!(out, "    {:<20} {:>3}%", skill.title, skill.level);
                    }
                }
            }
        }
        PageView::Projects(projects) => {
            let filters: Vec<String> = projects
                .filters
                .iter()
                .map(|f| {
                    if f.active {
                        format!("[{}]", f.label)
                    } else {
                        f.label.clone()
                    }
                })
                .collect();
            let _ = writeln!(out, "{}", filters.join(" "));
            let _ = writeln!(out, "Search: {:?}", projects.search);
            let _ = writeln!(out, "{}", projects.count_label);
            if projects.is_empty {
                let _ = writeln!(out, "No projects found. Type `reset` to clear filters.");
            }
            for card in &projects.cards {
                write_card(&mut out, card);
            }
        }
        PageView::ProjectDetail(detail) => {
            let _ = writeln!(out, "{} | {}", detail.category_label, detail.description);
            for paragraph in &detail.overview {
                let _ = writeln!(out, "{paragraph}");
            }
            for feature in &detail.features {
                let _ = writeln!(out, "  * {feature}");
            }
            let _ = writeln!(out, "Technologies: {}", detail.technologies.join(", "));
            if let Some(link) = &detail.demo_link {
                let _ = writeln!(out, "Demo: {link}");
            }
            if let Some(link) = &detail.github_link {
                let _ = writeln!(out, "Code: {link}");
            }
        }
        PageView::ProjectNotFound { requested } => {
            let _ = writeln!(out, "No project {requested:?}. Go back with `go /projects`.");
        }
        PageView::Contact(contact) => {
            if contact.phase == ContactPhase::Submitted {
                let _ = writeln!(out, "Thank you for your message! Type `another` to write again.");
            } else {
                for field in ContactField::ALL {
                    let flag = if contact.missing.contains(&field) {
                        " (required)"
                    } else {
                        ""
                    };
                    let _ = writeln!(
                        out,
                        "{:<8} {:?}{flag}",
                        field.label(),
                        contact.fields.get(field)
                    );
                }
                if let Some(error) = &contact.error {
                    let _ = writeln!(out, "! {error}");
                }
                let _ = writeln!(out, "[{}]", contact.submit_label);
            }
        }
        PageView::NotFound { path } => {
            let _ = writeln!(out, "Nothing at {path}. Try `go /`.");
        }
    }
    out
}

fn write_card(out: &mut String, card: &ProjectCard) {
    let star = if card.featured { "*" } else { " " };
    let mut technologies = card.technologies.join(", ");
    if card.more_technologies > 0 {
        let _ = write!(technologies, " +{} more", card.more_technologies);
    }
    let _ = writeln!(
        out,
        "{star} {:>3} {:<24} {:<16} {}",
        card.id, card.title, card.category_label, technologies
    );
}
