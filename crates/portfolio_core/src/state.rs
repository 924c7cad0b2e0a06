use std::collections::BTreeSet;

use crate::catalog::{Catalog, Project, CARD_TECHNOLOGY_LIMIT};
use crate::contact::{ContactForm, ContactPhase, SubmissionId, SUBJECT_CHOICES};
use crate::filter::{CategoryFilter, ProjectQuery};
use crate::profile::{self, TYPED_HEADLINE};
use crate::route::{NavSection, Route};
use crate::view_model::{
    AboutView, AppViewModel, ContactView, FilterButton, HomeView, NavItem, PageView, ProjectCard,
    ProjectDetailView, ProjectsView, SkillsView,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AboutTab {
    #[default]
    Experience,
    Education,
    Skills,
}

impl AboutTab {
    pub const ALL: [AboutTab; 3] = [AboutTab::Experience, AboutTab::Education, AboutTab::Skills];

    pub fn key(self) -> &'static str {
        match self {
            AboutTab::Experience => "experience",
            AboutTab::Education => "education",
            AboutTab::Skills => "skills",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AboutTab::Experience => "Experience",
            AboutTab::Education => "Education",
            AboutTab::Skills => "Skills",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.key() == key)
    }
}

/// Page sections that fade in once scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Hero,
    Bio,
    Tabs,
    Skills,
    Projects,
    Stats,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::Bio,
        Section::Tabs,
        Section::Skills,
        Section::Projects,
        Section::Stats,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Bio => "bio",
            Section::Tabs => "tabs",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Stats => "stats",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    catalog: Catalog,
    route: Route,
    query: ProjectQuery,
    contact: ContactForm,
    about_tab: AboutTab,
    skill_group: &'static str,
    revealed: BTreeSet<Section>,
    typed_chars: usize,
    next_submission_id: SubmissionId,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_catalog(Catalog::builtin())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            route: Route::Home,
            query: ProjectQuery::default(),
            contact: ContactForm::new(),
            about_tab: AboutTab::default(),
            skill_group: default_skill_group(),
            revealed: BTreeSet::new(),
            typed_chars: 0,
            next_submission_id: 1,
            dirty: false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn query(&self) -> &ProjectQuery {
        &self.query
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    pub(crate) fn query_mut(&mut self) -> &mut ProjectQuery {
        &mut self.query
    }

    pub(crate) fn allocate_submission_id(&mut self) -> SubmissionId {
        let id = self.next_submission_id;
        self.next_submission_id += 1;
        id
    }

    /// Switches pages, discarding page-local state of the page being left.
    ///
    /// Returns the submission that was in flight on a contact page being left.
    pub(crate) fn enter_route(&mut self, route: Route) -> Option<SubmissionId> {
        if route == self.route {
            return None;
        }
        let abandoned = if self.route == Route::Contact {
            let in_flight = self.contact.in_flight();
            self.contact = ContactForm::new();
            in_flight
        } else {
            None
        };
        if self.route == Route::Projects {
            self.query = ProjectQuery::default();
        }
        match self.route {
            Route::About => self.about_tab = AboutTab::default(),
            Route::Skills => self.skill_group = default_skill_group(),
            Route::Home => self.typed_chars = 0,
            _ => {}
        }
        self.revealed.clear();
        self.route = route;
        self.dirty = true;
        abandoned
    }

    pub(crate) fn select_about_tab(&mut self, tab: AboutTab) -> bool {
        if self.route != Route::About || self.about_tab == tab {
            return false;
        }
        self.about_tab = tab;
        true
    }

    pub(crate) fn select_skill_group(&mut self, key: &str) -> bool {
        if self.route != Route::Skills {
            return false;
        }
        match profile::skill_group(key) {
            Some(group) if group.key != self.skill_group => {
                self.skill_group = group.key;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn reveal(&mut self, section: Section) -> bool {
        self.revealed.insert(section)
    }

    pub(crate) fn advance_typing(&mut self) -> bool {
        if self.route != Route::Home || self.typed_chars >= TYPED_HEADLINE.chars().count() {
            return false;
        }
        self.typed_chars += 1;
        true
    }

    pub fn view(&self) -> AppViewModel {
        let nav = NavSection::ALL
            .into_iter()
            .map(|section| NavItem {
                label: section.label(),
                href: section.href(),
                active: self.route.nav_section() == Some(section),
            })
            .collect();

        AppViewModel {
            route: self.route.clone(),
            nav,
            page: self.page_view(),
            dirty: self.dirty,
        }
    }

    fn page_view(&self) -> PageView {
        let revealed: Vec<Section> = self.revealed.iter().copied().collect();
        match &self.route {
            Route::Home => {
                let total = TYPED_HEADLINE.chars().count();
                PageView::Home(HomeView {
                    typed_headline: TYPED_HEADLINE.chars().take(self.typed_chars).collect(),
                    typing_done: self.typed_chars >= total,
                    featured: self
                        .catalog
                        .projects()
                        .iter()
                        .filter(|project| project.featured)
                        .map(project_card)
                        .collect(),
                    revealed,
                })
            }
            Route::About => PageView::About(AboutView {
                active_tab: self.about_tab,
                experience: profile::EXPERIENCE,
                education: profile::EDUCATION,
                revealed,
            }),
            Route::Skills => PageView::Skills(SkillsView {
                active_group: self.skill_group,
                groups: profile::SKILL_GROUPS,
            }),
            Route::Projects => PageView::Projects(self.projects_view()),
            Route::ProjectDetail(id) => match self.catalog.get(*id) {
                Some(project) => PageView::ProjectDetail(project_detail(project)),
                None => PageView::ProjectNotFound {
                    requested: id.to_string(),
                },
            },
            Route::ProjectLookup(segment) => PageView::ProjectNotFound {
                requested: segment.clone(),
            },
            Route::Contact => PageView::Contact(self.contact_view()),
            Route::NotFound(path) => PageView::NotFound { path: path.clone() },
        }
    }

    fn projects_view(&self) -> ProjectsView {
        let cards: Vec<ProjectCard> = self
            .query
            .apply(&self.catalog)
            .into_iter()
            .map(project_card)
            .collect();
        let count = cards.len();
        ProjectsView {
            filters: CategoryFilter::CHOICES
                .into_iter()
                .map(|choice| FilterButton {
                    active: choice == self.query.category,
                    key: choice.key().to_string(),
                    label: choice.label().to_string(),
                })
                .collect(),
            search: self.query.search.clone(),
            count_label: format!(
                "Showing {count} {}",
                if count == 1 { "project" } else { "projects" }
            ),
            is_empty: cards.is_empty(),
            cards,
        }
    }

    fn contact_view(&self) -> ContactView {
        let phase = self.contact.phase();
        let submitting = matches!(phase, ContactPhase::Submitting { .. });
        ContactView {
            fields: self.contact.fields().clone(),
            phase,
            error: self.contact.error().map(ToOwned::to_owned),
            missing: self.contact.missing().to_vec(),
            submit_enabled: !submitting,
            submit_label: if submitting {
                "Sending..."
            } else {
                "Send Message"
            },
            subject_choices: &SUBJECT_CHOICES,
        }
    }
}

fn default_skill_group() -> &'static str {
    profile::SKILL_GROUPS
        .first()
        .map(|group| group.key)
        .unwrap_or_default()
}

fn project_card(project: &Project) -> ProjectCard {
    let summary = project.technology_summary(CARD_TECHNOLOGY_LIMIT);
    ProjectCard {
        id: project.id,
        href: Route::ProjectDetail(project.id).path(),
        title: project.title.clone(),
        description: project.description.clone(),
        category: project.category,
        category_label: project.category.label(),
        featured: project.featured,
        technologies: summary.shown,
        more_technologies: summary.more,
    }
}

fn project_detail(project: &Project) -> ProjectDetailView {
    ProjectDetailView {
        id: project.id,
        title: project.title.clone(),
        description: project.description.clone(),
        category: project.category,
        category_label: project.category.label(),
        featured: project.featured,
        overview: project.overview_paragraphs(),
        features: project.feature_list(),
        technologies: project.technologies.clone(),
        demo_link: project.demo_link.clone(),
        github_link: project.github_link.clone(),
    }
}
