use crate::profile::{Education, Milestone, SkillGroup};
use crate::{AboutTab, Category, ContactField, ContactFields, ContactPhase, ProjectId, Route, Section};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub route: Route,
    pub nav: Vec<NavItem>,
    pub page: PageView,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    Home(HomeView),
    About(AboutView),
    Skills(SkillsView),
    Projects(ProjectsView),
    ProjectDetail(ProjectDetailView),
    ProjectNotFound { requested: String },
    Contact(ContactView),
    NotFound { path: String },
}

impl PageView {
    pub fn title(&self) -> &str {
        match self {
            PageView::Home(_) => "Home",
            PageView::About(_) => "About Me",
            PageView::Skills(_) => "Skills",
            PageView::Projects(_) => "Project Portfolio",
            PageView::ProjectDetail(detail) => &detail.title,
            PageView::ProjectNotFound { .. } => "Project Not Found",
            PageView::Contact(_) => "Contact Me",
            PageView::NotFound { .. } => "Page Not Found",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    pub typed_headline: String,
    pub typing_done: bool,
    pub featured: Vec<ProjectCard>,
    pub revealed: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutView {
    pub active_tab: AboutTab,
    pub experience: &'static [Milestone],
    pub education: &'static [Education],
    pub revealed: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillsView {
    pub active_group: &'static str,
    pub groups: &'static [SkillGroup],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectsView {
    pub filters: Vec<FilterButton>,
    pub search: String,
    pub cards: Vec<ProjectCard>,
    pub count_label: String,
    /// Nothing matched; the page offers "Reset filters".
    pub is_empty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    pub key: String,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub id: ProjectId,
    pub href: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub category_label: &'static str,
    pub featured: bool,
    pub technologies: Vec<String>,
    pub more_technologies: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetailView {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub category_label: &'static str,
    pub featured: bool,
    pub overview: Vec<String>,
    pub features: Vec<String>,
    pub technologies: Vec<String>,
    pub demo_link: Option<String>,
    pub github_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactView {
    pub fields: ContactFields,
    pub phase: ContactPhase,
    pub error: Option<String>,
    pub missing: Vec<ContactField>,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub subject_choices: &'static [&'static str],
}
