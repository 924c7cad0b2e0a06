//! Portfolio core: project catalog, filtering, routing and the pure page state machine.
mod catalog;
mod contact;
mod effect;
mod filter;
mod msg;
pub mod profile;
mod route;
mod state;
mod update;
mod view_model;

pub use catalog::{
    Catalog, CatalogError, Category, Project, ProjectId, TechnologySummary, BULLET_MARKER,
    CARD_TECHNOLOGY_LIMIT,
};
pub use contact::{
    ContactField, ContactFields, ContactForm, ContactPhase, SubmissionId, SubmissionOutcome,
    SUBJECT_CHOICES, SUBMIT_ERROR_MESSAGE,
};
pub use effect::Effect;
pub use filter::{filter_projects, matches_search, CategoryFilter, ProjectQuery};
pub use msg::Msg;
pub use route::{NavSection, Route};
pub use state::{AboutTab, AppState, Section};
pub use update::update;
pub use view_model::{
    AboutView, AppViewModel, ContactView, FilterButton, HomeView, NavItem, PageView, ProjectCard,
    ProjectDetailView, ProjectsView, SkillsView,
};
