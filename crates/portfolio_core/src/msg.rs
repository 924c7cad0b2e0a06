use crate::{AboutTab, CategoryFilter, ContactField, Section, SubmissionId, SubmissionOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User followed a link or typed a path.
    Navigate(String),
    /// User clicked one of the project category buttons.
    CategorySelected(CategoryFilter),
    /// User edited the project search box.
    SearchChanged(String),
    /// User clicked "Reset filters" on the empty projects grid.
    ResetFilters,
    /// User edited a contact form field.
    ContactFieldChanged { field: ContactField, value: String },
    /// User submitted the contact form.
    ContactSubmitClicked,
    /// The submission capability reported back.
    ContactSubmitResolved {
        submission_id: SubmissionId,
        outcome: SubmissionOutcome,
    },
    /// User clicked "Send Another Message" on the success panel.
    SendAnotherClicked,
    /// User switched tabs on the About page.
    AboutTabSelected(AboutTab),
    /// User picked a skill group on the Skills page.
    SkillGroupSelected(String),
    /// A page section scrolled into view.
    SectionRevealed(Section),
    /// Animation tick; advances the typed headline.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
