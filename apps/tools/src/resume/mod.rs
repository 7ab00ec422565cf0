//! In-memory state behind the resume builder page.

pub mod list;
pub mod models;
pub mod preview;
pub mod save;

use serde::{Deserialize, Serialize};
use tracing::error;

pub use list::{ListRecord, RecordId, RecordList};
pub use models::{
    Education, EducationField, Experience, ExperienceField, PersonalField, PersonalInfo, Skill,
    SkillField, SkillLevel,
};
pub use preview::ResumePreview;
pub use save::{DelayedSave, SaveBackend, SaveOutcome, RESUME_LIST_ROUTE};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Personal,
    Experience,
    Education,
    Skills,
}

/// The whole draft. Never persisted; dropped when the page is left.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeDraft {
    pub active_tab: Tab,
    pub personal: PersonalInfo,
    pub experiences: RecordList<Experience>,
    pub education: RecordList<Education>,
    pub skills: RecordList<Skill>,
    #[serde(skip)]
    pub is_saving: bool,
}

impl Default for ResumeDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeDraft {
    /// Blank personal info and one placeholder entry per list.
    pub fn new() -> Self {
        Self {
            active_tab: Tab::default(),
            personal: PersonalInfo::default(),
            experiences: RecordList::with_placeholder(),
            education: RecordList::with_placeholder(),
            skills: RecordList::with_placeholder(),
            is_saving: false,
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn update_personal(&mut self, field: PersonalField) {
        self.personal.apply(field);
    }

    pub fn preview(&self) -> ResumePreview {
        ResumePreview::build(
            &self.personal,
            &self.experiences,
            &self.education,
            &self.skills,
        )
    }

    /// Hands the draft to `backend`. Failures are logged, not surfaced.
    pub async fn save(&mut self, backend: &dyn SaveBackend) -> SaveOutcome {
        self.is_saving = true;
        let result = backend.save(self).await;
        self.is_saving = false;

        match result {
            Ok(()) => SaveOutcome::Navigate(RESUME_LIST_ROUTE.to_string()),
            Err(e) => {
                error!("Failed to save resume: {e}");
                SaveOutcome::Stayed
            }
        }
    }
}
