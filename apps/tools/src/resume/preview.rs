//! Read-only preview derived directly from the draft.

use std::fmt;

use serde::Serialize;

use super::list::{ListRecord, RecordId, RecordList};
use super::models::{Education, Experience, PersonalInfo, Skill};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ContactKind {
    Email,
    Phone,
    Location,
    Website,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLine {
    pub kind: ContactKind,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperiencePreview {
    pub id: RecordId,
    pub position: String,
    pub company: String,
    pub period: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EducationPreview {
    pub id: RecordId,
    pub title: String,
    pub institution: String,
    pub period: String,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillPreview {
    pub id: RecordId,
    pub label: String,
}

/// A section is `None` when no entry in its list has content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumePreview {
    pub name: String,
    pub contacts: Vec<ContactLine>,
    pub summary: Option<String>,
    pub experience: Option<Vec<ExperiencePreview>>,
    pub education: Option<Vec<EducationPreview>>,
    pub skills: Option<Vec<SkillPreview>>,
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn section<T: ListRecord, U>(list: &RecordList<T>, render: impl Fn(&T) -> U) -> Option<Vec<U>> {
    if !list.any_content() {
        return None;
    }
    Some(list.with_content().map(render).collect())
}

fn experience_entry(exp: &Experience) -> ExperiencePreview {
    let end = if exp.current { "Present" } else { exp.end_date.as_str() };
    ExperiencePreview {
        id: exp.id.clone(),
        position: exp.position.clone(),
        company: exp.company.clone(),
        period: format!("{} - {}", exp.start_date, end),
        description: non_empty(&exp.description),
    }
}

fn education_entry(edu: &Education) -> EducationPreview {
    EducationPreview {
        id: edu.id.clone(),
        title: format!("{} in {}", edu.degree, edu.field),
        institution: edu.institution.clone(),
        period: format!("{} - {}", edu.start_date, edu.end_date),
        gpa: edu.gpa.as_deref().and_then(non_empty),
    }
}

fn skill_entry(skill: &Skill) -> SkillPreview {
    SkillPreview {
        id: skill.id.clone(),
        label: format!("{} ({})", skill.name, skill.level),
    }
}

impl ResumePreview {
    pub fn build(
        personal: &PersonalInfo,
        experiences: &RecordList<Experience>,
        education: &RecordList<Education>,
        skills: &RecordList<Skill>,
    ) -> Self {
        let contacts = [
            (ContactKind::Email, &personal.email),
            (ContactKind::Phone, &personal.phone),
            (ContactKind::Location, &personal.location),
            (ContactKind::Website, &personal.website),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(kind, value)| ContactLine {
            kind,
            value: value.clone(),
        })
        .collect();

        Self {
            name: format!("{} {}", personal.first_name, personal.last_name),
            contacts,
            summary: non_empty(&personal.summary),
            experience: section(experiences, experience_entry),
            education: section(education, education_entry),
            skills: section(skills, skill_entry),
        }
    }
}

impl fmt::Display for ResumePreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name.trim())?;
        for contact in &self.contacts {
            writeln!(f, "{}", contact.value)?;
        }

        if let Some(summary) = &self.summary {
            writeln!(f, "\nProfessional Summary\n{summary}")?;
        }

        if let Some(entries) = &self.experience {
            writeln!(f, "\nExperience")?;
            for exp in entries {
                writeln!(f, "{}\n{}\n{}", exp.position, exp.company, exp.period)?;
                if let Some(description) = &exp.description {
                    writeln!(f, "{description}")?;
                }
            }
        }

        if let Some(entries) = &self.education {
            writeln!(f, "\nEducation")?;
            for edu in entries {
                writeln!(f, "{}\n{}", edu.title, edu.institution)?;
                match &edu.gpa {
                    Some(gpa) => writeln!(f, "{} • GPA: {gpa}", edu.period)?,
                    None => writeln!(f, "{}", edu.period)?,
                }
            }
        }

        if let Some(entries) = &self.skills {
            writeln!(f, "\nSkills")?;
            let labels: Vec<_> = entries.iter().map(|s| s.label.as_str()).collect();
            writeln!(f, "{}", labels.join(", "))?;
        }

        Ok(())
    }
}
