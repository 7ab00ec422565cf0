use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::list::{ListRecord, RecordId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonalField {
    FirstName(String),
    LastName(String),
    Email(String),
    Phone(String),
    Location(String),
    Website(String),
    Summary(String),
}

impl PersonalInfo {
    pub fn apply(&mut self, field: PersonalField) {
        match field {
            PersonalField::FirstName(v) => self.first_name = v,
            PersonalField::LastName(v) => self.last_name = v,
            PersonalField::Email(v) => self.email = v,
            PersonalField::Phone(v) => self.phone = v,
            PersonalField::Location(v) => self.location = v,
            PersonalField::Website(v) => self.website = v,
            PersonalField::Summary(v) => self.summary = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: RecordId,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExperienceField {
    Company(String),
    Position(String),
    StartDate(String),
    EndDate(String),
    Current(bool),
    Description(String),
}

impl ListRecord for Experience {
    type Field = ExperienceField;

    fn blank(id: RecordId) -> Self {
        Self {
            id,
            company: String::new(),
            position: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
            description: String::new(),
        }
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn apply(&mut self, field: ExperienceField) {
        match field {
            ExperienceField::Company(v) => self.company = v,
            ExperienceField::Position(v) => self.position = v,
            ExperienceField::StartDate(v) => self.start_date = v,
            ExperienceField::EndDate(v) => self.end_date = v,
            ExperienceField::Current(v) => self.current = v,
            ExperienceField::Description(v) => self.description = v,
        }
    }

    fn has_content(&self) -> bool {
        !self.company.is_empty() || !self.position.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: RecordId,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    /// Free text; not validated as a number.
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EducationField {
    Institution(String),
    Degree(String),
    Field(String),
    StartDate(String),
    EndDate(String),
    Gpa(Option<String>),
}

impl ListRecord for Education {
    type Field = EducationField;

    fn blank(id: RecordId) -> Self {
        Self {
            id,
            institution: String::new(),
            degree: String::new(),
            field: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            gpa: None,
        }
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn apply(&mut self, field: EducationField) {
        match field {
            EducationField::Institution(v) => self.institution = v,
            EducationField::Degree(v) => self.degree = v,
            EducationField::Field(v) => self.field = v,
            EducationField::StartDate(v) => self.start_date = v,
            EducationField::EndDate(v) => self.end_date = v,
            EducationField::Gpa(v) => self.gpa = v,
        }
    }

    fn has_content(&self) -> bool {
        !self.institution.is_empty() || !self.degree.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Expert,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown skill level '{s}'"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: RecordId,
    pub name: String,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillField {
    Name(String),
    Level(SkillLevel),
}

impl ListRecord for Skill {
    type Field = SkillField;

    fn blank(id: RecordId) -> Self {
        Self {
            id,
            name: String::new(),
            level: SkillLevel::default(),
        }
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn apply(&mut self, field: SkillField) {
        match field {
            SkillField::Name(v) => self.name = v,
            SkillField::Level(v) => self.level = v,
        }
    }

    fn has_content(&self) -> bool {
        !self.name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_level_parse_and_display() {
        assert_eq!("expert".parse::<SkillLevel>().unwrap(), SkillLevel::Expert);
        assert_eq!(" Beginner ".parse::<SkillLevel>().unwrap(), SkillLevel::Beginner);
        assert!("guru".parse::<SkillLevel>().is_err());
        assert_eq!(SkillLevel::default().to_string(), "Intermediate");
    }

    #[test]
    fn test_experience_content_needs_company_or_position() {
        let mut exp = Experience::blank(RecordId::from("1"));
        exp.apply(ExperienceField::Description("Shipped things".into()));
        assert!(!exp.has_content());
        exp.apply(ExperienceField::Position("Engineer".into()));
        assert!(exp.has_content());
    }

    #[test]
    fn test_education_gpa_is_free_text() {
        let mut edu = Education::blank(RecordId::from("1"));
        edu.apply(EducationField::Gpa(Some("about 3.8-ish".into())));
        assert_eq!(edu.gpa.as_deref(), Some("about 3.8-ish"));
        assert!(!edu.has_content());
        edu.apply(EducationField::Institution("MIT".into()));
        assert!(edu.has_content());
    }

    #[test]
    fn test_personal_apply() {
        let mut info = PersonalInfo::default();
        info.apply(PersonalField::Email("ada@example.com".into()));
        assert_eq!(info.email, "ada@example.com");
        assert!(info.first_name.is_empty());
    }
}
