use serde::{Deserialize, Serialize};

use crate::utils::contains_ignore_case;

/// What the directory knows about someone, depending on who they are
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PersonDetails {
    Mentor {
        rating: f32,
        students: u32,
        #[serde(rename = "yearsExperience")]
        years_experience: u32,
        #[serde(rename = "responseTime")]
        response_time: String,
        #[serde(rename = "hourlyRate")]
        hourly_rate: String,
    },
    Student {
        level: u32,
        #[serde(rename = "questsCompleted")]
        quests_completed: u32,
        #[serde(rename = "learningGoals")]
        learning_goals: Vec<String>,
    },
}

/// An entry in the mentor/student directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub skill: String,
    pub specialties: Vec<String>,
    pub bio: String,
    #[serde(rename = "isOnline")]
    pub is_online: bool,
    pub details: PersonDetails,
}

impl Person {
    /// Search over name and specialties
    pub fn matches(&self, query: &str) -> bool {
        contains_ignore_case(&self.name, query)
            || self
                .specialties
                .iter()
                .any(|s| contains_ignore_case(s, query))
    }

    /// One-line summary for list rows
    pub fn headline(&self) -> String {
        match &self.details {
            PersonDetails::Mentor {
                rating, students, ..
            } => format!("★ {:.1} ({} students)", rating, students),
            PersonDetails::Student {
                level,
                quests_completed,
                ..
            } => format!("Level {} · {} quests completed", level, quests_completed),
        }
    }
}

/// Filter a directory by a search query. Empty queries return everyone.
pub fn search<'a>(people: &'a [Person], query: &str) -> Vec<&'a Person> {
    let query = query.trim();
    people.iter().filter(|p| p.matches(query)).collect()
}
