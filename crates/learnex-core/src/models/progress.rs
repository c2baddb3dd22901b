use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rarity::Common => write!(f, "Common"),
            Rarity::Rare => write!(f, "Rare"),
            Rarity::Epic => write!(f, "Epic"),
            Rarity::Legendary => write!(f, "Legendary"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub name: String,
    pub icon: String,
    pub date: String,
    pub rarity: Rarity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyXp {
    pub day: String,
    pub xp: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnerStats {
    #[serde(rename = "totalXP")]
    pub total_xp: u32,
    pub level: u32,
    #[serde(rename = "questsCompleted")]
    pub quests_completed: usize,
    #[serde(rename = "totalQuests")]
    pub total_quests: usize,
    #[serde(rename = "currentStreak")]
    pub current_streak: u32,
    #[serde(rename = "hoursLearned")]
    pub hours_learned: u32,
    pub badges: Vec<Achievement>,
    #[serde(rename = "weeklyProgress")]
    pub weekly_progress: Vec<DailyXp>,
}

impl LearnerStats {
    pub fn weekly_total(&self) -> u32 {
        self.weekly_progress.iter().map(|d| d.xp).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorStats {
    #[serde(rename = "volunteerHours")]
    pub volunteer_hours: u32,
    #[serde(rename = "studentsHelped")]
    pub students_helped: u32,
    #[serde(rename = "responsesGiven")]
    pub responses_given: u32,
    pub rating: f32,
    /// Percent towards teaching certification
    #[serde(rename = "certificateProgress")]
    pub certificate_progress: u16,
    pub badges: Vec<Achievement>,
}

/// Progress screen contents, by role
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressReport {
    Learner(LearnerStats),
    Mentor(MentorStats),
}

impl ProgressReport {
    pub fn badges(&self) -> &[Achievement] {
        match self {
            ProgressReport::Learner(s) => &s.badges,
            ProgressReport::Mentor(s) => &s.badges,
        }
    }
}
