use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestStatus {
    Locked,
    Available,
    InProgress,
    Completed,
}

impl QuestStatus {
    /// Whether the quest can be marked complete
    pub fn is_open(&self) -> bool {
        matches!(self, QuestStatus::Available | QuestStatus::InProgress)
    }
}

impl std::fmt::Display for QuestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestStatus::Locked => write!(f, "Locked"),
            QuestStatus::Available => write!(f, "Available"),
            QuestStatus::InProgress => write!(f, "In Progress"),
            QuestStatus::Completed => write!(f, "Completed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "Beginner"),
            Difficulty::Intermediate => write!(f, "Intermediate"),
            Difficulty::Advanced => write!(f, "Advanced"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Video,
    Article,
    Exercise,
    Project,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Video => write!(f, "Video"),
            ResourceKind::Article => write!(f, "Article"),
            ResourceKind::Exercise => write!(f, "Exercise"),
            ResourceKind::Project => write!(f, "Project"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub kind: ResourceKind,
    pub title: String,
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssessmentKind {
    Quiz,
    Project,
    PeerReview,
}

impl std::fmt::Display for AssessmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssessmentKind::Quiz => write!(f, "Quiz"),
            AssessmentKind::Project => write!(f, "Project"),
            AssessmentKind::PeerReview => write!(f, "Peer Review"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub kind: AssessmentKind,
    pub description: String,
}

/// A lesson on a skill roadmap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub xp: u32,
    pub status: QuestStatus,
    pub difficulty: Difficulty,
    #[serde(rename = "estimatedTime")]
    pub estimated_time: String,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    pub overview: String,
    #[serde(rename = "learningObjectives", default)]
    pub learning_objectives: Vec<String>,
    pub resources: Vec<Resource>,
    pub assessment: Assessment,
}

/// Completion summary for a roadmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoadmapSummary {
    pub completed: usize,
    pub total: usize,
}

impl RoadmapSummary {
    pub fn of(quests: &[Quest]) -> Self {
        Self {
            completed: quests
                .iter()
                .filter(|q| q.status == QuestStatus::Completed)
                .count(),
            total: quests.len(),
        }
    }

    /// Whole-number completion percentage
    pub fn percent(&self) -> u16 {
        if self.total == 0 {
            0
        } else {
            (self.completed * 100 / self.total) as u16
        }
    }
}

/// Mark the quest at `index` complete and unlock the next locked quest.
///
/// Returns the experience earned, or `None` if the quest is locked,
/// already complete, or out of range.
pub fn complete_quest(quests: &mut [Quest], index: usize) -> Option<u32> {
    let quest = quests.get_mut(index)?;
    if !quest.status.is_open() {
        return None;
    }
    quest.status = QuestStatus::Completed;
    let earned = quest.xp;

    if let Some(next) = quests.iter_mut().find(|q| q.status == QuestStatus::Locked) {
        next.status = QuestStatus::Available;
    }
    Some(earned)
}
