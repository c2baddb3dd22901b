use serde::{Deserialize, Serialize};

/// Experience needed per level.
const XP_PER_LEVEL: u32 = 100;

/// How someone uses Learnex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Learner,
    Mentor,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Learner, Role::Mentor];

    pub fn other(&self) -> Self {
        match self {
            Role::Learner => Role::Mentor,
            Role::Mentor => Role::Learner,
        }
    }

    /// Card heading shown while picking a role
    pub fn headline(&self) -> &'static str {
        match self {
            Role::Learner => "I'm here to learn",
            Role::Mentor => "I'm here to teach",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Role::Learner => "Explore skills, complete quests, and connect with mentors",
            Role::Mentor => "Share your expertise and guide students on their journey",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Learner => write!(f, "Learner"),
            Role::Mentor => write!(f, "Mentor"),
        }
    }
}

/// Skill tracks offered during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Skill {
    Coding,
    Music,
    Art,
    Writing,
    Photography,
    Cooking,
}

impl Skill {
    pub const ALL: [Skill; 6] = [
        Skill::Coding,
        Skill::Music,
        Skill::Art,
        Skill::Writing,
        Skill::Photography,
        Skill::Cooking,
    ];

    /// Stable identifier, matching the serde form
    pub fn id(&self) -> &'static str {
        match self {
            Skill::Coding => "coding",
            Skill::Music => "music",
            Skill::Art => "art",
            Skill::Writing => "writing",
            Skill::Photography => "photography",
            Skill::Cooking => "cooking",
        }
    }

    /// Track name shown in headers and badges
    pub fn display_name(&self) -> &'static str {
        match self {
            Skill::Coding => "Programming",
            Skill::Music => "Music",
            Skill::Art => "Digital Art",
            Skill::Writing => "Creative Writing",
            Skill::Photography => "Photography",
            Skill::Cooking => "Culinary Arts",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Skill::Coding => "Learn coding & software development",
            Skill::Music => "Master instruments & music theory",
            Skill::Art => "Create stunning digital artwork",
            Skill::Writing => "Craft compelling stories & content",
            Skill::Photography => "Capture and edit amazing photos",
            Skill::Cooking => "Master cooking techniques & recipes",
        }
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Level for a given amount of experience: floor(xp / 100) + 1
pub fn level_for(experience: u32) -> u32 {
    experience / XP_PER_LEVEL + 1
}

/// The onboarded user record. `level` always follows `experience`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(rename = "primarySkill")]
    pub primary_skill: Skill,
    level: u32,
    #[serde(rename = "xp")]
    experience: u32,
    pub avatar: Option<String>,
}

impl Profile {
    /// A fresh profile at level 1 with no experience
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        primary_skill: Skill,
        avatar: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            primary_skill,
            level: 1,
            experience: 0,
            avatar,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    /// Experience earned inside the current level (0..100)
    pub fn level_progress(&self) -> u32 {
        self.experience % XP_PER_LEVEL
    }

    /// Add experience and recompute the level. Saturates at `u32::MAX`.
    pub fn grant_experience(&mut self, amount: u32) {
        self.experience = self.experience.saturating_add(amount);
        self.level = level_for(self.experience);
    }

    /// Replace the role in place. Experience, level and skill are kept.
    pub fn switch_role(&mut self, role: Role) {
        self.role = role;
    }

    pub fn reset_progress(&mut self) {
        self.experience = 0;
        self.level = 1;
    }

    /// Initials for avatar placeholders, e.g. "Sarah Chen" -> "SC"
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}
