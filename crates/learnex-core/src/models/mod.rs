//! Data models for Learnex entities.
//!
//! - `Role`, `Skill`, `Profile`: the onboarded user
//! - `Quest` and friends: skill roadmaps
//! - `Person`: mentor/student directory entries
//! - `ForumPost`: community posts
//! - `ProgressReport`: learner and mentor statistics

pub mod forum;
pub mod person;
pub mod progress;
pub mod quest;
pub mod user;

pub use forum::{filter_posts, ForumCategory, ForumPost, PostAuthor};
pub use person::{search, Person, PersonDetails};
pub use progress::{Achievement, DailyXp, LearnerStats, MentorStats, ProgressReport, Rarity};
pub use quest::{
    complete_quest, Assessment, AssessmentKind, Difficulty, Quest, QuestStatus, Resource,
    ResourceKind, RoadmapSummary,
};
pub use user::{level_for, Profile, Role, Skill};
