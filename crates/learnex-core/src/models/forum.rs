use serde::{Deserialize, Serialize};

use super::user::Role;
use crate::utils::{contains_ignore_case, slug_to_title};

/// Forum categories. `None` in a filter means "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ForumCategory {
    Questions,
    ShowAndTell,
    Resources,
    Challenges,
    CareerAdvice,
}

impl ForumCategory {
    pub const ALL: [ForumCategory; 5] = [
        ForumCategory::Questions,
        ForumCategory::ShowAndTell,
        ForumCategory::Resources,
        ForumCategory::Challenges,
        ForumCategory::CareerAdvice,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            ForumCategory::Questions => "questions",
            ForumCategory::ShowAndTell => "show-and-tell",
            ForumCategory::Resources => "resources",
            ForumCategory::Challenges => "challenges",
            ForumCategory::CareerAdvice => "career-advice",
        }
    }

    pub fn title(&self) -> String {
        slug_to_title(self.slug())
    }

    /// Cycle through all, then each category in turn
    pub fn cycle(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(ForumCategory::Questions),
            Some(ForumCategory::Questions) => Some(ForumCategory::ShowAndTell),
            Some(ForumCategory::ShowAndTell) => Some(ForumCategory::Resources),
            Some(ForumCategory::Resources) => Some(ForumCategory::Challenges),
            Some(ForumCategory::Challenges) => Some(ForumCategory::CareerAdvice),
            Some(ForumCategory::CareerAdvice) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostAuthor {
    pub name: String,
    pub avatar: String,
    pub role: Role,
    pub level: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: PostAuthor,
    pub category: ForumCategory,
    pub replies: u32,
    pub likes: u32,
    pub views: u32,
    #[serde(rename = "timeAgo")]
    pub time_ago: String,
    #[serde(rename = "isHot")]
    pub is_hot: bool,
    pub tags: Vec<String>,
}

impl ForumPost {
    /// Search over title, content and tags
    pub fn matches(&self, query: &str) -> bool {
        contains_ignore_case(&self.title, query)
            || contains_ignore_case(&self.content, query)
            || self.tags.iter().any(|t| contains_ignore_case(t, query))
    }
}

/// Apply the search box and category filter together
pub fn filter_posts<'a>(
    posts: &'a [ForumPost],
    query: &str,
    category: Option<ForumCategory>,
) -> Vec<&'a ForumPost> {
    let query = query.trim();
    posts
        .iter()
        .filter(|p| category.map_or(true, |c| p.category == c))
        .filter(|p| p.matches(query))
        .collect()
}
