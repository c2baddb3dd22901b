use crate::models::{ForumCategory, ForumPost, PostAuthor, Role, Skill};

fn author(name: &str, avatar: &str, role: Role, level: Option<u32>) -> PostAuthor {
    PostAuthor {
        name: name.to_string(),
        avatar: format!(
            "https://images.unsplash.com/photo-{}?w=100&h=100&fit=crop&crop=face",
            avatar
        ),
        role,
        level,
    }
}

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Community posts for a skill track. Coding gets its own wording.
pub fn posts(skill: Skill) -> Vec<ForumPost> {
    let coding = skill == Skill::Coding;
    let pick = |a: &str, b: &str| if coding { a.to_string() } else { b.to_string() };

    vec![
        ForumPost {
            id: "1".to_string(),
            title: pick("Help with Python loops!", "Need help with the basics!"),
            content: pick(
                "I'm struggling to understand how for loops work in Python. Can someone explain with examples?",
                "I'm having trouble with some fundamental concepts. Any tips for beginners?",
            ),
            author: author("Alex Chen", "1472099645785-5658abf4ff4e", Role::Learner, Some(2)),
            category: ForumCategory::Questions,
            replies: 12,
            likes: 8,
            views: 156,
            time_ago: "2h ago".to_string(),
            is_hot: true,
            tags: if coding {
                tags(&["python", "loops", "beginner"])
            } else {
                tags(&["beginner", "fundamentals"])
            },
        },
        ForumPost {
            id: "2".to_string(),
            title: pick("Built my first web app!", "Just completed my first project!"),
            content: pick(
                "After weeks of quests I finally shipped a small React app. Feedback welcome!",
                "I finished the first roadmap project and wanted to share the result. Feedback welcome!",
            ),
            author: author("Maya Rodriguez", "1438761681033-6461ffad8d80", Role::Learner, Some(4)),
            category: ForumCategory::ShowAndTell,
            replies: 24,
            likes: 47,
            views: 312,
            time_ago: "5h ago".to_string(),
            is_hot: true,
            tags: if coding {
                tags(&["react", "project", "web-development"])
            } else {
                tags(&["project", "showcase", "achievement"])
            },
        },
        ForumPost {
            id: "3".to_string(),
            title: pick("Best resources for learning JavaScript", "Recommended learning resources"),
            content: "Here is the list of books, courses and channels I point all my students to.".to_string(),
            author: author("Sarah Kim", "1494790108755-2616b612b1af", Role::Mentor, None),
            category: ForumCategory::Resources,
            replies: 18,
            likes: 35,
            views: 289,
            time_ago: "1d ago".to_string(),
            is_hot: false,
            tags: if coding {
                tags(&["javascript", "resources", "learning"])
            } else {
                tags(&["resources", "learning", "tips"])
            },
        },
        ForumPost {
            id: "4".to_string(),
            title: pick("Weekly coding challenge!", "Creative challenge for this week!"),
            content: "Post your take on this week's prompt before Sunday. Mentors will review every entry.".to_string(),
            author: author("Mike Johnson", "1507003211169-0a1dd7228f2d", Role::Mentor, None),
            category: ForumCategory::Challenges,
            replies: 31,
            likes: 62,
            views: 445,
            time_ago: "3d ago".to_string(),
            is_hot: false,
            tags: if coding {
                tags(&["challenge", "javascript", "project"])
            } else {
                tags(&["challenge", "creative", "project"])
            },
        },
        ForumPost {
            id: "5".to_string(),
            title: format!("Turning {} into a career", skill.display_name()),
            content: "What helped you make the jump from hobby to paid work? Looking for honest stories.".to_string(),
            author: author("Jordan Lee", "1500648767791-00dcc994a43e", Role::Learner, Some(5)),
            category: ForumCategory::CareerAdvice,
            replies: 9,
            likes: 21,
            views: 198,
            time_ago: "4d ago".to_string(),
            is_hot: false,
            tags: tags(&["career", "advice"]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::filter_posts;

    #[test]
    fn test_every_category_has_a_post() {
        let all = posts(Skill::Photography);
        for category in ForumCategory::ALL {
            assert!(all.iter().any(|p| p.category == category), "{:?}", category);
        }
    }

    #[test]
    fn test_filter_all_categories() {
        let all = posts(Skill::Coding);
        assert_eq!(filter_posts(&all, "", None).len(), all.len());
    }

    #[test]
    fn test_filter_by_category() {
        let all = posts(Skill::Coding);
        let hits = filter_posts(&all, "", Some(ForumCategory::Resources));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].author.name, "Sarah Kim");
    }

    #[test]
    fn test_filter_by_tag_and_category() {
        let all = posts(Skill::Coding);
        assert_eq!(filter_posts(&all, "PYTHON", None).len(), 1);
        assert!(filter_posts(&all, "python", Some(ForumCategory::Challenges)).is_empty());
    }

    #[test]
    fn test_category_cycle_returns_to_all() {
        let mut current = None;
        for _ in 0..ForumCategory::ALL.len() {
            current = ForumCategory::cycle(current);
            assert!(current.is_some());
        }
        assert_eq!(ForumCategory::cycle(current), None);
    }

    #[test]
    fn test_category_title() {
        assert_eq!(ForumCategory::ShowAndTell.title(), "Show And Tell");
    }
}
