use crate::models::{Person, PersonDetails, Role, Skill};

const AVATAR_BASE: &str = "https://images.unsplash.com/photo-";

fn avatar(id: &str) -> String {
    format!("{}{}?w=200&h=200&fit=crop&crop=face", AVATAR_BASE, id)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn mentors(skill: Skill) -> Vec<Person> {
    let coding = skill == Skill::Coding;
    let track = skill.id();
    let mentor = |rating, students, years, response: &str| PersonDetails::Mentor {
        rating,
        students,
        years_experience: years,
        response_time: response.to_string(),
        hourly_rate: "Free".to_string(),
    };

    vec![
        Person {
            id: "1".to_string(),
            name: "Sarah Chen".to_string(),
            avatar: avatar("1494790108755-2616b612b1af"),
            skill: track.to_string(),
            specialties: if coding {
                strings(&["Python", "JavaScript", "React", "Backend"])
            } else {
                strings(&["Fundamentals", "Advanced Techniques"])
            },
            bio: format!(
                "Passionate about helping students master {}. I believe in hands-on learning and personalized guidance.",
                track
            ),
            is_online: true,
            details: mentor(4.9, 127, 8, "< 2 hours"),
        },
        Person {
            id: "2".to_string(),
            name: "Michael Rodriguez".to_string(),
            avatar: avatar("1507003211169-0a1dd7228f2d"),
            skill: track.to_string(),
            specialties: if coding {
                strings(&["Mobile Apps", "UI/UX", "Database"])
            } else {
                strings(&["Project-based Learning", "Portfolio Building"])
            },
            bio: "Industry professional with a love for teaching. I focus on real-world applications and career preparation.".to_string(),
            is_online: false,
            details: mentor(4.8, 89, 5, "< 4 hours"),
        },
        Person {
            id: "3".to_string(),
            name: "Emma Thompson".to_string(),
            avatar: avatar("1438761681033-6461ffad8d80"),
            skill: track.to_string(),
            specialties: if coding {
                strings(&["Algorithms", "Data Structures", "Interview Prep"])
            } else {
                strings(&["Advanced Concepts", "Professional Development"])
            },
            bio: "Senior mentor with extensive experience. I specialize in helping students land their dream opportunities.".to_string(),
            is_online: true,
            details: mentor(4.7, 156, 12, "< 1 hour"),
        },
    ]
}

fn students(skill: Skill) -> Vec<Person> {
    let coding = skill == Skill::Coding;
    let track = skill.id();
    let student = |level, quests, goals: &[&str]| PersonDetails::Student {
        level,
        quests_completed: quests,
        learning_goals: strings(goals),
    };

    vec![
        Person {
            id: "1".to_string(),
            name: "Emma Johnson".to_string(),
            avatar: avatar("1494790108755-2616b612b1af"),
            skill: track.to_string(),
            specialties: if coding {
                strings(&["JavaScript", "HTML/CSS", "React Basics"])
            } else {
                strings(&["Foundation Skills", "Creative Projects"])
            },
            bio: format!(
                "Passionate learner focusing on {}. Looking for guidance to take my skills to the next level.",
                track
            ),
            is_online: true,
            details: student(
                3,
                5,
                &[
                    "Complete 10 quests this month",
                    "Build a portfolio project",
                    "Learn advanced concepts",
                ],
            ),
        },
        Person {
            id: "2".to_string(),
            name: "Marcus Wilson".to_string(),
            avatar: avatar("1507003211169-0a1dd7228f2d"),
            skill: track.to_string(),
            specialties: if coding {
                strings(&["Python", "Algorithms", "Problem Solving"])
            } else {
                strings(&["Beginner Level", "Fundamentals"])
            },
            bio: format!(
                "New to {} but very motivated. Need help understanding core concepts and best practices.",
                track
            ),
            is_online: false,
            details: student(2, 3, &["Master the fundamentals", "Find a study partner"]),
        },
        Person {
            id: "3".to_string(),
            name: "Sofia Martinez".to_string(),
            avatar: avatar("1438761681033-6461ffad8d80"),
            skill: track.to_string(),
            specialties: if coding {
                strings(&["Frontend", "UI/UX", "Mobile Apps"])
            } else {
                strings(&["Advanced Techniques", "Professional Work"])
            },
            bio: format!(
                "Experienced learner in {}. Looking for mentorship to transition into professional work.",
                track
            ),
            is_online: true,
            details: student(
                4,
                8,
                &["Land a first professional gig", "Polish my portfolio"],
            ),
        },
    ]
}

/// Learners browse mentors; mentors browse students
pub fn directory(role: Role, skill: Skill) -> Vec<Person> {
    match role {
        Role::Learner => mentors(skill),
        Role::Mentor => students(skill),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::search;

    #[test]
    fn test_learners_see_mentors() {
        let people = directory(Role::Learner, Skill::Music);
        assert_eq!(people.len(), 3);
        assert!(people
            .iter()
            .all(|p| matches!(p.details, PersonDetails::Mentor { .. })));
    }

    #[test]
    fn test_mentors_see_students() {
        let people = directory(Role::Mentor, Skill::Coding);
        assert!(people
            .iter()
            .all(|p| matches!(p.details, PersonDetails::Student { .. })));
    }

    #[test]
    fn test_search_by_specialty_case_insensitive() {
        let people = directory(Role::Learner, Skill::Coding);
        let hits = search(&people, "  interview ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Emma Thompson");
    }

    #[test]
    fn test_search_by_name() {
        let people = directory(Role::Mentor, Skill::Cooking);
        assert_eq!(search(&people, "marcus").len(), 1);
        assert_eq!(search(&people, "").len(), 3);
        assert!(search(&people, "zzz").is_empty());
    }

    #[test]
    fn test_search_ignores_bio() {
        let people = directory(Role::Learner, Skill::Coding);
        assert!(people.iter().any(|p| p.bio.contains("experience")));
        assert!(search(&people, "experience").is_empty());
    }

    #[test]
    fn test_headline() {
        let people = directory(Role::Learner, Skill::Art);
        assert_eq!(people[0].headline(), "★ 4.9 (127 students)");
        let people = directory(Role::Mentor, Skill::Art);
        assert_eq!(people[0].headline(), "Level 3 · 5 quests completed");
    }
}
