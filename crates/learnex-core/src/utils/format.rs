use chrono::{DateTime, Utc};

/// Truncate a string to a maximum length, adding ellipsis if needed
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Case-insensitive substring check. An empty needle always matches.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Upper-case the first character, leaving the rest untouched
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turn a dashed slug like "show-and-tell" into "Show And Tell"
pub fn slug_to_title(slug: &str) -> String {
    slug.split('-')
        .filter(|w| !w.is_empty())
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Human readable age of a timestamp relative to `now`
pub fn format_age(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - then).num_minutes();
    if minutes < 1 {
        // Also covers clock skew
        "just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if minutes < 1440 {
        format!("{}h ago", minutes / 60)
    } else {
        format!("{}d ago", minutes / 1440)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello", 10), "Hello");
        assert_eq!(truncate("Hello World", 8), "Hello...");
        assert_eq!(truncate("Hi", 2), "Hi");
        assert_eq!(truncate("Hello", 2), "He");
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Sarah Chen", "sarah"));
        assert!(contains_ignore_case("Python", "PYTH"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("Music", "art"));
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("alex"), "Alex");
        assert_eq!(capitalize_first("Alex"), "Alex");
        assert_eq!(capitalize_first("x.y"), "X.y");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_slug_to_title() {
        assert_eq!(slug_to_title("show-and-tell"), "Show And Tell");
        assert_eq!(slug_to_title("questions"), "Questions");
        assert_eq!(slug_to_title("career-advice"), "Career Advice");
    }

    #[test]
    fn test_format_age() {
        let now = Utc::now();
        assert_eq!(format_age(now, now), "just now");
        assert_eq!(format_age(now + Duration::minutes(5), now), "just now");
        assert_eq!(format_age(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(format_age(now - Duration::minutes(125), now), "2h ago");
        assert_eq!(format_age(now - Duration::days(3), now), "3d ago");
    }
}
