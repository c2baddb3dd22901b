use crate::models::{
    Assessment, AssessmentKind, Difficulty, Quest, QuestStatus, Resource, ResourceKind, Skill,
};

/// Shown to mentors in place of the submission step
pub const TEACHING_NOTES: [&str; 3] = [
    "Review student submissions and provide constructive feedback",
    "Look for common misconceptions and address them in the forum",
    "Encourage students to help each other in peer reviews",
];

struct QuestTemplate {
    title: &'static str,
    description: &'static str,
    overview: &'static str,
    assessment: &'static str,
    objectives: [&'static str; 4],
}

/// Roadmap shape shared by every skill: (xp, status, difficulty, time, assessment)
const LADDER: [(u32, QuestStatus, Difficulty, &str, AssessmentKind); 4] = [
    (50, QuestStatus::Completed, Difficulty::Beginner, "2 hours", AssessmentKind::Quiz),
    (75, QuestStatus::InProgress, Difficulty::Beginner, "3 hours", AssessmentKind::Project),
    (100, QuestStatus::Available, Difficulty::Intermediate, "4 hours", AssessmentKind::PeerReview),
    (150, QuestStatus::Locked, Difficulty::Advanced, "6 hours", AssessmentKind::Project),
];

const CODING: [QuestTemplate; 4] = [
    QuestTemplate {
        title: "Variables & Data Types",
        description: "Learn about variables, strings, numbers, and basic data types",
        overview: "This quest introduces you to the fundamental building blocks of programming.",
        assessment: "Complete a 10-question quiz about variables and data types",
        objectives: [
            "Understand what variables are and how to use them",
            "Learn about different data types (strings, numbers, booleans)",
            "Practice declaring and manipulating variables",
            "Master basic data type operations",
        ],
    },
    QuestTemplate {
        title: "Control Flow & Loops",
        description: "Master if statements, loops, and conditional logic",
        overview: "Learn how to control the flow of your program with conditions and loops.",
        assessment: "Create a program that uses loops and conditions to solve a real problem",
        objectives: [
            "Understand conditional statements (if, else, switch)",
            "Learn about different types of loops (for, while, do-while)",
            "Practice writing efficient control structures",
            "Master logical operators and comparison",
        ],
    },
    QuestTemplate {
        title: "Functions & Methods",
        description: "Create reusable code with functions and methods",
        overview: "Learn to write clean, reusable code using functions and methods.",
        assessment: "Submit your code for peer review and review others' work",
        objectives: [
            "Understand function syntax and parameters",
            "Learn about return values and scope",
            "Practice writing modular code",
            "Master function best practices",
        ],
    },
    QuestTemplate {
        title: "Object-Oriented Programming",
        description: "Learn classes, objects, and OOP principles",
        overview: "Dive into object-oriented programming concepts and design patterns.",
        assessment: "Design and implement a complete application using OOP principles",
        objectives: [
            "Understand classes and objects",
            "Learn inheritance and polymorphism",
            "Master encapsulation and abstraction",
            "Practice designing object-oriented solutions",
        ],
    },
];

const MUSIC: [QuestTemplate; 4] = [
    QuestTemplate {
        title: "Music Theory Basics",
        description: "Learn notes, scales, and basic music theory fundamentals",
        overview: "Master the fundamental building blocks of music theory.",
        assessment: "Complete a 10-question quiz about basic music theory",
        objectives: [
            "Understand musical notes and the chromatic scale",
            "Learn about major and minor scales",
            "Practice identifying intervals",
            "Master basic chord construction",
        ],
    },
    QuestTemplate {
        title: "Rhythm & Time Signatures",
        description: "Master rhythm patterns, time signatures, and tempo",
        overview: "Learn how to understand and create rhythmic patterns in music.",
        assessment: "Record yourself playing or clapping a complex rhythm pattern",
        objectives: [
            "Understand different time signatures (4/4, 3/4, 6/8)",
            "Learn about note values and rests",
            "Practice clapping and playing rhythms",
            "Master tempo and beat subdivision",
        ],
    },
    QuestTemplate {
        title: "Chord Progressions",
        description: "Build beautiful chord progressions and harmonic structures",
        overview: "Learn to create compelling harmonic progressions in your music.",
        assessment: "Submit your chord progression for peer feedback and review others' work",
        objectives: [
            "Understand diatonic chord progressions",
            "Learn popular chord sequences (I-V-vi-IV, etc.)",
            "Practice voice leading and smooth transitions",
            "Master chord inversions and substitutions",
        ],
    },
    QuestTemplate {
        title: "Melody & Composition",
        description: "Create memorable melodies and complete musical compositions",
        overview: "Master the art of melody writing and musical composition.",
        assessment: "Compose and record a complete original song",
        objectives: [
            "Understand melodic contour and phrasing",
            "Learn song structure and form",
            "Master melody and harmony interaction",
            "Practice complete song composition",
        ],
    },
];

const ART: [QuestTemplate; 4] = [
    QuestTemplate {
        title: "Digital Art Fundamentals",
        description: "Learn basic digital art tools, layers, and techniques",
        overview: "Master the fundamental tools and concepts of digital art creation.",
        assessment: "Complete a quiz about digital art tools and techniques",
        objectives: [
            "Understand digital art software interfaces",
            "Learn about layers and layer modes",
            "Practice basic brush techniques",
            "Master selection and transformation tools",
        ],
    },
    QuestTemplate {
        title: "Color Theory & Palettes",
        description: "Master color relationships, palettes, and color psychology",
        overview: "Learn how to use color effectively in your digital artwork.",
        assessment: "Create artwork using specific color harmonies and palettes",
        objectives: [
            "Understand the color wheel and color relationships",
            "Learn about warm and cool colors",
            "Practice creating color palettes",
            "Master color psychology and mood",
        ],
    },
    QuestTemplate {
        title: "Composition & Layout",
        description: "Learn principles of composition, balance, and visual hierarchy",
        overview: "Master the principles of visual composition and design.",
        assessment: "Submit your composition for peer critique and review others' work",
        objectives: [
            "Understand rule of thirds and golden ratio",
            "Learn about visual weight and balance",
            "Practice creating focal points",
            "Master leading lines and visual flow",
        ],
    },
    QuestTemplate {
        title: "Advanced Rendering",
        description: "Master lighting, shadows, textures, and realistic rendering",
        overview: "Learn advanced techniques for realistic digital art rendering.",
        assessment: "Create a fully rendered digital artwork showcasing advanced techniques",
        objectives: [
            "Understand light sources and shadows",
            "Learn texture painting techniques",
            "Master atmospheric perspective",
            "Practice photorealistic rendering",
        ],
    },
];

const WRITING: [QuestTemplate; 4] = [
    QuestTemplate {
        title: "Story Structure Basics",
        description: "Learn fundamental story elements, plot, and narrative structure",
        overview: "Master the fundamental elements that make up compelling stories.",
        assessment: "Complete a quiz about story structure and narrative elements",
        objectives: [
            "Understand three-act structure",
            "Learn about character, plot, and setting",
            "Practice identifying story elements",
            "Master conflict and resolution",
        ],
    },
    QuestTemplate {
        title: "Character Development",
        description: "Create compelling, three-dimensional characters",
        overview: "Learn to create memorable and believable characters.",
        assessment: "Create detailed character profiles and write a character-driven scene",
        objectives: [
            "Understand character archetypes and roles",
            "Learn character motivation and goals",
            "Practice character voice and dialogue",
            "Master character development arcs",
        ],
    },
    QuestTemplate {
        title: "Dialogue & Voice",
        description: "Master realistic dialogue and unique narrative voice",
        overview: "Learn to write compelling dialogue and develop your unique writing voice.",
        assessment: "Submit your dialogue scenes for peer feedback and critique others' work",
        objectives: [
            "Understand dialogue tags and formatting",
            "Learn subtext and character voice",
            "Practice writing natural conversations",
            "Master narrative voice and style",
        ],
    },
    QuestTemplate {
        title: "Advanced Storytelling",
        description: "Master complex narratives, themes, and literary techniques",
        overview: "Learn advanced storytelling techniques and literary devices.",
        assessment: "Write and polish a complete short story using advanced techniques",
        objectives: [
            "Understand theme and symbolism",
            "Learn non-linear narrative structures",
            "Master literary devices and techniques",
            "Practice advanced plotting methods",
        ],
    },
];

const PHOTOGRAPHY: [QuestTemplate; 4] = [
    QuestTemplate {
        title: "Camera Basics & Exposure",
        description: "Learn camera controls, aperture, shutter speed, and ISO",
        overview: "Master the fundamental technical aspects of photography.",
        assessment: "Complete a quiz about camera settings and exposure",
        objectives: [
            "Understand camera modes and controls",
            "Learn the exposure triangle (aperture, shutter, ISO)",
            "Practice manual camera settings",
            "Master depth of field control",
        ],
    },
    QuestTemplate {
        title: "Composition Techniques",
        description: "Master rule of thirds, leading lines, and visual composition",
        overview: "Learn to create visually compelling photographic compositions.",
        assessment: "Submit a series of photos demonstrating different composition techniques",
        objectives: [
            "Understand rule of thirds and golden ratio",
            "Learn about leading lines and patterns",
            "Practice framing and perspective",
            "Master symmetry and balance",
        ],
    },
    QuestTemplate {
        title: "Lighting & Shadows",
        description: "Understand natural and artificial lighting in photography",
        overview: "Master the use of light to create mood and drama in your photos.",
        assessment: "Submit your lighting portfolio for peer critique and review others' work",
        objectives: [
            "Understand different types of lighting",
            "Learn golden hour and blue hour photography",
            "Practice shadow and highlight control",
            "Master artificial lighting techniques",
        ],
    },
    QuestTemplate {
        title: "Post-Processing & Editing",
        description: "Master photo editing software and post-processing workflows",
        overview: "Learn professional photo editing and post-processing techniques.",
        assessment: "Process and edit a complete photo shoot from RAW to final images",
        objectives: [
            "Understand RAW vs JPEG processing",
            "Learn color correction and grading",
            "Master local adjustments and masking",
            "Practice advanced editing workflows",
        ],
    },
];

const COOKING: [QuestTemplate; 4] = [
    QuestTemplate {
        title: "Kitchen Fundamentals",
        description: "Learn basic knife skills, cooking methods, and kitchen safety",
        overview: "Master the essential skills and knowledge needed for cooking.",
        assessment: "Complete a quiz about kitchen safety and basic techniques",
        objectives: [
            "Understand kitchen safety and sanitation",
            "Learn proper knife handling and cutting techniques",
            "Practice basic cooking methods (sauté, boil, roast)",
            "Master ingredient preparation and mise en place",
        ],
    },
    QuestTemplate {
        title: "Flavor Fundamentals",
        description: "Master seasoning, spices, and flavor combinations",
        overview: "Learn how to build and balance flavors in your cooking.",
        assessment: "Prepare dishes showcasing different flavor profiles",
        objectives: [
            "Understand the five basic tastes",
            "Learn about herbs and spices",
            "Practice seasoning and tasting",
            "Master flavor pairing principles",
        ],
    },
    QuestTemplate {
        title: "Cooking Techniques",
        description: "Master advanced cooking methods and food preparation",
        overview: "Learn advanced cooking techniques for professional-quality results.",
        assessment: "Submit your prepared dishes for peer critique and review others' work",
        objectives: [
            "Understand braising, poaching, and other methods",
            "Learn sauce-making fundamentals",
            "Practice temperature control and timing",
            "Master plating and presentation",
        ],
    },
    QuestTemplate {
        title: "Menu Planning & Innovation",
        description: "Design menus and create original recipes",
        overview: "Learn to design balanced menus and develop original recipes.",
        assessment: "Design and execute a complete menu with original recipes",
        objectives: [
            "Understand menu composition and balance",
            "Learn recipe development and testing",
            "Master cost analysis and portion control",
            "Practice creative cooking and innovation",
        ],
    },
];

fn templates(skill: Skill) -> &'static [QuestTemplate; 4] {
    match skill {
        Skill::Coding => &CODING,
        Skill::Music => &MUSIC,
        Skill::Art => &ART,
        Skill::Writing => &WRITING,
        Skill::Photography => &PHOTOGRAPHY,
        Skill::Cooking => &COOKING,
    }
}

fn resources_for(title: &str, step: usize) -> Vec<Resource> {
    vec![
        Resource {
            kind: ResourceKind::Video,
            title: format!("Introduction to {}", title),
            duration: Some(format!("{} min", 15 * (step + 1))),
        },
        Resource {
            kind: ResourceKind::Article,
            title: format!("{} Explained", title),
            duration: None,
        },
        Resource {
            kind: ResourceKind::Exercise,
            title: format!("Practice: {}", title),
            duration: None,
        },
        Resource {
            kind: ResourceKind::Project,
            title: format!("Mini Project: {}", title),
            duration: None,
        },
    ]
}

/// The four-quest roadmap for a skill, first quest done, last one locked
pub fn roadmap(skill: Skill) -> Vec<Quest> {
    let templates = templates(skill);
    templates
        .iter()
        .zip(LADDER)
        .enumerate()
        .map(|(i, (t, (xp, status, difficulty, time, kind)))| Quest {
            id: (i + 1).to_string(),
            title: t.title.to_string(),
            description: t.description.to_string(),
            xp,
            status,
            difficulty,
            estimated_time: time.to_string(),
            prerequisites: if status == QuestStatus::Locked && i > 0 {
                vec![templates[i - 1].title.to_string()]
            } else {
                Vec::new()
            },
            overview: t.overview.to_string(),
            learning_objectives: t.objectives.iter().map(|o| o.to_string()).collect(),
            resources: resources_for(t.title, i),
            assessment: Assessment {
                kind,
                description: t.assessment.to_string(),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{complete_quest, RoadmapSummary};

    #[test]
    fn test_roadmap_shape_for_every_skill() {
        for skill in Skill::ALL {
            let quests = roadmap(skill);
            assert_eq!(quests.len(), 4);
            let xp: Vec<u32> = quests.iter().map(|q| q.xp).collect();
            assert_eq!(xp, vec![50, 75, 100, 150]);
            assert_eq!(quests[0].status, QuestStatus::Completed);
            assert_eq!(quests[3].status, QuestStatus::Locked);
        }
    }

    #[test]
    fn test_every_quest_has_objectives() {
        for skill in Skill::ALL {
            for quest in roadmap(skill) {
                assert_eq!(quest.learning_objectives.len(), 4, "{}", quest.title);
                assert!(quest.learning_objectives.iter().all(|o| !o.is_empty()));
            }
        }
        let quests = roadmap(Skill::Cooking);
        assert_eq!(
            quests[1].learning_objectives[0],
            "Understand the five basic tastes"
        );
    }

    #[test]
    fn test_locked_quest_lists_prerequisite() {
        let quests = roadmap(Skill::Coding);
        assert_eq!(quests[3].prerequisites, vec!["Functions & Methods".to_string()]);
        assert!(quests[2].prerequisites.is_empty());
    }

    #[test]
    fn test_summary() {
        let quests = roadmap(Skill::Music);
        let summary = RoadmapSummary::of(&quests);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.percent(), 25);
        assert_eq!(RoadmapSummary::of(&[]).percent(), 0);
    }

    #[test]
    fn test_complete_quest_grants_xp_and_unlocks_next() {
        let mut quests = roadmap(Skill::Coding);
        assert_eq!(complete_quest(&mut quests, 2), Some(100));
        assert_eq!(quests[2].status, QuestStatus::Completed);
        assert_eq!(quests[3].status, QuestStatus::Available);
    }

    #[test]
    fn test_complete_quest_rejects_locked_and_done() {
        let mut quests = roadmap(Skill::Art);
        assert_eq!(complete_quest(&mut quests, 0), None);
        assert_eq!(complete_quest(&mut quests, 3), None);
        assert_eq!(complete_quest(&mut quests, 42), None);
        assert_eq!(quests[3].status, QuestStatus::Locked);
    }
}
