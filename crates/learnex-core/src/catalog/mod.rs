//! Canned content for the Learnex screens.
//!
//! Nothing here is fetched or stored. Each function builds fresh data for a
//! skill track (and, for the directory, the viewer's role):
//!
//! - `roadmap`: four quests per skill
//! - `directory`: mentors for learners, students for mentors
//! - `posts`: community forum posts
//! - `report`: learner or mentor progress stats

pub mod forum;
pub mod people;
pub mod progress;
pub mod quests;

pub use forum::posts;
pub use people::directory;
pub use progress::report;
pub use quests::roadmap;
