//! The three-step onboarding wizard.
//!
//! `RoleSelect -> SkillSelect -> NameEntry -> Complete`, with Back allowed
//! from the middle two steps. Progress lives only in memory.

use crate::auth::Session;
use crate::error::OnboardingError;
use crate::models::{Profile, Role, Skill};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    RoleSelect,
    SkillSelect,
    NameEntry,
    Complete,
}

impl OnboardingStep {
    fn name(&self) -> &'static str {
        match self {
            OnboardingStep::RoleSelect => "role selection",
            OnboardingStep::SkillSelect => "skill selection",
            OnboardingStep::NameEntry => "name entry",
            OnboardingStep::Complete => "completed onboarding",
        }
    }

    /// 1-based position for "Step n of 3"
    pub fn number(&self) -> usize {
        match self {
            OnboardingStep::RoleSelect => 1,
            OnboardingStep::SkillSelect => 2,
            OnboardingStep::NameEntry | OnboardingStep::Complete => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingEvent {
    SelectRole(Role),
    SelectSkill(Skill),
    EditName(String),
    Back,
    Submit,
}

impl OnboardingEvent {
    fn name(&self) -> &'static str {
        match self {
            OnboardingEvent::SelectRole(_) => "Selecting a role",
            OnboardingEvent::SelectSkill(_) => "Selecting a skill",
            OnboardingEvent::EditName(_) => "Editing the name",
            OnboardingEvent::Back => "Going back",
            OnboardingEvent::Submit => "Submitting",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingFlow {
    step: OnboardingStep,
    role: Option<Role>,
    skill: Option<Skill>,
    name: String,
    name_seeded: bool,
}

impl Default for OnboardingFlow {
    fn default() -> Self {
        Self {
            step: OnboardingStep::RoleSelect,
            role: None,
            skill: None,
            name: String::new(),
            name_seeded: false,
        }
    }
}

impl OnboardingFlow {
    /// Start the wizard, prefilling the name from the session
    pub fn for_session(session: &Session) -> Self {
        let mut flow = Self::default();
        flow.seed_name(&session.name);
        flow
    }

    /// Prefill the name field. Only the first non-empty seed sticks.
    pub fn seed_name(&mut self, name: &str) {
        if self.name_seeded || name.is_empty() {
            return;
        }
        self.name = name.to_string();
        self.name_seeded = true;
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn skill(&self) -> Option<Skill> {
        self.skill
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_complete(&self) -> bool {
        self.step == OnboardingStep::Complete
    }

    /// Whether Submit would currently succeed
    pub fn can_submit(&self) -> bool {
        self.step == OnboardingStep::NameEntry
            && self.role.is_some()
            && self.skill.is_some()
            && !self.name.trim().is_empty()
    }

    /// Heading for the current step
    pub fn prompt(&self) -> &'static str {
        match self.step {
            OnboardingStep::RoleSelect => "Choose your role",
            OnboardingStep::SkillSelect => match self.role {
                Some(Role::Mentor) => "What would you like to teach?",
                _ => "What do you want to learn?",
            },
            OnboardingStep::NameEntry => "Almost there!",
            OnboardingStep::Complete => "Welcome aboard!",
        }
    }

    /// Apply one event. On error the flow is unchanged.
    pub fn apply(&mut self, event: OnboardingEvent) -> Result<(), OnboardingError> {
        let invalid = |step: OnboardingStep, event: &OnboardingEvent| {
            OnboardingError::InvalidTransition {
                step: step.name(),
                action: event.name(),
            }
        };

        match (self.step, event) {
            (OnboardingStep::RoleSelect, OnboardingEvent::SelectRole(role)) => {
                self.role = Some(role);
                self.step = OnboardingStep::SkillSelect;
            }
            (OnboardingStep::SkillSelect, OnboardingEvent::SelectSkill(skill)) => {
                self.skill = Some(skill);
                self.step = OnboardingStep::NameEntry;
            }
            (OnboardingStep::SkillSelect, OnboardingEvent::Back) => {
                self.step = OnboardingStep::RoleSelect;
            }
            (OnboardingStep::NameEntry, OnboardingEvent::EditName(name)) => {
                self.name = name;
                // A user edit counts as the seed; later seeds must not clobber it.
                self.name_seeded = true;
            }
            (OnboardingStep::NameEntry, OnboardingEvent::Back) => {
                self.step = OnboardingStep::SkillSelect;
            }
            (OnboardingStep::NameEntry, OnboardingEvent::Submit) => {
                if self.role.is_none() || self.skill.is_none() {
                    return Err(OnboardingError::Incomplete);
                }
                if self.name.trim().is_empty() {
                    return Err(OnboardingError::EmptyName);
                }
                self.step = OnboardingStep::Complete;
            }
            (step, event) => return Err(invalid(step, &event)),
        }
        Ok(())
    }

    /// The initial profile, once the wizard is complete
    pub fn profile_for(&self, session: &Session) -> Option<Profile> {
        if !self.is_complete() {
            return None;
        }
        let (role, skill) = (self.role?, self.skill?);
        Some(Profile::new(
            session.id.clone(),
            self.name.trim(),
            session.email.clone(),
            role,
            skill,
            session.avatar.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::email("sam@example.com", "Sammy")
    }

    fn at_name_entry() -> OnboardingFlow {
        let mut flow = OnboardingFlow::for_session(&session());
        flow.apply(OnboardingEvent::SelectRole(Role::Mentor)).unwrap();
        flow.apply(OnboardingEvent::SelectSkill(Skill::Music)).unwrap();
        flow
    }

    #[test]
    fn test_starts_at_role_select_with_prefilled_name() {
        let flow = OnboardingFlow::for_session(&session());
        assert_eq!(flow.step(), OnboardingStep::RoleSelect);
        assert_eq!(flow.name(), "Sammy");
        assert_eq!(flow.prompt(), "Choose your role");
    }

    #[test]
    fn test_mentor_music_sam_scenario() {
        let session = session();
        let mut flow = at_name_entry();
        flow.apply(OnboardingEvent::EditName("Sam".to_string())).unwrap();
        flow.apply(OnboardingEvent::Submit).unwrap();
        assert!(flow.is_complete());

        let profile = flow.profile_for(&session).unwrap();
        assert_eq!(profile.role, Role::Mentor);
        assert_eq!(profile.primary_skill, Skill::Music);
        assert_eq!(profile.name, "Sam");
        assert_eq!(profile.level(), 1);
        assert_eq!(profile.experience(), 0);
        assert_eq!(profile.id, session.id);
    }

    #[test]
    fn test_skill_prompt_depends_on_role() {
        let mut flow = OnboardingFlow::default();
        flow.apply(OnboardingEvent::SelectRole(Role::Learner)).unwrap();
        assert_eq!(flow.prompt(), "What do you want to learn?");
        flow.apply(OnboardingEvent::Back).unwrap();
        flow.apply(OnboardingEvent::SelectRole(Role::Mentor)).unwrap();
        assert_eq!(flow.prompt(), "What would you like to teach?");
    }

    #[test]
    fn test_blank_name_cannot_complete() {
        let mut flow = at_name_entry();
        flow.apply(OnboardingEvent::EditName("   ".to_string())).unwrap();
        assert!(!flow.can_submit());
        assert_eq!(flow.apply(OnboardingEvent::Submit), Err(OnboardingError::EmptyName));
        assert_eq!(flow.step(), OnboardingStep::NameEntry);
        assert!(flow.profile_for(&session()).is_none());
    }

    #[test]
    fn test_no_skip_forward() {
        let mut flow = OnboardingFlow::default();
        let before = flow.clone();
        assert!(flow.apply(OnboardingEvent::SelectSkill(Skill::Art)).is_err());
        assert!(flow.apply(OnboardingEvent::Submit).is_err());
        assert!(flow.apply(OnboardingEvent::Back).is_err());
        assert!(flow.apply(OnboardingEvent::EditName("x".to_string())).is_err());
        assert_eq!(flow, before);
    }

    #[test]
    fn test_back_transitions() {
        let mut flow = at_name_entry();
        flow.apply(OnboardingEvent::Back).unwrap();
        assert_eq!(flow.step(), OnboardingStep::SkillSelect);
        flow.apply(OnboardingEvent::Back).unwrap();
        assert_eq!(flow.step(), OnboardingStep::RoleSelect);
        // Choices survive going back
        assert_eq!(flow.role(), Some(Role::Mentor));
        assert_eq!(flow.skill(), Some(Skill::Music));
    }

    #[test]
    fn test_complete_is_terminal() {
        let mut flow = at_name_entry();
        flow.apply(OnboardingEvent::Submit).unwrap();
        assert!(flow.apply(OnboardingEvent::Back).is_err());
        assert!(flow.apply(OnboardingEvent::SelectRole(Role::Learner)).is_err());
        assert!(flow.is_complete());
    }

    #[test]
    fn test_name_seeded_only_once() {
        let mut flow = OnboardingFlow::default();
        flow.seed_name("");
        assert_eq!(flow.name(), "");
        flow.seed_name("First");
        flow.seed_name("Second");
        assert_eq!(flow.name(), "First");
    }

    #[test]
    fn test_user_edit_survives_later_seed() {
        let mut flow = OnboardingFlow::default();
        flow.apply(OnboardingEvent::SelectRole(Role::Learner)).unwrap();
        flow.apply(OnboardingEvent::SelectSkill(Skill::Coding)).unwrap();
        flow.apply(OnboardingEvent::EditName("Mine".to_string())).unwrap();
        flow.seed_name("From Session");
        assert_eq!(flow.name(), "Mine");
    }

    #[test]
    fn test_profile_name_is_trimmed() {
        let mut flow = at_name_entry();
        flow.apply(OnboardingEvent::EditName("  Sam  ".to_string())).unwrap();
        flow.apply(OnboardingEvent::Submit).unwrap();
        assert_eq!(flow.profile_for(&session()).unwrap().name, "Sam");
    }
}
