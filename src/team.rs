//! Pre-game setup: intro, the family to protect, and the security team
//!
//! The flow is a small state machine:
//!
//! ```text
//! MainMenu -> Intro -> FamilySelection -> TeamSelection -> Playing
//! ```
//!
//! Leaving `TeamSelection` requires exactly `TEAM_SIZE` roles. The resulting
//! `Team` is what `GameWorld` is built from; its role boosts are folded into
//! the stat table before the first tick.

use crate::error::SetupError;
use crate::stats::{StatKind, StatTable};
use std::fmt;

/// Roles on a team
pub const TEAM_SIZE: usize = 2;

/// Story shown before family selection
pub const INTRO_LINES: [&str; 3] = [
    "In a post-zombie-infested world, you are part of a hired",
    "security team. Your job is to protect a wealthy family",
    "from the remaining zombie threat.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Sniper,
    MachineGunner,
    Medic,
    Engineer,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Sniper, Role::MachineGunner, Role::Medic, Role::Engineer];

    pub fn label(&self) -> &'static str {
        match self {
            Role::Sniper => "Sniper",
            Role::MachineGunner => "Machine Gunner",
            Role::Medic => "Medic",
            Role::Engineer => "Engineer",
        }
    }

    /// Stat boosts this role brings to the team
    pub fn boosts(&self) -> &'static [(StatKind, f32)] {
        match self {
            Role::Sniper => &[(StatKind::Accuracy, 5.0)],
            Role::MachineGunner => &[(StatKind::Damage, 10.0), (StatKind::FireRate, 0.5)],
            Role::Medic => &[(StatKind::HealthRegen, 0.1)],
            Role::Engineer => &[(StatKind::BuildingRegen, 0.05)],
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The family being protected. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Wellingtons,
    Andersons,
    Harpers,
}

impl Family {
    pub const ALL: [Family; 3] = [Family::Wellingtons, Family::Andersons, Family::Harpers];

    pub fn label(&self) -> &'static str {
        match self {
            Family::Wellingtons => "The Wellingtons",
            Family::Andersons => "The Andersons",
            Family::Harpers => "The Harpers",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Roles picked so far, in pick order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamSelection {
    picked: Vec<Role>,
}

impl TeamSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks `role`, or unpicks it if already picked
    ///
    /// Returns whether the role is picked afterwards. Picking beyond
    /// `TEAM_SIZE` is refused.
    pub fn toggle(&mut self, role: Role) -> Result<bool, SetupError> {
        if let Some(index) = self.picked.iter().position(|&r| r == role) {
            self.picked.remove(index);
            return Ok(false);
        }
        if self.picked.len() >= TEAM_SIZE {
            return Err(SetupError::TeamFull(TEAM_SIZE));
        }
        self.picked.push(role);
        Ok(true)
    }

    pub fn is_picked(&self, role: Role) -> bool {
        self.picked.contains(&role)
    }

    pub fn roles(&self) -> &[Role] {
        &self.picked
    }

    pub fn is_complete(&self) -> bool {
        self.picked.len() == TEAM_SIZE
    }
}

/// A finished setup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub family: Family,
    pub roles: Vec<Role>,
}

impl Team {
    pub fn new(family: Family, roles: Vec<Role>) -> Self {
        Team { family, roles }
    }

    /// Adds every role's boosts to `stats`
    pub fn apply_boosts(&self, stats: &mut StatTable) {
        for role in &self.roles {
            for &(kind, amount) in role.boosts() {
                let total = stats.apply_boost(kind, amount);
                log::debug!("{} boosts {} by {} (total {})", role, kind, amount, total);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStep {
    MainMenu,
    Intro,
    FamilySelection,
    TeamSelection,
    Playing,
}

/// Walks the player from the main menu to a `Team`
#[derive(Debug, Clone)]
pub struct SetupFlow {
    step: SetupStep,
    family: Option<Family>,
    selection: TeamSelection,
}

impl Default for SetupFlow {
    fn default() -> Self {
        SetupFlow {
            step: SetupStep::MainMenu,
            family: None,
            selection: TeamSelection::new(),
        }
    }
}

impl SetupFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> SetupStep {
        self.step
    }

    pub fn family(&self) -> Option<Family> {
        self.family
    }

    pub fn selection(&self) -> &TeamSelection {
        &self.selection
    }

    /// "Start Game" on the main menu
    pub fn start(&mut self) {
        if self.step == SetupStep::MainMenu {
            self.step = SetupStep::Intro;
        }
    }

    /// "Continue" on the intro screen
    pub fn continue_intro(&mut self) {
        if self.step == SetupStep::Intro {
            self.step = SetupStep::FamilySelection;
        }
    }

    pub fn choose_family(&mut self, family: Family) {
        if self.step == SetupStep::FamilySelection {
            log::info!("protecting {}", family);
            self.family = Some(family);
            self.step = SetupStep::TeamSelection;
        }
    }

    pub fn toggle_role(&mut self, role: Role) -> Result<bool, SetupError> {
        self.selection.toggle(role)
    }

    /// Finishes setup once a family and a full team are chosen
    pub fn confirm_team(&mut self) -> Result<Team, SetupError> {
        let family = self.family.ok_or(SetupError::NoFamily)?;
        if !self.selection.is_complete() {
            return Err(SetupError::TeamIncomplete {
                required: TEAM_SIZE,
                picked: self.selection.roles().len(),
            });
        }
        let team = Team::new(family, self.selection.roles().to_vec());
        log::info!(
            "team selected: {}",
            team.roles.iter().map(Role::label).collect::<Vec<_>>().join(", ")
        );
        self.step = SetupStep::Playing;
        Ok(team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_stats() -> StatTable {
        StatTable::from_bases(|_| 0.0)
    }

    #[test]
    fn test_toggle_picks_and_unpicks() {
        let mut selection = TeamSelection::new();
        assert_eq!(selection.toggle(Role::Medic), Ok(true));
        assert!(selection.is_picked(Role::Medic));
        assert_eq!(selection.toggle(Role::Medic), Ok(false));
        assert!(selection.roles().is_empty());
    }

    #[test]
    fn test_third_role_is_refused() {
        let mut selection = TeamSelection::new();
        selection.toggle(Role::Sniper).unwrap();
        selection.toggle(Role::Engineer).unwrap();
        assert_eq!(selection.toggle(Role::Medic), Err(SetupError::TeamFull(2)));
        assert_eq!(selection.roles(), &[Role::Sniper, Role::Engineer]);
        assert!(selection.is_complete());
    }

    #[test]
    fn test_unpick_frees_a_slot() {
        let mut selection = TeamSelection::new();
        selection.toggle(Role::Sniper).unwrap();
        selection.toggle(Role::Engineer).unwrap();
        selection.toggle(Role::Sniper).unwrap();
        assert_eq!(selection.toggle(Role::Medic), Ok(true));
    }

    #[test]
    fn test_role_boosts_apply_to_stats() {
        let mut stats = empty_stats();
        Team::new(Family::Harpers, vec![Role::MachineGunner, Role::Sniper]).apply_boosts(&mut stats);

        assert_eq!(stats.boost(StatKind::Damage), 10.0);
        assert_eq!(stats.boost(StatKind::FireRate), 0.5);
        assert_eq!(stats.boost(StatKind::Accuracy), 5.0);
        assert_eq!(stats.boost(StatKind::HealthRegen), 0.0);
    }

    #[test]
    fn test_setup_flow_happy_path() {
        let mut flow = SetupFlow::new();
        assert_eq!(flow.step(), SetupStep::MainMenu);
        flow.start();
        assert_eq!(flow.step(), SetupStep::Intro);
        flow.continue_intro();
        flow.choose_family(Family::Andersons);
        assert_eq!(flow.step(), SetupStep::TeamSelection);

        flow.toggle_role(Role::Medic).unwrap();
        assert!(matches!(
            flow.confirm_team(),
            Err(SetupError::TeamIncomplete { picked: 1, .. })
        ));
        flow.toggle_role(Role::Engineer).unwrap();

        let team = flow.confirm_team().unwrap();
        assert_eq!(team.family, Family::Andersons);
        assert_eq!(team.roles, vec![Role::Medic, Role::Engineer]);
        assert_eq!(flow.step(), SetupStep::Playing);
    }

    #[test]
    fn test_steps_cannot_be_skipped() {
        let mut flow = SetupFlow::new();
        flow.choose_family(Family::Wellingtons);
        assert_eq!(flow.family(), None);
        assert_eq!(flow.confirm_team(), Err(SetupError::NoFamily));
        flow.continue_intro();
        assert_eq!(flow.step(), SetupStep::MainMenu);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Role::MachineGunner.to_string(), "Machine Gunner");
        assert_eq!(Family::Wellingtons.to_string(), "The Wellingtons");
    }
}
