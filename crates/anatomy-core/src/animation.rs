//! Animation slot model.
//!
//! Each animated system cycles through a fixed list of labelled phases on a
//! fixed interval. Only the phase sequence and its text keys live here; the
//! drawing is left to the UI.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One labelled step of an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    pub title_key: &'static str,
    pub description_key: &'static str,
}

const ACTION_POTENTIAL_PHASES: [Phase; 4] = [
    Phase { title_key: "ap_step1", description_key: "ap_step1_desc" },
    Phase { title_key: "ap_step2", description_key: "ap_step2_desc" },
    Phase { title_key: "ap_step3", description_key: "ap_step3_desc" },
    Phase { title_key: "ap_step4", description_key: "ap_step4_desc" },
];

const BREATHING_PHASES: [Phase; 2] = [
    Phase { title_key: "inhalation", description_key: "inhalation_desc" },
    Phase { title_key: "exhalation", description_key: "exhalation_desc" },
];

// SA node -> AV node -> bundle of His -> Purkinje fibres
const HEARTBEAT_PHASES: [Phase; 4] = [
    Phase { title_key: "sa_node", description_key: "sa_node_desc" },
    Phase { title_key: "av_node", description_key: "av_node_desc" },
    Phase { title_key: "bundle_his", description_key: "bundle_his_desc" },
    Phase { title_key: "purkinje", description_key: "purkinje_desc" },
];

/// Animations a catalog entry can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationKind {
    /// Cardiac conduction path
    Heartbeat,
    /// Inhale / exhale cycle
    Breathing,
    /// Neuron firing sequence
    ActionPotential,
}

impl AnimationKind {
    /// Translation key for the animation heading.
    pub fn title_key(self) -> &'static str {
        match self {
            AnimationKind::Heartbeat => "heart_electrical",
            AnimationKind::Breathing => "breathing_cycle",
            AnimationKind::ActionPotential => "action_potential_title",
        }
    }

    pub fn phases(self) -> &'static [Phase] {
        match self {
            AnimationKind::Heartbeat => &HEARTBEAT_PHASES,
            AnimationKind::Breathing => &BREATHING_PHASES,
            AnimationKind::ActionPotential => &ACTION_POTENTIAL_PHASES,
        }
    }

    /// Time each phase stays on screen.
    pub fn step_interval(self) -> Duration {
        match self {
            AnimationKind::Heartbeat => Duration::from_millis(600),
            AnimationKind::Breathing | AnimationKind::ActionPotential => {
                Duration::from_millis(2000)
            }
        }
    }

    /// Every translation key this animation displays.
    pub fn keys(self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.title_key()).chain(
            self.phases()
                .iter()
                .flat_map(|phase| [phase.title_key, phase.description_key]),
        )
    }
}

/// Position within an animation's phase list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseCycle {
    kind: AnimationKind,
    index: usize,
}

impl PhaseCycle {
    pub fn new(kind: AnimationKind) -> Self {
        Self { kind, index: 0 }
    }

    pub fn kind(&self) -> AnimationKind {
        self.kind
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Phase {
        self.kind.phases()[self.index]
    }

    /// Move to the next phase, wrapping after the last one.
    pub fn advance(&mut self) -> Phase {
        self.index = (self.index + 1) % self.kind.phases().len();
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_potential_wraps_after_four_steps() {
        let mut cycle = PhaseCycle::new(AnimationKind::ActionPotential);
        assert_eq!(cycle.current().title_key, "ap_step1");
        cycle.advance();
        cycle.advance();
        assert_eq!(cycle.advance().title_key, "ap_step4");
        assert_eq!(cycle.advance().title_key, "ap_step1");
        assert_eq!(cycle.index(), 0);
    }

    #[test]
    fn breathing_alternates() {
        let mut cycle = PhaseCycle::new(AnimationKind::Breathing);
        assert_eq!(cycle.current().title_key, "inhalation");
        assert_eq!(cycle.advance().title_key, "exhalation");
        assert_eq!(cycle.advance().title_key, "inhalation");
    }

    #[test]
    fn intervals() {
        assert_eq!(AnimationKind::Breathing.step_interval(), Duration::from_secs(2));
        assert_eq!(AnimationKind::ActionPotential.step_interval(), Duration::from_secs(2));
        assert!(AnimationKind::Heartbeat.step_interval() < Duration::from_secs(1));
    }

    #[test]
    fn keys_include_title_and_every_phase() {
        let keys: Vec<_> = AnimationKind::Breathing.keys().collect();
        assert_eq!(
            keys,
            vec!["breathing_cycle", "inhalation", "inhalation_desc", "exhalation", "exhalation_desc"]
        );
    }

    #[test]
    fn serde_names_are_snake_case() {
        let kind: AnimationKind = serde_json::from_str("\"action_potential\"").unwrap();
        assert_eq!(kind, AnimationKind::ActionPotential);
        assert_eq!(serde_json::to_string(&AnimationKind::Heartbeat).unwrap(), "\"heartbeat\"");
    }
}
