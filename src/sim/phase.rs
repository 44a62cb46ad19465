//! Menu / playing / paused state machine

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Arena;
use crate::consts::LABEL_OFFSET_Y;

/// Current phase of the game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for a click on the start label
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
}

/// Axis-aligned hit box of the menu's start label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelBox {
    pub min: Vec2,
    pub max: Vec2,
}

impl LabelBox {
    pub fn from_center(center: Vec2, width: f32, height: f32) -> Self {
        let half = Vec2::new(width, height) / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Label centered horizontally, just below the arena's middle
    pub fn for_arena(arena: &Arena, width: f32, height: f32) -> Self {
        let center = arena.center() + Vec2::new(0.0, LABEL_OFFSET_Y);
        Self::from_center(center, width, height)
    }

    /// Edges count as inside
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Owns the [`GamePhase`]; the only thing allowed to change it
#[derive(Debug, Clone, Default)]
pub struct StateMachine {
    phase: GamePhase,
}

impl StateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Pointer activation at `point`. Starts the game if we're in the menu and
    /// the point hits the label; otherwise nothing changes.
    pub fn activate(&mut self, point: Vec2, label: &LabelBox) -> bool {
        if self.phase != GamePhase::Menu || !label.contains(point) {
            return false;
        }
        self.transition(GamePhase::Playing);
        true
    }

    /// Pause toggle. Inert in the menu.
    pub fn toggle_pause(&mut self) -> bool {
        let next = match self.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            GamePhase::Menu => return false,
        };
        self.transition(next);
        true
    }

    fn transition(&mut self, next: GamePhase) {
        log::info!("Phase {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label() -> LabelBox {
        LabelBox::for_arena(&Arena::new(800.0, 500.0), 110.0, 56.0)
    }

    #[test]
    fn test_label_geometry() {
        let label = label();
        assert_eq!(label.min, Vec2::new(345.0, 262.0));
        assert_eq!(label.max, Vec2::new(455.0, 318.0));
        assert!(label.contains(Vec2::new(400.0, 290.0)));
        assert!(label.contains(label.min));
        assert!(label.contains(label.max));
        assert!(!label.contains(Vec2::new(400.0, 250.0)));
    }

    #[test]
    fn test_activate_hit_starts_game() {
        let mut sm = StateMachine::new();
        assert_eq!(sm.phase(), GamePhase::Menu);
        assert!(sm.activate(Vec2::new(400.0, 290.0), &label()));
        assert_eq!(sm.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_activate_miss_does_nothing() {
        let mut sm = StateMachine::new();
        assert!(!sm.activate(Vec2::new(10.0, 10.0), &label()));
        assert_eq!(sm.phase(), GamePhase::Menu);
    }

    #[test]
    fn test_activate_outside_menu_ignored() {
        let mut sm = StateMachine::new();
        sm.activate(Vec2::new(400.0, 290.0), &label());
        assert!(!sm.activate(Vec2::new(400.0, 290.0), &label()));
        assert_eq!(sm.phase(), GamePhase::Playing);

        sm.toggle_pause();
        assert!(!sm.activate(Vec2::new(400.0, 290.0), &label()));
        assert_eq!(sm.phase(), GamePhase::Paused);
    }

    #[test]
    fn test_pause_toggle() {
        let mut sm = StateMachine::new();
        sm.activate(Vec2::new(400.0, 290.0), &label());

        assert!(sm.toggle_pause());
        assert_eq!(sm.phase(), GamePhase::Paused);
        assert!(sm.toggle_pause());
        assert_eq!(sm.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_pause_inert_in_menu() {
        let mut sm = StateMachine::new();
        assert!(!sm.toggle_pause());
        assert_eq!(sm.phase(), GamePhase::Menu);
    }
}
