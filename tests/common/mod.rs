//! Character locomotion hierarchy shared by the integration tests.
//!
//! ```text
//! Alive
//! └── Locomotion
//!     ├── Selector
//!     ├── Stand
//!     ├── Move
//!     └── Jump
//! ```
//!
//! States only see the character through the `Body` accessor trait.

#![allow(dead_code)]

use hsmrt::builder::StateRegistry;
use hsmrt::core::{State, Transition};
use hsmrt::machine::StateMachine;
use hsmrt::state_ids;
use std::sync::Arc;

state_ids! {
    pub enum CharacterState {
        Alive,
        Locomotion,
        Selector,
        Stand,
        Move,
        Jump,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hook {
    Enter,
    Exit,
    Update,
}

/// What states may read from and report to their owner.
pub trait Body {
    fn wants_move(&self) -> bool;
    fn wants_jump(&self) -> bool;
    fn record(&mut self, hook: Hook, state: CharacterState);
}

#[derive(Debug, Default)]
pub struct Character {
    pub moving: bool,
    pub jumping: bool,
    pub hooks: Vec<(Hook, CharacterState)>,
}

impl Character {
    pub fn count(&self, hook: Hook) -> usize {
        self.hooks.iter().filter(|(seen, _)| *seen == hook).count()
    }

    pub fn updates(&self) -> Vec<CharacterState> {
        self.hooks
            .iter()
            .filter(|(hook, _)| *hook == Hook::Update)
            .map(|(_, state)| *state)
            .collect()
    }
}

impl Body for Character {
    fn wants_move(&self) -> bool {
        self.moving
    }

    fn wants_jump(&self) -> bool {
        self.jumping
    }

    fn record(&mut self, hook: Hook, state: CharacterState) {
        self.hooks.push((hook, state));
    }
}

fn should_jump(body: &dyn Body) -> bool {
    body.wants_jump()
}

// Jumping has priority over moving
fn should_move(body: &dyn Body) -> bool {
    !should_jump(body) && body.wants_move()
}

fn should_stand(body: &dyn Body) -> bool {
    !should_jump(body) && !should_move(body)
}

macro_rules! recorded_hooks {
    ($id:expr) => {
        fn on_enter(&mut self, body: &mut (dyn Body + 'static)) {
            body.record(Hook::Enter, $id);
        }

        fn on_exit(&mut self, body: &mut (dyn Body + 'static)) {
            body.record(Hook::Exit, $id);
        }

        fn update(&mut self, body: &mut (dyn Body + 'static)) {
            body.record(Hook::Update, $id);
        }
    };
}

struct Alive;
struct Locomotion;
struct Selector;
struct Stand;
struct Move;
struct Jump;

impl State<CharacterState, dyn Body> for Alive {
    fn transition(&self, _body: &dyn Body) -> Transition<CharacterState> {
        Transition::inner_entry(CharacterState::Locomotion)
    }

    recorded_hooks!(CharacterState::Alive);
}

impl State<CharacterState, dyn Body> for Locomotion {
    fn transition(&self, _body: &dyn Body) -> Transition<CharacterState> {
        Transition::inner_entry(CharacterState::Selector)
    }

    recorded_hooks!(CharacterState::Locomotion);
}

impl State<CharacterState, dyn Body> for Selector {
    fn transition(&self, body: &dyn Body) -> Transition<CharacterState> {
        if should_jump(body) {
            Transition::sibling(CharacterState::Jump)
        } else if should_move(body) {
            Transition::sibling(CharacterState::Move)
        } else {
            Transition::sibling(CharacterState::Stand)
        }
    }

    recorded_hooks!(CharacterState::Selector);
}

impl State<CharacterState, dyn Body> for Stand {
    fn transition(&self, body: &dyn Body) -> Transition<CharacterState> {
        if should_stand(body) {
            Transition::None
        } else {
            Transition::sibling(CharacterState::Selector)
        }
    }

    recorded_hooks!(CharacterState::Stand);
}

impl State<CharacterState, dyn Body> for Move {
    fn transition(&self, body: &dyn Body) -> Transition<CharacterState> {
        if should_move(body) {
            Transition::None
        } else {
            Transition::sibling(CharacterState::Selector)
        }
    }

    recorded_hooks!(CharacterState::Move);
}

impl State<CharacterState, dyn Body> for Jump {
    fn transition(&self, body: &dyn Body) -> Transition<CharacterState> {
        if should_jump(body) {
            Transition::None
        } else {
            Transition::sibling(CharacterState::Selector)
        }
    }

    recorded_hooks!(CharacterState::Jump);
}

pub fn registry() -> Arc<StateRegistry<CharacterState, dyn Body>> {
    let registry = StateRegistry::builder()
        .root(CharacterState::Alive, || Alive)
        .child(CharacterState::Locomotion, CharacterState::Alive, || {
            Locomotion
        })
        .child(CharacterState::Selector, CharacterState::Locomotion, || {
            Selector
        })
        .child(CharacterState::Stand, CharacterState::Locomotion, || Stand)
        .child(CharacterState::Move, CharacterState::Locomotion, || Move)
        .child(CharacterState::Jump, CharacterState::Locomotion, || Jump)
        .build()
        .expect("character hierarchy is valid");
    Arc::new(registry)
}

pub fn machine() -> StateMachine<CharacterState, dyn Body> {
    StateMachine::builder()
        .registry(registry())
        .name("TestHsm")
        .build()
        .expect("default config is valid")
}

/// One client update: resolve transitions, then update states.
pub fn tick(machine: &mut StateMachine<CharacterState, dyn Body>, character: &mut Character) {
    machine
        .process_state_transitions(character)
        .expect("transitions settle");
    machine.update_states(character).expect("update succeeds");
}

/// Check every adjacent pair of the active path against the registry.
pub fn path_is_well_formed(machine: &StateMachine<CharacterState, dyn Body>) -> bool {
    let states = machine.active_states();
    let registry = machine.registry();

    let root_ok = states
        .first()
        .map(|root| registry.parent_of(*root) == Ok(None))
        .unwrap_or(false);

    root_ok
        && states
            .windows(2)
            .all(|pair| registry.parent_of(pair[1]) == Ok(Some(pair[0])))
}
