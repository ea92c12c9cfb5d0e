//! Selector States
//!
//! This example drives a small character hierarchy where an inner
//! `Selector` state picks the locomotion leaf from the character's inputs.
//!
//! Key concepts:
//! - Inner entry from a parent into its default child
//! - Sibling transitions between leaves
//! - Owner access through an accessor trait
//! - Trace output through `tracing`
//!
//! Run with: RUST_LOG=hsmrt=trace cargo run --example selector_states

use hsmrt::builder::StateRegistry;
use hsmrt::core::{State, Transition};
use hsmrt::machine::StateMachine;
use hsmrt::state_ids;
use hsmrt::trace::TraceLevel;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

state_ids! {
    enum Locomotion {
        Alive,
        Moving,
        Selector,
        Stand,
        Move,
        Jump,
    }
}

trait Inputs {
    fn move_pressed(&self) -> bool;
    fn jump_pressed(&self) -> bool;
}

#[derive(Default)]
struct Character {
    move_pressed: bool,
    jump_pressed: bool,
}

impl Inputs for Character {
    fn move_pressed(&self) -> bool {
        self.move_pressed
    }

    fn jump_pressed(&self) -> bool {
        self.jump_pressed
    }
}

fn should_jump(inputs: &dyn Inputs) -> bool {
    inputs.jump_pressed()
}

fn should_move(inputs: &dyn Inputs) -> bool {
    !should_jump(inputs) && inputs.move_pressed()
}

struct Alive;
struct Moving;
struct Selector;
struct Leaf {
    id: Locomotion,
    holds: fn(&dyn Inputs) -> bool,
}

impl State<Locomotion, dyn Inputs> for Alive {
    fn transition(&self, _inputs: &dyn Inputs) -> Transition<Locomotion> {
        Transition::inner_entry(Locomotion::Moving)
    }
}

impl State<Locomotion, dyn Inputs> for Moving {
    fn transition(&self, _inputs: &dyn Inputs) -> Transition<Locomotion> {
        Transition::inner_entry(Locomotion::Selector)
    }
}

impl State<Locomotion, dyn Inputs> for Selector {
    fn transition(&self, inputs: &dyn Inputs) -> Transition<Locomotion> {
        if should_jump(inputs) {
            Transition::sibling(Locomotion::Jump)
        } else if should_move(inputs) {
            Transition::sibling(Locomotion::Move)
        } else {
            Transition::sibling(Locomotion::Stand)
        }
    }
}

impl State<Locomotion, dyn Inputs> for Leaf {
    fn transition(&self, inputs: &dyn Inputs) -> Transition<Locomotion> {
        if (self.holds)(inputs) {
            Transition::None
        } else {
            Transition::sibling(Locomotion::Selector)
        }
    }

    fn on_enter(&mut self, _inputs: &mut (dyn Inputs + 'static)) {
        println!("  -> now {:?}", self.id);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hsmrt=debug")),
        )
        .init();

    println!("=== Selector States ===\n");

    let registry = StateRegistry::builder()
        .root(Locomotion::Alive, || Alive)
        .child(Locomotion::Moving, Locomotion::Alive, || Moving)
        .child(Locomotion::Selector, Locomotion::Moving, || Selector)
        .child(Locomotion::Stand, Locomotion::Moving, || Leaf {
            id: Locomotion::Stand,
            holds: |inputs| !should_jump(inputs) && !should_move(inputs),
        })
        .child(Locomotion::Move, Locomotion::Moving, || Leaf {
            id: Locomotion::Move,
            holds: should_move,
        })
        .child(Locomotion::Jump, Locomotion::Moving, || Leaf {
            id: Locomotion::Jump,
            holds: should_jump,
        })
        .build()
        .unwrap();

    let mut character = Character::default();
    let mut machine = StateMachine::new(Arc::new(registry));
    machine.set_debug_info("TestHsm", TraceLevel::Basic);

    println!("Initializing:");
    machine.initialize(Locomotion::Alive, &mut character).unwrap();

    let steps = [
        ("idle", false, false),
        ("press move", true, false),
        ("press jump", true, true),
        ("release jump", true, false),
        ("release move", false, false),
    ];

    for (label, move_pressed, jump_pressed) in steps {
        println!("\nTick {}: {}", machine.tick() + 1, label);
        character.move_pressed = move_pressed;
        character.jump_pressed = jump_pressed;
        let applied = machine.process_state_transitions(&mut character).unwrap();
        machine.update_states(&mut character).unwrap();
        println!(
            "  {} transition(s), active: {:?}",
            applied,
            machine.active_states()
        );
    }

    machine.shutdown(&mut character).unwrap();
    println!("\nShut down cleanly");
}
