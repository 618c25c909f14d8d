// tests/route_replay.rs
use glam::IVec3;
use symbios::{SymbiosState, SymbolTable};
use turtle_heading::{
    Facing, MoveDirection, Pose, RouteConfig, RouteInterpreter, RouteOp, Turtle,
};
use uuid::Uuid;

fn setup() -> (RouteInterpreter, SymbolTable) {
    let mut interner = SymbolTable::new();
    let mut interpreter = RouteInterpreter::new(RouteConfig::default());

    for sym in ["F", "B", "+", "-", "|", "[", "]", "X"] {
        interner.intern(sym).unwrap();
    }
    interpreter.populate_standard_symbols(&interner);

    (interpreter, interner)
}

fn start() -> Turtle {
    Turtle::new(1, Uuid::nil(), IVec3::ZERO, Facing::Forward)
}

#[test]
fn test_turn_and_walk() {
    let (interpreter, interner) = setup();
    let f = interner.resolve_id("F").unwrap();
    let right = interner.resolve_id("+").unwrap();

    // F(2) + F
    // 1. Two steps along -Z: (0,0,-1), (0,0,-2).
    // 2. Turn right: now facing +X.
    // 3. One step: (1,0,-2).
    let mut state = SymbiosState::new();
    state.push(f, 0.0, &[2.0]).unwrap();
    state.push(right, 0.0, &[]).unwrap();
    state.push(f, 0.0, &[]).unwrap();

    let turtle = start();
    let route = interpreter.run(&turtle, &state);

    assert_eq!(route.poses.len(), 5, "start + 2 steps + 1 turn + 1 step");
    assert_eq!(
        route.final_pose(),
        Some(Pose {
            position: IVec3::new(1, 0, -2),
            facing: Facing::Right,
        })
    );
    assert_eq!(
        route.cells(),
        vec![
            IVec3::ZERO,
            IVec3::new(0, 0, -1),
            IVec3::new(0, 0, -2),
            IVec3::new(1, 0, -2),
        ]
    );

    // The starting turtle is left alone.
    assert_eq!(turtle, start());
}

#[test]
fn test_push_pop_restores_pose() {
    let (interpreter, interner) = setup();
    let f = interner.resolve_id("F").unwrap();
    let left = interner.resolve_id("-").unwrap();
    let push = interner.resolve_id("[").unwrap();
    let pop = interner.resolve_id("]").unwrap();

    // [ - F(3) ] B
    let mut state = SymbiosState::new();
    state.push(push, 0.0, &[]).unwrap();
    state.push(left, 0.0, &[]).unwrap();
    state.push(f, 0.0, &[3.0]).unwrap();
    state.push(pop, 0.0, &[]).unwrap();
    state.push(interner.resolve_id("B").unwrap(), 0.0, &[]).unwrap();

    let route = interpreter.run(&start(), &state);

    // Branch reached (-3,0,0) facing Left before the pop.
    assert!(route.poses.contains(&Pose {
        position: IVec3::new(-3, 0, 0),
        facing: Facing::Left,
    }));
    assert_eq!(
        route.final_pose(),
        Some(Pose {
            position: IVec3::new(0, 0, 1),
            facing: Facing::Forward,
        })
    );
}

#[test]
fn test_turn_around_and_unmapped_symbols() {
    let (interpreter, interner) = setup();
    let around = interner.resolve_id("|").unwrap();
    let unmapped = interner.resolve_id("X").unwrap();
    let pop = interner.resolve_id("]").unwrap();

    let mut state = SymbiosState::new();
    state.push(unmapped, 0.0, &[]).unwrap();
    state.push(pop, 0.0, &[]).unwrap(); // empty stack: ignored
    state.push(around, 0.0, &[]).unwrap();

    let route = interpreter.run(&start(), &state);
    assert_eq!(route.poses.len(), 2);
    assert_eq!(route.final_pose().unwrap().facing, Facing::Backward);
}

#[test]
fn test_repeat_is_clamped() {
    let mut interner = SymbolTable::new();
    interner.intern("F").unwrap();
    let f = interner.resolve_id("F").unwrap();

    let mut interpreter = RouteInterpreter::new(RouteConfig {
        max_repeat: 3,
        ..Default::default()
    });
    interpreter.set_op(f, RouteOp::Step(MoveDirection::Forward));

    let mut state = SymbiosState::new();
    state.push(f, 0.0, &[100.0]).unwrap();
    state.push(f, 0.0, &[-5.0]).unwrap();

    let route = interpreter.run(&start(), &state);
    assert_eq!(
        route.final_pose().unwrap().position,
        IVec3::new(0, 0, -3)
    );
}

#[test]
fn test_stack_depth_limit() {
    let mut interner = SymbolTable::new();
    for sym in ["F", "[", "]"] {
        interner.intern(sym).unwrap();
    }
    let f = interner.resolve_id("F").unwrap();
    let push = interner.resolve_id("[").unwrap();
    let pop = interner.resolve_id("]").unwrap();

    let mut interpreter = RouteInterpreter::new(RouteConfig {
        max_stack_depth: 1,
        ..Default::default()
    });
    interpreter.populate_standard_symbols(&interner);

    // [ F [ F ] ] : the second push is dropped, so both pops land on the origin save
    // and only the first one restores anything.
    let mut state = SymbiosState::new();
    for sym in [push, f, push, f, pop, pop] {
        state.push(sym, 0.0, &[]).unwrap();
    }

    let route = interpreter.run(&start(), &state);
    assert_eq!(route.final_pose().unwrap().position, IVec3::ZERO);
    assert_eq!(route.poses.len(), 4, "start + 2 steps + 1 restore");
}
