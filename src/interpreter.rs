//! Interpreter that replays a symbol sequence as turtle moves and records the route.
//!
//! The entry point is [`RouteInterpreter`]. Configure it with a [`RouteConfig`],
//! register symbol-to-operation mappings via [`RouteInterpreter::set_op`] or
//! [`RouteInterpreter::populate_standard_symbols`], then call
//! [`RouteInterpreter::run`] with a starting [`Turtle`] and a [`symbios::SymbiosState`].

use crate::direction::{Facing, MoveDirection};
use crate::turtle::Turtle;
use glam::IVec3;
use serde::{Deserialize, Serialize};
use symbios::{SymbiosState, SymbolTable};
use tracing::{debug, warn};

/// Limits for route interpretation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Maximum stack depth for push/pop operations.
    pub max_stack_depth: usize,
    /// Upper bound on the repeat count a single step symbol may request.
    pub max_repeat: u32,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            max_stack_depth: 1024,
            max_repeat: 4096,
        }
    }
}

/// Operations a route symbol can stand for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteOp {
    /// Move or turn, repeated by the first parameter (default 1).
    Step(MoveDirection),
    /// Two right turns (`|`).
    TurnAround,
    /// Save the current pose (`[`).
    Push,
    /// Restore the most recently pushed pose (`]`).
    Pop,
    /// Symbol has no registered meaning.
    Ignore,
}

/// Position and facing of the turtle at one point of a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pose {
    pub position: IVec3,
    pub facing: Facing,
}

impl From<&Turtle> for Pose {
    fn from(turtle: &Turtle) -> Self {
        Self {
            position: turtle.position,
            facing: turtle.facing,
        }
    }
}

/// Every pose a turtle passes through while replaying a route, starting pose first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub poses: Vec<Pose>,
}

impl Route {
    pub fn final_pose(&self) -> Option<Pose> {
        self.poses.last().copied()
    }

    /// Cells visited, in order, with consecutive duplicates (turns in place) collapsed.
    pub fn cells(&self) -> Vec<IVec3> {
        let mut cells: Vec<IVec3> = self.poses.iter().map(|p| p.position).collect();
        cells.dedup();
        cells
    }
}

/// Replays symbol sequences as turtle routes.
pub struct RouteInterpreter {
    op_map: Vec<RouteOp>,
    config: RouteConfig,
}

impl RouteInterpreter {
    /// Creates a new interpreter with the given configuration and an empty symbol map.
    pub fn new(config: RouteConfig) -> Self {
        Self {
            op_map: Vec::new(),
            config,
        }
    }

    /// Replaces the entire symbol-to-operation map (builder pattern).
    ///
    /// `map` is indexed by symbol ID; IDs outside the slice are treated as [`RouteOp::Ignore`].
    pub fn with_map(mut self, map: Vec<RouteOp>) -> Self {
        self.op_map = map;
        self
    }

    /// Assigns a single [`RouteOp`] to a symbol ID, growing the map with
    /// [`RouteOp::Ignore`] as needed.
    pub fn set_op(&mut self, sym_id: u16, op: RouteOp) {
        let idx = sym_id as usize;
        if idx >= self.op_map.len() {
            self.op_map.resize(idx + 1, RouteOp::Ignore);
        }
        self.op_map[idx] = op;
    }

    /// Registers the conventional route symbols found in `interner`.
    ///
    /// `F`/`B` move forward/backward, `+`/`-` turn right/left, `|` turns around,
    /// `[`/`]` push/pop. Symbols missing from the interner are skipped.
    pub fn populate_standard_symbols(&mut self, interner: &SymbolTable) {
        let mappings = [
            ("F", RouteOp::Step(MoveDirection::Forward)),
            ("B", RouteOp::Step(MoveDirection::Backward)),
            ("+", RouteOp::Step(MoveDirection::Right)),
            ("-", RouteOp::Step(MoveDirection::Left)),
            ("|", RouteOp::TurnAround),
            ("[", RouteOp::Push),
            ("]", RouteOp::Pop),
        ];

        for (sym, op) in mappings {
            if let Some(id) = interner.resolve_id(sym) {
                self.set_op(id, op);
            }
        }
    }

    /// Replays `state` starting from `start` and returns every pose reached.
    ///
    /// `start` is not mutated. A pose is recorded after each unit move or turn, so a
    /// `Step` repeated `n` times contributes `n` poses. Pushes beyond `max_stack_depth`
    /// are dropped and pops on an empty stack do nothing.
    pub fn run(&self, start: &Turtle, state: &SymbiosState) -> Route {
        let mut turtle = start.clone();
        let mut route = Route {
            poses: vec![Pose::from(&turtle)],
        };
        let mut stack: Vec<Pose> = Vec::new();

        for i in 0..state.len() {
            let view = match state.get_view(i) {
                Some(v) => v,
                None => break,
            };

            let op = self
                .op_map
                .get(view.sym as usize)
                .unwrap_or(&RouteOp::Ignore);

            match op {
                RouteOp::Step(movement) => {
                    let repeat = view
                        .params
                        .first()
                        .map(|&x| (x as f64).max(0.0) as u32)
                        .unwrap_or(1)
                        .min(self.config.max_repeat);
                    for _ in 0..repeat {
                        turtle.apply(*movement);
                        route.poses.push(Pose::from(&turtle));
                    }
                }
                RouteOp::TurnAround => {
                    turtle.facing = turtle.facing.opposite();
                    route.poses.push(Pose::from(&turtle));
                }
                RouteOp::Push => {
                    if stack.len() < self.config.max_stack_depth {
                        stack.push(Pose::from(&turtle));
                    } else {
                        warn!(depth = stack.len(), "route stack full, push dropped");
                    }
                }
                RouteOp::Pop => {
                    if let Some(pose) = stack.pop() {
                        turtle.position = pose.position;
                        turtle.facing = pose.facing;
                        route.poses.push(pose);
                    }
                }
                RouteOp::Ignore => {}
            }
        }

        debug!(
            turtle = start.id,
            poses = route.poses.len(),
            "route replayed"
        );
        route
    }
}
