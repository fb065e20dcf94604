use std::f32::consts::TAU;

use anyhow::Result;
use log::warn;

use arbor_engine::coords::Vec2;
use arbor_engine::paint::Color;
use arbor_engine::tree::{Behavior, CircleNode, LineNode, NodeId, SceneTree};

const NUM_BALLS: usize = 7;

const START_X: f32 = -0.5;
const END_X: f32 = 0.5;
const START_Y: f32 = 0.25;
const END_Y: f32 = -0.25;
const WIDTH: f32 = END_X - START_X;

const WIRE_START_X: f32 = START_X + WIDTH * 0.1;
const WIRE_END_X: f32 = END_X - WIDTH * 0.1;
const WIRE_LENGTH: f32 = START_Y - (END_Y + 0.1);
const WIRE_SPAN: f32 = WIRE_END_X - WIRE_START_X;

const BALL_RADIUS: f32 = 0.065;

/// Angle the outermost wire is pulled back to, in degrees.
pub const PULL_ANGLE: f32 = 44.0;

/// Node ids of a built cradle.
#[derive(Debug, Clone)]
pub struct Cradle {
    pub top_bar: NodeId,
    pub wires: Vec<NodeId>,
    pub balls: Vec<NodeId>,
}

/// Builds a Newton's cradle under `parent`: a top bar, two side bars and
/// seven wires with a ball each. The last wire starts pulled back.
pub fn build(tree: &mut SceneTree, parent: NodeId) -> Result<Cradle> {
    let top_bar = tree.spawn(
        parent,
        LineNode::new(Vec2::new(START_X, START_Y), Vec2::new(END_X, START_Y), Color::ORANGE)
            .with_width(5.0),
    )?;

    let mut wires = Vec::with_capacity(NUM_BALLS);
    let mut balls = Vec::with_capacity(NUM_BALLS);
    for i in 0..NUM_BALLS {
        let offset = i as f32 * (WIRE_SPAN / NUM_BALLS as f32);
        let x = WIRE_START_X + offset + offset / NUM_BALLS as f32;

        let wire = tree.spawn(
            top_bar,
            LineNode::new(Vec2::new(0.0, -WIRE_LENGTH), Vec2::zero(), Color::DARK_GRAY),
        )?;
        tree.node_mut(wire)?.translate(x, START_Y)?;

        let ball = tree.spawn(
            wire,
            CircleNode::new(BALL_RADIUS, Some(Color::GRAY), Some(Color::DARK_GRAY))?,
        )?;
        tree.node_mut(ball)?.translate(0.0, -WIRE_LENGTH)?;

        wires.push(wire);
        balls.push(ball);
    }

    if let (Some(&first), Some(&last)) = (wires.first(), wires.last()) {
        tree.node_mut(last)?.rotate(PULL_ANGLE)?;
        tree.node_mut(last)?.set_behavior(Swing::new(PULL_ANGLE, 1.2, SwingHalf::Leading));
        tree.node_mut(first)?.set_behavior(Swing::new(PULL_ANGLE, 1.2, SwingHalf::Trailing));
    }

    for x in [START_X, END_X] {
        tree.spawn(
            top_bar,
            LineNode::new(Vec2::new(x, START_Y), Vec2::new(x, END_Y), Color::ORANGE).with_width(3.0),
        )?;
    }

    Ok(Cradle { top_bar, wires, balls })
}

/// Which half of the cycle an outer wire is lifted in.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SwingHalf {
    Leading,
    Trailing,
}

/// Swings an outer cradle wire out and back during its half of the cycle,
/// resting at zero for the other half.
#[derive(Debug, Clone)]
pub struct Swing {
    amplitude: f32,
    period: f32,
    half: SwingHalf,
    elapsed: f32,
}

impl Swing {
    pub fn new(amplitude: f32, period: f32, half: SwingHalf) -> Self {
        Self { amplitude, period, half, elapsed: 0.0 }
    }

    fn angle(&self) -> f32 {
        let c = (TAU * self.elapsed / self.period).cos();
        match self.half {
            SwingHalf::Leading if c > 0.0 => self.amplitude * c,
            SwingHalf::Trailing if c < 0.0 => self.amplitude * c,
            _ => 0.0,
        }
    }
}

impl Behavior for Swing {
    fn update(&mut self, node: NodeId, tree: &mut SceneTree, dt: f32) {
        self.elapsed = (self.elapsed + dt) % self.period;
        let angle = self.angle();
        match tree.node_mut(node) {
            Ok(n) => {
                if let Err(err) = n.set_rotation(angle) {
                    warn!("cradle: wire {node}: {err}");
                }
            }
            Err(err) => warn!("cradle: {err}"),
        }
    }
}
