mod cradle;
mod fish;

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use log::info;

use arbor_engine::draw::DrawList;
use arbor_engine::logging::{LoggingConfig, init_logging};
use arbor_engine::paint::Color;
use arbor_engine::tree::NodeId;
use arbor_engine::{Scene, SceneConfig};

const DEFAULT_FRAMES: u64 = 180;
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// View-space points probed after the run (pointer positions).
const PROBES: [(f32, f32); 4] = [(0.0, 0.0), (0.35, -0.25), (-0.2, 0.3), (0.9, 0.9)];

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let frames = frame_budget()?;
    let config = SceneConfig::default()
        .with_viewport(820.0, 560.0)
        .with_dt_clamps(None, Some(Duration::from_millis(100)));
    let mut scene = Scene::with_config(config).context("failed to create scene")?;

    let root = scene.root();
    let tree = scene.tree_mut();
    let cradle = cradle::build(tree, root).context("failed to build cradle")?;
    tree.node_mut(cradle.top_bar)?.set_position((0.0, 0.4))?;
    info!(
        "studio: cradle with {} balls on {} wires",
        cradle.balls.len(),
        cradle.wires.len()
    );

    let big_fish = fish::build(tree, root, Color::BLACK).context("failed to build fish")?;
    tree.node_mut(big_fish)?.set_position((0.2, -0.55))?;
    tree.node_mut(big_fish)?.set_scale(0.4)?;

    let small_fish = fish::build(tree, big_fish, Color::ORANGE.faded(0.8))
        .context("failed to build fish")?;
    {
        let n = tree.node_mut(small_fish)?;
        n.set_position((0.5, -0.5))?;
        n.set_rotation(-30.0)?;
        n.set_scale(0.5)?;
    }
    tree.node_mut(big_fish)?
        .set_behavior(fish::Cruise { speed: 0.15, turn_rate: 20.0 });

    info!(
        "studio: scene built ({} nodes), running {frames} frames",
        scene.tree().node_count()
    );

    let mut list = DrawList::new();
    for frame in 0..frames {
        if frame == frames / 3 {
            scene.reshape(560.0, 820.0).context("resize failed")?;
            info!("studio: surface rotated to portrait");
        }
        if frame == frames / 2 {
            follow(&mut scene, big_fish)?;
        }

        let time = scene.draw(&mut list).context("frame failed")?;
        for id in [big_fish, small_fish] {
            fish::draw_eye(scene.tree(), id, &mut list, Color::DARK_GRAY)?;
        }

        if time.frame_index % 60 == 0 {
            info!(
                "studio: frame {} dt={:.4}s commands={}",
                time.frame_index,
                time.dt,
                list.len()
            );
        }
        thread::sleep(FRAME_INTERVAL);
    }

    probe(&scene)?;
    Ok(())
}

/// Reads `ARBOR_FRAMES`, falling back to the default run length.
fn frame_budget() -> Result<u64> {
    match std::env::var("ARBOR_FRAMES") {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("ARBOR_FRAMES must be a frame count, got {raw:?}")),
        Err(_) => Ok(DEFAULT_FRAMES),
    }
}

/// Moves the camera under `target`, keeping the current view, so the view
/// tracks the target from then on.
fn follow(scene: &mut Scene, target: NodeId) -> Result<()> {
    let camera = scene.camera();
    scene
        .tree_mut()
        .set_parent(camera, target)
        .context("failed to attach camera")?;
    info!("studio: camera {camera} now follows node {target}");
    Ok(())
}

fn probe(scene: &Scene) -> Result<()> {
    for (x, y) in PROBES {
        let world = scene.from_view(x, y)?;
        let hits = scene.collision(world)?;
        let names = hits
            .iter()
            .map(|&id| -> Result<String> {
                Ok(format!("{id}:{}", scene.tree().node(id)?.kind().name()))
            })
            .collect::<Result<Vec<_>>>()?;
        info!(
            "studio: view ({x}, {y}) -> world ({:.3}, {:.3}) hits [{}]",
            world.x,
            world.y,
            names.join(", ")
        );
    }
    Ok(())
}
