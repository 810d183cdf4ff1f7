//! Tactica Quickstart: a complete, minimal interaction loop.
//!
//! Demonstrates:
//!   1. Building a square board from a `GridConfig`
//!   2. Spawning units with multi-cell footprints
//!   3. Selecting a unit for movement and reading the highlight set
//!   4. Previewing the move cursor and committing a move
//!   5. Rotating in place, aiming an ability and listing its targets
//!   6. Turning the highlight set into overlay rectangles and outlines
//!
//! Run with:
//!   cargo run --example quickstart

use tactica_core::{Facing, Footprint, GridPos, Layer};
use tactica_engine::{Battlefield, GridConfig, InteractionMode};
use tactica_shape::{AimKind, AimShapeSpec, EffectKind, EffectShapeSpec, VerticalReach};

// ─── Board parameters ───────────────────────────────────────────

const WIDTH: u32 = 10;
const HEIGHT: u32 = 10;
const MOVE_RANGE: u32 = 3;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut board = Battlefield::new(&GridConfig::square(WIDTH, HEIGHT))?;

    let knight = board.spawn_unit(GridPos::new(1, 1), Footprint::UNIT, Facing::PosY, Layer::Ground)?;
    let wagon = board.spawn_unit(GridPos::new(3, 4), Footprint::new(2, 1), Facing::PosY, Layer::Ground)?;
    let bat = board.spawn_unit(GridPos::new(4, 2), Footprint::UNIT, Facing::NegX, Layer::Sky)?;
    println!("spawned {knight}, {wagon}, {bat}");

    // ─── Movement ───────────────────────────────────────────────

    board.select(knight, InteractionMode::Move { range: MOVE_RANGE })?;
    println!("{knight} can reach {} cells", board.highlighter().len());

    let target = GridPos::new(3, 1);
    if let Some(preview) = board.cursor(target) {
        println!("cursor at {target}: valid = {}", preview.valid);
    }
    let commit = board.try_commit_move(knight, target)?;
    println!(
        "moved {knight} to {} facing {:?}; walk to {:?}",
        commit.state.anchor, commit.state.facing, commit.motion.target
    );

    // ─── Rotation ───────────────────────────────────────────────

    match board.try_rotate(wagon, GridPos::new(1, 0)) {
        Ok(c) => println!(
            "{wagon} turned, footprint now {}x{}",
            c.state.footprint.width, c.state.footprint.height
        ),
        Err(reason) => println!("{wagon} cannot turn: {reason}"),
    }

    // ─── Abilities ──────────────────────────────────────────────

    let fireball = InteractionMode::Effect {
        aim: AimShapeSpec::new(AimKind::Radius, 4, 0, 0),
        effect: EffectShapeSpec::new(EffectKind::Circle, 1, 0).with_vertical(VerticalReach::All),
    };
    board.select(knight, fireball)?;
    let aim_at = GridPos::new(4, 2);
    let targets = board.effect_targets(aim_at);
    println!("fireball at {aim_at} hits {targets:?}");

    // ─── Overlay ────────────────────────────────────────────────

    let geometry = board.overlay().clone();
    println!(
        "aim overlay: {} rectangles, {} outline(s)",
        geometry.rects.len(),
        geometry.contours.len()
    );
    let mesh = board.overlay_mesh();
    println!("mesh: {} vertices, {} triangles", mesh.vertices.len(), mesh.triangle_count());

    println!("metrics: {:?}", board.metrics());
    Ok(())
}
