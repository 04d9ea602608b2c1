//! End-to-end editing scenarios through the session API.

use std::collections::{HashMap, HashSet};

use glam::{DVec3, IVec3};

use crate::block::ids;
use crate::function::RegionFunction;
use crate::mask::RegionMask;
use crate::operation::complete;
use crate::region::{CuboidRegion, EllipsoidRegion};
use crate::visitor::RecursiveVisitor;
use crate::{Block, ChangeSet, EditConfig, EditSession, MemoryWorld, Region, Result, World};

fn stone() -> Block {
    Block::new(ids::STONE)
}

fn snapshot(world: &MemoryWorld) -> HashMap<IVec3, Block> {
    world.iter().map(|(p, b)| (*p, *b)).collect()
}

/// Fails the test if a cell is handed over twice.
#[derive(Default)]
struct VisitOnce {
    seen: HashSet<IVec3>,
}

impl RegionFunction for VisitOnce {
    fn apply(&mut self, _session: &mut EditSession<'_>, pos: IVec3) -> Result<bool> {
        assert!(self.seen.insert(pos), "{pos} visited twice");
        Ok(true)
    }
}

#[test]
fn test_hollow_sphere_symmetric_shell() {
    let mut world = MemoryWorld::new(63);
    let center = IVec3::new(0, 32, 0);
    {
        let mut session = EditSession::new(&mut world, EditConfig::default()).unwrap();
        session.make_sphere(center, &stone(), 5.0, false).unwrap();
    }

    let solid = EllipsoidRegion::sphere(center, 5.0);
    let cells = snapshot(&world);
    assert!(!cells.is_empty());
    for p in cells.keys() {
        let d = *p - center;
        for mirror in [IVec3::new(-d.x, d.y, d.z), IVec3::new(d.x, -d.y, d.z), IVec3::new(d.x, d.y, -d.z)] {
            assert!(cells.contains_key(&(center + mirror)), "no mirror for {p}");
        }
        let away = |v: i32| if v < 0 { -1 } else { 1 };
        let outward = [
            *p + IVec3::new(away(d.x), 0, 0),
            *p + IVec3::new(0, away(d.y), 0),
            *p + IVec3::new(0, 0, away(d.z)),
        ];
        assert!(outward.iter().any(|n| !solid.contains(*n)), "{p} is interior");
    }
}

#[test]
fn test_draw_line_four_points() {
    let mut world = MemoryWorld::new(15);
    let affected = EditSession::new(&mut world, EditConfig::default())
        .unwrap()
        .draw_line(&stone(), IVec3::ZERO, IVec3::new(3, 0, 0), 0.0, true)
        .unwrap();
    assert_eq!(affected, 4);
    assert_eq!(world.len(), 4);
}

#[test]
fn test_change_limit_stops_sixth_write() {
    let mut world = MemoryWorld::new(15);
    {
        let mut session = EditSession::new(&mut world, EditConfig::with_limit(5)).unwrap();
        for x in 0..5 {
            assert!(session.set_block(IVec3::new(x, 0, 0), stone()).unwrap());
        }
        let err = session.set_block(IVec3::new(5, 0, 0), stone()).unwrap_err();
        assert!(err.is_change_limit());
        for x in 6..10 {
            assert!(session.set_block(IVec3::new(x, 0, 0), stone()).is_err());
        }
        assert_eq!(session.block_change_count(), 5);
    }
    assert_eq!(world.len(), 5);
}

#[test]
fn test_fill_xz_radius_zero() {
    let mut world = MemoryWorld::new(15);
    world.fill(IVec3::new(-3, 0, -3), IVec3::new(3, 0, 3), stone());
    let affected = EditSession::new(&mut world, EditConfig::default())
        .unwrap()
        .fill_xz(IVec3::new(0, 1, 0), &Block::new(ids::WATER), 0.0, 1, true)
        .unwrap();
    assert_eq!(affected, 1);
    assert_eq!(world.block_at(IVec3::new(0, 1, 0)).id, ids::WATER);
}

#[test]
fn test_flood_fill_visits_each_cell_once() {
    let mut world = MemoryWorld::new(15);
    let mut session = EditSession::new(&mut world, EditConfig::default()).unwrap();
    let region = CuboidRegion::new(IVec3::ZERO, IVec3::splat(3));
    let mut visitor = RecursiveVisitor::new(RegionMask::new(region), VisitOnce::default());
    visitor.visit(IVec3::ZERO);
    visitor.visit(IVec3::ZERO);
    visitor.visit(IVec3::splat(3));
    complete(&mut visitor, &mut session).unwrap();
    assert_eq!(visitor.function().seen.len(), 64);
    assert_eq!(visitor.affected(), 64);
}

#[test]
fn test_distribution_sums_to_volume() {
    let mut world = MemoryWorld::new(31);
    world.fill(IVec3::ZERO, IVec3::new(4, 1, 4), stone());
    world.fill(IVec3::new(0, 2, 0), IVec3::new(4, 2, 1), Block::new(ids::DIRT));
    let session = EditSession::new(&mut world, EditConfig::default()).unwrap();

    let cuboid: Region = CuboidRegion::new(IVec3::ZERO, IVec3::new(4, 5, 4)).into();
    let distribution = session.block_distribution(&cuboid);
    assert_eq!(distribution.iter().map(|c| c.amount).sum::<usize>(), cuboid.volume());
    assert_eq!(distribution.last().map(|c| c.id), Some(ids::AIR));
    assert!(distribution.windows(2).all(|w| w[0].amount <= w[1].amount));

    let sphere: Region = EllipsoidRegion::sphere(IVec3::new(2, 2, 2), 2.0).into();
    let distribution = session.block_distribution_with_data(&sphere);
    assert_eq!(distribution.iter().map(|c| c.amount).sum::<usize>(), sphere.volume());
}

#[test]
fn test_undo_redo_undo_round_trip() {
    let mut world = MemoryWorld::new(63);
    world.fill(IVec3::new(-6, 0, -6), IVec3::new(6, 20, 6), Block::new(ids::DIRT));
    let before = snapshot(&world);

    let history = {
        let mut session = EditSession::new(&mut world, EditConfig::default()).unwrap();
        session.make_sphere(IVec3::new(0, 20, 0), &stone(), 4.0, true).unwrap();
        session.draw_line(&Block::new(ids::GLASS), IVec3::ZERO, IVec3::new(0, 30, 0), 0.0, true).unwrap();
        session.into_change_set()
    };
    let after = snapshot(&world);
    assert_ne!(before, after);

    let replay = |world: &mut MemoryWorld, undo: bool| {
        let mut target = EditSession::new(world, EditConfig::default()).unwrap();
        if undo {
            history.undo(&mut target);
        } else {
            history.redo(&mut target);
        }
        assert_eq!(target.block_change_count(), 0);
    };

    replay(&mut world, true);
    assert_eq!(snapshot(&world), before);
    replay(&mut world, false);
    assert_eq!(snapshot(&world), after);
    replay(&mut world, true);
    assert_eq!(snapshot(&world), before);
}

#[test]
fn test_history_survives_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    let mut world = MemoryWorld::new(31);
    {
        let mut session = EditSession::new(&mut world, EditConfig::default()).unwrap();
        session.make_pyramid(IVec3::ZERO, &stone(), 4, true).unwrap();
        session.change_set().save(&path).unwrap();
    }
    assert!(!world.is_empty());

    let history = ChangeSet::load(&path).unwrap();
    let mut target = EditSession::new(&mut world, EditConfig::default()).unwrap();
    history.undo(&mut target);
    drop(target);
    assert!(world.is_empty());
}

#[test]
fn test_overlapping_move_keeps_order() {
    let line = [ids::STONE, ids::DIRT, ids::GLASS, ids::SAND, ids::BRICK];
    let mut world = MemoryWorld::new(15);
    for (x, id) in line.iter().enumerate() {
        world.put(IVec3::new(x as i32, 0, 0), Block::new(*id));
    }

    let region: Region = CuboidRegion::new(IVec3::ZERO, IVec3::new(4, 0, 0)).into();
    let moved = EditSession::new(&mut world, EditConfig::default())
        .unwrap()
        .move_region(&region, IVec3::X, 2, true, None)
        .unwrap();
    assert_eq!(moved, 5);

    assert!(world.block_at(IVec3::ZERO).is_air());
    assert!(world.block_at(IVec3::X).is_air());
    for (x, id) in line.iter().enumerate() {
        assert_eq!(world.block_at(IVec3::new(x as i32 + 2, 0, 0)).id, *id);
    }
    assert_eq!(world.len(), 5);
}

#[test]
fn test_deform_shifts_column() {
    let mut world = MemoryWorld::new(31);
    world.fill(IVec3::ZERO, IVec3::new(0, 3, 0), stone());
    let region: Region = CuboidRegion::new(IVec3::ZERO, IVec3::new(0, 7, 0)).into();
    EditSession::new(&mut world, EditConfig::default())
        .unwrap()
        .deform_region(&region, DVec3::ZERO, DVec3::ONE, "y = y - 4")
        .unwrap();
    for y in 0..4 {
        assert!(world.block_at(IVec3::new(0, y, 0)).is_air());
        assert_eq!(world.block_at(IVec3::new(0, y + 4, 0)).id, ids::STONE);
    }
}
