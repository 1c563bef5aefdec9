use rill_engine::{CellKind, Engine, EngineCore, EngineSettings};

#[test]
fn pour_and_settle_smoke() {
    let mut core = EngineCore::new(EngineSettings {
        width: 64,
        height: 32,
        gravity: 0.1,
        seed: 2024,
        ..EngineSettings::default()
    })
    .unwrap();

    // A shelf with a gap, then a splash of water above it.
    for x in 10..40 {
        core.paint_cell(x, 20, CellKind::Solid).unwrap();
    }
    core.paint_area(20, 8, 3, CellKind::Water);
    core.paint_area(34, 5, 2, CellKind::Water);

    let mass = |core: &EngineCore| -> usize {
        let mut count = core.particle_count();
        for y in 0..32 {
            for x in 0..64 {
                if core.kind(x, y).unwrap() == CellKind::Water {
                    count += 1;
                }
            }
        }
        count
    };
    let start = mass(&core);
    assert!(start > 0);

    for _ in 0..300 {
        core.step();
    }

    // Sealed world: whatever splashed around is still here.
    assert_eq!(mass(&core), start);

    // Ring intact, drift signs sane everywhere.
    for x in 0..64 {
        assert_eq!(core.kind(x, 0).unwrap(), CellKind::Solid);
        assert_eq!(core.kind(x, 31).unwrap(), CellKind::Solid);
    }
    for y in 0..32 {
        assert_eq!(core.kind(0, y).unwrap(), CellKind::Solid);
        assert_eq!(core.kind(63, y).unwrap(), CellKind::Solid);
        for x in 0..64 {
            let sign = core.velocity(x, y).unwrap();
            assert!((-1..=1).contains(&sign));
            if core.kind(x, y).unwrap() != CellKind::Water {
                assert_eq!(sign, 0);
            }
        }
    }
}

#[test]
fn perf_smoke_step() {
    let mut engine = Engine::new(128, 64).unwrap();
    engine.enable_perf_metrics(true);
    engine.paint_area(40, 20, 6, rill_engine::KIND_WATER).unwrap();

    engine.step();

    let stats = engine.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.grid_size(), 128 * 64);
    assert!(stats.cells_processed() > 0);
}

#[test]
fn facade_round_trip() {
    let mut engine =
        Engine::with_settings(r#"{"width":32,"height":24,"gravity":0.1,"seed":99}"#).unwrap();
    assert_eq!(engine.width(), 32);
    assert_eq!(engine.height(), 24);

    engine.paint(10, 10, rill_engine::KIND_WATER).unwrap();
    assert_eq!(engine.cell_at(10, 10).unwrap(), rill_engine::KIND_WATER);

    engine.step();
    assert_eq!(engine.frame(), 1);

    // The freshly detached droplet shows up in the render snapshot.
    assert_eq!(engine.particle_count(), 1);
    let positions = engine.particle_positions();
    assert_eq!(positions.len(), 2);
    assert_eq!(positions[0], 10.0);
    assert_eq!(positions[1], 10.0);
}
