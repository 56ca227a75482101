use swarm_sim::input::parse_particles;
use swarm_sim::sim::generate_cloud;
use swarm_sim::{InitialConditions, ParticleSystem, Settings, Vec3, run_swarm};

fn ic(p: [i64; 3], v: [i64; 3], a: [i64; 3]) -> InitialConditions {
    InitialConditions::new(Vec3::from(p), Vec3::from(v), Vec3::from(a))
}

const DRIFT_EXAMPLE: &str = "\
p=<3,0,0>, v=<2,0,0>, a=<-1,0,0>
p=<4,0,0>, v=<0,0,0>, a=<-2,0,0>
";

const COLLISION_EXAMPLE: &str = "\
p=<-6,0,0>, v=<3,0,0>, a=<0,0,0>
p=<-4,0,0>, v=<2,0,0>, a=<0,0,0>
p=<-2,0,0>, v=<1,0,0>, a=<0,0,0>
p=<3,0,0>, v=<-1,0,0>, a=<0,0,0>
";

/// The particle with the smaller deceleration stays nearer the origin in the long run
#[test]
fn drift_example_long_run_closest() -> swarm_sim::Result<()> {
    let mut system = ParticleSystem::new(parse_particles(DRIFT_EXAMPLE)?);

    system.update(3, false);
    assert_eq!(system.particles()[0].position(), Vec3::new(3, 0, 0));
    assert_eq!(system.particles()[1].position(), Vec3::new(-8, 0, 0));
    assert_eq!(system.closest_to_origin().map(|p| p.id()), Some(0));

    system.reset();
    system.update(1_000_000, false);
    assert_eq!(system.elapsed(), 1_000_000);
    assert_eq!(system.closest_to_origin().map(|p| p.id()), Some(0));
    // Asking again without stepping gives the same answer
    assert_eq!(system.closest_to_origin().map(|p| p.id()), Some(0));
    Ok(())
}

/// One long jump lands exactly where a million unit steps would
#[test]
fn drift_example_jump_matches_unit_steps() -> swarm_sim::Result<()> {
    let conditions = parse_particles(DRIFT_EXAMPLE)?;
    let mut jumped = ParticleSystem::new(conditions.clone());
    let mut stepped = ParticleSystem::new(conditions);

    jumped.update(10_000, false);
    for _ in 0..10_000 {
        stepped.update(1, false);
    }
    assert_eq!(jumped.particles(), stepped.particles());
    Ok(())
}

/// Three particles meet at the origin at t=2; the fourth is elsewhere
#[test]
fn collision_example_one_survivor() -> swarm_sim::Result<()> {
    let mut system = ParticleSystem::new(parse_particles(COLLISION_EXAMPLE)?);

    system.update(1, true);
    assert_eq!(system.survivor_count(), 4);
    system.update(1, true);
    assert_eq!(system.survivor_count(), 1);
    assert_eq!(system.particles()[0].id(), 3);

    system.update(10, true);
    assert_eq!(system.survivor_count(), 1);
    Ok(())
}

/// Two separate pairs collide on the same step; the isolated particle survives
#[test]
fn two_pairs_collide_together() {
    let mut system = ParticleSystem::new(vec![
        ic([-2, 0, 0], [1, 0, 0], [0, 0, 0]),
        ic([0, 10, 0], [0, 1, 0], [0, 0, 0]),
        ic([2, 0, 0], [-1, 0, 0], [0, 0, 0]),
        ic([0, 14, 0], [0, -1, 0], [0, 0, 0]),
        ic([100, 100, 100], [0, 0, 0], [0, 0, 0]),
    ]);

    system.update(1, false);
    system.update(1, false);
    let groups = system.collision_groups();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].position, Vec3::ZERO);
    assert_eq!(groups[0].ids, vec![0, 2]);
    assert_eq!(groups[1].position, Vec3::new(0, 12, 0));
    assert_eq!(groups[1].ids, vec![1, 3]);

    system.reset();
    system.update(3, true);
    assert_eq!(system.survivor_count(), 1);
    assert_eq!(system.particles()[0].id(), 4);
}

/// Particles sharing velocity and acceleration keep their offsets forever
#[test]
fn parallel_swarm_never_collides() {
    let conditions: Vec<InitialConditions> = (0..20)
        .map(|i| ic([i, -i, 2 * i], [1, 1, 1], [0, 0, 1]))
        .collect();
    let mut system = ParticleSystem::new(conditions);
    system.update(1_000, true);
    assert_eq!(system.survivor_count(), 20);
}

#[test]
fn run_swarm_on_examples() -> swarm_sim::Result<()> {
    let settings = Settings::default();

    let drift = run_swarm(parse_particles(DRIFT_EXAMPLE)?, &settings);
    assert_eq!(drift.closest, Some(0));
    assert_eq!(drift.survivors, 2);

    let collide = run_swarm(parse_particles(COLLISION_EXAMPLE)?, &settings);
    assert_eq!(collide.survivors, 1);
    Ok(())
}

/// A seeded cloud gives the same answers every time, and collisions never add particles
#[test]
fn random_cloud_is_reproducible() {
    let mut settings = Settings::default();
    settings.collision_steps = 100;

    let first = run_swarm(generate_cloud(42, 300, 20), &settings);
    let second = run_swarm(generate_cloud(42, 300, 20), &settings);
    assert_eq!(first, second);
    assert!(first.survivors <= 300);
    assert!(first.closest.is_some());
}
