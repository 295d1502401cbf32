//! Bevy 3D viewer for a rope [`Scenario`]
//!
//! Draws the collision sphere, one small sphere per particle and the rope
//! polyline through every particle position. Each rendered frame runs one
//! driver tick. Controls:
//! - `Space`  pause / resume
//! - `R`      reset the rope and pause
//! - `Escape` quit

use bevy::app::AppExit;
use bevy::math::primitives::Sphere;
use bevy::prelude::*;

use crate::simulation::scenario::Scenario;
use crate::simulation::vector::NVec3;

/// Component tagging each particle mesh with its index in rope order
#[derive(Component)]
struct ParticleIndex(pub usize);

const PARTICLE_RADIUS: f32 = 0.1;

/// The collision sphere is drawn this much smaller than its collision radius
/// so the rope does not visibly clip into it
const SPHERE_DRAW_INSET: f32 = 0.1;

/// Smallest radius a sphere mesh is drawn with
const MIN_DRAW_RADIUS: f32 = 0.02;

const ROPE_WIDTH: f32 = 2.0;
const ROPE_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);

/// Closest the camera gets to the rope plane, for short ropes
const MIN_CAMERA_DISTANCE: f32 = 5.0;

pub fn run_3d(scenario: Scenario) {
    info!(
        particles = scenario.simulator.particles().len(),
        "starting Bevy 3D rope viewer"
    );

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "R O P E   S I M U L A T I O N".into(),
                resolution: (1280.0, 720.0).into(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_3d)
        .add_systems(
            Update,
            (handle_keys, physics_step_3d, sync_transforms_3d, draw_rope).chain(),
        )
        .run();
}

/// Collision sphere drawn slightly inside its radius, never degenerate
fn sphere_draw_radius(radius: f64) -> f32 {
    (radius as f32 - SPHERE_DRAW_INSET).max(MIN_DRAW_RADIUS)
}

fn to_vec3(v: NVec3) -> Vec3 {
    Vec3::new(v.x as f32, v.y as f32, v.z as f32)
}

/// Startup system: camera, light, collision sphere and one mesh per particle
fn setup_3d(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut gizmo_store: ResMut<GizmoConfigStore>,
    scenario: Res<Scenario>,
) {
    let sim = &scenario.simulator;
    let camera_distance = (sim.layout().length as f32 * 0.5).max(MIN_CAMERA_DISTANCE);

    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.2, 0.2, 0.4)),
            ..Default::default()
        },
        projection: Projection::Perspective(PerspectiveProjection {
            fov: 80.0_f32.to_radians(),
            ..Default::default()
        }),
        transform: Transform::from_xyz(0.0, 0.0, camera_distance).looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });

    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 2_000_000.0,
            range: 100.0,
            ..Default::default()
        },
        transform: Transform::from_xyz(-4.0, 6.0, camera_distance),
        ..Default::default()
    });

    let sphere = sim.sphere();
    commands.spawn(PbrBundle {
        mesh: meshes.add(Sphere::new(sphere_draw_radius(sphere.radius)).mesh()),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 1.0, 0.0),
            ..Default::default()
        }),
        transform: Transform::from_translation(to_vec3(sphere.center)),
        ..Default::default()
    });

    let particle_mesh = meshes.add(Sphere::new(PARTICLE_RADIUS).mesh());
    let particle_material = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.0, 0.0),
        ..Default::default()
    });
    for (i, position) in sim.positions().enumerate() {
        commands.spawn((
            PbrBundle {
                mesh: particle_mesh.clone(),
                material: particle_material.clone(),
                transform: Transform::from_translation(to_vec3(position)),
                ..Default::default()
            },
            ParticleIndex(i),
        ));
    }

    let (config, _) = gizmo_store.config_mut::<DefaultGizmoConfigGroup>();
    config.line_width = ROPE_WIDTH;
}

fn handle_keys(
    keys: Res<ButtonInput<KeyCode>>,
    mut scenario: ResMut<Scenario>,
    mut exit: EventWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::Space) {
        scenario.toggle_pause();
        info!(paused = scenario.engine.paused, "pause toggled");
    }
    if keys.just_pressed(KeyCode::KeyR) {
        scenario.reset();
        info!("rope reset");
    }
    if keys.just_pressed(KeyCode::Escape) {
        exit.send(AppExit::Success);
    }
}

/// Per-frame physics: one fixed step unless paused
fn physics_step_3d(mut scenario: ResMut<Scenario>) {
    scenario.tick();
}

fn sync_transforms_3d(scenario: Res<Scenario>, mut query: Query<(&ParticleIndex, &mut Transform)>) {
    let particles = scenario.simulator.particles();
    for (ParticleIndex(i), mut transform) in &mut query {
        if let Some(p) = particles.get(*i) {
            transform.translation = to_vec3(p.position);
        }
    }
}

fn draw_rope(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    gizmos.linestrip(scenario.simulator.positions().map(to_vec3), ROPE_COLOR);
}
