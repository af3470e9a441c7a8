use std::f32::consts::FRAC_PI_2;

use bevy::{light::CascadeShadowConfigBuilder, mesh::VertexAttributeValues, prelude::*};
use rand::Rng;
use shared::{
    BodyShape, CAMERA_FAR, CUBE_COUNT, CUBE_HALF_EXTENT, CUBE_MASS, GRID_CENTER_COLOR,
    GRID_DIVISIONS, GRID_LINE_COLOR, GRID_SIZE, ground_colors, ground_dimensions,
    jitter_vertices, scatter_cubes,
};

use crate::{
    physics::{Viewer, init_physics},
    transform::transform_from_pose,
};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(
        Startup,
        (spawn_ground, spawn_lights, spawn_cubes.after(init_physics)),
    );
    app.add_systems(Update, draw_grid);
}

fn spawn_ground(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut rng = rand::thread_rng();

    // The collider is the world's infinite plane; this is only what it looks like.
    commands.spawn((
        Name::new("ground"),
        Transform::default(),
        Mesh3d(meshes.add(ground_mesh(&mut rng))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            perceptual_roughness: 1.0,
            metallic: 0.0,
            double_sided: true,
            cull_mode: None,
            ..default()
        })),
    ));
}

/// Subdivided plane with jittered vertices and per-vertex colors, flat shaded.
fn ground_mesh<R: Rng + ?Sized>(rng: &mut R) -> Mesh {
    let (size, segments) = ground_dimensions();
    let mut mesh = Plane3d::default()
        .mesh()
        .size(size, size)
        .subdivisions(segments - 1)
        .build();

    if let Some(VertexAttributeValues::Float32x3(positions)) =
        mesh.attribute_mut(Mesh::ATTRIBUTE_POSITION)
    {
        jitter_vertices(rng, positions);
    }

    let colors: Vec<[f32; 4]> = ground_colors(rng, mesh.count_vertices())
        .into_iter()
        .map(|c| {
            Color::hsl(c.hue * 360.0, c.saturation, c.lightness)
                .to_linear()
                .to_f32_array()
        })
        .collect();
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);

    mesh.duplicate_vertices();
    mesh.compute_flat_normals();
    mesh
}

fn spawn_lights(mut commands: Commands) {
    commands.spawn((
        Name::new("sun"),
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        CascadeShadowConfigBuilder {
            first_cascade_far_bound: 300.0,
            maximum_distance: CAMERA_FAR,
            ..default()
        }
        .build(),
        Transform::from_xyz(0.0, 200.0, 100.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn spawn_cubes(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut viewer: ResMut<Viewer>,
) -> Result {
    let mut rng = rand::thread_rng();
    let mesh = meshes.add(Cuboid::from_length(CUBE_HALF_EXTENT * 2.0));
    let shape = BodyShape::cuboid(CUBE_HALF_EXTENT, CUBE_HALF_EXTENT, CUBE_HALF_EXTENT);

    for placement in scatter_cubes(&mut rng, CUBE_COUNT) {
        let [r, g, b] = placement.color;
        let entity = commands
            .spawn((
                Name::new("cube"),
                Mesh3d(mesh.clone()),
                MeshMaterial3d(materials.add(Color::srgb(r, g, b))),
                transform_from_pose(placement.pose),
            ))
            .id();
        viewer.add_prop(entity, placement.pose, &shape, CUBE_MASS)?;
    }

    info!("scattered {CUBE_COUNT} cubes");
    Ok(())
}

fn draw_grid(mut gizmos: Gizmos) {
    let [r, g, b] = GRID_LINE_COLOR;
    // `grid` draws in the XY plane; lay it flat on the ground.
    gizmos.grid(
        Isometry3d::from_rotation(Quat::from_rotation_x(FRAC_PI_2)),
        UVec2::splat(GRID_DIVISIONS),
        Vec2::splat(GRID_SIZE / GRID_DIVISIONS as f32),
        Color::srgb_u8(r, g, b),
    );

    // Center lines go on top, slightly raised so they win the depth test.
    let [r, g, b] = GRID_CENTER_COLOR;
    let center = Color::srgb_u8(r, g, b);
    let half = GRID_SIZE / 2.0;
    gizmos.line(Vec3::new(-half, 0.01, 0.0), Vec3::new(half, 0.01, 0.0), center);
    gizmos.line(Vec3::new(0.0, 0.01, -half), Vec3::new(0.0, 0.01, half), center);
}
