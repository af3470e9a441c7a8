use bevy::prelude::*;
use shared::{
    CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_START, CAMERA_TARGET, FOG_END, FOG_START,
    ORBIT_RADIANS_PER_PIXEL, Orbit, PanDirection, PanTween, SKY_COLOR,
};

use crate::transform::from_na_vec3;

/// Pan the camera one step.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanRequested(pub PanDirection);

/// Mouse orbit input for one frame: drag in pixels (screen Y down), scroll in wheel steps.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct OrbitRequested {
    pub drag: Vec2,
    pub scroll: f32,
}

/// The pan in progress, if any.
#[derive(Component, Default)]
pub struct CameraPan(Option<PanTween>);

/// Where the camera sits around its look-at target. The `Transform` is derived from it.
#[derive(Component)]
pub struct CameraOrbit(Orbit);

pub(super) fn plugin(app: &mut App) {
    app.add_message::<PanRequested>();
    app.add_message::<OrbitRequested>();
    app.insert_resource(ClearColor(sky_color()));
    app.add_systems(Startup, add_camera);
    app.add_systems(Update, (start_pan, advance_pan, orbit_camera, place_camera).chain());
}

pub fn sky_color() -> Color {
    let [r, g, b] = SKY_COLOR;
    Color::srgb_u8(r, g, b)
}

fn add_camera(mut commands: Commands) {
    let orbit = Orbit::from_position(CAMERA_START.into(), CAMERA_TARGET.into());

    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        transform_from_orbit(&orbit),
        DistanceFog {
            color: sky_color(),
            falloff: FogFalloff::Linear {
                start: FOG_START,
                end: FOG_END,
            },
            ..default()
        },
        AmbientLight {
            color: Color::WHITE,
            brightness: 400.0,
            ..default()
        },
        CameraPan::default(),
        CameraOrbit(orbit),
    ));
}

fn transform_from_orbit(orbit: &Orbit) -> Transform {
    Transform::from_translation(from_na_vec3(orbit.position()))
        .looking_at(from_na_vec3(orbit.target()), Vec3::Y)
}

/// A new pan starts where the camera is now and replaces the one in progress.
fn start_pan(
    mut pans: MessageReader<PanRequested>,
    camera: Single<(&CameraOrbit, &mut CameraPan), With<Camera3d>>,
) {
    let (orbit, mut pan) = camera.into_inner();
    for PanRequested(direction) in pans.read() {
        let position = orbit.0.position();
        pan.0 = Some(PanTween::step(position, orbit.0.target() - position, *direction));
    }
}

/// Pans carry the orbit target along, so dragging afterwards circles the new spot.
fn advance_pan(
    time: Res<Time>,
    camera: Single<(&mut CameraOrbit, &mut CameraPan), With<Camera3d>>,
) {
    let (mut orbit, mut pan) = camera.into_inner();
    let Some(tween) = pan.0.as_mut() else {
        return;
    };

    let before = tween.position();
    let after = tween.advance(time.delta_secs());
    orbit.0.translate(after - before);
    if tween.is_finished() {
        pan.0 = None;
    }
}

fn orbit_camera(mut orbits: MessageReader<OrbitRequested>, mut camera: Single<&mut CameraOrbit>) {
    for OrbitRequested { drag, scroll } in orbits.read() {
        // Dragging right swings the camera left, dragging down raises it.
        camera.0.rotate(-drag.x * ORBIT_RADIANS_PER_PIXEL, drag.y * ORBIT_RADIANS_PER_PIXEL);
        camera.0.zoom(*scroll);
    }
}

fn place_camera(mut cameras: Query<(&CameraOrbit, &mut Transform), Changed<CameraOrbit>>) {
    for (orbit, mut transform) in &mut cameras {
        *transform = transform_from_orbit(&orbit.0);
    }
}
