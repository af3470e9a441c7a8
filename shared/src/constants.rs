/// Fixed physics sub-step length in seconds.
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;

/// Maximum number of fixed sub-steps the physics world runs per frame.
///
/// Frame time the cap cannot consume is dropped rather than carried over, so a
/// long hitch slows the simulation down instead of making it spiral.
pub const MAX_SUBSTEPS: u32 = 3;

/// World gravity (units per second squared).
///
/// The Z component tilts gravity slightly toward -Z, so props keep drifting
/// after they land unless friction holds them.
pub const GRAVITY: [f32; 3] = [0.0, -20.0, -9.0];

/// Typical object size handed to rapier as `length_unit`.
///
/// The scene is authored in centimeter-like units (cubes are 50 wide), so the
/// solver tolerances are scaled up to match.
pub const PHYSICS_LENGTH_UNIT: f32 = 50.0;

/// Ground plane edge length (render only; the collider is an infinite plane).
pub const GROUND_SIZE: f32 = 3000.0;

/// Segments per ground edge.
pub const GROUND_SEGMENTS: u32 = 100;

/// Number of cubes scattered over the ground at startup.
pub const CUBE_COUNT: usize = 1000;

/// Half of a cube's edge length.
pub const CUBE_HALF_EXTENT: f32 = 25.0;

/// Mass of each scattered cube.
pub const CUBE_MASS: f32 = 1.0;

/// Cubes spawn with x and z in `[-CUBE_SPREAD, CUBE_SPREAD)`.
pub const CUBE_SPREAD: f32 = 1500.0;

/// Lowest cube spawn height.
pub const CUBE_MIN_HEIGHT: f32 = 10.0;

/// Cube spawn heights span `[CUBE_MIN_HEIGHT, CUBE_MIN_HEIGHT + CUBE_HEIGHT_RANGE)`.
pub const CUBE_HEIGHT_RANGE: f32 = 1000.0;

/// Half extents of the kinematic box that stands in for the character.
pub const CHARACTER_HALF_EXTENTS: [f32; 3] = [45.0, 100.0, 45.0];

/// Directory, relative to the asset root, that holds the character models.
pub const ASSET_DIR: &str = "models";

/// File extension of the character models.
pub const ASSET_EXTENSION: &str = "glb";

/// Every character animation the viewer can show, in selector order.
pub const ASSETS: [&str; 6] = [
    "Breakdance 1990",
    "Breakdance Ending 1",
    "Running",
    "Caminar",
    "Correr",
    "Detenerse",
];

/// Character loaded on startup.
pub const DEFAULT_ASSET: &str = "Breakdance Ending 1";

/// Initial camera position.
pub const CAMERA_START: [f32; 3] = [100.0, 200.0, 300.0];

/// Point the camera looks at on startup.
pub const CAMERA_TARGET: [f32; 3] = [0.0, 100.0, 0.0];

/// Vertical field of view of the camera, in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 45.0;

/// Camera near/far clip planes.
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 2000.0;

/// Distance a single arrow-key press moves the camera.
pub const PAN_DISTANCE: f32 = 50.0;

/// Seconds a camera pan takes to complete.
pub const PAN_DURATION_SECS: f32 = 0.3;

/// Radians of orbit per pixel of mouse drag.
pub const ORBIT_RADIANS_PER_PIXEL: f32 = 0.005;

/// Distance scale per wheel step; below one so scrolling up moves closer.
pub const ORBIT_ZOOM_FACTOR: f32 = 0.95;

/// Closest and farthest the orbit camera gets to its target.
pub const ORBIT_MIN_DISTANCE: f32 = 10.0;
pub const ORBIT_MAX_DISTANCE: f32 = 1500.0;

/// Fog starts and becomes opaque at these camera distances.
pub const FOG_START: f32 = 200.0;
pub const FOG_END: f32 = 1000.0;

/// Sky color, also used for fog (`0xadd8e6`).
pub const SKY_COLOR: [u8; 3] = [0xad, 0xd8, 0xe6];

/// Edge length and cell count of the ground grid overlay.
pub const GRID_SIZE: f32 = 1000.0;
pub const GRID_DIVISIONS: u32 = 20;

/// Grid center lines, dark green (`0x006400`).
pub const GRID_CENTER_COLOR: [u8; 3] = [0x00, 0x64, 0x00];

/// Remaining grid lines, lime green (`0x32cd32`).
pub const GRID_LINE_COLOR: [u8; 3] = [0x32, 0xcd, 0x32];
