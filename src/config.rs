//! Global configuration constants for the Tumble simulator.

/// Default gravitational acceleration magnitude (Y-up, pulls along -Y).
pub const DEFAULT_GRAVITY: f64 = 9.8;

/// Fraction of the approaching normal velocity reflected by an impact.
pub const DEFAULT_RESTITUTION: f64 = 0.2;

/// Default damping applied to linear velocity.
pub const DEFAULT_LINEAR_DAMPING: f64 = 0.002;

/// Default damping applied to angular velocity.
pub const DEFAULT_ANGULAR_DAMPING: f64 = 0.001;

/// Smallest sub-step interval the step driver may bisect down to (in seconds).
pub const DEFAULT_TIME_EPSILON: f64 = 0.00001;

/// Half-width of the contact band around the floor plane.
pub const DEFAULT_DEPTH_EPSILON: f64 = 0.001;

/// Default Coulomb static friction coefficient.
pub const DEFAULT_STATIC_FRICTION: f64 = 0.5;

/// Default Coulomb dynamic friction coefficient.
pub const DEFAULT_DYNAMIC_FRICTION: f64 = 0.3;

/// Resolve/detect rounds performed on one candidate before giving up.
pub const MAX_RESOLUTION_ITERATIONS: u32 = 100;

/// Default floor height (the floor plane sits at `y = -height`).
pub const DEFAULT_FLOOR_HEIGHT: f64 = 5.0;

/// Default spring constant used by [`crate::dynamics::forces::AnchorSpring`].
pub const DEFAULT_ANCHOR_STIFFNESS: f64 = 10.0;

/// Default damping constant used by [`crate::dynamics::forces::AnchorSpring`].
pub const DEFAULT_ANCHOR_DAMPING: f64 = 10.0;

/// Beyond this distance an anchor drags the body's center instead of pulling a vertex.
pub const DEFAULT_ANCHOR_REACH: f64 = 10.0;

/// Minimum gap kept between the floor and the lowest vertex after an anchor teleport.
pub const ANCHOR_TELEPORT_CLEARANCE: f64 = 0.5;
