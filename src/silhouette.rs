//! Hand-authored silhouette outlines.
//!
//! Coordinates live in `[-1, 1]` with y pointing down (negative y is the
//! top of the figure). Each table is an ordered, closed loop; the last point
//! connects back to the first. Order is clockwise on screen.

pub const HOUSE: &[(f32, f32)] = &[
    (0.0, -0.95),
    (0.45, -0.553),
    (0.45, -0.85),
    (0.62, -0.85),
    (0.62, -0.403),
    (0.85, -0.2),
    (0.7, -0.2),
    (0.7, 0.9),
    (-0.7, 0.9),
    (-0.7, -0.2),
    (-0.85, -0.2),
];

pub const SKULL: &[(f32, f32)] = &[
    (0.0, -0.95),
    (0.45, -0.85),
    (0.8, -0.55),
    (0.9, -0.1),
    (0.8, 0.3),
    (0.55, 0.45),
    (0.5, 0.8),
    (0.3, 0.9),
    (0.2, 0.75),
    (0.1, 0.9),
    (0.0, 0.75),
    (-0.1, 0.9),
    (-0.2, 0.75),
    (-0.3, 0.9),
    (-0.5, 0.8),
    (-0.55, 0.45),
    (-0.8, 0.3),
    (-0.9, -0.1),
    (-0.8, -0.55),
    (-0.45, -0.85),
];

// Hook arcs share the centre (-0.3, -0.45): outer radius 0.45, inner 0.15.
pub const CANDY_CANE: &[(f32, f32)] = &[
    (-0.15, 0.95),
    (-0.15, -0.45),
    (-0.194, -0.556),
    (-0.3, -0.6),
    (-0.406, -0.556),
    (-0.45, -0.45),
    (-0.45, -0.1),
    (-0.75, -0.1),
    (-0.75, -0.45),
    (-0.618, -0.768),
    (-0.3, -0.9),
    (0.018, -0.768),
    (0.15, -0.45),
    (0.15, 0.95),
];

pub const TREE: &[(f32, f32)] = &[
    (0.0, -0.95),
    (0.35, -0.5),
    (0.2, -0.5),
    (0.6, -0.05),
    (0.4, -0.05),
    (0.85, 0.45),
    (0.15, 0.45),
    (0.15, 0.9),
    (-0.15, 0.9),
    (-0.15, 0.45),
    (-0.85, 0.45),
    (-0.4, -0.05),
    (-0.6, -0.05),
    (-0.2, -0.5),
    (-0.35, -0.5),
];

pub const GHOST: &[(f32, f32)] = &[
    (0.0, -0.95),
    (0.4, -0.85),
    (0.7, -0.55),
    (0.8, -0.1),
    (0.8, 0.9),
    (0.55, 0.65),
    (0.3, 0.9),
    (0.0, 0.65),
    (-0.3, 0.9),
    (-0.55, 0.65),
    (-0.8, 0.9),
    (-0.8, -0.1),
    (-0.7, -0.55),
    (-0.4, -0.85),
];

pub const PUMPKIN: &[(f32, f32)] = &[
    (-0.08, -0.95),
    (0.08, -0.95),
    (0.08, -0.7),
    (0.3, -0.78),
    (0.6, -0.7),
    (0.85, -0.4),
    (0.92, 0.0),
    (0.85, 0.4),
    (0.6, 0.7),
    (0.3, 0.78),
    (0.0, 0.72),
    (-0.3, 0.78),
    (-0.6, 0.7),
    (-0.85, 0.4),
    (-0.92, 0.0),
    (-0.85, -0.4),
    (-0.6, -0.7),
    (-0.3, -0.78),
    (-0.08, -0.7),
];

pub const HEART: &[(f32, f32)] = &[
    (0.0, -0.45),
    (0.2, -0.8),
    (0.5, -0.9),
    (0.8, -0.75),
    (0.92, -0.4),
    (0.8, 0.0),
    (0.45, 0.45),
    (0.0, 0.9),
    (-0.45, 0.45),
    (-0.8, 0.0),
    (-0.92, -0.4),
    (-0.8, -0.75),
    (-0.5, -0.9),
    (-0.2, -0.8),
];
