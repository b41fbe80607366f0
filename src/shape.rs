//! Boundary geometry: shape kinds and the vertex-loop generator.
//!
//! [`generate`] is a pure function of its inputs. The simulation calls it
//! once per step with the current rotation angle; nothing is cached.

use crate::error::SimulationError;
use crate::float::Float;
use crate::silhouette;
use crate::vec::Vec2;
use alloc::string::{String, ToString};
use alloc::vec::Vec as AllocVec;
use core::fmt;
use core::str::FromStr;

/// Side count used when a polygon is requested with `vertex_count == 0`.
pub const DEFAULT_POLYGON_SIDES: u32 = 4;

/// Point count used when a star is requested with `vertex_count == 0`.
pub const DEFAULT_STAR_POINTS: u32 = 5;

/// Inner radius of a star as a fraction of its outer radius.
pub const STAR_INNER_RATIO: f32 = 0.45;

/// Boundary shape selector.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum ShapeKind {
    /// Regular convex polygon with `vertex_count` sides.
    #[default]
    Polygon,
    /// Star with `vertex_count` points.
    Star,
    House,
    Skull,
    CandyCane,
    Tree,
    Ghost,
    Pumpkin,
    Heart,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 9] = [
        ShapeKind::Polygon,
        ShapeKind::Star,
        ShapeKind::House,
        ShapeKind::Skull,
        ShapeKind::CandyCane,
        ShapeKind::Tree,
        ShapeKind::Ghost,
        ShapeKind::Pumpkin,
        ShapeKind::Heart,
    ];

    /// Canonical tag, as used in serialized configurations.
    pub fn tag(self) -> &'static str {
        match self {
            ShapeKind::Polygon => "polygon",
            ShapeKind::Star => "star",
            ShapeKind::House => "house",
            ShapeKind::Skull => "skull",
            ShapeKind::CandyCane => "candy-cane",
            ShapeKind::Tree => "tree",
            ShapeKind::Ghost => "ghost",
            ShapeKind::Pumpkin => "pumpkin",
            ShapeKind::Heart => "heart",
        }
    }

    /// Lenient lookup: unknown tags fall back to [`ShapeKind::Polygon`].
    pub fn from_tag(tag: &str) -> Self {
        match tag.parse() {
            Ok(kind) => kind,
            Err(_) => {
                log::warn!("unknown shape tag `{}`, using {}-sided polygon", tag, DEFAULT_POLYGON_SIDES);
                ShapeKind::Polygon
            }
        }
    }

    /// Whether the outline can have reflex corners.
    pub fn is_concave(self) -> bool {
        !matches!(self, ShapeKind::Polygon)
    }

    fn outline(self) -> Option<&'static [(f32, f32)]> {
        match self {
            ShapeKind::Polygon | ShapeKind::Star => None,
            ShapeKind::House => Some(silhouette::HOUSE),
            ShapeKind::Skull => Some(silhouette::SKULL),
            ShapeKind::CandyCane => Some(silhouette::CANDY_CANE),
            ShapeKind::Tree => Some(silhouette::TREE),
            ShapeKind::Ghost => Some(silhouette::GHOST),
            ShapeKind::Pumpkin => Some(silhouette::PUMPKIN),
            ShapeKind::Heart => Some(silhouette::HEART),
        }
    }
}

impl FromStr for ShapeKind {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "polygon" | "square" => ShapeKind::Polygon,
            "star" => ShapeKind::Star,
            "house" => ShapeKind::House,
            "skull" => ShapeKind::Skull,
            "candy-cane" | "candycane" | "candy_cane" => ShapeKind::CandyCane,
            "tree" => ShapeKind::Tree,
            "ghost" => ShapeKind::Ghost,
            "pumpkin" => ShapeKind::Pumpkin,
            "heart" => ShapeKind::Heart,
            _ => return Err(SimulationError::UnknownShape { tag: s.to_string() }),
        };
        Ok(kind)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl From<String> for ShapeKind {
    fn from(tag: String) -> Self {
        ShapeKind::from_tag(&tag)
    }
}

impl From<ShapeKind> for String {
    fn from(kind: ShapeKind) -> Self {
        kind.tag().to_string()
    }
}

/// Generate the closed vertex loop for a boundary.
///
/// - `Polygon`: `vertex_count` vertices (4 when zero) at distance `radius`
///   from `center`, the first at angle `rotation`.
/// - `Star`: `2 * vertex_count` vertices (5 points when zero), alternating
///   `radius` and `radius * STAR_INNER_RATIO`.
/// - Silhouettes ignore `vertex_count`; the authored outline is scaled by
///   `radius`, rotated by `rotation` about the origin and moved to `center`,
///   keeping the authored order.
///
/// Identical inputs give bit-identical output.
pub fn generate<F: Float>(
    kind: ShapeKind,
    vertex_count: u32,
    radius: F,
    center: Vec2<F>,
    rotation: F,
) -> AllocVec<Vec2<F>> {
    match kind {
        ShapeKind::Polygon => {
            let sides = if vertex_count == 0 { DEFAULT_POLYGON_SIDES } else { vertex_count };
            regular_polygon(sides, radius, center, rotation)
        }
        ShapeKind::Star => {
            let points = if vertex_count == 0 { DEFAULT_STAR_POINTS } else { vertex_count };
            star(points, radius, radius * F::from_f32(STAR_INNER_RATIO), center, rotation)
        }
        _ => match kind.outline() {
            Some(outline) => transform_outline(outline, radius, center, rotation),
            None => regular_polygon(DEFAULT_POLYGON_SIDES, radius, center, rotation),
        },
    }
}

fn regular_polygon<F: Float>(sides: u32, radius: F, center: Vec2<F>, rotation: F) -> AllocVec<Vec2<F>> {
    // Fewer than three sides cannot enclose anything.
    let sides = sides.max(3);
    let step = F::tau() / F::from_f32(sides as f32);
    (0..sides)
        .map(|i| {
            let angle = rotation + step * F::from_f32(i as f32);
            center + Vec2::from_angle(angle).scale(radius)
        })
        .collect()
}

fn star<F: Float>(points: u32, outer: F, inner: F, center: Vec2<F>, rotation: F) -> AllocVec<Vec2<F>> {
    let points = points.max(2);
    let count = points * 2;
    let step = F::pi() / F::from_f32(points as f32);
    (0..count)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            let angle = rotation + step * F::from_f32(i as f32);
            center + Vec2::from_angle(angle).scale(r)
        })
        .collect()
}

fn transform_outline<F: Float>(
    outline: &[(f32, f32)],
    radius: F,
    center: Vec2<F>,
    rotation: F,
) -> AllocVec<Vec2<F>> {
    outline
        .iter()
        .map(|&(x, y)| {
            let local = Vec2::new(F::from_f32(x), F::from_f32(y)).scale(radius);
            center + local.rotate(rotation)
        })
        .collect()
}
