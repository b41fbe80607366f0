//! Simulated particles.

use crate::float::Float;
use crate::vec::Vec2;

/// Cosmetic colours assigned to particles by index, as packed `0xRRGGBB`.
pub const PALETTE: [u32; 6] = [
    0xF3_8B_A8, // pink
    0xFA_B3_87, // peach
    0xF9_E2_AF, // yellow
    0xA6_E3_A1, // green
    0x89_B4_FA, // blue
    0xCB_A6_F7, // mauve
];

/// Index into [`PALETTE`]. Irrelevant to the physics.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColorTag(pub u8);

impl ColorTag {
    /// Colour for the particle at `index`, cycling through the palette.
    pub fn for_index(index: usize) -> Self {
        ColorTag((index % PALETTE.len()) as u8)
    }

    /// Packed `0xRRGGBB` value.
    pub fn rgb(self) -> u32 {
        PALETTE[self.0 as usize % PALETTE.len()]
    }
}

/// A circular particle with explicit velocity.
///
/// All particles share an implicit unit mass.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<F: Float> {
    pub id: u32,
    pub pos: Vec2<F>,
    pub vel: Vec2<F>,
    pub radius: F,
    pub color: ColorTag,
}

impl<F: Float> Particle<F> {
    pub fn new(id: u32, pos: Vec2<F>, vel: Vec2<F>, radius: F) -> Self {
        Particle {
            id,
            pos,
            vel,
            radius,
            color: ColorTag::for_index(id as usize),
        }
    }

    /// True when position and velocity are both finite.
    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.vel.is_finite()
    }

    /// Teleport to the origin and stop.
    pub fn reset_to_origin(&mut self) {
        self.pos = Vec2::zero();
        self.vel = Vec2::zero();
    }

    /// Kinetic energy at unit mass.
    pub fn kinetic_energy(&self) -> F {
        self.vel.length_sq() * F::half()
    }
}
