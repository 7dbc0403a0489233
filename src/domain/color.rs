//! ABGR color helpers (little-endian 0xAABBGGRR -> bytes [RR,GG,BB,AA])

use std::f32::consts::TAU;

#[inline]
pub fn pack_abgr(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((a as u32) << 24) | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32)
}

#[inline]
pub fn unpack_abgr(c: u32) -> (u8, u8, u8, u8) {
    (c as u8, (c >> 8) as u8, (c >> 16) as u8, (c >> 24) as u8)
}

/// Opaque color cycling through the hue wheel as `t` grows.
/// Each channel is `sin²` of `t` shifted by a third of a turn.
pub fn rainbow(t: f32) -> u32 {
    let channel = |phase: f32| {
        let s = (t + phase).sin();
        (s * s * 255.0).round().clamp(0.0, 255.0) as u8
    };
    pack_abgr(channel(0.0), channel(TAU / 3.0), channel(2.0 * TAU / 3.0), 255)
}
