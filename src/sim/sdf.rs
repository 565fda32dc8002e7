//! Signed distance field of an arc stroke

use glam::Vec2;

use super::arc::ArcBand;
use crate::screen_angle;

/// Signed distance from an offset `p` (relative to the arc center) to a band.
///
/// Inside the angular span this is the distance to the band's radial extent;
/// outside it, the distance to the nearer rounded end cap.
pub fn sd_arc(p: Vec2, band: &ArcBand) -> f32 {
    let half_thick = band.thickness * 0.5;
    if band.contains_angle(screen_angle(p)) {
        (p.length() - band.radius).abs() - half_thick
    } else {
        let (p1, p2) = band.endpoints();
        let d1 = (p - p1).length() - half_thick;
        let d2 = (p - p2).length() - half_thick;
        d1.min(d2)
    }
}
