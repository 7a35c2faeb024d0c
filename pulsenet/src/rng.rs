use rand::Rng;

/// Returns `true` with probability `chance`.
///
/// Chances outside `[0.0, 1.0]` saturate: anything at or
/// below 0 never succeeds, anything above 1 always does.
pub(crate) fn roll<R: Rng + ?Sized>(rng: &mut R, chance: f32) -> bool {
    rng.gen::<f32>() < chance
}

/// A uniform draw from `[low, high)`.
pub(crate) fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f32, high: f32) -> f32 {
    low + (high - low) * rng.gen::<f32>()
}
