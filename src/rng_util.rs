/// Generate a random `f64` in the open range `(0, 1)`.
///
/// `fastrand::Rng::f64` covers `[0, 1)`; zero is rejected and redrawn so
/// callers can take a logarithm of the result.
#[inline]
pub(crate) fn positive_f64(rng: &mut fastrand::Rng) -> f64 {
    loop {
        let u = rng.f64();
        if u > 0.0 {
            return u;
        }
    }
}
