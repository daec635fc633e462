//! Angle normalization and a generic coarse-scan + bisection zero-crossing
//! finder, shared by the sankranti/new-moon search and the tithi/masa
//! boundary search.

/// Normalize an angle in degrees to `(-180, 180]`.
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// Normalize an angle in degrees to `[0, 360)`.
pub fn normalize_to_360(deg: f64) -> f64 {
    let d = deg % 360.0;
    if d < 0.0 { d + 360.0 } else { d }
}

/// Is a sign change between two samples of a 0-360-periodic function a
/// genuine zero crossing, as opposed to the 360-degree wraparound
/// discontinuity that also flips the sign?
pub fn is_genuine_crossing(f_a: f64, f_b: f64) -> bool {
    f_a * f_b < 0.0 && (f_a - f_b).abs() < 270.0
}

/// Coarse-scan + bisection zero-crossing finder.
///
/// Scans from `t_start` in steps of `step` (negative steps scan backward),
/// evaluating `f` at each point. When a genuine sign change is found (per
/// [`is_genuine_crossing`]), refines it by bisection down to
/// `convergence_tol`. Returns `Ok(None)` if no crossing is found within
/// `max_steps` samples.
pub fn find_zero_crossing<E>(
    f: &dyn Fn(f64) -> Result<f64, E>,
    t_start: f64,
    step: f64,
    max_steps: usize,
    max_iterations: u32,
    convergence_tol: f64,
) -> Result<Option<f64>, E> {
    let mut f_prev = f(t_start)?;
    let mut t_prev = t_start;

    for _ in 0..max_steps {
        let t_curr = t_prev + step;
        let f_curr = f(t_curr)?;

        if is_genuine_crossing(f_prev, f_curr) {
            let (mut t_a, mut f_a, mut t_b, _) = if t_prev < t_curr {
                (t_prev, f_prev, t_curr, f_curr)
            } else {
                (t_curr, f_curr, t_prev, f_prev)
            };

            for _ in 0..max_iterations {
                let t_mid = 0.5 * (t_a + t_b);
                let f_mid = f(t_mid)?;

                if f_a * f_mid <= 0.0 {
                    t_b = t_mid;
                } else {
                    t_a = t_mid;
                    f_a = f_mid;
                }

                if (t_b - t_a).abs() < convergence_tol {
                    break;
                }
            }

            return Ok(Some(0.5 * (t_a + t_b)));
        }

        t_prev = t_curr;
        f_prev = f_curr;
    }

    Ok(None)
}

/// Build the reparameterized function `g(x) = ((f(x) - target + 540) mod
/// 360) - 180` used to hunt for where a 0-360-periodic function `f`
/// crosses a specific `target` value (e.g. a sankranti boundary or a
/// tithi boundary) instead of zero itself.
pub fn bisect_angle<'a, E>(
    f: &'a dyn Fn(f64) -> Result<f64, E>,
    target: f64,
) -> impl Fn(f64) -> Result<f64, E> + 'a {
    move |t: f64| f(t).map(|v| normalize_to_pm180(v - target))
}
