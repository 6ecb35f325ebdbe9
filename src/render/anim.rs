//! Animation primitives shared by every segment renderer: a damped-spring
//! progress curve and a saturating linear interpolation.

const SPRING_MASS: f64 = 1.0;
const SPRING_STIFFNESS: f64 = 100.0;

/// Damped-spring progress from 0 toward 1, evaluated analytically at
/// `frame / fps` seconds. Negative frames (an element waiting out its stagger
/// delay) are 0.
///
/// Mass 1 and stiffness 100 are fixed; `damping` selects the curve. Damping
/// ratios below 1 follow the underdamped solution and overshoot 1 before
/// settling, ratios of 1 and above follow the critically damped solution and
/// approach 1 monotonically. Callers map the progress through `interpolate`,
/// which saturates the overshoot at the boundary value.
pub fn spring(frame: i64, fps: u32, damping: f64) -> f64 {
    if frame <= 0 {
        return 0.0;
    }
    let t = frame as f64 / fps as f64;
    let omega0 = (SPRING_STIFFNESS / SPRING_MASS).sqrt();
    let zeta = damping / (2.0 * (SPRING_STIFFNESS * SPRING_MASS).sqrt());

    if zeta < 1.0 {
        let omega_d = omega0 * (1.0 - zeta * zeta).sqrt();
        let envelope = (-zeta * omega0 * t).exp();
        1.0 - envelope * ((zeta * omega0 / omega_d) * (omega_d * t).sin() + (omega_d * t).cos())
    } else {
        let envelope = (-omega0 * t).exp();
        1.0 - envelope * (1.0 + omega0 * t)
    }
}

/// Map `value` from `input` to `output` linearly, saturating at the output
/// boundaries when `value` leaves the input range. The input range must be
/// increasing; the output range may run in either direction.
pub fn interpolate(value: f64, input: [f64; 2], output: [f64; 2]) -> f64 {
    let [in_start, in_end] = input;
    let [out_start, out_end] = output;
    if value <= in_start {
        return out_start;
    }
    if value >= in_end {
        return out_end;
    }
    let progress = (value - in_start) / (in_end - in_start);
    out_start + progress * (out_end - out_start)
}
