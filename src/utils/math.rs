/// IEEE 754 remainder: `x - n * y` where `n` is `x / y` rounded to nearest,
/// ties to even. The result lies in `[-|y|/2, |y|/2]`.
#[inline(always)]
pub fn ieee_remainder(x: f64, y: f64) -> f64 {
    if y == 0.0 || !x.is_finite() || !y.is_finite() {
        return 0.0;
    }
    x - (x / y).round_ties_even() * y
}

#[inline(always)]
pub fn clamp01(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}
