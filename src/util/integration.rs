use crate::StrError;
use russell_lab::Vector;

/// Integrates sampled values with the trapezoidal rule
///
/// ```text
///        n-2
/// ∫ y dx ≈ Σ  ½ (yᵢ + yᵢ₊₁) (xᵢ₊₁ - xᵢ)
///        i=0
/// ```
///
/// # Input
///
/// * `y` -- the sampled values
/// * `x` -- the sample coordinates (same dimension as y)
pub fn trapz(y: &Vector, x: &Vector) -> Result<f64, StrError> {
    if y.dim() != x.dim() {
        return Err("y and x must have the same dimension");
    }
    let mut sum = 0.0;
    for i in 1..x.dim() {
        sum += 0.5 * (y[i - 1] + y[i]) * (x[i] - x[i - 1]);
    }
    Ok(sum)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
