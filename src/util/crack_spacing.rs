/// Calculates the average crack spacing
///
/// The specimen ends (0 and l_x) act as boundaries; thus, the average is taken
/// over the distances between the consecutive sorted positions `0, x₀, x₁, ..., l_x`.
///
/// # Input
///
/// * `cracks` -- crack positions in any order (e.g., order of discovery)
/// * `l_x` -- length of the specimen
pub fn average_crack_spacing(cracks: &[f64], l_x: f64) -> f64 {
    let mut positions = Vec::with_capacity(cracks.len() + 2);
    positions.push(0.0);
    positions.extend_from_slice(cracks);
    positions[1..].sort_by(|a, b| a.total_cmp(b));
    positions.push(l_x);
    let n_gap = positions.len() - 1;
    let total: f64 = positions.windows(2).map(|w| w[1] - w[0]).sum();
    total / (n_gap as f64)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::average_crack_spacing;
    use russell_lab::approx_eq;

    #[test]
    fn average_crack_spacing_works() {
        assert_eq!(average_crack_spacing(&[], 500.0), 500.0);
        assert_eq!(average_crack_spacing(&[100.0], 500.0), 250.0);
        approx_eq(average_crack_spacing(&[400.0, 100.0, 250.0], 500.0), 125.0, 1e-13);
        // cracks at the ends count as zero-length gaps
        approx_eq(average_crack_spacing(&[0.0, 500.0], 500.0), 500.0 / 3.0, 1e-13);
    }
}
