use super::CrackInitiation;
use russell_lab::Vector;

/// Holds the next crack: the weakest material point under the current damage state
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NextCrack {
    /// Index of the material point
    pub index: usize,

    /// Position of the crack
    pub x: f64,

    /// Composite stress at which the crack forms
    pub sig_c: f64,
}

/// Selects the next crack by solving the crack load at all material points
///
/// Returns None if no point can crack below the ultimate composite strength (saturation).
/// Ties are resolved by the first occurrence (smallest index).
///
/// # Input
///
/// * `solver` -- the local crack-initiation solver
/// * `x` -- positions of the material points
/// * `z_x` -- distances to the nearest crack
/// * `sig_mu_x` -- matrix strength at the material points
/// * `sig_c_prev` -- load of the last crack (initial guess of the local searches)
pub fn select_next_crack(
    solver: &CrackInitiation,
    x: &Vector,
    z_x: &Vector,
    sig_mu_x: &Vector,
    sig_c_prev: f64,
) -> Option<NextCrack> {
    let sig_cu = solver.sig_cu();
    let mut next: Option<NextCrack> = None;
    for i in 0..x.dim() {
        let sig_c = solver.solve(sig_mu_x[i], z_x[i], sig_c_prev).load_or(sig_cu);
        let smaller = match next {
            Some(current) => sig_c < current.sig_c,
            None => sig_c < sig_cu,
        };
        if smaller {
            next = Some(NextCrack { index: i, x: x[i], sig_c });
        }
    }
    next
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
