use super::CrackBridge;
use crate::base::Control;

/// Holds the result of the local crack-load search at one material point
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CrackLoad {
    /// The point cracks when the composite stress reaches this value (< σcu)
    At(f64),

    /// The point cannot crack before the ultimate composite strength (shielded zone)
    Shielded,
}

impl CrackLoad {
    /// Returns the crack load or the ultimate composite strength if the point is shielded
    #[inline]
    pub fn load_or(self, sig_cu: f64) -> f64 {
        match self {
            CrackLoad::At(sig_c) => sig_c,
            CrackLoad::Shielded => sig_cu,
        }
    }
}

/// Finds the composite stress at which a material point cracks
///
/// Solves the following equation with Newton's method:
///
/// ```text
/// f(σc) = σmu(x) - σm(z(x), σc) = 0
/// ```
///
/// where `σmu(x)` is the matrix strength at the point and `z(x)` is the distance to the
/// nearest crack. No solution exists if the bond cannot transfer enough stress to the
/// point (`f` is constant and positive, e.g., at an existing crack); in this case, or if the
/// iterations do not converge, the point is flagged as [CrackLoad::Shielded]. The residual
/// tolerance is relative to `σmu(x)`; thus, very small strengths are handled as well.
pub struct CrackInitiation<'a> {
    bridge: &'a CrackBridge,
    sig_cu: f64,
    n_max_iterations: usize,
    tol_residual: f64,
}

impl<'a> CrackInitiation<'a> {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `bridge` -- the crack bridge model
    /// * `sig_cu` -- the ultimate composite strength; roots at or above this value are discarded
    /// * `control` -- the maximum number of iterations and the tolerance
    pub fn new(bridge: &'a CrackBridge, sig_cu: f64, control: &Control) -> Self {
        CrackInitiation {
            bridge,
            sig_cu,
            n_max_iterations: control.n_max_iterations,
            tol_residual: control.tol_residual,
        }
    }

    /// Returns the ultimate composite strength
    pub fn sig_cu(&self) -> f64 {
        self.sig_cu
    }

    /// Calculates the crack-initiating composite stress at one material point
    ///
    /// # Input
    ///
    /// * `sig_mu_point` -- matrix strength at the point
    /// * `z` -- distance from the point to the nearest crack
    /// * `sig_c_prev` -- initial guess; the load of the last crack
    pub fn solve(&self, sig_mu_point: f64, z: f64, sig_c_prev: f64) -> CrackLoad {
        // the bond transfers at most z·T·vf/(1-vf) to the point (nothing at a crack)
        if !(self.bridge.sig_m_max(z) >= sig_mu_point) {
            return CrackLoad::Shielded;
        }
        let tol = self.tol_residual * f64::abs(sig_mu_point);
        let mut sig_c = sig_c_prev;
        for _ in 0..self.n_max_iterations {
            let f = sig_mu_point - self.bridge.sig_m(z, sig_c);
            if !f.is_finite() {
                return CrackLoad::Shielded;
            }
            if f64::abs(f) <= tol {
                return self.accept(sig_c);
            }
            let df = -self.bridge.dsig_m_dsig_c(z, sig_c);
            if df == 0.0 {
                // the matrix stress does not respond to the load anymore
                return CrackLoad::Shielded;
            }
            sig_c -= f / df;
            if !sig_c.is_finite() {
                return CrackLoad::Shielded;
            }
        }
        CrackLoad::Shielded
    }

    /// Accepts roots below the ultimate composite strength only
    #[inline]
    fn accept(&self, sig_c: f64) -> CrackLoad {
        if sig_c < self.sig_cu {
            CrackLoad::At(sig_c)
        } else {
            CrackLoad::Shielded
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
