use crate::base::ParamMaterial;
use crate::StrError;
use russell_lab::Vector;

/// Implements the constant-bond (shear-lag) crack bridge response
///
/// The matrix stress builds up linearly with the distance `z` to the nearest crack
/// and is capped by the stress that the matrix carries in the uncracked state:
///
/// ```text
///                  /   T vf            Em σc       \
/// σm(z, σc) = min |  ——————— z ,  ——————————————— |
///                  \  1 - vf        vf Ef + (1-vf) Em /
/// ```
///
/// The fiber strain follows from the axial force equilibrium:
///
/// ```text
///             σc - σm (1 - vf)
/// εf(z, σc) = ————————————————
///                  vf Ef
/// ```
///
/// ```text
///   σm
///    ↑           __________________  Em σc / Ec
///    |         /
///    |       /   slope = T vf / (1 - vf)
///    |     /
///    |   /
///    | /
///    +————————————————————————————→ z
///  crack
/// ```
#[derive(Clone, Debug)]
pub struct CrackBridge {
    /// Reinforcement ratio
    vf: f64,

    /// Fiber stiffness vf·Ef
    vf_ef: f64,

    /// Slope of the matrix stress build-up T·vf/(1-vf)
    bond_slope: f64,

    /// Ratio σm/σc in the uncracked state Em/Ec
    uncracked_factor: f64,
}

impl CrackBridge {
    /// Allocates a new instance
    pub fn new(param: &ParamMaterial) -> Result<Self, StrError> {
        param.validate()?;
        Ok(CrackBridge {
            vf: param.vf,
            vf_ef: param.vf * param.ef,
            bond_slope: param.bond_slope(),
            uncracked_factor: param.uncracked_matrix_factor(),
        })
    }

    /// Returns the matrix stress at a distance z from the nearest crack
    ///
    /// # Input
    ///
    /// * `z` -- distance to the nearest crack (≥ 0)
    /// * `sig_c` -- composite stress
    #[inline]
    pub fn sig_m(&self, z: f64, sig_c: f64) -> f64 {
        f64::min(z * self.bond_slope, self.uncracked_factor * sig_c)
    }

    /// Returns the largest matrix stress the bond can transfer at a distance z from the nearest crack
    #[inline]
    pub fn sig_m_max(&self, z: f64) -> f64 {
        z * self.bond_slope
    }

    /// Returns the derivative of the matrix stress with respect to the composite stress
    ///
    /// The derivative is zero where the bond limits the matrix stress (debonded zone).
    #[inline]
    pub fn dsig_m_dsig_c(&self, z: f64, sig_c: f64) -> f64 {
        if self.uncracked_factor * sig_c < z * self.bond_slope {
            self.uncracked_factor
        } else {
            0.0
        }
    }

    /// Returns the fiber (reinforcement) strain at a distance z from the nearest crack
    #[inline]
    pub fn eps_f(&self, z: f64, sig_c: f64) -> f64 {
        (sig_c - self.sig_m(z, sig_c) * (1.0 - self.vf)) / self.vf_ef
    }

    /// Returns the matrix stress field over all material points
    ///
    /// `z_x` holds the distances of the material points to the nearest crack
    pub fn sig_m_field(&self, z_x: &Vector, sig_c: f64) -> Vector {
        let mut sig_m_x = Vector::new(z_x.dim());
        for i in 0..z_x.dim() {
            sig_m_x[i] = self.sig_m(z_x[i], sig_c);
        }
        sig_m_x
    }

    /// Returns the fiber strain field over all material points
    pub fn eps_f_field(&self, z_x: &Vector, sig_c: f64) -> Vector {
        let mut eps_f_x = Vector::new(z_x.dim());
        for i in 0..z_x.dim() {
            eps_f_x[i] = self.eps_f(z_x[i], sig_c);
        }
        eps_f_x
    }
}

/// Calculates the distance of each material point to the nearest crack
///
/// # Input
///
/// * `x` -- positions of the material points
/// * `cracks` -- positions of the cracks (at least one)
pub fn distance_to_nearest_crack(x: &Vector, cracks: &[f64]) -> Result<Vector, StrError> {
    if cracks.is_empty() {
        return Err("at least one crack is required to compute distances");
    }
    let mut z_x = Vector::filled(x.dim(), f64::INFINITY);
    for crack in cracks {
        update_distance_to_nearest_crack(&mut z_x, x, *crack);
    }
    Ok(z_x)
}

/// Updates the distances to the nearest crack after the insertion of a new crack
///
/// A new crack can only shorten the distances; the result equals the one of [distance_to_nearest_crack].
pub fn update_distance_to_nearest_crack(z_x: &mut Vector, x: &Vector, new_crack: f64) {
    for i in 0..x.dim() {
        let d = f64::abs(x[i] - new_crack);
        if d < z_x[i] {
            z_x[i] = d;
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
