use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds the material parameters of the fiber-reinforced composite
///
/// The parameters are shared by the crack bridge model, the local crack-initiation
/// solver and the cracking history tracer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParamMaterial {
    /// Young's modulus of the matrix Em
    pub em: f64,

    /// Young's modulus of the fibers (reinforcement) Ef
    pub ef: f64,

    /// Reinforcement ratio (fiber volume fraction) 0 < vf < 1
    pub vf: f64,

    /// Bond intensity T (shear flow per unit volume of composite)
    pub tt: f64,

    /// Ultimate composite strength σcu
    pub sig_cu: f64,

    /// Scale of the matrix strength σmu
    pub sig_mu: f64,

    /// Weibull shape parameter (modulus) of the matrix strength
    pub m: f64,
}

impl ParamMaterial {
    /// Returns the reference parameters of a typical textile-reinforced concrete
    pub fn sample() -> Self {
        ParamMaterial {
            em: 28_000.0, // MPa
            ef: 180_000.0, // MPa
            vf: 0.01,     // [-]
            tt: 8.0,      // MPa/mm
            sig_cu: 20.0, // MPa
            sig_mu: 10.0, // MPa
            m: 10.0,      // [-]
        }
    }

    /// Validates all data
    ///
    /// Degenerate values that would collapse a denominator of the crack bridge
    /// model are reported here, before any computation begins.
    pub fn validate(&self) -> Result<(), StrError> {
        let all = [self.em, self.ef, self.vf, self.tt, self.sig_cu, self.sig_mu, self.m];
        if all.iter().any(|v| !v.is_finite()) {
            return Err("material parameters must be finite");
        }
        if self.em <= 0.0 {
            return Err("em must be > 0.0");
        }
        if self.ef <= 0.0 {
            return Err("ef must be > 0.0");
        }
        if self.vf <= 0.0 || self.vf >= 1.0 {
            return Err("vf must satisfy 0 < vf < 1");
        }
        if self.tt <= 0.0 {
            return Err("tt must be > 0.0");
        }
        if self.sig_cu <= 0.0 {
            return Err("sig_cu must be > 0.0");
        }
        if self.sig_mu <= 0.0 {
            return Err("sig_mu must be > 0.0");
        }
        if self.m <= 0.0 {
            return Err("m must be > 0.0");
        }
        Ok(())
    }

    /// Returns the composite modulus by the mixture rule
    ///
    /// ```text
    /// Ec = Em (1 - vf) + Ef vf
    /// ```
    #[inline]
    pub fn ec(&self) -> f64 {
        self.em * (1.0 - self.vf) + self.ef * self.vf
    }

    /// Returns the ratio between matrix stress and composite stress in the uncracked state
    ///
    /// ```text
    /// σm = Em σc / Ec
    /// ```
    #[inline]
    pub fn uncracked_matrix_factor(&self) -> f64 {
        self.em / self.ec()
    }

    /// Returns the slope of the matrix stress build-up away from a crack
    ///
    /// ```text
    /// dσm/dz = T vf / (1 - vf)
    /// ```
    #[inline]
    pub fn bond_slope(&self) -> f64 {
        self.tt * self.vf / (1.0 - self.vf)
    }

    /// Allocates a new instance from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, StrError> {
        let param: ParamMaterial = serde_json::from_str(json).map_err(|_| "cannot parse material parameters")?;
        param.validate()?;
        Ok(param)
    }

    /// Returns a JSON representation of the parameters
    pub fn to_json_string(&self) -> Result<String, StrError> {
        serde_json::to_string(self).map_err(|_| "cannot serialize material parameters")
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ParamMaterial;
    use crate::StrError;
    use russell_lab::approx_eq;

    #[test]
    fn sample_works() {
        let param = ParamMaterial::sample();
        assert_eq!(param.validate(), Ok(()));
        approx_eq(param.ec(), 28_000.0 * 0.99 + 1_800.0, 1e-10);
        approx_eq(param.uncracked_matrix_factor(), 28_000.0 / 29_520.0, 1e-15);
        approx_eq(param.bond_slope(), 8.0 * 0.01 / 0.99, 1e-15);
    }

    #[test]
    fn validate_captures_errors() {
        let ok = ParamMaterial::sample();
        let mut param = ok;
        param.em = f64::NAN;
        assert_eq!(param.validate().err(), Some("material parameters must be finite"));
        param = ok;
        param.sig_cu = f64::INFINITY;
        assert_eq!(param.validate().err(), Some("material parameters must be finite"));
        param = ok;
        param.em = 0.0;
        assert_eq!(param.validate().err(), Some("em must be > 0.0"));
        param = ok;
        param.ef = -1.0;
        assert_eq!(param.validate().err(), Some("ef must be > 0.0"));
        param = ok;
        param.vf = 0.0;
        assert_eq!(param.validate().err(), Some("vf must satisfy 0 < vf < 1"));
        param.vf = 1.0;
        assert_eq!(param.validate().err(), Some("vf must satisfy 0 < vf < 1"));
        param = ok;
        param.tt = 0.0;
        assert_eq!(param.validate().err(), Some("tt must be > 0.0"));
        param = ok;
        param.sig_cu = 0.0;
        assert_eq!(param.validate().err(), Some("sig_cu must be > 0.0"));
        param = ok;
        param.sig_mu = -3.0;
        assert_eq!(param.validate().err(), Some("sig_mu must be > 0.0"));
        param = ok;
        param.m = 0.0;
        assert_eq!(param.validate().err(), Some("m must be > 0.0"));
    }

    #[test]
    fn json_works() -> Result<(), StrError> {
        let param = ParamMaterial::sample();
        let json = param.to_json_string()?;
        let read = ParamMaterial::from_json_str(&json)?;
        assert_eq!(read, param);
        assert_eq!(
            ParamMaterial::from_json_str("{\"em\":1.0}").err(),
            Some("cannot parse material parameters")
        );
        let bad = json.replace("\"vf\":0.01", "\"vf\":1.5");
        assert_eq!(ParamMaterial::from_json_str(&bad).err(), Some("vf must satisfy 0 < vf < 1"));
        Ok(())
    }
}
