use crate::base::{ParamDiscretization, ParamMaterial};
use crate::StrError;
use rand::distributions::Open01;
use rand::Rng;
use russell_lab::Vector;
use serde::{Deserialize, Serialize};

/// Holds the discretized specimen and its random matrix strength field
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Specimen {
    /// Length of the specimen
    pub l_x: f64,

    /// Positions of the material points (equally spaced over [0, l_x])
    ///
    /// (n_x)
    pub x: Vector,

    /// Matrix strength at the material points
    ///
    /// (n_x)
    pub sig_mu_x: Vector,
}

impl Specimen {
    /// Allocates a new specimen with a Weibull-distributed matrix strength
    ///
    /// ```text
    /// σmu(xᵢ) = σmu · W(m)
    /// ```
    ///
    /// where `W(m)` is a standard Weibull variate with shape parameter `m`.
    pub fn new<R>(disc: &ParamDiscretization, param: &ParamMaterial, rng: &mut R) -> Result<Self, StrError>
    where
        R: Rng,
    {
        disc.validate()?;
        param.validate()?;
        let mut sig_mu_x = Vector::new(disc.n_x);
        for i in 0..disc.n_x {
            sig_mu_x[i] = param.sig_mu * weibull_sample(param.m, rng);
        }
        Ok(Specimen {
            l_x: disc.l_x,
            x: positions(disc)?,
            sig_mu_x,
        })
    }

    /// Allocates a new specimen with a prescribed matrix strength field
    pub fn from_strengths(disc: &ParamDiscretization, sig_mu_x: &[f64]) -> Result<Self, StrError> {
        disc.validate()?;
        if sig_mu_x.len() != disc.n_x {
            return Err("the number of strength values must equal n_x");
        }
        if sig_mu_x.iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return Err("strength values must be finite and > 0.0");
        }
        Ok(Specimen {
            l_x: disc.l_x,
            x: positions(disc)?,
            sig_mu_x: Vector::from(&sig_mu_x.to_vec()),
        })
    }

    /// Returns the number of material points
    #[inline]
    pub fn n_x(&self) -> usize {
        self.x.dim()
    }

    /// Checks that the specimen matches a discretization and holds valid strengths
    pub fn validate(&self, disc: &ParamDiscretization) -> Result<(), StrError> {
        disc.validate()?;
        let n_x = self.x.dim();
        if n_x != disc.n_x || self.sig_mu_x.dim() != n_x || self.l_x != disc.l_x {
            return Err("specimen is incompatible with the discretization");
        }
        if self.x[0] != 0.0 || self.x[n_x - 1] != self.l_x {
            return Err("specimen positions must increase from 0.0 to l_x");
        }
        for i in 1..n_x {
            if !(self.x[i] > self.x[i - 1]) {
                return Err("specimen positions must increase from 0.0 to l_x");
            }
        }
        if self.sig_mu_x.as_data().iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return Err("strength values must be finite and > 0.0");
        }
        Ok(())
    }

    /// Returns the index and the strength of the weakest material point
    ///
    /// Ties are resolved by the first occurrence.
    pub fn weakest(&self) -> (usize, f64) {
        let mut index = 0;
        for i in 1..self.sig_mu_x.dim() {
            if self.sig_mu_x[i] < self.sig_mu_x[index] {
                index = i;
            }
        }
        (index, self.sig_mu_x[index])
    }
}

/// Returns n_x equally spaced positions over [0, l_x], including both ends
pub fn positions(disc: &ParamDiscretization) -> Result<Vector, StrError> {
    disc.validate()?;
    let n = disc.n_x;
    let dx = disc.dx();
    let mut x = Vector::new(n);
    for i in 0..n {
        x[i] = (i as f64) * dx;
    }
    x[n - 1] = disc.l_x;
    Ok(x)
}

/// Samples the standard Weibull distribution with shape parameter m
///
/// Uses the inverse transform `(-ln U)^(1/m)` with U drawn from the open interval (0, 1);
/// thus, the result is finite and strictly positive.
pub fn weibull_sample<R>(m: f64, rng: &mut R) -> f64
where
    R: Rng,
{
    let u: f64 = rng.sample(Open01);
    f64::powf(-f64::ln(u), 1.0 / m)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{positions, weibull_sample, Specimen};
    use crate::base::{ParamDiscretization, ParamMaterial};
    use crate::StrError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use russell_lab::approx_eq;

    #[test]
    fn positions_work() -> Result<(), StrError> {
        let x = positions(&ParamDiscretization { n_x: 5, l_x: 2.0 })?;
        assert_eq!(x.as_data(), &[0.0, 0.5, 1.0, 1.5, 2.0]);
        let x = positions(&ParamDiscretization { n_x: 3000, l_x: 500.0 })?;
        assert_eq!(x[0], 0.0);
        assert_eq!(x[2999], 500.0);
        assert_eq!(
            positions(&ParamDiscretization { n_x: 1, l_x: 2.0 }).err(),
            Some("n_x must be ≥ 2")
        );
        Ok(())
    }

    #[test]
    fn weibull_sample_works() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let n = 20_000;
        let m = 2.0;
        let mut sum = 0.0;
        for _ in 0..n {
            let w = weibull_sample(m, &mut rng);
            assert!(w > 0.0 && w.is_finite());
            sum += w;
        }
        // mean = Γ(1 + 1/m) = √π/2 for m = 2
        let mean = sum / (n as f64);
        approx_eq(mean, 0.886226925452758, 0.02);
    }

    #[test]
    fn new_works() -> Result<(), StrError> {
        let disc = ParamDiscretization { n_x: 100, l_x: 50.0 };
        let param = ParamMaterial::sample();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let specimen = Specimen::new(&disc, &param, &mut rng)?;
        assert_eq!(specimen.n_x(), 100);
        assert_eq!(specimen.x[99], 50.0);
        for i in 0..100 {
            assert!(specimen.sig_mu_x[i] > 0.0);
        }
        // same seed, same field
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let again = Specimen::new(&disc, &param, &mut rng)?;
        assert_eq!(again.sig_mu_x.as_data(), specimen.sig_mu_x.as_data());
        // different seed, different field
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let other = Specimen::new(&disc, &param, &mut rng)?;
        assert_ne!(other.sig_mu_x.as_data(), specimen.sig_mu_x.as_data());
        Ok(())
    }

    #[test]
    fn new_captures_errors() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut param = ParamMaterial::sample();
        param.m = -1.0;
        let disc = ParamDiscretization { n_x: 10, l_x: 1.0 };
        assert_eq!(Specimen::new(&disc, &param, &mut rng).err(), Some("m must be > 0.0"));
    }

    #[test]
    fn validate_works() -> Result<(), StrError> {
        let disc = ParamDiscretization { n_x: 3, l_x: 2.0 };
        let specimen = Specimen::from_strengths(&disc, &[3.0, 2.0, 1e-12])?;
        assert_eq!(specimen.validate(&disc), Ok(()));
        assert_eq!(
            specimen.validate(&ParamDiscretization { n_x: 3, l_x: 4.0 }),
            Err("specimen is incompatible with the discretization")
        );
        assert_eq!(
            specimen.validate(&ParamDiscretization { n_x: 1, l_x: 2.0 }),
            Err("n_x must be ≥ 2")
        );
        let mut wrong = specimen.clone();
        wrong.x[1] = 0.0;
        assert_eq!(wrong.validate(&disc), Err("specimen positions must increase from 0.0 to l_x"));
        let mut wrong = specimen.clone();
        wrong.sig_mu_x[2] = -1.0;
        assert_eq!(wrong.validate(&disc), Err("strength values must be finite and > 0.0"));
        Ok(())
    }

    #[test]
    fn from_strengths_and_weakest_work() -> Result<(), StrError> {
        let disc = ParamDiscretization { n_x: 4, l_x: 3.0 };
        let specimen = Specimen::from_strengths(&disc, &[3.0, 2.0, 2.0, 4.0])?;
        assert_eq!(specimen.weakest(), (1, 2.0));
        assert_eq!(
            Specimen::from_strengths(&disc, &[3.0, 2.0]).err(),
            Some("the number of strength values must equal n_x")
        );
        assert_eq!(
            Specimen::from_strengths(&disc, &[3.0, 2.0, 0.0, 1.0]).err(),
            Some("strength values must be finite and > 0.0")
        );
        Ok(())
    }
}
