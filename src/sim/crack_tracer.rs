use super::{CrackingHistory, Specimen};
use crate::base::{Control, ParamDiscretization, ParamMaterial};
use crate::model::{select_next_crack, update_distance_to_nearest_crack, CrackBridge, CrackInitiation};
use crate::util::{average_crack_spacing, trapz};
use crate::StrError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use russell_lab::Vector;

/// Traces the cracking history of a specimen under increasing tensile load
///
/// The tracer goes through the following phases:
///
/// 1. Uncracked: the first crack forms at the weakest point under the load `σmu_min Ec / Em`
/// 2. Cracking: the next crack is the point with the smallest crack-initiating load given
///    the distances to the existing cracks; each crack is recorded with its load, strain and spacing
/// 3. Saturated: no point can crack below σcu; the ultimate state is recorded and the run stops
pub struct CrackTracer {
    param: ParamMaterial,
    disc: ParamDiscretization,
    control: Control,
    bridge: CrackBridge,
}

impl CrackTracer {
    /// Allocates a new instance
    ///
    /// All parameters are validated here; therefore, a run either completes or fails before it starts.
    pub fn new(param: &ParamMaterial, disc: &ParamDiscretization, control: &Control) -> Result<Self, StrError> {
        if let Some(msg) = control.validate() {
            println!("ERROR: {}", msg);
            return Err("cannot allocate tracer because control.validate() failed");
        }
        disc.validate()?;
        let bridge = CrackBridge::new(param)?;
        Ok(CrackTracer {
            param: *param,
            disc: *disc,
            control: *control,
            bridge,
        })
    }

    /// Returns the crack bridge model
    pub fn bridge(&self) -> &CrackBridge {
        &self.bridge
    }

    /// Generates a new specimen using the seed given in Control (or a random seed)
    pub fn generate_specimen(&self) -> Result<Specimen, StrError> {
        let mut rng = match self.control.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Specimen::new(&self.disc, &self.param, &mut rng)
    }

    /// Runs the simulation with a specimen generated according to Control
    ///
    /// The optional `progress` callback receives the composite stress of each new crack and,
    /// finally, the ultimate composite strength.
    pub fn run(&self, progress: Option<&mut dyn FnMut(f64)>) -> Result<CrackingHistory, StrError> {
        let specimen = self.generate_specimen()?;
        self.run_with_specimen(specimen, progress)
    }

    /// Runs the simulation with a specimen generated by the given random number generator
    pub fn run_with_rng<R>(&self, rng: &mut R, progress: Option<&mut dyn FnMut(f64)>) -> Result<CrackingHistory, StrError>
    where
        R: Rng,
    {
        let specimen = Specimen::new(&self.disc, &self.param, rng)?;
        self.run_with_specimen(specimen, progress)
    }

    /// Runs the simulation with a given specimen
    pub fn run_with_specimen(
        &self,
        specimen: Specimen,
        mut progress: Option<&mut dyn FnMut(f64)>,
    ) -> Result<CrackingHistory, StrError> {
        // check
        specimen.validate(&self.disc)?;
        let n_x = specimen.n_x();
        let (idx_0, sig_mu_0) = specimen.weakest();
        let Specimen { l_x, x, sig_mu_x } = specimen;

        // auxiliary
        let sig_cu = self.param.sig_cu;
        let solver = CrackInitiation::new(&self.bridge, sig_cu, &self.control);
        let n_max_cracks = self.control.n_max_cracks.unwrap_or(n_x);
        let mut notify = |sig_c: f64| {
            if let Some(callback) = progress.as_mut() {
                callback(sig_c);
            }
        };

        // uncracked state
        let mut cracks: Vec<f64> = Vec::new();
        let mut sig_c_k = vec![0.0];
        let mut eps_c_k = vec![0.0];
        let mut spacing_k = vec![l_x];
        let mut sig_m_x_k = vec![Vector::new(n_x)];
        let mut z_x = Vector::filled(n_x, f64::INFINITY);
        self.control.print_header();

        // first crack at the weakest point
        let sig_c_0 = sig_mu_0 * self.param.ec() / self.param.em;
        if sig_c_0 < sig_cu {
            let eps_c_0 = sig_mu_0 / self.param.em;
            cracks.push(x[idx_0]);
            update_distance_to_nearest_crack(&mut z_x, &x, x[idx_0]);
            let spacing_0 = average_crack_spacing(&cracks, l_x);
            sig_c_k.push(sig_c_0);
            eps_c_k.push(eps_c_0);
            spacing_k.push(spacing_0);
            self.control.print_crack(0, x[idx_0], sig_c_0, eps_c_0, spacing_0);
            notify(sig_c_0);

            // subsequent cracks
            loop {
                let sig_c_prev = sig_c_k[sig_c_k.len() - 1];
                sig_m_x_k.push(self.bridge.sig_m_field(&z_x, sig_c_prev));
                if cracks.len() >= n_max_cracks {
                    break;
                }
                let next = match select_next_crack(&solver, &x, &z_x, &sig_mu_x, sig_c_prev) {
                    Some(next) => next,
                    None => break,
                };
                // equal strengths may yield a root one ulp below the previous load
                let sig_c = f64::max(next.sig_c, sig_c_prev);
                cracks.push(next.x);
                update_distance_to_nearest_crack(&mut z_x, &x, next.x);
                let eps_c = self.composite_strain(&x, &z_x, sig_c, l_x)?;
                let spacing = average_crack_spacing(&cracks, l_x);
                sig_c_k.push(sig_c);
                eps_c_k.push(eps_c);
                spacing_k.push(spacing);
                self.control.print_crack(cracks.len() - 1, next.x, sig_c, eps_c, spacing);
                notify(sig_c);
            }
        }

        // ultimate state
        let eps_cu = self.composite_strain(&x, &z_x, sig_cu, l_x)?;
        let spacing_u = spacing_k[spacing_k.len() - 1];
        sig_c_k.push(sig_cu);
        eps_c_k.push(eps_cu);
        spacing_k.push(spacing_u);
        sig_m_x_k.push(self.bridge.sig_m_field(&z_x, sig_cu));
        self.control.print_saturation(cracks.len(), sig_cu, eps_cu, spacing_u);
        notify(sig_cu);

        // done
        Ok(CrackingHistory {
            x,
            sig_mu_x,
            crack_positions: cracks,
            sig_c: sig_c_k,
            eps_c: eps_c_k,
            spacing: spacing_k,
            sig_m_x: sig_m_x_k,
        })
    }

    /// Calculates the composite strain by integrating the fiber strain along the specimen
    ///
    /// ```text
    ///       1   L
    /// εc = ——— ∫ εf(z(x), σc) dx
    ///       L   0
    /// ```
    fn composite_strain(&self, x: &Vector, z_x: &Vector, sig_c: f64, l_x: f64) -> Result<f64, StrError> {
        let eps_f_x = self.bridge.eps_f_field(z_x, sig_c);
        Ok(trapz(&eps_f_x, x)? / l_x)
    }
}

/// Runs a cracking simulation with default control options
///
/// Each call draws a new realization of the matrix strength field.
/// Use [CrackTracer] with `Control::seed` for reproducible runs.
pub fn run_cracking_simulation(
    param: &ParamMaterial,
    disc: &ParamDiscretization,
    progress: Option<&mut dyn FnMut(f64)>,
) -> Result<CrackingHistory, StrError> {
    let tracer = CrackTracer::new(param, disc, &Control::new())?;
    tracer.run(progress)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
