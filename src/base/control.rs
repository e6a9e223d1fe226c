use super::{CONTROL_MIN_TOL, DEFAULT_N_MAX_ITERATIONS, DEFAULT_TOL_RESIDUAL};

/// Holds the options to control the cracking simulation
#[derive(Clone, Copy, Debug)]
pub struct Control {
    /// Seed of the random generator of the matrix strength field
    ///
    /// None means that the generator is seeded from the operating system (a new realization each run)
    pub seed: Option<u64>,

    /// Maximum number of iterations of the local crack-load search
    pub n_max_iterations: usize,

    /// Absolute tolerance for the residual of the local crack-load search
    ///
    /// The residual is scaled by (1 + local strength).
    pub tol_residual: f64,

    /// Maximum number of cracks
    ///
    /// None means that the number of cracks is bounded by the number of material points only.
    pub n_max_cracks: Option<usize>,

    /// Verbose mode: prints one line per cracking event
    pub verbose: bool,
}

impl Control {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        Control {
            seed: None,
            n_max_iterations: DEFAULT_N_MAX_ITERATIONS,
            tol_residual: DEFAULT_TOL_RESIDUAL,
            n_max_cracks: None,
            verbose: false,
        }
    }

    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if self.n_max_iterations < 1 {
            return Some(format!(
                "n_max_iterations = {} is incorrect; it must be ≥ 1",
                self.n_max_iterations
            ));
        }
        if !(self.tol_residual >= CONTROL_MIN_TOL) {
            return Some(format!(
                "tol_residual = {:?} is incorrect; it must be ≥ {:e}",
                self.tol_residual, CONTROL_MIN_TOL
            ));
        }
        if let Some(n) = self.n_max_cracks {
            if n < 1 {
                return Some(format!("n_max_cracks = {} is incorrect; it must be ≥ 1", n));
            }
        }
        None // all good
    }

    /// Prints the header of the table with cracking events
    #[inline]
    pub fn print_header(&self) {
        if self.verbose {
            println!(
                "{:>6} {:>13} {:>13} {:>13} {:>13}",
                "crack", "x", "σc", "εc", "spacing"
            );
        }
    }

    /// Prints the data of a new crack
    #[inline]
    #[rustfmt::skip]
    pub fn print_crack(&self, index: usize, x: f64, sig_c: f64, eps_c: f64, spacing: f64) {
        if !self.verbose {
            return;
        }
        println!(
            "{:>6} {:>13.6e} {:>13.6e} {:>13.6e} {:>13.6e}",
            index + 1, x, sig_c, eps_c, spacing
        );
    }

    /// Prints the data of the ultimate (saturated) state
    #[inline]
    pub fn print_saturation(&self, n_cracks: usize, sig_cu: f64, eps_cu: f64, spacing: f64) {
        if !self.verbose {
            return;
        }
        println!(
            "{:>6} {:>13} {:>13.6e} {:>13.6e} {:>13.6e}",
            "✅", ".", sig_cu, eps_cu, spacing
        );
        println!("saturated with {} cracks", n_cracks);
    }
}

impl Default for Control {
    fn default() -> Self {
        Control::new()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
