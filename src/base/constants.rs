/// Defines an auxiliary directory where the test result files (e.g., figures) are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/pmcm/test";

/// Defines the default maximum number of iterations of the local crack-load search
pub const DEFAULT_N_MAX_ITERATIONS: usize = 50;

/// Defines the default tolerance on the residual of the local crack-load search
pub const DEFAULT_TOL_RESIDUAL: f64 = 1e-10;

/// Defines the smallest allowed tolerance (Control)
pub const CONTROL_MIN_TOL: f64 = 1e-15;
