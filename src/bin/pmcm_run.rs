use pmcm::prelude::*;
use russell_lab::format_nanoseconds;
use std::time::Instant;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "pmcm_run",
    about = "Traces the multiple cracking of a fiber-reinforced brittle-matrix specimen"
)]
struct Options {
    /// Young's modulus of the matrix
    #[structopt(long, default_value = "28000")]
    em: f64,

    /// Young's modulus of the fibers
    #[structopt(long, default_value = "180000")]
    ef: f64,

    /// Reinforcement ratio
    #[structopt(long, default_value = "0.01")]
    vf: f64,

    /// Bond intensity
    #[structopt(long, default_value = "8")]
    tt: f64,

    /// Ultimate composite strength
    #[structopt(long, default_value = "20")]
    sig_cu: f64,

    /// Scale of the matrix strength
    #[structopt(long, default_value = "10")]
    sig_mu: f64,

    /// Weibull modulus of the matrix strength
    #[structopt(long, default_value = "10")]
    m: f64,

    /// Number of material points
    #[structopt(long, default_value = "5000")]
    n_x: usize,

    /// Length of the specimen
    #[structopt(long, default_value = "500")]
    l_x: f64,

    /// Seed of the random matrix strength field
    #[structopt(long)]
    seed: Option<u64>,

    /// Prints one line per crack
    #[structopt(short, long)]
    verbose: bool,

    /// Prints the whole cracking history as JSON
    #[structopt(long)]
    json: bool,
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();

    // parameters
    let param = ParamMaterial {
        em: options.em,
        ef: options.ef,
        vf: options.vf,
        tt: options.tt,
        sig_cu: options.sig_cu,
        sig_mu: options.sig_mu,
        m: options.m,
    };
    let disc = ParamDiscretization {
        n_x: options.n_x,
        l_x: options.l_x,
    };
    let mut control = Control::new();
    control.seed = options.seed;
    control.verbose = options.verbose && !options.json;

    // run
    let start = Instant::now();
    let tracer = CrackTracer::new(&param, &disc, &control)?;
    let history = tracer.run(None)?;
    let elapsed = start.elapsed().as_nanos();

    // output
    if options.json {
        println!("{}", history.to_json_string()?);
        return Ok(());
    }
    let last = history.len() - 1;
    let thin_line = format!("{:─^1$}", "", 40);
    println!("\n{}", thin_line);
    println!("number of cracks       = {}", history.n_cracks());
    println!("final crack spacing    = {:.6}", history.spacing[last]);
    println!("ultimate strain        = {:.6e}", history.eps_c[last]);
    println!("elapsed time           = {}", format_nanoseconds(elapsed));
    println!("{}\n", thin_line);
    Ok(())
}
