use pmcm::prelude::*;

// Coarse discretization with only a few material points
//
// TEST GOAL
//
// This test verifies that a degenerate (but valid) discretization with n_x = 5 and n_x = 2
// still terminates with a complete history. The single-point case is rejected.

#[test]
fn test_small_specimen() -> Result<(), StrError> {
    let param = ParamMaterial {
        em: 25_000.0,
        ef: 180_000.0,
        vf: 0.01,
        tt: 12.0,
        sig_cu: 10.0,
        sig_mu: 3.0,
        m: 10_000.0,
    };
    for n_x in [2, 5] {
        let disc = ParamDiscretization { n_x, l_x: 500.0 };
        for seed in 0..10 {
            let mut control = Control::new();
            control.seed = Some(seed);
            let tracer = CrackTracer::new(&param, &disc, &control)?;
            let history = tracer.run(None)?;
            // the points are 125 mm (or 500 mm) apart: every point cracks
            assert_eq!(history.n_cracks(), n_x);
            assert_eq!(history.len(), n_x + 2);
            assert_eq!(history.sig_c[n_x + 1], 10.0);
            for k in 1..history.len() {
                assert!(history.sig_c[k] >= history.sig_c[k - 1]);
                assert!(history.eps_c[k].is_finite());
            }
        }
    }
    let disc = ParamDiscretization { n_x: 1, l_x: 500.0 };
    assert_eq!(
        CrackTracer::new(&param, &disc, &Control::new()).err(),
        Some("n_x must be ≥ 2")
    );
    Ok(())
}
