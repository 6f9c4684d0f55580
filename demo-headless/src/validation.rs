//! Validation checks run against the configured scenario
//!
//! Each check prints a PASS/FAIL line. The run is repeated from scratch so the
//! checks see every frame, not only the reported ones.

use egg_cooling_core::{
    create_stepper, Backend, CoolingSimulation, FieldStats, SimulationParameters,
    TemperatureField,
};

/// Slack for rounding in the stencil sum (°C)
const TOLERANCE: f64 = 1e-9;

struct Check {
    name: &'static str,
    passed: bool,
    detail: String,
}

/// Run every check, print the report, return `true` if all passed
pub fn run_validation(params: &SimulationParameters) -> bool {
    println!("\n=== Running Validation Tests ===\n");

    let checks = [
        check_frame_invariants(params),
        check_symmetry(params),
        check_backends_agree(params),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>();

    let mut all_passed = true;
    for (index, check) in checks.iter().enumerate() {
        println!("Test {}: {}", index + 1, check.name);
        println!("  {}", check.detail);
        if check.passed {
            println!("  ✓ PASS");
        } else {
            println!("  ✗ FAIL");
            all_passed = false;
        }
    }

    println!("\n=== Validation Complete ===");
    all_passed
}

/// Boundary invariant, temperature band and monotone extremum over every frame
fn check_frame_invariants(params: &SimulationParameters) -> Vec<Check> {
    let mut sim = CoolingSimulation::new(*params, Backend::Serial);
    let (lo, hi) = params.temperature_range();
    let cooling = params.ambient_temp() <= params.initial_temp();

    let mut boundary_failure = None;
    let mut band_failure = None;
    let mut monotone_failure = None;
    let mut previous = extremum(&sim.stats(), cooling);

    while !sim.is_complete() {
        sim.advance();
        let frame = sim.frame();

        if boundary_failure.is_none()
            && !sim.mask().is_satisfied_by(sim.field(), params.ambient_temp())
        {
            boundary_failure = Some(frame);
        }

        let stats = sim.stats();
        if band_failure.is_none() && (stats.min < lo - TOLERANCE || stats.max > hi + TOLERANCE) {
            band_failure = Some((frame, stats.min, stats.max));
        }

        let current = extremum(&stats, cooling);
        let worsened = if cooling {
            current > previous + TOLERANCE
        } else {
            current < previous - TOLERANCE
        };
        if monotone_failure.is_none() && worsened {
            monotone_failure = Some((frame, previous, current));
        }
        previous = current;
    }

    let frames = sim.frame();
    vec![
        Check {
            name: "Bath cells hold the ambient temperature",
            passed: boundary_failure.is_none(),
            detail: match boundary_failure {
                Some(frame) => format!("Boundary violated at frame {frame}"),
                None => format!("Checked {frames} frames"),
            },
        },
        Check {
            name: "Temperatures stay between T0 and Tf",
            passed: band_failure.is_none(),
            detail: match band_failure {
                Some((frame, min, max)) => {
                    format!("Frame {frame}: range [{min:.6}, {max:.6}] leaves [{lo}, {hi}]")
                }
                None => format!("All frames within [{lo:.1}, {hi:.1}]°C"),
            },
        },
        Check {
            name: if cooling {
                "Hottest egg temperature never rises"
            } else {
                "Coldest egg temperature never falls"
            },
            passed: monotone_failure.is_none(),
            detail: match monotone_failure {
                Some((frame, before, after)) => {
                    format!("Frame {frame}: {before:.6}°C → {after:.6}°C")
                }
                None => format!("Final extremum {previous:.3}°C"),
            },
        },
    ]
}

fn extremum(stats: &FieldStats, cooling: bool) -> f64 {
    if cooling {
        stats.max
    } else {
        stats.min
    }
}

/// Largest deviation from 90° rotational and mirror symmetry
fn symmetry_error(field: &TemperatureField) -> f64 {
    let n = field.resolution();
    let last = n - 1;
    let mut worst = 0.0_f64;
    for j in 0..n {
        for i in 0..n {
            let t = field.get(i, j);
            for image in [
                field.get(last - i, j),
                field.get(i, last - j),
                field.get(j, last - i),
            ] {
                worst = worst.max((t - image).abs());
            }
        }
    }
    worst
}

fn check_symmetry(params: &SimulationParameters) -> Vec<Check> {
    let mut sim = CoolingSimulation::new(*params, Backend::Serial);
    sim.run_to_completion();
    let error = symmetry_error(sim.field());
    vec![Check {
        name: "Field keeps the square symmetry of the initial condition",
        passed: error < TOLERANCE,
        detail: format!("Largest mirror/rotation mismatch: {error:.3e}°C"),
    }]
}

fn check_backends_agree(params: &SimulationParameters) -> Vec<Check> {
    let serial = create_stepper(params, Backend::Serial);
    let parallel = create_stepper(params, Backend::Parallel);

    let mut sim = CoolingSimulation::new(*params, Backend::Serial);
    let mut a = sim.field().clone();
    let mut b = a.clone();
    let frames = params.frame_count();
    let mut diverged = None;
    for frame in 1..=frames {
        a = serial.step(&a);
        b = parallel.step(&b);
        if diverged.is_none() && a != b {
            diverged = Some(frame);
        }
    }

    // Stepping the driver must reproduce the bare stepper
    sim.run_to_completion();
    let driver_matches = sim.field() == &a;

    vec![Check {
        name: "Serial, parallel and driver runs are bit-identical",
        passed: diverged.is_none() && driver_matches,
        detail: match diverged {
            Some(frame) => format!("Backends diverged at frame {frame}"),
            None if !driver_matches => "Driver diverged from the bare stepper".to_string(),
            None => format!(
                "{frames} frames identical (parallel backend active: {})",
                parallel.is_parallel()
            ),
        },
    }]
}
