//! Beam Solver Example - the textbook cases

use beam_solver::prelude::*;

fn print_summary(title: &str, beam: &Beam, result: &AnalysisResult) {
    println!("=== {} ===", title);
    println!("Length: {} m, {} sample points\n", beam.length, result.samples.len());

    for r in &result.reactions {
        match r.moment_value {
            Some(m) => println!(
                "  {} @ {:.2}: R = {:.3}, M = {:.3}",
                r.kind, r.position, r.force_value, m
            ),
            None => println!("  {} @ {:.2}: R = {:.3}", r.kind, r.position, r.force_value),
        }
    }

    println!();
    println!("  Shear:  max {:>9.3}, min {:>9.3}", result.max_shear, result.min_shear);
    println!("  Moment: max {:>9.3}, min {:>9.3}", result.max_moment, result.min_moment);
    if let Some(gov) = result.governing_moment() {
        println!("  Governing moment {:.3} at x = {:.2}", gov.moment, gov.x);
    }
    println!();
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Simply supported span, 10 kN at midspan
    //
    //            10 kN
    //              |
    //              v
    //   o========================o
    //   ^                        ^
    //  Pin                     Roller
    //
    let simple = Beam::simply_supported(10.0).with_load(Load::point(10.0, 5.0));
    let result = simple.analyze()?;
    print_summary("Simply supported, midspan point load", &simple, &result);

    // Cantilever, 10 kN at the free end
    let cantilever = Beam::cantilever(5.0).with_load(Load::point(10.0, 5.0));
    let result = cantilever.analyze()?;
    print_summary("Cantilever, tip load", &cantilever, &result);

    // Partial UDL: 3 kN/m from 2 m to 4 m
    let udl = Beam::simply_supported(10.0).with_load(Load::uniform(3.0, 2.0, 4.0));
    let result = udl.analyze()?;
    print_summary("Simply supported, partial UDL", &udl, &result);

    // Triangular load rising to 6 kN/m over the full span, plus an applied moment
    let mixed = Beam::simply_supported(6.0)
        .with_load(Load::triangular(6.0, 0.0, 6.0))
        .with_load(Load::moment(4.0, 2.0));
    let result = mixed.analyze()?;
    print_summary("Triangular load with applied moment", &mixed, &result);

    println!("=== Calculation report ===\n");
    println!("{}", CalculationReport::new(&mixed, &result));

    // Two rollers cannot carry this load
    let unstable = Beam::new(10.0)
        .with_support(Support::roller(0.0))
        .with_support(Support::roller(10.0))
        .with_load(Load::point(10.0, 5.0));
    match unstable.analyze() {
        Ok(_) => println!("Unexpected: unstable beam solved"),
        Err(e) => println!("Rejected as expected ({}): {}", e.kind(), e),
    }

    Ok(())
}
