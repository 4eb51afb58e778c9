#[macro_use]
extern crate log;
extern crate env_logger;
extern crate complex;

use std::time::Instant;
use complex::Complex;

fn main() {
    env_logger::init();
    let start_time = Instant::now();
    let a = Complex::new(5, 6);
    let b = Complex::new(-3, 4);
    info!("a = {:?}, b = {:?}", a, b);

    let results = vec![
        ("a", a.to_string()),
        ("b", b.to_string()),
        ("b + a", b.plus(a).to_string()),
        ("a - b", a.minus(b).to_string()),
        ("a * b", a.times(b).to_string()),
        ("b * a", b.times(a).to_string()),
        ("a / b", a.divides(b).to_string()),
        ("conj(a)", a.conjugate().to_string()),
        ("|a|", a.abs().to_string()),
        ("phase(a)", a.phase().to_string()),
        ("1 / a", a.reciprocal().to_string()),
        ("2.5 * a", a.scale(2.5).to_string()),
        ("exp(a)", a.exp().to_string()),
        ("sin(a)", a.sin().to_string()),
        ("cos(a)", a.cos().to_string()),
        ("tan(a)", a.tan().to_string()),
    ];

    for (label, value) in results {
        debug!("{} = {}", label, value);
        println!("{:<9} = {}", label, value);
    }
    let elapsed = start_time.elapsed();
    info!("time taken {:.*}ms", 3, elapsed.as_secs_f64() * 1000.0);
}
