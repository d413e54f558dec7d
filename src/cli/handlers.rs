use std::io::{self, BufWriter, Write};

use tracing::debug;

use crate::{
    core::{
        config::StrengthUpdate,
        error::BiasError,
        rng::Lcg,
        service::{Draw, RngService},
        stats::Summary,
    },
    global,
    render::{Histogram, terminal_width},
};

use super::parse::{HistogramArgs, SampleArgs, SourceArgs};

/// Explicit `--bias-prob` / `--std` override the `--strength` list.
fn strength_update(a: &SourceArgs) -> StrengthUpdate {
    let parsed = a
        .strength
        .as_deref()
        .map(StrengthUpdate::parse)
        .unwrap_or_default();
    parsed.merge(&StrengthUpdate {
        bias_prob: a.bias_prob,
        std: a.std,
    })
}

fn prepare(svc: &mut RngService<Lcg>, a: &SourceArgs) {
    let update = strength_update(a);
    if !update.is_empty() {
        svc.configure(&update);
    }
    if a.restore {
        svc.restore();
    } else if a.turbo {
        svc.set_deterministic_override(true);
    }
}

/// Seeded runs get a private service; otherwise the process-wide one is used.
fn with_source<R>(a: &SourceArgs, f: impl FnOnce(&mut RngService<Lcg>) -> R) -> R {
    match a.seed {
        Some(seed) => {
            debug!(seed, "using a private seeded source");
            let mut svc = RngService::new(Lcg::seed(seed));
            svc.install();
            prepare(&mut svc, a);
            f(&mut svc)
        }
        None => global::with(|svc| {
            prepare(svc, a);
            f(svc)
        }),
    }
}

fn collect(a: &SourceArgs, n: usize) -> (Vec<Draw>, f64) {
    with_source(a, |svc| {
        let draws = (0..n).map(|_| svc.draw()).collect();
        (draws, svc.config().bias_probability())
    })
}

/// One value per line, straight from the source; nothing is buffered in memory
/// beyond the writer.
fn write_draws<W: Write>(svc: &mut RngService<Lcg>, n: usize, out: &mut W) -> io::Result<()> {
    for _ in 0..n {
        writeln!(out, "{}", svc.random())?;
    }
    out.flush()
}

pub fn sample(a: &SampleArgs) -> Result<(), BiasError> {
    let mut out = BufWriter::new(io::stdout().lock());
    with_source(&a.source, |svc| write_draws(svc, a.count, &mut out))?;
    Ok(())
}

pub fn stats(a: &SampleArgs) -> Result<(), BiasError> {
    let (draws, configured) = collect(&a.source, a.count);
    let s = Summary::from_draws(&draws)?;

    let mut out = io::stdout().lock();
    writeln!(out, "draws         {}", s.count)?;
    writeln!(out, "mean          {:.5}", s.mean)?;
    writeln!(out, "std dev       {:.5}", s.std_dev)?;
    writeln!(out, "min / max     {:.5} / {:.5}", s.min, s.max)?;
    match s.biased_fraction {
        Some(f) => writeln!(out, "biased share  {f:.4}   (configured {configured})")?,
        None => writeln!(out, "biased share  n/a     (mixer bypassed)")?,
    }
    Ok(())
}

pub fn histogram(a: &HistogramArgs) -> Result<(), BiasError> {
    // validate before drawing anything
    let mut h = Histogram::new(a.bins)?;
    with_source(&a.source, |svc| {
        for _ in 0..a.count {
            h.add(svc.random());
        }
    });
    let mut out = io::stdout().lock();
    write!(out, "{}", h.render(terminal_width()))?;
    Ok(())
}

pub fn settings(a: &SourceArgs) -> Result<(), BiasError> {
    let status = with_source(a, |svc| svc.status());
    let mut out = io::stdout().lock();
    writeln!(out, "biasProb  {}", status.bias_probability)?;
    writeln!(out, "std       {}", status.standard_deviation)?;
    writeln!(out, "enabled   {}", status.installed)?;
    writeln!(out, "turbo     {}", status.deterministic)?;
    Ok(())
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "cargo run --"; // adjust if you rename the binary
    println!(
        "
Example invocations
-------------------
• Summary stats      : {bin} stats -n 100000
• Tighter bias       : {bin} stats --bias-prob 1 --std 0.02
• Lenient strength   : {bin} histogram --strength \"biasProb=0.8, std=0.1\"
• Reproducible draws : {bin} sample -n 10 --seed 42
• Turbo (always 0.5) : {bin} sample -n 5 --turbo
• Original uniform   : {bin} histogram --restore --bins 10
• Trace output       : {bin} stats --debug
"
    );
}
