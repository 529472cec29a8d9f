mod config;
mod export;
mod plot;
mod prompt;

use std::io;

use anyhow::{bail, Context, Result};
use structopt::StructOpt;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use weierstrass::{presets, BigUint, CurveGroup, GeneratedEntry, PrivateKey};

use config::Opt;
use prompt::Prompter;

// Walking G, 2G, ... to find the order is only done for curves this small.
const MAX_ORDER_WALK: u64 = 1 << 24;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    run(Opt::from_args())
}

fn run(opt: Opt) -> Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let input = config::resolve(&opt, &mut prompter)?;

    let group = input.build_group().context("invalid curve parameters")?;
    info!(
        curve = %group.params(),
        generator = %group.generator(),
        scalar_modulus = input.scalar_modulus,
        "curve ready"
    );
    if group.params().is_singular() {
        warn!("the curve is singular; its points do not form a group");
    }

    let entries = enumerate(&group, input.scalar_modulus).context("enumerating k*G")?;
    info!(points = entries.len(), "generated points");
    if let Some(order) = first_skipped(&entries, input.scalar_modulus) {
        info!(order, "G reaches the identity; later points repeat");
    }

    export::save_entries(&entries, opt.format, &opt.points_out)?;
    info!(path = %opt.points_out.display(), "points saved");

    if !opt.no_plot {
        plot::plot_points(&entries, group.params().p(), &opt.plot_out)?;
        info!(path = %opt.plot_out.display(), "plot saved");
    }

    if opt.keygen {
        let order = base_order(&group)?;
        let mut rng = rand::rng();
        let sk = PrivateKey::random(&mut rng, &order)?;
        let pk = sk.public_key(&group)?;
        info!(order = %order, "sampled key pair");
        println!("private key: {}", sk.scalar());
        println!("public key:  {}", pk.point());
    }

    Ok(())
}

#[cfg(feature = "parallel")]
fn enumerate(group: &CurveGroup, scalar_modulus: u64) -> Result<Vec<GeneratedEntry>> {
    Ok(weierstrass::generate(group, scalar_modulus)?)
}

#[cfg(not(feature = "parallel"))]
fn enumerate(group: &CurveGroup, scalar_modulus: u64) -> Result<Vec<GeneratedEntry>> {
    let step = (scalar_modulus / 10).max(1);
    let mut entries = Vec::new();
    let mut last_logged = 0;

    for entry in weierstrass::SubgroupEnumerator::new(group, scalar_modulus)? {
        let entry = entry?;
        if entry.scalar - last_logged >= step {
            last_logged = entry.scalar;
            tracing::debug!(scalar = entry.scalar, total = scalar_modulus, "progress");
        }
        entries.push(entry);
    }

    Ok(entries)
}

/// The first scalar in `1..=scalar_modulus` missing from `entries`, i.e. the
/// order of `G` when the range reaches it.
fn first_skipped(entries: &[GeneratedEntry], scalar_modulus: u64) -> Option<u64> {
    let mut expected = 1;
    for entry in entries {
        if entry.scalar != expected {
            return Some(expected);
        }
        expected += 1;
    }
    (expected <= scalar_modulus).then_some(expected)
}

/// Order of `G` on the resolved curve, used as the private key bound.
fn base_order(group: &CurveGroup) -> Result<BigUint> {
    if *group == presets::secp256k1()? {
        return Ok(presets::secp256k1_order());
    }

    // Hasse: #E <= p + 1 + 2 sqrt(p)
    let p = group.params().p();
    let hasse = p + BigUint::from(1u32) + (p.sqrt() + BigUint::from(1u32)) * 2u32;
    let limit = u64::try_from(hasse).unwrap_or(u64::MAX).min(MAX_ORDER_WALK);

    match group.base_order(limit)? {
        Some(order) => Ok(BigUint::from(order)),
        None => bail!("the order of G exceeds {limit}; key sampling needs a smaller curve"),
    }
}
