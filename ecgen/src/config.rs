//! Where the curve comes from: flags, a JSON curve file, a named preset, or
//! interactive answers, in that order of precedence.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use structopt::StructOpt;
use weierstrass::{presets, BigInt, BigUint, CurveGroup, Point};

use crate::export::OutputFormat;
use crate::prompt::Prompter;

#[derive(StructOpt, Debug)]
#[structopt(
    name = "ecgen",
    about = "Enumerate k*G on y^2 = x^3 + ax + b mod p, save the points and plot them"
)]
pub struct Opt {
    #[structopt(long, allow_hyphen_values = true, help = "curve coefficient a")]
    pub a: Option<BigInt>,
    #[structopt(long, allow_hyphen_values = true, help = "curve coefficient b")]
    pub b: Option<BigInt>,
    #[structopt(long, help = "field modulus p (an odd prime)")]
    pub p: Option<BigUint>,
    #[structopt(long, allow_hyphen_values = true, help = "x-coordinate of the base point G")]
    pub gx: Option<BigInt>,
    #[structopt(long, allow_hyphen_values = true, help = "y-coordinate of the base point G")]
    pub gy: Option<BigInt>,
    #[structopt(long, help = "enumerate private keys 1..=N")]
    pub scalar_modulus: Option<u64>,

    #[structopt(long, parse(from_os_str), help = "JSON file with a, b, p, gx, gy and scalar_modulus")]
    pub curve: Option<PathBuf>,
    #[structopt(long, possible_values = &presets::NAMES, help = "named curve")]
    pub preset: Option<String>,

    #[structopt(long, parse(from_os_str), default_value = "point.txt")]
    pub points_out: PathBuf,
    #[structopt(long, default_value = "text", possible_values = &["text", "json"])]
    pub format: OutputFormat,
    #[structopt(long, parse(from_os_str), default_value = "elliptic_curve_points.png")]
    pub plot_out: PathBuf,
    #[structopt(long, help = "skip rendering the scatter plot")]
    pub no_plot: bool,
    #[structopt(long, help = "also sample a random key pair on the curve")]
    pub keygen: bool,
}

/// An integer in a curve file: a JSON number, or a decimal string for values
/// beyond 64 bits.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum IntLiteral {
    Signed(i64),
    Unsigned(u64),
    Text(String),
}

impl IntLiteral {
    fn to_bigint(&self, key: &str) -> Result<BigInt> {
        match self {
            IntLiteral::Signed(v) => Ok(BigInt::from(*v)),
            IntLiteral::Unsigned(v) => Ok(BigInt::from(*v)),
            IntLiteral::Text(s) => s
                .trim()
                .parse()
                .with_context(|| format!("{key} = {s:?} is not an integer")),
        }
    }

    fn to_biguint(&self, key: &str) -> Result<BigUint> {
        self.to_bigint(key)?
            .to_biguint()
            .ok_or_else(|| anyhow!("{key} must not be negative"))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CurveFile {
    a: Option<IntLiteral>,
    b: Option<IntLiteral>,
    p: Option<IntLiteral>,
    gx: Option<IntLiteral>,
    gy: Option<IntLiteral>,
    scalar_modulus: Option<u64>,
}

/// Curve settings gathered so far; any field may still be missing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PartialInput {
    pub a: Option<BigInt>,
    pub b: Option<BigInt>,
    pub p: Option<BigUint>,
    pub gx: Option<BigInt>,
    pub gy: Option<BigInt>,
    pub scalar_modulus: Option<u64>,
}

/// Fully resolved inputs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveInput {
    pub a: BigInt,
    pub b: BigInt,
    pub p: BigUint,
    pub gx: BigInt,
    pub gy: BigInt,
    pub scalar_modulus: u64,
}

impl PartialInput {
    pub fn from_opt(opt: &Opt) -> Self {
        Self {
            a: opt.a.clone(),
            b: opt.b.clone(),
            p: opt.p.clone(),
            gx: opt.gx.clone(),
            gy: opt.gy.clone(),
            scalar_modulus: opt.scalar_modulus,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: CurveFile = serde_json::from_str(json).context("parsing curve file")?;
        file.try_into()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let reader = BufReader::new(
            File::open(path).with_context(|| format!("opening curve file {}", path.display()))?,
        );
        let file: CurveFile = serde_json::from_reader(reader)
            .with_context(|| format!("parsing curve file {}", path.display()))?;
        file.try_into()
    }

    /// The curve and base point of an existing group; leaves the scalar range open.
    pub fn from_group(group: &CurveGroup) -> Self {
        let params = group.params();
        let (gx, gy) = match group.generator() {
            Point::Affine { x, y } => (Some(x.clone().into()), Some(y.clone().into())),
            Point::Identity => (None, None),
        };
        Self {
            a: Some(params.a().clone().into()),
            b: Some(params.b().clone().into()),
            p: Some(params.p().clone()),
            gx,
            gy,
            scalar_modulus: None,
        }
    }

    /// Fill every missing field from `fallback`.
    pub fn or(self, fallback: Self) -> Self {
        Self {
            a: self.a.or(fallback.a),
            b: self.b.or(fallback.b),
            p: self.p.or(fallback.p),
            gx: self.gx.or(fallback.gx),
            gy: self.gy.or(fallback.gy),
            scalar_modulus: self.scalar_modulus.or(fallback.scalar_modulus),
        }
    }

    /// Ask for whatever is still missing.
    pub fn complete<R: BufRead, W: Write>(self, prompter: &mut Prompter<R, W>) -> Result<CurveInput> {
        let a = match self.a {
            Some(a) => a,
            None => prompter.ask("Enter the curve parameter a of y^2 = x^3 + ax + b", "0")?,
        };
        let b = match self.b {
            Some(b) => b,
            None => prompter.ask("Enter the curve parameter b of y^2 = x^3 + ax + b", "7")?,
        };
        let p = match self.p {
            Some(p) => p,
            None => prompter.ask("Enter the public key modulus p", "67")?,
        };
        let gx = match self.gx {
            Some(gx) => gx,
            None => prompter.ask("Enter the x-coordinate of G", "2")?,
        };
        let gy = match self.gy {
            Some(gy) => gy,
            None => prompter.ask("Enter the y-coordinate of G", "22")?,
        };
        let scalar_modulus = match self.scalar_modulus {
            Some(n) => n,
            None => prompter.ask("Enter the private key modulus", "79")?,
        };

        Ok(CurveInput {
            a,
            b,
            p,
            gx,
            gy,
            scalar_modulus,
        })
    }
}

impl TryFrom<CurveFile> for PartialInput {
    type Error = anyhow::Error;

    fn try_from(file: CurveFile) -> Result<Self> {
        let signed = |v: Option<IntLiteral>, key: &str| v.map(|v| v.to_bigint(key)).transpose();
        Ok(Self {
            a: signed(file.a, "a")?,
            b: signed(file.b, "b")?,
            p: file.p.map(|v| v.to_biguint("p")).transpose()?,
            gx: signed(file.gx, "gx")?,
            gy: signed(file.gy, "gy")?,
            scalar_modulus: file.scalar_modulus,
        })
    }
}

impl CurveInput {
    pub fn build_group(&self) -> weierstrass::Result<CurveGroup> {
        CurveGroup::from_integers(
            self.a.clone(),
            self.b.clone(),
            self.p.clone(),
            self.gx.clone(),
            self.gy.clone(),
        )
    }
}

/// Merge flags, curve file and preset, then prompt for the rest.
pub fn resolve<R: BufRead, W: Write>(opt: &Opt, prompter: &mut Prompter<R, W>) -> Result<CurveInput> {
    let mut input = PartialInput::from_opt(opt);

    if let Some(path) = &opt.curve {
        input = input.or(PartialInput::load(path)?);
    }

    if let Some(name) = &opt.preset {
        let group = presets::by_name(name).ok_or_else(|| anyhow!("unknown preset {name:?}"))??;
        input = input.or(PartialInput::from_group(&group));
    }

    input.complete(prompter)
}
