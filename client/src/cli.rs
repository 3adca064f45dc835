use anyhow::{bail, Context};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub width: usize,
    pub height: usize,

    /// Initial cell data, one '0'/'1' per cell in row-major order.
    /// The grid is randomly seeded when omitted.
    pub bits: Option<String>,
}

pub fn parse_args<I>(mut args: I) -> anyhow::Result<Config>
where
    I: Iterator<Item = String>,
{
    let width = args
        .next()
        .context("missing width")?
        .parse::<usize>()
        .context("width is not a number")?;

    let height = args
        .next()
        .context("missing height")?
        .parse::<usize>()
        .context("height is not a number")?;

    let bits = args.next();

    if args.next().is_some() {
        bail!("too many arguments");
    }

    Ok(Config {
        width,
        height,
        bits,
    })
}

pub fn print_usage(program: &str) {
    eprintln!("usage: {program} <width> <height>");
    eprintln!("       {program} <width> <height> <bits>");
}
