//! Console front end: reads a curve from stdin, prints its samples and renders it,
//! replaying scripted drags of control points through the interaction loop.

use std::io;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::{App, Arg};

use bezier_lab::console::{read_setup, write_points};
use bezier_lab::{
    BitmapSurface, CurveModel, InteractionLoop, Point2, ScriptedInput, ViewOptions,
};

/// Parse `x0,y0:x1,y1` into the start and end of a drag
fn parse_drag(arg: &str) -> Result<(Point2<f64>, Point2<f64>)> {
    let parse_point = |s: &str| -> Result<Point2<f64>> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("expected x,y but got {:?}", s))?;
        Ok(Point2::new(
            x.trim().parse::<f64>().with_context(|| format!("bad x in {:?}", s))?,
            y.trim().parse::<f64>().with_context(|| format!("bad y in {:?}", s))?,
        ))
    };
    let (from, to) = arg
        .split_once(':')
        .ok_or_else(|| anyhow!("expected x0,y0:x1,y1 but got {:?}", arg))?;
    Ok((parse_point(from)?, parse_point(to)?))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let params = App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(Arg::with_name("tangents")
            .long("tangents")
            .short("t")
            .help("Also asks for a tangent step count and draws the tangent normals"))
        .arg(Arg::with_name("config")
            .long("config")
            .short("c")
            .takes_value(true)
            .help("TOML file with view options (size, fps, radius, normal length, output)"))
        .arg(Arg::with_name("output")
            .long("output")
            .short("o")
            .takes_value(true)
            .help("PNG file the rendered frames are written to"))
        .arg(Arg::with_name("drag")
            .long("drag")
            .short("d")
            .takes_value(true)
            .multiple(true)
            .number_of_values(1)
            .help("Drags the control point under x0,y0 to x1,y1 (eg: -d 100,400:120,300), repeatable"))
        .arg(Arg::with_name("drag-steps")
            .long("drag-steps")
            .takes_value(true)
            .default_value("10")
            .help("Number of frames each drag is spread over"))
        .arg(Arg::with_name("no-render")
            .long("no-render")
            .help("Only prints the curve points"))
        .get_matches();

    let tangents = params.is_present("tangents");
    let mut options = params
        .value_of("config")
        .map(|path| ViewOptions::load_from_file(Path::new(path)))
        .unwrap_or_default();
    if let Some(output) = params.value_of("output") {
        options.output = output.into();
    }
    let drag_steps: usize = params
        .value_of("drag-steps")
        .unwrap_or("10")
        .parse()
        .context("--drag-steps must be a positive integer")?;

    let setup = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        read_setup(stdin.lock(), stdout.lock(), tangents).context("reading the curve from stdin")?
    };

    let mut model = CurveModel::new(setup.config(), setup.control_points)
        .context("the curve parameters are inconsistent")?;

    if !tangents {
        write_points(io::stdout().lock(), model.curve_points())?;
    }

    if params.is_present("no-render") {
        return Ok(());
    }

    let mut input = ScriptedInput::default();
    for arg in params.values_of("drag").into_iter().flatten() {
        let (from, to) = parse_drag(arg)?;
        input = input.drag(from, to, drag_steps);
    }
    // one settled frame after the last drag so the final state is always drawn
    let rest = model.control_points()[0];
    input = input.idle(rest, 1);

    let mut surface = BitmapSurface::new(&options.output, options.size());
    let summary = InteractionLoop::new(options.grab_radius(tangents), options.scene_style())
        .with_frame_interval(options.frame_interval())
        .run(&mut model, &mut input, &mut surface)
        .with_context(|| format!("rendering to {}", surface.path().display()))?;

    log::info!(
        "{} frames written to {} ({} recomputes)",
        summary.frames,
        options.output.display(),
        summary.recomputes
    );
    Ok(())
}
