use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use hull2::prelude::*;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;
mod provenance;

use points::{read_points_csv, write_json, write_points_csv, HullReport};
use provenance::{write_sidecar, Provenance};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Planar convex hulls: compute, render, report")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute one hull; write a JSON report and optionally a BMP
    Hull(HullArgs),
    /// Random points, both algorithms, data + hull bitmaps under one directory
    Demo(DemoArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Copy, Debug)]
struct CanvasArgs {
    #[arg(long, default_value_t = 512)]
    width: usize,
    #[arg(long, default_value_t = 512)]
    height: usize,
}

impl CanvasArgs {
    fn cfg(self) -> RenderCfg {
        RenderCfg {
            width: self.width,
            height: self.height,
            ..RenderCfg::default()
        }
    }
}

#[derive(Args, Debug)]
struct HullArgs {
    /// quick | quickhull | gift | giftwrapping | jarvis
    #[arg(long, default_value = "quickhull")]
    algo: HullAlgorithm,
    /// CSV file with `x` and `y` columns
    #[arg(long, conflicts_with = "random")]
    input: Option<PathBuf>,
    /// Draw this many uniform points in the unit square instead of reading a file
    #[arg(long)]
    random: Option<usize>,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// JSON report path; a `<stem>.provenance.json` sidecar is written next to it
    #[arg(long)]
    out: PathBuf,
    /// Optional BMP with the input points and hull edges
    #[arg(long)]
    image: Option<PathBuf>,
    #[command(flatten)]
    canvas: CanvasArgs,
}

#[derive(Args, Debug)]
struct DemoArgs {
    #[arg(long, default_value = "data/demo")]
    out_dir: PathBuf,
    #[arg(long, default_value_t = 20)]
    count: usize,
    /// RNG seed; defaults to the current UNIX time in seconds
    #[arg(long)]
    seed: Option<u64>,
    #[command(flatten)]
    canvas: CanvasArgs,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull(args) => hull(args),
        Action::Demo(args) => demo(args),
        Action::Report => report(),
    }
}

fn hull(args: HullArgs) -> Result<()> {
    let algo = args.algo;
    let (points, viewport, seed) = match (&args.input, args.random) {
        (Some(path), _) => {
            let pts = read_points_csv(path)?;
            let viewport = Viewport::fit(&pts);
            (pts, viewport, None)
        }
        (None, Some(count)) => {
            let cfg = PointCloudCfg {
                count,
                ..PointCloudCfg::default()
            };
            (draw_points(cfg, args.seed), Viewport::unit(), Some(args.seed))
        }
        (None, None) => bail!("either --input or --random is required"),
    };
    tracing::info!(%algo, points = points.len(), seed = ?seed, "hull");

    let vertices = algo
        .compute(&points)
        .with_context(|| format!("{algo} on {} points", points.len()))?;
    let edges = get_convex_hull_lines(&vertices);
    for p in &vertices {
        tracing::debug!(x = p.x(), y = p.y(), "hull_vertex");
    }
    tracing::info!(vertices = vertices.len(), edges = edges.len(), "hull_done");

    write_json(
        &args.out,
        &HullReport::new(algo, seed, &points, &vertices, &edges),
    )?;

    let mut prov = Provenance::new(json!({
        "algo": algo.name(),
        "input": args.input.as_ref().map(|p| p.to_string_lossy().into_owned()),
        "random": args.random,
        "seed": seed,
        "width": args.canvas.width,
        "height": args.canvas.height
    }))
    .with_run(algo, points.len(), vertices.len(), edges.len());
    if let Some(image) = &args.image {
        let mut canvas = Canvas::new(args.canvas.cfg(), viewport);
        canvas.draw_points(&points);
        canvas.draw_lines(&edges);
        write_bmp(image, &canvas).with_context(|| format!("writing {}", image.display()))?;
        tracing::info!(image = %image.display(), "image_written");
        prov = prov.with_output(image);
    }
    let sidecar = write_sidecar(&args.out, prov)?;
    tracing::info!(out = %args.out.display(), provenance = %sidecar.display(), "outputs_written");
    Ok(())
}

fn demo(args: DemoArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(clock_seed);
    let cfg = PointCloudCfg {
        count: args.count,
        ..PointCloudCfg::default()
    };
    let points = draw_points(cfg, seed);
    tracing::info!(count = args.count, seed, out_dir = %args.out_dir.display(), "demo");
    for p in &points {
        tracing::info!(x = p.x(), y = p.y(), "data_point");
    }

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    let csv_path = args.out_dir.join("data.csv");
    write_points_csv(&csv_path, &points)?;

    let mut base = Canvas::new(args.canvas.cfg(), Viewport::unit());
    base.draw_points(&points);
    let data_path = args.out_dir.join("data.bmp");
    write_bmp(&data_path, &base).with_context(|| format!("writing {}", data_path.display()))?;

    let mut prov = Provenance::new(json!({
        "count": args.count,
        "seed": seed,
        "width": args.canvas.width,
        "height": args.canvas.height
    }))
    .with_output(&csv_path)
    .with_output(&data_path);

    let mut reports = Vec::with_capacity(HullAlgorithm::ALL.len());
    for algo in HullAlgorithm::ALL {
        let vertices = algo.compute(&points).with_context(|| format!("{algo} demo"))?;
        for p in &vertices {
            tracing::info!(%algo, x = p.x(), y = p.y(), "hull_vertex");
        }
        let edges = get_convex_hull_lines(&vertices);
        let mut canvas = base.clone();
        canvas.draw_lines(&edges);
        let path = args.out_dir.join(format!("convex_hull_{}.bmp", algo.name()));
        write_bmp(&path, &canvas).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(%algo, image = %path.display(), "image_written");
        prov = prov
            .with_run(algo, points.len(), vertices.len(), edges.len())
            .with_output(&path);
        reports.push(HullReport::new(algo, Some(seed), &points, &vertices, &edges));
    }

    let summary = args.out_dir.join("demo.json");
    write_json(&summary, &reports)?;
    write_sidecar(&summary, prov)?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "hull2_version": hull2::VERSION,
        "algorithms": HullAlgorithm::ALL.iter().map(|a| a.name()).collect::<Vec<_>>(),
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::path::Path;
    use tempfile::tempdir;

    fn is_bmp(path: &Path) -> bool {
        fs::read(path).map(|b| b.starts_with(b"BM")).unwrap_or(false)
    }

    #[test]
    fn parses_hull_subcommand() {
        let cmd = Cmd::try_parse_from([
            "cli", "hull", "--algo", "gift", "--random", "12", "--seed", "3", "--out", "o.json",
        ])
        .unwrap();
        match cmd.action {
            Action::Hull(args) => {
                assert_eq!(args.algo, HullAlgorithm::GiftWrapping);
                assert_eq!(args.random, Some(12));
                assert_eq!(args.seed, 3);
                assert_eq!(args.canvas.width, 512);
            }
            _ => panic!("expected hull"),
        }
        assert!(Cmd::try_parse_from([
            "cli", "hull", "--input", "a.csv", "--random", "3", "--out", "o.json"
        ])
        .is_err());
        let err = Cmd::try_parse_from(["cli", "hull", "--algo", "graham", "--out", "o.json"])
            .err()
            .unwrap();
        assert!(err.to_string().contains("unknown hull algorithm `graham`"));
    }

    #[test]
    fn hull_from_csv_writes_report_image_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pts.csv");
        fs::write(&input, "x,y\n0,0\n-1,-1\n0,4\n3,2\n5,6\n0,1.5\n").unwrap();
        let out = dir.path().join("out").join("hull.json");
        let image = dir.path().join("out").join("hull.bmp");
        hull(HullArgs {
            algo: HullAlgorithm::QuickHull,
            input: Some(input),
            random: None,
            seed: 0,
            out: out.clone(),
            image: Some(image.clone()),
            canvas: CanvasArgs {
                width: 64,
                height: 48,
            },
        })
        .unwrap();

        let report: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(report["algo"], "quickhull");
        assert_eq!(report["hull"].as_array().unwrap().len(), 4);
        assert_eq!(report["edges"].as_array().unwrap().len(), 4);
        assert!(report["seed"].is_null());
        assert!(is_bmp(&image));
        let sidecar: Value = serde_json::from_slice(
            &fs::read(dir.path().join("out").join("hull.provenance.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(sidecar["runs"][0]["algo"], "quickhull");
        assert_eq!(sidecar["runs"][0]["points"], 6);
        assert_eq!(sidecar["runs"][0]["vertices"], 4);
        assert_eq!(sidecar["outputs"][1], image.to_string_lossy().as_ref());
    }

    #[test]
    fn hull_requires_a_point_source() {
        let dir = tempdir().unwrap();
        let err = hull(HullArgs {
            algo: HullAlgorithm::QuickHull,
            input: None,
            random: None,
            seed: 0,
            out: dir.path().join("o.json"),
            image: None,
            canvas: CanvasArgs {
                width: 8,
                height: 8,
            },
        })
        .unwrap_err();
        assert!(err.to_string().contains("--input or --random"));
    }

    #[test]
    fn hull_on_empty_cloud_fails_with_invalid_input() {
        let dir = tempdir().unwrap();
        let err = hull(HullArgs {
            algo: HullAlgorithm::GiftWrapping,
            input: None,
            random: Some(0),
            seed: 0,
            out: dir.path().join("o.json"),
            image: None,
            canvas: CanvasArgs {
                width: 8,
                height: 8,
            },
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("invalid input"));
    }

    #[test]
    fn demo_writes_all_bitmaps() {
        let dir = tempdir().unwrap();
        demo(DemoArgs {
            out_dir: dir.path().join("demo"),
            count: 20,
            seed: Some(11),
            canvas: CanvasArgs {
                width: 32,
                height: 32,
            },
        })
        .unwrap();
        let d = dir.path().join("demo");
        for name in [
            "data.bmp",
            "convex_hull_quickhull.bmp",
            "convex_hull_giftwrapping.bmp",
        ] {
            assert!(is_bmp(&d.join(name)), "{name} missing");
        }
        let summary: Value = serde_json::from_slice(&fs::read(d.join("demo.json")).unwrap()).unwrap();
        let runs = summary.as_array().unwrap();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0]["seed"], 11);
        assert_eq!(read_points_csv(&d.join("data.csv")).unwrap().len(), 20);
        assert!(d.join("demo.provenance.json").exists());
    }
}
