use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, builder::TypedValueParser};
use tinyray::{Camera, ImageFormat, Renderer, RendererBuilder, Scene};

/// Minimal sphere raytracer
/// Renders the built-in scene of three spheres on a ground sphere
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// The format of the output image
    #[clap(short = 'f', long, default_value_t = ImageFormat::Bmp)]
    image_format: ImageFormat,

    /// The output path of the rendered image.
    /// By default it's `./output.<image_format>`
    #[clap(short, long)]
    output_path: Option<PathBuf>,

    /// Width (in pixels) of the output image.
    #[clap(long, default_value_t = Renderer::DEFAULT_WIDTH, value_parser = clap::value_parser!(u32).range(1..).map(|v| v as usize))]
    width: usize,

    /// Height (in pixels) of the output image.
    #[clap(long, default_value_t = Renderer::DEFAULT_HEIGHT, value_parser = clap::value_parser!(u32).range(1..).map(|v| v as usize))]
    height: usize,

    /// Field of view of the camera in radians.
    #[clap(long, default_value_t = Renderer::DEFAULT_FOV)]
    fov: f64,

    /// Show progress of the render
    #[clap(long)]
    progress: bool,
}

fn render(args: &Args) -> anyhow::Result<tinyray::Canvas> {
    let renderer = RendererBuilder::default()
        .scene(Scene::showcase())
        .camera(Camera::new(args.width, args.height, args.fov))
        .use_progress_bar(args.progress)
        .build()
        .context("Failed to build renderer")?;

    Ok(renderer.render())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!(
        "rendering {}x{} image, fov {} rad",
        args.width,
        args.height,
        args.fov
    );

    let canvas = render(&args)?;

    let output_path = args
        .output_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("output.{}", args.image_format)));

    // a failed write is reported but doesn't change the exit status
    canvas.save_or_report(&output_path, args.image_format);
    Ok(())
}
