use derive_builder::Builder;

use crate::{render::camera::Camera, scene::Scene, shading::integrator::Integrator};

use super::canvas::Canvas;

#[derive(PartialEq, Debug, Clone, Builder)]
/// The renderer calculates each pixel color using the integrator and camera.
pub struct Renderer {
    integrator: Integrator,
    camera: Camera,
    /// Intersections closer than this are ignored
    #[builder(default = "Renderer::NEAR_CLIP")]
    min_distance: f64,
    /// Intersections further than this are ignored
    #[builder(default = "Renderer::MAX_DISTANCE")]
    max_distance: f64,
    #[builder(default = "false")]
    use_progress_bar: bool,
}

impl RendererBuilder {
    pub fn scene(&mut self, scene: Scene) -> &mut Self {
        self.integrator = Some(Integrator::new(scene));
        self
    }
}

impl Renderer {
    pub const NEAR_CLIP: f64 = 1.;
    pub const MAX_DISTANCE: f64 = 1000.;
    pub const DEFAULT_WIDTH: usize = 1920;
    pub const DEFAULT_HEIGHT: usize = 1920;
    pub const DEFAULT_FOV: f64 = 1.;
    const BACKGROUND_BLUE: u8 = 160;

    /// Vertical red and horizontal green gradient over constant blue.
    pub fn background_at(&self, x: usize, y: usize) -> [u8; 3] {
        let r = y as f64 / self.camera.target_height() as f64 * 255.;
        let g = x as f64 / self.camera.target_width() as f64 * 255.;
        [r as u8, g as u8, Self::BACKGROUND_BLUE]
    }

    /// Background gradient, overwritten by the traced color where a sphere is hit.
    pub fn pixel_at(&self, x: usize, y: usize) -> [u8; 3] {
        let ray = self.camera.ray_for_pixel(x, y);
        self.integrator
            .trace(&ray, self.min_distance, self.max_distance)
            .map_or_else(|| self.background_at(x, y), |color| color.to_bytes())
    }

    fn progress_bar(&self, len: u64) -> indicatif::ProgressBar {
        if !self.use_progress_bar {
            return indicatif::ProgressBar::hidden();
        }
        let pb = indicatif::ProgressBar::new(len);
        match indicatif::ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] {wide_bar:.cyan/blue} pixels shaded: {human_pos}/{human_len} {percent}% ({eta})",
        ) {
            Ok(style) => pb.with_style(style),
            Err(err) => {
                log::warn!("invalid progress bar template: {err}");
                pb
            }
        }
    }

    pub fn render(&self) -> Canvas {
        let width = self.camera.target_width();
        let height = self.camera.target_height();
        let mut image = Canvas::new(width, height);

        log::debug!(
            "rendering {} spheres lit by {} lights",
            self.scene().spheres().len(),
            self.scene().lights().len()
        );

        let pb = self.progress_bar(width as u64 * height as u64);
        let now = std::time::Instant::now();
        for y in 0..height {
            for x in 0..width {
                image.write_pixel_bytes(x, y, self.pixel_at(x, y));
            }
            pb.inc(width as u64);
        }
        pb.finish_and_clear();
        log::info!("render time: {:?}", now.elapsed());

        image
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn integrator(&self) -> &Integrator {
        &self.integrator
    }

    pub fn scene(&self) -> &Scene {
        self.integrator.scene()
    }

    pub fn use_progress_bar(&self) -> bool {
        self.use_progress_bar
    }
}
