pub mod math;
pub mod scene;

pub mod render {
    pub mod camera;
    pub mod canvas;
    pub mod ray;
    pub mod renderer;
}

pub mod shading {
    pub mod integrator;
}

pub use math::{Color, Vector};
pub use render::{
    camera::Camera,
    canvas::{Canvas, ImageFormat},
    renderer::{Renderer, RendererBuilder},
};
pub use scene::{
    Scene, SceneBuilder,
    light::Light,
    object::{material::Material, sphere::Sphere},
};
