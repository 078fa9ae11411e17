use std::{
    fmt::Display,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use clap::ValueEnum;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum ImageFormat {
    /// Uncompressed 24-bit bitmap
    #[default]
    Bmp,
    Ppm,
    Png,
}

impl Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageFormat::Bmp => write!(f, "bmp"),
            ImageFormat::Ppm => write!(f, "ppm"),
            ImageFormat::Png => write!(f, "png"),
        }
    }
}

/// Row-major RGB raster, three bytes per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Canvas {
    pub const CHANNELS: usize = 3;

    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * Self::CHANNELS],
        }
    }

    fn index(&self, x: usize, y: usize) -> usize {
        (self.width * y + x) * Self::CHANNELS
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_at(&self, x: usize, y: usize) -> [u8; 3] {
        let id = self.index(x, y);
        [self.data[id], self.data[id + 1], self.data[id + 2]]
    }

    pub fn write_pixel_bytes(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        let id = self.index(x, y);
        self.data[id..id + Self::CHANNELS].copy_from_slice(&rgb);
    }

    pub fn as_u8_rgb(&self) -> &[u8] {
        &self.data
    }

    pub fn save_to_file(&self, path: &Path, format: ImageFormat) -> std::io::Result<()> {
        let file = BufWriter::new(File::create(path)?);
        match format {
            ImageFormat::Bmp => self.save_to_bmp(file),
            ImageFormat::Ppm => self.save_to_ppm(file),
            ImageFormat::Png => self.save_to_png(file),
        }
    }

    /// Writes the image, logging a failure instead of returning it.
    /// Returns whether the file was written.
    pub fn save_or_report(&self, path: &Path, format: ImageFormat) -> bool {
        log::info!("writing to file {path:?}");
        match self.save_to_file(path, format) {
            Ok(()) => {
                log::info!("image saved to {path:?}");
                true
            }
            Err(err) => {
                log::error!("Failed to save image to {path:?}: {err}");
                false
            }
        }
    }
}

/// saving image in bmp format
impl Canvas {
    pub fn save_to_bmp<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        let mut encoder = image::codecs::bmp::BmpEncoder::new(&mut writer);
        encoder
            .encode(
                &self.data,
                self.width as u32,
                self.height as u32,
                image::ColorType::Rgb8,
            )
            .map_err(std::io::Error::other)?;
        writer.flush()
    }
}

/// saving image in ppm format
impl Canvas {
    const MAX_LINE_LEN: usize = 70;

    fn ppm_header(&self) -> String {
        format!("P3\n{} {}\n255\n", self.width, self.height)
    }

    fn ppm_data(&self) -> String {
        let mut out = String::with_capacity(self.data.len() * 4);

        for row in self.data.chunks(self.width * Self::CHANNELS) {
            let mut line_len = 0;
            for val in row {
                let val_str = val.to_string();
                if line_len > 0 {
                    if line_len + val_str.len() + 1 > Self::MAX_LINE_LEN {
                        out.push('\n');
                        line_len = 0;
                    } else {
                        out.push(' ');
                        line_len += 1;
                    }
                }
                out.push_str(&val_str);
                line_len += val_str.len();
            }
            out.push('\n');
        }
        out
    }

    pub fn save_to_ppm<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writer.write_all(self.ppm_header().as_bytes())?;
        writer.write_all(self.ppm_data().as_bytes())?;
        writer.flush()
    }
}

/// saving image in png format
impl Canvas {
    pub fn save_to_png<W: Write>(&self, writer: W) -> std::io::Result<()> {
        let mut encoder = png::Encoder::new(writer, self.width as u32, self.height as u32);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;

        writer
            .write_image_data(&self.data)
            .map_err(|e| e.into())
    }
}
