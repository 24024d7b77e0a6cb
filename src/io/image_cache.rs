//! Background decoding of flower images.
//!
//! Images are decoded on background threads so the first frame is not held
//! up by disk I/O. Each flower id moves through `Loading` to either a
//! texture or `Unavailable`; only local files are ever read.

use anyhow::Context as _;
use bloomgrid::Flower;
use eframe::egui;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

/// Decode result sent back from a worker thread.
type DecodeResult = (u32, Result<egui::ColorImage, String>);

/// Load state of one flower's image.
pub enum ImageSlot {
    /// Decode in progress on a worker thread
    Loading,
    /// Uploaded texture ready to paint
    Ready(egui::TextureHandle),
    /// No local image, or decoding failed; a placeholder is drawn instead
    Unavailable,
}

/// Texture cache keyed by flower id.
pub struct ImageCache {
    /// Directory relative image paths are resolved against
    base_dir: PathBuf,
    slots: HashMap<u32, ImageSlot>,
    sender: Sender<DecodeResult>,
    receiver: Receiver<DecodeResult>,
}

impl ImageCache {
    pub fn new(base_dir: PathBuf) -> Self {
        let (sender, receiver) = channel();
        Self {
            base_dir,
            slots: HashMap::new(),
            sender,
            receiver,
        }
    }

    /// Returns the texture for `flower`, starting a decode on first request.
    ///
    /// Returns `None` while loading and when no image is available.
    pub fn texture_for(&mut self, ctx: &egui::Context, flower: &Flower) -> Option<&egui::TextureHandle> {
        if !self.slots.contains_key(&flower.id) {
            let slot = self.start_decode(ctx, flower);
            self.slots.insert(flower.id, slot);
        }

        match self.slots.get(&flower.id) {
            Some(ImageSlot::Ready(texture)) => Some(texture),
            _ => None,
        }
    }

    /// Returns true while any decode is still running.
    pub fn is_loading(&self) -> bool {
        self.slots.values().any(|slot| matches!(slot, ImageSlot::Loading))
    }

    /// Uploads finished decodes as textures.
    ///
    /// Should be called once per frame. Returns how many decodes finished.
    pub fn poll(&mut self, ctx: &egui::Context) -> usize {
        let mut finished = 0;
        while let Ok((id, result)) = self.receiver.try_recv() {
            let slot = match result {
                Ok(image) => {
                    let texture = ctx.load_texture(format!("flower-{id}"), image, egui::TextureOptions::LINEAR);
                    ImageSlot::Ready(texture)
                }
                Err(error_msg) => {
                    tracing::warn!(flower = id, error = %error_msg, "image unavailable");
                    ImageSlot::Unavailable
                }
            };
            self.slots.insert(id, slot);
            finished += 1;
        }
        finished
    }

    fn start_decode(&self, ctx: &egui::Context, flower: &Flower) -> ImageSlot {
        let Some(path) = flower.resolve_image_path(&self.base_dir) else {
            if flower.is_remote_image() {
                tracing::debug!(flower = flower.id, url = %flower.image_url, "remote images are not fetched");
            }
            return ImageSlot::Unavailable;
        };

        let sender = self.sender.clone();
        let ctx_handle = ctx.clone();
        let id = flower.id;

        thread::spawn(move || {
            let result = decode_image(&path).map_err(|e| format!("{e:#}"));
            let _ = sender.send((id, result));

            // Notify GUI thread to repaint
            ctx_handle.request_repaint();
        });

        ImageSlot::Loading
    }
}

/// Reads and decodes an image file into an egui image.
pub fn decode_image(path: &Path) -> anyhow::Result<egui::ColorImage> {
    let image = image::open(path)
        .with_context(|| format!("failed to decode {}", path.display()))?
        .to_rgba8();

    let size = [image.width() as usize, image.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_decode_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dot.png");
        image::RgbaImage::from_pixel(3, 2, image::Rgba([255, 0, 0, 255]))
            .save(&path)
            .unwrap();

        let decoded = decode_image(&path).unwrap();
        assert_eq!(decoded.size, [3, 2]);
    }

    #[test]
    fn test_decode_garbage_fails_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"not an image")
            .unwrap();

        let error = decode_image(&path).unwrap_err();
        assert!(format!("{error:#}").contains("broken.png"));
    }

    #[test]
    fn test_remote_and_empty_images_are_unavailable() {
        let ctx = egui::Context::default();
        let mut cache = ImageCache::new(PathBuf::from("."));

        let remote = Flower::new(1, "Rose", "https://example.com/rose.png");
        let bare = Flower::new(2, "Tulip", "");
        assert!(cache.texture_for(&ctx, &remote).is_none());
        assert!(cache.texture_for(&ctx, &bare).is_none());
        assert!(!cache.is_loading());
    }
}
