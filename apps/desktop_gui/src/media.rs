//! Thumbnail decoding and texture caching for the profile image gallery.

use std::{collections::HashMap, fs};

use eframe::egui;
use tracing::warn;

const THUMBNAIL_MAX_EDGE: u32 = 512;

#[derive(Clone)]
pub struct PreviewImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

pub fn decode_preview_image(bytes: &[u8]) -> Result<PreviewImage, String> {
    let dynamic = image::load_from_memory(bytes).map_err(|err| err.to_string())?;
    let resized = dynamic
        .thumbnail(THUMBNAIL_MAX_EDGE, THUMBNAIL_MAX_EDGE)
        .to_rgba8();
    let width = resized.width() as usize;
    let height = resized.height() as usize;
    Ok(PreviewImage {
        width,
        height,
        rgba: resized.into_raw(),
    })
}

/// Lazily decoded thumbnails keyed by image URI. A URI that fails to decode
/// is cached as `None` so the failure is logged once, not every frame.
#[derive(Default)]
pub struct ThumbnailCache {
    textures: HashMap<String, Option<egui::TextureHandle>>,
}

impl ThumbnailCache {
    pub fn texture(&mut self, ctx: &egui::Context, uri: &str) -> Option<egui::TextureHandle> {
        if let Some(cached) = self.textures.get(uri) {
            return cached.clone();
        }

        let loaded = load_thumbnail_texture(ctx, uri);
        if loaded.is_none() {
            warn!(uri, "failed to load profile image thumbnail");
        }
        self.textures.insert(uri.to_string(), loaded.clone());
        loaded
    }

    /// Drops cached entries for URIs no longer referenced by the gallery.
    pub fn retain_uris(&mut self, live: &[String]) {
        self.textures.retain(|uri, _| live.iter().any(|l| l == uri));
    }
}

fn load_thumbnail_texture(ctx: &egui::Context, uri: &str) -> Option<egui::TextureHandle> {
    let bytes = fs::read(uri).ok()?;
    let preview = decode_preview_image(&bytes).ok()?;
    let color_image = egui::ColorImage::from_rgba_unmultiplied(
        [preview.width, preview.height],
        &preview.rgba,
    );
    Some(ctx.load_texture(
        format!("profile-image:{uri}"),
        color_image,
        egui::TextureOptions::LINEAR,
    ))
}
