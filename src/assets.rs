use crate::error::GameError;
use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Path of the image with the given index: `<dir>/image<index>.bmp`
pub fn image_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(format!("image{}.bmp", index))
}

/// Load `image0.bmp` through `image<count - 1>.bmp`
///
/// Index 0 is the face-down placeholder. A missing or unreadable file fails
/// the whole load; the game cannot start without its full image set.
pub fn load_images<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    dir: &Path,
    count: usize,
) -> Result<Vec<Texture<'a>>, GameError> {
    let mut images = Vec::with_capacity(count);

    for index in 0..count {
        let path = image_path(dir, index);
        let texture = texture_creator
            .load_texture(&path)
            .map_err(|reason| GameError::AssetLoad {
                path: path.clone(),
                reason,
            })?;

        let query = texture.query();
        debug!("Loaded {} ({}x{})", path.display(), query.width, query.height);
        images.push(texture);
    }

    info!("Loaded {} images from {}", images.len(), dir.display());
    Ok(images)
}
