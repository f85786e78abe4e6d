use image::RgbaImage;
use std::path::Path;

// Load a source image from disk and convert it to RGBA8, so that every
// transform and the encoder deal with a single pixel format.
pub fn open_image(filename: &str) -> Result<RgbaImage, String> {
    let path = Path::new(filename);

    if path.is_dir() {
        return Err(format!(
            "Input argument '{}' is a directory. Please specify a file.",
            &filename
        ));
    }

    if !path.is_file() {
        return Err(format!("Input file '{}' could not be found.", &filename));
    }

    match image::open(path) {
        Ok(img) => Ok(img.to_rgba8()),
        Err(err) => Err(format!(
            "Input file '{}' could not be opened: {}",
            &filename, &err
        )),
    }
}

// Load a numbered image sequence; the filename for index i is prefix + i + suffix,
// as in "dragons/dragon_0.png" .. "dragons/dragon_24.png".
pub fn open_numbered(prefix: &str, suffix: &str, count: usize) -> Result<Vec<RgbaImage>, String> {
    let mut images = Vec::with_capacity(count);

    for i in 0..count {
        let filename = format!("{}{}{}", prefix, i, suffix);
        images.push(open_image(&filename)?);
    }

    Ok(images)
}
