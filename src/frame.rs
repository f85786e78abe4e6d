use colored::*;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};
use std::fs::File;

// An ordered list of same-sized RGBA frames, plus how long each frame is
// shown for, in milliseconds.
pub struct FrameSequence {
    frames: Vec<RgbaImage>,
    delay_ms: u32,
}

impl FrameSequence {
    pub fn from_frames(frames: Vec<RgbaImage>, delay_ms: u32) -> FrameSequence {
        FrameSequence { frames, delay_ms }
    }

    // Encode the sequence as an infinitely looping GIF at `filename`,
    // overwriting whatever is there.
    pub fn write_to(&self, filename: &str) -> Result<(), String> {
        let (width, height) = match self.frames.first() {
            Some(first) => first.dimensions(),
            None => {
                return Err(format!(
                    "Refusing to write '{}': the frame sequence is empty.",
                    &filename
                ));
            }
        };

        for frame in &self.frames {
            if frame.dimensions() != (width, height) {
                return Err(format!(
                    "Refusing to write '{}': expected every frame to be {}x{}, found {}x{}.",
                    &filename,
                    width,
                    height,
                    frame.width(),
                    frame.height()
                ));
            }
        }

        let file = match File::create(filename) {
            Ok(file) => file,
            Err(err) => {
                return Err(format!(
                    "Output file '{}' could not be created: {}",
                    &filename, &err
                ));
            }
        };

        let mut encoder = GifEncoder::new(file);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|err| format!("Could not set up looping for '{}': {}", &filename, &err))?;

        for frame in &self.frames {
            let delay = Delay::from_numer_denom_ms(self.delay_ms, 1);
            let frame = Frame::from_parts(frame.clone(), 0, 0, delay);
            encoder
                .encode_frame(frame)
                .map_err(|err| format!("Could not encode '{}': {}", &filename, &err))?;
        }

        println!("{} {}", "==>".blue().bold(), &filename);

        Ok(())
    }
}

// Write a single still image; the format follows the file extension.
pub fn save_still(image: &RgbaImage, filename: &str) -> Result<(), String> {
    match image.save(filename) {
        Ok(()) => {
            println!("{} {}", "==>".blue().bold(), &filename);
            Ok(())
        }
        Err(err) => Err(format!(
            "Output file '{}' could not be written: {}",
            &filename, &err
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use image::codecs::gif::GifDecoder;
    use image::{AnimationDecoder, Rgba};

    fn solid(width: u32, height: u32, value: u8) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([value, 0, 0, 255]))
    }

    #[test]
    fn empty_sequence_is_rejected() {
        let sequence = FrameSequence::from_frames(Vec::new(), 80);
        let result = sequence.write_to("unused.gif");
        assert!(result.unwrap_err().contains("empty"));
    }

    #[test]
    fn mixed_dimensions_are_rejected() {
        let tmp = assert_fs::TempDir::new().expect("Could not make tempdir");
        let target = tmp.child("mixed.gif");
        let filename = target
            .path()
            .to_str()
            .expect("Could not convert target filename to str")
            .to_string();

        let frames = vec![solid(4, 4, 10), solid(4, 5, 20)];
        let sequence = FrameSequence::from_frames(frames, 80);
        let result = sequence.write_to(&filename);
        assert!(result.unwrap_err().contains("4x4"));
        target.assert(predicates::prelude::predicate::path::missing());
    }

    #[test]
    fn all_frames_and_delays_survive_the_round_trip() {
        let tmp = assert_fs::TempDir::new().expect("Could not make tempdir");
        let target = tmp.child("toaster.gif");
        let filename = target
            .path()
            .to_str()
            .expect("Could not convert target filename to str")
            .to_string();

        let frames: Vec<RgbaImage> = (0..4u8).map(|i| solid(8, 8, i * 60)).collect();
        let sequence = FrameSequence::from_frames(frames, 80);
        sequence.write_to(&filename).expect("Could not write gif");

        let file = File::open(&filename).expect("Could not reopen gif");
        let decoder = GifDecoder::new(file).expect("Could not decode gif");
        let decoded = decoder
            .into_frames()
            .collect_frames()
            .expect("Could not collect frames");

        assert_eq!(decoded.len(), 4);
        for frame in &decoded {
            let (numer, denom) = frame.delay().numer_denom_ms();
            assert_eq!(numer / denom, 80);
        }
    }
}
