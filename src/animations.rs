use crate::frame::{self, FrameSequence};
use crate::source;
use image::imageops;
use image::{DynamicImage, Rgba, RgbaImage};

const TOASTER_COUNT: usize = 4;
const DRAGON_COUNT: usize = 25;

// Load the four flying toaster images and save them as a looping animation.
pub fn flapping_toaster() -> Result<(), String> {
    let toasters = source::open_numbered("toasters/toaster", ".gif", TOASTER_COUNT)?;

    FrameSequence::from_frames(toasters, 80).write_to("animations/flappingToaster.gif")
}

// Sweep the gates photo in from the left over num_frames steps.
// num_frames must be at least 2.
pub fn sliding_gates(num_frames: u32) -> Result<(), String> {
    let gates = source::open_image("nightGates.jpg")?;

    FrameSequence::from_frames(sliding_gate_frames(&gates, num_frames), 200)
        .write_to("animations/slidingGates.gif")
}

// Build the sweep: every frame is a black canvas of the gates' size with the
// leftmost revealed_width columns of the gates pasted at the origin.
pub fn sliding_gate_frames(gates: &RgbaImage, num_frames: u32) -> Vec<RgbaImage> {
    let (width, height) = gates.dimensions();

    // how much more of the gates becomes visible with every frame
    let reveal_increment = width / (num_frames - 1);
    let mut revealed_width = 0;

    let mut frames = Vec::with_capacity(num_frames as usize);

    for _ in 0..num_frames {
        let mut background = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255]));
        let current_gate = imageops::crop_imm(gates, 0, 0, revealed_width, height).to_image();
        imageops::replace(&mut background, &current_gate, 0, 0);

        frames.push(background);

        revealed_width += reveal_increment;
    }

    frames
}

// Colorize the gates from left to right over num_frames steps.
// num_frames must be at least 2.
pub fn opening_gates(num_frames: u32) -> Result<(), String> {
    let gates = source::open_image("uncommonWomenMHC.png")?;

    FrameSequence::from_frames(opening_gate_frames(&gates, num_frames), 160)
        .write_to("animations/openingGates.gif")
}

// Build the colorization: every frame is a grayscale copy of the gates with a
// widening crop of the color version pasted over it. The reveal is distributed
// evenly; integer division rounds the early widths down.
pub fn opening_gate_frames(gates: &RgbaImage, num_frames: u32) -> Vec<RgbaImage> {
    let gray_gates = desaturate(gates);
    let width = gates.width();

    let mut frames = Vec::with_capacity(num_frames as usize);

    for i in 0..num_frames {
        let revealed_width =
            (u64::from(i) * u64::from(width) / u64::from(num_frames - 1)) as u32;
        frames.push(reveal_over(gates, &gray_gates, revealed_width));
    }

    frames
}

// Same colorization, but the revealed width doubles with every frame:
// 1, 2, 4, ... pixels. ceil(log2(width)) + 1 frames uncover everything.
pub fn opening_gates_exp() -> Result<(), String> {
    let gates = source::open_image("uncommonWomenMHC.png")?;

    FrameSequence::from_frames(opening_gate_frames_exp(&gates), 300)
        .write_to("animations/openingGatesExp.gif")
}

pub fn opening_gate_frames_exp(gates: &RgbaImage) -> Vec<RgbaImage> {
    let gray_gates = desaturate(gates);
    let width = gates.width();

    let num_frames = f64::from(width).log2().ceil() as u32 + 1;

    let mut frames = Vec::with_capacity(num_frames as usize);

    for i in 0..num_frames {
        // the crop clamps to the image bounds, so the last frame is fully revealed
        let revealed_width = (1u64 << i).min(u64::from(width)) as u32;
        frames.push(reveal_over(gates, &gray_gates, revealed_width));
    }

    frames
}

// Paste the dragon onto the night gates at x_location and save the still.
pub fn dragon_on_gate(x_location: i64) -> Result<(), String> {
    let gates = source::open_image("nightGates.jpg")?;
    let dragon = source::open_image("dragon.png")?;

    frame::save_still(&composite_dragon(&gates, &dragon, x_location), "dragonGate.png")
}

// The sprite's own alpha channel is the paste mask.
pub fn composite_dragon(gates: &RgbaImage, dragon: &RgbaImage, x_location: i64) -> RgbaImage {
    let mut composite = gates.clone();
    imageops::overlay(&mut composite, dragon, x_location, 0);
    composite
}

// Assemble the dragon walk cycle from the 25 numbered sprite images.
pub fn dragon_walk() -> Result<(), String> {
    let dragons = source::open_numbered("dragons/dragon_", ".png", DRAGON_COUNT)?;

    FrameSequence::from_frames(walk_cycle_frames(&dragons), 80)
        .write_to("animations/animatedDragon.gif")
}

// The walk cycle shows the first sprite twice and never reaches the last five:
// frame 0 is followed by frames 0..20.
pub fn walk_cycle_frames(dragons: &[RgbaImage]) -> Vec<RgbaImage> {
    let mut frames = Vec::with_capacity(21);
    frames.push(dragons[0].clone());
    frames.extend(dragons.iter().take(20).cloned());
    frames
}

// Move the dragon across the gates in num_frames steps.
// num_frames must be at least 3.
pub fn dragon_gates(num_frames: u32) -> Result<(), String> {
    let gates = source::open_image("uncommonWomenMHC.png")?;
    let dragon = source::open_image("dragon.png")?;

    FrameSequence::from_frames(dragon_gate_frames(&gates, &dragon, num_frames), 160)
        .write_to("animations/dragonGates.gif")
}

// The step width divides by num_frames - 2, not num_frames - 1, so the dragon
// leaves the right edge before the loop restarts; the overlay clips it there.
pub fn dragon_gate_frames(gates: &RgbaImage, dragon: &RgbaImage, num_frames: u32) -> Vec<RgbaImage> {
    let width = gates.width();

    let mut frames = Vec::with_capacity(num_frames as usize);

    for i in 0..num_frames {
        let x_location =
            (u64::from(i) * u64::from(width) / u64::from(num_frames - 2)) as i64;
        frames.push(composite_dragon(gates, dragon, x_location));
    }

    frames
}

// Copy the leftmost revealed_width columns of the color image over a copy of
// the gray one. The crop clamps, so widths past the right edge reveal fully.
fn reveal_over(color: &RgbaImage, gray: &RgbaImage, revealed_width: u32) -> RgbaImage {
    let mut frame = gray.clone();
    let current = imageops::crop_imm(color, 0, 0, revealed_width, color.height()).to_image();
    imageops::replace(&mut frame, &current, 0, 0);
    frame
}

// Grayscale copy of an image, widened back to RGBA so color can be pasted over it.
fn desaturate(image: &RgbaImage) -> RgbaImage {
    DynamicImage::ImageLuma8(imageops::grayscale(image)).to_rgba8()
}
