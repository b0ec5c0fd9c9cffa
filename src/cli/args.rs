//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

use super::enums::{BrightnessArg, CharacterMap, OutputColor};

/// Render an image or webcam snapshot as ASCII art
#[derive(Parser, Debug)]
#[command(name = "charcoal")]
#[command(version, about = "Render images and webcam snapshots as ASCII art", long_about = None)]
pub struct Args {
    /// How the brightness of a pixel is calculated
    #[arg(short, long, default_value = "luminosity")]
    pub brightness_mode: BrightnessArg,

    /// Maximum number of pixels in each output line
    #[arg(short = 'x', long)]
    pub max_width: Option<u32>,

    /// Output color for the whole image
    #[arg(short, long)]
    pub color: Option<OutputColor>,

    /// Invert brightness
    #[arg(short, long)]
    pub invert: bool,

    /// Number of characters for each pixel
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=3))]
    pub repeat_characters: u8,

    /// Character ramp used for rendering
    #[arg(short = 'm', long, default_value = "3")]
    pub character_map: CharacterMap,

    /// Capture input from the webcam
    #[arg(short, long)]
    pub webcam: bool,

    /// Color each pixel according to the image
    #[arg(short, long)]
    pub paint: bool,

    /// The image path
    #[arg(short, long, value_name = "FILE", required_unless_present = "webcam")]
    pub file: Option<PathBuf>,

    /// Generate a PDF file with the ASCII art
    #[arg(short, long, value_name = "NAME")]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["charcoal", "--file", "photo.jpg"]);
        assert_eq!(args.brightness_mode, BrightnessArg::Luminosity);
        assert!(args.max_width.is_none());
        assert!(args.color.is_none());
        assert!(!args.invert);
        assert_eq!(args.repeat_characters, 2);
        assert_eq!(args.character_map, CharacterMap::Symbol);
        assert!(!args.webcam);
        assert!(!args.paint);
        assert_eq!(args.file, Some(PathBuf::from("photo.jpg")));
        assert!(args.output.is_none());
    }

    #[test]
    fn test_args_file_required_unless_webcam() {
        assert!(Args::try_parse_from(["charcoal"]).is_err());
        assert!(Args::try_parse_from(["charcoal", "--webcam"]).is_ok());
    }

    #[test]
    fn test_args_brightness_mode_values() {
        let args = Args::parse_from(["charcoal", "-w", "-b", "average"]);
        assert_eq!(args.brightness_mode, BrightnessArg::Average);

        let args = Args::parse_from(["charcoal", "-w", "--brightness-mode", "lightness"]);
        assert_eq!(args.brightness_mode, BrightnessArg::Lightness);

        assert!(Args::try_parse_from(["charcoal", "-w", "-b", "gamma"]).is_err());
    }

    #[test]
    fn test_args_max_width() {
        let args = Args::parse_from(["charcoal", "-w", "-x", "120"]);
        assert_eq!(args.max_width, Some(120));

        let args = Args::parse_from(["charcoal", "-w", "--max-width", "80"]);
        assert_eq!(args.max_width, Some(80));
    }

    #[test]
    fn test_args_color_values() {
        let args = Args::parse_from(["charcoal", "-w", "-c", "red"]);
        assert_eq!(args.color, Some(OutputColor::Red));

        let args = Args::parse_from(["charcoal", "-w", "--color", "magenta"]);
        assert_eq!(args.color, Some(OutputColor::Magenta));

        assert!(Args::try_parse_from(["charcoal", "-w", "-c", "orange"]).is_err());
    }

    #[test]
    fn test_args_repeat_range() {
        for r in 1..=3u8 {
            let args = Args::parse_from(["charcoal", "-w", "-r", &r.to_string()]);
            assert_eq!(args.repeat_characters, r);
        }
        assert!(Args::try_parse_from(["charcoal", "-w", "-r", "0"]).is_err());
        assert!(Args::try_parse_from(["charcoal", "-w", "-r", "4"]).is_err());
    }

    #[test]
    fn test_args_character_map_values() {
        let args = Args::parse_from(["charcoal", "-w", "-m", "1"]);
        assert_eq!(args.character_map, CharacterMap::Sparse);

        let args = Args::parse_from(["charcoal", "-w", "-m", "2"]);
        assert_eq!(args.character_map, CharacterMap::Dense);

        let args = Args::parse_from(["charcoal", "-w", "-m", "4"]);
        assert_eq!(args.character_map, CharacterMap::Classic);

        assert!(Args::try_parse_from(["charcoal", "-w", "-m", "5"]).is_err());
    }

    #[test]
    fn test_args_flags() {
        let args = Args::parse_from(["charcoal", "-w", "-i", "-p"]);
        assert!(args.webcam);
        assert!(args.invert);
        assert!(args.paint);
    }

    #[test]
    fn test_args_output_path() {
        let args = Args::parse_from(["charcoal", "-f", "in.png", "-o", "art.pdf"]);
        assert_eq!(args.output, Some(PathBuf::from("art.pdf")));
    }

    #[test]
    fn test_args_combined_options() {
        let args = Args::parse_from([
            "charcoal",
            "--file",
            "cat.png",
            "--brightness-mode",
            "lightness",
            "--max-width",
            "100",
            "--color",
            "green",
            "--invert",
            "--repeat-characters",
            "3",
            "--character-map",
            "4",
            "--paint",
            "--output",
            "cat.pdf",
        ]);
        assert_eq!(args.file, Some(PathBuf::from("cat.png")));
        assert_eq!(args.brightness_mode, BrightnessArg::Lightness);
        assert_eq!(args.max_width, Some(100));
        assert_eq!(args.color, Some(OutputColor::Green));
        assert!(args.invert);
        assert_eq!(args.repeat_characters, 3);
        assert_eq!(args.character_map, CharacterMap::Classic);
        assert!(args.paint);
        assert_eq!(args.output, Some(PathBuf::from("cat.pdf")));
    }
}
