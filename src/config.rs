// Command-line configuration.
// Visual: --width/--height size the window and the saved PNG alike.

use std::path::PathBuf;

use clap::Parser;

/// Command line arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "rusty-metal")]
#[command(about = "Procedural rusty metal texture: click to regenerate, S to save", long_about = None)]
pub struct Args {
    /// Texture / window width in pixels
    #[arg(long, value_name = "PIXELS", default_value_t = 800)]
    pub width: usize,

    /// Texture / window height in pixels
    #[arg(long, value_name = "PIXELS", default_value_t = 600)]
    pub height: usize,

    /// Noise seed (random if omitted)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u32>,

    /// Where the S key (or --headless) writes the PNG
    #[arg(long, short, value_name = "FILE", default_value = "rusty_metal_texture.png")]
    pub output: PathBuf,

    /// Generate once, save to --output and exit without opening a window
    #[arg(long)]
    pub headless: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["rusty-metal"]).unwrap();
        assert_eq!((args.width, args.height), (800, 600));
        assert_eq!(args.seed, None);
        assert_eq!(args.output, PathBuf::from("rusty_metal_texture.png"));
        assert!(!args.headless);
    }

    #[test]
    fn explicit_values() {
        let args = Args::try_parse_from([
            "rusty-metal", "--width", "64", "--height", "32", "--seed", "9", "-o", "out.png", "--headless",
        ])
        .unwrap();
        assert_eq!((args.width, args.height, args.seed), (64, 32, Some(9)));
        assert_eq!(args.output, PathBuf::from("out.png"));
        assert!(args.headless);
    }

    #[test]
    fn rejects_non_numeric_size() {
        assert!(Args::try_parse_from(["rusty-metal", "--width", "wide"]).is_err());
    }
}
