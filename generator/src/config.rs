use clap::Parser;
use std::path::PathBuf;

/// Command-line configuration of the QR batch generator.
#[derive(Debug, Parser)]
#[command(name = "checkpoint-qr", about = "Generates labeled QR codes for checkpoint scanning")]
pub struct GeneratorConfig {
    /// Port of the checkpoint server encoded in every URL
    #[arg(long, env = "CHECKPOINT_PORT", default_value_t = 9500)]
    pub port: u16,

    /// Directory the PNG files are written to
    #[arg(long = "output-dir", env = "CHECKPOINT_QR_DIR", default_value = "qr_codes")]
    pub output_dir: PathBuf,

    /// First checkpoint number
    #[arg(long, default_value_t = 1)]
    pub first: u32,

    /// Last checkpoint number (inclusive)
    #[arg(long, default_value_t = 14)]
    pub last: u32,

    /// Extra identifiers to generate, e.g. visitor codes
    #[arg(long = "extra", default_value = "VISITOR_123")]
    pub extra: Vec<String>,

    /// Text printed before the identifier in the label
    #[arg(long = "label-prefix", default_value = "Sunset Mkuu")]
    pub label_prefix: String,

    /// TrueType/OpenType font tried before the system fonts
    #[arg(long, env = "CHECKPOINT_FONT")]
    pub font: Option<PathBuf>,

    /// Log failed images and carry on with the rest of the batch
    #[arg(long = "keep-going")]
    pub keep_going: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_fourteen_checkpoints_and_a_visitor() {
        let config = GeneratorConfig::try_parse_from(["checkpoint-qr"]).unwrap();
        assert_eq!((config.first, config.last), (1, 14));
        assert_eq!(config.extra, vec!["VISITOR_123"]);
        assert_eq!(config.output_dir, PathBuf::from("qr_codes"));
        assert!(!config.keep_going);
    }

    #[test]
    fn repeated_extras_replace_the_default() {
        let config = GeneratorConfig::try_parse_from([
            "checkpoint-qr",
            "--extra",
            "VIP_1",
            "--extra",
            "VIP_2",
            "--keep-going",
        ])
        .unwrap();
        assert_eq!(config.extra, vec!["VIP_1", "VIP_2"]);
        assert!(config.keep_going);
    }
}
