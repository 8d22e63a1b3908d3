mod batch;
mod config;
mod error;
mod generator;
mod label;
mod qr;

use crate::config::GeneratorConfig;
use crate::generator::QrGenerator;
use crate::label::LabelFont;
use anyhow::bail;
use clap::Parser;
use env_logger::Env;
use log::{error, info};

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = GeneratorConfig::parse();

    let font = LabelFont::load(config.font.as_deref());
    let generator = QrGenerator::new(config.port, &config.output_dir, &config.label_prefix, font);
    let items = batch::plan(config.first..=config.last, &config.extra);

    match batch::run(&generator, &items, config.keep_going) {
        Ok(report) if report.failed.is_empty() => {
            info!(
                "Generated {} QR codes in {}",
                report.written.len(),
                config.output_dir.display()
            );
            Ok(())
        }
        Ok(report) => bail!(
            "{} of {} QR codes could not be generated",
            report.failed.len(),
            items.len()
        ),
        Err(err) => {
            error!("Error generating QR codes: {}", err);
            error!(
                "Make sure {} is writable; install a TrueType font or pass --font for nicer labels",
                config.output_dir.display()
            );
            Err(err.into())
        }
    }
}
