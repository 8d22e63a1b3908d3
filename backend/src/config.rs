use crate::scan_log::daily_log_path;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 9500;

/// Command-line and environment configuration of the checkpoint server.
#[derive(Debug, Parser)]
#[command(name = "checkpoint-server", about = "Records QR checkpoint scans into a daily log")]
pub struct ServerConfig {
    /// TCP port to listen on
    #[arg(long, env = "CHECKPOINT_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind; the default accepts connections from the local network
    #[arg(long, env = "CHECKPOINT_BIND", default_value = "0.0.0.0")]
    pub bind: String,

    /// Directory holding the daily scan logs
    #[arg(long = "log-dir", env = "CHECKPOINT_LOG_DIR", default_value = "data")]
    pub log_dir: PathBuf,
}

impl ServerConfig {
    /// Log file for scans recorded on `date`.
    pub fn log_path(&self, date: NaiveDate) -> PathBuf {
        daily_log_path(&self.log_dir, date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_deployment() {
        let config = ServerConfig::try_parse_from(["checkpoint-server"]).unwrap();
        assert_eq!(config.port, 9500);
        assert_eq!(config.bind, "0.0.0.0");
        assert_eq!(config.log_dir, PathBuf::from("data"));
    }

    #[test]
    fn flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "checkpoint-server",
            "--port",
            "8081",
            "--log-dir",
            "/srv/scans",
        ])
        .unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();

        assert_eq!(config.port, 8081);
        assert_eq!(
            config.log_path(date),
            PathBuf::from("/srv/scans/qr_checkpoints_20250131.csv")
        );
    }
}
