use crate::scan_log::ScanLog;

/// State shared by every request handler, registered once as `web::Data`.
#[derive(Debug)]
pub struct ServiceContext {
    pub log: ScanLog,
    /// Port advertised in links back to the service.
    pub port: u16,
}

impl ServiceContext {
    pub fn new(log: ScanLog, port: u16) -> Self {
        Self { log, port }
    }
}
