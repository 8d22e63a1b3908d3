//! Server-rendered HTML pages shown to scanning phones.

use checkpoint_common::model::scan::ScanRecord;

const TITLE: &str = "Sunset Mkuu";

/// Landing page with scanning instructions and the address phones should use.
pub fn status_page(network_url: &str) -> String {
    let network_url = escape_html(network_url);
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>{title}</title>
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <style>
        body {{ font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; }}
        .instructions {{ background-color: #f0f8ff; padding: 15px; border-radius: 5px; margin-bottom: 20px; }}
        .url-box {{ background: #e0e0e0; padding: 10px; border-radius: 5px; word-break: break-all; }}
    </style>
</head>
<body>
    <h1>{title} - QR Checkpoint System</h1>
    <div class="instructions">
        <h3>How to use:</h3>
        <p>1. Connect your phone to the same WiFi network as this computer</p>
        <p>2. Open any QR scanner app on your phone</p>
        <p>3. Scan a QR code containing:</p>
        <div class="url-box">{network_url}/scan?qr_code=YOUR_DATA</div>
        <p>4. The scan will be recorded in the checkpoint log</p>
        <p><strong>Server running on:</strong></p>
        <div class="url-box">{network_url}</div>
    </div>
</body>
</html>
"#,
        title = TITLE,
        network_url = network_url,
    )
}

/// Page returned after a scan has been stored.
pub fn confirmation_page(record: &ScanRecord, service_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Scan Successful</title>
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <style>
        body {{ font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; text-align: center; }}
        .success-message {{ background-color: #dff0d8; color: #3c763d; padding: 20px; border-radius: 5px; margin: 20px 0; }}
        .scan-info {{ margin: 20px 0; padding: 15px; background-color: #f9f9f9; border-radius: 5px; }}
        .btn {{ display: inline-block; padding: 10px 20px; background-color: #337ab7; color: white; text-decoration: none; border-radius: 5px; margin-top: 20px; }}
    </style>
</head>
<body>
    <h1>{title} Checkpoint System</h1>
    <div class="success-message">
        <h2>&#10003; Scan Recorded Successfully!</h2>
    </div>
    <div class="scan-info">
        <p><strong>Checkpoint ID:</strong> {identifier}</p>
        <p><strong>Time:</strong> {time}</p>
    </div>
    <a href="{service_url}" class="btn">Return to Scanner</a>
</body>
</html>
"#,
        title = TITLE,
        identifier = escape_html(&record.identifier),
        time = record.display_timestamp(),
        service_url = escape_html(service_url),
    )
}

/// Identifiers come straight from the query string and must not inject markup.
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn confirmation_embeds_escaped_identifier_and_time() {
        let ts = NaiveDate::from_ymd_opt(2024, 7, 1)
            .unwrap()
            .and_hms_opt(18, 5, 9)
            .unwrap();
        let record = ScanRecord::at("<b>gate</b>", ts);

        let page = confirmation_page(&record, "http://10.0.0.2:9500");

        assert!(page.contains("&lt;b&gt;gate&lt;/b&gt;"));
        assert!(!page.contains("<b>gate</b>"));
        assert!(page.contains("2024-07-01 18:05:09"));
        assert!(page.contains(r#"href="http://10.0.0.2:9500""#));
    }

    #[test]
    fn status_page_shows_scan_url_template() {
        let page = status_page("http://10.0.0.2:9500");
        assert!(page.contains("http://10.0.0.2:9500/scan?qr_code=YOUR_DATA"));
    }
}
