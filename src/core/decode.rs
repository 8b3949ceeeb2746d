use crate::domain::model::NotificationPayload;
use crate::utils::error::{NotiError, Result};
use chrono::{DateTime, Utc};

/// Seconds between the Unix epoch and 2001-01-01T00:00:00Z (the NSDate epoch).
pub const NSDATE_EPOCH_OFFSET: i64 = 978_307_200;

pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// 解碼 binary 或 XML plist
pub fn decode_payload(data: &[u8]) -> Result<NotificationPayload> {
    let payload = plist::from_bytes(data)?;
    Ok(payload)
}

/// NSDate 秒數轉 UTC，小數部分直接捨去
pub fn nsdate_to_utc(seconds: f64) -> Result<DateTime<Utc>> {
    let out_of_range = || NotiError::ProcessingError {
        message: format!("NSDate value {} is out of range", seconds),
    };

    if !seconds.is_finite() {
        return Err(out_of_range());
    }

    let whole = seconds.trunc();
    if whole.abs() > i64::MAX as f64 / 2.0 {
        return Err(out_of_range());
    }

    NSDATE_EPOCH_OFFSET
        .checked_add(whole as i64)
        .and_then(|unix| DateTime::from_timestamp(unix, 0))
        .ok_or_else(out_of_range)
}

pub fn day_key(seconds: f64) -> Result<String> {
    Ok(nsdate_to_utc(seconds)?.format(DAY_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{NotificationRequest, Sound};
    use chrono::TimeZone;

    fn encode(payload: &NotificationPayload) -> Vec<u8> {
        let mut buf = Vec::new();
        plist::to_writer_binary(&mut buf, payload).unwrap();
        buf
    }

    #[test]
    fn test_epoch_offset_matches_2001() {
        let epoch = Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(epoch.timestamp(), NSDATE_EPOCH_OFFSET);
    }

    #[test]
    fn test_nsdate_truncates_fraction() {
        assert_eq!(day_key(0.0).unwrap(), "2001-01-01");
        assert_eq!(day_key(86_399.9).unwrap(), "2001-01-01");
        assert_eq!(day_key(86_400.0).unwrap(), "2001-01-02");
        // 2024-01-15T08:00:00Z
        assert_eq!(day_key(726_998_400.5).unwrap(), "2024-01-15");
    }

    #[test]
    fn test_nsdate_rejects_garbage() {
        assert!(nsdate_to_utc(f64::NAN).is_err());
        assert!(nsdate_to_utc(f64::INFINITY).is_err());
        assert!(nsdate_to_utc(1e300).is_err());
    }

    #[test]
    fn test_decode_binary_payload() {
        let payload = NotificationPayload {
            app: "com.tinyspeck.slackmacgap".to_string(),
            date: 726_998_400.0,
            req: NotificationRequest {
                body: "hello".to_string(),
                subt: "#random".to_string(),
                titl: "Acme".to_string(),
                soun: Sound {
                    nam: "Hummus".to_string(),
                },
                ..Default::default()
            },
        };

        let decoded = decode_payload(&encode(&payload)).unwrap();
        assert_eq!(decoded.app, "com.tinyspeck.slackmacgap");
        assert_eq!(decoded.req.subt, "#random");
        assert_eq!(decoded.req.soun.nam, "Hummus");
    }

    #[test]
    fn test_decode_xml_payload_with_missing_keys() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>app</key>
    <string>com.apple.mail</string>
    <key>uuid</key>
    <data>AAEC</data>
</dict>
</plist>"#;

        let decoded = decode_payload(xml).unwrap();
        assert_eq!(decoded.app, "com.apple.mail");
        assert_eq!(decoded.date, 0.0);
        assert!(decoded.req.subt.is_empty());
    }

    #[test]
    fn test_decode_rejects_non_plist() {
        assert!(decode_payload(b"definitely not a plist").is_err());
        assert!(decode_payload(&[]).is_err());
    }
}
