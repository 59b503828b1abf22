// ============================================================================
// FORMAT - Formateadores de tamaño, precio y fecha
// ============================================================================

use wasm_bindgen::prelude::*;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Formatear un tamaño de archivo en la unidad más grande con valor >= 1,
/// redondeado a 2 decimales y sin ceros finales ("1.5 KB", "1 MB").
pub fn format_file_size(bytes: f64) -> String {
    if bytes <= 0.0 {
        return "0 Bytes".to_string();
    }

    let exponent = (bytes.ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(SIZE_UNITS.len() - 1);
    let value = bytes / 1024_f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;

    let mut text = format!("{:.2}", rounded);
    if text.contains('.') {
        text = text
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string();
    }
    format!("{} {}", text, SIZE_UNITS[exponent])
}

/// Formatear un importe como moneda (en-US, USD) vía Intl.NumberFormat.
/// Si Intl falla devuelve un formato plano "$x.xx".
pub fn format_price(amount: f64) -> String {
    let options = js_sys::Object::new();
    let configured = js_sys::Reflect::set(
        &options,
        &JsValue::from_str("style"),
        &JsValue::from_str("currency"),
    )
    .and_then(|_| {
        js_sys::Reflect::set(
            &options,
            &JsValue::from_str("currency"),
            &JsValue::from_str("USD"),
        )
    });

    if configured.is_ok() {
        let locales = js_sys::Array::of1(&JsValue::from_str("en-US"));
        let formatter = js_sys::Intl::NumberFormat::new(&locales, &options);
        let format = formatter.format();
        if let Ok(result) = format.call1(&formatter, &JsValue::from_f64(amount)) {
            if let Some(text) = result.as_string() {
                return text;
            }
        }
    }
    format!("${:.2}", amount)
}

/// Formatear una fecha (string parseable por Date) como "Mmm D, YYYY" en-US
pub fn format_date(date_string: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(date_string));

    let options = js_sys::Object::new();
    let pairs = [("year", "numeric"), ("month", "short"), ("day", "numeric")];
    for (key, value) in pairs {
        let _ = js_sys::Reflect::set(
            &options,
            &JsValue::from_str(key),
            &JsValue::from_str(value),
        );
    }

    date.to_locale_date_string("en-US", &options).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bytes() {
        assert_eq!(format_file_size(0.0), "0 Bytes");
    }

    #[test]
    fn picks_largest_unit_with_value_at_least_one() {
        assert_eq!(format_file_size(1.0), "1 Bytes");
        assert_eq!(format_file_size(512.0), "512 Bytes");
        assert_eq!(format_file_size(1024.0), "1 KB");
        assert_eq!(format_file_size(2048.0), "2 KB");
        assert_eq!(format_file_size(1536.0), "1.5 KB");
        assert_eq!(format_file_size(1024.0 * 1024.0), "1 MB");
        assert_eq!(format_file_size(5.0 * 1024.0 * 1024.0), "5 MB");
        assert_eq!(format_file_size(1024.0 * 1024.0 * 1024.0), "1 GB");
    }

    #[test]
    fn rounds_to_two_decimals() {
        // 1400 / 1024 = 1.3671875 -> 1.37
        assert_eq!(format_file_size(1400.0), "1.37 KB");
        // 1126 / 1024 = 1.099... -> 1.1 (sin cero final)
        assert_eq!(format_file_size(1126.0), "1.1 KB");
    }

    #[test]
    fn clamps_to_gigabytes() {
        // Más allá de GB no hay unidad mayor; se queda en GB
        let two_tb = 2.0 * 1024.0 * 1024.0 * 1024.0 * 1024.0;
        assert_eq!(format_file_size(two_tb), "2048 GB");
    }
}
