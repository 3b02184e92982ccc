//! Decoder for the encoded polyline format (Google / GraphHopper).
//!
//! Decoded points come out as `[lat, lon]`, the format's native order.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid encoded polyline at byte {offset}")]
pub struct PolylineError {
    pub offset: usize,
}

/// Decode `encoded` using `precision` decimal digits (5 for GraphHopper).
pub fn decode(encoded: &str, precision: u32) -> Result<Vec<[f64; 2]>, PolylineError> {
    let factor = 10f64.powi(precision as i32);
    let bytes = encoded.as_bytes();
    let mut offset = 0usize;
    let mut lat = 0i64;
    let mut lon = 0i64;
    let mut points = Vec::new();

    while offset < bytes.len() {
        let start = offset;
        lat = lat
            .checked_add(next_delta(bytes, &mut offset)?)
            .ok_or(PolylineError { offset: start })?;
        let start = offset;
        lon = lon
            .checked_add(next_delta(bytes, &mut offset)?)
            .ok_or(PolylineError { offset: start })?;
        points.push([lat as f64 / factor, lon as f64 / factor]);
    }
    Ok(points)
}

fn next_delta(bytes: &[u8], offset: &mut usize) -> Result<i64, PolylineError> {
    let mut result = 0i64;
    let mut shift = 0u32;
    loop {
        let byte = match bytes.get(*offset) {
            Some(byte) if (63..=126).contains(byte) && shift <= 60 => i64::from(*byte) - 63,
            _ => return Err(PolylineError { offset: *offset }),
        };
        *offset += 1;
        result |= (byte & 0x1f) << shift;
        shift += 5;
        if byte < 0x20 {
            break;
        }
    }
    Ok(if result & 1 != 0 { !(result >> 1) } else { result >> 1 })
}
