// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::time::Duration;

/// Format an elapsed duration compactly (e.g. "850µs", "42ms", "1.50s", "2m3.4s").
///
/// Values are rounded to the displayed precision before the unit is chosen,
/// so a seconds field never reads 60.
pub fn format_duration(d: Duration) -> String {
    let millis = d.as_millis();
    let hundredths = (millis + 5) / 10;
    if hundredths >= 6_000 {
        let tenths = (millis + 50) / 100;
        let (mins, rem) = (tenths / 600, tenths % 600);
        format!("{}m{}.{}s", mins, rem / 10, rem % 10)
    } else if millis >= 1_000 {
        format!("{}.{:02}s", hundredths / 100, hundredths % 100)
    } else if millis >= 1 {
        format!("{millis}ms")
    } else {
        format!("{}µs", d.as_micros())
    }
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
