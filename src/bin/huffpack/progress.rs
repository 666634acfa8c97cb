//! Progress display for the files read by the command line tool.
//!
//! This implementation relies heavily on the `indicatif` crate, see <https://docs.rs/indicatif>

use std::{fmt::Write, io::Read, time::Duration};

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tracing::info;

/// Wraps a reader and keeps track of how many of the expected bytes have been read.
///
/// The bar is cleared and a summary is logged once `total` bytes went through.
pub struct ProgressMonitor<R: Read> {
    pub total: usize,
    pub read: usize,
    reader: R,
    progress_bar: ProgressBar,
}

impl<R: Read> ProgressMonitor<R> {
    pub fn new(reader: R, size: usize) -> Self {
        // https://docs.rs/indicatif/latest/indicatif/index.html#templates
        let style = ProgressStyle::with_template(
            "{wide_bar} {binary_bytes}/{binary_total_bytes}  \n[est. {eta} remaining]",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar());
        let progress_bar = ProgressBar::new(size as u64).with_style(style);
        // The default is 20hz, this reduces rendering overhead
        progress_bar.set_draw_target(ProgressDrawTarget::stderr_with_hz(8));
        Self {
            reader,
            total: size,
            read: 0,
            progress_bar,
        }
    }

    fn update(&mut self, delta: u64) {
        self.progress_bar.inc(delta);
        if self.total == self.read && !self.progress_bar.is_finished() {
            self.progress_bar.finish_and_clear();
            let elapsed = self.progress_bar.elapsed();
            info!(
                "read {} in {} ({}/s avg)",
                fmt_size(self.total as f64),
                fmt_duration(elapsed),
                fmt_size(throughput(self.total, elapsed))
            );
        }
    }
}

impl<R: Read> Read for ProgressMonitor<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let out = self.reader.read(buf)?;
        self.read += out;
        self.update(out as u64);
        Ok(out)
    }
}

/// Bytes per second, a read that took no measurable time counts as taking one millisecond.
fn throughput(bytes: usize, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64().max(0.001);
    bytes as f64 / secs
}

/// Converts a quantity in bytes to a human readable size, "GiB, MiB, KiB, etc"
pub fn fmt_size(size_in_bytes: f64) -> String {
    let units = ["B", "KiB", "MiB", "GiB", "TiB", "PiB"];
    if size_in_bytes < 1.0 {
        return format!("{:.0}{}", size_in_bytes, units[0]);
    }
    let order_of_magnitude = size_in_bytes.log10() as usize;
    // Overflow to the next unit once there are more than 3 figures before the decimal
    let unit_index = (order_of_magnitude / 3).min(units.len() - 1);
    let decimal = size_in_bytes / 2_f64.powi((unit_index * 10) as i32);
    if unit_index > 0 {
        format!("{:.2}{}", decimal, units[unit_index])
    } else {
        format!("{:.0}{}", decimal, units[unit_index])
    }
}

/// Converts a [`std::time::Duration`] to a human readable format
pub fn fmt_duration(duration: Duration) -> String {
    let as_secs = duration.as_secs_f64();
    let secs_portion = as_secs % 60.0;
    let total_mins = (as_secs / 60.0).floor() as usize;
    let min_portion = total_mins % 60;
    let hr_portion = total_mins / 60;

    let mut output = String::with_capacity(8);
    // writing into a String can't fail
    if hr_portion > 0 {
        let _ = write!(&mut output, "{hr_portion}h ");
    }
    if min_portion > 0 {
        let _ = write!(&mut output, "{min_portion}m ");
    }
    if as_secs > 60.0 && secs_portion != 0.0 {
        let _ = write!(&mut output, "{:.0}s", secs_portion.round());
    } else if secs_portion > 4.0 {
        let _ = write!(&mut output, "{secs_portion:.1}s");
    } else if secs_portion > 1.0 {
        let _ = write!(&mut output, "{secs_portion:.2}s");
    } else if secs_portion > 0.0 {
        let _ = write!(&mut output, "{:.2}ms", secs_portion * 1000.0);
    } else if output.is_empty() {
        output.push_str("0ms");
    }
    output.trim().to_string()
}
