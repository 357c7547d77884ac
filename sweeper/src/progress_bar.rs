use indicatif::{ProgressBar, ProgressStyle};
use seal_sweep::{ConsoleProgress, ProgressReporter, RunResult, SweepProgress};
use std::io;

/// Progress lines on stdout plus an indicatif bar on stderr.
///
/// The bar is hidden while a progress line is written so the two never share a row.
pub struct BarProgress<P> {
    inner: P,
    bar: ProgressBar,
}

impl BarProgress<ConsoleProgress<io::Stdout>> {
    pub fn stdout(run_count: u64) -> Self {
        Self::new(ConsoleProgress::stdout(), ProgressBar::new(run_count))
    }
}

impl<P: ProgressReporter> BarProgress<P> {
    pub fn new(inner: P, bar: ProgressBar) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("+>-");
        bar.set_style(style);
        Self { inner, bar }
    }

    pub fn bar(&self) -> &ProgressBar {
        &self.bar
    }
}

impl<P: ProgressReporter> ProgressReporter for BarProgress<P> {
    fn starting(&mut self, progress: &SweepProgress) -> io::Result<()> {
        let inner = &mut self.inner;
        self.bar.suspend(|| inner.starting(progress))
    }

    fn finished(&mut self, progress: &SweepProgress, result: &RunResult) -> io::Result<()> {
        self.bar.inc(1);
        let status = match result.exit_code {
            Some(0) => "ok".to_string(),
            Some(code) => format!("exit {}", code),
            None => "killed".to_string(),
        };
        self.bar.set_message(format!(
            "{} {}/{} {}",
            progress.running_variable, progress.index, progress.count, status
        ));
        self.inner.finished(progress, result)
    }

    fn complete(&mut self) -> io::Result<()> {
        self.bar.finish();
        self.inner.complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_tracks_finished_runs() {
        let bar = ProgressBar::hidden();
        bar.set_length(2);
        let mut progress = BarProgress::new(ConsoleProgress::new(Vec::new()), bar);

        for index in 1..=2 {
            let position = SweepProgress {
                running_variable: "seed".to_string(),
                index,
                count: 2,
            };
            progress.starting(&position).expect("Writing to a Vec cannot fail");
            progress
                .finished(&position, &RunResult::new(index, Some(1)))
                .expect("Writing to a Vec cannot fail");
        }
        progress.complete().expect("Writing to a Vec cannot fail");

        assert_eq!(progress.bar().position(), 2);
        assert_eq!(progress.bar().message(), "seed 2/2 exit 1");
        assert_eq!(
            String::from_utf8(progress.inner.into_inner()).expect("Progress is UTF-8"),
            "==== Running with seed 1/2 ====\n==== Running with seed 2/2 ====\n"
        );
    }
}
