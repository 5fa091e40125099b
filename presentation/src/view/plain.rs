//! Line-oriented view without spinners (`--quiet`)

use crate::output::console::ResponseFormatter;
use hackrx_application::SubmissionView;
use hackrx_domain::{LoadingPhase, OutputFormat};
use serde_json::Value;
use std::io::Write;
use std::sync::Mutex;

type Sink = Mutex<Box<dyn Write + Send>>;

/// Prints each phase change once, the result to `out` and everything
/// else to `err`. Elapsed ticks are not printed.
pub struct PlainView {
    format: OutputFormat,
    out: Sink,
    err: Sink,
}

impl PlainView {
    pub fn new(format: OutputFormat) -> Self {
        Self::with_writers(
            format,
            Box::new(std::io::stdout()),
            Box::new(std::io::stderr()),
        )
    }

    pub fn with_writers(
        format: OutputFormat,
        out: Box<dyn Write + Send>,
        err: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            format,
            out: Mutex::new(out),
            err: Mutex::new(err),
        }
    }

    fn write_line(sink: &Sink, line: &str) {
        if let Ok(mut writer) = sink.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl SubmissionView for PlainView {
    fn alert(&self, message: &str) {
        Self::write_line(&self.err, &ResponseFormatter::format_alert(message));
    }

    fn show_phase(&self, phase: LoadingPhase, elapsed_secs: u64) {
        Self::write_line(
            &self.err,
            &ResponseFormatter::format_status(phase, elapsed_secs),
        );
    }

    fn update_elapsed(&self, _elapsed_secs: u64) {}

    fn show_result(&self, response: &Value, elapsed_secs: u64) {
        Self::write_line(
            &self.out,
            &ResponseFormatter::format_result(response, elapsed_secs, self.format),
        );
    }

    fn show_error(&self, message: &str) {
        Self::write_line(&self.err, &ResponseFormatter::format_error(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Buffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn view(format: OutputFormat) -> (PlainView, Buffer, Buffer) {
        let out = Buffer::default();
        let err = Buffer::default();
        let view = PlainView::with_writers(format, Box::new(out.clone()), Box::new(err.clone()));
        (view, out, err)
    }

    #[test]
    fn test_result_goes_to_out() {
        let (view, out, err) = view(OutputFormat::Pretty);
        view.show_phase(LoadingPhase::Thinking, 0);
        view.update_elapsed(1);
        view.show_result(&json!({"answers": ["x"]}), 1);

        assert!(out.contents().contains("Completed in 1s"));
        assert!(out.contents().contains("\"answers\""));
        assert!(err.contents().contains("Thinking..."));
        assert_eq!(err.contents().lines().count(), 1);
    }

    #[test]
    fn test_json_output_is_parseable() {
        let (view, out, _err) = view(OutputFormat::Json);
        view.show_result(&json!({"answers": ["x"]}), 9);

        let parsed: Value = serde_json::from_str(out.contents().trim()).unwrap();
        assert_eq!(parsed, json!({"answers": ["x"]}));
    }

    #[test]
    fn test_error_goes_to_err() {
        let (view, out, err) = view(OutputFormat::Pretty);
        view.show_error("server exploded");

        assert!(out.contents().is_empty());
        assert!(err.contents().contains("server exploded"));
    }

    #[test]
    fn test_alert_goes_to_err() {
        let (view, out, err) = view(OutputFormat::Pretty);
        view.alert("Please enter a document URL and at least one question.");

        assert!(out.contents().is_empty());
        assert!(err.contents().contains("Please enter a document URL"));
    }
}
