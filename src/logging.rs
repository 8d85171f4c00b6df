use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::{EnvFilter, fmt::MakeWriter};

const DEFAULT_FILTER: &str = "quicktodo=debug";

/// Sends tracing output to `log_file`. The terminal belongs to the UI, so
/// without a log file nothing is installed and events are dropped.
pub fn init(log_file: Option<&str>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing::subscriber::set_global_default(build_subscriber(Mutex::new(file), filter))
        .context("Failed to initialise logging")?;

    tracing::info!(path, "logging started");
    Ok(())
}

fn build_subscriber<W>(writer: W, filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::App;
    use std::io::{self, Write};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'w> MakeWriter<'w> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'w self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_no_log_file_installs_nothing() {
        assert!(init(None).is_ok());
    }

    #[test]
    fn test_state_transitions_logged_at_debug() {
        let logs = CapturedLogs::default();
        let subscriber = build_subscriber(logs.clone(), EnvFilter::new(DEFAULT_FILTER));

        tracing::subscriber::with_default(subscriber, || {
            let mut app = App::new("Your Todos".to_string());
            app.add_todo("Buy milk");
            app.add_todo("Walk dog");
            app.toggle_complete(1);
            app.start_editing(1, "Buy milk".to_string());
            app.save_edit();
            app.start_editing(2, "Walk dog".to_string());
            app.cancel_edit();
            app.delete_todo(2);
            app.toggle_selection_mode();
            app.select_all();
            app.delete_selected();
        });

        let output = logs.contents();
        for message in [
            "added todo",
            "toggled completion",
            "started editing",
            "finished editing",
            "cancelled editing",
            "deleted todo",
            "toggled selection mode",
            "deleted selected todos",
        ] {
            assert!(output.contains(message), "missing {:?} in:\n{}", message, output);
        }
        assert!(output.contains("DEBUG"));
    }

    #[test]
    fn test_filter_drops_other_targets() {
        let logs = CapturedLogs::default();
        let subscriber = build_subscriber(logs.clone(), EnvFilter::new(DEFAULT_FILTER));

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!(target: "some_dependency", "noise");
        });

        assert!(!logs.contents().contains("noise"));
    }
}
