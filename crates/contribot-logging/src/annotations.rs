//! Workflow annotations.

use std::{fmt::Write as _, io::Write};

use tracing::{
    field::{Field, Visit},
    Event, Level, Subscriber,
};
use tracing_subscriber::{
    fmt::MakeWriter,
    layer::{Context, Layer},
};

/// Mirror warning and error events as GitHub Actions workflow commands,
/// so they show up as annotations on the run summary.
pub(crate) struct ActionsAnnotationLayer<W> {
    make_writer: W,
}

impl<W> ActionsAnnotationLayer<W> {
    pub fn new(make_writer: W) -> Self {
        Self { make_writer }
    }
}

impl<S, W> Layer<S> for ActionsAnnotationLayer<W>
where
    S: Subscriber,
    W: for<'w> MakeWriter<'w> + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = *event.metadata().level();
        let command = if level == Level::ERROR {
            "error"
        } else if level == Level::WARN {
            "warning"
        } else {
            return;
        };

        let mut visitor = AnnotationVisitor::default();
        event.record(&mut visitor);

        // Nowhere left to report a failing log write.
        let _ = writeln!(
            self.make_writer.make_writer(),
            "{}",
            format_annotation(command, &visitor.into_message())
        );
    }
}

#[derive(Default)]
struct AnnotationVisitor {
    message: String,
    fields: String,
}

impl AnnotationVisitor {
    fn into_message(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else {
            format!("{} ({})", self.message, self.fields.trim_start())
        }
    }
}

impl Visit for AnnotationVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

/// Build a `::command::message` line, escaping what the runner would interpret.
pub(crate) fn format_annotation(command: &str, message: &str) -> String {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::{}::{}", command, escaped)
}
