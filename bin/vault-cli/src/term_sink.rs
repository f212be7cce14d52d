use console::{style, Term};
use vault_withdraw_form::{Notification, NotificationSink, Severity};

/// Prints notifications to the terminal.
#[derive(Debug, Clone)]
pub struct TermSink {
    term: Term,
}

impl TermSink {
    pub fn new(term: Term) -> Self {
        Self { term }
    }
}

impl NotificationSink for TermSink {
    fn notify(&mut self, n: Notification) {
        let title = match n.severity {
            Severity::Success => style(n.title).green().bold(),
            Severity::Warning => style(n.title).yellow().bold(),
            Severity::Error => style(n.title).red().bold(),
            Severity::Info => style(n.title).bold(),
        };
        let _ = self.term.write_line(&title.to_string());
        let _ = self.term.write_line(&n.description);
    }
}
