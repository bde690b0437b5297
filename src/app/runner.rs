use crate::domain::ports::Greeting;

pub struct App<G: Greeting> {
    greeter: G,
}

impl<G: Greeting> App<G> {
    pub fn new(greeter: G) -> Self {
        Self { greeter }
    }

    /// 取得問候訊息並寫入日誌
    pub fn run(&self) -> String {
        let message = self.greeter.message().to_string();
        tracing::info!("👋 {}", message);
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::greeter::Greeter;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct RecordingGreeter {
        calls: AtomicUsize,
    }

    impl Greeting for RecordingGreeter {
        fn message(&self) -> &str {
            self.calls.fetch_add(1, Ordering::SeqCst);
            "recorded"
        }
    }

    #[test]
    fn test_run_invokes_greeter_message() {
        let app = App::new(RecordingGreeter {
            calls: AtomicUsize::new(0),
        });

        let message = app.run();

        assert_eq!(message, "recorded");
        assert_eq!(app.greeter.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_run_with_default_greeter() {
        let app = App::new(Greeter::new());
        assert!(!app.run().is_empty());
    }
}
