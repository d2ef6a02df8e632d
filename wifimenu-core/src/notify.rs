use crate::command;

/// Desktop notifications. Delivery problems never reach the caller.
#[allow(async_fn_in_trait)]
pub trait Notifier {
    async fn notify(&self, title: &str, message: &str);
}

pub struct NotifySend {
    program: String,
}

impl NotifySend {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Notifier for NotifySend {
    async fn notify(&self, title: &str, message: &str) {
        tracing::info!("{}", message);

        match command::run(&self.program, &[title, message], None).await {
            Ok(out) if !out.success() => {
                tracing::debug!("notification not delivered: {}", out.stderr.trim());
            }
            Err(e) => tracing::debug!("notification not delivered: {}", e),
            Ok(_) => {}
        }
    }
}
