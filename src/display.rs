//! Word cloud display channel
//!
//! Any thread may hold a [`DisplayHandle`] and push new text. The UI thread
//! owns the matching [`DisplayQueue`] and applies queued commands at the start
//! of every frame, so the displayed text is only ever written from there.

use eframe::egui;
use tokio::sync::mpsc;
use tracing::trace;

/// Message consumed by the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayCommand {
    SetText(String),
}

/// Narrow capability for producers that only need to replace the text.
pub trait TextDisplay: Send + Sync {
    fn set_text(&self, text: String);
}

/// The text currently shown in the window. Starts empty.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordCloudText {
    text: String,
}

impl WordCloudText {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    fn apply(&mut self, command: DisplayCommand) {
        match command {
            DisplayCommand::SetText(text) => self.text = text,
        }
    }
}

/// Sending half, cheap to clone and safe to move across threads.
#[derive(Clone)]
pub struct DisplayHandle {
    tx: mpsc::UnboundedSender<DisplayCommand>,
    ctx: egui::Context,
}

impl DisplayHandle {
    /// Schedule `text` to replace the displayed word cloud and return
    /// immediately. Silently ignored once the window has closed.
    pub fn update_word_cloud(&self, text: impl Into<String>) {
        let text = text.into();
        trace!(len = text.len(), "Queueing word cloud update");
        if self.tx.send(DisplayCommand::SetText(text)).is_err() {
            trace!("Display queue closed, dropping update");
            return;
        }
        self.ctx.request_repaint();
    }

    /// Schedule an empty display.
    pub fn clear(&self) {
        self.update_word_cloud(String::new());
    }

    /// True once the UI side has been dropped.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl TextDisplay for DisplayHandle {
    fn set_text(&self, text: String) {
        self.update_word_cloud(text);
    }
}

/// Receiving half, owned by the UI thread.
pub struct DisplayQueue {
    rx: mpsc::UnboundedReceiver<DisplayCommand>,
}

impl DisplayQueue {
    /// Apply every pending command in arrival order. Returns how many were applied.
    pub fn apply_pending(&mut self, target: &mut WordCloudText) -> usize {
        let mut applied = 0;
        while let Ok(command) = self.rx.try_recv() {
            target.apply(command);
            applied += 1;
        }
        applied
    }
}

/// Create a connected handle/queue pair. `ctx` is woken on every update.
pub fn channel(ctx: egui::Context) -> (DisplayHandle, DisplayQueue) {
    let (tx, rx) = mpsc::unbounded_channel();
    (DisplayHandle { tx, ctx }, DisplayQueue { rx })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn setup() -> (DisplayHandle, DisplayQueue, WordCloudText) {
        let (handle, queue) = channel(egui::Context::default());
        (handle, queue, WordCloudText::default())
    }

    #[test]
    fn starts_empty() {
        assert_eq!(WordCloudText::default().as_str(), "");
    }

    #[test]
    fn update_is_applied_after_drain() {
        let (handle, mut queue, mut text) = setup();
        handle.update_word_cloud("rust borrow checker");

        // Nothing changes until the UI side drains.
        assert_eq!(text.as_str(), "");
        assert_eq!(queue.apply_pending(&mut text), 1);
        assert_eq!(text.as_str(), "rust borrow checker");
    }

    #[test]
    fn last_write_wins() {
        let (handle, mut queue, mut text) = setup();
        handle.update_word_cloud("first");
        handle.update_word_cloud(String::from("second"));

        assert_eq!(queue.apply_pending(&mut text), 2);
        assert_eq!(text.as_str(), "second");
    }

    #[test]
    fn empty_and_clear_produce_empty_display() {
        let (handle, mut queue, mut text) = setup();
        handle.update_word_cloud("something");
        handle.update_word_cloud("");
        queue.apply_pending(&mut text);
        assert_eq!(text.as_str(), "");

        handle.update_word_cloud("again");
        handle.clear();
        queue.apply_pending(&mut text);
        assert_eq!(text.as_str(), "");
    }

    #[test]
    fn update_from_other_thread() {
        let (handle, mut queue, mut text) = setup();
        let worker = handle.clone();
        std::thread::spawn(move || {
            worker.update_word_cloud("one");
            worker.update_word_cloud("two");
        })
        .join()
        .unwrap();

        queue.apply_pending(&mut text);
        assert_eq!(text.as_str(), "two");
    }

    #[test]
    fn threads_in_sequence_keep_order() {
        let (handle, mut queue, mut text) = setup();
        for word in ["alpha", "beta", "gamma"] {
            let h = handle.clone();
            std::thread::spawn(move || h.update_word_cloud(word))
                .join()
                .unwrap();
        }

        queue.apply_pending(&mut text);
        assert_eq!(text.as_str(), "gamma");
    }

    #[test]
    fn send_after_queue_dropped_is_ignored() {
        let (handle, queue, _) = setup();
        drop(queue);
        assert!(handle.is_closed());
        handle.update_word_cloud("nobody listening");
        handle.clear();
    }

    #[test]
    fn trait_object_sets_text() {
        let (handle, mut queue, mut text) = setup();
        let display: Arc<dyn TextDisplay> = Arc::new(handle);
        display.set_text("via capability".to_string());

        queue.apply_pending(&mut text);
        assert_eq!(text.as_str(), "via capability");
    }

    #[test]
    fn drain_with_nothing_pending() {
        let (_handle, mut queue, mut text) = setup();
        assert_eq!(queue.apply_pending(&mut text), 0);
        assert_eq!(text.as_str(), "");
    }
}
