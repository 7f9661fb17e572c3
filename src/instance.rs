//! Access to the running visualizer
//!
//! The window publishes its [`DisplayHandle`] once it has started. Producers
//! hold a [`VisualizerInstance`] and either poll it or wait for the window.

use crate::display::DisplayHandle;
use tokio::sync::watch;
use tracing::debug;

/// Write side, consumed by the window at startup.
pub struct InstancePublisher {
    tx: watch::Sender<Option<DisplayHandle>>,
}

impl InstancePublisher {
    pub fn publish(self, handle: DisplayHandle) {
        debug!("Visualizer instance published");
        self.tx.send_replace(Some(handle));
    }
}

/// Read side, cloneable and shareable with any producer.
#[derive(Clone)]
pub struct VisualizerInstance {
    rx: watch::Receiver<Option<DisplayHandle>>,
}

impl VisualizerInstance {
    /// The running window's handle, or `None` before it has started.
    pub fn get(&self) -> Option<DisplayHandle> {
        self.rx.borrow().clone()
    }

    /// Wait for the window to start. Resolves to `None` if the publisher
    /// was dropped without publishing.
    pub async fn wait(&self) -> Option<DisplayHandle> {
        let mut rx = self.rx.clone();
        let result = rx.wait_for(Option::is_some).await;
        match result {
            Ok(handle) => (*handle).clone(),
            Err(_) => None,
        }
    }

    /// Blocking variant of [`wait`](Self::wait) for plain threads.
    pub fn wait_blocking(&self) -> Option<DisplayHandle> {
        futures::executor::block_on(self.wait())
    }
}

/// Create an unpublished slot.
pub fn slot() -> (InstancePublisher, VisualizerInstance) {
    let (tx, rx) = watch::channel(None);
    (InstancePublisher { tx }, VisualizerInstance { rx })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{self, WordCloudText};
    use eframe::egui;

    #[test]
    fn none_before_start() {
        let (_publisher, instance) = slot();
        assert!(instance.get().is_none());
    }

    #[test]
    fn some_after_publish() {
        let (publisher, instance) = slot();
        let (handle, _queue) = display::channel(egui::Context::default());
        publisher.publish(handle);

        assert!(instance.get().is_some());
        assert!(instance.clone().get().is_some());
    }

    #[tokio::test]
    async fn wait_resolves_after_publish() {
        let (publisher, instance) = slot();
        let (handle, mut queue) = display::channel(egui::Context::default());

        let waiter = tokio::spawn({
            let instance = instance.clone();
            async move { instance.wait().await }
        });
        publisher.publish(handle);

        let handle = waiter.await.unwrap().expect("handle after publish");
        handle.update_word_cloud("ready");

        let mut text = WordCloudText::default();
        queue.apply_pending(&mut text);
        assert_eq!(text.as_str(), "ready");
    }

    #[tokio::test]
    async fn wait_is_none_when_never_started() {
        let (publisher, instance) = slot();
        drop(publisher);
        assert!(instance.wait().await.is_none());
    }

    #[test]
    fn handle_survives_publisher_drop() {
        let (publisher, instance) = slot();
        let (handle, _queue) = display::channel(egui::Context::default());
        publisher.publish(handle);

        // Publisher is consumed by publish; the value stays readable.
        assert!(instance.get().is_some());
        assert!(instance.wait_blocking().is_some());
    }

    #[test]
    fn wait_blocking_from_producer_thread() {
        let (publisher, instance) = slot();
        let (handle, mut queue) = display::channel(egui::Context::default());

        let producer = std::thread::spawn(move || {
            if let Some(display) = instance.wait_blocking() {
                display.update_word_cloud("from producer");
            }
        });
        publisher.publish(handle);
        producer.join().unwrap();

        let mut text = WordCloudText::default();
        queue.apply_pending(&mut text);
        assert_eq!(text.as_str(), "from producer");
    }
}
