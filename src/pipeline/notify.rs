/// Fire-and-forget lifecycle signals, broadcast so a host can manage
/// loading-state UI. Emitted at the start and end of every run, on both the
/// success and failure paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    LoadingStarted,
    LoadingFinished,
}

/// Host-side listener. Implementations must not block; the pipeline never
/// inspects the outcome of a notification.
pub trait Notify: Send + Sync {
    fn notify(&self, event: LifecycleEvent);
}

/// Default listener that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notify for NullNotifier {
    fn notify(&self, _event: LifecycleEvent) {}
}
