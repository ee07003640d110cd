//! One-shot splash timer.

use crate::app::events::AppEvent;
use crate::app::handlers::notify;
use crate::app::state::AppState;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

/// Handle to a pending splash dismissal. Dropping it cancels the timer.
#[derive(Debug)]
pub struct SplashTimer {
    kind: TimerKind,
}

#[derive(Debug)]
enum TimerKind {
    Task(tokio::task::JoinHandle<()>),
    Thread(Arc<AtomicBool>),
    Fired,
}

impl SplashTimer {
    /// Arm the timer.
    ///
    /// Runs on the ambient tokio runtime when there is one, otherwise on a
    /// dedicated thread.
    pub(crate) fn start(
        state: Weak<RwLock<AppState>>,
        event_tx: Sender<AppEvent>,
        delay: Duration,
    ) -> Self {
        let kind = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => TimerKind::Task(runtime.spawn(async move {
                tokio::time::sleep(delay).await;
                dismiss(&state, &event_tx);
            })),
            Err(_) => {
                let cancelled = Arc::new(AtomicBool::new(false));
                let flag = cancelled.clone();
                let thread_state = state.clone();
                let thread_tx = event_tx.clone();
                let spawned = std::thread::Builder::new()
                    .name("splash-timer".to_string())
                    .spawn(move || {
                        std::thread::sleep(delay);
                        if !flag.load(Ordering::SeqCst) {
                            dismiss(&thread_state, &thread_tx);
                        }
                    });
                match spawned {
                    Ok(_) => TimerKind::Thread(cancelled),
                    Err(e) => {
                        tracing::warn!(
                            error = %e,
                            "Could not start splash timer thread, dismissing splash now"
                        );
                        dismiss(&state, &event_tx);
                        TimerKind::Fired
                    }
                }
            }
        };

        tracing::debug!(delay_ms = delay.as_millis() as u64, "Splash timer armed");
        Self { kind }
    }

    /// Stop the timer if it has not fired yet.
    pub fn cancel(&self) {
        match &self.kind {
            TimerKind::Task(handle) => handle.abort(),
            TimerKind::Thread(cancelled) => cancelled.store(true, Ordering::SeqCst),
            TimerKind::Fired => {}
        }
    }
}

impl Drop for SplashTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Hide the splash, unless the controller is already gone or it was hidden before.
fn dismiss(state: &Weak<RwLock<AppState>>, event_tx: &Sender<AppEvent>) {
    let Some(state) = state.upgrade() else {
        tracing::trace!("Splash timer fired after teardown - ignored");
        return;
    };

    {
        let mut state = state.write();
        if !state.splash_visible {
            return;
        }
        state.splash_visible = false;
    }

    tracing::debug!("Splash dismissed");
    notify(event_tx, AppEvent::SplashDismissed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_channel::unbounded;

    #[tokio::test(start_paused = true)]
    async fn test_timer_dismisses_after_delay() {
        let state = Arc::new(RwLock::new(AppState::default()));
        let (tx, rx) = unbounded();
        let _timer = SplashTimer::start(Arc::downgrade(&state), tx, Duration::from_millis(3000));

        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert!(state.read().splash_visible);

        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert!(!state.read().splash_visible);
        assert_eq!(rx.try_recv().unwrap(), AppEvent::SplashDismissed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_timer_never_fires() {
        let state = Arc::new(RwLock::new(AppState::default()));
        let (tx, rx) = unbounded();
        let timer = SplashTimer::start(Arc::downgrade(&state), tx, Duration::from_millis(3000));
        timer.cancel();

        tokio::time::sleep(Duration::from_millis(5000)).await;
        tokio::task::yield_now().await;
        assert!(state.read().splash_visible);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_ignores_dropped_state() {
        let state = Arc::new(RwLock::new(AppState::default()));
        let weak = Arc::downgrade(&state);
        let (tx, rx) = unbounded();
        let _timer = SplashTimer::start(weak.clone(), tx, Duration::from_millis(10));
        drop(state);

        tokio::time::sleep(Duration::from_millis(50)).await;
        tokio::task::yield_now().await;
        assert!(weak.upgrade().is_none());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_thread_fallback_without_runtime() {
        let state = Arc::new(RwLock::new(AppState::default()));
        let (tx, rx) = unbounded();
        let _timer = SplashTimer::start(Arc::downgrade(&state), tx, Duration::from_millis(5));

        let event = rx.recv_blocking().unwrap();
        assert_eq!(event, AppEvent::SplashDismissed);
        assert!(!state.read().splash_visible);
    }
}
