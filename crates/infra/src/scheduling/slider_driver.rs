//! Frame driver for [`SliderPane`] instances.
//!
//! Browsers call the slider from `requestAnimationFrame`; here a tokio
//! interval plays that role. The driver owns nothing but the loop: the pane
//! is shared so input handlers can keep calling `pointer_enter`,
//! `drag_move` and friends on it while frames are running. Slider and
//! surface sit behind the same lock, so a frame and an input event never
//! wait on each other in opposite order.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use parking_lot::Mutex;
//! use uplokal_core::{AutoSlider, ScrollSurface, SliderPane};
//! use uplokal_infra::scheduling::{SliderDriver, SliderDriverConfig};
//!
//! struct Strip {
//!     left: f64,
//! }
//!
//! impl ScrollSurface for Strip {
//!     fn scroll_left(&self) -> f64 {
//!         self.left
//!     }
//!     fn set_scroll_left(&mut self, x: f64) {
//!         self.left = x;
//!     }
//!     fn scroll_width(&self) -> f64 {
//!         2400.0
//!     }
//! }
//!
//! # async fn example() -> Result<(), uplokal_infra::scheduling::SchedulerError> {
//! let pane = Arc::new(Mutex::new(SliderPane::new(AutoSlider::new(0.8), Strip { left: 0.0 })));
//!
//! let mut driver = SliderDriver::new(Arc::clone(&pane), SliderDriverConfig::default());
//! driver.start()?;
//!
//! // Input from the view goes through the same pane
//! pane.lock().drag_start(120.0);
//! pane.lock().drag_move(90.0);
//! pane.lock().drag_end();
//!
//! driver.stop().await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};
use uplokal_core::{ScrollSurface, SliderPane};

use crate::scheduling::error::{SchedulerError, SchedulerResult};

/// Slider and surface shared between the driver and input handlers
pub type SharedPane<S> = Arc<Mutex<SliderPane<S>>>;

/// Configuration for [`SliderDriver`]
#[derive(Debug, Clone)]
pub struct SliderDriverConfig {
    /// Time between frames
    pub frame_interval: Duration,
    /// How long `stop` waits for the frame loop to exit
    pub join_timeout: Duration,
}

impl Default for SliderDriverConfig {
    fn default() -> Self {
        Self { frame_interval: Duration::from_millis(16), join_timeout: Duration::from_secs(5) }
    }
}

/// Runs [`SliderPane::frame`] on a fixed interval until stopped
pub struct SliderDriver<S> {
    pane: SharedPane<S>,
    config: SliderDriverConfig,
    cancellation_token: CancellationToken,
    task_handle: Option<JoinHandle<()>>,
}

impl<S> SliderDriver<S>
where
    S: ScrollSurface + Send + 'static,
{
    pub fn new(pane: SharedPane<S>, config: SliderDriverConfig) -> Self {
        Self { pane, config, cancellation_token: CancellationToken::new(), task_handle: None }
    }

    /// Handle to the driven pane, for wiring input events.
    pub fn pane(&self) -> SharedPane<S> {
        Arc::clone(&self.pane)
    }

    /// Start the frame loop
    ///
    /// Frame timestamps are milliseconds since `start`; the first frame
    /// therefore never moves the slider.
    ///
    /// # Errors
    ///
    /// Returns error if the driver is already running or the configured
    /// interval is zero
    #[instrument(skip(self))]
    pub fn start(&mut self) -> SchedulerResult<()> {
        if self.is_running() {
            return Err(SchedulerError::AlreadyRunning);
        }
        if self.config.frame_interval.is_zero() {
            return Err(SchedulerError::InvalidInterval(self.config.frame_interval));
        }

        // Fresh token so a stopped driver can be restarted
        self.cancellation_token = CancellationToken::new();

        let pane = Arc::clone(&self.pane);
        let interval = self.config.frame_interval;
        let cancel = self.cancellation_token.clone();

        self.task_handle = Some(tokio::spawn(async move {
            Self::frame_loop(pane, interval, cancel).await;
        }));

        info!(interval_ms = interval.as_millis() as u64, "Slider driver started");
        Ok(())
    }

    /// Stop the frame loop and wait for it to exit
    ///
    /// # Errors
    ///
    /// Returns error if the driver is not running, the loop does not exit
    /// within the join timeout, or the task panicked
    #[instrument(skip(self))]
    pub async fn stop(&mut self) -> SchedulerResult<()> {
        let Some(handle) = self.task_handle.take() else {
            return Err(SchedulerError::NotRunning);
        };

        self.cancellation_token.cancel();

        let join_timeout = self.config.join_timeout;
        tokio::time::timeout(join_timeout, handle)
            .await
            .map_err(|_| SchedulerError::Timeout { seconds: join_timeout.as_secs() })?
            .map_err(|e| SchedulerError::TaskJoinFailed(e.to_string()))?;

        info!("Slider driver stopped");
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.task_handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    async fn frame_loop(pane: SharedPane<S>, interval: Duration, cancel: CancellationToken) {
        let started = Instant::now();
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                () = cancel.cancelled() => {
                    debug!("Slider frame loop cancelled");
                    break;
                }
                tick = ticker.tick() => {
                    let now_ms = tick.duration_since(started).as_secs_f64() * 1000.0;
                    pane.lock().frame(now_ms);
                }
            }
        }
    }
}

impl<S> Drop for SliderDriver<S> {
    fn drop(&mut self) {
        self.cancellation_token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use uplokal_core::{AutoSlider, SliderState};

    use super::*;

    struct Strip {
        left: f64,
        width: f64,
    }

    impl ScrollSurface for Strip {
        fn scroll_left(&self) -> f64 {
            self.left
        }

        fn set_scroll_left(&mut self, x: f64) {
            self.left = x;
        }

        fn scroll_width(&self) -> f64 {
            self.width
        }
    }

    fn shared_pane(speed: f64) -> SharedPane<Strip> {
        Arc::new(Mutex::new(SliderPane::new(
            AutoSlider::new(speed),
            Strip { left: 0.0, width: 100_000.0 },
        )))
    }

    fn driver(speed: f64) -> (SliderDriver<Strip>, SharedPane<Strip>) {
        let pane = shared_pane(speed);
        (SliderDriver::new(Arc::clone(&pane), SliderDriverConfig::default()), pane)
    }

    #[tokio::test(start_paused = true)]
    async fn frames_advance_the_surface() {
        let (mut driver, pane) = driver(1.0);
        driver.start().unwrap();
        assert!(driver.is_running());

        tokio::time::sleep(Duration::from_millis(500)).await;
        driver.stop().await.unwrap();

        assert!(pane.lock().surface().left > 0.0);
        assert!(!driver.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn paused_slider_holds_position() {
        let (mut driver, pane) = driver(1.0);
        driver.pane().lock().pointer_enter();
        driver.start().unwrap();

        tokio::time::sleep(Duration::from_millis(500)).await;
        driver.stop().await.unwrap();

        assert_eq!(pane.lock().surface().left, 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_driver_does_not_move_the_surface() {
        let (mut driver, pane) = driver(1.0);
        driver.start().unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        driver.stop().await.unwrap();

        let parked = pane.lock().surface().left;
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(pane.lock().surface().left, parked);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn input_from_another_thread_while_frames_run() {
        let pane = shared_pane(2.0);
        let config =
            SliderDriverConfig { frame_interval: Duration::from_millis(1), ..Default::default() };
        let mut driver = SliderDriver::new(Arc::clone(&pane), config);
        driver.start().unwrap();

        let input = Arc::clone(&pane);
        let handler = tokio::task::spawn_blocking(move || {
            for i in 0..2_000 {
                let x = f64::from(i % 50);
                input.lock().drag_start(x);
                input.lock().drag_move(x + 10.0);
                input.lock().drag_end();
                input.lock().pointer_enter();
                input.lock().pointer_leave();
            }
        });

        tokio::time::timeout(Duration::from_secs(10), handler)
            .await
            .expect("input handler stalled against the frame loop")
            .unwrap();

        assert!(driver.is_running());
        driver.stop().await.unwrap();
        assert_eq!(pane.lock().state(), SliderState::Running);
    }

    #[tokio::test]
    async fn lifecycle_errors() {
        let (mut driver, _pane) = driver(1.0);
        assert!(matches!(driver.stop().await, Err(SchedulerError::NotRunning)));

        driver.start().unwrap();
        assert!(matches!(driver.start(), Err(SchedulerError::AlreadyRunning)));

        driver.stop().await.unwrap();
        driver.start().unwrap();
        driver.stop().await.unwrap();
    }

    #[tokio::test]
    async fn zero_interval_is_rejected() {
        let config = SliderDriverConfig { frame_interval: Duration::ZERO, ..Default::default() };
        let mut driver = SliderDriver::new(shared_pane(1.0), config);

        assert!(matches!(driver.start(), Err(SchedulerError::InvalidInterval(_))));
    }
}
