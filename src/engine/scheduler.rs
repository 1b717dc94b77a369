/// Frame-tick scheduling capability injected by the host.
///
/// The engine asks for at most one outstanding tick; the host answers each
/// `schedule` call by invoking [`crate::ParallaxEngine::on_frame`] at the
/// next display-refresh opportunity. There is no cancel operation: once
/// scheduled, a tick always eventually arrives, and the engine's pending
/// flag makes rescheduling idempotent rather than additive.
pub trait FrameScheduler {
    /// Request one frame tick.
    fn schedule(&mut self);
}
