mod animator;
mod throttle;

pub use animator::RectAnimator;
pub use throttle::Throttle;
