/// Default cool-down between two committed reorders of one drag session.
pub const DEFAULT_COOLDOWN_MS: u64 = 500;
/// Default duration of the settle ("play") transition.
pub const DEFAULT_SETTLE_DURATION_MS: u32 = 300;

/// Configuration for [`crate::DragController`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReorderOptions {
    /// Minimum time between two committed reorders within one drag session.
    ///
    /// Pointer tracking is never throttled; only the collision-triggered commit is.
    pub cooldown_ms: u64,

    /// Duration of the transition neighbors play when they slide into their new slot.
    pub settle_duration_ms: u32,

    /// Re-measure neighbor boxes before each collision scan.
    ///
    /// When disabled, the scan uses the boxes captured at drag start (or after the last
    /// commit), which can lag behind the real layout if the host scrolls mid-drag.
    pub resnapshot_before_scan: bool,

    /// Play settle animations for neighbors displaced by a commit.
    pub settle: bool,
}

impl Default for ReorderOptions {
    fn default() -> Self {
        Self {
            cooldown_ms: DEFAULT_COOLDOWN_MS,
            settle_duration_ms: DEFAULT_SETTLE_DURATION_MS,
            resnapshot_before_scan: true,
            settle: true,
        }
    }
}

impl ReorderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cooldown_ms(mut self, cooldown_ms: u64) -> Self {
        self.cooldown_ms = cooldown_ms;
        self
    }

    pub fn with_settle_duration_ms(mut self, duration_ms: u32) -> Self {
        self.settle_duration_ms = duration_ms;
        self
    }

    pub fn with_resnapshot_before_scan(mut self, resnapshot: bool) -> Self {
        self.resnapshot_before_scan = resnapshot;
        self
    }

    pub fn with_settle(mut self, settle: bool) -> Self {
        self.settle = settle;
        self
    }
}
