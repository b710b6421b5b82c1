#[cfg(test)]
#[path = "otp_test.rs"]
mod otp_test;

/// Ticks the resend action stays disabled after a challenge send. Advisory
/// only; the backend is the authority on actual throttling.
pub const RESEND_COOLDOWN_TICKS: u32 = 30;

/// Client-side view of a one-time-code exchange.
///
/// `challenge_id` is set when a send succeeds and survives failed verify
/// attempts, so the visitor can retry the same challenge with another code.
/// Requesting a new challenge replaces it; the backend invalidates the old
/// one implicitly.
#[derive(Clone, Debug, Default)]
pub struct OtpFlow {
    pub challenge_id: Option<String>,
    cooldown: ResendCooldown,
}

impl OtpFlow {
    /// A challenge send succeeded: remember its id and restart the cooldown.
    /// Returns the epoch the ticking task must pass back to [`Self::tick`].
    pub fn challenge_sent(&mut self, challenge_id: String) -> u64 {
        self.challenge_id = Some(challenge_id);
        self.cooldown.start()
    }

    /// Advance the countdown one tick. Returns `false` once this epoch is
    /// done (counter hit zero or a newer send restarted the countdown), which
    /// tells the owning task to stop.
    pub fn tick(&mut self, epoch: u64) -> bool {
        self.cooldown.tick(epoch)
    }

    pub fn resend_blocked(&self) -> bool {
        self.cooldown.remaining() > 0
    }

    /// Whether a send may fire right now: always before the first challenge,
    /// afterwards only once the cooldown has run out. Applies to every send
    /// path, not just the dedicated resend action.
    pub fn send_allowed(&self) -> bool {
        self.challenge_id.is_none() || !self.resend_blocked()
    }

    pub fn resend_remaining(&self) -> u32 {
        self.cooldown.remaining()
    }
}

/// Countdown for the resend button, independent of any backend confirmation.
///
/// Each `start` bumps an epoch so a stale ticking task from a previous send
/// stops instead of double-decrementing.
#[derive(Clone, Debug, Default)]
pub struct ResendCooldown {
    remaining: u32,
    epoch: u64,
}

impl ResendCooldown {
    pub fn start(&mut self) -> u64 {
        self.remaining = RESEND_COOLDOWN_TICKS;
        self.epoch += 1;
        self.epoch
    }

    pub fn tick(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch || self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining > 0
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}
