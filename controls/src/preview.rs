//! Debounced, cached hover-preview state machine.
//!
//! One `HoverCore` drives one preview controller. Each hover gets a new
//! [`CycleId`]; timer and fetch completions carry the id of the cycle that
//! started them, so completions belonging to a cycle that has already been torn
//! down are recognized and dropped.
//!
//! ```text
//! idle ──enter──▶ pending ──timer──▶ loading ──ok──▶ displayed
//!  ▲                 │                  │ └──err──▶ error
//!  └─────leave───────┴──────leave───────┴──────────────┘
//! ```
//!
//! A cache hit when the timer fires goes straight from `pending` to
//! `displayed` without a fetch.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use crate::cache::PreviewCache;
use crate::consts::DEFAULT_DEBOUNCE_MS;
use crate::error::ControlError;
use crate::position::Pointer;

/// Identifies one hover cycle.
pub type CycleId = u64;

/// Externally visible phase of the current hover cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverPhase {
    Idle,
    Pending,
    Loading,
    Displayed,
    Error,
}

/// Work the host must perform on behalf of the core.
#[derive(Debug, Clone, PartialEq)]
pub enum HoverEffect {
    /// Start the debounce timer; when it fires, call [`HoverCore::on_timer_fired`] with `cycle`.
    ArmTimer { cycle: CycleId, delay_ms: u32 },
    /// Cancel the pending debounce timer.
    CancelTimer,
    /// Create the tooltip element and append it to the document.
    CreateTooltip,
    /// Remove the tooltip element from the document.
    RemoveTooltip,
    /// Show the loading placeholder in the tooltip.
    ShowLoading,
    /// Render this payload in the tooltip.
    ShowPreview(String),
    /// Show the fixed error message in the tooltip.
    ShowError,
    /// Measure the tooltip and place it relative to this pointer.
    PositionTooltip(Pointer),
    /// Request the preview for `key`; report back with [`HoverCore::on_fetch_settled`].
    Fetch { cycle: CycleId, key: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum HoverState {
    Idle,
    Pending { cycle: CycleId, key: String },
    Loading { cycle: CycleId, key: String },
    Displayed { cycle: CycleId },
    Error { cycle: CycleId },
}

/// Hover preview state for one controller.
#[derive(Debug, Clone)]
pub struct HoverCore {
    debounce_ms: u32,
    state: HoverState,
    next_cycle: CycleId,
    pointer: Option<Pointer>,
    cache: PreviewCache,
}

impl Default for HoverCore {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

impl HoverCore {
    #[must_use]
    pub fn new(debounce_ms: u32) -> Self {
        Self { debounce_ms, state: HoverState::Idle, next_cycle: 1, pointer: None, cache: PreviewCache::new() }
    }

    #[must_use]
    pub fn debounce_ms(&self) -> u32 {
        self.debounce_ms
    }

    #[must_use]
    pub fn phase(&self) -> HoverPhase {
        match self.state {
            HoverState::Idle => HoverPhase::Idle,
            HoverState::Pending { .. } => HoverPhase::Pending,
            HoverState::Loading { .. } => HoverPhase::Loading,
            HoverState::Displayed { .. } => HoverPhase::Displayed,
            HoverState::Error { .. } => HoverPhase::Error,
        }
    }

    /// Id of the cycle in progress, if any.
    #[must_use]
    pub fn active_cycle(&self) -> Option<CycleId> {
        match self.state {
            HoverState::Idle => None,
            HoverState::Pending { cycle, .. }
            | HoverState::Loading { cycle, .. }
            | HoverState::Displayed { cycle }
            | HoverState::Error { cycle } => Some(cycle),
        }
    }

    /// Whether the current cycle owns a tooltip in the document.
    #[must_use]
    pub fn has_tooltip(&self) -> bool {
        matches!(self.phase(), HoverPhase::Loading | HoverPhase::Displayed | HoverPhase::Error)
    }

    #[must_use]
    pub fn cache(&self) -> &PreviewCache {
        &self.cache
    }

    /// Drop every cached payload. Tooltips already shown are left alone.
    pub fn clear_cache(&mut self) {
        log::debug!("preview: clearing {} cached payloads", self.cache.len());
        self.cache.clear();
    }

    /// Pointer entered a trigger whose key is `key`.
    ///
    /// Any cycle still in progress is torn down first, so at most one timer
    /// and one tooltip exist even when leave events are missing.
    pub fn on_enter(&mut self, key: Option<String>, pointer: Pointer) -> Vec<HoverEffect> {
        let mut effects = self.teardown();
        self.pointer = Some(pointer);
        let Some(key) = key.filter(|k| !k.is_empty()) else {
            log::debug!("preview: trigger has no key, ignoring hover");
            return effects;
        };
        let cycle = self.next_cycle;
        self.next_cycle += 1;
        log::debug!("preview: cycle {cycle} pending for '{key}'");
        self.state = HoverState::Pending { cycle, key };
        effects.push(HoverEffect::ArmTimer { cycle, delay_ms: self.debounce_ms });
        effects
    }

    /// Debounce timer for `cycle` fired.
    pub fn on_timer_fired(&mut self, cycle: CycleId) -> Vec<HoverEffect> {
        let key = match &self.state {
            HoverState::Pending { cycle: current, key } if *current == cycle => key.clone(),
            _ => return Vec::new(),
        };

        let mut effects = vec![HoverEffect::CreateTooltip];
        if let Some(payload) = self.cache.get(&key) {
            log::debug!("preview: cycle {cycle} served '{key}' from cache");
            effects.push(HoverEffect::ShowPreview(payload.to_owned()));
            self.state = HoverState::Displayed { cycle };
            effects.extend(self.reposition());
        } else {
            effects.push(HoverEffect::ShowLoading);
            effects.extend(self.reposition());
            effects.push(HoverEffect::Fetch { cycle, key: key.clone() });
            self.state = HoverState::Loading { cycle, key };
        }
        effects
    }

    /// The fetch started by `cycle` for `key` settled.
    ///
    /// Successful payloads are cached even when the cycle is already gone;
    /// failures are never cached. Only the live cycle renders anything.
    pub fn on_fetch_settled(&mut self, cycle: CycleId, key: &str, outcome: Result<String, ControlError>) -> Vec<HoverEffect> {
        let live = matches!(&self.state, HoverState::Loading { cycle: current, .. } if *current == cycle);
        match outcome {
            Ok(payload) => {
                self.cache.insert(key, payload.clone());
                if !live {
                    log::debug!("preview: cycle {cycle} settled after teardown, cached '{key}' only");
                    return Vec::new();
                }
                self.state = HoverState::Displayed { cycle };
                let mut effects = vec![HoverEffect::ShowPreview(payload)];
                effects.extend(self.reposition());
                effects
            }
            Err(err) => {
                log::warn!("preview: failed to load '{key}': {err}");
                if !live {
                    return Vec::new();
                }
                self.state = HoverState::Error { cycle };
                let mut effects = vec![HoverEffect::ShowError];
                effects.extend(self.reposition());
                effects
            }
        }
    }

    /// Pointer moved over the trigger.
    pub fn on_move(&mut self, pointer: Pointer) -> Vec<HoverEffect> {
        self.pointer = Some(pointer);
        if self.has_tooltip() {
            vec![HoverEffect::PositionTooltip(pointer)]
        } else {
            Vec::new()
        }
    }

    /// Pointer left the trigger.
    pub fn on_leave(&mut self) -> Vec<HoverEffect> {
        let effects = self.teardown();
        self.pointer = None;
        effects
    }

    fn teardown(&mut self) -> Vec<HoverEffect> {
        let previous = std::mem::replace(&mut self.state, HoverState::Idle);
        match previous {
            HoverState::Idle => Vec::new(),
            HoverState::Pending { cycle, .. } => {
                log::debug!("preview: cycle {cycle} cancelled before debounce elapsed");
                vec![HoverEffect::CancelTimer]
            }
            HoverState::Loading { cycle, .. } | HoverState::Displayed { cycle } | HoverState::Error { cycle } => {
                log::debug!("preview: cycle {cycle} torn down");
                vec![HoverEffect::RemoveTooltip]
            }
        }
    }

    fn reposition(&self) -> Option<HoverEffect> {
        self.pointer.map(HoverEffect::PositionTooltip)
    }
}

/// Default trigger key: the key attribute when present and non-blank,
/// otherwise the element's trimmed text.
#[must_use]
pub fn resolve_key(attribute: Option<&str>, text: Option<&str>) -> Option<String> {
    [attribute, text]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|candidate| !candidate.is_empty())
        .map(str::to_owned)
}
