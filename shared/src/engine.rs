use log::{debug, info, warn};
use rand::Rng;
use validator::Validate;

use crate::config::WheelConfig;
use crate::constants::{MAX_SEGMENTS, MIN_SEGMENTS};
use crate::error::EngineError;
use crate::model::{Segment, SegmentEdit, Wheel, WheelId};
use crate::persistence::{load_snapshot, save_snapshot, KeyValueStore, Snapshot};
use crate::spin::{SpinAnimation, SpinFrame, SpinOutcome};

/// What the UI has to redraw after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// Only the canvas changed.
    Repaint,
    /// Tabs, segment editor and history have to be rebuilt as well.
    Full,
}

/// Owns every wheel, the active selection and the spin in flight.
///
/// All mutations write a snapshot to the store before returning. Writes are
/// best-effort: a failed write is logged and the in-memory change is kept.
#[derive(Debug)]
pub struct WheelEngine<S: KeyValueStore> {
    wheels: Vec<Wheel>,
    active: WheelId,
    spin: Option<SpinAnimation>,
    config: WheelConfig,
    store: S,
}

impl<S: KeyValueStore> WheelEngine<S> {
    /// Restores the stored snapshot, or starts over with a single wheel built
    /// from the configured template and saves it right away.
    pub fn bootstrap(store: S, config: WheelConfig, now_ms: u64) -> Self {
        if let Some(snapshot) = load_snapshot(&store) {
            info!("Restored {} wheel(s) from storage", snapshot.wheels.len());
            return Self::restore(store, config, snapshot);
        }

        let id = WheelId::generate(now_ms, std::iter::empty());
        let wheel = Wheel::new(id.clone(), config.template.clone());
        let mut engine = Self {
            wheels: vec![wheel],
            active: id,
            spin: None,
            config,
            store,
        };
        info!("No stored wheels, created {}", engine.active);
        engine.persist();
        engine
    }

    fn restore(store: S, config: WheelConfig, snapshot: Snapshot) -> Self {
        let Snapshot { mut wheels, active_wheel_id } = snapshot;
        for wheel in &mut wheels {
            wheel.normalize_rotation();
            wheel.history.truncate(config.history_limit);
        }
        let active = if wheels.iter().any(|w| w.id == active_wheel_id) {
            active_wheel_id
        } else {
            warn!("Stored active wheel {} is missing, selecting the first one", active_wheel_id);
            wheels[0].id.clone()
        };
        Self {
            wheels,
            active,
            spin: None,
            config,
            store,
        }
    }

    pub fn wheels(&self) -> &[Wheel] {
        &self.wheels
    }

    pub fn active_wheel_id(&self) -> &WheelId {
        &self.active
    }

    pub fn active_wheel(&self) -> &Wheel {
        &self.wheels[self.active_index()]
    }

    pub fn wheel(&self, id: &WheelId) -> Option<&Wheel> {
        self.wheels.iter().find(|w| &w.id == id)
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.is_some()
    }

    pub fn spinning_wheel_id(&self) -> Option<&WheelId> {
        self.spin.as_ref().map(|anim| &anim.wheel_id)
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            wheels: self.wheels.clone(),
            active_wheel_id: self.active.clone(),
        }
    }

    fn active_index(&self) -> usize {
        self.wheels
            .iter()
            .position(|w| w.id == self.active)
            .unwrap_or(0)
    }

    fn active_wheel_mut(&mut self) -> &mut Wheel {
        let index = self.active_index();
        &mut self.wheels[index]
    }

    fn active_is_spinning(&self) -> bool {
        self.spinning_wheel_id() == Some(&self.active)
    }

    fn persist(&mut self) {
        let snapshot = self.snapshot();
        if let Err(e) = save_snapshot(&mut self.store, &snapshot) {
            warn!("Failed to save wheel state: {}", e);
        }
    }

    /// Unknown ids are ignored.
    pub fn select_wheel(&mut self, id: &WheelId) -> Option<Refresh> {
        if !self.wheels.iter().any(|w| &w.id == id) {
            debug!("Ignoring selection of unknown wheel {}", id);
            return None;
        }
        self.active = id.clone();
        self.persist();
        Some(Refresh::Full)
    }

    pub fn create_wheel(&mut self, now_ms: u64) -> Refresh {
        let id = WheelId::generate(now_ms, self.wheels.iter().map(|w| &w.id));
        self.wheels.push(Wheel::new(id.clone(), self.config.template.clone()));
        info!("Created wheel {}", id);
        self.active = id;
        self.persist();
        Refresh::Full
    }

    /// Removing the active wheel hands the selection to the first remaining
    /// wheel. Removing the wheel that is spinning drops the spin.
    pub fn delete_wheel(&mut self, id: &WheelId) -> Result<Refresh, EngineError> {
        if self.wheels.len() <= 1 {
            return Err(EngineError::SingleWheelGuard);
        }
        let index = self
            .wheels
            .iter()
            .position(|w| &w.id == id)
            .ok_or_else(|| EngineError::UnknownWheel(id.clone()))?;

        self.wheels.remove(index);
        if self.spinning_wheel_id() == Some(id) {
            info!("Cancelled spin of deleted wheel {}", id);
            self.spin = None;
        }
        if &self.active == id {
            self.active = self.wheels[0].id.clone();
        }
        info!("Deleted wheel {}", id);
        self.persist();
        Ok(Refresh::Full)
    }

    pub fn delete_active_wheel(&mut self) -> Result<Refresh, EngineError> {
        let id = self.active.clone();
        self.delete_wheel(&id)
    }

    /// Resizes the active wheel to `count` clamped into 2..=50, keeping the
    /// segments that still fit.
    pub fn set_segment_count(&mut self, count: i64) -> Result<Refresh, EngineError> {
        if self.active_is_spinning() {
            return Err(EngineError::SpinInProgress);
        }
        let count = count.clamp(MIN_SEGMENTS as i64, MAX_SEGMENTS as i64) as usize;
        let wheel = self.active_wheel_mut();
        let segments: Vec<Segment> = (0..count)
            .map(|i| {
                wheel
                    .segments
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| Segment::placeholder(i))
            })
            .collect();
        wheel.segments = segments;
        self.persist();
        Ok(Refresh::Full)
    }

    pub fn add_segment(&mut self) -> Result<Refresh, EngineError> {
        if self.active_is_spinning() {
            return Err(EngineError::SpinInProgress);
        }
        let wheel = self.active_wheel_mut();
        if wheel.segments.len() >= MAX_SEGMENTS {
            return Err(EngineError::SegmentCeilingGuard);
        }
        let index = wheel.segments.len();
        wheel.segments.push(Segment::placeholder(index));
        self.persist();
        Ok(Refresh::Full)
    }

    /// Edits one field of one segment. Only the canvas needs repainting.
    pub fn update_segment_field(&mut self, index: usize, edit: SegmentEdit) -> Result<Refresh, EngineError> {
        let wheel = self.active_wheel_mut();
        let len = wheel.segments.len();
        let segment = wheel
            .segments
            .get_mut(index)
            .ok_or(EngineError::SegmentOutOfRange { index, len })?;

        let mut edited = segment.clone();
        edit.apply(&mut edited);
        edited.validate()?;
        *segment = edited;

        self.persist();
        Ok(Refresh::Repaint)
    }

    pub fn remove_segment(&mut self, index: usize) -> Result<Refresh, EngineError> {
        if self.active_is_spinning() {
            return Err(EngineError::SpinInProgress);
        }
        let wheel = self.active_wheel_mut();
        let len = wheel.segments.len();
        if len <= MIN_SEGMENTS {
            return Err(EngineError::SegmentFloorGuard);
        }
        if index >= len {
            return Err(EngineError::SegmentOutOfRange { index, len });
        }
        wheel.segments.remove(index);
        self.persist();
        Ok(Refresh::Full)
    }

    /// Starts spinning the active wheel and returns the drawn winner index.
    pub fn spin<R: Rng + ?Sized>(&mut self, rng: &mut R, now: f64) -> Result<usize, EngineError> {
        if self.is_spinning() {
            return Err(EngineError::ReentrantSpinGuard);
        }
        let wheel = self.active_wheel();
        let animation = SpinAnimation::draw(rng, wheel.id.clone(), wheel.segment_count(), now);
        Ok(self.begin_spin(animation))
    }

    fn begin_spin(&mut self, animation: SpinAnimation) -> usize {
        let index = animation.winning_index;
        debug!("Spinning {} towards segment {}", animation.wheel_id, index);
        self.spin = Some(animation);
        index
    }

    /// Moves the spin in flight to time `now`. On the frame that reaches the
    /// end the drawn segment is recorded as the winner.
    pub fn advance(&mut self, now: f64) -> SpinFrame {
        let Some(animation) = self.spin.as_ref() else {
            return SpinFrame::Idle;
        };
        let progress = animation.progress(now);
        let rotation = animation.rotation_at(progress);
        let winning_index = animation.winning_index;
        let wheel_id = animation.wheel_id.clone();

        let history_limit = self.config.history_limit;
        let Some(wheel) = self.wheels.iter_mut().find(|w| w.id == wheel_id) else {
            self.spin = None;
            return SpinFrame::Idle;
        };
        wheel.rotation = rotation;
        if progress < 1.0 {
            return SpinFrame::Turning { rotation };
        }

        wheel.normalize_rotation();
        let outcome = wheel.segments.get(winning_index).cloned().map(|winner| {
            let outcome = SpinOutcome::new(wheel_id.clone(), winning_index, &winner);
            wheel.record_winner(winner, history_limit);
            outcome
        });
        self.spin = None;
        self.persist();

        match outcome {
            Some(outcome) => {
                info!("Wheel {} landed on {:?}", wheel_id, outcome.text);
                SpinFrame::Settled(outcome)
            }
            None => {
                warn!("Winning segment {} vanished from wheel {}", winning_index, wheel_id);
                SpinFrame::Idle
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{fallback_template, WheelConfig};
    use crate::constants::STATE_STORAGE_KEY;
    use crate::persistence::MemoryStore;
    use crate::spin::segment_span;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f64::consts::{FRAC_PI_2, TAU};

    fn engine() -> WheelEngine<MemoryStore> {
        WheelEngine::bootstrap(MemoryStore::new(), WheelConfig::default(), 1_000)
    }

    fn abcd_engine() -> WheelEngine<MemoryStore> {
        let config = WheelConfig {
            template: ["A", "B", "C", "D"]
                .iter()
                .enumerate()
                .map(|(i, t)| Segment::new(*t, "", crate::constants::SEGMENT_PALETTE[i]))
                .collect(),
            ..WheelConfig::default()
        };
        WheelEngine::bootstrap(MemoryStore::new(), config, 1_000)
    }

    fn run_spin(engine: &mut WheelEngine<MemoryStore>, index: usize, start: f64) -> SpinFrame {
        let wheel = engine.active_wheel();
        let animation = SpinAnimation::new(wheel.id.clone(), index, wheel.segment_count(), start);
        engine.begin_spin(animation);
        assert!(matches!(engine.advance(start + 2_500.0), SpinFrame::Turning { .. }));
        engine.advance(start + 5_000.0)
    }

    #[test]
    fn test_fresh_bootstrap_uses_fallback_and_persists() {
        let engine = engine();
        assert_eq!(engine.wheels().len(), 1);
        assert_eq!(engine.active_wheel().segments, fallback_template());
        assert!(engine.active_wheel().segments.len() >= 4);
        assert_eq!(engine.active_wheel_id().as_str(), "wheel-1000");
        assert!(engine.store().get_item(STATE_STORAGE_KEY).is_some());
        assert!(!engine.is_spinning());
    }

    #[test]
    fn test_bootstrap_restores_snapshot() {
        let mut first = engine();
        first.create_wheel(2_000);
        first.set_segment_count(7).unwrap();
        let store = first.store().clone();

        let restored = WheelEngine::bootstrap(store, WheelConfig::default(), 9_000);
        assert_eq!(restored.wheels().len(), 2);
        assert_eq!(restored.active_wheel_id().as_str(), "wheel-2000");
        assert_eq!(restored.active_wheel().segments.len(), 7);
    }

    #[test]
    fn test_bootstrap_repairs_missing_active_id() {
        let mut store = MemoryStore::new();
        let snapshot = Snapshot {
            wheels: vec![Wheel::new(WheelId::from("wheel-5"), fallback_template())],
            active_wheel_id: WheelId::from("wheel-404"),
        };
        crate::persistence::save_snapshot(&mut store, &snapshot).unwrap();
        let engine = WheelEngine::bootstrap(store, WheelConfig::default(), 0);
        assert_eq!(engine.active_wheel_id().as_str(), "wheel-5");
    }

    #[test]
    fn test_corrupt_storage_bootstraps_fresh() {
        let mut store = MemoryStore::new();
        store.set_item(STATE_STORAGE_KEY, "not json").unwrap();
        let engine = WheelEngine::bootstrap(store, WheelConfig::default(), 42);
        assert_eq!(engine.wheels().len(), 1);
        assert_eq!(engine.active_wheel_id().as_str(), "wheel-42");
    }

    #[test]
    fn test_repeated_wheel_ids_bootstrap_fresh() {
        let mut store = MemoryStore::new();
        let snapshot = Snapshot {
            wheels: vec![
                Wheel::new(WheelId::from("wheel-1"), fallback_template()),
                Wheel::new(WheelId::from("wheel-1"), vec![Segment::placeholder(0), Segment::placeholder(1)]),
            ],
            active_wheel_id: WheelId::from("wheel-1"),
        };
        crate::persistence::save_snapshot(&mut store, &snapshot).unwrap();
        let engine = WheelEngine::bootstrap(store, WheelConfig::default(), 77);
        assert_eq!(engine.wheels().len(), 1);
        assert_eq!(engine.active_wheel_id().as_str(), "wheel-77");
    }

    #[test]
    fn test_select_wheel() {
        let mut engine = engine();
        let first = engine.active_wheel_id().clone();
        engine.create_wheel(2_000);
        assert_eq!(engine.select_wheel(&first), Some(Refresh::Full));
        assert_eq!(engine.active_wheel_id(), &first);
        assert_eq!(engine.select_wheel(&WheelId::from("nope")), None);
        assert_eq!(engine.active_wheel_id(), &first);
    }

    #[test]
    fn test_create_wheel_copies_template_with_unique_ids() {
        let mut engine = engine();
        engine.update_segment_field(0, SegmentEdit::Text("edited".to_string())).unwrap();
        engine.create_wheel(1_000);
        assert_eq!(engine.wheels().len(), 2);
        assert_ne!(engine.wheels()[0].id, engine.wheels()[1].id);
        assert_eq!(engine.active_wheel().segments, fallback_template());
        assert_eq!(engine.wheels()[0].segments[0].text, "edited");
    }

    #[test]
    fn test_deleting_only_wheel_is_refused() {
        let mut engine = engine();
        let before = engine.wheels().to_vec();
        assert!(matches!(engine.delete_active_wheel(), Err(EngineError::SingleWheelGuard)));
        assert_eq!(engine.wheels(), &before[..]);
    }

    #[test]
    fn test_deleting_active_wheel_selects_first_remaining() {
        let mut engine = engine();
        let first = engine.active_wheel_id().clone();
        engine.create_wheel(2_000);
        engine.create_wheel(3_000);
        assert_eq!(engine.delete_active_wheel().unwrap(), Refresh::Full);
        assert_eq!(engine.wheels().len(), 2);
        assert_eq!(engine.active_wheel_id(), &first);

        let second = engine.wheels()[1].id.clone();
        engine.delete_wheel(&second).unwrap();
        assert_eq!(engine.active_wheel_id(), &first);
        assert!(matches!(
            engine.delete_wheel(&WheelId::from("wheel-1")),
            Err(EngineError::SingleWheelGuard)
        ));
    }

    #[test]
    fn test_set_segment_count_clamps_and_keeps_existing() {
        let mut engine = engine();
        for n in 2..=50 {
            engine.set_segment_count(n).unwrap();
            assert_eq!(engine.active_wheel().segments.len(), n as usize);
        }
        engine.set_segment_count(1).unwrap();
        assert_eq!(engine.active_wheel().segments.len(), 2);
        engine.set_segment_count(-3).unwrap();
        assert_eq!(engine.active_wheel().segments.len(), 2);
        engine.set_segment_count(500).unwrap();
        assert_eq!(engine.active_wheel().segments.len(), 50);

        let segments = &engine.active_wheel().segments;
        assert_eq!(segments[0], fallback_template()[0]);
        assert_eq!(segments[1], fallback_template()[1]);
        assert_eq!(segments[2].text, "Option 3");
        assert_eq!(segments[2].emoji, "");
    }

    #[test]
    fn test_update_segment_field() {
        let mut engine = engine();
        let refresh = engine.update_segment_field(1, SegmentEdit::Color("#123456".to_string())).unwrap();
        assert_eq!(refresh, Refresh::Repaint);
        engine.update_segment_field(1, SegmentEdit::EmojiSize(Some(24))).unwrap();
        let seg = &engine.active_wheel().segments[1];
        assert_eq!(seg.color, "#123456");
        assert_eq!(seg.emoji_size, Some(24));
        assert_eq!(seg.text, "Option 2");

        assert!(matches!(
            engine.update_segment_field(9, SegmentEdit::Text("x".to_string())),
            Err(EngineError::SegmentOutOfRange { index: 9, len: 4 })
        ));
        assert!(matches!(
            engine.update_segment_field(1, SegmentEdit::EmojiSize(Some(99))),
            Err(EngineError::InvalidSegment(_))
        ));
        assert_eq!(engine.active_wheel().segments[1].emoji_size, Some(24));

        engine.update_segment_field(1, SegmentEdit::Color(" #abc".to_string())).unwrap();
        assert_eq!(engine.active_wheel().segments[1].color, "#aabbcc");
        assert!(matches!(
            engine.update_segment_field(1, SegmentEdit::Color("white".to_string())),
            Err(EngineError::InvalidSegment(_))
        ));
    }

    #[test]
    fn test_rejected_emoji_explains_itself() {
        let mut engine = engine();
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
        let err = engine
            .update_segment_field(0, SegmentEdit::Emoji(family.to_string()))
            .unwrap_err();
        assert!(err.is_user_visible());
        assert!(err.to_string().starts_with("Emoji can be at most 3 characters"));
        assert_eq!(engine.active_wheel().segments[0].emoji, "🎁");

        let err = engine
            .update_segment_field(0, SegmentEdit::EmojiSize(Some(5)))
            .unwrap_err();
        assert_eq!(err.to_string(), "Emoji size must be between 10 and 60");
    }

    #[test]
    fn test_remove_segment_respects_floor() {
        let mut engine = engine();
        engine.remove_segment(0).unwrap();
        assert_eq!(engine.active_wheel().segments[0].text, "Option 2");
        engine.remove_segment(2).unwrap();
        assert_eq!(engine.active_wheel().segments.len(), 2);

        let before = engine.active_wheel().segments.clone();
        assert!(matches!(engine.remove_segment(0), Err(EngineError::SegmentFloorGuard)));
        assert_eq!(engine.active_wheel().segments, before);
    }

    #[test]
    fn test_add_segment_respects_ceiling() {
        let mut engine = engine();
        engine.add_segment().unwrap();
        assert_eq!(engine.active_wheel().segments[4].text, "Option 5");
        engine.set_segment_count(50).unwrap();
        assert!(matches!(engine.add_segment(), Err(EngineError::SegmentCeilingGuard)));
        assert_eq!(engine.active_wheel().segments.len(), 50);
    }

    #[test]
    fn test_forced_winner_scenario() {
        let mut engine = abcd_engine();
        let frame = run_spin(&mut engine, 2, 100.0);
        match frame {
            SpinFrame::Settled(outcome) => {
                assert_eq!(outcome.text, "C");
                assert_eq!(outcome.winning_index, 2);
            }
            other => panic!("expected a settled spin, got {:?}", other),
        }
        let wheel = engine.active_wheel();
        assert_eq!(wheel.history[0].text, "C");
        assert!(!engine.is_spinning());
        assert!((0.0..TAU).contains(&wheel.rotation));

        let (start, end) = segment_span(2, 4, wheel.rotation);
        let center = ((start + end) / 2.0 - (-FRAC_PI_2)).rem_euclid(TAU);
        assert!(center < 1e-9 || TAU - center < 1e-9);
    }

    #[test]
    fn test_history_is_newest_first() {
        let mut engine = abcd_engine();
        let mut start = 0.0;
        for index in [0, 1, 2] {
            run_spin(&mut engine, index, start);
            start += 10_000.0;
        }
        let texts: Vec<_> = engine.active_wheel().history.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, ["C", "B", "A"]);

        for _ in 0..20 {
            run_spin(&mut engine, 3, start);
            start += 10_000.0;
        }
        assert_eq!(engine.active_wheel().history.len(), engine.config().history_limit);
    }

    #[test]
    fn test_reentrant_spin_is_refused() {
        let mut engine = engine();
        let mut rng = StdRng::seed_from_u64(3);
        engine.spin(&mut rng, 0.0).unwrap();
        assert!(matches!(engine.spin(&mut rng, 10.0), Err(EngineError::ReentrantSpinGuard)));
        assert!(matches!(engine.spin(&mut rng, 20.0), Err(EngineError::ReentrantSpinGuard)));

        assert!(matches!(engine.advance(5_000.0), SpinFrame::Settled(_)));
        assert_eq!(engine.active_wheel().history.len(), 1);
        assert_eq!(engine.advance(6_000.0), SpinFrame::Idle);
        assert_eq!(engine.active_wheel().history.len(), 1);
    }

    #[test]
    fn test_structural_edits_wait_for_spin() {
        let mut engine = engine();
        let mut rng = StdRng::seed_from_u64(11);
        engine.spin(&mut rng, 0.0).unwrap();
        assert!(matches!(engine.set_segment_count(10), Err(EngineError::SpinInProgress)));
        assert!(matches!(engine.remove_segment(0), Err(EngineError::SpinInProgress)));
        assert!(matches!(engine.add_segment(), Err(EngineError::SpinInProgress)));
        assert!(engine
            .update_segment_field(0, SegmentEdit::Text("still fine".to_string()))
            .is_ok());
        assert_eq!(engine.active_wheel().segments.len(), 4);
    }

    #[test]
    fn test_spin_settles_on_its_own_wheel_after_tab_switch() {
        let mut engine = engine();
        let spinning = engine.active_wheel_id().clone();
        let mut rng = StdRng::seed_from_u64(5);
        engine.spin(&mut rng, 0.0).unwrap();
        engine.create_wheel(2_000);

        let frame = engine.advance(5_000.0);
        assert!(matches!(frame, SpinFrame::Settled(ref o) if o.wheel_id == spinning));
        assert_eq!(engine.wheel(&spinning).map(|w| w.history.len()), Some(1));
        assert!(engine.active_wheel().history.is_empty());
    }

    #[test]
    fn test_deleting_spinning_wheel_cancels_spin() {
        let mut engine = engine();
        engine.create_wheel(2_000);
        let mut rng = StdRng::seed_from_u64(9);
        engine.spin(&mut rng, 0.0).unwrap();
        engine.delete_active_wheel().unwrap();
        assert!(!engine.is_spinning());
        assert_eq!(engine.advance(5_000.0), SpinFrame::Idle);
    }

    #[test]
    fn test_segment_bounds_hold_after_every_operation() {
        let mut engine = engine();
        let mut rng = StdRng::seed_from_u64(1);
        let mut now = 0.0;
        for step in 0..200u64 {
            match rng.gen_range(0..5) {
                0 => {
                    let _ = engine.set_segment_count(rng.gen_range(-5..80));
                }
                1 => {
                    let len = engine.active_wheel().segments.len();
                    let _ = engine.remove_segment(rng.gen_range(0..len));
                }
                2 => {
                    let _ = engine.add_segment();
                }
                3 => {
                    engine.create_wheel(step);
                }
                _ => {
                    let _ = engine.delete_active_wheel();
                }
            }
            if engine.spin(&mut rng, now).is_ok() {
                engine.advance(now + 5_000.0);
            }
            now += 10_000.0;
            assert!(!engine.wheels().is_empty());
            assert!(engine.wheel(engine.active_wheel_id()).is_some());
            for wheel in engine.wheels() {
                assert!((MIN_SEGMENTS..=MAX_SEGMENTS).contains(&wheel.segments.len()));
            }
        }
    }
}
