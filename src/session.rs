//! Session state: the waveform list and display toggles.
//!
//! This is the boundary where parameter ranges are enforced. Specs clamp
//! their numeric fields at construction and through the nudge helpers, so
//! the synthesis functions in `dsp` never have to re-validate. Everything
//! else here is bookkeeping: which waveforms exist, which one is selected,
//! which envelope curves are requested.

use crate::dsp::envelope::{self, EnvelopeKind, EnvelopeResult};
use crate::dsp::waveform::{synthesize, WaveKind};
use crate::dsp::SampledSeries;

pub const FREQ_MIN: f64 = 0.1;
pub const FREQ_MAX: f64 = 100.0;
pub const AMP_MIN: f64 = 0.0;
pub const AMP_MAX: f64 = 10.0;
pub const OFFSET_MIN: f64 = 0.0;
pub const OFFSET_MAX: f64 = 10.0;
pub const DUTY_MIN: f64 = 1.0;
pub const DUTY_MAX: f64 = 100.0;
pub const DURATION_MIN: f64 = 0.5;
pub const DURATION_MAX: f64 = 120.0;

pub const MIN_WAVEFORMS: usize = 1;
pub const MAX_WAVEFORMS: usize = 5;

/// Fixed sampling rate for the whole session, in samples per second.
pub const SAMPLE_RATE: u32 = 1_000;

/// Trace colors assigned to waveforms in creation order.
pub const PALETTE: [(u8, u8, u8); MAX_WAVEFORMS] = [
    (255, 255, 0),  // yellow
    (0, 255, 255),  // cyan
    (255, 0, 255),  // magenta
    (0, 255, 0),    // green
    (255, 165, 0),  // orange
];

/// One waveform's parameters, as edited by the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveformSpec {
    /// Position in the session list; reassigned after removals.
    pub id: usize,
    pub kind: WaveKind,
    pub frequency: f64,
    pub amplitude: f64,
    pub offset: f64,
    /// Percentage of each period at the high level. Square only; the other
    /// kinds carry it along untouched.
    pub duty_cycle: f64,
    /// Optional user label; `display_name` falls back to "Waveform {id+1}".
    pub label: Option<String>,
    pub color: (u8, u8, u8),
    pub enabled: bool,
}

impl WaveformSpec {
    /// Build a spec with every numeric parameter clamped into range.
    pub fn new(
        id: usize,
        kind: WaveKind,
        frequency: f64,
        amplitude: f64,
        offset: f64,
        duty_cycle: f64,
    ) -> Self {
        Self {
            id,
            kind,
            frequency: frequency.clamp(FREQ_MIN, FREQ_MAX),
            amplitude: amplitude.clamp(AMP_MIN, AMP_MAX),
            offset: offset.clamp(OFFSET_MIN, OFFSET_MAX),
            duty_cycle: duty_cycle.clamp(DUTY_MIN, DUTY_MAX),
            label: None,
            color: PALETTE[id % PALETTE.len()],
            enabled: true,
        }
    }

    pub fn display_name(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("Waveform {}", self.id + 1),
        }
    }

    /// Clamped parameter adjustments used by the UI arrow keys.
    pub fn nudge_frequency(&mut self, delta: f64) {
        self.frequency = (self.frequency + delta).clamp(FREQ_MIN, FREQ_MAX);
    }

    pub fn nudge_amplitude(&mut self, delta: f64) {
        self.amplitude = (self.amplitude + delta).clamp(AMP_MIN, AMP_MAX);
    }

    pub fn nudge_offset(&mut self, delta: f64) {
        self.offset = (self.offset + delta).clamp(OFFSET_MIN, OFFSET_MAX);
    }

    pub fn nudge_duty_cycle(&mut self, delta: f64) {
        self.duty_cycle = (self.duty_cycle + delta).clamp(DUTY_MIN, DUTY_MAX);
    }

    /// Synthesize this waveform over the session time base.
    pub fn render(&self, duration: f64, sample_rate: u32) -> SampledSeries {
        synthesize(
            self.kind,
            self.frequency,
            self.amplitude,
            self.offset,
            self.duty_cycle,
            duration,
            sample_rate,
        )
    }
}

/// One trace ready for drawing or export: the spec snapshot plus its
/// samples.
#[derive(Debug, Clone)]
pub struct Trace {
    pub spec: WaveformSpec,
    pub series: SampledSeries,
}

/// Everything one recomputation produces.
#[derive(Debug, Clone, Default)]
pub struct SessionFrame {
    pub traces: Vec<Trace>,
    pub envelopes: Vec<EnvelopeResult>,
}

/// The full editing session: 1 to 5 waveforms plus display state.
#[derive(Debug, Clone)]
pub struct Session {
    pub waveforms: Vec<WaveformSpec>,
    pub active_index: usize,
    duration: f64,
    pub sample_rate: u32,
    pub show_max: bool,
    pub show_min: bool,
    pub show_rms: bool,
    pub auto_scale: bool,
    pub show_grid: bool,
}

const DEFAULT_FREQUENCY: f64 = 5.0;
const DEFAULT_AMPLITUDE: f64 = 5.0;
const DEFAULT_OFFSET: f64 = 5.0;
const DEFAULT_DUTY: f64 = 50.0;

impl Session {
    /// A session with one default sine waveform.
    pub fn new() -> Self {
        Self {
            waveforms: vec![WaveformSpec::new(
                0,
                WaveKind::Sine,
                DEFAULT_FREQUENCY,
                DEFAULT_AMPLITUDE,
                DEFAULT_OFFSET,
                DEFAULT_DUTY,
            )],
            active_index: 0,
            duration: 1.0,
            sample_rate: SAMPLE_RATE,
            show_max: false,
            show_min: false,
            show_rms: false,
            auto_scale: true,
            show_grid: true,
        }
    }

    /// Append a new default sine waveform and select it.
    ///
    /// Returns `None` once the session already holds `MAX_WAVEFORMS`.
    pub fn add_waveform(&mut self) -> Option<&WaveformSpec> {
        if self.waveforms.len() >= MAX_WAVEFORMS {
            return None;
        }
        let id = self.waveforms.len();
        self.waveforms.push(WaveformSpec::new(
            id,
            WaveKind::Sine,
            DEFAULT_FREQUENCY,
            DEFAULT_AMPLITUDE,
            DEFAULT_OFFSET,
            DEFAULT_DUTY,
        ));
        self.active_index = id;
        self.waveforms.last()
    }

    /// Remove a waveform by id, keeping at least `MIN_WAVEFORMS`.
    ///
    /// Remaining ids are reassigned sequentially; colors stay with their
    /// waveforms so a customized trace keeps its look after a neighbor is
    /// removed.
    pub fn remove_waveform(&mut self, id: usize) -> bool {
        if self.waveforms.len() <= MIN_WAVEFORMS {
            return false;
        }
        let before = self.waveforms.len();
        self.waveforms.retain(|w| w.id != id);
        if self.waveforms.len() == before {
            return false;
        }
        for (index, waveform) in self.waveforms.iter_mut().enumerate() {
            waveform.id = index;
        }
        if self.active_index >= self.waveforms.len() {
            self.active_index = self.waveforms.len() - 1;
        }
        true
    }

    pub fn waveform(&self, id: usize) -> Option<&WaveformSpec> {
        self.waveforms.iter().find(|w| w.id == id)
    }

    pub fn active(&self) -> Option<&WaveformSpec> {
        self.waveforms.get(self.active_index)
    }

    pub fn active_mut(&mut self) -> Option<&mut WaveformSpec> {
        self.waveforms.get_mut(self.active_index)
    }

    /// Select the next waveform in the list, wrapping around.
    pub fn next_active(&mut self) {
        if !self.waveforms.is_empty() {
            self.active_index = (self.active_index + 1) % self.waveforms.len();
        }
    }

    pub fn enabled_waveforms(&self) -> impl Iterator<Item = &WaveformSpec> {
        self.waveforms.iter().filter(|w| w.enabled)
    }

    pub fn enabled_count(&self) -> usize {
        self.enabled_waveforms().count()
    }

    /// Envelope curves only make sense over an overlaid set.
    pub fn can_show_envelopes(&self) -> bool {
        self.enabled_count() > 1
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn set_duration(&mut self, seconds: f64) {
        self.duration = seconds.clamp(DURATION_MIN, DURATION_MAX);
    }

    /// The envelope kinds whose toggles are on, in display order.
    pub fn requested_envelopes(&self) -> Vec<EnvelopeKind> {
        let mut kinds = Vec::new();
        if self.show_max {
            kinds.push(EnvelopeKind::Max);
        }
        if self.show_min {
            kinds.push(EnvelopeKind::Min);
        }
        if self.show_rms {
            kinds.push(EnvelopeKind::Rms);
        }
        kinds
    }

    /// Recompute every enabled trace and any requested envelope curves.
    ///
    /// All output shares one time base. Envelopes are produced only when
    /// more than one waveform is enabled; below that the toggles keep their
    /// values but the curves are suppressed.
    pub fn compute(&self) -> SessionFrame {
        let enabled: Vec<&WaveformSpec> = self.enabled_waveforms().collect();
        let series: Vec<SampledSeries> = enabled
            .iter()
            .map(|w| w.render(self.duration, self.sample_rate))
            .collect();

        let mut envelopes = Vec::new();
        if series.len() > 1 {
            for kind in self.requested_envelopes() {
                envelopes.push(envelope::envelope(kind, &series));
            }
        }

        let traces = enabled
            .into_iter()
            .cloned()
            .zip(series)
            .map(|(spec, series)| Trace { spec, series })
            .collect();

        SessionFrame { traces, envelopes }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_clamps_out_of_range_parameters() {
        let spec = WaveformSpec::new(0, WaveKind::Sine, -10.0, 999.0, -5.0, 200.0);
        assert_eq!(spec.frequency, FREQ_MIN);
        assert_eq!(spec.amplitude, AMP_MAX);
        assert_eq!(spec.offset, OFFSET_MIN);
        assert_eq!(spec.duty_cycle, DUTY_MAX);
    }

    #[test]
    fn nudges_saturate_at_the_range_edges() {
        let mut spec = WaveformSpec::new(0, WaveKind::Sine, 99.9, 5.0, 5.0, 50.0);
        spec.nudge_frequency(10.0);
        assert_eq!(spec.frequency, FREQ_MAX);
        spec.nudge_amplitude(-100.0);
        assert_eq!(spec.amplitude, AMP_MIN);
    }

    #[test]
    fn display_name_falls_back_to_position() {
        let mut spec = WaveformSpec::new(0, WaveKind::Sine, 5.0, 5.0, 5.0, 50.0);
        assert_eq!(spec.display_name(), "Waveform 1");
        spec.label = Some("MySignal".to_string());
        assert_eq!(spec.display_name(), "MySignal");
    }

    #[test]
    fn starts_with_one_waveform() {
        let session = Session::new();
        assert_eq!(session.waveforms.len(), 1);
        assert_eq!(session.waveforms[0].color, PALETTE[0]);
    }

    #[test]
    fn add_stops_at_the_limit() {
        let mut session = Session::new();
        for _ in 0..4 {
            assert!(session.add_waveform().is_some());
        }
        assert_eq!(session.waveforms.len(), MAX_WAVEFORMS);
        assert!(session.add_waveform().is_none());
        assert_eq!(session.waveforms.len(), MAX_WAVEFORMS);
    }

    #[test]
    fn remove_keeps_the_last_waveform() {
        let mut session = Session::new();
        assert!(!session.remove_waveform(0));
        session.add_waveform();
        assert!(session.remove_waveform(1));
        assert_eq!(session.waveforms.len(), 1);
    }

    #[test]
    fn remove_unknown_id_is_refused() {
        let mut session = Session::new();
        session.add_waveform();
        assert!(!session.remove_waveform(99));
        assert_eq!(session.waveforms.len(), 2);
    }

    #[test]
    fn ids_reassigned_and_colors_preserved_after_remove() {
        let mut session = Session::new();
        session.add_waveform();
        session.add_waveform();
        let colors: Vec<_> = session.waveforms.iter().map(|w| w.color).collect();

        assert!(session.remove_waveform(1));
        let ids: Vec<_> = session.waveforms.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(session.waveforms[0].color, colors[0]);
        assert_eq!(session.waveforms[1].color, colors[2]);
    }

    #[test]
    fn active_index_stays_in_bounds_after_remove() {
        let mut session = Session::new();
        session.add_waveform();
        session.active_index = 1;
        session.remove_waveform(1);
        assert!(session.active_index < session.waveforms.len());
    }

    #[test]
    fn envelope_eligibility_tracks_enabled_count() {
        let mut session = Session::new();
        assert!(!session.can_show_envelopes());
        session.add_waveform();
        assert!(session.can_show_envelopes());
        session.waveforms[1].enabled = false;
        assert!(!session.can_show_envelopes());
    }

    #[test]
    fn duration_is_clamped() {
        let mut session = Session::new();
        session.set_duration(-1.0);
        assert_eq!(session.duration(), DURATION_MIN);
        session.set_duration(9999.0);
        assert_eq!(session.duration(), DURATION_MAX);
    }

    #[test]
    fn compute_skips_disabled_waveforms() {
        let mut session = Session::new();
        session.add_waveform();
        session.add_waveform();
        session.waveforms[1].enabled = false;
        let frame = session.compute();
        assert_eq!(frame.traces.len(), 2);
        assert!(frame
            .traces
            .iter()
            .all(|t| t.spec.display_name() != "Waveform 2"));
    }

    #[test]
    fn compute_produces_requested_envelopes_over_one_time_base() {
        let mut session = Session::new();
        session.add_waveform();
        session.show_max = true;
        session.show_rms = true;
        let frame = session.compute();
        assert_eq!(frame.envelopes.len(), 2);
        assert_eq!(frame.envelopes[0].kind, EnvelopeKind::Max);
        assert_eq!(frame.envelopes[1].kind, EnvelopeKind::Rms);
        for envelope in &frame.envelopes {
            assert_eq!(envelope.source_count, 2);
            assert_eq!(envelope.series.time, frame.traces[0].series.time);
        }
    }

    #[test]
    fn compute_suppresses_envelopes_below_two_enabled() {
        let mut session = Session::new();
        session.show_max = true;
        session.show_min = true;
        let frame = session.compute();
        assert_eq!(frame.traces.len(), 1);
        assert!(frame.envelopes.is_empty());
    }

    #[test]
    fn lookup_by_unknown_id_returns_none() {
        let session = Session::new();
        assert!(session.waveform(99).is_none());
    }
}
