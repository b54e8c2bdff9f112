//! Fire-mode plugin host and the auto-aim plugin.
//!
//! A [`FireMode`] owns an ordered list of plugins. Activation is forwarded to
//! every plugin and the firing direction is passed through each in turn, so
//! auto-aim composes with spread, recoil and similar modifiers.

use glam::Vec3;

use aimassist_core::config::AutoAimParams;
use aimassist_core::enums::{ActivationState, SkipReason};
use aimassist_core::events::AimDiagnostic;
use aimassist_core::types::ScoredCandidate;

use crate::activation::Activation;
use crate::adjust::{adjust, Adjustment};
use crate::diagnostics::{DiagnosticsSink, NullSink};
use crate::scorer::{
    score_and_select, split_direction, ScoringContext, ScoringParams, ShotOrigin,
};

/// Hook points a fire mode exposes to its plugins.
pub trait FireModePlugin {
    fn name(&self) -> &'static str;

    fn activate(&mut self, enabled: bool);

    /// Per-tick hook. Must not affect the next shot.
    fn update(&mut self, _ctx: &mut ScoringContext<'_>, _origin: &ShotOrigin, _aim_dir: Vec3) {}

    /// Modify the direction of a shot about to be fired.
    fn alter_firing_direction(
        &mut self,
        ctx: &mut ScoringContext<'_>,
        origin: &ShotOrigin,
        dir: &mut Vec3,
    );
}

/// Bends shots toward the best visible hostile within the active cone.
#[derive(Debug)]
pub struct AutoAimPlugin<S: DiagnosticsSink = NullSink> {
    scoring: ScoringParams,
    suppress_with_manual_target: bool,
    debug_every_tick: bool,
    activation: Activation,
    sink: S,
}

impl AutoAimPlugin<NullSink> {
    /// Build a plugin from parameters. Starts Disabled.
    pub fn new(params: &AutoAimParams) -> Self {
        Self {
            scoring: ScoringParams::from_params(params),
            suppress_with_manual_target: params.suppress_with_manual_target,
            debug_every_tick: params.debug_every_tick,
            activation: Activation::new(),
            sink: NullSink,
        }
    }
}

impl<S: DiagnosticsSink> AutoAimPlugin<S> {
    /// Replace the diagnostics sink.
    pub fn with_sink<T: DiagnosticsSink>(self, sink: T) -> AutoAimPlugin<T> {
        AutoAimPlugin {
            scoring: self.scoring,
            suppress_with_manual_target: self.suppress_with_manual_target,
            debug_every_tick: self.debug_every_tick,
            activation: self.activation,
            sink,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn scoring(&self) -> &ScoringParams {
        &self.scoring
    }

    pub fn state(&self) -> ActivationState {
        self.activation.state()
    }

    pub fn is_enabled(&self) -> bool {
        self.activation.is_enabled()
    }

    pub fn activate(&mut self, enabled: bool) -> ActivationState {
        self.activation.on_activate(enabled, &self.scoring.cones)
    }

    /// Bend `dir` toward the selected target, if any.
    ///
    /// Every path that skips the assist leaves `dir` untouched.
    pub fn alter_firing_direction(
        &mut self,
        ctx: &mut ScoringContext<'_>,
        origin: &ShotOrigin,
        dir: &mut Vec3,
    ) -> Option<Adjustment> {
        if let Err(reason) = self.check_gates(ctx, origin, *dir) {
            self.skip(reason);
            return None;
        }

        let Some(best) = score_and_select(ctx, &self.scoring, origin, *dir, &mut self.sink) else {
            self.skip(SkipReason::NoCandidate);
            return None;
        };

        let inner = self.scoring.cones.select(origin.zoomed).inner_half_angle;
        let Some(adjustment) = adjust(origin.position, *dir, best.aim_point, inner) else {
            self.skip(SkipReason::DegenerateDirection);
            return None;
        };

        *dir = adjustment.direction;
        tracing::debug!(
            id = %best.id,
            deviation_deg = adjustment.deviation.to_degrees(),
            snapped = adjustment.snapped,
            "auto-aim adjusted firing direction"
        );
        if self.sink.enabled() {
            self.sink.record(AimDiagnostic::DirectionAdjusted {
                id: best.id,
                deviation_rad: adjustment.deviation,
                snapped: adjustment.snapped,
            });
        }
        Some(adjustment)
    }

    /// Score without firing, for debug overlays. No-op unless
    /// `debug_every_tick` is set.
    pub fn update(
        &mut self,
        ctx: &mut ScoringContext<'_>,
        origin: &ShotOrigin,
        aim_dir: Vec3,
    ) -> Option<ScoredCandidate> {
        if !self.debug_every_tick {
            return None;
        }
        if let Err(reason) = self.check_gates(ctx, origin, aim_dir) {
            self.skip(reason);
            return None;
        }
        score_and_select(ctx, &self.scoring, origin, aim_dir, &mut self.sink)
    }

    fn check_gates(
        &self,
        ctx: &ScoringContext<'_>,
        origin: &ShotOrigin,
        dir: Vec3,
    ) -> Result<(), SkipReason> {
        if !self.activation.is_enabled() {
            return Err(SkipReason::Inactive);
        }
        if !self.scoring.cones.select(origin.zoomed).enabled {
            return Err(SkipReason::ConeDisabled);
        }
        if self.suppress_with_manual_target && ctx.rules.has_manual_target(origin.shooter.id) {
            return Err(SkipReason::ManualTarget);
        }
        if split_direction(dir).is_none() {
            return Err(SkipReason::DegenerateDirection);
        }
        Ok(())
    }

    fn skip(&mut self, reason: SkipReason) {
        tracing::trace!(?reason, "auto-aim skipped");
        if self.sink.enabled() {
            self.sink.record(AimDiagnostic::AssistSkipped { reason });
        }
    }
}

impl<S: DiagnosticsSink> FireModePlugin for AutoAimPlugin<S> {
    fn name(&self) -> &'static str {
        "auto_aim"
    }

    fn activate(&mut self, enabled: bool) {
        AutoAimPlugin::activate(self, enabled);
    }

    fn update(&mut self, ctx: &mut ScoringContext<'_>, origin: &ShotOrigin, aim_dir: Vec3) {
        AutoAimPlugin::update(self, ctx, origin, aim_dir);
    }

    fn alter_firing_direction(
        &mut self,
        ctx: &mut ScoringContext<'_>,
        origin: &ShotOrigin,
        dir: &mut Vec3,
    ) {
        AutoAimPlugin::alter_firing_direction(self, ctx, origin, dir);
    }
}

/// A weapon fire mode with its plugin chain.
pub struct FireMode {
    name: String,
    plugins: Vec<Box<dyn FireModePlugin>>,
    active: bool,
}

impl FireMode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            plugins: Vec::new(),
            active: false,
        }
    }

    pub fn with_plugin(mut self, plugin: Box<dyn FireModePlugin>) -> Self {
        self.plugins.push(plugin);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn plugin_names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    /// Select or deselect the fire mode; forwarded to every plugin.
    pub fn activate(&mut self, enabled: bool) {
        self.active = enabled;
        for plugin in &mut self.plugins {
            plugin.activate(enabled);
        }
    }

    pub fn update(&mut self, ctx: &mut ScoringContext<'_>, origin: &ShotOrigin, aim_dir: Vec3) {
        for plugin in &mut self.plugins {
            plugin.update(ctx, origin, aim_dir);
        }
    }

    /// Run the firing direction through every plugin in order.
    pub fn alter_firing_direction(
        &mut self,
        ctx: &mut ScoringContext<'_>,
        origin: &ShotOrigin,
        dir: &mut Vec3,
    ) {
        for plugin in &mut self.plugins {
            plugin.alter_firing_direction(ctx, origin, dir);
        }
    }
}
