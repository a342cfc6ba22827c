use crate::{
    collect::{CollectWarning, Collector, ControlAccessor, ControlSurface},
    dataset::Dataset,
    foundation::error::HeatspecResult,
    preset::{Preset, apply_preset, reset},
    schema::{Schema, Section},
    snapshot::ConfigSnapshot,
    spec::{ChartSpecification, SpecFingerprint, build_spec},
};

/// Build counters for a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Builds that produced a specification.
    pub builds: u64,
    /// Successful builds whose output matched what was already displayed.
    pub unchanged: u64,
    /// Builds that failed and left the display untouched.
    pub failures: u64,
}

/// Live preview state: current dataset, active snapshot and the chart on screen.
///
/// The displayed specification is only ever replaced by a complete, successful
/// build. A failed build keeps it and records one diagnostic.
pub struct PreviewSession<'s> {
    schema: &'s Schema,
    dataset: Dataset,
    snapshot: ConfigSnapshot,
    displayed: ChartSpecification,
    fingerprint: SpecFingerprint,
    warnings: Vec<CollectWarning>,
    last_error: Option<String>,
    stats: SessionStats,
}

impl<'s> PreviewSession<'s> {
    /// Start a session showing `dataset` under the schema defaults.
    pub fn new(schema: &'s Schema, dataset: Dataset) -> HeatspecResult<Self> {
        let snapshot = ConfigSnapshot::defaults(schema);
        let displayed = build_spec(&snapshot, &dataset)?;
        let fingerprint = displayed.fingerprint()?;
        Ok(Self {
            schema,
            dataset,
            snapshot,
            displayed,
            fingerprint,
            warnings: Vec::new(),
            last_error: None,
            stats: SessionStats {
                builds: 1,
                ..SessionStats::default()
            },
        })
    }

    pub fn displayed(&self) -> &ChartSpecification {
        &self.displayed
    }

    pub fn snapshot(&self) -> &ConfigSnapshot {
        &self.snapshot
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Warnings from the collect run behind the displayed chart.
    pub fn warnings(&self) -> &[CollectWarning] {
        &self.warnings
    }

    /// Diagnostic from the most recent failed operation; cleared by the next success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// A control changed: collect every field and rebuild.
    #[tracing::instrument(skip_all)]
    pub fn on_config_event(
        &mut self,
        controls: &dyn ControlAccessor,
    ) -> HeatspecResult<&ChartSpecification> {
        let collected = Collector::new(self.schema).collect(controls);
        let spec = build_with_fingerprint(&collected.snapshot, &self.dataset);
        self.settle(
            spec,
            Some(collected.snapshot),
            None,
            Some(collected.warnings),
        )
    }

    /// Swap in a new dataset. A dataset that fails validation never replaces the current one.
    #[tracing::instrument(skip_all, fields(rows = dataset.rows(), cols = dataset.cols()))]
    pub fn load_dataset(&mut self, dataset: Dataset) -> HeatspecResult<&ChartSpecification> {
        let spec = dataset
            .validate()
            .and_then(|()| build_with_fingerprint(&self.snapshot, &dataset));
        self.settle(spec, None, Some(dataset), None)
    }

    /// Replace the configuration with `preset`, writing it through to `controls`.
    pub fn apply_preset(
        &mut self,
        preset: &Preset,
        controls: &mut dyn ControlSurface,
    ) -> HeatspecResult<&ChartSpecification> {
        let result = apply_preset(preset, self.schema, controls).and_then(|snapshot| {
            let spec = build_with_fingerprint(&snapshot, &self.dataset)?;
            Ok((spec, snapshot))
        });
        match result {
            Ok((spec, snapshot)) => self.settle(Ok(spec), Some(snapshot), None, Some(Vec::new())),
            Err(err) => self.settle(Err(err), None, None, None),
        }
    }

    /// Reset `section` (or everything) to schema defaults in `controls`, then
    /// rebuild from the controls.
    pub fn reset(
        &mut self,
        controls: &mut dyn ControlSurface,
        section: Option<Section>,
    ) -> HeatspecResult<&ChartSpecification> {
        reset(self.schema, controls, section);
        self.on_config_event(controls)
    }

    /// Commit a finished build, or record its failure without touching the display.
    fn settle(
        &mut self,
        built: HeatspecResult<(ChartSpecification, SpecFingerprint)>,
        snapshot: Option<ConfigSnapshot>,
        dataset: Option<Dataset>,
        warnings: Option<Vec<CollectWarning>>,
    ) -> HeatspecResult<&ChartSpecification> {
        let (spec, fingerprint) = match built {
            Ok(ok) => ok,
            Err(err) => {
                tracing::warn!(error = %err, "build failed; keeping the displayed chart");
                self.stats.failures += 1;
                self.last_error = Some(err.to_string());
                return Err(err);
            }
        };

        self.stats.builds += 1;
        self.last_error = None;
        if let Some(snapshot) = snapshot {
            self.snapshot = snapshot;
        }
        if let Some(dataset) = dataset {
            self.dataset = dataset;
        }
        if let Some(warnings) = warnings {
            self.warnings = warnings;
        }
        if fingerprint == self.fingerprint {
            self.stats.unchanged += 1;
        } else {
            tracing::debug!(%fingerprint, "displayed chart replaced");
            self.displayed = spec;
            self.fingerprint = fingerprint;
        }
        Ok(&self.displayed)
    }
}

fn build_with_fingerprint(
    snapshot: &ConfigSnapshot,
    dataset: &Dataset,
) -> HeatspecResult<(ChartSpecification, SpecFingerprint)> {
    let spec = build_spec(snapshot, dataset)?;
    let fingerprint = spec.fingerprint()?;
    Ok((spec, fingerprint))
}
