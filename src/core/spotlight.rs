use super::config::SpotlightConfig;
use super::spring::exp_approach;
use smallvec::SmallVec;

/// Handle returned by [`Spotlight::register`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpotlightItem(usize);

/// Shared hover coordinator for a group of navigation items. Hovering one
/// item dims all of its registered siblings.
#[derive(Clone, Debug, Default)]
pub struct Spotlight {
    config: SpotlightConfig,
    opacities: SmallVec<[f32; 16]>,
    focused: Option<usize>,
}

impl Spotlight {
    pub fn new(config: SpotlightConfig) -> Self {
        Self {
            config,
            opacities: SmallVec::new(),
            focused: None,
        }
    }

    pub fn register(&mut self) -> SpotlightItem {
        self.opacities.push(1.0);
        SpotlightItem(self.opacities.len() - 1)
    }

    #[inline]
    fn is_registered(&self, item: SpotlightItem) -> bool {
        item.0 < self.opacities.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.opacities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.opacities.is_empty()
    }

    pub fn enter(&mut self, item: SpotlightItem) {
        if self.is_registered(item) {
            self.focused = Some(item.0);
        }
    }

    pub fn leave(&mut self, item: SpotlightItem) {
        if self.focused == Some(item.0) {
            self.focused = None;
        }
    }

    pub fn target_opacity(&self, item: SpotlightItem) -> Option<f32> {
        self.is_registered(item)
            .then(|| target_for(self.focused, item.0, self.config.dim_opacity))
    }

    pub fn opacity(&self, item: SpotlightItem) -> Option<f32> {
        self.opacities.get(item.0).copied()
    }

    /// True once every opacity sits on its target; painting can stop.
    pub fn is_settled(&self) -> bool {
        (0..self.opacities.len())
            .map(SpotlightItem)
            .all(|item| self.opacity(item) == self.target_opacity(item))
    }

    pub fn step(&mut self, dt_sec: f32) {
        let focused = self.focused;
        let SpotlightConfig {
            dim_opacity,
            fade_tau_sec,
        } = self.config;
        for (i, current) in self.opacities.iter_mut().enumerate() {
            let target = target_for(focused, i, dim_opacity);
            *current = exp_approach(*current, target, fade_tau_sec, dt_sec);
        }
    }
}

#[inline]
fn target_for(focused: Option<usize>, index: usize, dim_opacity: f32) -> f32 {
    match focused {
        Some(f) if f != index => dim_opacity,
        _ => 1.0,
    }
}
