use crate::{
    composition::model::Composition,
    composition::presets,
    foundation::error::{ReelError, ReelResult},
};

/// Compositions registered by id, in registration order.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    comps: Vec<Composition>,
}

impl Registry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in presets.
    pub fn builtin() -> ReelResult<Self> {
        let mut reg = Self::new();
        reg.register(presets::prompt_to_video()?)?;
        reg.register(presets::prompt_to_workflow()?)?;
        reg.register(presets::prompt_to_workflow_square()?)?;
        Ok(reg)
    }

    /// Validate and add `comp`; ids must be unique.
    pub fn register(&mut self, comp: Composition) -> ReelResult<()> {
        comp.validate()?;
        if self.get(&comp.id).is_some() {
            return Err(ReelError::validation(format!(
                "composition '{}' is already registered",
                comp.id
            )));
        }
        let kinds: Vec<&str> = comp.scenes.iter().map(|s| s.content.kind()).collect();
        tracing::debug!(
            id = %comp.id,
            frames = comp.duration.0,
            scenes = ?kinds,
            width = comp.canvas.width,
            height = comp.canvas.height,
            "registered composition"
        );
        self.comps.push(comp);
        Ok(())
    }

    /// Look up by id.
    pub fn get(&self, id: &str) -> Option<&Composition> {
        self.comps.iter().find(|c| c.id == id)
    }

    /// Look up by id, failing with the list of known ids.
    pub fn require(&self, id: &str) -> ReelResult<&Composition> {
        self.get(id).ok_or_else(|| {
            let known: Vec<&str> = self.ids().collect();
            ReelError::validation(format!(
                "unknown composition '{id}' (known: {})",
                known.join(", ")
            ))
        })
    }

    /// Registered ids in order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.comps.iter().map(|c| c.id.as_str())
    }

    /// Registered compositions in order.
    pub fn iter(&self) -> impl Iterator<Item = &Composition> {
        self.comps.iter()
    }

    /// Number of compositions.
    pub fn len(&self) -> usize {
        self.comps.len()
    }

    /// `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.comps.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/registry.rs"]
mod tests;
