//! Dimmed-state color selection.
//!
//! Precedence is a fixed, ordered rule chain ([`DIMMING_RULES`]); the first rule
//! whose condition holds decides which list is rendered:
//!
//! 1. [`DimmingRule::ExplicitOverride`]: dimmed state with a non-empty dimmed list
//! 2. [`DimmingRule::Automatic`]: dimmed state, automatic dimming on, colors present
//! 3. [`DimmingRule::Passthrough`]: everything else renders `colors` as-is
//!
//! Dimmed with automatic dimming off and no override falls through to rule 3 and
//! renders the undimmed colors.

use crate::error::GradientError;
use crate::paint::{normalize_all, Color, SourceColor};

/// Host-level emphasis state of the surface (e.g. dimmed while an alert is shown).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum DimmingState {
    #[default]
    Normal,
    Dimmed,
}

/// Inputs read by the rule chain on each render.
#[derive(Debug, Copy, Clone)]
pub struct DimmingInputs<'a> {
    pub state: DimmingState,
    pub colors: Option<&'a [SourceColor]>,
    pub dimmed_colors: Option<&'a [SourceColor]>,
    pub automatically_dims: bool,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DimmingRule {
    ExplicitOverride,
    Automatic,
    Passthrough,
}

/// Evaluation order of the chain. `Passthrough` always matches and must stay last.
pub const DIMMING_RULES: [DimmingRule; 3] = [
    DimmingRule::ExplicitOverride,
    DimmingRule::Automatic,
    DimmingRule::Passthrough,
];

impl DimmingRule {
    /// Returns the list this rule renders, or `None` when the rule does not apply.
    ///
    /// `Passthrough` applies unconditionally; its list may still be absent.
    fn apply<'a>(self, inputs: &DimmingInputs<'a>) -> Option<Option<&'a [SourceColor]>> {
        let dimmed = inputs.state == DimmingState::Dimmed;
        match self {
            DimmingRule::ExplicitOverride => inputs
                .dimmed_colors
                .filter(|list| dimmed && !list.is_empty())
                .map(Some),
            DimmingRule::Automatic => inputs
                .colors
                .filter(|_| dimmed && inputs.automatically_dims)
                .map(Some),
            DimmingRule::Passthrough => Some(inputs.colors),
        }
    }
}

/// Outcome of running the rule chain: the rule that fired and the list it picked.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Selection<'a> {
    pub rule: DimmingRule,
    pub colors: Option<&'a [SourceColor]>,
}

impl<'a> Selection<'a> {
    /// Runs [`DIMMING_RULES`] in order and keeps the first match.
    pub fn choose(inputs: &DimmingInputs<'a>) -> Self {
        DIMMING_RULES
            .iter()
            .find_map(|&rule| rule.apply(inputs).map(|colors| Selection { rule, colors }))
            .unwrap_or(Selection { rule: DimmingRule::Passthrough, colors: inputs.colors })
    }

    /// Normalizes the chosen list to RGB and desaturates it when the automatic rule fired.
    ///
    /// Order and count are preserved, so stop positions line up index for index.
    pub fn resolve(self) -> Result<Option<Vec<Color>>, GradientError> {
        let Some(list) = self.colors else {
            return Ok(None);
        };

        let mut colors = normalize_all(list)?;
        if self.rule == DimmingRule::Automatic {
            colors.iter_mut().for_each(|c| *c = c.dimmed());
        }
        Ok(Some(colors))
    }
}

/// Picks the color list to render for the given state.
pub fn select_colors(
    state: DimmingState,
    colors: Option<&[SourceColor]>,
    dimmed_colors: Option<&[SourceColor]>,
    automatically_dims: bool,
) -> Result<Option<Vec<Color>>, GradientError> {
    let selection = Selection::choose(&DimmingInputs { state, colors, dimmed_colors, automatically_dims });
    log::trace!("dimming: {:?} rule selected ({:?})", selection.rule, state);
    selection.resolve()
}
