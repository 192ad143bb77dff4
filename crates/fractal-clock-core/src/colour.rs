use crate::error::ConfigError;

/// Three channel intensities in `[0, 1]`, straight (not premultiplied).
///
/// Channels have no fixed meaning beyond their index; the default rule happens
/// to push channel 0 towards the minute branches and channel 2 towards the
/// second branches, so with an RGB backend the tree drifts red/blue.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Colour(pub [f64; 3]);

impl Colour {
    pub const WHITE: Colour = Colour([1.0, 1.0, 1.0]);

    #[inline]
    pub const fn new(c0: f64, c1: f64, c2: f64) -> Self {
        Self([c0, c1, c2])
    }

    #[inline]
    pub fn is_normalized(self) -> bool {
        self.0.iter().all(|c| (0.0..=1.0).contains(c))
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Per-generation colour update.
///
/// With `k = generation_scale`:
/// - second child: `(k·c0, dim·c1, lift + k·c2)`
/// - minute child: `(lift + k·c0, dim·c1, k·c2)`
///
/// Channel 1 is dimmed once per node and both children share the result.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColourRule {
    pub generation_scale: f64,
    pub shared_dim: f64,
    pub lift: f64,
}

impl Default for ColourRule {
    fn default() -> Self {
        Self {
            generation_scale: 0.85,
            shared_dim: 0.92,
            lift: 0.1,
        }
    }
}

impl ColourRule {
    /// Colours of the (second, minute) children of a node coloured `parent`.
    #[inline]
    pub fn children(&self, parent: Colour) -> (Colour, Colour) {
        let [c0, c1, c2] = parent.0;
        let k = self.generation_scale;
        let dimmed = self.shared_dim * c1;

        let second = Colour([k * c0, dimmed, self.lift + k * c2]);
        let minute = Colour([self.lift + k * c0, dimmed, k * c2]);
        (second, minute)
    }

    /// Rejects constants that could carry a `[0, 1]` colour outside `[0, 1]`.
    ///
    /// Each update is affine with non-negative coefficients, so channels stay
    /// in range for every generation exactly when `lift + k <= 1`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [self.generation_scale, self.shared_dim, self.lift]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(ConfigError::ColourRule("constants must be finite".to_string()));
        }
        if !(0.0..=1.0).contains(&self.generation_scale) || !(0.0..=1.0).contains(&self.shared_dim) {
            return Err(ConfigError::ColourRule(
                "generation scale and dim factor must lie in [0, 1]".to_string(),
            ));
        }
        if self.lift < 0.0 || self.lift + self.generation_scale > 1.0 {
            return Err(ConfigError::ColourRule(format!(
                "lift {} plus generation scale {} must stay within [0, 1]",
                self.lift, self.generation_scale
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn children_of_white() {
        let (second, minute) = ColourRule::default().children(Colour::WHITE);
        assert!((second.0[0] - 0.85).abs() < EPS);
        assert!((second.0[1] - 0.92).abs() < EPS);
        assert!((second.0[2] - 0.95).abs() < EPS);
        assert!((minute.0[0] - 0.95).abs() < EPS);
        assert!((minute.0[1] - 0.92).abs() < EPS);
        assert!((minute.0[2] - 0.85).abs() < EPS);
    }

    #[test]
    fn both_children_share_the_dimmed_channel() {
        let (second, minute) = ColourRule::default().children(Colour::new(0.3, 0.6, 0.9));
        assert_eq!(second.0[1], minute.0[1]);
    }

    #[test]
    fn channels_stay_normalized_over_many_generations() {
        let rule = ColourRule::default();
        let mut frontier = vec![Colour::WHITE];
        for _ in 0..12 {
            frontier = frontier
                .into_iter()
                .flat_map(|c| {
                    let (a, b) = rule.children(c);
                    [a, b]
                })
                .collect();
            assert!(frontier.iter().all(|c| c.is_normalized()));
        }
    }

    #[test]
    fn default_rule_is_valid() {
        assert_eq!(ColourRule::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_lift_overflow() {
        let rule = ColourRule { lift: 0.3, ..Default::default() };
        assert!(matches!(rule.validate(), Err(ConfigError::ColourRule(_))));
    }

    #[test]
    fn rejects_amplifying_dim() {
        let rule = ColourRule { shared_dim: 1.1, ..Default::default() };
        assert!(rule.validate().is_err());
    }
}
