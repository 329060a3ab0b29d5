//! Fighter catalog.
//!
//! The roster is immutable once built. Draws never reorder or otherwise touch
//! the catalog, so one roster can be shared by any number of concurrent
//! matches behind an `Arc`.

use std::collections::HashSet;

use super::RngOracle;
use crate::error::RosterError;
use crate::state::FighterTemplate;

/// Immutable catalog of fighter templates.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Roster {
    templates: Vec<FighterTemplate>,
}

impl Roster {
    /// A match needs two fighters with distinct names.
    pub const MIN_TEMPLATES: usize = 2;

    /// Builds a roster after validating every template.
    pub fn new(templates: Vec<FighterTemplate>) -> Result<Self, RosterError> {
        if templates.len() < Self::MIN_TEMPLATES {
            return Err(RosterError::TooSmall {
                required: Self::MIN_TEMPLATES,
                actual: templates.len(),
            });
        }

        let mut names = HashSet::with_capacity(templates.len());
        for template in &templates {
            validate(template)?;
            if !names.insert(template.name.as_str()) {
                return Err(RosterError::DuplicateName {
                    name: template.name.clone(),
                });
            }
        }

        Ok(Self { templates })
    }

    /// The six-fighter reference catalog.
    pub fn reference() -> Self {
        Self {
            templates: vec![
                FighterTemplate::new("JQuery", 15, 4, 8, 0.4, 0.0),
                FighterTemplate::new("React", 10, 5, 3, 0.5, 0.2),
                FighterTemplate::new("Svelte", 8, 5, 7, 0.7, 0.4),
                FighterTemplate::new("Solid", 8, 6, 7, 0.7, 0.3),
                FighterTemplate::new("HTMX", 5, 10, 8, 0.9, 0.4),
                FighterTemplate::new("Datastar", 4, 11, 9, 0.9, 0.4),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FighterTemplate> {
        self.templates.iter()
    }

    pub fn get(&self, name: &str) -> Option<&FighterTemplate> {
        self.templates.iter().find(|template| template.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Uniform draw over the full roster.
    pub fn pick_random<R: RngOracle + ?Sized>(&self, rng: &mut R) -> &FighterTemplate {
        &self.templates[rng.index(self.templates.len())]
    }

    /// Uniform draw over every template except `name`.
    ///
    /// Picks the k-th surviving candidate of a filtered walk; the catalog
    /// itself is left untouched.
    pub fn pick_random_excluding<R: RngOracle + ?Sized>(
        &self,
        name: &str,
        rng: &mut R,
    ) -> Result<&FighterTemplate, RosterError> {
        if !self.contains(name) {
            return Err(RosterError::NotFound {
                name: name.to_owned(),
            });
        }

        // Names are unique, so exactly one template is filtered out.
        let candidates = self.templates.len() - 1;
        let pick = rng.index(candidates);

        self.templates
            .iter()
            .filter(|template| template.name != name)
            .nth(pick)
            .ok_or_else(|| RosterError::NotFound {
                name: name.to_owned(),
            })
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::reference()
    }
}

fn validate(template: &FighterTemplate) -> Result<(), RosterError> {
    let invalid = |field, reason| RosterError::InvalidTemplate {
        name: template.name.clone(),
        field,
        reason,
    };

    if template.name.trim().is_empty() {
        return Err(invalid("name", "must not be blank"));
    }
    if template.max_health <= 0 {
        return Err(invalid("max_health", "must be positive"));
    }
    if template.damage <= 0 {
        return Err(invalid("damage", "must be positive"));
    }
    if template.speed <= 0 {
        return Err(invalid("speed", "must be positive"));
    }
    if !(0.0..=1.0).contains(&template.accuracy) {
        return Err(invalid("accuracy", "must be within [0, 1]"));
    }
    if !(0.0..=1.0).contains(&template.crit_rate) {
        return Err(invalid("crit_rate", "must be within [0, 1]"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    #[test]
    fn reference_roster_is_valid() {
        let reference = Roster::reference();
        let rebuilt = Roster::new(reference.iter().cloned().collect()).unwrap();
        assert_eq!(rebuilt, reference);
        assert_eq!(rebuilt.len(), 6);
    }

    #[test]
    fn excluding_draw_never_returns_excluded_name() {
        let roster = Roster::reference();
        let mut rng = PcgRng::seed_from_u64(11);

        for template in roster.iter() {
            for _ in 0..200 {
                let drawn = roster
                    .pick_random_excluding(&template.name, &mut rng)
                    .unwrap();
                assert_ne!(drawn.name, template.name);
            }
        }
    }

    #[test]
    fn excluding_draw_reaches_every_other_template() {
        let roster = Roster::reference();
        let mut rng = PcgRng::seed_from_u64(5);
        let mut seen = HashSet::new();

        for _ in 0..500 {
            let drawn = roster.pick_random_excluding("React", &mut rng).unwrap();
            seen.insert(drawn.name.clone());
        }

        assert_eq!(seen.len(), roster.len() - 1);
        assert!(!seen.contains("React"));
    }

    #[test]
    fn excluding_draw_leaves_roster_untouched() {
        let roster = Roster::reference();
        let before = roster.clone();
        let mut rng = PcgRng::seed_from_u64(0);

        for _ in 0..50 {
            roster.pick_random_excluding("HTMX", &mut rng).unwrap();
        }

        assert_eq!(roster, before);
    }

    #[test]
    fn excluding_unknown_name_is_not_found() {
        let roster = Roster::reference();
        let mut rng = PcgRng::seed_from_u64(0);

        let err = roster.pick_random_excluding("Angular", &mut rng).unwrap_err();
        assert_eq!(
            err,
            RosterError::NotFound {
                name: "Angular".into()
            }
        );
        assert!(err.is_integrity_violation());
    }

    #[test]
    fn rejects_duplicate_names() {
        let result = Roster::new(vec![
            FighterTemplate::new("A", 10, 1, 1, 0.5, 0.1),
            FighterTemplate::new("A", 12, 2, 2, 0.5, 0.1),
        ]);
        assert!(matches!(result, Err(RosterError::DuplicateName { .. })));
    }

    #[test]
    fn rejects_single_template() {
        let result = Roster::new(vec![FighterTemplate::new("A", 10, 1, 1, 0.5, 0.1)]);
        assert_eq!(
            result,
            Err(RosterError::TooSmall {
                required: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn rejects_out_of_range_probabilities() {
        let result = Roster::new(vec![
            FighterTemplate::new("A", 10, 1, 1, 1.5, 0.1),
            FighterTemplate::new("B", 10, 1, 1, 0.5, 0.1),
        ]);
        assert!(matches!(
            result,
            Err(RosterError::InvalidTemplate {
                field: "accuracy",
                ..
            })
        ));
    }
}
