//! Talent search filters.
//!
//! Every string filter is inactive when absent, empty, or `"all"`.
//! `PgStore` pushes the same rules down into SQL; `matches` applies them in-process.

use serde::Deserialize;

use crate::matching::models::CandidateSearchResult;

const ALL: &str = "all";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    /// `[min, max]` years, inclusive. Ignored unless exactly two values.
    pub experience: Option<Vec<i32>>,
    pub location: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    /// Candidate must have every listed skill.
    pub skills: Option<Vec<String>>,
    pub language: Option<String>,
    pub language_proficiency: Option<String>,
    pub german_level: Option<String>,
    /// `"required"` or anything else (meaning not required).
    pub visa_required: Option<String>,
    pub availability: Option<String>,
}

impl SearchFilters {
    pub fn experience_range(&self) -> Option<(i32, i32)> {
        match self.experience.as_deref() {
            Some([min, max]) => Some((*min, *max)),
            _ => None,
        }
    }

    pub fn location(&self) -> Option<&str> {
        active(&self.location)
    }

    pub fn country(&self) -> Option<&str> {
        active(&self.country)
    }

    pub fn city(&self) -> Option<&str> {
        active(&self.city)
    }

    pub fn availability(&self) -> Option<&str> {
        active(&self.availability)
    }

    pub fn language(&self) -> Option<&str> {
        active(&self.language)
    }

    pub fn language_proficiency(&self) -> Option<&str> {
        active(&self.language_proficiency)
    }

    pub fn german_level(&self) -> Option<&str> {
        active(&self.german_level)
    }

    pub fn skills(&self) -> Option<&[String]> {
        self.skills.as_deref().filter(|s| !s.is_empty())
    }

    /// Stored `visa_status` value the filter selects.
    pub fn visa_status(&self) -> Option<&'static str> {
        active(&self.visa_required).map(|v| {
            if v == "required" {
                "Required"
            } else {
                "Not Required"
            }
        })
    }

    /// In-process equivalent of the SQL filter.
    pub fn matches(&self, candidate: &CandidateSearchResult) -> bool {
        if let Some((min, max)) = self.experience_range() {
            match candidate.experience {
                Some(years) if years >= min && years <= max => {}
                _ => return false,
            }
        }

        let text_filters = [
            (self.location(), &candidate.location),
            (self.country(), &candidate.country),
            (self.city(), &candidate.city),
            (self.availability(), &candidate.availability),
        ];
        for (filter, value) in text_filters {
            if let Some(filter) = filter {
                if !ilike(value.as_deref(), filter) {
                    return false;
                }
            }
        }

        if let Some(required) = self.skills() {
            if !required.iter().all(|s| candidate.skills.contains(s)) {
                return false;
            }
        }

        for filter in [self.language(), self.language_proficiency()].into_iter().flatten() {
            let hit = candidate.languages.iter().any(|l| {
                ilike(Some(&l.language), filter) || ilike(Some(&l.proficiency), filter)
            });
            if !hit {
                return false;
            }
        }

        if let Some(level) = self.german_level() {
            if candidate.german_level.as_deref() != Some(level) {
                return false;
            }
        }

        if let Some(status) = self.visa_status() {
            if candidate.visa_status.as_deref() != Some(status) {
                return false;
            }
        }

        true
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty() && *v != ALL)
}

/// `ILIKE '%needle%'`; a NULL column never matches.
fn ilike(value: Option<&str>, needle: &str) -> bool {
    value
        .map(|v| v.to_lowercase().contains(&needle.to_lowercase()))
        .unwrap_or(false)
}
