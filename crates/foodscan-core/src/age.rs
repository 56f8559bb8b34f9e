//! Age-group suitability advice for a [`ProductSchema`].
//!
//! Every rule sees the same product and only adds exclusions and reasons, so
//! rule order affects reason order and nothing else. Exclusions are
//! de-duplicated once all rules have run.

use serde::Serialize;

use crate::product::{format_amount, ProductSchema};

/// Substrings that mark an allergen tag as one of the common allergens.
const COMMON_ALLERGENS: [&str; 15] = [
    "nuts",
    "peanuts",
    "milk",
    "eggs",
    "fish",
    "shellfish",
    "soy",
    "wheat",
    "gluten",
    "celery",
    "mustard",
    "sesame",
    "sulphites",
    "lupin",
    "molluscs",
];

const HIGH_SUGAR_G: f64 = 10.0;
const MEDIUM_SUGAR_G: f64 = 5.0;
const HIGH_SALT_G: f64 = 1.5;
const MEDIUM_SALT_G: f64 = 0.8;
const MANY_ADDITIVES: usize = 3;

const ALL_AGE_GROUPS: &str = "all age groups";
const NO_CONCERNS: &str = "No specific concerns identified";
const DIABETES: &str = "people with diabetes";
const HYPERTENSION: &str = "people with hypertension";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeGroup {
    Infants,
    YoungChildren,
    Children,
    OlderChildren,
    Teenagers,
    Adults,
    Elderly,
    PregnantWomen,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 8] = [
        AgeGroup::Infants,
        AgeGroup::YoungChildren,
        AgeGroup::Children,
        AgeGroup::OlderChildren,
        AgeGroup::Teenagers,
        AgeGroup::Adults,
        AgeGroup::Elderly,
        AgeGroup::PregnantWomen,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AgeGroup::Infants => "Infants (0-12 months)",
            AgeGroup::YoungChildren => "Young children (1-3 years)",
            AgeGroup::Children => "Children (4-8 years)",
            AgeGroup::OlderChildren => "Older children (9-13 years)",
            AgeGroup::Teenagers => "Teenagers (14-18 years)",
            AgeGroup::Adults => "Adults (19-64 years)",
            AgeGroup::Elderly => "Elderly (65+ years)",
            AgeGroup::PregnantWomen => "Pregnant women",
        }
    }
}

impl std::fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeJudgment {
    pub suitable_for: Vec<String>,
    /// Canonical age-group labels plus free-form condition labels, without
    /// duplicates, in the order the rules first raised them.
    pub not_suitable_for: Vec<String>,
    pub reasons: Vec<String>,
}

/// Exclusions and reasons gathered while the rules run.
#[derive(Debug, Default)]
struct AgeFindings {
    excluded: Vec<String>,
    reasons: Vec<String>,
}

impl AgeFindings {
    fn exclude(mut self, groups: &[AgeGroup]) -> Self {
        self.excluded
            .extend(groups.iter().map(|g| g.label().to_string()));
        self
    }

    fn exclude_label(mut self, label: impl Into<String>) -> Self {
        self.excluded.push(label.into());
        self
    }

    fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reasons.push(reason.into());
        self
    }

    fn finish(self) -> AgeJudgment {
        let mut not_suitable_for: Vec<String> = Vec::with_capacity(self.excluded.len());
        for label in self.excluded {
            if !not_suitable_for.contains(&label) {
                not_suitable_for.push(label);
            }
        }

        let mut reasons = self.reasons;
        let mut suitable_for: Vec<String> = if not_suitable_for.is_empty() {
            reasons.push(NO_CONCERNS.to_string());
            vec![ALL_AGE_GROUPS.to_string()]
        } else {
            [AgeGroup::Teenagers, AgeGroup::Adults]
                .iter()
                .map(|g| g.label())
                .filter(|label| !not_suitable_for.iter().any(|ex| ex == label))
                .map(str::to_string)
                .collect()
        };
        if suitable_for.is_empty() {
            suitable_for.push(AgeGroup::Adults.label().to_string());
        }

        AgeJudgment {
            suitable_for,
            not_suitable_for,
            reasons,
        }
    }
}

type AgeRule = fn(&ProductSchema, AgeFindings) -> AgeFindings;

const AGE_RULES: &[AgeRule] = &[
    allergen_rule,
    sugar_rule,
    salt_rule,
    additives_rule,
    nova_rule,
];

/// Works out which age groups a product suits.
#[must_use]
pub fn advise_age(product: &ProductSchema) -> AgeJudgment {
    AGE_RULES
        .iter()
        .fold(AgeFindings::default(), |findings, rule| {
            rule(product, findings)
        })
        .finish()
}

fn allergen_rule(product: &ProductSchema, findings: AgeFindings) -> AgeFindings {
    let mut matched: Vec<&str> = Vec::new();
    for tag in &product.allergens {
        let tag = tag.to_lowercase();
        for common in COMMON_ALLERGENS {
            if tag.contains(common) && !matched.contains(&common) {
                matched.push(common);
            }
        }
    }
    if matched.is_empty() {
        return findings;
    }

    let listed = product.allergens.join(", ");
    let findings = findings
        .exclude(&[AgeGroup::Infants])
        .exclude_label(format!("people with allergies to: {listed}"))
        .reason(format!("Contains allergens: {listed}"));
    if matched.len() > 1 {
        findings.exclude(&[AgeGroup::YoungChildren])
    } else {
        findings
    }
}

fn sugar_rule(product: &ProductSchema, findings: AgeFindings) -> AgeFindings {
    let Some(sugar) = product.sugar_reading() else {
        return findings;
    };
    if sugar > HIGH_SUGAR_G {
        findings
            .exclude(&[
                AgeGroup::Children,
                AgeGroup::Infants,
                AgeGroup::YoungChildren,
            ])
            .exclude_label(DIABETES)
            .reason(format!(
                "High sugar content ({}g per 100g)",
                format_amount(sugar)
            ))
    } else if sugar > MEDIUM_SUGAR_G {
        findings.exclude(&[AgeGroup::Infants])
    } else {
        findings
    }
}

fn salt_rule(product: &ProductSchema, findings: AgeFindings) -> AgeFindings {
    let Some(salt) = product.salt_reading() else {
        return findings;
    };
    if salt > HIGH_SALT_G {
        findings
            .exclude(&[AgeGroup::Elderly, AgeGroup::Infants])
            .exclude_label(HYPERTENSION)
            .reason(format!(
                "High salt content ({}g per 100g)",
                format_amount(salt)
            ))
    } else if salt > MEDIUM_SALT_G {
        findings.exclude(&[AgeGroup::Infants])
    } else {
        findings
    }
}

fn additives_rule(product: &ProductSchema, findings: AgeFindings) -> AgeFindings {
    if product.additive_count().unwrap_or(0) > MANY_ADDITIVES {
        findings
            .exclude(&[
                AgeGroup::PregnantWomen,
                AgeGroup::Infants,
                AgeGroup::YoungChildren,
            ])
            .reason("Contains many additives")
    } else {
        findings
    }
}

fn nova_rule(product: &ProductSchema, findings: AgeFindings) -> AgeFindings {
    match product.nova_group {
        Some(nova) if nova.get() == 4 => findings
            .exclude(&[
                AgeGroup::Infants,
                AgeGroup::YoungChildren,
                AgeGroup::PregnantWomen,
            ])
            .reason(format!("Highly processed food (NOVA group {nova})")),
        _ => findings,
    }
}
