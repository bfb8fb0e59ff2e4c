//! Aspect and field vector definitions

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Fixed ordered names used to generate a fresh clock
pub const DEFAULT_ASPECT_NAMES: [&str; 32] = [
    "Awareness",
    "Attention",
    "Perception (Visual)",
    "Perception (Auditory)",
    "Perception (Somatosensory)",
    "Interoception",
    "Proprioception",
    "Arousal/Vigilance",
    "Working Memory",
    "Episodic Memory",
    "Semantic Memory",
    "Language/Symbolics",
    "Imagination/Visualization",
    "Mental Time Travel",
    "Planning/Prospection",
    "Decision-Making",
    "Inhibition/Self-Control",
    "Cognitive Flexibility",
    "Meta-Awareness",
    "Self-Model/Identity",
    "Emotion Processing",
    "Motivation/Drive",
    "Reward/Valuation",
    "Empathy/Theory of Mind",
    "Social Cognition",
    "Moral Reasoning",
    "Spatial Cognition",
    "Rhythm/Timing",
    "Creativity/Divergence",
    "Learning/Plasticity",
    "Dreaming/Imagery",
    "Narrative/Meaning-Making",
];

/// One tracked aspect of the Self-Clock
///
/// Identity is the position in the aspect sequence, not the name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    /// Display name
    #[serde(default, deserialize_with = "name_or_text")]
    pub name: String,
    /// Activation score (percent scale, 2 decimals)
    #[serde(default, deserialize_with = "or_default")]
    pub activation: f64,
    /// Coarse grouping, 1-8 for generated aspects
    #[serde(deserialize_with = "integral")]
    pub ring: i64,
    /// Developmental stage, 1-12 for generated aspects
    #[serde(deserialize_with = "integral")]
    pub stage: i64,
    /// Derived descriptor, recomputed every run
    #[serde(default, deserialize_with = "or_default")]
    pub field_vector: FieldVector,
    /// Keys we do not interpret, carried through a rewrite untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Aspect {
    /// Create an aspect with zero activation and an empty field vector
    pub fn new(name: impl Into<String>, ring: i64, stage: i64) -> Self {
        Self {
            name: name.into(),
            activation: 0.0,
            ring,
            stage,
            field_vector: FieldVector::default(),
            extra: Map::new(),
        }
    }
}

// Only ring and stage feed the formula. Everything else on a stored aspect
// is overwritten by the next run, so bad values there are dropped.

/// Any value that does not fit `T` becomes `T::default()`
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Strings as-is, null as empty, anything else as its JSON text
fn name_or_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// An integer, also when written as an integral float (`2.0`)
fn integral<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if let Some(i) = value.as_i64() {
        return Ok(i);
    }
    match value.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() <= i64::MAX as f64 => Ok(f as i64),
        _ => Err(serde::de::Error::custom(format!("expected an integer, found {}", value))),
    }
}

/// The 8-dimensional field vector (G, R, P, A, N, T, Cx, Id)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldVector {
    /// Ring position, normalized to [0, 1]
    #[serde(rename = "G")]
    pub g: f64,
    /// Stage position, normalized to [0, 1]
    #[serde(rename = "R")]
    pub r: f64,
    /// CI / phi
    #[serde(rename = "P")]
    pub p: f64,
    /// CF / phi
    #[serde(rename = "A")]
    pub a: f64,
    /// sin(stage / 12 * pi)
    #[serde(rename = "N")]
    pub n: f64,
    /// cos(ring / 8 * pi / 2)
    #[serde(rename = "T")]
    pub t: f64,
    /// (ring + stage) / 20
    #[serde(rename = "Cx")]
    pub cx: f64,
    /// 1 - |CI - CF|
    #[serde(rename = "Id")]
    pub id: f64,
}

impl FieldVector {
    /// The energy-matter contribution of this vector (A + N)
    pub fn energy_matter(&self) -> f64 {
        self.a + self.n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_vector_uses_short_keys() {
        let fv = FieldVector { g: 0.1, cx: 0.5, id: 0.98, ..Default::default() };
        let value = serde_json::to_value(fv).unwrap();
        assert_eq!(value["G"], json!(0.1));
        assert_eq!(value["Cx"], json!(0.5));
        assert_eq!(value["Id"], json!(0.98));
        assert!(value.get("g").is_none());
    }

    #[test]
    fn test_aspect_keeps_unknown_keys() {
        let raw = json!({"name": "Awareness", "ring": 1, "stage": 1, "color": "#ffcc00"});
        let aspect: Aspect = serde_json::from_value(raw).unwrap();
        assert_eq!(aspect.extra.get("color"), Some(&json!("#ffcc00")));
        assert_eq!(aspect.activation, 0.0);

        let back = serde_json::to_value(&aspect).unwrap();
        assert_eq!(back["color"], json!("#ffcc00"));
    }

    #[test]
    fn test_aspect_requires_ring_and_stage() {
        let raw = json!({"name": "Awareness", "stage": 1});
        let err = serde_json::from_value::<Aspect>(raw).unwrap_err();
        assert!(err.to_string().contains("ring"));
    }

    #[test]
    fn test_recomputed_fields_tolerate_bad_values() {
        let raw = json!({
            "name": 7,
            "ring": 1,
            "stage": 1,
            "activation": null,
            "field_vector": {"G": 0.1}
        });
        let aspect: Aspect = serde_json::from_value(raw).unwrap();
        assert_eq!(aspect.name, "7");
        assert_eq!(aspect.activation, 0.0);
        assert_eq!(aspect.field_vector, FieldVector::default());

        let raw = json!({"ring": 2, "stage": 3, "activation": "high", "field_vector": null});
        let aspect: Aspect = serde_json::from_value(raw).unwrap();
        assert_eq!(aspect.name, "");
        assert_eq!(aspect.activation, 0.0);
        assert_eq!(aspect.field_vector, FieldVector::default());
    }

    #[test]
    fn test_ring_and_stage_accept_integral_floats() {
        let aspect: Aspect = serde_json::from_value(json!({"ring": 2.0, "stage": 11.0})).unwrap();
        assert_eq!((aspect.ring, aspect.stage), (2, 11));

        assert!(serde_json::from_value::<Aspect>(json!({"ring": 2.5, "stage": 1})).is_err());
        assert!(serde_json::from_value::<Aspect>(json!({"ring": "2", "stage": 1})).is_err());
        assert!(serde_json::from_value::<Aspect>(json!({"ring": null, "stage": 1})).is_err());
    }

    #[test]
    fn test_default_names_unique() {
        let mut names = DEFAULT_ASPECT_NAMES.to_vec();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 32);
    }
}
