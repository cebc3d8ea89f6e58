//! Reading prop bags into [`FlexProps`].
//!
//! Hosts usually hold props as dynamic data (JSON from a component tree, YAML
//! fixtures). This module decides the shape of every field once, at this
//! boundary, so the rest of the pipeline works on tagged variants.
//!
//! # Shape rules
//!
//! | Field | Scalar | Mapping |
//! |-------|--------|---------|
//! | `gap`, `direction`, `grow`, `alignItems`, `justifyContent` | bare value | per-breakpoint map (`sm`/`md`/`lg` keys) |
//! | `spacing` | bare size | per-breakpoint map if it has any of `sm`/`md`/`lg`, otherwise a bare definition |
//! | `type` | `padding` or `margin` | - |
//!
//! The spacing rule is a key-presence test, not a type tag: a definition that
//! carries a key named `sm`, `md` or `lg` is read as a per-breakpoint map.
//! `null` is treated as absent everywhere. Keys outside the table belong to
//! the host and are ignored.
//!
//! Sizes are whole numbers in `0..=6`; `2.0` reads as `2`, `2.5` does not
//! read at all. A bare `spacing` must be a number: a numeric string such as
//! `"3"` is not a size there and the field is dropped.
//!
//! Text fields (`direction`, `alignItems`, `justifyContent`) are passed
//! through as written, with no CSS validation. A value such as
//! `"row;\ncolor: red"` ends up verbatim in the resolved block, so hosts
//! must not forward untrusted strings into these props.
//!
//! # Lenient and strict reading
//!
//! [`FlexProps::from_value`] never rejects field content. Anything it cannot
//! read is dropped (logged at `debug`) and the remaining props still style
//! the container. [`FlexProps::from_value_strict`] reports the first problem
//! instead, for development-time diagnostics.
//!
//! ```rust
//! use flexstyle::{FlexProps, PropsError};
//!
//! let json = r#"{ "direction": "row", "gap": 9 }"#;
//!
//! let lenient = FlexProps::from_json_str(json).unwrap();
//! assert!(lenient.gap.is_none());
//! assert!(lenient.direction.is_some());
//!
//! let strict = FlexProps::from_json_str_strict(json);
//! assert!(matches!(strict, Err(PropsError::InvalidGapSize { .. })));
//! ```

use serde_yaml::{Mapping, Value};

use crate::breakpoint::{Breakpoint, BreakpointMap};
use crate::error::{PropsError, Result};
use crate::props::{FlexProps, Spacing};
use crate::responsive::ResponsiveValue;
use crate::spacing::{SpacingDefinition, SpacingKind};
use crate::token::GapSize;

impl FlexProps {
    /// Reads a prop bag, dropping anything that cannot be read.
    pub fn from_value(value: &Value) -> Self {
        match (Reader { strict: false }).read(value) {
            Ok(props) => props,
            Err(err) => {
                log::debug!("ignoring prop bag: {}", err);
                FlexProps::default()
            }
        }
    }

    /// Reads a prop bag, failing on the first field that cannot be read.
    pub fn from_value_strict(value: &Value) -> Result<Self> {
        Reader { strict: true }.read(value)
    }

    /// Decodes JSON text and reads it leniently.
    ///
    /// # Errors
    ///
    /// Returns [`PropsError::Parse`] if the text is not valid JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        decode_json(json).map(|value| Self::from_value(&value))
    }

    /// Decodes JSON text and reads it strictly.
    pub fn from_json_str_strict(json: &str) -> Result<Self> {
        Self::from_value_strict(&decode_json(json)?)
    }

    /// Decodes YAML text and reads it leniently.
    ///
    /// # Errors
    ///
    /// Returns [`PropsError::Parse`] if the text is not valid YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        decode_yaml(yaml).map(|value| Self::from_value(&value))
    }

    /// Decodes YAML text and reads it strictly.
    pub fn from_yaml_str_strict(yaml: &str) -> Result<Self> {
        Self::from_value_strict(&decode_yaml(yaml)?)
    }
}

fn decode_json(json: &str) -> Result<Value> {
    serde_json::from_str(json).map_err(|e| PropsError::Parse {
        message: e.to_string(),
    })
}

fn decode_yaml(yaml: &str) -> Result<Value> {
    serde_yaml::from_str(yaml).map_err(|e| PropsError::Parse {
        message: e.to_string(),
    })
}

struct Reader {
    strict: bool,
}

impl Reader {
    fn read(&self, value: &Value) -> Result<FlexProps> {
        let map = match value {
            Value::Mapping(map) => map,
            Value::Null => return Ok(FlexProps::default()),
            other => {
                return Err(PropsError::NotAMapping {
                    found: kind_of(other),
                })
            }
        };

        let mut props = FlexProps::default();

        for (key, value) in map {
            let Some(key) = key.as_str() else {
                log::trace!("skipping non-string prop key {:?}", key);
                continue;
            };
            if value.is_null() {
                continue;
            }

            match key {
                "gap" => props.gap = self.responsive(key, value, read_gap)?,
                "direction" => props.direction = self.responsive(key, value, read_text)?,
                "grow" => props.grow = self.responsive(key, value, read_grow)?,
                "alignItems" => props.align_items = self.responsive(key, value, read_text)?,
                "justifyContent" => {
                    props.justify_content = self.responsive(key, value, read_text)?
                }
                "spacing" => props.spacing = self.spacing(value)?,
                "type" => {
                    let kind = read_kind(value);
                    if let Some(kind) = self.keep(key, kind)? {
                        props.kind = kind;
                    }
                }
                _ => log::trace!("ignoring host prop '{}'", key),
            }
        }

        Ok(props)
    }

    /// Turns a field error into a drop (lenient) or a failure (strict).
    fn keep<T>(&self, field: &str, result: Result<T>) -> Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(err) if self.strict => Err(err),
            Err(err) => {
                log::debug!("dropping '{}': {}", field, err);
                Ok(None)
            }
        }
    }

    fn responsive<T>(
        &self,
        field: &str,
        value: &Value,
        read: impl Fn(&str, &Value) -> Result<T>,
    ) -> Result<Option<ResponsiveValue<T>>> {
        match value {
            Value::Mapping(map) => {
                let tiers = self.tiers(field, map, read)?;
                Ok(Some(ResponsiveValue::PerBreakpoint(tiers)))
            }
            scalar => {
                let parsed = read(field, scalar);
                Ok(self.keep(field, parsed)?.map(ResponsiveValue::Scalar))
            }
        }
    }

    /// Reads the `sm`/`md`/`lg` entries of a per-breakpoint mapping.
    fn tiers<T>(
        &self,
        field: &str,
        map: &Mapping,
        read: impl Fn(&str, &Value) -> Result<T>,
    ) -> Result<BreakpointMap<T>> {
        let mut tiers = BreakpointMap::new();

        for (key, value) in map {
            let key = key.as_str().unwrap_or_default();
            let Ok(tier) = key.parse::<Breakpoint>() else {
                let unknown = Err(PropsError::UnknownBreakpoint {
                    field: field.to_string(),
                    key: key.to_string(),
                });
                self.keep::<()>(field, unknown)?;
                continue;
            };
            if value.is_null() {
                continue;
            }

            let path = format!("{}.{}", field, tier);
            let parsed = read(&path, value);
            if let Some(parsed) = self.keep(&path, parsed)? {
                tiers.insert(tier, parsed);
            }
        }

        Ok(tiers)
    }

    fn spacing(&self, value: &Value) -> Result<Option<Spacing>> {
        const FIELD: &str = "spacing";

        match value {
            Value::Mapping(map) if has_breakpoint_key(map) => {
                let strict = self.strict;
                let tiers = self.tiers(FIELD, map, |path, entry| {
                    read_tier_definition(path, entry, strict)
                })?;
                Ok(Some(Spacing::PerBreakpoint(tiers)))
            }
            Value::Mapping(map) => {
                let def = read_definition(FIELD, map, self.strict);
                Ok(self.keep(FIELD, def)?.map(Spacing::Definition))
            }
            Value::Number(_) => {
                let size = read_gap(FIELD, value);
                Ok(self.keep(FIELD, size)?.map(Spacing::Size))
            }
            other => {
                let not_a_size = Err(PropsError::InvalidValue {
                    field: FIELD.to_string(),
                    expected: "a size or a spacing mapping",
                    found: describe(other),
                });
                self.keep::<()>(FIELD, not_a_size)?;
                Ok(None)
            }
        }
    }
}

fn has_breakpoint_key(map: &Mapping) -> bool {
    map.iter()
        .filter_map(|(key, _)| key.as_str())
        .any(Breakpoint::is_key)
}

fn read_gap(field: &str, value: &Value) -> Result<GapSize> {
    let invalid = || PropsError::InvalidGapSize {
        field: field.to_string(),
        value: describe(value),
    };

    let number = match value {
        Value::Number(n) => match n.as_i64() {
            Some(whole) => whole,
            None => n
                .as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
                .ok_or_else(invalid)?,
        },
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| invalid())?,
        _ => return Err(invalid()),
    };
    GapSize::try_from(number).map_err(|_| invalid())
}

fn read_text(field: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(PropsError::InvalidValue {
            field: field.to_string(),
            expected: "a string",
            found: describe(other),
        }),
    }
}

fn read_grow(field: &str, value: &Value) -> Result<f64> {
    let grow = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    grow.filter(|g| g.is_finite())
        .ok_or_else(|| PropsError::InvalidValue {
            field: field.to_string(),
            expected: "a number",
            found: describe(value),
        })
}

fn read_kind(value: &Value) -> Result<SpacingKind> {
    let text = value.as_str().ok_or_else(|| PropsError::UnknownSpacingType {
        value: describe(value),
    })?;
    text.parse::<SpacingKind>()
        .map_err(|err| PropsError::UnknownSpacingType { value: err.0 })
}

fn read_tier_definition(field: &str, value: &Value, strict: bool) -> Result<SpacingDefinition> {
    match value {
        Value::Mapping(map) => read_definition(field, map, strict),
        other => Err(PropsError::InvalidValue {
            field: field.to_string(),
            expected: "a spacing definition",
            found: describe(other),
        }),
    }
}

/// Reads a spacing definition. When not `strict`, unknown keys and bad sizes
/// are skipped rather than reported.
fn read_definition(field: &str, map: &Mapping, strict: bool) -> Result<SpacingDefinition> {
    let mut def = SpacingDefinition::new();

    for (key, value) in map {
        let key = key.as_str().unwrap_or_default();
        if value.is_null() {
            continue;
        }
        if !SpacingDefinition::KEYS.contains(&key) {
            if strict {
                return Err(PropsError::UnknownSpacingKey {
                    field: field.to_string(),
                    key: key.to_string(),
                });
            }
            log::debug!("ignoring unknown spacing key '{}' in '{}'", key, field);
            continue;
        }

        let path = format!("{}.{}", field, key);
        match read_gap(&path, value) {
            Ok(size) => {
                def.set(key, size);
            }
            Err(err) if strict => return Err(err),
            Err(err) => log::debug!("dropping '{}': {}", path, err),
        }
    }

    Ok(def)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("'{}'", s),
        other => kind_of(other).to_string(),
    }
}
