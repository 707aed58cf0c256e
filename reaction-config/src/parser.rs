use anyhow::{anyhow, bail};
use colored::Colorize;
use serde_yaml::{Mapping, Value};
use thiserror::Error;

use crate::{EventPolicy, Settings};


const TYPE_HINT_STRING: &'static str = "string";
const TYPE_HINT_BOOL: &'static str = "bool (true/false)";
const TYPE_HINT_FLOAT: &'static str = "float";
const TYPE_HINT_UINT: &'static str = "positive integer";
const TYPE_HINT_POLICY: &'static str = "string ('single' or 'drain')";
const TYPE_HINT_VEC2: &'static str = "sequence (array, '[x, y]') of 2 floats";
const TYPE_HINT_MAPPING: &'static str = "mapping (dictionary-like)";


#[derive(Debug, Error)]
enum ParsingErr {
    #[error("{} The type of the field '{}' inside of '{}' {}. Expected: '{}'", "(InvalidType)".red(), .field.bold(), .section.bold(), "is invalid".bold(), .expected.bold())]
    InvalidType {
        field: String,
        section: String,
        expected: &'static str,
    },

    #[error("{} The field '{}' (in '{}') {}.", "(NotRecognized)".red(), .field.bold(), .section.bold(), "is not a recognized setting".bold())]
    NotRecognized {
        field: String,
        section: String,
    },
}


/// Parses YAML settings on top of the defaults. Unknown sections or
/// fields are rejected so typos don't silently fall back to a default.
pub fn parse_string(f: String) -> anyhow::Result<Settings> {
    let data: Result<_, serde_yaml::Error> = serde_yaml::from_str(&f);
    if let Err(err) = data {
        bail!(err);
    }
    let data: Value = data.unwrap();

    let mut settings = Settings::default();
    let mapping = match data {
        // an empty file keeps every default
        Value::Null => return Ok(settings),
        Value::Mapping(mapping) => mapping,
        _ => bail!(ParsingErr::InvalidType {
            field: "<document>".to_string(),
            section: "config".to_string(),
            expected: TYPE_HINT_MAPPING,
        }),
    };

    for (key, value) in &mapping {
        let section = field_name(key, "config")?;
        match section {
            "window" => parse_window(value, &mut settings)?,
            "physics" => parse_physics(value, &mut settings)?,
            "input" => parse_input(value, &mut settings)?,
            "render" => parse_render(value, &mut settings)?,
            other => bail!(ParsingErr::NotRecognized {
                field: other.to_string(),
                section: "config".to_string(),
            }),
        };
    }

    Ok(settings)
}


fn parse_window(value: &Value, settings: &mut Settings) -> anyhow::Result<()> {
    for (key, value) in section_mapping(value, "window")? {
        let field = field_name(key, "window")?;
        match field {
            "width" => settings.window.width = parse_uint(value, field, "window")?,
            "height" => settings.window.height = parse_uint(value, field, "window")?,
            other => bail!(ParsingErr::NotRecognized {
                field: other.to_string(),
                section: "window".to_string(),
            }),
        };
    }
    Ok(())
}

fn parse_physics(value: &Value, settings: &mut Settings) -> anyhow::Result<()> {
    for (key, value) in section_mapping(value, "physics")? {
        let field = field_name(key, "physics")?;
        match field {
            "gravity" => settings.gravity = parse_vec2(value, field, "physics")?,
            other => bail!(ParsingErr::NotRecognized {
                field: other.to_string(),
                section: "physics".to_string(),
            }),
        };
    }
    Ok(())
}

fn parse_input(value: &Value, settings: &mut Settings) -> anyhow::Result<()> {
    for (key, value) in section_mapping(value, "input")? {
        let field = field_name(key, "input")?;
        match field {
            "events_per_frame" => settings.events_per_frame = parse_policy(value, field, "input")?,
            "continuous_thrust" => settings.continuous_thrust = parse_bool(value, field, "input")?,
            other => bail!(ParsingErr::NotRecognized {
                field: other.to_string(),
                section: "input".to_string(),
            }),
        };
    }
    Ok(())
}

fn parse_render(value: &Value, settings: &mut Settings) -> anyhow::Result<()> {
    for (key, value) in section_mapping(value, "render")? {
        let field = field_name(key, "render")?;
        match field {
            "pixels_per_unit" => settings.pixels_per_unit = parse_float(value, field, "render")?,
            other => bail!(ParsingErr::NotRecognized {
                field: other.to_string(),
                section: "render".to_string(),
            }),
        };
    }
    Ok(())
}


fn section_mapping<'a>(value: &'a Value, name: &str) -> anyhow::Result<&'a Mapping> {
    value.as_mapping().ok_or(anyhow!(ParsingErr::InvalidType {
        field: name.to_string(),
        section: "config".to_string(),
        expected: TYPE_HINT_MAPPING,
    }))
}

fn field_name<'a>(key: &'a Value, section: &str) -> anyhow::Result<&'a str> {
    key.as_str().ok_or(anyhow!(ParsingErr::InvalidType {
        field: format!("{:?}", key),
        section: section.to_string(),
        expected: TYPE_HINT_STRING,
    }))
}

fn parse_uint(value: &Value, field: &str, section: &str) -> anyhow::Result<u32> {
    value
        .as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .ok_or(anyhow!(ParsingErr::InvalidType {
            field: field.to_string(),
            section: section.to_string(),
            expected: TYPE_HINT_UINT,
        }))
}

fn parse_float(value: &Value, field: &str, section: &str) -> anyhow::Result<f32> {
    value
        .as_f64()
        .map(|v| v as f32)
        .ok_or(anyhow!(ParsingErr::InvalidType {
            field: field.to_string(),
            section: section.to_string(),
            expected: TYPE_HINT_FLOAT,
        }))
}

fn parse_bool(value: &Value, field: &str, section: &str) -> anyhow::Result<bool> {
    value.as_bool().ok_or(anyhow!(ParsingErr::InvalidType {
        field: field.to_string(),
        section: section.to_string(),
        expected: TYPE_HINT_BOOL,
    }))
}

fn parse_vec2(value: &Value, field: &str, section: &str) -> anyhow::Result<(f32, f32)> {
    let invalid = || ParsingErr::InvalidType {
        field: field.to_string(),
        section: section.to_string(),
        expected: TYPE_HINT_VEC2,
    };
    let seq = value.as_sequence().ok_or(anyhow!(invalid()))?;
    if seq.len() != 2 {
        bail!(invalid());
    }
    let x = seq[0].as_f64().ok_or(anyhow!(invalid()))? as f32;
    let y = seq[1].as_f64().ok_or(anyhow!(invalid()))? as f32;
    Ok((x, y))
}

fn parse_policy(value: &Value, field: &str, section: &str) -> anyhow::Result<EventPolicy> {
    let invalid = || ParsingErr::InvalidType {
        field: field.to_string(),
        section: section.to_string(),
        expected: TYPE_HINT_POLICY,
    };
    match value.as_str().ok_or(anyhow!(invalid()))? {
        "single" => Ok(EventPolicy::Single),
        "drain" => Ok(EventPolicy::Drain),
        _ => bail!(invalid()),
    }
}
