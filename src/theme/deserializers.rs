use gpui::{AbsoluteLength, DefiniteLength, Pixels, SharedString, px, rems};
use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

use super::ThemeVariant;

pub fn de_string_or_non_empty_list<'de, D>(
    deserializer: D,
) -> Result<SmallVec<[SharedString; 1]>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrVec {
        One(SharedString),
        Many(SmallVec<[SharedString; 1]>),
    }

    let value = StringOrVec::deserialize(deserializer)?;

    match value {
        StringOrVec::One(string) => Ok(SmallVec::from_buf([string])),
        StringOrVec::Many(vec) => {
            if vec.is_empty() {
                return Err(D::Error::custom("list can't be empty."));
            }

            Ok(vec)
        }
    }
}

pub fn de_variants<'de, D>(deserializer: D) -> Result<SmallVec<[ThemeVariant; 2]>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = SmallVec::deserialize(deserializer)?;

    if value.is_empty() {
        return Err(D::Error::custom(
            "at least one theme variant needs to be provided.",
        ));
    }

    Ok(value)
}

pub fn de_pixels<'de, D>(deserializer: D) -> Result<Pixels, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::String(string) => {
            let string = match string.strip_suffix("px") {
                Some(string) => string,
                None => return Err(D::Error::custom("expected string to end with 'px'")),
            };

            match string.parse::<f32>() {
                Ok(pixels) => Ok(px(pixels)),
                Err(_) => Err(D::Error::custom("could not convert string into pixels")),
            }
        }

        StringOrFloat::Float(pixels) => Ok(px(pixels)),
    }
}

pub fn de_abs_length<'de, D>(deserializer: D) -> Result<AbsoluteLength, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::Float(num) => return Ok(AbsoluteLength::Pixels(px(num))),

        StringOrFloat::String(string) => {
            if let Some(string) = string.strip_suffix("rem")
                && let Ok(value) = string.parse::<f32>()
            {
                return Ok(AbsoluteLength::Rems(rems(value)));
            } else if let Some(string) = string.strip_suffix("px")
                && let Ok(value) = string.parse::<f32>()
            {
                return Ok(AbsoluteLength::Pixels(px(value)));
            }
        }
    }

    Err(serde::de::Error::custom(
        "expected f32 or string containing a f32 ending with 'rem' or 'px'",
    ))
}

pub fn de_def_length<'de, D>(deserializer: D) -> Result<DefiniteLength, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::Float(num) => {
            return Ok(DefiniteLength::Absolute(AbsoluteLength::Pixels(px(num))));
        }

        StringOrFloat::String(string) => {
            if let Some(string) = string.strip_suffix("%")
                && let Ok(value) = string.parse::<f32>()
            {
                return Ok(DefiniteLength::Fraction(value / 100.));
            }

            if let Some(string) = string.strip_suffix("rem")
                && let Ok(value) = string.parse::<f32>()
            {
                return Ok(DefiniteLength::Absolute(AbsoluteLength::Rems(rems(value))));
            } else if let Some(string) = string.strip_suffix("px")
                && let Ok(value) = string.parse::<f32>()
            {
                return Ok(DefiniteLength::Absolute(AbsoluteLength::Pixels(px(value))));
            }
        }
    }

    Err(serde::de::Error::custom(
        "expected f32 or string containing a f32 ending with 'rem' or 'px'",
    ))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Lengths {
        #[serde(deserialize_with = "de_pixels")]
        pixels: gpui::Pixels,
        #[serde(deserialize_with = "de_abs_length")]
        absolute: AbsoluteLength,
        #[serde(deserialize_with = "de_def_length")]
        definite: DefiniteLength,
    }

    #[test]
    fn test_parses_suffixed_strings() {
        let lengths: Lengths = serde_json::from_str(
            r#"{ "pixels": "1024px", "absolute": "0.875rem", "definite": "150%" }"#,
        )
        .unwrap();

        assert_eq!(lengths.pixels, px(1024.));
        assert!(matches!(lengths.absolute, AbsoluteLength::Rems(r) if r.0 == 0.875));
        assert!(matches!(lengths.definite, DefiniteLength::Fraction(f) if f == 1.5));
    }

    #[test]
    fn test_parses_bare_numbers_as_pixels() {
        let lengths: Lengths =
            serde_json::from_str(r#"{ "pixels": 8, "absolute": 14, "definite": 20 }"#).unwrap();

        assert_eq!(lengths.pixels, px(8.));
        assert!(matches!(lengths.absolute, AbsoluteLength::Pixels(p) if p == px(14.)));
        assert!(matches!(
            lengths.definite,
            DefiniteLength::Absolute(AbsoluteLength::Pixels(p)) if p == px(20.)
        ));
    }

    #[test]
    fn test_rejects_pixels_without_suffix() {
        let result = serde_json::from_str::<Lengths>(
            r#"{ "pixels": "1024", "absolute": 14, "definite": 20 }"#,
        );

        assert!(result.is_err());
    }
}
