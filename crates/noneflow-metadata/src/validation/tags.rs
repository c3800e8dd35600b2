//! Tag list validation.
//!
//! Rules are applied in order: JSON decoding, tag count, then label and
//! color of every tag. A decoding or count failure stops the tag checks;
//! label and color are checked independently for each tag.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::common::validate_length;
use super::{ValidationResult, Violation};
use crate::error::ValidationError;
use crate::types::tag::{Tag, MAX_LABEL_CHARS, MAX_TAGS};

/// `#RRGGBB`, either case.
static HEX_COLOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid regex"));

const FIELD: &str = "tags";

/// Returns `true` if `color` is a 6-digit hex color with a leading `#`.
pub fn is_hex_color(color: &str) -> bool {
    HEX_COLOR_REGEX.is_match(color)
}

/// Validates a JSON-encoded tag list and returns the decoded tags.
pub fn validate_tags(raw: &str) -> Result<Vec<Tag>, ValidationError> {
    let mut result = ValidationResult::new();
    let tags = check_tags(raw, &mut result);
    result.into_result(tags.unwrap_or_default())
}

/// Checks a JSON-encoded tag list, recording violations into `result`.
///
/// Returns the decoded tags when the text decodes and the count is within
/// limits, even if individual tags were rejected.
pub fn check_tags(raw: &str, result: &mut ValidationResult) -> Option<Vec<Tag>> {
    let tags: Vec<Tag> = match serde_json::from_str(raw) {
        Ok(tags) => tags,
        Err(e) => {
            debug!(error = %e, "tags are not a JSON tag list");
            result.add(FIELD, Violation::TagsFormat);
            return None;
        }
    };

    if tags.len() > MAX_TAGS {
        debug!(count = tags.len(), max = MAX_TAGS, "too many tags");
        result.add(FIELD, Violation::TagCount { count: tags.len() });
        return None;
    }

    for (index, tag) in tags.iter().enumerate() {
        if !validate_length(&tag.label, MAX_LABEL_CHARS) {
            debug!(index, label = %tag.label, "tag label too long");
            result.add(
                format!("{}[{}].label", FIELD, index),
                Violation::TagLabelLength {
                    index,
                    label: tag.label.clone(),
                },
            );
        }

        if !is_hex_color(&tag.color) {
            debug!(index, color = %tag.color, "tag color is not a hex color");
            result.add(
                format!("{}[{}].color", FIELD, index),
                Violation::TagColorFormat {
                    index,
                    color: tag.color.clone(),
                },
            );
        }
    }

    Some(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags_json(tags: &[(&str, &str)]) -> String {
        let tags: Vec<Tag> = tags.iter().map(|(l, c)| Tag::new(*l, *c)).collect();
        serde_json::to_string(&tags).unwrap()
    }

    #[test]
    fn test_valid_tags() {
        let tags = validate_tags(&tags_json(&[("test", "#ffffff")])).unwrap();
        assert_eq!(tags, vec![Tag::new("test", "#ffffff")]);

        let tags = validate_tags(&tags_json(&[
            ("1", "#ffffff"),
            ("1234567890", "#ABCDEF"),
            ("三", "#a1B2c3"),
        ]))
        .unwrap();
        assert_eq!(tags.len(), 3);
    }

    #[test]
    fn test_empty_list_is_valid() {
        assert!(validate_tags("[]").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_json() {
        let raw = tags_json(&[("1", "#ffffff")]) + "1";
        let err = validate_tags(&raw).unwrap_err();
        assert!(err.to_string().contains("标签不符合 JSON 格式"));
        assert_eq!(err.len(), 1);
    }

    #[test]
    fn test_wrong_shape_is_format_error() {
        for raw in [
            r##"{"label": "a", "color": "#ffffff"}"##,
            r#"["a", "b"]"#,
            r#"[{"label": "a"}]"#,
            r##"[{"label": 1, "color": "#ffffff"}]"##,
            "null",
            "",
        ] {
            let err = validate_tags(raw).unwrap_err();
            assert_eq!(err.first().unwrap().violation, Violation::TagsFormat, "{raw}");
        }
    }

    #[test]
    fn test_too_many_tags() {
        let raw = tags_json(&[
            ("1", "#ffffff"),
            ("2", "#ffffff"),
            ("3", "#ffffff"),
            ("4", "#ffffff"),
        ]);
        let err = validate_tags(&raw).unwrap_err();
        assert!(err.to_string().contains("标签数量不能超过 3 个"));
    }

    #[test]
    fn test_count_wins_over_tag_content() {
        let raw = tags_json(&[
            ("12345678901", "#fff"),
            ("2", "#ffffff"),
            ("3", "#ffffff"),
            ("4", "#ffffff"),
        ]);
        let err = validate_tags(&raw).unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(
            err.first().unwrap().violation,
            Violation::TagCount { count: 4 }
        );
    }

    #[test]
    fn test_label_too_long() {
        let err = validate_tags(&tags_json(&[("12345678901", "#adbcde")])).unwrap_err();
        assert!(err.to_string().contains("标签名称不能超过 10 个字符"));
        assert_eq!(err.first().unwrap().field, "tags[0].label");
    }

    #[test]
    fn test_label_length_counts_characters() {
        assert!(validate_tags(&tags_json(&[("适配器适配器适配器适", "#ffffff")])).is_ok());

        let err = validate_tags(&tags_json(&[("适配器适配器适配器适配", "#ffffff")])).unwrap_err();
        assert_eq!(err.messages_for("tags[0].label"), vec!["标签名称不能超过 10 个字符"]);
    }

    #[test]
    fn test_color_invalid() {
        for color in ["#adbcdef", "#fff", "ffffff", "#gggggg", "#ffffff "] {
            let err = validate_tags(&tags_json(&[("test", color)])).unwrap_err();
            assert!(
                err.to_string().contains("标签颜色不符合十六进制颜色码规则"),
                "{color}"
            );
        }
    }

    #[test]
    fn test_label_and_color_reported_independently() {
        let raw = tags_json(&[("ok", "#ffffff"), ("12345678901", "#adbcdef")]);
        let err = validate_tags(&raw).unwrap_err();
        assert_eq!(err.len(), 2);
        assert_eq!(err.messages_for("tags[1].label"), vec!["标签名称不能超过 10 个字符"]);
        assert_eq!(
            err.messages_for("tags[1].color"),
            vec!["标签颜色不符合十六进制颜色码规则"]
        );
        assert!(err.messages_for("tags[0].label").is_empty());
    }

    #[test]
    fn test_validation_is_repeatable() {
        let raw = tags_json(&[("12345678901", "#ffffff")]);
        assert_eq!(validate_tags(&raw), validate_tags(&raw));

        let raw = tags_json(&[("test", "#ffffff")]);
        assert_eq!(validate_tags(&raw).unwrap(), validate_tags(&raw).unwrap());
    }
}
