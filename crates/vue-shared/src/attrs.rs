//! Attribute knowledge shared by compile time and render time.

/// Check if `attr` on `tag` has to be set as a DOM property rather than an
/// attribute.
pub fn must_use_prop(tag: &str, input_type: Option<&str>, attr: &str) -> bool {
    let accept_value = matches!(tag, "input" | "textarea" | "option" | "select" | "progress");
    (attr == "value" && accept_value && input_type != Some("button"))
        || (attr == "selected" && tag == "option")
        || (attr == "checked" && tag == "input")
        || (attr == "muted" && tag == "video")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_must_use_prop() {
        assert!(must_use_prop("input", None, "value"));
        assert!(!must_use_prop("input", Some("button"), "value"));
        assert!(must_use_prop("input", Some("checkbox"), "checked"));
        assert!(must_use_prop("option", None, "selected"));
        assert!(must_use_prop("video", None, "muted"));
        assert!(!must_use_prop("div", None, "value"));
    }
}
