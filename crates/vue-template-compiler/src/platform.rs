//! Web platform knowledge: reserved and built-in tags.

pub use vue_shared::must_use_prop;

/// Check if a tag is handled by the compiler itself.
pub fn is_builtin_tag(tag: &str) -> bool {
    matches!(tag, "slot" | "component")
}

/// Check if a tag is a native HTML or SVG element.
pub fn is_reserved_tag(tag: &str) -> bool {
    is_html_tag(tag) || is_svg_tag(tag)
}

/// Check if a tag is an HTML element.
pub fn is_html_tag(tag: &str) -> bool {
    HTML_TAGS.contains(&tag)
}

/// Check if a tag is an SVG element.
pub fn is_svg_tag(tag: &str) -> bool {
    SVG_TAGS.contains(&tag)
}

/// HTML tags.
const HTML_TAGS: &[&str] = &[
    "a", "abbr", "address", "area", "article", "aside", "audio", "b", "base", "bdi", "bdo",
    "blockquote", "body", "br", "button", "canvas", "caption", "cite", "code", "col", "colgroup",
    "data", "datalist", "dd", "del", "details", "dfn", "dialog", "div", "dl", "dt", "em", "embed",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "head", "header", "hgroup", "hr", "html", "i", "iframe", "img", "input", "ins", "kbd", "label",
    "legend", "li", "link", "main", "map", "mark", "menu", "menuitem", "meta", "meter", "nav",
    "noscript", "object", "ol", "optgroup", "option", "output", "p", "param", "picture", "pre",
    "progress", "q", "rp", "rt", "rtc", "ruby", "s", "samp", "script", "section", "select",
    "small", "source", "span", "strong", "style", "sub", "summary", "sup", "table", "tbody", "td",
    "template", "textarea", "tfoot", "th", "thead", "time", "title", "tr", "track", "u", "ul",
    "var", "video", "wbr",
];

/// SVG tags.
const SVG_TAGS: &[&str] = &[
    "svg", "animate", "circle", "clipPath", "cursor", "defs", "desc", "ellipse", "filter",
    "font-face", "foreignObject", "g", "glyph", "image", "line", "marker", "mask",
    "missing-glyph", "path", "pattern", "polygon", "polyline", "rect", "switch", "symbol",
    "text", "textPath", "tspan", "use", "view",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_tags() {
        assert!(is_reserved_tag("div"));
        assert!(is_reserved_tag("circle"));
        assert!(!is_reserved_tag("my-component"));
        assert!(is_builtin_tag("slot"));
    }
}
