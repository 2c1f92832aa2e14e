// Copyright 2025 the Snapdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static allow-lists used by the default [`CloneOptions`](crate::CloneOptions).

/// Attributes copied from non-SVG elements.
pub const HTML_ATTRIBUTES: &[&str] = &["width", "height", "src", "placeholder"];

/// Tag names created in the SVG namespace.
///
/// Names are matched case-sensitively, as hosts report SVG tag names in their
/// original case (`linearGradient`) while HTML tag names are commonly uppercased.
pub const SVG_TAG_NAMES: &[&str] = &[
    "a",
    "animate",
    "animateMotion",
    "animateTransform",
    "circle",
    "clipPath",
    "defs",
    "desc",
    "ellipse",
    "feBlend",
    "feColorMatrix",
    "feComponentTransfer",
    "feComposite",
    "feConvolveMatrix",
    "feDiffuseLighting",
    "feDisplacementMap",
    "feDistantLight",
    "feDropShadow",
    "feFlood",
    "feFuncA",
    "feFuncB",
    "feFuncG",
    "feFuncR",
    "feGaussianBlur",
    "feImage",
    "feMerge",
    "feMergeNode",
    "feMorphology",
    "feOffset",
    "fePointLight",
    "feSpecularLighting",
    "feSpotLight",
    "feTile",
    "feTurbulence",
    "filter",
    "foreignObject",
    "g",
    "image",
    "line",
    "linearGradient",
    "marker",
    "mask",
    "metadata",
    "mpath",
    "path",
    "pattern",
    "polygon",
    "polyline",
    "radialGradient",
    "rect",
    "set",
    "stop",
    "svg",
    "switch",
    "symbol",
    "text",
    "textPath",
    "tspan",
    "use",
    "view",
];

/// Attributes copied from SVG elements.
///
/// Geometry and presentation attributes only; ids, event handlers, and
/// `class` are left behind.
pub const SVG_ATTRIBUTES: &[&str] = &[
    "xmlns",
    "viewBox",
    "preserveAspectRatio",
    "width",
    "height",
    "x",
    "y",
    "x1",
    "x2",
    "y1",
    "y2",
    "cx",
    "cy",
    "r",
    "rx",
    "ry",
    "dx",
    "dy",
    "d",
    "points",
    "transform",
    "fill",
    "fill-opacity",
    "fill-rule",
    "clip-rule",
    "stroke",
    "stroke-width",
    "stroke-linecap",
    "stroke-linejoin",
    "stroke-miterlimit",
    "stroke-dasharray",
    "stroke-dashoffset",
    "stroke-opacity",
    "opacity",
    "offset",
    "stop-color",
    "stop-opacity",
    "gradientUnits",
    "gradientTransform",
    "href",
    "xlink:href",
    "text-anchor",
    "dominant-baseline",
    "font-family",
    "font-size",
    "font-weight",
];

/// Returns `true` for icon-font class names: `fa` and `fa-<something>`.
///
/// Equivalent to the pattern `^fa(-.+)?$`.
pub fn is_icon_class(class: &str) -> bool {
    match class.strip_prefix("fa") {
        Some("") => true,
        Some(rest) => rest.len() > 1 && rest.starts_with('-'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_class_pattern() {
        assert!(is_icon_class("fa"));
        assert!(is_icon_class("fa-star"));
        assert!(is_icon_class("fa-2x"));
        assert!(!is_icon_class("fa-"));
        assert!(!is_icon_class("fab"));
        assert!(!is_icon_class("icon-fa"));
        assert!(!is_icon_class(""));
    }
}
