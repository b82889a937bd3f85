//! SVG markup generation.
//!
//! Rows append self-closing elements to an [`SvgSink`]; the batch driver
//! wraps the collected fragment in an `<svg>` document. Elements carry the
//! row label both as a human-readable `name` attribute and, with a
//! uniquifying suffix, as the element `id`.

use glam::DVec2;

use crate::types::Rgb;

/// Source of uniquifying suffixes for SVG element ids.
///
/// Ids come from the row label, which is not unique across rows, so a
/// suffix is appended. Production uses random suffixes; tests inject the
/// deterministic counter instead.
#[derive(Debug)]
pub enum IdSource {
    /// Monotonic counter starting at the given value.
    Sequential(u64),
    /// Random suffixes from the thread-local generator.
    Random,
}

impl IdSource {
    fn next(&mut self) -> u64 {
        match self {
            IdSource::Sequential(n) => {
                *n += 1;
                *n
            }
            IdSource::Random => u64::from(rand::random::<u32>()),
        }
    }
}

impl Default for IdSource {
    fn default() -> Self {
        IdSource::Random
    }
}

/// An appendable SVG fragment plus the id source shared by its rows.
#[derive(Debug)]
pub struct SvgSink {
    out: String,
    ids: IdSource,
}

impl SvgSink {
    /// A sink with random element ids.
    pub fn new() -> Self {
        SvgSink::with_ids(IdSource::default())
    }

    pub fn with_ids(ids: IdSource) -> Self {
        SvgSink {
            out: String::new(),
            ids,
        }
    }

    /// The fragment accumulated so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }

    /// `label` plus the next uniquifying suffix.
    pub fn unique_id(&mut self, label: &str) -> String {
        format!("{}{}", label.trim(), self.ids.next())
    }

    /// Append one self-closing element with the given attributes, in order.
    pub fn element(&mut self, name: &str, attrs: &[(&str, String)]) {
        self.out.push('<');
        self.out.push_str(name);
        for (key, value) in attrs {
            self.out.push(' ');
            self.out.push_str(key);
            self.out.push_str("=\"");
            push_escaped(&mut self.out, value);
            self.out.push('"');
        }
        self.out.push_str("/>");
    }
}

impl Default for SvgSink {
    fn default() -> Self {
        SvgSink::new()
    }
}

/// Identification and style attributes shared by every row element.
///
/// `name` is omitted for unlabeled rows; `id` is always present.
pub(crate) fn row_attrs(
    sink: &mut SvgSink,
    label: &str,
    css_class: &str,
) -> Vec<(&'static str, String)> {
    let label = label.trim();
    let mut attrs = Vec::new();
    if !label.is_empty() {
        attrs.push(("name", label.to_string()));
    }
    attrs.push(("id", sink.unique_id(label)));
    attrs.push(("class", format!("{css_class} vector")));
    attrs
}

/// `points` attribute text for polyline-style elements.
pub(crate) fn points_attr(points: &[DVec2]) -> String {
    let mut out = String::new();
    for p in points {
        out.push_str(&fmt_num(p.x));
        out.push(',');
        out.push_str(&fmt_num(p.y));
        out.push(' ');
    }
    out
}

/// Path data for ring sequences: each ring a closed `M .. L .. Z` subpath.
pub(crate) fn rings_path_data(rings: &[Vec<DVec2>]) -> String {
    let mut d = String::new();
    for ring in rings {
        for (i, p) in ring.iter().enumerate() {
            if i == 0 {
                d.push_str("M ");
            } else {
                d.push_str("L ");
            }
            d.push_str(&fmt_num(p.x));
            d.push(' ');
            d.push_str(&fmt_num(p.y));
            d.push(' ');
        }
        d.push_str("Z ");
    }
    d.trim_end().to_string()
}

/// Append a stroked marker circle for a point-style row.
pub(crate) fn marker_circle(
    sink: &mut SvgSink,
    center: DVec2,
    label: &str,
    color: Rgb,
    css_class: &str,
) {
    let mut attrs = vec![
        ("cx", fmt_num(center.x)),
        ("cy", fmt_num(center.y)),
        ("r", "3".to_string()),
    ];
    attrs.extend(row_attrs(sink, label, css_class));
    attrs.push(("fill", "white".to_string()));
    attrs.push(("stroke", color.to_string()));
    attrs.push(("stroke-width", "2".to_string()));
    sink.element("circle", &attrs);
}

/// Escape an attribute value: `&`, `<`, `>` and `"` only.
fn push_escaped(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

/// Format a number matching C's %g format (6 significant figures, trailing
/// zeros trimmed), so pixel coordinates read as `30`, not `30.000`.
pub(crate) fn fmt_num(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let sig_figs = 6;
    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn fmt_num_trims_like_percent_g() {
        assert_eq!(fmt_num(30.0), "30");
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(-2.5), "-2.5");
        assert_eq!(fmt_num(1.0 / 3.0), "0.333333");
    }

    #[test]
    fn element_preserves_attribute_order() {
        let mut sink = SvgSink::with_ids(IdSource::Sequential(0));
        sink.element("circle", &[("cx", "1".into()), ("cy", "2".into())]);
        assert_eq!(sink.as_str(), r#"<circle cx="1" cy="2"/>"#);
    }

    #[test]
    fn attribute_values_are_escaped() {
        let mut sink = SvgSink::new();
        sink.element("circle", &[("name", r#"a<b>&"c""#.into())]);
        assert_eq!(
            sink.as_str(),
            r#"<circle name="a&lt;b&gt;&amp;&quot;c&quot;"/>"#
        );
    }

    #[test]
    fn sequential_ids_are_deterministic() {
        let mut sink = SvgSink::with_ids(IdSource::Sequential(0));
        assert_eq!(sink.unique_id("A"), "A1");
        assert_eq!(sink.unique_id("A"), "A2");
    }

    #[test]
    fn marker_circle_layout() {
        let mut sink = SvgSink::with_ids(IdSource::Sequential(0));
        marker_circle(&mut sink, dvec2(30.0, 40.0), "A", Rgb { r: 255, g: 0, b: 0 }, "point");
        assert_eq!(
            sink.as_str(),
            r##"<circle cx="30" cy="40" r="3" name="A" id="A1" class="point vector" fill="white" stroke="#FF0000" stroke-width="2"/>"##
        );
    }

    #[test]
    fn rings_path_data_closes_each_ring() {
        let d = rings_path_data(&[vec![dvec2(0.0, 0.0), dvec2(10.0, 0.0), dvec2(10.0, 10.0)]]);
        assert_eq!(d, "M 0 0 L 10 0 L 10 10 Z");
    }
}
